use crate::{
    api::{ApiClient, ApiError, LoginRequest},
    pages::login::repository::LoginRepository,
    utils::{cookie, jwt, time},
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

/// The signed-in user as far as the token claims tell us.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub roles: Vec<String>,
    pub is_admin: bool,
}

impl CurrentUser {
    pub fn from_claims(claims: &jwt::TokenClaims) -> Self {
        Self {
            id: claims.sub.clone().unwrap_or_default(),
            email: claims.email.clone().unwrap_or_default(),
            name: claims.name.clone().unwrap_or_default(),
            roles: claims.role.clone(),
            is_admin: claims.is_admin(),
        }
    }

    pub fn display_name(&self) -> &str {
        if !self.name.trim().is_empty() {
            &self.name
        } else if !self.email.is_empty() {
            &self.email
        } else {
            "Guest"
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<CurrentUser>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn signed_in(user: CurrentUser) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            loading: false,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.is_authenticated && self.user.as_ref().map(|u| u.is_admin).unwrap_or(false)
    }
}

/// Reads the cookie token; unreadable or expired tokens are dropped.
pub fn restore_session(now_ts: i64) -> Option<CurrentUser> {
    let token = cookie::read_token()?;
    match jwt::decode_claims(&token) {
        Ok(claims) if !claims.is_expired(now_ts) => Some(CurrentUser::from_claims(&claims)),
        Ok(_) => {
            log::info!("session token expired, clearing cookie");
            cookie::clear_token();
            None
        }
        Err(err) => {
            log::warn!("discarding unreadable session token: {}", err);
            cookie::clear_token();
            None
        }
    }
}

fn create_auth_context() -> AuthContext {
    let initial = restore_session(time::now_timestamp())
        .map(AuthState::signed_in)
        .unwrap_or_default();
    create_signal(initial)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<CurrentUser, ApiError> {
    set_auth_state.update(|state| state.loading = true);

    let result = repo.login(request).await.and_then(|response| {
        jwt::decode_claims(&response.token)
            .map(|claims| CurrentUser::from_claims(&claims))
            .map_err(|e| ApiError::unknown(format!("Received an unreadable session token: {}", e)))
    });

    match result {
        Ok(user) => {
            log::info!("signed in as {}", user.email);
            set_auth_state.set(AuthState::signed_in(user.clone()));
            Ok(user)
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub fn logout(repo: &LoginRepository, set_auth_state: WriteSignal<AuthState>) {
    repo.logout();
    set_auth_state.set(AuthState::default());
}

fn repository() -> LoginRepository {
    let api = use_context::<ApiClient>().unwrap_or_default();
    LoginRepository::new_with_client(std::rc::Rc::new(api))
}

pub fn use_login_action() -> Action<LoginRequest, Result<CurrentUser, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let repo = repository();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), ()> {
    let (_auth, set_auth) = use_auth();
    let repo = repository();

    create_action(move |_: &()| {
        let repo = repo.clone();
        async move {
            logout(&repo, set_auth);
            crate::utils::navigation::redirect("/");
        }
    })
}
