use super::{
    client::ApiClient,
    types::{
        ApiError, ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse,
        RegisterRequest, ResetPasswordRequest,
    },
};
use crate::utils::{cookie, jwt, time};

/// Writes the session cookie, expiring it together with the token when the
/// token carries an `exp` claim.
pub(crate) fn persist_session(token: &str) -> Result<jwt::TokenClaims, ApiError> {
    let claims = jwt::decode_claims(token)
        .map_err(|e| ApiError::unknown(format!("Received an unreadable session token: {}", e)))?;
    let max_age = claims.seconds_until_expiry(time::now_timestamp());
    cookie::write_token(token, max_age);
    Ok(claims)
}

impl ApiClient {
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = self.post_json("/Auths/login", request).await?;
        if response.token.trim().is_empty() {
            return Err(ApiError::unknown("The server did not return a session token."));
        }
        persist_session(&response.token)?;
        Ok(response)
    }

    pub fn logout(&self) {
        cookie::clear_token();
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<MessageResponse, ApiError> {
        let url = self.url("/Auths/register").await;
        let response = self.send(self.http_client().post(url).json(request)).await?;
        self.map_message_response(response).await
    }

    pub async fn confirm_email(
        &self,
        user_id: &str,
        token: &str,
    ) -> Result<MessageResponse, ApiError> {
        let url = self.url("/Auths/confirm-email").await;
        let request = self
            .http_client()
            .get(url)
            .query(&[("userId", user_id), ("token", token)]);
        let response = self.send(request).await?;
        self.map_message_response(response).await
    }

    pub async fn forgot_password(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        let url = self.url("/Auths/forgot-password").await;
        let response = self.send(self.http_client().post(url).json(request)).await?;
        self.map_message_response(response).await
    }

    pub async fn reset_password(
        &self,
        request: &ResetPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        let url = self.url("/Auths/reset-password").await;
        let response = self.send(self.http_client().post(url).json(request)).await?;
        self.map_message_response(response).await
    }

    /// These endpoints answer with `{message}`, a bare string or nothing.
    async fn map_message_response(
        &self,
        response: reqwest::Response,
    ) -> Result<MessageResponse, ApiError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        if !status.is_success() {
            return Err(ApiError::from_response(status.as_u16(), &body));
        }
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Ok(MessageResponse::default());
        }
        Ok(serde_json::from_str::<MessageResponse>(trimmed)
            .or_else(|_| serde_json::from_str::<String>(trimmed).map(|message| MessageResponse { message }))
            .unwrap_or_else(|_| MessageResponse {
                message: trimmed.to_string(),
            }))
    }
}
