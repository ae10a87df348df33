use crate::api::{ApiClient, ApiError, MessageResponse, ResetPasswordRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct ResetPasswordRepository {
    client: Rc<ApiClient>,
}

impl ResetPasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn reset_password(
        &self,
        request: ResetPasswordRequest,
    ) -> Result<MessageResponse, ApiError> {
        self.client.reset_password(&request).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn repository(server: &MockServer) -> ResetPasswordRepository {
        ResetPasswordRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.base_url(),
        )))
    }

    fn request() -> ResetPasswordRequest {
        ResetPasswordRequest {
            email: "guest@example.com".into(),
            token: "reset-token".into(),
            new_password: "NewSecret1".into(),
        }
    }

    #[tokio::test]
    async fn reset_password_sends_email_token_and_password() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/Auths/reset-password").json_body(json!({
                    "email": "guest@example.com",
                    "token": "reset-token",
                    "newPassword": "NewSecret1"
                }));
                then.status(200).json_body(json!({ "message": "Password has been reset." }));
            })
            .await;

        let response = repository(&server).reset_password(request()).await.unwrap();
        mock.assert_async().await;
        assert_eq!(response.message, "Password has been reset.");
    }

    #[tokio::test]
    async fn reset_password_propagates_identity_errors() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/Auths/reset-password");
                then.status(400).json_body(json!({
                    "errors": [{ "code": "InvalidToken", "description": "Invalid token." }]
                }));
            })
            .await;

        let error = repository(&server)
            .reset_password(request())
            .await
            .expect_err("should fail");
        assert_eq!(error.code, "VALIDATION_ERROR");
    }
}
