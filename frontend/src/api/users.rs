use super::{
    client::ApiClient,
    types::{ApiError, UpdateUserRole, User},
};

impl ApiClient {
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/Users").await
    }

    pub async fn update_user_role(&self, id: &str, role: &str) -> Result<(), ApiError> {
        let role = role.trim();
        if role.is_empty() {
            return Err(ApiError::validation("A role is required."));
        }
        self.put_empty(
            &format!("/Users/{}/role", id),
            &UpdateUserRole {
                role: role.to_string(),
            },
        )
        .await
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/Users/{}", id)).await
    }
}
