//! Admin user-management endpoints.
//!
//! The backend returns the full user list as a bare array; role filtering
//! and paging happen client-side, exactly like the original admin screen.

use reqwest::Method;

use atlas_shared::types::pagination::{Page, PageRequest};
use atlas_shared::types::user::{UpdateUserRequest, User};
use atlas_shared::{ApiResult, Role};

use crate::http::ApiClient;
use crate::operations::ListPayload;

impl ApiClient {
    /// `GET /admin/users`, optionally filtered by role, paged client-side.
    pub async fn list_users(
        &self,
        page: PageRequest,
        role: Option<Role>,
    ) -> ApiResult<Page<User>> {
        let payload: ListPayload<User> = self
            .send_json(self.request(Method::GET, "/admin/users"))
            .await?;
        let filtered: Vec<User> = payload
            .into_items()
            .into_iter()
            .filter(|user| role.is_none_or(|r| user.role == r))
            .collect();
        Ok(Page::from_full_list(filtered, page))
    }

    /// `GET /admin/users/{id}`.
    pub async fn get_user(&self, id: i64) -> ApiResult<User> {
        self.send_json(self.request(Method::GET, &format!("/admin/users/{id}")))
            .await
    }

    /// `PUT /admin/users/{id}`.
    pub async fn update_user(&self, id: i64, update: &UpdateUserRequest) -> ApiResult<User> {
        self.send_json(
            self.request(Method::PUT, &format!("/admin/users/{id}"))
                .json(update),
        )
        .await
    }

    /// `PUT /admin/users/{id}/toggle-status`.
    pub async fn toggle_user_status(&self, id: i64) -> ApiResult<()> {
        self.send_empty(self.request(Method::PUT, &format!("/admin/users/{id}/toggle-status")))
            .await
    }

    /// `DELETE /admin/users/{id}`.
    pub async fn delete_user(&self, id: i64) -> ApiResult<()> {
        self.send_empty(self.request(Method::DELETE, &format!("/admin/users/{id}")))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_users_envelope_alias() {
        let json = r#"{"users":[{
            "id": 3,
            "fullName": "Sara L",
            "email": "s@bank.ma",
            "role": "AGENT",
            "status": "ACTIVE",
            "createdAt": "2026-01-10T12:00:00Z"
        }],"totalCount":1}"#;
        let payload: ListPayload<User> = serde_json::from_str(json).unwrap();
        let users = payload.into_items();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].role, Role::Agent);
    }
}
