//! Operation endpoints and list-shape normalization.

use reqwest::Method;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::json;

use atlas_core::workflow::repository::OperationRepository;
use atlas_core::workflow::types::{
    DocumentUpload, Operation, OperationId, OperationRequest, OperationResponse,
};
use atlas_shared::types::pagination::{Page, PageRequest};
use atlas_shared::{ApiError, ApiResult};

use crate::http::ApiClient;

/// A list response as the backend actually sends it.
///
/// Some endpoints return a bare array, others a counted envelope (with
/// Spring-style `content`/`totalElements` spellings). This is the single
/// place that knows about the difference.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ListPayload<T> {
    /// Counted envelope, already paged server-side.
    Envelope {
        /// The items of the requested page.
        #[serde(alias = "content", alias = "users")]
        operations: Vec<T>,
        /// Total count across all pages.
        #[serde(alias = "totalElements", rename = "totalCount")]
        total_count: u64,
    },
    /// The whole collection as a bare array; paged client-side.
    Bare(Vec<T>),
}

impl<T> ListPayload<T> {
    /// Returns every item the payload carried, whatever the shape.
    pub(crate) fn into_items(self) -> Vec<T> {
        match self {
            Self::Envelope { operations, .. } | Self::Bare(operations) => operations,
        }
    }

    /// Normalizes into one `Page<T>` representation.
    pub(crate) fn into_page(self, request: PageRequest) -> Page<T> {
        match self {
            Self::Envelope {
                operations,
                total_count,
            } => Page::from_envelope(operations, total_count, request),
            Self::Bare(all) => Page::from_full_list(all, request),
        }
    }
}

impl OperationRepository for ApiClient {
    /// `POST /client/operations`.
    async fn create(&self, request: &OperationRequest) -> ApiResult<OperationResponse> {
        self.send_json(
            self.request(Method::POST, "/client/operations")
                .json(request),
        )
        .await
    }

    /// `GET /client/operations`, normalized.
    async fn list_own(&self, page: PageRequest) -> ApiResult<Page<Operation>> {
        let payload: ListPayload<Operation> = self
            .send_json(self.request(Method::GET, "/client/operations"))
            .await?;
        Ok(payload.into_page(page))
    }

    /// `GET /agent/operations/pending`, normalized.
    async fn list_pending(&self, page: PageRequest) -> ApiResult<Page<Operation>> {
        let payload: ListPayload<Operation> = self
            .send_json(self.request(Method::GET, "/agent/operations/pending"))
            .await?;
        Ok(payload.into_page(page))
    }

    /// `GET /client/operations/{id}`.
    async fn get(&self, id: &OperationId) -> ApiResult<Operation> {
        self.send_json(self.request(Method::GET, &format!("/client/operations/{id}")))
            .await
    }

    /// `POST /client/operations/{id}/document` (multipart).
    async fn attach_document(&self, id: &OperationId, file: &DocumentUpload) -> ApiResult<()> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(&file.content_type)
            .map_err(|err| {
                ApiError::Unavailable(format!("invalid document content type: {err}"))
            })?;
        let form = Form::new().part("file", part);
        self.send_empty(
            self.request(Method::POST, &format!("/client/operations/{id}/document"))
                .multipart(form),
        )
        .await
    }

    /// `PUT /agent/operations/{id}/approve`.
    async fn approve(
        &self,
        id: &OperationId,
        comment: Option<&str>,
    ) -> ApiResult<OperationResponse> {
        self.send_json(
            self.request(Method::PUT, &format!("/agent/operations/{id}/approve"))
                .json(&json!({ "comment": comment.unwrap_or("") })),
        )
        .await
    }

    /// `PUT /agent/operations/{id}/reject`.
    async fn reject(&self, id: &OperationId, reason: &str) -> ApiResult<OperationResponse> {
        self.send_json(
            self.request(Method::PUT, &format!("/agent/operations/{id}/reject"))
                .json(&json!({ "reason": reason })),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_array_is_paged_client_side() {
        let payload: ListPayload<i32> = serde_json::from_str("[1,2,3,4,5]").unwrap();
        let page = payload.into_page(PageRequest::new(1, 2));
        assert_eq!(page.items, vec![3, 4]);
        assert_eq!(page.total_count, 5);
    }

    #[test]
    fn test_envelope_keeps_server_totals() {
        let payload: ListPayload<i32> =
            serde_json::from_str(r#"{"operations":[7,8],"totalCount":40}"#).unwrap();
        let page = payload.into_page(PageRequest::new(0, 2));
        assert_eq!(page.items, vec![7, 8]);
        assert_eq!(page.total_count, 40);
    }

    #[test]
    fn test_spring_style_envelope() {
        let payload: ListPayload<i32> =
            serde_json::from_str(r#"{"content":[1],"totalElements":11}"#).unwrap();
        let page = payload.into_page(PageRequest::new(0, 10));
        assert_eq!(page.items, vec![1]);
        assert_eq!(page.total_count, 11);
    }

    #[test]
    fn test_operation_list_payload_round_trip() {
        let json = r#"[{
            "id": 12,
            "type": "DEPOSIT",
            "amount": "150.50",
            "status": "PENDING",
            "accountNumber": "ACC-1",
            "createdAt": "2026-02-01T08:00:00Z",
            "updatedAt": "2026-02-01T08:00:00Z"
        }]"#;
        // Numeric ids arrive on some endpoints; they normalize to strings.
        let payload: ListPayload<Operation> = serde_json::from_str(json).unwrap();
        let page = payload.into_page(PageRequest::default());
        assert_eq!(page.items[0].id.as_str(), "12");
        assert_eq!(page.total_count, 1);
    }
}
