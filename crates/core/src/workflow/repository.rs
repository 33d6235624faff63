//! Boundary trait to the remote operation backend.
//!
//! Not a state machine: implementations perform the network calls and the
//! response-shape normalization, nothing else. The workflow engine is the
//! sole caller for mutations.

use atlas_shared::ApiResult;
use atlas_shared::types::pagination::{Page, PageRequest};

use crate::workflow::types::{
    DocumentUpload, Operation, OperationId, OperationRequest, OperationResponse,
};

/// Repository facade over the remote banking backend.
///
/// Every method is fallible with an [`atlas_shared::ApiError`]; the
/// workflow engine classifies but never swallows these. List results are
/// normalized into [`Page`] regardless of the backend's wire shape.
pub trait OperationRepository {
    /// Creates a new operation.
    fn create(
        &self,
        request: &OperationRequest,
    ) -> impl Future<Output = ApiResult<OperationResponse>> + Send;

    /// Lists the caller's own operations.
    fn list_own(&self, page: PageRequest) -> impl Future<Output = ApiResult<Page<Operation>>> + Send;

    /// Lists operations pending approval (agent/admin view).
    fn list_pending(
        &self,
        page: PageRequest,
    ) -> impl Future<Output = ApiResult<Page<Operation>>> + Send;

    /// Fetches a single operation.
    fn get(&self, id: &OperationId) -> impl Future<Output = ApiResult<Operation>> + Send;

    /// Attaches a justification document to an existing operation.
    fn attach_document(
        &self,
        id: &OperationId,
        file: &DocumentUpload,
    ) -> impl Future<Output = ApiResult<()>> + Send;

    /// Approves a pending operation, with an optional comment.
    fn approve(
        &self,
        id: &OperationId,
        comment: Option<&str>,
    ) -> impl Future<Output = ApiResult<OperationResponse>> + Send;

    /// Rejects a pending operation with a reason.
    fn reject(
        &self,
        id: &OperationId,
        reason: &str,
    ) -> impl Future<Output = ApiResult<OperationResponse>> + Send;
}
