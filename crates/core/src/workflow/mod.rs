//! Operation lifecycle management for the Atlas Bank front-end.
//!
//! This module implements the operation state machine and the rules for
//! constructing, submitting and resolving operations.
//!
//! # Modules
//!
//! - `types` - Operation domain types (OperationType, OperationStatus, ...)
//! - `error` - Workflow-specific error types
//! - `repository` - Boundary trait to the remote backend
//! - `engine` - Creation rules, justification gate, pending resolution

pub mod engine;
pub mod error;
pub mod repository;
pub mod types;

#[cfg(test)]
mod engine_props;

pub use engine::{
    AttachmentOutcome, Decision, SubmitOutcome, WorkflowEngine, requires_justification,
};
pub use error::WorkflowError;
pub use repository::OperationRepository;
pub use types::{
    Document, DocumentUpload, Operation, OperationId, OperationRequest, OperationResponse,
    OperationStatus, OperationType,
};
