//! Workflow error types for the operation lifecycle.

use thiserror::Error;

use atlas_shared::ApiError;

use crate::workflow::types::OperationStatus;

/// Errors that can occur while constructing, submitting or resolving
/// operations.
///
/// The validation variants are resolved entirely client-side and never
/// reach the backend; everything remote is carried in [`ApiError`].
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Amount was zero or negative.
    #[error("Amount must be greater than zero")]
    AmountNotPositive,

    /// Transfer without a recipient account number.
    #[error("A recipient account number is required for transfers")]
    MissingRecipient,

    /// Amount above the threshold but no justification document attached.
    #[error("A justification document is required for this amount")]
    JustificationRequired,

    /// Rejection without a reason.
    #[error("A rejection reason is required")]
    ReasonRequired,

    /// Attempted an invalid status transition.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: OperationStatus,
        /// The attempted target status.
        to: OperationStatus,
    },

    /// The backend rejected or failed the request.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl WorkflowError {
    /// Returns true if the error was resolved client-side, pre-network.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::AmountNotPositive
                | Self::MissingRecipient
                | Self::JustificationRequired
                | Self::ReasonRequired
                | Self::InvalidTransition { .. }
        )
    }

    /// Returns the error code for display and logging.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::AmountNotPositive => "AMOUNT_NOT_POSITIVE",
            Self::MissingRecipient => "MISSING_RECIPIENT",
            Self::JustificationRequired => "JUSTIFICATION_REQUIRED",
            Self::ReasonRequired => "REASON_REQUIRED",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::Api(err) => err.error_code(),
        }
    }
}
