//! Operation workflow engine.
//!
//! Encapsulates the rules for constructing and submitting operations and
//! for resolving pending ones. The engine validates everything client-side
//! before touching the network and never transitions a status locally; it
//! only relays what the backend confirmed.

use rust_decimal::Decimal;
use tracing::{info, warn};

use atlas_shared::ApiError;

use crate::workflow::error::WorkflowError;
use crate::workflow::repository::OperationRepository;
use crate::workflow::types::{
    DocumentUpload, Operation, OperationId, OperationRequest, OperationResponse, OperationStatus,
    OperationType, justification_threshold,
};

/// Decision an agent or admin takes on a pending operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Approve the operation (optional comment).
    Approve,
    /// Reject the operation (reason required).
    Reject,
}

impl Decision {
    /// The status this decision moves a pending operation to.
    #[must_use]
    pub const fn target_status(self) -> OperationStatus {
        match self {
            Self::Approve => OperationStatus::Approved,
            Self::Reject => OperationStatus::Rejected,
        }
    }
}

/// Outcome of the document-attach step of a submission.
#[derive(Debug)]
pub enum AttachmentOutcome {
    /// No justification was required.
    NotRequired,
    /// The document was attached.
    Attached,
    /// The operation was created but the attach call failed.
    ///
    /// Partial-failure state: the created operation must still be shown to
    /// the user, with a path to retry the attachment against its id.
    Failed(ApiError),
}

impl AttachmentOutcome {
    /// Returns true if a required attachment did not make it through.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Result of a successful submission.
///
/// The operation is always created when this is returned; the attachment
/// step may still have failed (see [`AttachmentOutcome::Failed`]).
#[derive(Debug)]
pub struct SubmitOutcome {
    /// Backend acknowledgement of the created operation.
    pub response: OperationResponse,
    /// What happened to the justification document.
    pub attachment: AttachmentOutcome,
}

/// Workflow engine over a repository facade.
#[derive(Debug)]
pub struct WorkflowEngine<R> {
    repository: R,
}

impl<R> WorkflowEngine<R> {
    /// Creates an engine over the given repository.
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns the underlying repository.
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Validates inputs and constructs an operation request.
    ///
    /// # Errors
    /// * [`WorkflowError::AmountNotPositive`] if `amount <= 0`
    /// * [`WorkflowError::MissingRecipient`] for a transfer without recipient
    pub fn prepare(
        operation_type: OperationType,
        amount: Decimal,
        currency: &str,
        description: &str,
        recipient_account_number: Option<String>,
    ) -> Result<OperationRequest, WorkflowError> {
        if amount <= Decimal::ZERO {
            return Err(WorkflowError::AmountNotPositive);
        }
        if operation_type.requires_recipient()
            && recipient_account_number
                .as_deref()
                .is_none_or(|r| r.trim().is_empty())
        {
            return Err(WorkflowError::MissingRecipient);
        }

        let mut request = OperationRequest {
            operation_type,
            amount: Decimal::ZERO,
            currency: currency.to_string(),
            description: description.to_string(),
            recipient_account_number,
            requires_justification: false,
        };
        // Derives the justification flag from the amount.
        request.set_amount(amount);
        Ok(request)
    }

    /// Checks that `decision` is a legal transition out of the operation's
    /// current status.
    ///
    /// # Errors
    /// * [`WorkflowError::InvalidTransition`] when the operation already
    ///   left the pending state
    pub fn check_resolvable(operation: &Operation, decision: Decision) -> Result<(), WorkflowError> {
        let to = decision.target_status();
        if operation.status.can_transition_to(to) {
            Ok(())
        } else {
            Err(WorkflowError::InvalidTransition {
                from: operation.status,
                to,
            })
        }
    }
}

impl<R: OperationRepository> WorkflowEngine<R> {
    /// Submits a prepared request, attaching the justification document
    /// after creation when one is required.
    ///
    /// The admission gate runs first: a required-but-missing justification
    /// fails before any network call. The attach call is chained strictly
    /// after creation succeeds, never in parallel with it.
    ///
    /// # Errors
    /// * [`WorkflowError::JustificationRequired`] pre-network, when the
    ///   request requires a document and none was provided
    /// * [`WorkflowError::Api`] when the create call itself fails
    pub async fn submit(
        &self,
        request: &OperationRequest,
        justification: Option<&DocumentUpload>,
    ) -> Result<SubmitOutcome, WorkflowError> {
        if request.requires_justification && justification.is_none() {
            return Err(WorkflowError::JustificationRequired);
        }

        let response = self.repository.create(request).await?;
        info!(
            id = %response.id,
            operation_type = %response.operation_type,
            amount = %response.amount,
            "operation created"
        );

        let attachment = match justification {
            Some(file) if request.requires_justification => {
                match self.repository.attach_document(&response.id, file).await {
                    Ok(()) => AttachmentOutcome::Attached,
                    Err(err) => {
                        warn!(
                            id = %response.id,
                            error = %err,
                            "operation created but document upload failed"
                        );
                        AttachmentOutcome::Failed(err)
                    }
                }
            }
            _ => AttachmentOutcome::NotRequired,
        };

        Ok(SubmitOutcome {
            response,
            attachment,
        })
    }

    /// Retries the document attachment for an already-created operation.
    ///
    /// Follow-up path for [`AttachmentOutcome::Failed`]; the operation id
    /// is known by then, so only the attach call is repeated.
    pub async fn retry_attachment(
        &self,
        id: &OperationId,
        file: &DocumentUpload,
    ) -> Result<(), WorkflowError> {
        self.repository.attach_document(id, file).await?;
        info!(%id, "justification document attached on retry");
        Ok(())
    }

    /// Resolves a pending operation with an approve or reject decision.
    ///
    /// The `note` is the approval comment (optional, empty means none) or
    /// the rejection reason (required). Authorization to reach this point
    /// is enforced by the route guard, not re-checked here.
    ///
    /// # Errors
    /// * [`WorkflowError::ReasonRequired`] pre-network, for a reject with
    ///   an empty note
    /// * [`WorkflowError::Api`] when the backend call fails
    pub async fn resolve_pending(
        &self,
        id: &OperationId,
        decision: Decision,
        note: &str,
    ) -> Result<OperationResponse, WorkflowError> {
        let response = match decision {
            Decision::Approve => {
                let comment = Some(note.trim()).filter(|n| !n.is_empty());
                self.repository.approve(id, comment).await?
            }
            Decision::Reject => {
                if note.trim().is_empty() {
                    return Err(WorkflowError::ReasonRequired);
                }
                self.repository.reject(id, note.trim()).await?
            }
        };

        // The backend is authoritative; flag a response that does not fit
        // the state machine instead of applying it.
        let expected = decision.target_status();
        if response.status != expected && !OperationStatus::Pending.can_transition_to(response.status)
        {
            warn!(
                %id,
                status = %response.status,
                "backend returned an unexpected status for a pending resolution"
            );
        }
        info!(%id, status = %response.status, "pending operation resolved");
        Ok(response)
    }

    /// Resolves an operation whose current row is at hand, validating the
    /// transition before the network call.
    ///
    /// # Errors
    /// Same as [`WorkflowEngine::resolve_pending`], plus
    /// [`WorkflowError::InvalidTransition`] pre-network when the operation
    /// is no longer pending.
    pub async fn resolve(
        &self,
        operation: &Operation,
        decision: Decision,
        note: &str,
    ) -> Result<OperationResponse, WorkflowError> {
        Self::check_resolvable(operation, decision)?;
        self.resolve_pending(&operation.id, decision, note).await
    }
}

/// Returns true if the given amount requires a justification document for
/// the given operation type.
#[must_use]
pub fn requires_justification(operation_type: OperationType, amount: Decimal) -> bool {
    operation_type.subject_to_justification() && amount > justification_threshold()
}
