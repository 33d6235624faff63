//! Operation domain types for the financial-operation lifecycle.
//!
//! Status transitions are driven exclusively by the backend; the front-end
//! core requests a transition and reconciles on the response. The valid
//! transitions are:
//! - Pending → Approved (agent/admin approves)
//! - Pending → Rejected (agent/admin rejects, reason required)
//! - Approved → Completed (backend settlement)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Amount above which withdrawals and transfers need a justification
/// document before submission. Strictly greater-than: an operation of
/// exactly this amount needs none.
#[must_use]
pub fn justification_threshold() -> Decimal {
    Decimal::new(10_000, 0)
}

/// Opaque identifier of an operation.
///
/// The backend returns numeric or string ids depending on the endpoint;
/// both deserialize to the string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OperationId(pub String);

impl<'de> Deserialize<'de> for OperationId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Number(i64),
        }
        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(id) => Self(id),
            Repr::Number(id) => Self(id.to_string()),
        })
    }
}

impl OperationId {
    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OperationId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for OperationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Kind of financial operation a client can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationType {
    /// Money into the client's own account.
    Deposit,
    /// Money out of the client's own account.
    Withdrawal,
    /// Money from the client's account to a recipient account.
    Transfer,
}

impl OperationType {
    /// Returns the wire representation of the type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Deposit => "DEPOSIT",
            Self::Withdrawal => "WITHDRAWAL",
            Self::Transfer => "TRANSFER",
        }
    }

    /// Parses a type from its wire representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "DEPOSIT" => Some(Self::Deposit),
            "WITHDRAWAL" => Some(Self::Withdrawal),
            "TRANSFER" => Some(Self::Transfer),
            _ => None,
        }
    }

    /// Returns true if a recipient account number is mandatory.
    #[must_use]
    pub const fn requires_recipient(&self) -> bool {
        matches!(self, Self::Transfer)
    }

    /// Returns true if the justification threshold applies to this type.
    ///
    /// Deposits never require a justification document.
    #[must_use]
    pub const fn subject_to_justification(&self) -> bool {
        matches!(self, Self::Withdrawal | Self::Transfer)
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operation status in the approval workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationStatus {
    /// Waiting for an agent or admin decision.
    Pending,
    /// Approved, waiting for backend settlement.
    Approved,
    /// Rejected with a reason (terminal).
    Rejected,
    /// Settled by the backend (terminal).
    Completed,
}

impl OperationStatus {
    /// Returns the wire representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
            Self::Completed => "COMPLETED",
        }
    }

    /// Parses a status from its wire representation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "PENDING" => Some(Self::Pending),
            "APPROVED" => Some(Self::Approved),
            "REJECTED" => Some(Self::Rejected),
            "COMPLETED" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Returns true if no transition is legal out of this status.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Completed)
    }

    /// Checks if a status transition is valid.
    ///
    /// Valid transitions:
    /// - Pending → Approved (approve)
    /// - Pending → Rejected (reject)
    /// - Approved → Completed (backend settlement)
    #[must_use]
    pub const fn can_transition_to(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Pending, Self::Approved | Self::Rejected)
                | (Self::Approved, Self::Completed)
        )
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A justification document already attached to an operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Backend document id.
    pub id: i64,
    /// Original file name.
    pub file_name: String,
    /// MIME type of the file.
    pub file_type: String,
    /// When the document was uploaded.
    pub uploaded_at: DateTime<Utc>,
}

/// A file selected for upload as a justification document.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    /// Original file name.
    pub file_name: String,
    /// MIME type of the file.
    pub content_type: String,
    /// Raw file content.
    pub bytes: Vec<u8>,
}

/// A financial operation as seen by the front-end.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Operation id.
    pub id: OperationId,
    /// Kind of operation.
    #[serde(rename = "type")]
    pub operation_type: OperationType,
    /// Positive amount in the operation's currency.
    pub amount: Decimal,
    /// Currency code.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Current workflow status.
    pub status: OperationStatus,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Owner account number.
    pub account_number: String,
    /// Recipient account number, present iff this is a transfer.
    #[serde(default, alias = "targetAccountNumber")]
    pub recipient_account_number: Option<String>,
    /// When the operation was created.
    pub created_at: DateTime<Utc>,
    /// When the operation last changed.
    pub updated_at: DateTime<Utc>,
    /// Attached justification documents, in upload order.
    #[serde(default)]
    pub documents: Vec<Document>,
}

fn default_currency() -> String {
    "DH".to_string()
}

/// A validated request to create an operation.
///
/// Built by [`WorkflowEngine::prepare`](crate::workflow::WorkflowEngine);
/// `requires_justification` is derived from the amount and re-evaluated on
/// every amount change so the flag can never go stale across an edit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRequest {
    /// Kind of operation.
    #[serde(rename = "type")]
    pub operation_type: OperationType,
    /// Positive amount.
    pub amount: Decimal,
    /// Currency code.
    pub currency: String,
    /// Free-text description.
    pub description: String,
    /// Recipient account number, required for transfers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_account_number: Option<String>,
    /// Whether a justification document must be attached before submission.
    /// Client-side admission gate, never sent on the wire.
    #[serde(skip)]
    pub requires_justification: bool,
}

impl OperationRequest {
    /// Updates the amount and re-derives the justification flag.
    pub fn set_amount(&mut self, amount: Decimal) {
        self.amount = amount;
        self.requires_justification =
            self.operation_type.subject_to_justification() && amount > justification_threshold();
    }
}

/// Backend acknowledgement of a create/approve/reject call.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationResponse {
    /// Operation id.
    pub id: OperationId,
    /// Kind of operation.
    #[serde(rename = "type")]
    pub operation_type: OperationType,
    /// Operation amount.
    pub amount: Decimal,
    /// Status after the call.
    pub status: OperationStatus,
    /// Backend message for display.
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_type_round_trip() {
        for kind in [
            OperationType::Deposit,
            OperationType::Withdrawal,
            OperationType::Transfer,
        ] {
            assert_eq!(OperationType::parse(kind.as_str()), Some(kind));
        }
        assert_eq!(OperationType::parse("LOAN"), None);
    }

    #[test]
    fn test_recipient_requirement() {
        assert!(OperationType::Transfer.requires_recipient());
        assert!(!OperationType::Deposit.requires_recipient());
        assert!(!OperationType::Withdrawal.requires_recipient());
    }

    #[test]
    fn test_justification_scope() {
        assert!(OperationType::Withdrawal.subject_to_justification());
        assert!(OperationType::Transfer.subject_to_justification());
        assert!(!OperationType::Deposit.subject_to_justification());
    }

    #[test]
    fn test_status_transitions() {
        use OperationStatus::{Approved, Completed, Pending, Rejected};
        assert!(Pending.can_transition_to(Approved));
        assert!(Pending.can_transition_to(Rejected));
        assert!(Approved.can_transition_to(Completed));

        assert!(!Rejected.can_transition_to(Approved));
        assert!(!Rejected.can_transition_to(Pending));
        assert!(!Completed.can_transition_to(Pending));
        assert!(!Pending.can_transition_to(Completed));
        assert!(!Approved.can_transition_to(Rejected));
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!OperationStatus::Pending.is_terminal());
        assert!(!OperationStatus::Approved.is_terminal());
        assert!(OperationStatus::Rejected.is_terminal());
        assert!(OperationStatus::Completed.is_terminal());
    }

    #[test]
    fn test_set_amount_rederives_flag() {
        let mut request = OperationRequest {
            operation_type: OperationType::Transfer,
            amount: dec!(15000),
            currency: "DH".into(),
            description: String::new(),
            recipient_account_number: Some("ACC-9".into()),
            requires_justification: true,
        };
        request.set_amount(dec!(500));
        assert!(!request.requires_justification);
        request.set_amount(dec!(10000.01));
        assert!(request.requires_justification);
    }

    #[test]
    fn test_request_wire_shape_hides_derived_flag() {
        let request = OperationRequest {
            operation_type: OperationType::Deposit,
            amount: dec!(100),
            currency: "DH".into(),
            description: "salary".into(),
            recipient_account_number: None,
            requires_justification: false,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "DEPOSIT");
        assert!(json.get("requiresJustification").is_none());
        assert!(json.get("recipientAccountNumber").is_none());
    }

    #[test]
    fn test_numeric_id_normalizes_to_string() {
        let id: OperationId = serde_json::from_str("57").unwrap();
        assert_eq!(id.as_str(), "57");
        let id: OperationId = serde_json::from_str("\"op-57\"").unwrap();
        assert_eq!(id.as_str(), "op-57");
    }

    #[test]
    fn test_operation_accepts_alias_and_defaults() {
        let json = r#"{
            "id": "41",
            "type": "TRANSFER",
            "amount": 2500,
            "status": "PENDING",
            "accountNumber": "ACC-1",
            "targetAccountNumber": "ACC-2",
            "createdAt": "2026-03-01T10:00:00Z",
            "updatedAt": "2026-03-01T10:00:00Z"
        }"#;
        let operation: Operation = serde_json::from_str(json).unwrap();
        assert_eq!(operation.id.as_str(), "41");
        assert_eq!(operation.currency, "DH");
        assert_eq!(operation.recipient_account_number.as_deref(), Some("ACC-2"));
        assert!(operation.documents.is_empty());
    }
}
