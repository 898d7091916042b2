use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentSdkError {
    /// A value the requested operation cannot proceed without was never supplied
    #[error("Mandatory field missing: {0}")]
    MandatoryFieldMissing(String),

    /// The operation has no gateway transaction type for the given parent transaction
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// The gateway's document violates the minimal structural contract
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl PaymentSdkError {
    pub fn mandatory_field_missing(msg: impl Into<String>) -> Self {
        return Self::MandatoryFieldMissing(msg.into());
    }

    pub fn unsupported_operation(msg: impl Into<String>) -> Self {
        return Self::UnsupportedOperation(msg.into());
    }

    pub fn malformed_response(msg: impl Into<String>) -> Self {
        return Self::MalformedResponse(msg.into());
    }
}
