use std::fmt;

use serde::{Deserialize, Serialize};

/// Gateway-assigned identifier of a previously submitted transaction
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct TransactionId(pub String);

impl TransactionId {
    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl From<&str> for TransactionId {
    fn from(id: &str) -> Self {
        return Self(id.to_string());
    }
}

impl From<String> for TransactionId {
    fn from(id: String) -> Self {
        return Self(id);
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
