use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct MerchantAccountId(pub String);

impl MerchantAccountId {
    pub fn as_str(&self) -> &str {
        return &self.0;
    }
}

impl From<&str> for MerchantAccountId {
    fn from(id: &str) -> Self {
        return Self(id.to_string());
    }
}

impl fmt::Display for MerchantAccountId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
