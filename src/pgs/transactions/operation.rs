use std::fmt;

/// The caller's high-level intent
///
/// Any literal other than the four known operations is kept as `Custom`, it only
/// resolves when a 3-D Secure PARes is present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    Reserve,
    Pay,
    Cancel,
    Credit,
    Custom(String),
}

impl Operation {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Reserve => "reserve",
            Self::Pay => "pay",
            Self::Cancel => "cancel",
            Self::Credit => "credit",
            Self::Custom(operation) => operation.as_str(),
        }
    }
}

impl From<&str> for Operation {
    fn from(operation: &str) -> Self {
        match operation {
            "reserve" => Self::Reserve,
            "pay" => Self::Pay,
            "cancel" => Self::Cancel,
            "credit" => Self::Credit,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.as_str());
    }
}
