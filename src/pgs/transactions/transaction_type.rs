use std::fmt;

/// Wire-level gateway transaction type code
///
/// Codes outside the known vocabulary, e.g. read from a prior response, are carried as
/// `Other` and compare by their literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransactionType {
    Authorization,
    AuthorizationRenewal,
    ReferencedAuthorization,
    CaptureAuthorization,
    VoidAuthorization,
    VoidCapture,
    RefundCapture,
    VoidRefundCapture,
    RefundPurchase,
    VoidRefundPurchase,
    Purchase,
    ReferencedPurchase,
    VoidPurchase,
    Credit,
    VoidCredit,
    CheckEnrollment,
    Other(String),
}

impl TransactionType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Authorization => "authorization",
            Self::AuthorizationRenewal => "authorization-renewal",
            Self::ReferencedAuthorization => "referenced-authorization",
            Self::CaptureAuthorization => "capture-authorization",
            Self::VoidAuthorization => "void-authorization",
            Self::VoidCapture => "void-capture",
            Self::RefundCapture => "refund-capture",
            Self::VoidRefundCapture => "void-refund-capture",
            Self::RefundPurchase => "refund-purchase",
            Self::VoidRefundPurchase => "void-refund-purchase",
            Self::Purchase => "purchase",
            Self::ReferencedPurchase => "referenced-purchase",
            Self::VoidPurchase => "void-purchase",
            Self::Credit => "credit",
            Self::VoidCredit => "void-credit",
            Self::CheckEnrollment => "check-enrollment",
            Self::Other(code) => code.as_str(),
        }
    }
}

impl From<&str> for TransactionType {
    fn from(code: &str) -> Self {
        match code {
            "authorization" => Self::Authorization,
            "authorization-renewal" => Self::AuthorizationRenewal,
            "referenced-authorization" => Self::ReferencedAuthorization,
            "capture-authorization" => Self::CaptureAuthorization,
            "void-authorization" => Self::VoidAuthorization,
            "void-capture" => Self::VoidCapture,
            "refund-capture" => Self::RefundCapture,
            "void-refund-capture" => Self::VoidRefundCapture,
            "refund-purchase" => Self::RefundPurchase,
            "void-refund-purchase" => Self::VoidRefundPurchase,
            "purchase" => Self::Purchase,
            "referenced-purchase" => Self::ReferencedPurchase,
            "void-purchase" => Self::VoidPurchase,
            "credit" => Self::Credit,
            "void-credit" => Self::VoidCredit,
            "check-enrollment" => Self::CheckEnrollment,
            other => Self::Other(other.to_string()),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.as_str());
    }
}
