use super::{PaymentMethodPolicy, ENDPOINT_PAYMENTS, ENDPOINT_PAYMENT_METHODS};

use crate::transactions::{Operation, TransactionType};

const CANCEL_TABLE: &[(TransactionType, TransactionType)] = &[
    (TransactionType::Authorization, TransactionType::VoidAuthorization),
    (TransactionType::CaptureAuthorization, TransactionType::RefundCapture),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct KlarnaInvoicePolicy;

impl PaymentMethodPolicy for KlarnaInvoicePolicy {
    fn name(&self) -> &'static str {
        "klarna-invoice"
    }

    fn cancel_table(&self) -> &'static [(TransactionType, TransactionType)] {
        CANCEL_TABLE
    }

    fn renewal_type(&self) -> TransactionType {
        TransactionType::AuthorizationRenewal
    }

    /// Reservations go through the payment-methods endpoint
    fn endpoint(&self, operation: &Operation) -> &'static str {
        match operation {
            Operation::Reserve => ENDPOINT_PAYMENT_METHODS,
            _ => ENDPOINT_PAYMENTS,
        }
    }
}
