use super::ResolveContext;

use crate::transactions::{Operation, TransactionType};
use crate::PaymentSdkError;
use crate::Result;

pub const ENDPOINT_PAYMENTS: &str = "/engine/rest/payments/";
pub const ENDPOINT_PAYMENT_METHODS: &str = "/engine/rest/paymentmethods/";

/// Vocabulary and transition table of one payment method
///
/// The defaults describe the common shape, a method overrides only where its
/// vocabulary differs.
pub trait PaymentMethodPolicy {
    /// Name sent in the `payment-methods` section
    fn name(&self) -> &'static str;

    /// Parent transaction type to cancel transaction type
    fn cancel_table(&self) -> &'static [(TransactionType, TransactionType)];

    /// Reserve type used when a parent transaction exists
    fn renewal_type(&self) -> TransactionType {
        TransactionType::ReferencedAuthorization
    }

    fn reserve_override(&self, _ctx: &ResolveContext) -> Option<TransactionType> {
        None
    }

    fn pay_override(&self, _ctx: &ResolveContext) -> Option<TransactionType> {
        None
    }

    fn credit_type(&self, _ctx: &ResolveContext) -> Result<TransactionType> {
        Err(PaymentSdkError::unsupported_operation(format!(
            "Credit is not supported by {}.",
            self.name()
        ))
        .into())
    }

    fn cancel_type(&self, parent_type: &TransactionType) -> Option<TransactionType> {
        self.cancel_table()
            .iter()
            .find(|(parent, _)| parent == parent_type)
            .map(|(_, cancel)| cancel.clone())
    }

    fn endpoint(&self, _operation: &Operation) -> &'static str {
        ENDPOINT_PAYMENTS
    }
}
