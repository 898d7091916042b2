use super::{Operation, PaymentMethod, TransactionType};

use crate::entities::{Amount, CustomFields};
use crate::ids::TransactionId;
use crate::resolver::{MethodFlags, ResolveContext};
use crate::PaymentSdkError;
use crate::Result;

/// A fully described payment intent, created through `Transaction::builder()`
///
/// Consumed by the mapper, a transaction describes exactly one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction<M> {
    operation: Operation,
    parent_transaction_id: Option<TransactionId>,
    parent_transaction_type: Option<TransactionType>,
    amount: Option<Amount>,
    custom_fields: CustomFields,
    method: M,
}

impl<M: PaymentMethod> Transaction<M> {
    pub fn builder() -> TransactionBuilder<M> {
        TransactionBuilder::default()
    }
}

impl<M> Transaction<M> {
    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    pub fn parent_transaction_id(&self) -> Option<&TransactionId> {
        self.parent_transaction_id.as_ref()
    }

    pub fn parent_transaction_type(&self) -> Option<&TransactionType> {
        self.parent_transaction_type.as_ref()
    }

    pub fn amount(&self) -> Option<&Amount> {
        self.amount.as_ref()
    }

    pub fn custom_fields(&self) -> &CustomFields {
        &self.custom_fields
    }

    pub fn method(&self) -> &M {
        &self.method
    }

    pub fn resolve_context(&self, flags: MethodFlags) -> ResolveContext<'_> {
        let ctx = ResolveContext::new(&self.operation).with_flags(flags);

        return match &self.parent_transaction_id {
            Some(id) => ctx.with_parent(id, self.parent_transaction_type.as_ref()),
            None => ctx,
        };
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransactionBuilder<M> {
    operation: Option<Operation>,
    parent_transaction_id: Option<TransactionId>,
    parent_transaction_type: Option<TransactionType>,
    amount: Option<Amount>,
    custom_fields: CustomFields,
    pub(super) method: M,
}

impl<M> TransactionBuilder<M> {
    pub fn operation(mut self, operation: Operation) -> Self {
        self.operation = Some(operation);
        self
    }

    pub fn parent_transaction_id(mut self, id: TransactionId) -> Self {
        self.parent_transaction_id = Some(id);
        self
    }

    pub fn parent_transaction_type(mut self, transaction_type: TransactionType) -> Self {
        self.parent_transaction_type = Some(transaction_type);
        self
    }

    pub fn amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn custom_field(mut self, name: &str, value: &str) -> Self {
        self.custom_fields.add(name, value);
        self
    }

    pub fn build(self) -> Result<Transaction<M>> {
        let operation = self
            .operation
            .ok_or_else(|| PaymentSdkError::mandatory_field_missing("Operation is missing."))?;

        // a parent type only has meaning together with the parent it describes
        let parent_transaction_type = match self.parent_transaction_id {
            Some(_) => self.parent_transaction_type,
            None => {
                if let Some(parent_type) = &self.parent_transaction_type {
                    log::debug!("Dropping parent type {parent_type:?} without parent id");
                }
                None
            }
        };

        return Ok(Transaction {
            operation,
            parent_transaction_id: self.parent_transaction_id,
            parent_transaction_type,
            amount: self.amount,
            custom_fields: self.custom_fields,
            method: self.method,
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::transactions::CreditCardTransaction;
    use crate::Money;

    use super::*;

    const SOME_PARENT_ID: &str = "642";

    #[test]
    fn build() {
        let transaction = CreditCardTransaction::builder()
            .operation(Operation::Pay)
            .parent_transaction_id(TransactionId::from(SOME_PARENT_ID))
            .parent_transaction_type(TransactionType::Authorization)
            .amount(Amount::new(Money::units(24), "EUR"))
            .custom_field("orderId", "42")
            .build()
            .unwrap();

        assert_eq!(transaction.operation(), &Operation::Pay);
        assert_eq!(
            transaction.parent_transaction_id(),
            Some(&TransactionId::from(SOME_PARENT_ID))
        );
        assert_eq!(
            transaction.parent_transaction_type(),
            Some(&TransactionType::Authorization)
        );
        assert_eq!(transaction.amount().unwrap().value, Money::units(24));
        assert_eq!(transaction.custom_fields().get("orderId"), Some("42"));

        let ctx = transaction.resolve_context(MethodFlags::default());
        assert!(ctx.has_parent());
    }

    #[test]
    fn fail_to_build_without_operation() {
        let err = CreditCardTransaction::builder().build().unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PaymentSdkError>(),
            Some(PaymentSdkError::MandatoryFieldMissing(_))
        ));
    }

    #[test]
    fn parent_type_without_parent_id_is_dropped() {
        let transaction = CreditCardTransaction::builder()
            .operation(Operation::Cancel)
            .parent_transaction_type(TransactionType::Authorization)
            .build()
            .unwrap();

        assert_eq!(transaction.parent_transaction_type(), None);
        assert!(!transaction.resolve_context(MethodFlags::default()).has_parent());
    }
}
