use super::{PaymentMethodPolicy, ResolveContext};

use crate::transactions::TransactionType;
use crate::Result;

const CANCEL_TABLE: &[(TransactionType, TransactionType)] = &[
    (TransactionType::Authorization, TransactionType::VoidAuthorization),
    (TransactionType::ReferencedAuthorization, TransactionType::VoidAuthorization),
    (TransactionType::CaptureAuthorization, TransactionType::VoidCapture),
    (TransactionType::RefundCapture, TransactionType::VoidRefundCapture),
    (TransactionType::RefundPurchase, TransactionType::VoidRefundPurchase),
    (TransactionType::Credit, TransactionType::VoidCredit),
    (TransactionType::Purchase, TransactionType::VoidPurchase),
    (TransactionType::ReferencedPurchase, TransactionType::VoidPurchase),
];

/// Credit card transitions, including the 3-D Secure enrollment check
#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCardPolicy;

impl PaymentMethodPolicy for CreditCardPolicy {
    fn name(&self) -> &'static str {
        "creditcard"
    }

    fn cancel_table(&self) -> &'static [(TransactionType, TransactionType)] {
        CANCEL_TABLE
    }

    fn reserve_override(&self, ctx: &ResolveContext) -> Option<TransactionType> {
        match ctx.parent_transaction_type {
            Some(TransactionType::CheckEnrollment) => Some(TransactionType::Authorization),
            None if ctx.flags.three_d => Some(TransactionType::CheckEnrollment),
            None => Some(TransactionType::Authorization),
            Some(_) => None,
        }
    }

    fn pay_override(&self, ctx: &ResolveContext) -> Option<TransactionType> {
        match ctx.parent_transaction_type {
            Some(TransactionType::Purchase) => Some(TransactionType::ReferencedPurchase),
            Some(TransactionType::CheckEnrollment) => Some(TransactionType::Purchase),
            None if ctx.flags.three_d => Some(TransactionType::CheckEnrollment),
            None => Some(TransactionType::Purchase),
            Some(_) => None,
        }
    }

    fn credit_type(&self, _ctx: &ResolveContext) -> Result<TransactionType> {
        Ok(TransactionType::Credit)
    }
}

#[cfg(test)]
mod tests {
    use crate::ids::TransactionId;
    use crate::resolver::{resolve, MethodFlags};
    use crate::transactions::Operation;
    use crate::PaymentSdkError;

    use super::*;

    const THREE_D: MethodFlags = MethodFlags {
        three_d: true,
        pares: false,
    };

    fn some_parent_id() -> TransactionId {
        TransactionId::from("642")
    }

    fn resolve_with(
        operation: Operation,
        parent_type: Option<TransactionType>,
        flags: MethodFlags,
    ) -> crate::Result<TransactionType> {
        let parent_id = some_parent_id();
        let ctx = ResolveContext::new(&operation)
            .with_parent(&parent_id, parent_type.as_ref())
            .with_flags(flags);

        resolve(&CreditCardPolicy, &ctx)
    }

    fn resolve_without_parent(
        operation: Operation,
        flags: MethodFlags,
    ) -> crate::Result<TransactionType> {
        let ctx = ResolveContext::new(&operation).with_flags(flags);
        resolve(&CreditCardPolicy, &ctx)
    }

    #[test]
    fn reserve() {
        let cases = [
            (None, TransactionType::Authorization),
            (Some(TransactionType::Authorization), TransactionType::ReferencedAuthorization),
            (Some(TransactionType::CheckEnrollment), TransactionType::Authorization),
            (Some(TransactionType::Purchase), TransactionType::ReferencedAuthorization),
        ];

        for (parent_type, expected) in cases {
            let resolved =
                resolve_with(Operation::Reserve, parent_type, MethodFlags::default()).unwrap();
            assert_eq!(resolved, expected);
        }

        assert_eq!(
            resolve_without_parent(Operation::Reserve, MethodFlags::default()).unwrap(),
            TransactionType::Authorization
        );
    }

    #[test]
    fn reserve_three_d() {
        let cases = [
            (None, TransactionType::CheckEnrollment),
            (Some(TransactionType::CheckEnrollment), TransactionType::Authorization),
            (Some(TransactionType::Authorization), TransactionType::ReferencedAuthorization),
        ];

        for (parent_type, expected) in cases {
            assert_eq!(
                resolve_with(Operation::Reserve, parent_type, THREE_D).unwrap(),
                expected
            );
        }

        assert_eq!(
            resolve_without_parent(Operation::Reserve, THREE_D).unwrap(),
            TransactionType::CheckEnrollment
        );
    }

    #[test]
    fn pay() {
        let cases = [
            (Some(TransactionType::Authorization), TransactionType::CaptureAuthorization),
            (Some(TransactionType::Purchase), TransactionType::ReferencedPurchase),
            (Some(TransactionType::CheckEnrollment), TransactionType::Purchase),
            (None, TransactionType::Purchase),
        ];

        for (parent_type, expected) in cases {
            assert_eq!(
                resolve_with(Operation::Pay, parent_type, MethodFlags::default()).unwrap(),
                expected
            );
        }

        assert_eq!(
            resolve_without_parent(Operation::Pay, MethodFlags::default()).unwrap(),
            TransactionType::Purchase
        );
        assert_eq!(
            resolve_with(Operation::Pay, None, THREE_D).unwrap(),
            TransactionType::CheckEnrollment
        );
    }

    #[test]
    fn cancel_every_table_entry() {
        for (parent_type, expected) in CANCEL_TABLE {
            let resolved = resolve_with(
                Operation::Cancel,
                Some(parent_type.clone()),
                MethodFlags::default(),
            )
            .unwrap();

            assert_eq!(&resolved, expected);
        }
    }

    #[test]
    fn cancel_three_d_uses_the_table() {
        assert_eq!(
            resolve_with(Operation::Cancel, Some(TransactionType::Authorization), THREE_D)
                .unwrap(),
            TransactionType::VoidAuthorization
        );
    }

    #[test]
    fn fail_to_cancel_without_parent() {
        for flags in [MethodFlags::default(), THREE_D] {
            let err = resolve_without_parent(Operation::Cancel, flags).unwrap_err();

            assert!(matches!(
                err.downcast_ref::<PaymentSdkError>(),
                Some(PaymentSdkError::MandatoryFieldMissing(_))
            ));
        }
    }

    #[test]
    fn fail_to_cancel_unknown_parent_type() {
        for parent_type in [
            None,
            Some(TransactionType::from("test")),
            Some(TransactionType::VoidAuthorization),
            Some(TransactionType::CheckEnrollment),
        ] {
            let err =
                resolve_with(Operation::Cancel, parent_type, MethodFlags::default()).unwrap_err();

            assert_eq!(
                err.downcast_ref::<PaymentSdkError>(),
                Some(&PaymentSdkError::UnsupportedOperation(
                    "The transaction can not be canceled.".to_string()
                ))
            );
        }
    }

    #[test]
    fn credit_ignores_parent() {
        assert_eq!(
            resolve_with(Operation::Credit, Some(TransactionType::Credit), MethodFlags::default())
                .unwrap(),
            TransactionType::Credit
        );
        assert_eq!(
            resolve_without_parent(Operation::Credit, MethodFlags::default()).unwrap(),
            TransactionType::Credit
        );
    }

    #[test]
    fn pares_uses_raw_operation() {
        let pares = MethodFlags {
            three_d: true,
            pares: true,
        };

        assert_eq!(
            resolve_without_parent(Operation::from("testtype"), pares).unwrap(),
            TransactionType::Other("testtype".to_string())
        );
        // bypasses the table entirely, even for known operations
        assert_eq!(
            resolve_with(Operation::Cancel, Some(TransactionType::Authorization), pares).unwrap(),
            TransactionType::Other("cancel".to_string())
        );
    }

    #[test]
    fn fail_on_unknown_operation() {
        let err =
            resolve_without_parent(Operation::from("non-existing"), MethodFlags::default())
                .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PaymentSdkError>(),
            Some(PaymentSdkError::UnsupportedOperation(_))
        ));
    }
}
