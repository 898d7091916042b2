mod credit_card;
mod klarna_invoice;
mod policy;

pub use credit_card::CreditCardPolicy;
pub use klarna_invoice::KlarnaInvoicePolicy;
pub use policy::{PaymentMethodPolicy, ENDPOINT_PAYMENTS, ENDPOINT_PAYMENT_METHODS};

use crate::ids::TransactionId;
use crate::transactions::{Operation, TransactionType};
use crate::PaymentSdkError;
use crate::Result;

/// Method-specific switches that steer resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MethodFlags {
    /// The transaction runs through 3-D Secure
    pub three_d: bool,
    /// A payer authentication response is present
    pub pares: bool,
}

/// Everything the resolver looks at for one transaction
#[derive(Debug, Clone, Copy)]
pub struct ResolveContext<'a> {
    pub operation: &'a Operation,
    pub parent_transaction_id: Option<&'a TransactionId>,
    pub parent_transaction_type: Option<&'a TransactionType>,
    pub flags: MethodFlags,
}

impl<'a> ResolveContext<'a> {
    pub fn new(operation: &'a Operation) -> Self {
        return Self {
            operation,
            parent_transaction_id: None,
            parent_transaction_type: None,
            flags: MethodFlags::default(),
        };
    }

    pub fn with_parent(
        mut self,
        id: &'a TransactionId,
        transaction_type: Option<&'a TransactionType>,
    ) -> Self {
        self.parent_transaction_id = Some(id);
        self.parent_transaction_type = transaction_type;
        self
    }

    pub fn with_flags(mut self, flags: MethodFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn has_parent(&self) -> bool {
        self.parent_transaction_id.is_some()
    }
}

/// Picks the gateway transaction type for an operation
///
/// Precedence: the PARes escape hatch, then method-specific overrides, then the cancel
/// table, then the base codes.
pub fn resolve(policy: &impl PaymentMethodPolicy, ctx: &ResolveContext) -> Result<TransactionType> {
    // 3-D Secure continuation: the caller's operation literal is sent as-is
    if ctx.flags.pares {
        log::debug!("PARes present, using raw operation {:?}", ctx.operation.as_str());
        return Ok(TransactionType::from(ctx.operation.as_str()));
    }

    let transaction_type = match ctx.operation {
        Operation::Reserve => match policy.reserve_override(ctx) {
            Some(transaction_type) => transaction_type,
            None if ctx.has_parent() => policy.renewal_type(),
            None => TransactionType::Authorization,
        },

        Operation::Pay => match policy.pay_override(ctx) {
            Some(transaction_type) => transaction_type,
            None if ctx.has_parent() => TransactionType::CaptureAuthorization,
            None => Err(PaymentSdkError::mandatory_field_missing(
                "Parent transaction id is missing for pay operation.",
            ))?,
        },

        Operation::Cancel => {
            if !ctx.has_parent() {
                Err(PaymentSdkError::mandatory_field_missing(
                    "No transaction for cancellation set.",
                ))?
            }

            ctx.parent_transaction_type
                .and_then(|parent_type| policy.cancel_type(parent_type))
                .ok_or_else(|| {
                    PaymentSdkError::unsupported_operation("The transaction can not be canceled.")
                })?
        }

        Operation::Credit => policy.credit_type(ctx)?,

        Operation::Custom(operation) => Err(PaymentSdkError::unsupported_operation(format!(
            "Operation {operation:?} is not supported by {}.",
            policy.name()
        )))?,
    };

    log::debug!(
        "Resolved {} {} (parent type {:?}) to {transaction_type}",
        policy.name(),
        ctx.operation,
        ctx.parent_transaction_type
    );

    Ok(transaction_type)
}
