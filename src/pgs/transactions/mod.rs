mod credit_card;
mod klarna_invoice;
mod operation;
mod transaction;
mod transaction_type;

pub use credit_card::CreditCard;
pub use klarna_invoice::KlarnaInvoice;
pub use operation::Operation;
pub use transaction::{Transaction, TransactionBuilder};
pub use transaction_type::TransactionType;

use crate::entities::Amount;
use crate::ids::MerchantAccountId;
use crate::mapper::RequestMap;
use crate::resolver::{MethodFlags, PaymentMethodPolicy, ResolveContext};
use crate::Result;

pub type CreditCardTransaction = Transaction<CreditCard>;
pub type KlarnaInvoiceTransaction = Transaction<KlarnaInvoice>;

/// Method-specific data carried by a `Transaction`
pub trait PaymentMethod: Default {
    type Policy: PaymentMethodPolicy + Default;

    /// Merchant configuration the caller supplies for this method
    type Config;

    fn flags(&self, config: &Self::Config, amount: Option<&Amount>) -> MethodFlags;

    fn merchant_account_id(
        &self,
        config: &Self::Config,
        flags: &MethodFlags,
    ) -> Result<MerchantAccountId>;

    /// Fields appended after the common ones
    fn mapped_specific_properties(&self, ctx: &ResolveContext) -> Result<RequestMap>;
}
