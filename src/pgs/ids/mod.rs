mod merchant_account_id;
mod transaction_id;

pub use merchant_account_id::MerchantAccountId;
pub use transaction_id::TransactionId;
