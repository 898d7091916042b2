/// Convenience type to make error mapping cleaner.
///
/// Errors raised by this crate are `PaymentSdkError`s, recover them with
/// `err.downcast_ref::<PaymentSdkError>()`.
pub type Result<T = ()> = anyhow::Result<T>;
