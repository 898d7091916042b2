pub mod config;
pub mod entities;
mod error;
pub mod ids;
pub mod input;
pub mod mapper;
mod money;
pub mod resolver;
pub mod response;
mod result;
pub mod transactions;

pub use error::PaymentSdkError;
pub use mapper::{RequestEnvironment, RequestMap, RequestMapper};
pub use money::{Money, MoneyError};
pub use response::{Element, NvpPayload, Response};
pub use result::Result;
pub use transactions::{CreditCardTransaction, KlarnaInvoiceTransaction, Operation, TransactionType};
