mod account_holder;
mod amount;
mod basket;
mod card;
mod custom_fields;
mod status;

pub use account_holder::{AccountHolder, Address};
pub use amount::Amount;
pub use basket::{Basket, BasketVersion, Item};
pub use card::Card;
pub use custom_fields::{CustomFields, CUSTOM_FIELD_PREFIX};
pub use status::{Severity, Status, StatusCollection};
