use super::{PaymentMethod, TransactionBuilder};

use crate::config::PaymentMethodConfig;
use crate::entities::{AccountHolder, Amount, Basket, BasketVersion};
use crate::ids::MerchantAccountId;
use crate::mapper::RequestMap;
use crate::resolver::{KlarnaInvoicePolicy, MethodFlags, ResolveContext};
use crate::PaymentSdkError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KlarnaInvoice {
    pub order_number: Option<String>,
    pub shipping: AccountHolder,
    pub basket: Basket,
    pub country: Option<String>,
}

impl PaymentMethod for KlarnaInvoice {
    type Policy = KlarnaInvoicePolicy;
    type Config = PaymentMethodConfig;

    fn flags(&self, _config: &PaymentMethodConfig, _amount: Option<&Amount>) -> MethodFlags {
        MethodFlags::default()
    }

    fn merchant_account_id(
        &self,
        config: &PaymentMethodConfig,
        _flags: &MethodFlags,
    ) -> Result<MerchantAccountId> {
        let merchant_account_id = config.merchant_account_id.as_ref().ok_or_else(|| {
            PaymentSdkError::mandatory_field_missing("Merchant account id is missing.")
        })?;

        return Ok(merchant_account_id.clone());
    }

    fn mapped_specific_properties(&self, _ctx: &ResolveContext) -> Result<RequestMap> {
        let mut map = RequestMap::new();

        map.insert_map("shipping", self.shipping.mapped_properties());
        map.insert_text("order-number", self.order_number.as_deref());

        if !self.basket.is_empty() {
            map.insert(
                "order-items",
                self.basket.mapped_properties(BasketVersion::Klarna),
            );
        }

        map.insert_text("country", self.country.as_deref());

        return Ok(map);
    }
}

impl TransactionBuilder<KlarnaInvoice> {
    pub fn order_number(mut self, order_number: &str) -> Self {
        self.method.order_number = Some(order_number.to_string());
        self
    }

    pub fn shipping(mut self, shipping: AccountHolder) -> Self {
        self.method.shipping = shipping;
        self
    }

    pub fn basket(mut self, basket: Basket) -> Self {
        self.method.basket = basket;
        self
    }

    pub fn country(mut self, country: &str) -> Self {
        self.method.country = Some(country.to_string());
        self
    }
}
