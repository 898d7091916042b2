use super::{PaymentMethod, TransactionBuilder};

use crate::config::CreditCardConfig;
use crate::entities::Amount;
use crate::ids::MerchantAccountId;
use crate::mapper::RequestMap;
use crate::resolver::{CreditCardPolicy, MethodFlags, ResolveContext};
use crate::PaymentSdkError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreditCard {
    pub token_id: Option<String>,
    /// 3-D Secure payer authentication response
    pub pares: Option<String>,
}

impl CreditCard {
    fn has_pares(&self) -> bool {
        self.pares
            .as_deref()
            .is_some_and(|pares| !pares.trim().is_empty())
    }
}

impl PaymentMethod for CreditCard {
    type Policy = CreditCardPolicy;
    type Config = CreditCardConfig;

    fn flags(&self, config: &CreditCardConfig, amount: Option<&Amount>) -> MethodFlags {
        let pares = self.has_pares();

        return MethodFlags {
            three_d: pares || config.is_three_d(amount),
            pares,
        };
    }

    fn merchant_account_id(
        &self,
        config: &CreditCardConfig,
        flags: &MethodFlags,
    ) -> Result<MerchantAccountId> {
        let merchant_account_id = config.merchant_account_id(flags.three_d).ok_or_else(|| {
            PaymentSdkError::mandatory_field_missing("Merchant account id is missing.")
        })?;

        return Ok(merchant_account_id.clone());
    }

    fn mapped_specific_properties(&self, ctx: &ResolveContext) -> Result<RequestMap> {
        if self.token_id.is_none() && !ctx.has_parent() && !ctx.flags.pares {
            Err(PaymentSdkError::mandatory_field_missing(
                "At least one of these two parameters has to be provided: token id, parent transaction id.",
            ))?
        }

        let mut map = RequestMap::new();

        let mut card_token = RequestMap::new();
        card_token.insert_text("token-id", self.token_id.as_deref());
        map.insert_map("card-token", card_token);

        let mut three_d = RequestMap::new();
        three_d.insert_text("pares", self.pares.as_deref());
        map.insert_map("three-d", three_d);

        return Ok(map);
    }
}

impl TransactionBuilder<CreditCard> {
    pub fn token_id(mut self, token_id: &str) -> Self {
        self.method.token_id = Some(token_id.to_string());
        self
    }

    pub fn pares(mut self, pares: &str) -> Self {
        self.method.pares = Some(pares.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::ids::TransactionId;
    use crate::transactions::Operation;
    use crate::Money;

    use super::*;

    const SOME_SSL_MAID: &str = "ssl-maid";
    const SOME_THREE_D_MAID: &str = "3d-maid";

    fn build_config() -> CreditCardConfig {
        CreditCardConfig::new()
            .with_ssl_merchant_account_id(SOME_SSL_MAID)
            .with_three_d_merchant_account_id(SOME_THREE_D_MAID)
            .with_three_d_min_limit("EUR", Money::units(100))
    }

    #[test]
    fn flags() {
        let config = build_config();
        let some_small_amount = Amount::new(Money::units(20), "EUR");
        let some_large_amount = Amount::new(Money::units(150), "EUR");

        let card = CreditCard::default();
        assert_eq!(card.flags(&config, Some(&some_small_amount)), MethodFlags::default());
        assert!(card.flags(&config, Some(&some_large_amount)).three_d);

        let card = CreditCard {
            pares: Some("pares".to_string()),
            ..CreditCard::default()
        };
        assert_eq!(
            card.flags(&config, Some(&some_small_amount)),
            MethodFlags {
                three_d: true,
                pares: true
            }
        );
    }

    #[test]
    fn merchant_account_id_follows_three_d() {
        let config = build_config();
        let card = CreditCard::default();

        let three_d = MethodFlags {
            three_d: true,
            pares: false,
        };

        assert_eq!(
            card.merchant_account_id(&config, &three_d).unwrap(),
            MerchantAccountId::from(SOME_THREE_D_MAID)
        );
        assert_eq!(
            card.merchant_account_id(&config, &MethodFlags::default()).unwrap(),
            MerchantAccountId::from(SOME_SSL_MAID)
        );
    }

    #[test]
    fn fail_without_merchant_account_id() {
        let err = CreditCard::default()
            .merchant_account_id(&CreditCardConfig::new(), &MethodFlags::default())
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PaymentSdkError>(),
            Some(PaymentSdkError::MandatoryFieldMissing(_))
        ));
    }

    #[test]
    fn mapped_specific_properties() {
        let card = CreditCard {
            token_id: Some("21".to_string()),
            pares: None,
        };

        let operation = Operation::Reserve;
        let map = card
            .mapped_specific_properties(&ResolveContext::new(&operation))
            .unwrap();

        assert_eq!(map.get_path("card-token.token-id"), Some("21"));
        assert!(!map.contains_key("three-d"));
    }

    #[test]
    fn parent_replaces_token() {
        let operation = Operation::Pay;
        let parent_id = TransactionId::from("642");
        let ctx = ResolveContext::new(&operation).with_parent(&parent_id, None);

        let map = CreditCard::default().mapped_specific_properties(&ctx).unwrap();

        assert!(map.is_empty());
    }

    #[test]
    fn fail_without_token_and_parent() {
        let operation = Operation::Reserve;

        let err = CreditCard::default()
            .mapped_specific_properties(&ResolveContext::new(&operation))
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<PaymentSdkError>(),
            Some(&PaymentSdkError::MandatoryFieldMissing(
                "At least one of these two parameters has to be provided: token id, parent transaction id."
                    .to_string()
            ))
        );
    }
}
