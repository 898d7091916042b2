use crate::entities::Amount;
use crate::ids::MerchantAccountId;
use crate::Money;

use indexmap::IndexMap;

/// Merchant settings for methods that use a single merchant account
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaymentMethodConfig {
    pub merchant_account_id: Option<MerchantAccountId>,
}

impl PaymentMethodConfig {
    pub fn new(merchant_account_id: &str) -> Self {
        return Self {
            merchant_account_id: Some(MerchantAccountId::from(merchant_account_id)),
        };
    }
}

/// Credit card merchant settings: one account for plain SSL payments, one for
/// 3-D Secure, and per-currency limits that decide between them
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreditCardConfig {
    ssl_merchant_account_id: Option<MerchantAccountId>,
    three_d_merchant_account_id: Option<MerchantAccountId>,
    ssl_max_limits: IndexMap<String, Money>,
    three_d_min_limits: IndexMap<String, Money>,
}

impl CreditCardConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ssl_merchant_account_id(mut self, merchant_account_id: &str) -> Self {
        self.ssl_merchant_account_id = Some(MerchantAccountId::from(merchant_account_id));
        self
    }

    pub fn with_three_d_merchant_account_id(mut self, merchant_account_id: &str) -> Self {
        self.three_d_merchant_account_id = Some(MerchantAccountId::from(merchant_account_id));
        self
    }

    /// Amounts above this limit are sent through 3-D Secure
    pub fn with_ssl_max_limit(mut self, currency: &str, limit: Money) -> Self {
        self.ssl_max_limits.insert(currency.to_string(), limit);
        self
    }

    /// Amounts at or above this limit are sent through 3-D Secure
    pub fn with_three_d_min_limit(mut self, currency: &str, limit: Money) -> Self {
        self.three_d_min_limits.insert(currency.to_string(), limit);
        self
    }

    pub fn ssl_merchant_account_id(&self) -> Option<&MerchantAccountId> {
        self.ssl_merchant_account_id.as_ref()
    }

    pub fn three_d_merchant_account_id(&self) -> Option<&MerchantAccountId> {
        self.three_d_merchant_account_id.as_ref()
    }

    pub fn is_three_d(&self, amount: Option<&Amount>) -> bool {
        if self.three_d_merchant_account_id.is_none() {
            return false;
        }

        if self.ssl_merchant_account_id.is_none() {
            return true;
        }

        let amount = match amount {
            Some(amount) => amount,
            None => return false,
        };

        if let Some(limit) = self.three_d_min_limits.get(&amount.currency) {
            if amount.value >= *limit {
                return true;
            }
        }

        if let Some(limit) = self.ssl_max_limits.get(&amount.currency) {
            if amount.value > *limit {
                return true;
            }
        }

        return false;
    }

    /// Account for the chosen mode, falling back to whichever one is configured
    pub fn merchant_account_id(&self, three_d: bool) -> Option<&MerchantAccountId> {
        let (preferred, fallback) = match three_d {
            true => (&self.three_d_merchant_account_id, &self.ssl_merchant_account_id),
            false => (&self.ssl_merchant_account_id, &self.three_d_merchant_account_id),
        };

        preferred.as_ref().or(fallback.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOME_SSL_MAID: &str = "ssl-maid";
    const SOME_THREE_D_MAID: &str = "3d-maid";

    fn build_config() -> CreditCardConfig {
        CreditCardConfig::new()
            .with_ssl_merchant_account_id(SOME_SSL_MAID)
            .with_three_d_merchant_account_id(SOME_THREE_D_MAID)
            .with_ssl_max_limit("EUR", Money::units(50))
            .with_three_d_min_limit("USD", Money::units(100))
    }

    fn eur(units: i64) -> Amount {
        Amount::new(Money::units(units), "EUR")
    }

    #[test]
    fn single_account_decides_mode() {
        let ssl_only = CreditCardConfig::new().with_ssl_merchant_account_id(SOME_SSL_MAID);
        assert!(!ssl_only.is_three_d(Some(&eur(1000))));

        let three_d_only = CreditCardConfig::new().with_three_d_merchant_account_id(SOME_THREE_D_MAID);
        assert!(three_d_only.is_three_d(Some(&eur(1))));
        assert!(three_d_only.is_three_d(None));
    }

    #[test]
    fn limits_decide_mode() {
        let config = build_config();

        assert!(!config.is_three_d(None));
        assert!(!config.is_three_d(Some(&eur(50))));
        assert!(config.is_three_d(Some(&eur(51))));

        assert!(!config.is_three_d(Some(&Amount::new(Money::units(99), "USD"))));
        assert!(config.is_three_d(Some(&Amount::new(Money::units(100), "USD"))));

        // no limits configured for the currency
        assert!(!config.is_three_d(Some(&Amount::new(Money::units(10000), "GBP"))));
    }

    #[test]
    fn merchant_account_id() {
        let config = build_config();

        assert_eq!(
            config.merchant_account_id(true),
            Some(&MerchantAccountId::from(SOME_THREE_D_MAID))
        );
        assert_eq!(
            config.merchant_account_id(false),
            Some(&MerchantAccountId::from(SOME_SSL_MAID))
        );

        let ssl_only = CreditCardConfig::new().with_ssl_merchant_account_id(SOME_SSL_MAID);
        assert_eq!(
            ssl_only.merchant_account_id(true),
            Some(&MerchantAccountId::from(SOME_SSL_MAID))
        );
        assert_eq!(CreditCardConfig::new().merchant_account_id(false), None);
    }
}
