use crate::mapper::RequestMap;
use crate::response::Element;
use crate::Money;
use crate::PaymentSdkError;
use crate::Result;

use std::fmt;

/// Value plus ISO 4217 currency code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount {
    pub value: Money,
    pub currency: String,
}

impl Amount {
    pub fn new(value: Money, currency: &str) -> Self {
        return Self {
            value,
            currency: currency.to_string(),
        };
    }

    pub fn mapped_properties(&self) -> RequestMap {
        let mut map = RequestMap::new();
        map.insert("value", self.value.to_string());
        map.insert("currency", self.currency.as_str());
        map
    }

    /// Reads `<tag currency="EUR">24.00</tag>`
    pub fn from_element(element: &Element) -> Result<Self> {
        let value = Money::parse(element.text()).map_err(|e| {
            PaymentSdkError::malformed_response(format!(
                "Invalid {} value in response: {e}",
                element.name()
            ))
        })?;

        let currency = element
            .attribute("currency")
            .filter(|currency| !currency.is_empty())
            .ok_or_else(|| {
                PaymentSdkError::malformed_response(format!(
                    "Missing {} currency in response.",
                    element.name()
                ))
            })?;

        return Ok(Self::new(value, currency));
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{} {}", self.value, self.currency);
    }
}
