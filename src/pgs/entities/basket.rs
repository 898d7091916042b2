use super::Amount;

use crate::mapper::RequestMap;
use crate::response::Element;
use crate::PaymentSdkError;
use crate::Result;

/// Field naming differs between payment methods, see `Item::mapped_properties`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BasketVersion {
    #[default]
    Standard,
    Klarna,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub amount: Amount,
    pub quantity: u32,
    pub description: Option<String>,
    pub article_number: Option<String>,
    pub tax_rate: Option<String>,
    pub tax_amount: Option<Amount>,
}

impl Item {
    pub fn new(name: &str, amount: Amount, quantity: u32) -> Self {
        return Self {
            name: name.to_string(),
            amount,
            quantity,
            description: None,
            article_number: None,
            tax_rate: None,
            tax_amount: None,
        };
    }

    /// Klarna expects the tax as a rate, every other method as an amount
    pub fn mapped_properties(&self, version: BasketVersion) -> RequestMap {
        let mut map = RequestMap::new();

        map.insert("name", self.name.as_str());
        map.insert_text("description", self.description.as_deref());
        map.insert_text("article-number", self.article_number.as_deref());
        map.insert("amount", self.amount.mapped_properties());
        map.insert("quantity", self.quantity.to_string());

        match version {
            BasketVersion::Klarna => map.insert_text("tax-rate", self.tax_rate.as_deref()),
            BasketVersion::Standard => {
                if let Some(tax_amount) = &self.tax_amount {
                    map.insert("tax-amount", tax_amount.mapped_properties());
                }
            }
        }

        map
    }

    pub fn from_element(element: &Element) -> Result<Self> {
        let name = element.child_text("name").ok_or_else(|| {
            PaymentSdkError::malformed_response("Missing order-item name in response.")
        })?;

        let amount = element.child("amount").ok_or_else(|| {
            PaymentSdkError::malformed_response("Missing order-item amount in response.")
        })?;

        let quantity = element
            .child_text("quantity")
            .and_then(|quantity| quantity.parse::<u32>().ok())
            .ok_or_else(|| {
                PaymentSdkError::malformed_response("Invalid order-item quantity in response.")
            })?;

        let tax_amount = match element.child("tax-amount") {
            Some(tax_amount) => Some(Amount::from_element(tax_amount)?),
            None => None,
        };

        return Ok(Self {
            name,
            amount: Amount::from_element(amount)?,
            quantity,
            description: element.child_text("description"),
            article_number: element.child_text("article-number"),
            tax_rate: element.child_text("tax-rate"),
            tax_amount,
        });
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Basket {
    items: Vec<Item>,
}

impl Basket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn mapped_properties(&self, version: BasketVersion) -> RequestMap {
        let items = self
            .items
            .iter()
            .map(|item| item.mapped_properties(version))
            .collect::<Vec<_>>();

        RequestMap::single("order-item", items)
    }

    /// Reads the `order-items` section of a response, an absent section yields an empty basket
    pub fn from_document(root: &Element) -> Result<Self> {
        let mut basket = Self::new();

        if let Some(order_items) = root.child("order-items") {
            for item in order_items.children_named("order-item") {
                basket = basket.add(Item::from_element(item)?);
            }
        }

        return Ok(basket);
    }
}

#[cfg(test)]
mod tests {
    use crate::Money;

    use super::*;

    fn build_item() -> Item {
        let mut item = Item::new("Shoes", Amount::new(Money::units(40), "EUR"), 2);
        item.tax_rate = Some("20".to_string());
        item.tax_amount = Some(Amount::new(Money::parse("6.67").unwrap(), "EUR"));
        item
    }

    #[test]
    fn klarna_version_maps_tax_rate() {
        let map = build_item().mapped_properties(BasketVersion::Klarna);

        assert_eq!(map.get_path("tax-rate"), Some("20"));
        assert!(!map.contains_key("tax-amount"));
        assert!(!map.contains_key("description"));
    }

    #[test]
    fn standard_version_maps_tax_amount() {
        let map = build_item().mapped_properties(BasketVersion::Standard);

        assert_eq!(map.get_path("tax-amount.value"), Some("6.67"));
        assert!(!map.contains_key("tax-rate"));
    }

    #[test]
    fn basket_mapped_properties() {
        let basket = Basket::new().add(build_item());

        let map = basket.mapped_properties(BasketVersion::Klarna);

        assert_eq!(map.get_path("order-item.0.name"), Some("Shoes"));
        assert_eq!(map.get_path("order-item.0.quantity"), Some("2"));
        assert_eq!(map.get_path("order-item.0.amount.value"), Some("40"));
    }

    #[test]
    fn from_document() {
        let root = Element::new("payment").with_child(
            Element::new("order-items").with_child(
                Element::new("order-item")
                    .with_child(Element::new("name").with_text("Shoes"))
                    .with_child(
                        Element::new("amount")
                            .with_attribute("currency", "EUR")
                            .with_text("40.00"),
                    )
                    .with_child(Element::new("quantity").with_text("2")),
            ),
        );

        let basket = Basket::from_document(&root).unwrap();

        assert_eq!(
            basket.items(),
            &[Item::new("Shoes", Amount::new(Money::units(40), "EUR"), 2)]
        );
        assert!(Basket::from_document(&Element::new("payment")).unwrap().is_empty());
    }

    #[test]
    fn fail_on_invalid_quantity() {
        let root = Element::new("payment").with_child(
            Element::new("order-items").with_child(
                Element::new("order-item")
                    .with_child(Element::new("name").with_text("Shoes"))
                    .with_child(Element::new("amount").with_attribute("currency", "EUR").with_text("1"))
                    .with_child(Element::new("quantity").with_text("many")),
            ),
        );

        assert!(Basket::from_document(&root).is_err());
    }
}
