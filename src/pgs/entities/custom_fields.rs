use crate::mapper::RequestMap;
use crate::response::Element;

use indexmap::IndexMap;

/// Prepended to every custom field name on the wire
pub const CUSTOM_FIELD_PREFIX: &str = "paysdk_";

/// Merchant-defined name/value pairs echoed back by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomFields(IndexMap<String, String>);

impl CustomFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, value: &str) {
        self.0.insert(name.to_string(), value.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(|value| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn mapped_properties(&self) -> RequestMap {
        let fields = self
            .iter()
            .map(|(name, value)| {
                let mut field = RequestMap::new();
                field.insert("field-name", format!("{CUSTOM_FIELD_PREFIX}{name}"));
                field.insert("field-value", value);
                field
            })
            .collect::<Vec<_>>();

        RequestMap::single("custom-field", fields)
    }

    /// Reads `custom-fields` children carrying both a `field-name` and a `field-value`
    /// attribute, names lose their prefix
    pub fn from_document(root: &Element) -> Self {
        let mut fields = Self::new();

        let custom_fields = match root.child("custom-fields") {
            Some(custom_fields) => custom_fields,
            None => return fields,
        };

        for field in custom_fields.children() {
            if let (Some(name), Some(value)) =
                (field.attribute("field-name"), field.attribute("field-value"))
            {
                let name = name.strip_prefix(CUSTOM_FIELD_PREFIX).unwrap_or(name);
                fields.add(name, value);
            }
        }

        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_properties_add_prefix() {
        let mut fields = CustomFields::new();
        fields.add("orderId", "42");

        let map = fields.mapped_properties();

        assert_eq!(map.get_path("custom-field.0.field-name"), Some("paysdk_orderId"));
        assert_eq!(map.get_path("custom-field.0.field-value"), Some("42"));
    }

    #[test]
    fn from_document_strips_prefix_and_skips_incomplete_fields() {
        let root = Element::new("payment").with_child(
            Element::new("custom-fields")
                .with_child(
                    Element::new("custom-field")
                        .with_attribute("field-name", "paysdk_orderId")
                        .with_attribute("field-value", "42"),
                )
                .with_child(Element::new("custom-field").with_attribute("field-name", "paysdk_x")),
        );

        let fields = CustomFields::from_document(&root);

        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("orderId"), Some("42"));
    }
}
