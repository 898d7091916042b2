use super::{Element, Response};

use crate::Result;

use indexmap::IndexMap;

const STATUS_ATTRIBUTES: &[(&str, &str)] = &[
    ("status_code_", "code"),
    ("status_description_", "description"),
    ("status_severity_", "severity"),
];

const CUSTOM_FIELD_ATTRIBUTES: &[(&str, &str)] = &[
    ("field_name_", "field-name"),
    ("field_value_", "field-value"),
];

const CARD_TOKEN_FIELDS: &[(&str, &str)] = &[
    ("token_id", "token-id"),
    ("masked_account_number", "masked-account-number"),
];

/// Flat name/value pairs posted back by a hosted payment form
///
/// Indexed keys such as `status_code_1` are regrouped into the nested sections of a
/// regular response document so the same parser applies.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NvpPayload(IndexMap<String, String>);

impl NvpPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.0.insert(name.to_string(), value.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(|value| value.as_str())
    }

    pub fn to_element(&self) -> Element {
        let mut root = Element::new("payment");

        let mut statuses: IndexMap<&str, Element> = IndexMap::new();
        let mut custom_fields: IndexMap<&str, Element> = IndexMap::new();
        let mut card_token = Element::new("card-token");

        for (name, value) in self.0.iter() {
            if let Some((idx, attribute)) = indexed(name, STATUS_ATTRIBUTES) {
                statuses
                    .entry(idx)
                    .or_insert_with(|| Element::new("status"))
                    .set_attribute(attribute, value);
                continue;
            }

            if let Some((idx, attribute)) = indexed(name, CUSTOM_FIELD_ATTRIBUTES) {
                custom_fields
                    .entry(idx)
                    .or_insert_with(|| Element::new("custom-field"))
                    .set_attribute(attribute, value);
                continue;
            }

            if let Some((_, child)) = CARD_TOKEN_FIELDS.iter().find(|(key, _)| *key == name.as_str()) {
                card_token.push_child(Element::new(child).with_text(value));
                continue;
            }

            match name.as_str() {
                "requested_amount_currency" => {}
                "requested_amount" => {
                    let mut amount = Element::new("requested-amount").with_text(value);
                    if let Some(currency) = self.get("requested_amount_currency") {
                        amount = amount.with_attribute("currency", currency);
                    }
                    root.push_child(amount);
                }
                _ => root.push_child(Element::new(&name.replace('_', "-")).with_text(value)),
            }
        }

        if !statuses.is_empty() {
            root.push_child(group("statuses", statuses));
        }

        if !custom_fields.is_empty() {
            root.push_child(group("custom-fields", custom_fields));
        }

        if !card_token.is_leaf() {
            root.push_child(card_token);
        }

        root
    }

    pub fn into_response(self) -> Result<Response> {
        Response::parse(self.to_element())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NvpPayload {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

/// Splits `status_code_1` into `("1", "code")` when it matches one of `prefixes`
fn indexed<'a>(name: &'a str, prefixes: &[(&str, &'static str)]) -> Option<(&'a str, &'static str)> {
    prefixes.iter().find_map(|(prefix, attribute)| {
        name.strip_prefix(prefix)
            .filter(|idx| !idx.is_empty() && idx.chars().all(|c| c.is_ascii_digit()))
            .map(|idx| (idx, *attribute))
    })
}

fn group(name: &str, children: IndexMap<&str, Element>) -> Element {
    children
        .into_values()
        .fold(Element::new(name), |parent, child| parent.with_child(child))
}
