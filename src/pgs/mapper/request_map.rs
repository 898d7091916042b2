use indexmap::IndexMap;

use serde::Serialize;

/// Insertion-ordered nested key/value structure, ready to be serialized into a gateway
/// request body
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct RequestMap(IndexMap<String, RequestValue>);

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum RequestValue {
    Text(String),
    Map(RequestMap),
    List(Vec<RequestMap>),
}

impl RequestMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: impl Into<RequestValue>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Inserts `value` unless it is missing or blank
    pub fn insert_text(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value.filter(|value| !value.trim().is_empty()) {
            self.insert(key, value);
        }
    }

    /// Inserts `map` unless it has no entries
    pub fn insert_map(&mut self, key: &str, map: RequestMap) {
        if !map.is_empty() {
            self.insert(key, map);
        }
    }

    /// Builds a single-entry map, e.g. `{"value": "maid"}`
    pub fn single(key: &str, value: impl Into<RequestValue>) -> Self {
        let mut map = Self::new();
        map.insert(key, value);
        map
    }

    /// Appends every entry of `other`, existing keys are overwritten in place
    pub fn extend(&mut self, other: RequestMap) {
        self.0.extend(other.0);
    }

    pub fn get(&self, key: &str) -> Option<&RequestValue> {
        self.0.get(key)
    }

    /// Looks up a text value through nested maps and lists, e.g. `card-token.token-id` or
    /// `payment-methods.payment-method.0.name`
    pub fn get_path(&self, path: &str) -> Option<&str> {
        let segments: Vec<&str> = path.split('.').collect();
        lookup(self, &segments)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|key| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RequestValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Single-level view keyed by dot-joined paths, list entries are index-qualified
    pub fn flatten(&self) -> IndexMap<String, String> {
        let mut flat = IndexMap::new();
        self.flatten_into("", &mut flat);
        flat
    }

    fn flatten_into(&self, prefix: &str, flat: &mut IndexMap<String, String>) {
        for (key, value) in self.0.iter() {
            let path = format!("{prefix}{key}");

            match value {
                RequestValue::Text(text) => {
                    flat.insert(path, text.clone());
                }
                RequestValue::Map(map) => map.flatten_into(&format!("{path}."), flat),
                RequestValue::List(list) => {
                    for (idx, item) in list.iter().enumerate() {
                        item.flatten_into(&format!("{path}.{idx}."), flat);
                    }
                }
            }
        }
    }
}

fn lookup<'a>(map: &'a RequestMap, segments: &[&str]) -> Option<&'a str> {
    let (head, rest) = segments.split_first()?;

    match (map.get(head)?, rest) {
        (RequestValue::Text(text), []) => Some(text.as_str()),
        (RequestValue::Map(inner), rest) if !rest.is_empty() => lookup(inner, rest),
        (RequestValue::List(list), [idx, rest @ ..]) => {
            let item = list.get(idx.parse::<usize>().ok()?)?;
            lookup(item, rest)
        }
        _ => None,
    }
}

impl From<&str> for RequestValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RequestValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<RequestMap> for RequestValue {
    fn from(map: RequestMap) -> Self {
        Self::Map(map)
    }
}

impl From<Vec<RequestMap>> for RequestValue {
    fn from(list: Vec<RequestMap>) -> Self {
        Self::List(list)
    }
}
