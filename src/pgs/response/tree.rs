use super::Element;

use indexmap::IndexMap;

/// Typed view of an element's content used for flattening
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// No children, no attributes
    Leaf(String),

    /// No children, at least one attribute
    AttributedLeaf {
        attributes: IndexMap<String, String>,
        text: String,
    },

    /// Same-named siblings, in document order
    List(Vec<Node>),

    /// Children grouped by name in first-seen order
    Branch(IndexMap<String, Node>),
}

impl Node {
    pub fn from_element(element: &Element) -> Self {
        if !element.is_leaf() {
            return Self::Branch(convert(element));
        }

        if element.attributes().is_empty() {
            return Self::Leaf(element.text().to_string());
        }

        return Self::AttributedLeaf {
            attributes: element.attributes().clone(),
            text: element.text().to_string(),
        };
    }
}

/// Groups the children of `root` by name, repeated names become a `List`
pub fn convert(root: &Element) -> IndexMap<String, Node> {
    let mut groups: IndexMap<&str, Vec<&Element>> = IndexMap::new();

    for child in root.children() {
        groups.entry(child.name()).or_default().push(child);
    }

    groups
        .into_iter()
        .map(|(name, elements)| {
            let node = match elements.as_slice() {
                [single] => Node::from_element(single),
                many => Node::List(many.iter().map(|element| Node::from_element(element)).collect()),
            };

            (name.to_string(), node)
        })
        .collect()
}

/// Single-level view of the document below `root`
///
/// Singleton children are keyed by their dot-joined path, repeated children by their
/// path plus index. Attributes of a singleton attributed leaf are keyed beside it, at the
/// parent's level. The first key written wins.
pub fn flatten(root: &Element) -> IndexMap<String, String> {
    let mut data = IndexMap::new();
    flatten_nodes(&convert(root), "", &mut data);
    data
}

fn flatten_nodes(nodes: &IndexMap<String, Node>, prefix: &str, data: &mut IndexMap<String, String>) {
    for (name, node) in nodes.iter() {
        flatten_node(node, prefix, &format!("{prefix}{name}"), data);
    }
}

fn flatten_node(node: &Node, prefix: &str, path: &str, data: &mut IndexMap<String, String>) {
    match node {
        Node::Leaf(text) => put(data, path, text),

        Node::AttributedLeaf { attributes, text } => {
            for (name, value) in attributes.iter() {
                put(data, &format!("{prefix}{name}"), value);
            }
            put(data, path, text);
        }

        Node::Branch(children) => flatten_nodes(children, &format!("{path}."), data),

        Node::List(items) => {
            for (idx, item) in items.iter().enumerate() {
                let item_path = format!("{path}.{idx}");

                match item {
                    Node::AttributedLeaf { attributes, text } => {
                        for (name, value) in attributes.iter() {
                            put(data, &format!("{item_path}.{name}"), value);
                        }
                        put(data, &item_path, text);
                    }
                    other => flatten_node(other, &format!("{item_path}."), &item_path, data),
                }
            }
        }
    }
}

fn put(data: &mut IndexMap<String, String>, key: &str, value: &str) {
    if data.contains_key(key) {
        return;
    }

    data.insert(key.to_string(), collapse_whitespace(value));
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
