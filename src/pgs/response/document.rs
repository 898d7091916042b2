use crate::PaymentSdkError;
use crate::Result;

use indexmap::IndexMap;

/// Neutral hierarchical document node, independent of any XML library
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    name: String,
    attributes: IndexMap<String, String>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    /// Parses XML text, namespaces are dropped from element and attribute names
    pub fn parse(xml: &str) -> Result<Self> {
        let document = roxmltree::Document::parse(xml).map_err(|e| {
            PaymentSdkError::malformed_response(format!("Response is not valid XML: {e}"))
        })?;

        return Ok(Self::from_node(document.root_element()));
    }

    fn from_node(node: roxmltree::Node) -> Self {
        let attributes = node
            .attributes()
            .map(|attr| (attr.name().to_string(), attr.value().to_string()))
            .collect();

        let text = node
            .children()
            .filter(|child| child.is_text())
            .filter_map(|child| child.text())
            .collect::<String>();

        let children = node
            .children()
            .filter(|child| child.is_element())
            .map(Self::from_node)
            .collect();

        return Self {
            name: node.tag_name().name().to_string(),
            attributes,
            text,
            children,
        };
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|value| value.as_str())
    }

    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// First direct child with the given name
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Text of the first direct child with the given name, `None` when absent or blank
    pub fn child_text(&self, name: &str) -> Option<String> {
        self.child(name)
            .map(|child| child.text.trim())
            .filter(|text| !text.is_empty())
            .map(|text| text.to_string())
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Renders the element back into XML text
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        self.write_xml(&mut xml);
        xml
    }

    fn write_xml(&self, xml: &mut String) {
        xml.push('<');
        xml.push_str(&self.name);

        for (name, value) in self.attributes.iter() {
            xml.push_str(&format!(" {name}=\"{}\"", escape(value)));
        }

        if self.text.is_empty() && self.children.is_empty() {
            xml.push_str("/>");
            return;
        }

        xml.push('>');
        xml.push_str(&escape(&self.text));

        for child in self.children.iter() {
            child.write_xml(xml);
        }

        xml.push_str(&format!("</{}>", self.name));
    }
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
