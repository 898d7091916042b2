use crate::response::Element;
use crate::PaymentSdkError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    Information,
    Warning,
    Error,
    Other(String),
}

impl From<&str> for Severity {
    fn from(severity: &str) -> Self {
        match severity {
            "information" => Self::Information,
            "warning" => Self::Warning,
            "error" => Self::Error,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Information => "information",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Other(severity) => severity.as_str(),
        }
    }
}

/// One gateway status entry, all three fields are mandatory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub code: String,
    pub description: String,
    pub severity: Severity,
}

impl Status {
    pub fn new(code: &str, description: &str, severity: &str) -> Self {
        return Self {
            code: code.to_string(),
            description: description.to_string(),
            severity: Severity::from(severity),
        };
    }

    /// Reads `<status code=".." description=".." severity=".."/>`
    pub fn from_element(element: &Element) -> Result<Self> {
        let code = required_attribute(element, "code")?;
        let description = required_attribute(element, "description")?;
        let severity = required_attribute(element, "severity")?;

        return Ok(Self::new(code, description, severity));
    }
}

fn required_attribute<'a>(element: &'a Element, name: &str) -> Result<&'a str> {
    let value = element
        .attribute(name)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| {
            PaymentSdkError::malformed_response(format!("Missing status {name} in response."))
        })?;

    return Ok(value);
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusCollection(Vec<Status>);

impl StatusCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, status: Status) {
        self.0.push(status);
    }

    /// Reads every `status` child of a `statuses` element
    pub fn from_element(statuses: &Element) -> Result<Self> {
        let mut collection = Self::new();

        for status in statuses.children_named("status") {
            collection.add(Status::from_element(status)?);
        }

        return Ok(collection);
    }

    pub fn has_status_code(&self, code: &str) -> bool {
        self.0.iter().any(|status| status.code == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Status> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_status(code: &str, description: &str, severity: &str) -> Element {
        Element::new("status")
            .with_attribute("code", code)
            .with_attribute("description", description)
            .with_attribute("severity", severity)
    }

    #[test]
    fn from_element() {
        let statuses = Element::new("statuses")
            .with_child(build_status("201.0000", "created", "information"))
            .with_child(build_status("500.1072", "card not enrolled", "warning"));

        let collection = StatusCollection::from_element(&statuses).unwrap();

        assert_eq!(collection.len(), 2);
        assert!(collection.has_status_code("500.1072"));
        assert_eq!(
            collection.iter().next(),
            Some(&Status {
                code: "201.0000".to_string(),
                description: "created".to_string(),
                severity: Severity::Information,
            })
        );
    }

    #[test]
    fn fail_on_blank_attribute() {
        let statuses = Element::new("statuses").with_child(build_status("00", "", "error"));

        let err = StatusCollection::from_element(&statuses).unwrap_err();

        assert_eq!(
            err.downcast_ref::<PaymentSdkError>(),
            Some(&PaymentSdkError::MalformedResponse(
                "Missing status description in response.".to_string()
            ))
        );
    }

    #[test]
    fn unknown_severity_is_kept() {
        assert_eq!(Severity::from("fatal"), Severity::Other("fatal".to_string()));
        assert_eq!(Severity::from("fatal").as_str(), "fatal");
    }
}
