use super::{tree, Element};

use crate::entities::{AccountHolder, Amount, Basket, Card, CustomFields, StatusCollection};
use crate::ids::TransactionId;
use crate::transactions::{Operation, TransactionType};
use crate::PaymentSdkError;
use crate::Result;

use indexmap::IndexMap;

/// Parsed gateway response
///
/// Construction fails unless the document carries a `request-id` and at least one
/// well-formed status. Every other section is optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    document: Element,
    status_collection: StatusCollection,
    request_id: String,
    transaction_id: Option<TransactionId>,
    transaction_type: Option<TransactionType>,
    requested_amount: Option<Amount>,
    basket: Basket,
    account_holder: Option<AccountHolder>,
    shipping: Option<AccountHolder>,
    custom_fields: CustomFields,
    card: Card,
    operation: Option<Operation>,
    valid_signature: bool,
}

impl Response {
    pub fn from_xml(xml: &str) -> Result<Self> {
        Self::parse(Element::parse(xml)?)
    }

    pub fn parse(document: Element) -> Result<Self> {
        let status_collection = parse_statuses(&document)?;
        let request_id = find_element(&document, "request-id")?;

        let requested_amount = match document.child("requested-amount") {
            Some(element) => Some(Amount::from_element(element)?),
            None => None,
        };

        let response = Self {
            status_collection,
            request_id,
            transaction_id: document
                .child_text("transaction-id")
                .map(TransactionId::from),
            transaction_type: document
                .child_text("transaction-type")
                .map(|code| TransactionType::from(code.as_str())),
            requested_amount,
            basket: Basket::from_document(&document)?,
            account_holder: document.child("account-holder").map(AccountHolder::from_element),
            shipping: document.child("shipping").map(AccountHolder::from_element),
            custom_fields: CustomFields::from_document(&document),
            card: Card::from_document(&document),
            operation: None,
            valid_signature: true,
            document,
        };

        log::debug!(
            "Parsed response {:?} with {} statuses",
            response.request_id,
            response.status_collection.len()
        );

        return Ok(response);
    }

    /// The document rendered back into XML text
    pub fn raw_data(&self) -> String {
        self.document.to_xml()
    }

    /// Dot-joined view of the whole document, see `tree::flatten`
    pub fn data(&self) -> IndexMap<String, String> {
        tree::flatten(&self.document)
    }

    /// Text of a top-level element
    pub fn find_element(&self, name: &str) -> Result<String> {
        find_element(&self.document, name)
    }

    /// Payload of the QR code some wallet methods return
    pub fn authorization_code(&self) -> Result<String> {
        let code = self.find_element("authorization-code").map_err(|_| {
            PaymentSdkError::malformed_response("Authorization-code not found in response.")
        })?;

        return Ok(code);
    }

    pub fn document(&self) -> &Element {
        &self.document
    }

    pub fn status_collection(&self) -> &StatusCollection {
        &self.status_collection
    }

    pub fn request_id(&self) -> &str {
        &self.request_id
    }

    pub fn transaction_id(&self) -> Option<&TransactionId> {
        self.transaction_id.as_ref()
    }

    pub fn transaction_type(&self) -> Option<&TransactionType> {
        self.transaction_type.as_ref()
    }

    pub fn requested_amount(&self) -> Option<&Amount> {
        self.requested_amount.as_ref()
    }

    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    pub fn account_holder(&self) -> Option<&AccountHolder> {
        self.account_holder.as_ref()
    }

    pub fn shipping(&self) -> Option<&AccountHolder> {
        self.shipping.as_ref()
    }

    pub fn custom_fields(&self) -> &CustomFields {
        &self.custom_fields
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    /// Operation that produced this response, set by the caller
    ///
    /// Tells a void apart from a refund after a cancel.
    pub fn operation(&self) -> Option<&Operation> {
        self.operation.as_ref()
    }

    pub fn set_operation(&mut self, operation: Operation) {
        self.operation = Some(operation);
    }

    pub fn is_valid_signature(&self) -> bool {
        self.valid_signature
    }

    /// Set by signature verification once the response exists
    pub fn set_valid_signature(&mut self, valid_signature: bool) {
        self.valid_signature = valid_signature;
    }
}

fn parse_statuses(document: &Element) -> Result<StatusCollection> {
    let statuses = document
        .child("statuses")
        .ok_or_else(|| PaymentSdkError::malformed_response("Missing statuses in response."))?;

    let collection = StatusCollection::from_element(statuses)?;

    if collection.is_empty() {
        Err(PaymentSdkError::malformed_response("Missing status in response."))?
    }

    return Ok(collection);
}

fn find_element(document: &Element, name: &str) -> Result<String> {
    let element = document.child(name).ok_or_else(|| {
        PaymentSdkError::malformed_response(format!("Missing {name} in response."))
    })?;

    return Ok(element.text().trim().to_string());
}
