use crate::response::Element;

/// Card details echoed by the gateway, empty when the response carries none
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Card {
    pub token_id: Option<String>,
    pub masked_account_number: Option<String>,
    pub card_type: Option<String>,
    pub expiration_month: Option<String>,
    pub expiration_year: Option<String>,
}

impl Card {
    pub fn from_document(root: &Element) -> Self {
        let mut card = Self::default();

        if let Some(token) = root.child("card-token") {
            card.token_id = token.child_text("token-id");
            card.masked_account_number = token.child_text("masked-account-number");
        }

        if let Some(details) = root.child("card") {
            card.card_type = details.child_text("card-type");
            card.expiration_month = details.child_text("expiration-month");
            card.expiration_year = details.child_text("expiration-year");
        }

        card
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
