use crate::mapper::RequestMap;
use crate::response::Element;

/// Payer or shipping party, every field is optional
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccountHolder {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub address: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    pub street1: Option<String>,
    pub street2: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl AccountHolder {
    pub fn mapped_properties(&self) -> RequestMap {
        let mut map = RequestMap::new();

        map.insert_text("first-name", self.first_name.as_deref());
        map.insert_text("last-name", self.last_name.as_deref());
        map.insert_text("email", self.email.as_deref());
        map.insert_text("phone", self.phone.as_deref());
        map.insert_text("date-of-birth", self.date_of_birth.as_deref());

        if let Some(address) = &self.address {
            map.insert_map("address", address.mapped_properties());
        }

        map
    }

    pub fn from_element(element: &Element) -> Self {
        Self {
            first_name: element.child_text("first-name"),
            last_name: element.child_text("last-name"),
            email: element.child_text("email"),
            phone: element.child_text("phone"),
            date_of_birth: element.child_text("date-of-birth"),
            address: element.child("address").map(Address::from_element),
        }
    }
}

impl Address {
    pub fn mapped_properties(&self) -> RequestMap {
        let mut map = RequestMap::new();

        map.insert_text("street1", self.street1.as_deref());
        map.insert_text("street2", self.street2.as_deref());
        map.insert_text("city", self.city.as_deref());
        map.insert_text("postal-code", self.postal_code.as_deref());
        map.insert_text("state", self.state.as_deref());
        map.insert_text("country", self.country.as_deref());

        map
    }

    pub fn from_element(element: &Element) -> Self {
        Self {
            street1: element.child_text("street1"),
            street2: element.child_text("street2"),
            city: element.child_text("city"),
            postal_code: element.child_text("postal-code"),
            state: element.child_text("state"),
            country: element.child_text("country"),
        }
    }
}
