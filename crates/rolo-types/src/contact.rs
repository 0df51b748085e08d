use serde::{Deserialize, Serialize};

use crate::id::ContactId;

/// A single address-book entry.
///
/// Callers only ever see owned copies of a `Contact`; the store keeps the
/// authoritative record and its index entries private.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    /// Build a contact with a freshly generated id.
    pub fn new(fields: NewContact) -> Self {
        Self {
            id: ContactId::generate(),
            name: fields.name,
            phone: fields.phone,
            email: fields.email,
        }
    }
}

/// The field triple used to create a contact.
///
/// Values are taken verbatim; format checks happen before this type is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl NewContact {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }
}

/// A partial set of field changes. `None` leaves the field untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ContactPatch {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Returns `true` if no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none() && self.email.is_none()
    }

    /// Overwrite the provided fields on `contact`. The id is never touched.
    pub fn apply_to(&self, contact: &mut Contact) {
        if let Some(name) = &self.name {
            contact.name.clone_from(name);
        }
        if let Some(phone) = &self.phone {
            contact.phone.clone_from(phone);
        }
        if let Some(email) = &self.email {
            contact.email.clone_from(email);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dana() -> Contact {
        Contact::new(NewContact::new("Dana Lee", "5551234567", "dana@x.com"))
    }

    #[test]
    fn new_contact_copies_fields() {
        let c = dana();
        assert_eq!(c.name, "Dana Lee");
        assert_eq!(c.phone, "5551234567");
        assert_eq!(c.email, "dana@x.com");
    }

    #[test]
    fn patch_applies_only_provided_fields() {
        let mut c = dana();
        let id = c.id;
        ContactPatch::default().name("Dana Park").apply_to(&mut c);
        assert_eq!(c.id, id);
        assert_eq!(c.name, "Dana Park");
        assert_eq!(c.phone, "5551234567");
        assert_eq!(c.email, "dana@x.com");
    }

    #[test]
    fn empty_patch() {
        assert!(ContactPatch::default().is_empty());
        assert!(!ContactPatch::default().email("a@b.c").is_empty());
    }

    #[test]
    fn json_shape() {
        let c = dana();
        let value = serde_json::to_value(&c).unwrap();
        assert_eq!(value["id"], c.id.to_string());
        assert_eq!(value["name"], "Dana Lee");
        assert_eq!(value["phone"], "5551234567");
        assert_eq!(value["email"], "dana@x.com");
    }

    #[test]
    fn patch_skips_absent_fields_when_serialized() {
        let patch = ContactPatch::default().phone("5550000000");
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"phone":"5550000000"}"#);
    }
}
