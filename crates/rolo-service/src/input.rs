use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ServiceError, ServiceResult};

const CONTACT_FIELDS: [&str; 3] = ["name", "phone", "email"];

/// Raw creation input. Every field is optional here so that a missing field
/// is reported by validation rather than by the deserializer. Extra fields
/// are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl ContactDraft {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            phone: Some(phone.into()),
            email: Some(email.into()),
        }
    }

    /// Decode one item of a JSON creation batch. Keys other than the three
    /// contact fields are ignored.
    pub fn from_json(item: Value) -> ServiceResult<Self> {
        let mut fields = contact_object(item)?;
        Ok(Self {
            name: string_field(&mut fields, "name")?,
            phone: string_field(&mut fields, "phone")?,
            email: string_field(&mut fields, "email")?,
        })
    }
}

/// Raw update input: the target id plus any subset of fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactUpdate {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl ContactUpdate {
    pub fn for_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Default::default()
        }
    }

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
}

/// One item of a JSON update batch whose id has been read but whose fields
/// are not checked until [`PendingUpdate::into_update`].
#[derive(Clone, Debug, PartialEq)]
pub struct PendingUpdate {
    id: String,
    fields: Map<String, Value>,
}

impl PendingUpdate {
    pub fn from_json(item: Value) -> ServiceResult<Self> {
        let mut fields = contact_object(item)?;
        match fields.remove("id") {
            None => Err(ServiceError::MissingId),
            Some(Value::String(id)) => Ok(Self { id, fields }),
            Some(_) => Err(ServiceError::Validation(
                "Contact ID must be a string".to_string(),
            )),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Reject unknown keys and non-string values, then build the update.
    pub fn into_update(self) -> ServiceResult<ContactUpdate> {
        let Self { id, mut fields } = self;
        if let Some(key) = fields
            .keys()
            .find(|k| !CONTACT_FIELDS.contains(&k.as_str()))
        {
            return Err(ServiceError::Validation(format!(
                "Invalid field for update: {key}"
            )));
        }
        Ok(ContactUpdate {
            id: Some(id),
            name: string_field(&mut fields, "name")?,
            phone: string_field(&mut fields, "phone")?,
            email: string_field(&mut fields, "email")?,
        })
    }
}

fn contact_object(item: Value) -> ServiceResult<Map<String, Value>> {
    match item {
        Value::Object(fields) => Ok(fields),
        _ => Err(ServiceError::Validation(
            "Each contact must be an object".to_string(),
        )),
    }
}

fn string_field(fields: &mut Map<String, Value>, name: &str) -> ServiceResult<Option<String>> {
    match fields.remove(name) {
        None => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(_) => Err(ServiceError::Validation(format!(
            "Field '{name}' must be a non-empty string"
        ))),
    }
}
