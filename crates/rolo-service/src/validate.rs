//! Field presence and format checks.
//!
//! Checks never rewrite values: what passes is stored exactly as given.

use rolo_types::{ContactPatch, NewContact};

use crate::error::{ServiceError, ServiceResult};
use crate::input::{ContactDraft, ContactUpdate};

/// Separators ignored when counting phone digits.
const PHONE_SEPARATORS: &[char] = &['-', ' ', '(', ')'];

/// Minimum number of digits in a phone number.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Check a creation draft and turn it into a store-ready triple.
pub fn validate_draft(draft: &ContactDraft) -> ServiceResult<NewContact> {
    let name = required("name", draft.name.as_deref())?;
    let phone = required("phone", draft.phone.as_deref())?;
    let email = required("email", draft.email.as_deref())?;

    validate_email(email)?;
    validate_phone(phone)?;

    Ok(NewContact::new(name, phone, email))
}

/// Check the field part of an update and turn it into a patch.
///
/// The id is handled by the caller.
pub fn validate_update_fields(update: &ContactUpdate) -> ServiceResult<ContactPatch> {
    let patch = ContactPatch {
        name: provided("name", update.name.as_deref())?,
        phone: provided("phone", update.phone.as_deref())?,
        email: provided("email", update.email.as_deref())?,
    };

    if let Some(email) = &patch.email {
        validate_email(email)?;
    }
    if let Some(phone) = &patch.phone {
        validate_phone(phone)?;
    }

    Ok(patch)
}

/// An email needs an `@` and a `.` somewhere after the last `@`.
pub fn validate_email(email: &str) -> ServiceResult<()> {
    let valid = email
        .rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.'));
    if valid {
        Ok(())
    } else {
        Err(ServiceError::Validation(format!(
            "Invalid email format: {email}"
        )))
    }
}

/// A phone, once separators are stripped, must be at least
/// [`MIN_PHONE_DIGITS`] ASCII digits and nothing else.
pub fn validate_phone(phone: &str) -> ServiceResult<()> {
    let digits: String = phone
        .chars()
        .filter(|c| !PHONE_SEPARATORS.contains(c))
        .collect();
    if digits.len() >= MIN_PHONE_DIGITS && digits.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ServiceError::Validation(format!(
            "Invalid phone format: {phone}"
        )))
    }
}

fn required<'a>(field: &str, value: Option<&'a str>) -> ServiceResult<&'a str> {
    match value {
        None => Err(ServiceError::Validation(format!(
            "Missing required field: {field}"
        ))),
        Some(v) => non_blank(field, v),
    }
}

fn provided(field: &str, value: Option<&str>) -> ServiceResult<Option<String>> {
    value
        .map(|v| non_blank(field, v).map(str::to_string))
        .transpose()
}

fn non_blank<'a>(field: &str, value: &'a str) -> ServiceResult<&'a str> {
    if value.trim().is_empty() {
        Err(ServiceError::Validation(format!(
            "Field '{field}' must be a non-empty string"
        )))
    } else {
        Ok(value)
    }
}
