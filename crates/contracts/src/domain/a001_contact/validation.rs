//! Validation schema of the "add contact" form.
//!
//! The phone pattern is intentionally permissive: it accepts an optional
//! leading `+`, digit groups optionally wrapped in parentheses, separated by
//! optional spaces or hyphens. It is not an E.164 validator and accepts many
//! strings that are not dialable numbers.

use super::aggregate::ContactDto;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// ASCII digits only; `\d` in `regex` would also match other Unicode digits.
pub static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([+]?[\s0-9]+)?([0-9]{3}|[(]?[0-9]+[)])?([-]?[\s]?[0-9])+$")
        .expect("phone pattern is a valid regex")
});

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Phone,
}

impl ContactField {
    pub fn all() -> [ContactField; 2] {
        [ContactField::Name, ContactField::Phone]
    }

    /// Form control id / JSON key
    pub fn key(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Phone => "phone",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Contact Name",
            ContactField::Phone => "Phone Number",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required!")]
    NameRequired,
    #[error("Invalid Number!")]
    PhoneInvalid,
}

/// Per-field validation result of the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormErrors {
    pub name: Option<ValidationError>,
    pub phone: Option<ValidationError>,
}

impl ContactFormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.phone.is_none()
    }

    pub fn get(&self, field: ContactField) -> Option<ValidationError> {
        match field {
            ContactField::Name => self.name,
            ContactField::Phone => self.phone,
        }
    }

    pub fn set(&mut self, field: ContactField, error: Option<ValidationError>) {
        match field {
            ContactField::Name => self.name = error,
            ContactField::Phone => self.phone = error,
        }
    }

    /// Message to render under the field, if any
    pub fn message(&self, field: ContactField) -> Option<String> {
        self.get(field).map(|e| e.to_string())
    }
}

impl ContactDto {
    pub fn validate_field(&self, field: ContactField) -> Option<ValidationError> {
        match field {
            ContactField::Name if self.name.trim().is_empty() => Some(ValidationError::NameRequired),
            ContactField::Phone if !is_valid_phone(&self.phone) => Some(ValidationError::PhoneInvalid),
            _ => None,
        }
    }

    pub fn validate(&self) -> Result<(), ContactFormErrors> {
        let mut errors = ContactFormErrors::default();
        for field in ContactField::all() {
            errors.set(field, self.validate_field(field));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
