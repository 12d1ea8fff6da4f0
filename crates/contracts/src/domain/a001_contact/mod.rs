pub mod aggregate;
pub mod validation;

pub use aggregate::{Contact, ContactDto, CreateContactResponse};
pub use validation::{is_valid_phone, ContactField, ContactFormErrors, ValidationError};
