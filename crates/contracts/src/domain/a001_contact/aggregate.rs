use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Contact as stored by the phone book backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    #[serde(default)]
    pub phone: String,
}

impl Contact {
    pub fn collection_name() -> &'static str {
        "contact"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Values of the "add contact" form, sent as the body of `POST /contact`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ContactDto {
    pub name: String,
    pub phone: String,
}

impl ContactDto {
    pub fn new(name: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
        }
    }
}

/// Successful response of `POST /contact`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateContactResponse {
    pub contact: Contact,
}
