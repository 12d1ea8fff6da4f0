//! Types shared between the contact book frontend and its backend API.

pub mod domain;
