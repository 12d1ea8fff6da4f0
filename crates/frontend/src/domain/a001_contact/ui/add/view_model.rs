use crate::shared::api_utils::ApiError;
use crate::shared::notify::NotificationService;
use contracts::domain::a001_contact::{Contact, ContactDto, ContactField, ContactFormErrors};
use leptos::prelude::*;
use std::future::Future;

pub const SUCCESS_TITLE: &str = "Contact Added Successfully!";
pub const FAILURE_TITLE: &str = "An Error Occurred!";
pub const FAILURE_DESCRIPTION: &str = "Failed to save the contact";

pub fn success_description(name: &str) -> String {
    format!("{} has been added to your phone book", name)
}

/// How a submit attempt ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another submission from this page is still in flight
    Busy,
    /// Validation failed; nothing was sent
    Invalid(ContactFormErrors),
    Saved(Contact),
    Failed,
}

/// Holds `is_loading` true for its lifetime.
///
/// Dropping clears the flag on every exit path, including the submit future
/// itself being dropped mid-request.
struct LoadingGuard(RwSignal<bool>);

impl LoadingGuard {
    fn engage(flag: RwSignal<bool>) -> Self {
        flag.try_set(true);
        Self(flag)
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.0.try_set(false);
    }
}

/// ViewModel for the "add contact" form
#[derive(Clone, Copy)]
pub struct AddContactViewModel {
    pub form: RwSignal<ContactDto>,
    pub errors: RwSignal<ContactFormErrors>,
    pub is_loading: RwSignal<bool>,
    /// Set by the first submit attempt; from then on edits re-validate their field
    submitted: RwSignal<bool>,
}

impl AddContactViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(ContactDto::default()),
            errors: RwSignal::new(ContactFormErrors::default()),
            is_loading: RwSignal::new(false),
            submitted: RwSignal::new(false),
        }
    }

    /// Submit and reset are both disabled while a request is in flight
    pub fn controls_disabled(&self) -> bool {
        self.is_loading.get()
    }

    pub fn field_value(&self, field: ContactField) -> String {
        self.form.with(|f| match field {
            ContactField::Name => f.name.clone(),
            ContactField::Phone => f.phone.clone(),
        })
    }

    pub fn field_error(&self, field: ContactField) -> Option<String> {
        self.errors.with(|e| e.message(field))
    }

    pub fn set_field(&self, field: ContactField, value: String) {
        self.form.update(|f| match field {
            ContactField::Name => f.name = value,
            ContactField::Phone => f.phone = value,
        });

        if self.submitted.get_untracked() {
            let error = self.form.with_untracked(|f| f.validate_field(field));
            self.errors.update(|e| e.set(field, error));
        }
    }

    /// Clear fields and validation state; no-op while loading
    pub fn reset(&self) -> bool {
        if self.is_loading.get_untracked() {
            return false;
        }
        self.clear();
        true
    }

    fn clear(&self) {
        self.form.try_set(ContactDto::default());
        self.errors.try_set(ContactFormErrors::default());
        self.submitted.try_set(false);
    }

    /// Validate the current values and publish per-field errors
    pub fn validate(&self) -> Result<ContactDto, ContactFormErrors> {
        self.submitted.set(true);
        let current = self.form.get_untracked();

        match current.validate() {
            Ok(()) => {
                self.errors.set(ContactFormErrors::default());
                Ok(current)
            }
            Err(errors) => {
                self.errors.set(errors.clone());
                Err(errors)
            }
        }
    }

    /// Validate, send through `send`, and report the result as a toast
    ///
    /// On success the form is cleared; on failure the values are kept so the
    /// user can retry. State writes after the request tolerate the page having
    /// been unmounted in the meantime.
    pub async fn submit_with<F, Fut>(self, notifier: NotificationService, send: F) -> SubmitOutcome
    where
        F: FnOnce(ContactDto) -> Fut,
        Fut: Future<Output = Result<Contact, ApiError>>,
    {
        if self.is_loading.try_get_untracked().unwrap_or(true) {
            return SubmitOutcome::Busy;
        }

        let values = match self.validate() {
            Ok(values) => values,
            Err(errors) => return SubmitOutcome::Invalid(errors),
        };

        let _loading = LoadingGuard::engage(self.is_loading);
        log::debug!("Submitting contact {:?}", values.name);

        match send(values).await {
            Ok(contact) => {
                log::info!("Contact saved: {}", contact.name);
                notifier.success(SUCCESS_TITLE, success_description(&contact.name));
                self.clear();
                SubmitOutcome::Saved(contact)
            }
            Err(e) => {
                log::warn!("Failed to save contact: {}", e);
                notifier.error(FAILURE_TITLE, FAILURE_DESCRIPTION);
                SubmitOutcome::Failed
            }
        }
    }
}

impl Default for AddContactViewModel {
    fn default() -> Self {
        Self::new()
    }
}
