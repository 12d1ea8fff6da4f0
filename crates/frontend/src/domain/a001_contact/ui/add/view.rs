use super::model;
use super::view_model::AddContactViewModel;
use crate::shared::components::ui::{Button, FormField};
use crate::shared::config::AppConfig;
use crate::shared::notify::NotificationService;
use contracts::domain::a001_contact::ContactField;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::Spinner;

#[component]
pub fn AddContactPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let notifier = use_context::<NotificationService>()
        .expect("NotificationService not provided in context (provide it in app root)");
    let vm = AddContactViewModel::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let api = config.api.clone();
        spawn_local(async move {
            vm.submit_with(notifier, move |dto| async move {
                model::create_contact(&api, &dto).await
            })
            .await;
        });
    };

    let field = move |f: ContactField, placeholder: &'static str, input_type: &'static str| {
        view! {
            <FormField
                id=f.key()
                label=f.label()
                value=Signal::derive(move || vm.field_value(f))
                on_input=Callback::new(move |value: String| vm.set_field(f, value))
                error=Signal::derive(move || vm.field_error(f))
                placeholder=placeholder.to_string()
                input_type=input_type.to_string()
            />
        }
    };

    view! {
        <main class="add-contact-page">
            <form class="add-contact-form" on:submit=on_submit novalidate>
                <h2 class="add-contact-form__title">"Add a New Contact"</h2>
                <hr />

                {field(ContactField::Name, "Marcille", "text")}
                {field(ContactField::Phone, "+62-xxx-xxxx-xxxx", "tel")}

                <div class="add-contact-form__actions">
                    <Button
                        variant="secondary".to_string()
                        size="sm".to_string()
                        block=true
                        button_type="button".to_string()
                        disabled=Signal::derive(move || vm.controls_disabled())
                        on_click=Callback::new(move |_| {
                            vm.reset();
                        })
                    >
                        "Reset"
                    </Button>
                    <Button
                        variant="primary".to_string()
                        size="sm".to_string()
                        block=true
                        button_type="submit".to_string()
                        class="add-contact-form__submit".to_string()
                        disabled=Signal::derive(move || vm.controls_disabled())
                    >
                        <Show when=move || vm.controls_disabled()>
                            <Spinner />
                        </Show>
                        "Submit"
                    </Button>
                </div>
            </form>
        </main>
    }
}
