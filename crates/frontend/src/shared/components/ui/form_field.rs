use leptos::prelude::*;

/// `aria-describedby` target; the message element exists only while there is an error
fn described_by(message_id: &str, has_error: bool) -> Option<String> {
    has_error.then(|| message_id.to_string())
}

/// Labelled text input with an inline validation message
#[component]
pub fn FormField(
    /// ID of the input element, also used by the label
    #[prop(into)]
    id: String,
    /// Label text
    #[prop(into)]
    label: String,
    /// Input value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new value on every keystroke
    on_input: Callback<String>,
    /// Validation message shown under the input
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "tel", "email", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());
    let has_error = move || error.with(|e| e.is_some());
    let label_for = id.clone();
    let message_id = format!("{}-message", id);
    let describing_id = message_id.clone();
    let group_class = move || {
        if has_error() {
            "form__group form__group--invalid"
        } else {
            "form__group"
        }
    };

    view! {
        <div class=group_class>
            <label class="form__label" for=label_for>
                {label}
            </label>
            <input
                id=id
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                aria-invalid=move || if has_error() { "true" } else { "false" }
                aria-describedby=move || described_by(&describing_id, has_error())
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! {
                <p class="form__message" id=message_id.clone()>{msg}</p>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_described_by_only_with_error() {
        assert_eq!(described_by("phone-message", true).as_deref(), Some("phone-message"));
        assert_eq!(described_by("phone-message", false), None);
    }
}
