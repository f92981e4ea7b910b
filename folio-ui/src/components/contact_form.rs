//! Contact form with a simulated submit.

use crate::state::{use_page, AppState};
use dioxus::prelude::*;
use folio_core::contact::{ContactField, FORM_ID};
use folio_core::Msg;

#[derive(Clone, PartialEq)]
struct FieldView {
    field: ContactField,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    value: String,
}

fn field_label(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "Name",
        ContactField::Email => "Email",
        ContactField::Subject => "Subject",
        ContactField::Message => "Message",
    }
}

#[component]
pub fn ContactForm() -> Element {
    let state = use_context::<AppState>();
    let form = use_page(|p| {
        let fields: Vec<FieldView> = ContactField::ALL
            .into_iter()
            .map(|field| FieldView {
                field,
                id: field.id(),
                label: field_label(field),
                input_type: if field == ContactField::Email { "email" } else { "text" },
                value: p.contact.fields().get(field).to_string(),
            })
            .collect();
        (fields, p.contact.is_sending(), p.contact.submit_label())
    });
    let (fields, sending, submit_label) = form().unwrap_or((Vec::new(), false, ""));

    rsx! {
        form {
            id: FORM_ID,
            class: "max-w-xl mx-auto space-y-4",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                state.dispatch(Msg::ContactSubmitted);
            },
            for view in fields.into_iter() {
                label {
                    key: "{view.id}",
                    class: "block",
                    span { class: "block mb-1 text-sm", "{view.label}" }
                    if view.field == ContactField::Message {
                        textarea {
                            id: view.id,
                            name: view.id,
                            rows: "5",
                            class: "w-full rounded bg-white/10 p-3",
                            value: "{view.value}",
                            oninput: move |evt: FormEvent| {
                                state.dispatch(Msg::ContactInput(view.field, evt.value()));
                            },
                        }
                    } else {
                        input {
                            id: view.id,
                            name: view.id,
                            r#type: view.input_type,
                            class: "w-full rounded bg-white/10 p-3",
                            value: "{view.value}",
                            oninput: move |evt: FormEvent| {
                                state.dispatch(Msg::ContactInput(view.field, evt.value()));
                            },
                        }
                    }
                }
            }
            button {
                r#type: "submit",
                class: "px-6 py-3 rounded-lg bg-secondary disabled:opacity-50",
                disabled: sending,
                "{submit_label}"
            }
        }
    }
}
