/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Name prompt shown before joining a classroom without a stored name.

use dioxus::prelude::*;

use crate::context::{load_username_from_storage, normalize_display_name, UserNameCtx, MAX_NAME_LEN};

#[component]
pub fn NameEntryModal(on_submit: EventHandler<String>) -> Element {
    let name_ctx = use_context::<UserNameCtx>();
    let mut input = use_signal(|| {
        name_ctx
            .get()
            .or_else(load_username_from_storage)
            .unwrap_or_default()
    });

    let can_submit = normalize_display_name(&input.read()).is_some();

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(name) = normalize_display_name(&input.read()) else {
            return;
        };
        // The name still applies to this visit if storage is unavailable.
        if let Err(e) = name_ctx.save(&name) {
            log::warn!("Could not store display name: {e}");
        }
        on_submit.call(name);
    };

    rsx! {
        div { class: "modal-overlay",
            div { class: "modal", role: "dialog", aria_modal: "true",
                h2 { "Enter Your Name" }
                p { class: "modal-description",
                    "Your name will be visible to other participants in the classroom."
                }
                form { class: "name-form", onsubmit: submit,
                    input {
                        id: "display-name",
                        class: "input-apple",
                        r#type: "text",
                        placeholder: "Your name",
                        maxlength: "{MAX_NAME_LEN}",
                        autofocus: true,
                        value: "{input}",
                        oninput: move |evt| input.set(evt.value()),
                    }
                    button {
                        class: "primary-button",
                        r#type: "submit",
                        disabled: !can_submit,
                        "Continue"
                    }
                }
                p { class: "modal-note", "No password required. Your name is stored locally." }
            }
        }
    }
}
