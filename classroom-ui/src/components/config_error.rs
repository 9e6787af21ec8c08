/*
 * Copyright 2025 Security Union LLC
 * Licensed under MIT OR Apache-2.0
 */

use dioxus::prelude::*;

#[component]
pub fn ConfigError(message: String) -> Element {
    rsx! {
        div { class: "error-container",
            h2 { "Configuration Error" }
            p { class: "error-message", "{message}" }
            p {
                "Set "
                code { "window.__APP_CONFIG" }
                " before the app loads, for example "
                code { "{{ videoProvider: \"daily\" }}" }
                "."
            }
        }
    }
}
