// SPDX-License-Identifier: MIT OR Apache-2.0

use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "app-footer",
            p { "Powered by the Overclock Accelerator" }
        }
    }
}
