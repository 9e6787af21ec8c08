// SPDX-License-Identifier: MIT OR Apache-2.0

use classroom_types::UserMode;
use dioxus::prelude::*;

use crate::constants::instructor_mode_enabled;
use crate::context::UserModeCtx;
use crate::routing::Route;

/// Brand bar with the student / instructor toggle.
#[component]
pub fn Header() -> Element {
    let mode_ctx = use_context::<UserModeCtx>();
    let mode = mode_ctx.get();

    let class_for = move |m: UserMode| {
        if mode == m {
            "mode-toggle-button active"
        } else {
            "mode-toggle-button"
        }
    };

    rsx! {
        header { class: "app-header",
            Link { to: Route::Home {}, class: "brand",
                span { class: "brand-logo", "O" }
                span { class: "brand-name", "OVERCAST" }
            }
            if instructor_mode_enabled() {
                nav { class: "mode-toggle",
                    button {
                        class: class_for(UserMode::Student),
                        r#type: "button",
                        onclick: move |_| mode_ctx.set(UserMode::Student),
                        "Students"
                    }
                    button {
                        class: class_for(UserMode::Instructor),
                        r#type: "button",
                        onclick: move |_| mode_ctx.set(UserMode::Instructor),
                        "Instructors"
                    }
                }
            }
        }
    }
}
