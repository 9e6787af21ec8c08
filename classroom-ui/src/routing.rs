// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application route definitions.

use dioxus::prelude::*;

use crate::pages::classroom::ClassroomPage;
use crate::pages::home::Home;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/classroom/:id", ClassroomPage)]
    Classroom { id: String },
    #[route("/404")]
    NotFound {},
}

/// Simple 404 page component.
#[component]
fn NotFound() -> Element {
    rsx! {
        div { class: "not-found",
            div { class: "not-found-content",
                h1 { "404" }
                p { "Page not found" }
                Link { to: Route::Home {}, class: "not-found-link", "Back to the Lobby" }
            }
        }
    }
}
