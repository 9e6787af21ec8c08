// SPDX-License-Identifier: MIT OR Apache-2.0

use classroom_types::{Classroom, UserMode};
use dioxus::prelude::*;

use crate::components::icons::users::UsersIcon;
use crate::routing::Route;

/// Label of the card's call-to-action link.
pub fn join_label(mode: UserMode) -> &'static str {
    if mode.is_instructor() {
        "Enter as Instructor"
    } else {
        "Join Classroom"
    }
}

#[component]
pub fn ClassroomCard(classroom: Classroom, mode: UserMode) -> Element {
    let is_full = classroom.is_full();
    let occupancy = classroom.occupancy();
    let max = classroom.max_capacity;
    let width = format!("width: {}%;", classroom.capacity_percentage());
    let card_class = if is_full {
        "classroom-card full"
    } else {
        "classroom-card"
    };

    rsx! {
        div { class: card_class, "data-classroom-id": "{classroom.id}",
            div { class: "classroom-card-header",
                h3 { class: "classroom-name", "{classroom.name}" }
                if is_full {
                    span { class: "full-badge", "Full" }
                }
            }
            div { class: "classroom-occupancy",
                UsersIcon {}
                span { class: "occupancy-label", "Participants" }
                span { class: "occupancy-count", "{occupancy}/{max}" }
            }
            div { class: "capacity-bar",
                div { class: "capacity-bar-fill", style: "{width}" }
            }
            if is_full {
                button { class: "join-button", disabled: true, "Room Full" }
            } else {
                Link {
                    to: Route::Classroom { id: classroom.id.to_string() },
                    class: "join-button",
                    {join_label(mode)}
                }
            }
        }
    }
}
