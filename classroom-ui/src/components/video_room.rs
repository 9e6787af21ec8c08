// SPDX-License-Identifier: MIT OR Apache-2.0

//! Live call view for one classroom.

use classroom_types::{Classroom, ConnectionState};
use dioxus::prelude::*;

use crate::components::control_panel::ControlPanel;
use crate::components::video_grid::VideoGrid;
use crate::context::UserModeCtx;
use crate::hooks::use_video_room;

#[component]
pub fn VideoRoom(classroom: Classroom, user_name: String) -> Element {
    let mode = use_context::<UserModeCtx>();
    let room = use_video_room(classroom.id, classroom.room_url.clone(), user_name);

    let state = room.session.read().connection_state;
    match state {
        ConnectionState::Idle | ConnectionState::Joining | ConnectionState::Reconnecting => rsx! {
            div { class: "video-room-status joining",
                div { class: "spinner" }
                h3 {
                    if state == ConnectionState::Reconnecting { "Reconnecting..." } else { "Joining Classroom..." }
                }
                p { "Setting up video connection" }
            }
        },
        ConnectionState::Error => {
            let error = (room.error)();
            let detail = error.as_ref().map(|e| e.to_string()).unwrap_or_default();
            let retryable = error.as_ref().map_or(true, |e| e.is_retryable());
            rsx! {
                div { class: "video-room-status error",
                    h3 { "Connection Error" }
                    p { "Failed to join the classroom. Please try again." }
                    p { class: "error-detail", "{detail}" }
                    if retryable {
                        button {
                            class: "primary-button retry-button",
                            r#type: "button",
                            onclick: move |_| room.retry(),
                            "Retry"
                        }
                    } else {
                        p { class: "error-hint", "Return to the lobby and join the classroom again." }
                    }
                }
            }
        }
        ConnectionState::Left => rsx! {
            div { class: "video-room-status left",
                h3 { "You have left this classroom." }
            }
        },
        ConnectionState::Joined => {
            let participants = room.session.read().participants.clone();
            rsx! {
                div { class: "video-room",
                    div { class: "video-room-main",
                        VideoGrid {
                            participants: participants.clone(),
                            max_participants: classroom.max_capacity,
                        }
                    }
                    if mode.get().is_instructor() {
                        ControlPanel { participants }
                    }
                }
            }
        }
    }
}
