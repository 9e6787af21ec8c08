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

use classroom_types::catalog::DEFAULT_MAX_CAPACITY;
use classroom_types::UserMode;
use dioxus::prelude::*;

use crate::components::classroom_card::ClassroomCard;
use crate::components::config_error::ConfigError;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::constants::classroom_catalog;
use crate::context::UserModeCtx;

const HOW_IT_WORKS: [&str; 3] = [
    "Click on any classroom to join the live video session",
    "Your audio and video will be broadcast to other participants",
    "Return to the lobby at any time to switch classrooms",
];

const INSTRUCTOR_NOTE: &str =
    "As an instructor, you have access to mute controls and breakout rooms";

/// Hero text under the lobby title.
pub fn lobby_intro(mode: UserMode, classroom_count: usize) -> String {
    match mode {
        UserMode::Instructor => {
            "Select a classroom to enter as an instructor with full control capabilities."
                .to_string()
        }
        UserMode::Student => format!(
            "Choose from {classroom_count} live classrooms. Join any session and switch between rooms at any time."
        ),
    }
}

#[component]
pub fn Home() -> Element {
    let mode = use_context::<UserModeCtx>().get();

    let catalog = match classroom_catalog() {
        Ok(catalog) => catalog,
        Err(e) => return rsx! { ConfigError { message: e } },
    };
    let intro = lobby_intro(mode, catalog.len());
    let max_capacity = catalog
        .all()
        .iter()
        .map(|c| c.max_capacity)
        .max()
        .unwrap_or(DEFAULT_MAX_CAPACITY);
    let badge_class = if mode.is_instructor() {
        "mode-badge instructor"
    } else {
        "mode-badge student"
    };

    rsx! {
        div { class: "lobby-page",
            Header {}
            main { class: "lobby",
                section { class: "lobby-hero",
                    h1 { "Video Classroom Lobby" }
                    p { class: "lobby-intro", "{intro}" }
                    span { class: badge_class, "{mode.label()}" }
                }
                section { class: "classroom-grid",
                    for classroom in catalog.all().iter().cloned() {
                        ClassroomCard { key: "{classroom.id}", classroom: classroom.clone(), mode }
                    }
                }
                section { class: "how-it-works",
                    h2 { "How It Works" }
                    ul {
                        for line in HOW_IT_WORKS {
                            li { key: "{line}", "{line}" }
                        }
                        li { "Maximum {max_capacity} participants per classroom" }
                        if mode.is_instructor() {
                            li { class: "instructor-note", "★ {INSTRUCTOR_NOTE}" }
                        }
                    }
                }
            }
            Footer {}
        }
    }
}
