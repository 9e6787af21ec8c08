// SPDX-License-Identifier: MIT OR Apache-2.0

use classroom_types::Participant;
use dioxus::prelude::*;

use crate::components::video_tile::VideoTile;

/// Grid columns for `count` tiles.
pub fn grid_columns(count: usize) -> usize {
    match count {
        0 | 1 => 1,
        2..=4 => 2,
        5..=9 => 3,
        _ => 4,
    }
}

#[component]
pub fn VideoGrid(participants: Vec<Participant>, max_participants: u32) -> Element {
    if participants.is_empty() {
        return rsx! {
            div { class: "video-grid-empty",
                h3 { "Waiting for participants to join..." }
                p { "You are the first one here. Others will appear once they join." }
            }
        };
    }

    let count = participants.len();
    let style = format!(
        "grid-template-columns: repeat({}, minmax(0, 1fr));",
        grid_columns(count)
    );

    rsx! {
        div { class: "video-grid-container",
            div { class: "video-grid", style: "{style}",
                for participant in participants {
                    VideoTile { key: "{participant.participant_id}", participant: participant.clone() }
                }
            }
            div { class: "video-grid-footer", "{count} / {max_participants} participants" }
        }
    }
}
