// SPDX-License-Identifier: MIT OR Apache-2.0

//! Instructor sidebar: mute controls and breakout rooms.

use classroom_breakout::BreakoutFlow;
use classroom_types::Participant;
use dioxus::prelude::*;

use crate::components::breakout_rooms_tab::BreakoutRoomsTab;
use crate::components::participants_tab::ParticipantsTab;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlTab {
    Participants,
    BreakoutRooms,
}

impl ControlTab {
    fn label(self) -> &'static str {
        match self {
            ControlTab::Participants => "Participants",
            ControlTab::BreakoutRooms => "Breakout Rooms",
        }
    }
}

/// `participants` is the full call roster; the tabs act on remote
/// participants only. Breakout state lives here so it survives switching
/// tabs.
#[component]
pub fn ControlPanel(participants: Vec<Participant>) -> Element {
    let mut tab = use_signal(|| ControlTab::Participants);
    let breakout = use_signal(BreakoutFlow::new);

    let active = participants.len();
    let instructor_id = participants
        .iter()
        .find(|p| p.is_local)
        .map(|p| p.participant_id.clone())
        .unwrap_or_default();
    let remotes: Vec<Participant> = participants.into_iter().filter(|p| !p.is_local).collect();

    rsx! {
        aside { class: "control-panel",
            div { class: "control-panel-header",
                h2 { "Instructor Control Panel" }
                span { class: "active-count", "{active} Active" }
            }
            div { class: "control-tabs", role: "tablist",
                for t in [ControlTab::Participants, ControlTab::BreakoutRooms] {
                    button {
                        key: "{t.label()}",
                        class: if tab() == t { "control-tab active" } else { "control-tab" },
                        role: "tab",
                        onclick: move |_| tab.set(t),
                        {t.label()}
                    }
                }
            }
            div { class: "control-tab-body",
                match tab() {
                    ControlTab::Participants => rsx! { ParticipantsTab { participants: remotes.clone() } },
                    ControlTab::BreakoutRooms => rsx! { BreakoutRoomsTab { flow: breakout, participants: remotes.clone(), created_by: instructor_id.clone() } },
                }
            }
        }
    }
}
