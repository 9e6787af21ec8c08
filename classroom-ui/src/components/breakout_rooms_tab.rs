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

//! Breakout Rooms tab
//!
//! Drives a [`BreakoutFlow`]: pick a room count, assign participants by hand
//! or automatically, then start and end the (placeholder) session. The flow
//! is owned by the caller so it outlives tab switches.

use std::collections::HashMap;

use classroom_breakout::{AssignTarget, BreakoutFlow, BreakoutPhase, MAX_GROUPS, MIN_GROUPS};
use classroom_types::{Participant, ParticipantId};
use dioxus::prelude::*;

const ABOUT_BREAKOUT_ROOMS: [&str; 4] = [
    "Create 2-6 separate video sessions",
    "Assign participants to specific rooms",
    "Complete audio/video isolation between rooms",
    "Monitor or join any room as instructor",
];

#[component]
pub fn BreakoutRoomsTab(
    flow: Signal<BreakoutFlow>,
    participants: Vec<Participant>,
    // Participant id of the instructor running the session.
    #[props(default)]
    created_by: ParticipantId,
) -> Element {
    let mut flow = flow;
    let mut room_count = use_signal(|| MIN_GROUPS);
    let mut notice = use_signal(|| None::<String>);
    let mut error = use_signal(|| None::<String>);

    let known: Vec<ParticipantId> = participants
        .iter()
        .map(|p| p.participant_id.clone())
        .collect();

    // Participants who leave the call drop out of their rooms.
    use_effect(use_reactive((&known,), move |(known,)| {
        flow.write().retain_known(&known);
    }));

    let names: HashMap<ParticipantId, String> = participants
        .iter()
        .map(|p| (p.participant_id.clone(), p.display_name().to_string()))
        .collect();
    let name_of = move |id: &str| names.get(id).cloned().unwrap_or_else(|| id.to_string());

    let phase = flow.read().phase();

    let banners = rsx! {
        if let Some(message) = notice() {
            div { class: "notice-banner", role: "status",
                span { "{message}" }
                button {
                    class: "notice-dismiss",
                    r#type: "button",
                    aria_label: "Dismiss",
                    onclick: move |_| notice.set(None),
                    "×"
                }
            }
        }
        if let Some(message) = error() {
            div { class: "error-banner", role: "alert",
                span { "{message}" }
                button {
                    class: "error-dismiss",
                    r#type: "button",
                    aria_label: "Dismiss",
                    onclick: move |_| error.set(None),
                    "×"
                }
            }
        }
    };

    match phase {
        BreakoutPhase::Idle if participants.is_empty() => rsx! {
            {banners}
            div { class: "tab-empty",
                p { "No other participants available for breakout rooms." }
                p { class: "tab-empty-hint", "Wait for participants to join the classroom." }
            }
        },
        BreakoutPhase::Idle => rsx! {
            {banners}
            div { class: "breakout-idle",
                p { "Create breakout rooms for small group discussions" }
                label { r#for: "room-count", "Number of Rooms" }
                select {
                    id: "room-count",
                    value: "{room_count}",
                    onchange: move |evt: Event<FormData>| {
                        match evt.value().parse::<usize>() {
                            Ok(n) => room_count.set(n),
                            Err(e) => log::warn!("Ignoring room count {:?}: {e}", evt.value()),
                        }
                    },
                    for n in MIN_GROUPS..=MAX_GROUPS {
                        option { key: "{n}", value: "{n}", selected: n == room_count(), "{n} Rooms" }
                    }
                }
                button {
                    class: "primary-button begin-breakout",
                    r#type: "button",
                    onclick: move |_| {
                        let result = flow.write().begin(room_count());
                        match result {
                            Ok(()) => error.set(None),
                            Err(e) => error.set(Some(e.to_string())),
                        }
                    },
                    "Begin Breakout Rooms"
                }
                div { class: "breakout-about",
                    h4 { "About Breakout Rooms" }
                    ul {
                        for line in ABOUT_BREAKOUT_ROOMS {
                            li { key: "{line}", "{line}" }
                        }
                    }
                }
            }
        },
        BreakoutPhase::Configuring => {
            let Some(set) = flow.read().assignments().cloned() else {
                return rsx! {};
            };
            let unassigned = set.unassigned(&known).len();
            let ready = flow.read().is_ready(&known);
            let auto_known = known.clone();
            let start_known = known.clone();

            rsx! {
                {banners}
                div { class: "breakout-configuring",
                    div { class: "breakout-actions",
                        button {
                            class: "secondary-button auto-assign",
                            r#type: "button",
                            onclick: move |_| {
                                let result = flow.write().auto_assign(&auto_known, &mut rand::thread_rng());
                                if let Err(e) = result {
                                    error.set(Some(e.to_string()));
                                }
                            },
                            "Auto Assign"
                        }
                        button {
                            class: "primary-button start-breakout",
                            r#type: "button",
                            disabled: !ready,
                            onclick: move |_| {
                                let result = flow.write().start(&start_known);
                                match result {
                                    Ok(message) => {
                                        notice.set(Some(message.to_string()));
                                        error.set(None);
                                    }
                                    Err(e) => error.set(Some(e.to_string())),
                                }
                            },
                            "Start Breakout"
                        }
                    }
                    if unassigned > 0 {
                        p { class: "unassigned-warning", "{unassigned} participant(s) not assigned" }
                    }
                    div { class: "breakout-room-cards",
                        for (index, group) in set.groups().iter().enumerate() {
                            {
                                let room_name = group.name().to_string();
                                let room_size = group.len();
                                let members = group.participants().to_vec();
                                let candidates: Vec<ParticipantId> = known
                                    .iter()
                                    .filter(|id| !group.contains(id.as_str()))
                                    .cloned()
                                    .collect();
                                rsx! {
                                    div { key: "{room_name}", class: "breakout-room-card",
                                        div { class: "breakout-room-card-header",
                                            h4 { "{room_name}" }
                                            span { class: "room-size", "{room_size}" }
                                        }
                                        if members.is_empty() {
                                            p { class: "room-empty", "No participants assigned" }
                                        } else {
                                            div { class: "participant-chips",
                                                for pid in members {
                                                    {
                                                        let label = name_of(&pid);
                                                        let remove_id = pid.clone();
                                                        rsx! {
                                                            span { key: "{pid}", class: "participant-chip",
                                                                "{label}"
                                                                button {
                                                                    class: "chip-remove",
                                                                    r#type: "button",
                                                                    onclick: move |_| {
                                                                        let result = flow.write().assign(&remove_id, AssignTarget::Unassign);
                                                                        if let Err(e) = result {
                                                                            error.set(Some(e.to_string()));
                                                                        }
                                                                    },
                                                                    "Remove"
                                                                }
                                                            }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                        select {
                                            class: "add-participant",
                                            value: "",
                                            onchange: move |evt: Event<FormData>| {
                                                let id = evt.value();
                                                if id.is_empty() {
                                                    return;
                                                }
                                                let result = flow.write().assign(&id, AssignTarget::Group(index));
                                                if let Err(e) = result {
                                                    error.set(Some(e.to_string()));
                                                }
                                            },
                                            option { value: "", "Add participant..." }
                                            for pid in candidates {
                                                {
                                                    let label = name_of(&pid);
                                                    rsx! {
                                                        option { key: "{pid}", value: "{pid}", "{label}" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    button {
                        class: "text-button cancel-breakout",
                        r#type: "button",
                        onclick: move |_| {
                            let result = flow.write().cancel();
                            if let Err(e) = result {
                                error.set(Some(e.to_string()));
                            }
                        },
                        "Cancel"
                    }
                }
            }
        }
        BreakoutPhase::Active => {
            let rooms = flow
                .read()
                .session(&created_by)
                .map(|session| session.rooms)
                .unwrap_or_default();
            let room_total = rooms.len();

            rsx! {
                {banners}
                div { class: "breakout-active",
                    h3 { "Breakout Rooms Active" }
                    p { "{room_total} breakout rooms are currently in session" }
                    ul { class: "active-rooms",
                        for room in rooms {
                            li { key: "{room.id}", class: "active-room",
                                span { class: "active-room-name", "{room.name}" }
                                span { class: "active-room-size", "{room.assigned_participant_ids.len()} participant(s)" }
                            }
                        }
                    }
                    button {
                        class: "danger-button end-breakout",
                        r#type: "button",
                        onclick: move |_| {
                            let result = flow.write().end();
                            match result {
                                Ok(message) => notice.set(Some(message.to_string())),
                                Err(e) => error.set(Some(e.to_string())),
                            }
                        },
                        "End All Breakout Rooms"
                    }
                }
            }
        }
    }
}
