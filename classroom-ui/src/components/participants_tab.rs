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

//! Participants tab - lets the instructor mute remote participants

use std::collections::HashSet;

use classroom_client::controls;
use classroom_types::{Participant, ParticipantId};
use dioxus::prelude::*;

use crate::components::icons::mic::MicIcon;
use crate::context::ProviderCtx;

#[derive(Props, Clone, PartialEq)]
pub struct ParticipantsTabProps {
    /// Remote participants only.
    pub participants: Vec<Participant>,
}

#[component]
pub fn ParticipantsTab(props: ParticipantsTabProps) -> Element {
    let provider = use_context::<ProviderCtx>().0;

    let mut muting = use_signal(|| false);
    let mut unmuting = use_signal(|| false);
    let mut pending = use_signal(HashSet::<ParticipantId>::new);
    let mut error = use_signal(|| None::<String>);

    if props.participants.is_empty() {
        return rsx! {
            div { class: "tab-empty",
                p { "No other participants in the classroom yet." }
            }
        };
    }

    let ids: Vec<ParticipantId> = props
        .participants
        .iter()
        .map(|p| p.participant_id.clone())
        .collect();
    let busy = muting() || unmuting();

    let on_mute_all = {
        let provider = provider.clone();
        let ids = ids.clone();
        move |_: Event<MouseData>| {
            let provider = provider.clone();
            let ids = ids.clone();
            muting.set(true);
            spawn(async move {
                let outcome = controls::mute_all(&*provider, &ids).await;
                error.set(outcome.failure_summary());
                muting.set(false);
            });
        }
    };

    let on_unmute_all = {
        let provider = provider.clone();
        move |_: Event<MouseData>| {
            let provider = provider.clone();
            let ids = ids.clone();
            unmuting.set(true);
            spawn(async move {
                let outcome = controls::unmute_all(&*provider, &ids).await;
                error.set(outcome.failure_summary());
                unmuting.set(false);
            });
        }
    };

    let count = props.participants.len();

    rsx! {
        div { class: "participants-tab",
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
            div { class: "bulk-actions",
                button {
                    class: "danger-button mute-all",
                    disabled: busy,
                    onclick: on_mute_all,
                    if muting() { "Muting..." } else { "Mute All" }
                }
                button {
                    class: "secondary-button unmute-all",
                    disabled: busy,
                    onclick: on_unmute_all,
                    if unmuting() { "Unmuting..." } else { "Unmute All" }
                }
            }
            h3 { class: "participants-heading", "Participants ({count})" }
            ul { class: "participant-rows",
                for participant in props.participants.iter().cloned() {
                    {
                        let id = participant.participant_id.clone();
                        let is_muted = participant.is_muted;
                        let in_flight = pending.read().contains(&id);
                        let initial = participant.initial();
                        let name = participant.display_name().to_string();
                        let provider = provider.clone();
                        let toggle_id = id.clone();
                        rsx! {
                            li { key: "{id}", class: "participant-row",
                                span { class: "participant-avatar", "{initial}" }
                                div { class: "participant-info",
                                    span { class: "participant-name", "{name}" }
                                    span { class: if is_muted { "audio-status off" } else { "audio-status on" },
                                        MicIcon { muted: is_muted }
                                        if is_muted { " Audio off" } else { " Audio on" }
                                    }
                                }
                                button {
                                    class: "row-toggle",
                                    disabled: in_flight,
                                    onclick: move |_| {
                                        let provider = provider.clone();
                                        let id = toggle_id.clone();
                                        pending.write().insert(id.clone());
                                        spawn(async move {
                                            if let Err(e) = controls::mute_participant(&*provider, &id, is_muted).await {
                                                error.set(Some(format!("Failed to update audio for {id}: {e}")));
                                            }
                                            pending.write().remove(&id);
                                        });
                                    },
                                    if is_muted { "Unmute" } else { "Mute" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
