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

use classroom_client::MediaKind;
use classroom_types::Participant;
use dioxus::prelude::*;

use crate::components::icons::mic::MicIcon;
use crate::context::ProviderCtx;

/// DOM id of the media element playing `kind` for `participant_id`.
pub fn media_element_id(kind: MediaKind, participant_id: &str) -> String {
    match kind {
        MediaKind::Video => format!("video-{participant_id}"),
        MediaKind::Audio => format!("audio-{participant_id}"),
    }
}

#[component]
pub fn VideoTile(participant: Participant) -> Element {
    let provider = use_context::<ProviderCtx>().0;

    let participant_id = participant.participant_id.clone();
    let is_local = participant.is_local;
    let has_video = participant.has_video_track;
    // Local audio is never played back.
    let has_audio = participant.has_audio_track && !is_local;

    let attach_id = participant_id.clone();
    use_effect(use_reactive((&has_video, &has_audio), move |(has_video, has_audio)| {
        let tracks = [(MediaKind::Video, has_video), (MediaKind::Audio, has_audio)];
        for (kind, live) in tracks {
            if !live {
                continue;
            }
            let element_id = media_element_id(kind, &attach_id);
            if let Err(e) = provider.attach_media(&attach_id, kind, &element_id) {
                log::warn!("Could not attach {kind:?} for {attach_id}: {e}");
            }
        }
    }));

    let tile_class = if is_local { "video-tile local" } else { "video-tile" };
    let video_id = media_element_id(MediaKind::Video, &participant_id);
    let audio_id = media_element_id(MediaKind::Audio, &participant_id);
    let display_name = participant.display_name().to_string();
    let initial = participant.initial();

    rsx! {
        div { class: tile_class, "data-participant-id": "{participant_id}",
            if has_video {
                video {
                    id: "{video_id}",
                    class: "tile-video",
                    autoplay: true,
                    playsinline: true,
                    muted: is_local,
                }
            } else {
                div { class: "tile-avatar",
                    span { class: "avatar-initial", "{initial}" }
                }
            }
            if has_audio {
                audio { id: "{audio_id}", autoplay: true }
            }
            div { class: "tile-footer",
                span { class: "tile-name",
                    "{display_name}"
                    if is_local {
                        span { class: "tile-you", " (You)" }
                    }
                }
                span { class: if participant.is_muted { "tile-mic muted" } else { "tile-mic" },
                    MicIcon { muted: participant.is_muted }
                }
            }
        }
    }
}
