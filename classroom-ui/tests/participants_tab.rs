// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the instructor Participants tab, backed by a shared
// loopback provider so the audio calls it makes can be inspected.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::rc::Rc;

use support::{
    button_with_text, cleanup, click_button, create_mount_point, find, mount_dioxus, settle, text_of,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use classroom_client::{LoopbackProvider, VideoProvider};
use classroom_types::Participant;
use classroom_ui::components::participants_tab::ParticipantsTab;
use classroom_ui::context::use_app_state;
use dioxus::prelude::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

thread_local! {
    static PROVIDER: Rc<LoopbackProvider> = Rc::new(LoopbackProvider::with_remotes(&["Grace", "Alan"]));
}

fn shared_provider() -> Rc<dyn VideoProvider> {
    PROVIDER.with(|p| p.clone())
}

/// Audio controls need a joined call; joining twice is a no-op.
async fn ensure_joined() {
    let provider = shared_provider();
    provider
        .join_room("https://example.test/participants-tab", "Ada")
        .await
        .unwrap();
}

fn remote(id: &str, name: &str, is_muted: bool) -> Participant {
    Participant {
        participant_id: id.to_string(),
        user_name: Some(name.to_string()),
        is_local: false,
        is_muted,
        is_owner: false,
        has_audio_track: !is_muted,
        has_video_track: false,
    }
}

#[wasm_bindgen_test]
async fn empty_tab_explains_itself() {
    fn wrapper() -> Element {
        use_app_state(shared_provider);
        rsx! { ParticipantsTab { participants: Vec::new() } }
    }

    let mount = create_mount_point();
    mount_dioxus(wrapper, &mount).await;

    assert!(text_of(&mount).contains("No other participants in the classroom yet."));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn rows_reflect_audio_state() {
    fn wrapper() -> Element {
        use_app_state(shared_provider);
        rsx! {
            ParticipantsTab {
                participants: vec![remote("peer-1", "Grace", false), remote("peer-2", "Alan", true)],
            }
        }
    }

    let mount = create_mount_point();
    mount_dioxus(wrapper, &mount).await;

    let text = text_of(&mount);
    assert!(text.contains("Participants (2)"));
    assert!(text.contains("Audio on"));
    assert!(text.contains("Audio off"));
    assert!(button_with_text(&mount, "Unmute All").text_content().is_some());

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn mute_all_reaches_every_participant_and_reports_failures() {
    fn wrapper() -> Element {
        use_app_state(shared_provider);
        rsx! {
            ParticipantsTab {
                participants: vec![
                    remote("peer-1", "Grace", false),
                    remote("peer-2", "Alan", false),
                    remote("ghost", "Nobody", false),
                ],
            }
        }
    }

    ensure_joined().await;
    let mount = create_mount_point();
    mount_dioxus(wrapper, &mount).await;

    click_button(&mount, "Mute All").await;
    settle().await;

    let calls = PROVIDER.with(|p| p.audio_calls());
    assert!(calls.contains(&("peer-1".to_string(), false)));
    assert!(calls.contains(&("peer-2".to_string(), false)));

    let banner = mount.query_selector(".error-banner").unwrap().expect("error banner");
    let message = banner.text_content().unwrap();
    assert!(
        message.contains("Failed to update audio for ghost"),
        "unexpected banner: {message}"
    );

    click_button(&mount, "×").await;
    assert!(mount.query_selector(".error-banner").unwrap().is_none());

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn single_toggle_unmutes_a_muted_participant() {
    fn wrapper() -> Element {
        use_app_state(shared_provider);
        rsx! {
            ParticipantsTab { participants: vec![remote("peer-2", "Alan", true)] }
        }
    }

    ensure_joined().await;
    let mount = create_mount_point();
    mount_dioxus(wrapper, &mount).await;

    assert_eq!(find(&mount, ".row-toggle").text_content().unwrap(), "Unmute");
    find(&mount, ".row-toggle")
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
    settle().await;

    let calls = PROVIDER.with(|p| p.audio_calls());
    assert_eq!(calls.last(), Some(&("peer-2".to_string(), true)));
    assert!(mount.query_selector(".error-banner").unwrap().is_none());

    cleanup(&mount);
}
