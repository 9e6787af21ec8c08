// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Component tests for the call lifecycle: joining, failure with Retry,
// participant updates arriving over the client event bus and closing the
// room while a join is still pending.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::rc::Rc;

use support::{click_button, cleanup, count, create_mount_point, mount_dioxus, settle, text_of};
use wasm_bindgen_test::*;

use classroom_client::{emit_client_event, ClientEvent, LoopbackProvider, ProviderError, VideoProvider};
use classroom_types::catalog::DEFAULT_ROOM_URL;
use classroom_types::{Classroom, ClassroomStatus};
use classroom_ui::components::video_room::VideoRoom;
use classroom_ui::context::use_app_state;
use dioxus::prelude::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

const SLOW_ROOM_URL: &str = "https://overcast.daily.co/slow-join";

thread_local! {
    static PROVIDER: Rc<LoopbackProvider> = Rc::new(LoopbackProvider::with_remotes(&["Grace"]));
    static SLOW_PROVIDER: Rc<LoopbackProvider> = Rc::new(LoopbackProvider::new());
}

fn shared_provider() -> Rc<dyn VideoProvider> {
    PROVIDER.with(|p| p.clone())
}

fn slow_provider() -> Rc<dyn VideoProvider> {
    SLOW_PROVIDER.with(|p| p.clone())
}

fn classroom(room_url: &str) -> Classroom {
    Classroom {
        id: 4,
        name: "Cohort 4".to_string(),
        room_url: room_url.to_string(),
        max_capacity: 15,
        current_capacity: None,
        status: ClassroomStatus::InSession,
    }
}

fn wrapper() -> Element {
    use_app_state(shared_provider);
    rsx! {
        VideoRoom { classroom: classroom(DEFAULT_ROOM_URL), user_name: "Ada".to_string() }
    }
}

fn closable_room() -> Element {
    use_app_state(slow_provider);
    let mut open = use_signal(|| true);
    rsx! {
        button { onclick: move |_| open.set(false), "Close room" }
        if open() {
            VideoRoom { classroom: classroom(SLOW_ROOM_URL), user_name: "Ada".to_string() }
        }
    }
}

#[wasm_bindgen_test]
async fn failed_join_can_be_retried() {
    PROVIDER.with(|p| p.fail_join(ProviderError::Connection("network down".into())));

    let mount = create_mount_point();
    mount_dioxus(wrapper, &mount).await;

    let text = text_of(&mount);
    assert!(text.contains("Connection Error"));
    assert!(text.contains("Failed to join the classroom. Please try again."));
    assert!(text.contains("network down"));

    click_button(&mount, "Retry").await;
    settle().await;

    assert!(PROVIDER.with(|p| p.is_joined()));
    assert_eq!(count(&mount, ".video-tile"), 2);
    assert!(!text_of(&mount).contains("Connection Error"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn participant_changes_update_the_grid() {
    let mount = create_mount_point();
    mount_dioxus(wrapper, &mount).await;
    assert_eq!(count(&mount, ".video-tile"), 2);

    PROVIDER.with(|p| p.add_remote("peer-9", Some("Linus")));
    settle().await;
    assert_eq!(count(&mount, ".video-tile"), 3);
    assert!(text_of(&mount).contains("Linus"));

    PROVIDER.with(|p| p.remove_remote("peer-9"));
    settle().await;
    assert_eq!(count(&mount, ".video-tile"), 2);
    assert!(text_of(&mount).contains("2 / 15 participants"));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn join_failure_without_retry_points_back_to_the_lobby() {
    PROVIDER.with(|p| p.fail_join(ProviderError::UnknownParticipant("local".into())));

    let mount = create_mount_point();
    mount_dioxus(wrapper, &mount).await;

    let text = text_of(&mount);
    assert!(text.contains("Connection Error"));
    assert!(text.contains("Return to the lobby and join the classroom again."));
    assert_eq!(count(&mount, ".retry-button"), 0);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn provider_ending_the_call_shows_left_view() {
    let mount = create_mount_point();
    mount_dioxus(wrapper, &mount).await;
    assert_eq!(count(&mount, ".video-tile"), 2);

    emit_client_event(ClientEvent::Left {
        room_url: DEFAULT_ROOM_URL.to_string(),
    });
    settle().await;

    assert!(text_of(&mount).contains("You have left this classroom."));
    assert_eq!(count(&mount, ".video-tile"), 0);

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn closing_during_a_pending_join_leaves_the_call() {
    let release = SLOW_PROVIDER.with(|p| p.hold_join());

    let mount = create_mount_point();
    mount_dioxus(closable_room, &mount).await;
    assert!(text_of(&mount).contains("Joining Classroom..."));
    assert!(!SLOW_PROVIDER.with(|p| p.is_joined()));

    click_button(&mount, "Close room").await;
    assert!(!text_of(&mount).contains("Joining Classroom..."));

    release.send(()).unwrap();
    settle().await;

    assert!(
        !SLOW_PROVIDER.with(|p| p.is_joined()),
        "a join that completes after the room closed must be left"
    );

    cleanup(&mount);
}
