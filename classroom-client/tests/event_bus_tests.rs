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
 */

//! Integration tests for the event_bus module.
//!
//! The bus is global and tests run in parallel, so each test waits for the
//! events it emitted itself and ignores the rest.

#[cfg(not(target_arch = "wasm32"))]
mod tests {
    use std::time::Duration;

    use async_broadcast::Receiver;
    use classroom_client::event_bus::EVENT_BUS_CAPACITY;
    use classroom_client::{
        emit_client_event, global_client_sender, subscribe_client_events, ClientEvent,
        LoopbackProvider, VideoProvider,
    };

    async fn wait_for(rx: &mut Receiver<ClientEvent>, wanted: &ClientEvent) {
        let found = tokio::time::timeout(Duration::from_secs(1), async {
            while let Ok(event) = rx.recv().await {
                if &event == wanted {
                    return true;
                }
            }
            false
        })
        .await;
        assert_eq!(found, Ok(true), "never received {wanted:?}");
    }

    #[test]
    fn test_global_client_sender_is_same_instance() {
        let sender1 = global_client_sender();
        let sender2 = global_client_sender();
        assert_eq!(sender1.capacity(), EVENT_BUS_CAPACITY);
        assert_eq!(sender2.capacity(), EVENT_BUS_CAPACITY);
    }

    #[test]
    fn test_emit_without_subscribers_does_not_panic() {
        emit_client_event(ClientEvent::Error("nobody listening".to_string()));
        emit_client_event(ClientEvent::ParticipantLeft("bus-orphan".to_string()));
    }

    #[tokio::test]
    async fn test_every_subscriber_receives_the_event() {
        let mut rx1 = subscribe_client_events();
        let mut rx2 = subscribe_client_events();
        let event = ClientEvent::ParticipantJoined("bus-fanout".to_string());

        emit_client_event(event.clone());

        wait_for(&mut rx1, &event).await;
        wait_for(&mut rx2, &event).await;
    }

    #[tokio::test]
    async fn test_loopback_provider_publishes_lifecycle() {
        let mut rx = subscribe_client_events();
        let provider = LoopbackProvider::new();
        let room = "https://example.test/bus-lifecycle";

        let session = provider.join_room(room, "Ada").await.unwrap();
        wait_for(
            &mut rx,
            &ClientEvent::Joined {
                room_url: room.to_string(),
                local_participant_id: "local".to_string(),
            },
        )
        .await;

        provider.add_remote("bus-lifecycle-peer", Some("Grace"));
        wait_for(
            &mut rx,
            &ClientEvent::ParticipantJoined("bus-lifecycle-peer".to_string()),
        )
        .await;

        provider
            .set_participant_audio("bus-lifecycle-peer", false)
            .await
            .unwrap();
        wait_for(
            &mut rx,
            &ClientEvent::ParticipantUpdated("bus-lifecycle-peer".to_string()),
        )
        .await;

        provider.leave_room(&session).await.unwrap();
        wait_for(
            &mut rx,
            &ClientEvent::Left {
                room_url: room.to_string(),
            },
        )
        .await;
    }

    #[test]
    fn test_error_events_do_not_affect_participants() {
        assert!(!ClientEvent::Error("x".into()).affects_participants());
        assert!(ClientEvent::ParticipantLeft("x".into()).affects_participants());
    }
}
