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

//! Call lifecycle and participant snapshots through the loopback provider.

#[cfg(not(target_arch = "wasm32"))]
mod tests {
    use classroom_client::{
        participant_snapshot, LoopbackProvider, ParticipantProperty, PropertyValue, ProviderError,
        TrackState, VideoProvider, LOOPBACK_LOCAL_ID,
    };

    const ROOM: &str = "https://example.test/oc1";

    #[tokio::test]
    async fn join_and_leave() {
        let provider = LoopbackProvider::new();
        assert!(!provider.is_joined());

        let session = provider.join_room(ROOM, "Ada").await.unwrap();
        assert_eq!(session.room_url(), ROOM);
        assert_eq!(session.display_name(), "Ada");
        assert!(provider.is_joined());
        assert_eq!(
            provider.local_participant_id(&session).unwrap(),
            LOOPBACK_LOCAL_ID
        );

        provider.leave_room(&session).await.unwrap();
        assert!(!provider.is_joined());
        assert_eq!(
            provider.list_participants(&session),
            Err(ProviderError::NotJoined)
        );
        assert_eq!(
            provider.leave_room(&session).await,
            Err(ProviderError::NotJoined)
        );
    }

    #[tokio::test]
    async fn scripted_join_failure_is_consumed() {
        let provider = LoopbackProvider::new();
        provider.fail_join(ProviderError::Connection("offline".into()));

        let err = provider.join_room(ROOM, "Ada").await.unwrap_err();
        assert!(err.is_retryable());
        assert!(!provider.is_joined());

        provider.join_room(ROOM, "Ada").await.unwrap();
        assert!(provider.is_joined());
    }

    #[tokio::test]
    async fn held_join_completes_after_release() {
        let provider = LoopbackProvider::new();
        let release = provider.hold_join();

        let mut join = provider.join_room(ROOM, "Ada");
        assert!(futures::poll!(&mut join).is_pending());
        assert!(!provider.is_joined());

        release.send(()).unwrap();
        let session = join.await.unwrap();
        assert!(provider.is_joined());

        provider.leave_room(&session).await.unwrap();
        provider.join_room(ROOM, "Ada").await.unwrap();
        assert!(provider.is_joined(), "hold applies to one join only");
    }

    #[tokio::test]
    async fn snapshot_lists_local_first() {
        let provider = LoopbackProvider::with_remotes(&["Grace", "Linus"]);
        let session = provider.join_room(ROOM, "Ada").await.unwrap();

        let snapshot = participant_snapshot(&provider, &session).unwrap();
        let names: Vec<_> = snapshot.iter().map(|p| p.display_name()).collect();
        assert_eq!(names, vec!["Ada", "Grace", "Linus"]);
        assert!(snapshot[0].is_local);
        assert!(snapshot.iter().skip(1).all(|p| !p.is_local));
        assert!(snapshot.iter().all(|p| !p.is_muted && p.has_audio_track));
        assert!(snapshot.iter().all(|p| !p.has_video_track));
    }

    #[tokio::test]
    async fn participants_come_and_go() {
        let provider = LoopbackProvider::new();
        let session = provider.join_room(ROOM, "Ada").await.unwrap();

        provider.add_remote("x", None);
        let snapshot = participant_snapshot(&provider, &session).unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[1].display_name(), "Guest");

        provider.remove_remote("x");
        assert_eq!(
            provider.list_participants(&session).unwrap(),
            vec![LOOPBACK_LOCAL_ID]
        );
    }

    #[tokio::test]
    async fn properties() {
        let provider = LoopbackProvider::with_remotes(&["Grace"]);
        provider.join_room(ROOM, "Ada").await.unwrap();

        assert_eq!(
            provider
                .get_participant_property("peer-1", ParticipantProperty::DisplayName)
                .unwrap(),
            PropertyValue::Text(Some("Grace".into()))
        );
        assert_eq!(
            provider
                .get_participant_property("peer-1", ParticipantProperty::AudioTrack)
                .unwrap(),
            PropertyValue::Track(Some(TrackState::Playable))
        );
        provider.set_participant_audio("peer-1", false).await.unwrap();
        assert_eq!(
            provider
                .get_participant_property("peer-1", ParticipantProperty::AudioEnabled)
                .unwrap(),
            PropertyValue::Flag(false)
        );
        assert_eq!(
            provider.get_participant_property("nobody", ParticipantProperty::DisplayName),
            Err(ProviderError::UnknownParticipant("nobody".into()))
        );
    }
}
