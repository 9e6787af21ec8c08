// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod use_video_room;

pub use use_video_room::{use_video_room, VideoRoomHandle};
