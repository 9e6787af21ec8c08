// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod breakout_rooms_tab;
pub mod classroom_card;
pub mod config_error;
pub mod control_panel;
pub mod footer;
pub mod header;
pub mod icons;
pub mod name_entry_modal;
pub mod participants_tab;
pub mod video_grid;
pub mod video_room;
pub mod video_tile;
