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

use dioxus::prelude::*;

use crate::components::header::Header;
use crate::components::name_entry_modal::NameEntryModal;
use crate::components::video_room::VideoRoom;
use crate::constants::classroom_catalog;
use crate::context::{ActiveClassroomCtx, UserNameCtx};
use crate::routing::Route;

#[component]
pub fn ClassroomPage(id: String) -> Element {
    let navigator = use_navigator();
    let name_ctx = use_context::<UserNameCtx>();
    let active = use_context::<ActiveClassroomCtx>();

    let classroom = classroom_catalog()
        .ok()
        .and_then(|catalog| catalog.get_by_route_id(&id).cloned());
    let classroom_id = classroom.as_ref().map(|c| c.id);

    // Unknown classrooms go back to the lobby.
    use_effect(use_reactive((&classroom_id,), move |(classroom_id,)| {
        match classroom_id {
            Some(classroom_id) => active.enter(classroom_id),
            None => {
                log::warn!("Unknown classroom, returning to lobby");
                let _ = navigator.replace(Route::Home {});
            }
        }
    }));
    use_drop(move || active.leave());

    let title = classroom
        .as_ref()
        .map(|c| c.name.to_uppercase())
        .unwrap_or_else(|| "Loading...".to_string());
    let user_name = name_ctx.get();

    rsx! {
        div { class: "classroom-page",
            Header {}
            div { class: "classroom-header",
                Link { to: Route::Home {}, class: "back-link", "← Return to Lobby" }
                div { class: "classroom-title",
                    h1 { "{title}" }
                    p { class: "classroom-subtitle", "Live Video Session" }
                }
            }
            main { class: "classroom-main",
                match (classroom, user_name) {
                    (Some(classroom), Some(user_name)) => rsx! {
                        VideoRoom { key: "{classroom.id}", classroom: classroom.clone(), user_name }
                    },
                    (Some(_), None) => rsx! {
                        NameEntryModal {
                            on_submit: move |name: String| log::info!("Joining as {name}"),
                        }
                    },
                    (None, _) => rsx! {
                        div { class: "classroom-loading", "Loading..." }
                    },
                }
            }
        }
    }
}
