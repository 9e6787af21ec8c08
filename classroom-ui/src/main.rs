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

use classroom_ui::components::config_error::ConfigError;
use classroom_ui::constants::{app_config, classroom_catalog, video_provider};
use classroom_ui::context::use_app_state;
use classroom_ui::routing::Route;
use dioxus::prelude::*;

/// Route switch component that handles routing
#[component]
fn RouteSwitch() -> Element {
    // Check config validity
    if let Err(e) = app_config().and_then(|_| classroom_catalog()) {
        return rsx! {
            ConfigError { message: e }
        };
    }

    rsx! {
        Router::<Route> {}
    }
}

/// App root component
#[component]
fn App() -> Element {
    // Mode, name, active classroom and the call provider for the whole app
    use_app_state(video_provider);

    rsx! {
        RouteSwitch {}
    }
}

fn main() {
    let level = if cfg!(feature = "debugAssertions") {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);

    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
