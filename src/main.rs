/*
 * File: main.rs
 * Project: src
 * Created Date: 19/10/2026
 * Author: Shun Suzuki
 * -----
 * Last Modified: 19/10/2026
 * Modified By: Shun Suzuki (suzuki@hapis.k.u-tokyo.ac.jp)
 * -----
 * Copyright (c) 2026 Hapis Lab. All rights reserved.
 *
 */

#[macro_use]
extern crate conrod_core;

mod camera_helper;
mod color;
mod map_view;
mod ui;

use room_tour::{Session, Setting};

const DEFAULT_TOUR_PATH: &str = "tour.json";

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("Starting room-tour v{}", env!("CARGO_PKG_VERSION"));

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_TOUR_PATH.to_owned());
    let setting = Setting::load_or_default(&path);
    let session = Session::new(setting)?;

    ui::window_2d(session)
}
