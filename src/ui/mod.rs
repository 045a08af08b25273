/*
 * File: mod.rs
 * Project: ui
 * Created Date: 19/10/2026
 * Author: Shun Suzuki
 * -----
 * Last Modified: 19/10/2026
 * Modified By: Shun Suzuki (suzuki@hapis.k.u-tokyo.ac.jp)
 * -----
 * Copyright (c) 2026 Hapis Lab. All rights reserved.
 *
 */

mod control_panel;
mod overlay_view;
mod ui_view;

pub use ui_view::window_2d;
