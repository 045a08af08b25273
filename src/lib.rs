/*
 * File: lib.rs
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

pub mod command;
pub mod controller;
pub mod easing;
pub mod error;
pub mod motion;
pub mod nav_buttons;
pub mod navigator;
pub mod overlay;
pub mod pose;
pub mod session;
pub mod setting;

pub use command::{TourCommand, UICommand};
pub use easing::Ease;
pub use error::{Error, Result};
pub use navigator::{NavigatorState, TourNavigator, TourPosition, TransitionMode, Waypoint};
pub use pose::Pose;
pub use session::{Session, SessionStatus};
pub use setting::Setting;
