/*
 * File: command.rs
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

use crate::motion::MotionRequest;
use crate::overlay::OverlayId;
use crate::pose::Pose;

/// Input from the UI layer.
#[derive(Debug, Clone, PartialEq)]
pub enum UICommand {
    Start,
    Next,
    Previous,
    Exit,
    Reload,
    SetTransitionDuration(f32),
    /// `true` applies poses without interpolation.
    SetDirectTransition(bool),
}

/// Instructions from the navigator to its view collaborators.
#[derive(Debug, Clone, PartialEq)]
pub enum TourCommand {
    SnapTo(Pose),
    Animate(MotionRequest),
    HideAllOverlays,
    ShowOverlay(OverlayId),
    SetExitVisible(bool),
    ReloadSession,
    Terminate,
}

impl TourCommand {
    pub fn is_pose(&self) -> bool {
        matches!(self, TourCommand::SnapTo(_) | TourCommand::Animate(_))
    }
}
