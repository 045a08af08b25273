/*
 * File: motion.rs
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

use log::debug;

use crate::easing::Ease;
use crate::pose::Pose;

/// Timed interpolation from one pose to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionRequest {
    pub from: Pose,
    pub to: Pose,
    pub duration: f32,
    pub ease: Ease,
}

#[derive(Debug, Clone, Copy)]
struct Tween {
    request: MotionRequest,
    elapsed: f32,
}

/// Turns snap and tween instructions into a per-frame camera pose.
///
/// A new request replaces the running one and starts from the pose currently
/// shown, so an interrupted tween never makes the camera jump.
#[derive(Debug, Clone)]
pub struct MotionDriver {
    pose: Pose,
    tween: Option<Tween>,
}

impl MotionDriver {
    pub fn new(pose: Pose) -> Self {
        Self { pose, tween: None }
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn is_moving(&self) -> bool {
        self.tween.is_some()
    }

    pub fn active_request(&self) -> Option<&MotionRequest> {
        self.tween.as_ref().map(|t| &t.request)
    }

    pub fn snap(&mut self, pose: Pose) {
        self.tween = None;
        self.pose = pose;
    }

    pub fn start(&mut self, request: MotionRequest) {
        let mut request = request;
        if self.tween.is_some() {
            debug!("tween interrupted, retargeting from current pose");
            request.from = self.pose;
        }
        self.pose = request.from;
        self.tween = Some(Tween {
            request,
            elapsed: 0.,
        });
    }

    pub fn advance(&mut self, dt: f32) -> Pose {
        let mut finished = false;
        if let Some(tween) = self.tween.as_mut() {
            tween.elapsed += dt.max(0.);
            let req = &tween.request;
            let t = if req.duration > 0. {
                tween.elapsed / req.duration
            } else {
                1.
            };
            if t >= 1. {
                self.pose = req.to;
                finished = true;
            } else {
                self.pose = req.from.interpolate(&req.to, req.ease.apply(t));
            }
        }
        if finished {
            self.tween = None;
        }
        self.pose
    }
}
