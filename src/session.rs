/*
 * File: session.rs
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

use log::info;

use std::sync::mpsc::{self, Receiver, Sender};

use crate::command::{TourCommand, UICommand};
use crate::controller::TourController;
use crate::error::Result;
use crate::motion::MotionDriver;
use crate::navigator::{NavigatorState, TourNavigator};
use crate::overlay::{OverlayBoard, OverlayId};
use crate::pose::Pose;
use crate::setting::Setting;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Running,
    Terminated,
}

/// One run of the tour: navigator, its view collaborators, and the channels
/// between them.
pub struct Session {
    setting: Setting,
    controller: TourController,
    to_cnt: Sender<UICommand>,
    from_nav: Receiver<TourCommand>,
    driver: MotionDriver,
    overlays: OverlayBoard,
    exit_visible: bool,
    status: SessionStatus,
    reloads: usize,
}

impl Session {
    pub fn new(setting: Setting) -> Result<Self> {
        setting.validate()?;
        let (to_cnt, from_ui) = mpsc::channel();
        let (navigator, from_nav) = Self::configure(&setting)?;

        let mut session = Self {
            controller: TourController::new(from_ui, navigator),
            to_cnt,
            from_nav,
            driver: MotionDriver::new(setting.start_pose()),
            overlays: OverlayBoard::new(setting.overlay_ids()),
            exit_visible: false,
            status: SessionStatus::Running,
            reloads: 0,
            setting,
        };
        session.apply_pending()?;
        Ok(session)
    }

    fn configure(setting: &Setting) -> Result<(TourNavigator, Receiver<TourCommand>)> {
        let (to_view, from_nav) = mpsc::channel();
        let navigator = TourNavigator::configure(
            setting.waypoints(),
            setting.home_overlay(),
            setting.navigator_options(),
            to_view,
        )?;
        Ok((navigator, from_nav))
    }

    /// Sender handed to the UI layer.
    pub fn ui_sender(&self) -> Sender<UICommand> {
        self.to_cnt.clone()
    }

    pub fn setting(&self) -> &Setting {
        &self.setting
    }

    pub fn navigator(&self) -> &TourNavigator {
        self.controller.navigator()
    }

    pub fn state(&self) -> &NavigatorState {
        self.controller.navigator().state()
    }

    pub fn camera_pose(&self) -> Pose {
        self.driver.pose()
    }

    pub fn driver(&self) -> &MotionDriver {
        &self.driver
    }

    pub fn overlays(&self) -> &OverlayBoard {
        &self.overlays
    }

    pub fn visible_overlay(&self) -> Option<&OverlayId> {
        self.overlays.visible()
    }

    pub fn exit_visible(&self) -> bool {
        self.exit_visible
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn reloads(&self) -> usize {
        self.reloads
    }

    /// Dispatches UI input, applies the navigator's output, then steps the
    /// camera by `dt` seconds.
    pub fn update(&mut self, dt: f32) -> Result<()> {
        if self.status == SessionStatus::Terminated {
            return Ok(());
        }
        self.controller.update()?;
        self.apply_pending()?;
        self.driver.advance(dt);
        Ok(())
    }

    fn apply_pending(&mut self) -> Result<()> {
        loop {
            let batch: Vec<TourCommand> = self.from_nav.try_iter().collect();
            if batch.is_empty() {
                return Ok(());
            }
            for cmd in batch {
                match cmd {
                    TourCommand::SnapTo(pose) => self.driver.snap(pose),
                    TourCommand::Animate(req) => self.driver.start(req),
                    TourCommand::HideAllOverlays => self.overlays.hide_all(),
                    TourCommand::ShowOverlay(id) => self.overlays.show(&id)?,
                    TourCommand::SetExitVisible(visible) => self.exit_visible = visible,
                    TourCommand::ReloadSession => {
                        // the rest of this batch belongs to the discarded session
                        self.reload()?;
                        break;
                    }
                    TourCommand::Terminate => {
                        info!("session terminated");
                        self.status = SessionStatus::Terminated;
                        return Ok(());
                    }
                }
            }
        }
    }

    fn reload(&mut self) -> Result<()> {
        let (navigator, from_nav) = Self::configure(&self.setting)?;
        self.controller.replace_navigator(navigator);
        self.from_nav = from_nav;
        self.driver = MotionDriver::new(self.setting.start_pose());
        self.overlays = OverlayBoard::new(self.setting.overlay_ids());
        self.exit_visible = false;
        self.reloads += 1;
        info!("session reloaded ({})", self.reloads);
        Ok(())
    }
}
