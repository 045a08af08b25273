/*
 * File: navigator.rs
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

use log::{debug, info, warn};

use std::sync::mpsc::Sender;

use crate::command::TourCommand;
use crate::easing::Ease;
use crate::error::{Error, Result};
use crate::motion::MotionRequest;
use crate::overlay::OverlayId;
use crate::pose::Pose;

/// A camera pose and the overlay shown while the camera is there.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub name: String,
    pub pose: Pose,
    pub overlay: OverlayId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourPosition {
    Unstarted,
    AtWaypoint(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionMode {
    Animated,
    Instant,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigatorState {
    pub position: TourPosition,
    pub transition_duration: f32,
    pub transition_mode: TransitionMode,
}

impl NavigatorState {
    pub fn current_index(&self) -> Option<usize> {
        match self.position {
            TourPosition::Unstarted => None,
            TourPosition::AtWaypoint(i) => Some(i),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NavigatorOptions {
    pub exit_visible: bool,
    pub transition_duration: f32,
    pub transition_mode: TransitionMode,
    pub ease: Ease,
    /// Camera pose before the first transition.
    pub start_pose: Pose,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self {
            exit_visible: true,
            transition_duration: 2.0,
            transition_mode: TransitionMode::Animated,
            ease: Ease::default(),
            start_pose: Pose::identity(),
        }
    }
}

fn check_duration(seconds: f32) -> Result<f32> {
    if seconds.is_finite() && seconds > 0. {
        Ok(seconds)
    } else {
        Err(Error::InvalidDuration(seconds))
    }
}

/// Walks a fixed sequence of waypoints and tells the view what to show.
pub struct TourNavigator {
    waypoints: Vec<Waypoint>,
    home: OverlayId,
    state: NavigatorState,
    ease: Ease,
    last_pose: Pose,
    to_view: Sender<TourCommand>,
}

impl TourNavigator {
    /// Installs the waypoint sequence, hides every overlay and shows `home`.
    pub fn configure(
        waypoints: Vec<Waypoint>,
        home: OverlayId,
        options: NavigatorOptions,
        to_view: Sender<TourCommand>,
    ) -> Result<Self> {
        if waypoints.is_empty() {
            return Err(Error::EmptyTour);
        }
        let transition_duration = check_duration(options.transition_duration)?;

        let navigator = Self {
            waypoints,
            home,
            state: NavigatorState {
                position: TourPosition::Unstarted,
                transition_duration,
                transition_mode: options.transition_mode,
            },
            ease: options.ease,
            last_pose: options.start_pose,
            to_view,
        };

        navigator.send(TourCommand::HideAllOverlays)?;
        navigator.send(TourCommand::ShowOverlay(navigator.home.clone()))?;
        navigator.send(TourCommand::SetExitVisible(options.exit_visible))?;
        debug!(
            "tour configured with {} waypoints, home overlay '{}'",
            navigator.waypoints.len(),
            navigator.home
        );
        Ok(navigator)
    }

    pub fn state(&self) -> &NavigatorState {
        &self.state
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn home_overlay(&self) -> &OverlayId {
        &self.home
    }

    pub fn current_waypoint(&self) -> Option<&Waypoint> {
        self.state
            .current_index()
            .and_then(|i| self.waypoints.get(i))
    }

    pub fn start(&mut self) -> Result<()> {
        self.state.position = TourPosition::AtWaypoint(0);
        self.move_to(0)
    }

    /// Moves to the next waypoint. Passing the last one wraps to the first,
    /// shows the home overlay and asks for a session reload.
    pub fn advance(&mut self) -> Result<()> {
        let next = match self.state.position {
            TourPosition::Unstarted => 0,
            TourPosition::AtWaypoint(i) => i + 1,
        };

        if next >= self.waypoints.len() {
            self.state.position = TourPosition::AtWaypoint(0);
            self.move_to(0)?;
            self.send(TourCommand::HideAllOverlays)?;
            self.send(TourCommand::ShowOverlay(self.home.clone()))?;
            info!("lap finished, restarting session");
            self.send(TourCommand::ReloadSession)?;
        } else {
            self.state.position = TourPosition::AtWaypoint(next);
            self.move_to(next)?;
        }

        self.send(TourCommand::SetExitVisible(true))
    }

    /// Moves to the previous waypoint, wrapping to the last one.
    pub fn retreat(&mut self) -> Result<()> {
        let prev = match self.state.position {
            TourPosition::AtWaypoint(i) if i > 0 => i - 1,
            _ => self.waypoints.len() - 1,
        };
        self.state.position = TourPosition::AtWaypoint(prev);
        self.move_to(prev)
    }

    pub fn set_transition_duration(&mut self, seconds: f32) -> Result<()> {
        match check_duration(seconds) {
            Ok(seconds) => {
                debug!("transition duration: {}s", seconds);
                self.state.transition_duration = seconds;
                Ok(())
            }
            Err(e) => {
                warn!("{}", e);
                Err(e)
            }
        }
    }

    pub fn set_transition_mode(&mut self, mode: TransitionMode) {
        debug!("transition mode: {:?}", mode);
        self.state.transition_mode = mode;
    }

    pub fn set_direct_transition(&mut self, direct: bool) {
        self.set_transition_mode(if direct {
            TransitionMode::Instant
        } else {
            TransitionMode::Animated
        });
    }

    pub fn exit(&self) -> Result<()> {
        info!("exit requested");
        self.send(TourCommand::Terminate)
    }

    pub fn reload(&self) -> Result<()> {
        info!("reload requested");
        self.send(TourCommand::ReloadSession)
    }

    fn move_to(&mut self, index: usize) -> Result<()> {
        let (pose, overlay) = match self.waypoints.get(index) {
            Some(w) => {
                info!("moving to waypoint {} '{}'", index, w.name);
                (w.pose, w.overlay.clone())
            }
            None => {
                warn!("waypoint {} out of range", index);
                return Ok(());
            }
        };

        match self.state.transition_mode {
            TransitionMode::Instant => self.send(TourCommand::SnapTo(pose))?,
            TransitionMode::Animated => self.send(TourCommand::Animate(MotionRequest {
                from: self.last_pose,
                to: pose,
                duration: self.state.transition_duration,
                ease: self.ease,
            }))?,
        }
        self.last_pose = pose;

        self.send(TourCommand::HideAllOverlays)?;
        self.send(TourCommand::ShowOverlay(overlay))
    }

    fn send(&self, cmd: TourCommand) -> Result<()> {
        self.to_view.send(cmd).map_err(|_| Error::Disconnected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::mpsc::{self, Receiver};

    fn waypoints(n: usize) -> Vec<Waypoint> {
        (0..n)
            .map(|i| Waypoint {
                name: format!("room{}", i),
                pose: Pose::from_euler_deg([i as f32 * 5., 1.6, 0.], [0., i as f32 * 30., 0.]),
                overlay: OverlayId::new(format!("room{}", i)),
            })
            .collect()
    }

    fn navigator(n: usize) -> (TourNavigator, Receiver<TourCommand>) {
        let (tx, rx) = mpsc::channel();
        let nav =
            TourNavigator::configure(waypoints(n), "home".into(), NavigatorOptions::default(), tx)
                .unwrap();
        (nav, rx)
    }

    fn drain(rx: &Receiver<TourCommand>) -> Vec<TourCommand> {
        rx.try_iter().collect()
    }

    #[test]
    fn configure_shows_home_only() {
        let (nav, rx) = navigator(3);
        assert_eq!(nav.state().position, TourPosition::Unstarted);
        assert_eq!(
            drain(&rx),
            vec![
                TourCommand::HideAllOverlays,
                TourCommand::ShowOverlay("home".into()),
                TourCommand::SetExitVisible(true),
            ]
        );
    }

    #[test]
    fn configure_passes_exit_visibility() {
        let (tx, rx) = mpsc::channel();
        let options = NavigatorOptions {
            exit_visible: false,
            ..Default::default()
        };
        TourNavigator::configure(waypoints(1), "home".into(), options, tx).unwrap();
        assert_eq!(drain(&rx).last(), Some(&TourCommand::SetExitVisible(false)));
    }

    #[test]
    fn empty_tour_is_rejected() {
        let (tx, _rx) = mpsc::channel();
        let res =
            TourNavigator::configure(vec![], "home".into(), NavigatorOptions::default(), tx);
        assert!(matches!(res, Err(Error::EmptyTour)));
    }

    #[test]
    fn invalid_initial_duration_is_rejected() {
        let (tx, _rx) = mpsc::channel();
        let options = NavigatorOptions {
            transition_duration: 0.,
            ..Default::default()
        };
        let res = TourNavigator::configure(waypoints(2), "home".into(), options, tx);
        assert!(matches!(res, Err(Error::InvalidDuration(_))));
    }

    #[test]
    fn start_moves_to_first_waypoint() {
        let (mut nav, rx) = navigator(3);
        drain(&rx);
        nav.start().unwrap();

        assert_eq!(nav.state().current_index(), Some(0));
        let cmds = drain(&rx);
        assert_eq!(cmds.len(), 3);
        match &cmds[0] {
            TourCommand::Animate(req) => {
                assert_eq!(req.from, Pose::identity());
                assert_eq!(req.to, nav.waypoints()[0].pose);
                assert_eq!(req.duration, 2.0);
                assert_eq!(req.ease, Ease::InOutSine);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(cmds[1], TourCommand::HideAllOverlays);
        assert_eq!(cmds[2], TourCommand::ShowOverlay("room0".into()));
    }

    #[test]
    fn advance_from_unstarted_goes_to_first() {
        let (mut nav, _rx) = navigator(3);
        nav.advance().unwrap();
        assert_eq!(nav.state().position, TourPosition::AtWaypoint(0));
    }

    #[test]
    fn retreat_from_unstarted_goes_to_last() {
        let (mut nav, _rx) = navigator(3);
        nav.retreat().unwrap();
        assert_eq!(nav.state().position, TourPosition::AtWaypoint(2));
    }

    #[test]
    fn advance_past_last_wraps_and_reloads() {
        let (mut nav, rx) = navigator(2);
        nav.start().unwrap();
        nav.advance().unwrap();
        drain(&rx);

        nav.advance().unwrap();
        assert_eq!(nav.state().current_index(), Some(0));
        let cmds = drain(&rx);
        assert!(matches!(&cmds[0], TourCommand::Animate(r) if r.to == nav.waypoints()[0].pose));
        assert_eq!(
            &cmds[1..],
            &[
                TourCommand::HideAllOverlays,
                TourCommand::ShowOverlay("room0".into()),
                TourCommand::HideAllOverlays,
                TourCommand::ShowOverlay("home".into()),
                TourCommand::ReloadSession,
                TourCommand::SetExitVisible(true),
            ]
        );
    }

    #[test]
    fn retreat_from_first_wraps_without_reload() {
        let (mut nav, rx) = navigator(4);
        nav.start().unwrap();
        drain(&rx);

        nav.retreat().unwrap();
        assert_eq!(nav.state().current_index(), Some(3));
        let cmds = drain(&rx);
        assert!(!cmds.contains(&TourCommand::ReloadSession));
        assert_eq!(cmds.last(), Some(&TourCommand::ShowOverlay("room3".into())));
    }

    #[test]
    fn direct_transition_snaps() {
        let (mut nav, rx) = navigator(3);
        nav.set_direct_transition(true);
        nav.start().unwrap();
        drain(&rx);

        nav.advance().unwrap();
        let cmds = drain(&rx);
        assert_eq!(cmds[0], TourCommand::SnapTo(nav.waypoints()[1].pose));
        assert_eq!(cmds.iter().filter(|c| c.is_pose()).count(), 1);
    }

    #[test]
    fn tween_starts_from_previous_target() {
        let (mut nav, rx) = navigator(3);
        nav.start().unwrap();
        nav.advance().unwrap();
        let last = drain(&rx)
            .into_iter()
            .filter_map(|c| match c {
                TourCommand::Animate(r) => Some(r),
                _ => None,
            })
            .last()
            .unwrap();
        assert_eq!(last.from, nav.waypoints()[0].pose);
        assert_eq!(last.to, nav.waypoints()[1].pose);
    }

    #[test]
    fn bad_duration_keeps_previous_value() {
        let (mut nav, _rx) = navigator(2);
        nav.set_transition_duration(3.5).unwrap();
        assert!(nav.set_transition_duration(-1.).is_err());
        assert!(nav.set_transition_duration(f32::NAN).is_err());
        assert_eq!(nav.state().transition_duration, 3.5);
    }

    #[test]
    fn exit_and_reload_emit_session_commands() {
        let (nav, rx) = navigator(2);
        drain(&rx);
        nav.reload().unwrap();
        nav.exit().unwrap();
        assert_eq!(
            drain(&rx),
            vec![TourCommand::ReloadSession, TourCommand::Terminate]
        );
    }

    #[test]
    fn dropped_view_reports_disconnect() {
        let (mut nav, rx) = navigator(2);
        drop(rx);
        assert!(matches!(nav.start(), Err(Error::Disconnected)));
    }
}
