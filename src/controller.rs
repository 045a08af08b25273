/*
 * File: controller.rs
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

use log::warn;

use std::sync::mpsc::Receiver;

use crate::command::UICommand;
use crate::error::{Error, Result};
use crate::navigator::TourNavigator;

/// Dispatches UI input to the navigator.
pub struct TourController {
    from_ui: Receiver<UICommand>,
    navigator: TourNavigator,
}

impl TourController {
    pub fn new(from_ui: Receiver<UICommand>, navigator: TourNavigator) -> TourController {
        TourController { from_ui, navigator }
    }

    pub fn navigator(&self) -> &TourNavigator {
        &self.navigator
    }

    pub fn replace_navigator(&mut self, navigator: TourNavigator) {
        self.navigator = navigator;
    }

    /// Handles every pending UI command.
    pub fn update(&mut self) -> Result<()> {
        while let Ok(cmd) = self.from_ui.try_recv() {
            self.dispatch(cmd)?;
        }
        Ok(())
    }

    pub fn dispatch(&mut self, cmd: UICommand) -> Result<()> {
        let res = match cmd {
            UICommand::Start => self.navigator.start(),
            UICommand::Next => self.navigator.advance(),
            UICommand::Previous => self.navigator.retreat(),
            UICommand::Exit => self.navigator.exit(),
            UICommand::Reload => self.navigator.reload(),
            UICommand::SetTransitionDuration(d) => self.navigator.set_transition_duration(d),
            UICommand::SetDirectTransition(direct) => {
                self.navigator.set_direct_transition(direct);
                Ok(())
            }
        };
        match res {
            Err(Error::InvalidDuration(d)) => {
                warn!("ignoring transition duration {}", d);
                Ok(())
            }
            res => res,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::mpsc;

    use crate::command::TourCommand;
    use crate::navigator::{NavigatorOptions, TourPosition, TransitionMode, Waypoint};
    use crate::pose::Pose;

    fn controller() -> (
        TourController,
        mpsc::Sender<UICommand>,
        mpsc::Receiver<TourCommand>,
    ) {
        let (to_view, from_nav) = mpsc::channel();
        let (to_cnt, from_ui) = mpsc::channel();
        let waypoints = ["lobby", "gallery", "studio"]
            .iter()
            .enumerate()
            .map(|(i, &name)| Waypoint {
                name: name.to_owned(),
                pose: Pose::new([i as f32, 0., 0.], quaternion::id()),
                overlay: name.into(),
            })
            .collect();
        let nav = TourNavigator::configure(
            waypoints,
            "home".into(),
            NavigatorOptions::default(),
            to_view,
        )
        .unwrap();
        (TourController::new(from_ui, nav), to_cnt, from_nav)
    }

    #[test]
    fn drains_all_pending_commands() {
        let (mut cnt, to_cnt, _from_nav) = controller();
        to_cnt.send(UICommand::Start).unwrap();
        to_cnt.send(UICommand::Next).unwrap();
        to_cnt.send(UICommand::Next).unwrap();
        to_cnt.send(UICommand::Previous).unwrap();
        cnt.update().unwrap();
        assert_eq!(
            cnt.navigator().state().position,
            TourPosition::AtWaypoint(1)
        );
    }

    #[test]
    fn settings_reach_navigator() {
        let (mut cnt, to_cnt, _from_nav) = controller();
        to_cnt.send(UICommand::SetTransitionDuration(0.75)).unwrap();
        to_cnt.send(UICommand::SetDirectTransition(true)).unwrap();
        cnt.update().unwrap();
        let state = cnt.navigator().state();
        assert_eq!(state.transition_duration, 0.75);
        assert_eq!(state.transition_mode, TransitionMode::Instant);
    }

    #[test]
    fn invalid_duration_is_skipped() {
        let (mut cnt, to_cnt, _from_nav) = controller();
        to_cnt.send(UICommand::SetTransitionDuration(0.)).unwrap();
        to_cnt.send(UICommand::Start).unwrap();
        cnt.update().unwrap();
        assert_eq!(cnt.navigator().state().transition_duration, 2.0);
        assert_eq!(cnt.navigator().state().current_index(), Some(0));
    }

    #[test]
    fn exit_reaches_view() {
        let (mut cnt, _to_cnt, from_nav) = controller();
        from_nav.try_iter().for_each(drop);
        cnt.dispatch(UICommand::Exit).unwrap();
        assert_eq!(from_nav.try_recv(), Ok(TourCommand::Terminate));
    }
}
