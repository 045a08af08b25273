/*
 * File: nav_buttons.rs
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

use crate::command::UICommand;
use crate::overlay::OverlayId;
use crate::setting::Setting;

pub const NAV_BUTTON_INSET: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    BottomLeft,
    BottomRight,
}

/// A navigation button attached to an overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct NavButton {
    pub label: &'static str,
    pub corner: Corner,
    pub inset: f64,
    pub command: UICommand,
}

impl NavButton {
    pub fn next() -> Self {
        Self {
            label: "Next",
            corner: Corner::BottomRight,
            inset: NAV_BUTTON_INSET,
            command: UICommand::Next,
        }
    }

    pub fn previous() -> Self {
        Self {
            label: "Previous",
            corner: Corner::BottomLeft,
            inset: NAV_BUTTON_INSET,
            command: UICommand::Previous,
        }
    }
}

/// Buttons for every room overlay, empty unless `nav_buttons` is set.
pub fn nav_buttons(setting: &Setting) -> Vec<(OverlayId, [NavButton; 2])> {
    if !setting.nav_buttons {
        return vec![];
    }
    setting
        .rooms
        .iter()
        .map(|r| {
            (
                OverlayId::new(r.name.as_str()),
                [NavButton::next(), NavButton::previous()],
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_by_default() {
        assert!(nav_buttons(&Setting::new()).is_empty());
    }

    #[test]
    fn one_pair_per_room() {
        let mut setting = Setting::new();
        setting.nav_buttons = true;
        let buttons = nav_buttons(&setting);

        assert_eq!(buttons.len(), setting.rooms.len());
        assert!(buttons
            .iter()
            .all(|(id, _)| *id != setting.home_overlay()));
        for (_, [next, prev]) in &buttons {
            assert_eq!(next.corner, Corner::BottomRight);
            assert_eq!(next.command, UICommand::Next);
            assert_eq!(prev.corner, Corner::BottomLeft);
            assert_eq!(prev.command, UICommand::Previous);
            assert_eq!(next.inset, 10.0);
            assert_eq!(prev.inset, 10.0);
        }
    }
}
