/*
 * File: overlay.rs
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

use std::fmt;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OverlayId(String);

impl OverlayId {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OverlayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OverlayId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Visibility of every overlay the tour knows about.
#[derive(Debug, Clone)]
pub struct OverlayBoard {
    overlays: Vec<(OverlayId, bool)>,
}

impl OverlayBoard {
    pub fn new<I: IntoIterator<Item = OverlayId>>(ids: I) -> Self {
        Self {
            overlays: ids.into_iter().map(|id| (id, false)).collect(),
        }
    }

    pub fn hide_all(&mut self) {
        for (_, visible) in self.overlays.iter_mut() {
            *visible = false;
        }
    }

    pub fn show(&mut self, id: &OverlayId) -> Result<()> {
        match self.overlays.iter_mut().find(|(o, _)| o == id) {
            Some((_, visible)) => {
                *visible = true;
                Ok(())
            }
            None => Err(Error::UnknownOverlay(id.to_string())),
        }
    }

    pub fn is_visible(&self, id: &OverlayId) -> bool {
        self.overlays.iter().any(|(o, v)| *v && o == id)
    }

    pub fn visible(&self) -> Option<&OverlayId> {
        self.overlays.iter().find(|(_, v)| *v).map(|(o, _)| o)
    }

    pub fn visible_count(&self) -> usize {
        self.overlays.iter().filter(|(_, v)| *v).count()
    }

    pub fn ids(&self) -> impl Iterator<Item = &OverlayId> {
        self.overlays.iter().map(|(o, _)| o)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> OverlayBoard {
        OverlayBoard::new(vec![
            OverlayId::new("home"),
            OverlayId::new("lobby"),
            OverlayId::new("gallery"),
        ])
    }

    #[test]
    fn starts_hidden() {
        let b = board();
        assert_eq!(b.visible_count(), 0);
        assert!(b.visible().is_none());
    }

    #[test]
    fn hide_all_then_show_leaves_one() {
        let mut b = board();
        b.show(&"lobby".into()).unwrap();
        b.show(&"gallery".into()).unwrap();
        assert_eq!(b.visible_count(), 2);

        b.hide_all();
        b.show(&"home".into()).unwrap();
        assert_eq!(b.visible_count(), 1);
        assert_eq!(b.visible(), Some(&OverlayId::new("home")));
        assert!(!b.is_visible(&"lobby".into()));
    }

    #[test]
    fn unknown_overlay_is_rejected() {
        let mut b = board();
        match b.show(&"attic".into()) {
            Err(Error::UnknownOverlay(name)) => assert_eq!(name, "attic"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(b.visible_count(), 0);
    }
}
