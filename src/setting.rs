/*
 * File: setting.rs
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
use serde::{Deserialize, Serialize};

use std::{
    collections::HashSet,
    fs::{File, OpenOptions},
    io::{BufReader, Write},
    path::Path,
};

use crate::easing::Ease;
use crate::error::{Error, Result};
use crate::navigator::{NavigatorOptions, TransitionMode, Waypoint};
use crate::overlay::OverlayId;
use crate::pose::Pose;

pub const HOME_OVERLAY: &str = "home";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OverlaySetting {
    pub title: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoomSetting {
    pub name: String,
    pub position: [f32; 3],
    /// Euler angles in degrees.
    #[serde(default)]
    pub rotation: [f32; 3],
    pub title: String,
    #[serde(default)]
    pub text: String,
}

impl RoomSetting {
    fn new(name: &str, position: [f32; 3], yaw: f32, title: &str, text: &str) -> Self {
        Self {
            name: name.to_owned(),
            position,
            rotation: [0., yaw, 0.],
            title: title.to_owned(),
            text: text.to_owned(),
        }
    }
}

/// Tour definition: rooms, overlays and the initial navigator settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Setting {
    pub window_width: u32,
    pub window_height: u32,
    pub transition_duration: f32,
    pub duration_range: [f32; 2],
    pub direct_transition: bool,
    pub ease: Ease,
    pub exit_visible: bool,
    pub nav_buttons: bool,
    pub start_position: [f32; 3],
    pub start_rotation: [f32; 3],
    pub home: OverlaySetting,
    pub rooms: Vec<RoomSetting>,
}

impl Setting {
    pub fn new() -> Self {
        Self {
            window_width: 960,
            window_height: 640,
            transition_duration: 2.0,
            duration_range: [0.1, 10.0],
            direct_transition: false,
            ease: Ease::InOutSine,
            exit_visible: true,
            nav_buttons: false,
            start_position: [0., 1.6, 8.],
            start_rotation: [0., 0., 0.],
            home: OverlaySetting {
                title: "Welcome".to_owned(),
                text: "Press Start to begin the tour.".to_owned(),
            },
            rooms: vec![
                RoomSetting::new("lobby", [0., 1.6, 0.], 0., "Lobby", "Reception and cloakroom."),
                RoomSetting::new("gallery", [8., 1.6, -4.], 90., "Gallery", "Temporary exhibitions."),
                RoomSetting::new("studio", [8., 1.6, -14.], 180., "Studio", "Workshops and talks."),
                RoomSetting::new("terrace", [-6., 1.6, -12.], -90., "Terrace", "View over the park."),
            ],
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.rooms.is_empty() {
            return Err(Error::EmptyTour);
        }

        let mut names = HashSet::new();
        for room in &self.rooms {
            if room.name.is_empty() {
                return Err(Error::InvalidTour("room with empty name".to_owned()));
            }
            if room.name == HOME_OVERLAY {
                return Err(Error::InvalidTour(format!(
                    "room name '{}' is reserved",
                    HOME_OVERLAY
                )));
            }
            if !names.insert(room.name.as_str()) {
                return Err(Error::InvalidTour(format!(
                    "duplicate room '{}'",
                    room.name
                )));
            }
        }

        let [min, max] = self.duration_range;
        if !(min.is_finite() && max.is_finite() && 0. < min && min <= max) {
            return Err(Error::InvalidTour(format!(
                "bad duration range [{}, {}]",
                min, max
            )));
        }
        if !(min..=max).contains(&self.transition_duration) {
            return Err(Error::InvalidTour(format!(
                "transition duration {} outside [{}, {}]",
                self.transition_duration, min, max
            )));
        }
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let setting: Self = serde_json::from_reader(BufReader::new(file))?;
        setting.validate()?;
        Ok(setting)
    }

    /// Falls back to the built-in tour when `path` is missing or invalid.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path.as_ref()) {
            Ok(setting) => setting,
            Err(e) => {
                warn!(
                    "cannot use tour file {}: {}, using built-in tour",
                    path.as_ref().display(),
                    e
                );
                Self::new()
            }
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)?;
        writeln!(&mut file, "{}", json)?;
        Ok(())
    }

    pub fn home_overlay(&self) -> OverlayId {
        OverlayId::new(HOME_OVERLAY)
    }

    /// Home overlay first, then one per room.
    pub fn overlay_ids(&self) -> Vec<OverlayId> {
        std::iter::once(self.home_overlay())
            .chain(self.rooms.iter().map(|r| OverlayId::new(r.name.as_str())))
            .collect()
    }

    pub fn overlay_content(&self, id: &OverlayId) -> Option<(&str, &str)> {
        if id.as_str() == HOME_OVERLAY {
            return Some((&self.home.title, &self.home.text));
        }
        self.rooms
            .iter()
            .find(|r| r.name == id.as_str())
            .map(|r| (r.title.as_str(), r.text.as_str()))
    }

    pub fn start_pose(&self) -> Pose {
        Pose::from_euler_deg(self.start_position, self.start_rotation)
    }

    pub fn waypoints(&self) -> Vec<Waypoint> {
        self.rooms
            .iter()
            .map(|r| Waypoint {
                name: r.name.clone(),
                pose: Pose::from_euler_deg(r.position, r.rotation),
                overlay: OverlayId::new(r.name.as_str()),
            })
            .collect()
    }

    pub fn navigator_options(&self) -> NavigatorOptions {
        NavigatorOptions {
            exit_visible: self.exit_visible,
            transition_duration: self.transition_duration,
            transition_mode: if self.direct_transition {
                TransitionMode::Instant
            } else {
                TransitionMode::Animated
            },
            ease: self.ease,
            start_pose: self.start_pose(),
        }
    }
}

impl Default for Setting {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        Setting::new().validate().unwrap();
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tour.json");

        let mut setting = Setting::new();
        setting.transition_duration = 3.0;
        setting.nav_buttons = true;
        setting.rooms.truncate(2);
        setting.save(&path).unwrap();

        assert_eq!(Setting::load(&path).unwrap(), setting);
    }

    #[test]
    fn partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tour.json");
        std::fs::write(
            &path,
            r#"{ "rooms": [ { "name": "hall", "position": [1, 2, 3], "title": "Hall" } ],
                 "ease": "linear" }"#,
        )
        .unwrap();

        let setting = Setting::load(&path).unwrap();
        assert_eq!(setting.rooms.len(), 1);
        assert_eq!(setting.rooms[0].rotation, [0., 0., 0.]);
        assert_eq!(setting.ease, Ease::Linear);
        assert_eq!(setting.transition_duration, 2.0);
        assert_eq!(setting.home, Setting::new().home);
    }

    #[test]
    fn missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let setting = Setting::load_or_default(dir.path().join("nope.json"));
        assert_eq!(setting, Setting::new());
    }

    #[test]
    fn broken_json_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tour.json");
        std::fs::write(&path, "{ rooms: ").unwrap();
        assert!(matches!(Setting::load(&path), Err(Error::Json(_))));
        assert_eq!(Setting::load_or_default(&path), Setting::new());
    }

    #[test]
    fn rejects_bad_definitions() {
        let mut empty = Setting::new();
        empty.rooms.clear();
        assert!(matches!(empty.validate(), Err(Error::EmptyTour)));

        let mut dup = Setting::new();
        dup.rooms[1].name = dup.rooms[0].name.clone();
        assert!(matches!(dup.validate(), Err(Error::InvalidTour(_))));

        let mut reserved = Setting::new();
        reserved.rooms[0].name = HOME_OVERLAY.to_owned();
        assert!(matches!(reserved.validate(), Err(Error::InvalidTour(_))));

        let mut out_of_range = Setting::new();
        out_of_range.transition_duration = 20.;
        assert!(matches!(out_of_range.validate(), Err(Error::InvalidTour(_))));
    }

    #[test]
    fn overlays_and_waypoints_line_up() {
        let setting = Setting::new();
        let ids = setting.overlay_ids();
        assert_eq!(ids[0], setting.home_overlay());
        for (w, id) in setting.waypoints().iter().zip(ids.iter().skip(1)) {
            assert_eq!(&w.overlay, id);
            assert!(setting.overlay_content(id).is_some());
        }
        assert_eq!(
            setting.overlay_content(&setting.home_overlay()),
            Some(("Welcome", "Press Start to begin the tour."))
        );
    }
}
