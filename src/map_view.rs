/*
 * File: map_view.rs
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

use camera_controllers::Camera;
use piston_window::{ellipse, line, rectangle, Context, G2d};
use room_tour::{Session, Setting};

use crate::camera_helper;
use crate::color;

const MAP_MARGIN: f64 = 40.0;
const ROOM_SIZE: f64 = 14.0;
const CAMERA_SIZE: f64 = 10.0;
const HEADING_LEN: f64 = 24.0;

/// Top-down floor plan of the tour: rooms on the xz plane and the camera.
pub struct MapView {
    area: [f64; 4],
    center: [f64; 2],
    scale: f64,
}

impl MapView {
    pub fn fit(setting: &Setting, area: [f64; 4]) -> Self {
        let points: Vec<[f64; 2]> = setting
            .rooms
            .iter()
            .map(|r| r.position)
            .chain(std::iter::once(setting.start_position))
            .map(|p| [p[0] as f64, p[2] as f64])
            .collect();

        let (mut min, mut max) = ([f64::MAX; 2], [f64::MIN; 2]);
        for p in &points {
            for i in 0..2 {
                min[i] = min[i].min(p[i]);
                max[i] = max[i].max(p[i]);
            }
        }
        let span_x = (max[0] - min[0]).max(1.);
        let span_z = (max[1] - min[1]).max(1.);
        let scale = ((area[2] - 2. * MAP_MARGIN) / span_x)
            .min((area[3] - 2. * MAP_MARGIN) / span_z)
            .max(1.);

        MapView {
            area,
            center: [(min[0] + max[0]) / 2., (min[1] + max[1]) / 2.],
            scale,
        }
    }

    fn to_screen(&self, x: f32, z: f32) -> [f64; 2] {
        [
            self.area[0] + self.area[2] / 2. + (x as f64 - self.center[0]) * self.scale,
            self.area[1] + self.area[3] / 2. + (z as f64 - self.center[1]) * self.scale,
        ]
    }

    pub fn draw(&self, session: &Session, camera: &Camera<f32>, c: Context, g: &mut G2d) {
        rectangle(color::MAP_BACKGROUND, self.area, c.transform, g);

        let waypoints = session.navigator().waypoints();
        let points: Vec<[f64; 2]> = waypoints
            .iter()
            .map(|w| self.to_screen(w.pose.position[0], w.pose.position[2]))
            .collect();

        for pair in points.windows(2) {
            line(
                color::MAP_PATH,
                1.,
                [pair[0][0], pair[0][1], pair[1][0], pair[1][1]],
                c.transform,
                g,
            );
        }

        let current = session.state().current_index();
        for (i, p) in points.iter().enumerate() {
            let col = if current == Some(i) {
                color::MAP_ROOM_ACTIVE
            } else {
                color::MAP_ROOM
            };
            rectangle(
                col,
                [p[0] - ROOM_SIZE / 2., p[1] - ROOM_SIZE / 2., ROOM_SIZE, ROOM_SIZE],
                c.transform,
                g,
            );
        }

        let cam = self.to_screen(camera.position[0], camera.position[2]);
        let heading = camera_helper::camera_heading(camera);
        ellipse(
            color::MAP_CAMERA,
            [
                cam[0] - CAMERA_SIZE / 2.,
                cam[1] - CAMERA_SIZE / 2.,
                CAMERA_SIZE,
                CAMERA_SIZE,
            ],
            c.transform,
            g,
        );
        line(
            color::MAP_CAMERA,
            1.5,
            [
                cam[0],
                cam[1],
                cam[0] + heading[0] as f64 * HEADING_LEN,
                cam[1] + heading[1] as f64 * HEADING_LEN,
            ],
            c.transform,
            g,
        );
    }
}
