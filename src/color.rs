/*
 * File: color.rs
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

use conrod_core::color;
use conrod_core::color::Color;

pub const DARK: Color = color::Color::Rgba(0.122, 0.125, 0.141, 1.);
pub const OVERLAY: Color = color::Color::Rgba(0.004, 0., 0.043, 0.85);
pub const ALPHA: Color = color::Color::Rgba(0., 0., 0., 0.);
pub const GRAY: Color = color::Color::Rgba(0.6, 0.6, 0.6, 1.);
pub const WHITE: Color = color::Color::Rgba(1., 1., 1., 1.);

pub const MAP_BACKGROUND: [f32; 4] = [0.18, 0.19, 0.22, 1.];
pub const MAP_PATH: [f32; 4] = [0.35, 0.36, 0.4, 1.];
pub const MAP_ROOM: [f32; 4] = [0.267, 0.224, 1., 1.];
pub const MAP_ROOM_ACTIVE: [f32; 4] = [1., 0.78, 0.2, 1.];
pub const MAP_CAMERA: [f32; 4] = [1., 1., 1., 1.];
