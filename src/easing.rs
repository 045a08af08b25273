/*
 * File: easing.rs
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

use serde::{Deserialize, Serialize};

use std::f32::consts::PI;

/// Easing curves for tweened transitions.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    Linear,
    #[default]
    InOutSine,
    InOutQuad,
    InOutCubic,
}

impl Ease {
    /// Maps normalized time to normalized progress. `t` is clamped to `[0, 1]`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0., 1.);
        match self {
            Ease::Linear => t,
            Ease::InOutSine => -((PI * t).cos() - 1.) / 2.,
            Ease::InOutQuad => {
                if t < 0.5 {
                    2. * t * t
                } else {
                    1. - (-2. * t + 2.).powi(2) / 2.
                }
            }
            Ease::InOutCubic => {
                if t < 0.5 {
                    4. * t * t * t
                } else {
                    1. - (-2. * t + 2.).powi(3) / 2.
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Ease; 4] = [Ease::Linear, Ease::InOutSine, Ease::InOutQuad, Ease::InOutCubic];

    #[test]
    fn fixed_endpoints() {
        for ease in ALL {
            assert!(ease.apply(0.).abs() < 1e-6, "{:?}", ease);
            assert!((ease.apply(1.) - 1.).abs() < 1e-6, "{:?}", ease);
            assert!((ease.apply(0.5) - 0.5).abs() < 1e-6, "{:?}", ease);
        }
    }

    #[test]
    fn clamps_out_of_range_time() {
        for ease in ALL {
            assert_eq!(ease.apply(-1.), ease.apply(0.));
            assert_eq!(ease.apply(3.), ease.apply(1.));
        }
    }

    #[test]
    fn in_out_curves_start_slow() {
        for ease in [Ease::InOutSine, Ease::InOutQuad, Ease::InOutCubic] {
            assert!(ease.apply(0.1) < 0.1);
            assert!(ease.apply(0.9) > 0.9);
        }
    }

    #[test]
    fn monotonic() {
        for ease in ALL {
            let mut last = 0.;
            for i in 1..=100 {
                let v = ease.apply(i as f32 / 100.);
                assert!(v >= last);
                last = v;
            }
        }
    }

    #[test]
    fn deserializes_snake_case() {
        let ease: Ease = serde_json::from_str("\"in_out_cubic\"").unwrap();
        assert_eq!(ease, Ease::InOutCubic);
    }
}
