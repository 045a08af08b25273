/*
 * File: error.rs
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

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("tour has no waypoints")]
    EmptyTour,

    #[error("invalid tour definition: {0}")]
    InvalidTour(String),

    #[error("unknown overlay '{0}'")]
    UnknownOverlay(String),

    #[error("transition duration must be positive and finite, got {0}")]
    InvalidDuration(f32),

    #[error("command channel disconnected")]
    Disconnected,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
