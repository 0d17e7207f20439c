// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of elbow-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A location in canvas pixel space.
///
/// Points are plain values: the router creates fresh ones on every call and
/// never mutates them afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub(crate) fn with_x(self, x: f64) -> Self {
        Self { x, y: self.y }
    }

    pub(crate) fn with_y(self, y: f64) -> Self {
        Self { x: self.x, y }
    }

    /// Returns `true` when `other` can be reached with a single horizontal or
    /// vertical segment.
    pub fn is_axis_aligned_with(&self, other: &Point) -> bool {
        self.x == other.x || self.y == other.y
    }

    pub fn manhattan_distance(&self, other: &Point) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
