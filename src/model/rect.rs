// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of elbow-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::point::Point;

/// An axis-aligned node rectangle: top-left corner plus width and height.
///
/// Well-formed rectangles have `w > 0` and `h > 0`. Zero-sized rectangles are
/// tolerated everywhere (they simply have no interior); negative sizes are not
/// validated by the routing core.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    /// Connector anchor in the middle of the top edge.
    pub fn top_center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y)
    }

    /// Connector anchor in the middle of the bottom edge.
    pub fn bottom_center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.bottom())
    }

    /// Closed containment: points on the edges count as inside.
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Open containment: only points strictly inside the rectangle.
    ///
    /// Connector anchors sit on the edge of their rectangle, so they are never
    /// reported as being inside it.
    pub fn interior_contains(&self, p: Point) -> bool {
        p.x > self.x && p.x < self.right() && p.y > self.y && p.y < self.bottom()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {} {}x{}]", self.x, self.y, self.w, self.h)
    }
}
