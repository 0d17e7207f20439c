// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of elbow-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::model::Point;

/// Cell size of the canvas grid, in pixels.
///
/// Shared by node placement (drag snapping on the caller side) and by the
/// router when it picks interior waypoints.
pub const GRID_SIZE: f64 = 10.0;

/// Snaps both coordinates of `p` to the nearest multiple of [`GRID_SIZE`].
///
/// Halfway values round away from zero. Snapping an already snapped point
/// returns it unchanged.
pub fn snap_point_to_grid(p: Point) -> Point {
    Grid::default().snap_point(p)
}

/// A uniform lattice with a fixed, positive cell size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridError {
    NonFinite { size: f64 },
    NonPositive { size: f64 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { size } => write!(f, "grid size must be finite (got {size})"),
            Self::NonPositive { size } => write!(f, "grid size must be positive (got {size})"),
        }
    }
}

impl std::error::Error for GridError {}

impl Default for Grid {
    fn default() -> Self {
        Self { size: GRID_SIZE }
    }
}

impl Grid {
    pub fn new(size: f64) -> Result<Self, GridError> {
        if !size.is_finite() {
            return Err(GridError::NonFinite { size });
        }
        if size <= 0.0 {
            return Err(GridError::NonPositive { size });
        }
        Ok(Self { size })
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Nearest grid line.
    pub fn snap(&self, value: f64) -> f64 {
        (value / self.size).round() * self.size
    }

    /// Nearest grid line at or below `value`.
    pub fn snap_down(&self, value: f64) -> f64 {
        (value / self.size).floor() * self.size
    }

    /// Nearest grid line at or above `value`.
    pub fn snap_up(&self, value: f64) -> f64 {
        (value / self.size).ceil() * self.size
    }

    pub fn snap_point(&self, p: Point) -> Point {
        Point::new(self.snap(p.x), self.snap(p.y))
    }

    pub fn is_aligned(&self, value: f64) -> bool {
        self.snap(value) == value
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{snap_point_to_grid, Grid, GridError, GRID_SIZE};
    use crate::model::Point;

    #[rstest]
    #[case(Point::new(0.0, 0.0), Point::new(0.0, 0.0))]
    #[case(Point::new(14.9, 15.0), Point::new(10.0, 20.0))]
    #[case(Point::new(103.0, 157.0), Point::new(100.0, 160.0))]
    #[case(Point::new(-4.0, -6.0), Point::new(0.0, -10.0))]
    #[case(Point::new(-15.0, 25.0), Point::new(-20.0, 30.0))]
    fn snaps_to_nearest_grid_line(#[case] input: Point, #[case] expected: Point) {
        assert_eq!(snap_point_to_grid(input), expected);
    }

    #[test]
    fn snapping_is_idempotent() {
        for p in [Point::new(3.3, 7.7), Point::new(-42.5, 1234.5), Point::new(290.0, 160.0)] {
            let once = snap_point_to_grid(p);
            assert_eq!(snap_point_to_grid(once), once, "snapping {p} twice moved it");
        }
    }

    #[test]
    fn directional_snapping_never_crosses_the_input() {
        let grid = Grid::default();

        assert_eq!(grid.snap_down(129.0), 120.0);
        assert_eq!(grid.snap_up(121.0), 130.0);
        assert_eq!(grid.snap_down(130.0), 130.0);
        assert_eq!(grid.snap_up(130.0), 130.0);
        assert_eq!(grid.snap_down(-1.0), -10.0);
        assert_eq!(grid.snap_up(-11.0), -10.0);
    }

    #[test]
    fn custom_grid_sizes_are_honoured() {
        let grid = Grid::new(24.0).expect("grid");

        assert_eq!(grid.size(), 24.0);
        assert_eq!(grid.snap(35.0), 24.0);
        assert_eq!(grid.snap(37.0), 48.0);
        assert!(grid.is_aligned(72.0));
        assert!(!grid.is_aligned(70.0));
    }

    #[test]
    fn default_grid_uses_the_shared_constant() {
        assert_eq!(Grid::default().size(), GRID_SIZE);
    }

    #[test]
    fn rejects_unusable_grid_sizes() {
        assert_eq!(Grid::new(0.0), Err(GridError::NonPositive { size: 0.0 }));
        assert_eq!(Grid::new(-10.0), Err(GridError::NonPositive { size: -10.0 }));
        assert!(matches!(Grid::new(f64::NAN), Err(GridError::NonFinite { .. })));
        assert!(matches!(Grid::new(f64::INFINITY), Err(GridError::NonFinite { .. })));
    }
}
