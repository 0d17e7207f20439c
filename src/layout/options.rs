// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of elbow-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::geometry::{Grid, GRID_SIZE};
use crate::model::CanvasSize;

/// Tunables for a single routing call.
///
/// The defaults match the canvas demo: a [`GRID_SIZE`] grid, one grid cell of
/// clearance around detoured nodes and no canvas clipping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteOptions {
    grid: Grid,
    clearance: f64,
    canvas: Option<CanvasSize>,
}

impl Default for RouteOptions {
    fn default() -> Self {
        Self { grid: Grid::default(), clearance: GRID_SIZE, canvas: None }
    }
}

impl RouteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the grid and resets the clearance to one cell of the new grid.
    pub fn with_grid(mut self, grid: Grid) -> Self {
        self.grid = grid;
        self.clearance = grid.size();
        self
    }

    /// Gap kept between a detour and the nodes it avoids.
    ///
    /// Negative or non-finite values fall back to zero clearance.
    pub fn with_clearance(mut self, clearance: f64) -> Self {
        self.clearance = if clearance.is_finite() { clearance.max(0.0) } else { 0.0 };
        self
    }

    /// Prefer detours whose waypoints stay on a canvas of this size.
    pub fn with_canvas(mut self, canvas: CanvasSize) -> Self {
        self.canvas = Some(canvas);
        self
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn clearance(&self) -> f64 {
        self.clearance
    }

    pub fn canvas(&self) -> Option<CanvasSize> {
        self.canvas
    }
}
