// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of elbow-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Grid snapping and the geometric predicates the router is built on.

pub mod grid;
pub mod predicates;

pub use grid::{snap_point_to_grid, Grid, GridError, GRID_SIZE};
pub(crate) use predicates::segment_crosses_rect;
pub use predicates::{
    find_rect_at, is_point_in_any_rectangle, is_point_in_bounds, rectangle_by_points,
    rectangles_overlap,
};
