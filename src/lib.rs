// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of elbow-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! elbow-route: orthogonal connector routing between canvas nodes.
//!
//! Every entry point is a pure function of its geometric inputs: callers pass the two node
//! rectangles and their connector anchors on each call and get a fresh path back.

pub mod format;
pub mod geometry;
pub mod layout;
pub mod model;

pub use geometry::{
    is_point_in_any_rectangle, is_point_in_bounds, rectangle_by_points, rectangles_overlap,
    snap_point_to_grid, GRID_SIZE,
};
pub use layout::{create_elbow_connector, simplify_path};
pub use model::{CanvasSize, Point, Rect};
