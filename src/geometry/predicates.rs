// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of elbow-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{CanvasSize, Point, Rect};

/// Returns `true` when `p` lies on the canvas, edges included.
pub fn is_point_in_bounds(p: Point, bounds: CanvasSize) -> bool {
    p.x >= 0.0 && p.x <= bounds.w && p.y >= 0.0 && p.y <= bounds.h
}

/// Builds the rectangle spanned by two opposite corners given in any order.
pub fn rectangle_by_points(a: Point, b: Point) -> Rect {
    Rect::new(a.x.min(b.x), a.y.min(b.y), (a.x - b.x).abs(), (a.y - b.y).abs())
}

/// Axis-aligned overlap test over open intervals.
///
/// Rectangles that only touch along an edge or at a corner do not overlap. A
/// degenerate rectangle (a segment or a single point) overlaps `other` exactly
/// when it passes through `other`'s interior, which is what the router uses to
/// test path segments against nodes.
pub fn rectangles_overlap(a: Rect, b: Rect) -> bool {
    a.x < b.right() && b.x < a.right() && a.y < b.bottom() && b.y < a.bottom()
}

/// Returns `true` when `p` lies inside or on the edge of at least one rectangle.
pub fn is_point_in_any_rectangle(p: Point, rects: &[Rect]) -> bool {
    find_rect_at(p, rects).is_some()
}

/// Index of the first rectangle containing `p` (edges included).
///
/// Earlier rectangles win when several overlap at `p`.
pub fn find_rect_at(p: Point, rects: &[Rect]) -> Option<usize> {
    rects.iter().position(|rect| rect.contains_point(p))
}

/// Returns `true` when the axis-aligned segment `a`-`b` enters the interior of `rect`.
///
/// Running along an edge does not count.
pub(crate) fn segment_crosses_rect(a: Point, b: Point, rect: &Rect) -> bool {
    rectangles_overlap(rectangle_by_points(a, b), *rect)
}
