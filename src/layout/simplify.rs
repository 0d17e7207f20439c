// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of elbow-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::Point;

/// Drops every interior waypoint that does not change the drawn shape.
///
/// A point is redundant when it and both of its neighbours share an x
/// coordinate or all share a y coordinate; this also removes repeated points
/// and spikes that double back along the same line. Removal repeats until no
/// redundant point is left, so the output never has three consecutive
/// collinear points and simplifying it again returns it unchanged. The first
/// and last points are always kept.
pub fn simplify_path(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut out = Vec::<Point>::with_capacity(points.len());
    for &point in points {
        out.push(point);
        while out.len() >= 3 {
            let n = out.len();
            if !is_redundant(out[n - 3], out[n - 2], out[n - 1]) {
                break;
            }
            out.remove(n - 2);
        }
    }
    out
}

/// Returns `true` when every segment of `points` is horizontal or vertical.
pub fn is_orthogonal_path(points: &[Point]) -> bool {
    points.windows(2).all(|pair| pair[0].is_axis_aligned_with(&pair[1]))
}

fn is_redundant(prev: Point, point: Point, next: Point) -> bool {
    (prev.x == point.x && point.x == next.x) || (prev.y == point.y && point.y == next.y)
}
