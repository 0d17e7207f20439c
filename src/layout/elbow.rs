// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of elbow-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Ordering;

use smallvec::SmallVec;

use super::options::RouteOptions;
use super::simplify::{is_orthogonal_path, simplify_path};
use crate::geometry::{is_point_in_bounds, segment_crosses_rect, Grid};
use crate::model::{Point, Rect};

/// Lengths closer than this are treated as equal when ranking detours.
const LENGTH_EPSILON: f64 = 1e-6;

/// Routes an orthogonal connector from `source` to `target` with default options.
///
/// `source` is expected on the bottom edge of `source_rect` and `target` on
/// the top edge of `target_rect`, but any anchors are accepted. The returned
/// path starts exactly at `source`, ends exactly at `target`, only contains
/// horizontal and vertical segments and may contain collinear waypoints; pass
/// it through [`simplify_path`] before drawing.
pub fn create_elbow_connector(
    source: Point,
    target: Point,
    source_rect: &Rect,
    target_rect: &Rect,
) -> Vec<Point> {
    route_elbow(source, target, source_rect, target_rect, &RouteOptions::default())
}

/// Deterministic elbow routing between two node anchors.
///
/// Tries the direct elbow through the snapped vertical midpoint first. When
/// that would cut through either node, it routes around them through a
/// vertical lane (the gap between the nodes, or past their outer left/right
/// edge plus clearance) and keeps the shortest such detour; equal detours
/// prefer the right-hand lane. When the nodes overlap no segment can stay out
/// of both, so the best detour whose waypoints stay outside both interiors is
/// used instead. The direct elbow is the last resort, so the caller always
/// gets a path.
pub fn route_elbow(
    source: Point,
    target: Point,
    source_rect: &Rect,
    target_rect: &Rect,
    options: &RouteOptions,
) -> Vec<Point> {
    if source == target {
        return vec![source, target];
    }

    let obstacles = [*source_rect, *target_rect];

    let direct = direct_elbow(source, target, options.grid());
    let path = if is_clear(&direct, &obstacles) {
        direct.to_vec()
    } else {
        match best_detour(source, target, &obstacles, options) {
            Some(detour) => detour.points.to_vec(),
            None => direct.to_vec(),
        }
    };
    debug_assert!(is_orthogonal_path(&path));
    path
}

/// Routes between the bottom-centre anchor of `source_rect` and the top-centre
/// anchor of `target_rect` and returns the simplified, ready-to-draw path.
pub fn connect_rects(source_rect: &Rect, target_rect: &Rect, options: &RouteOptions) -> Vec<Point> {
    let raw = route_elbow(
        source_rect.bottom_center(),
        target_rect.top_center(),
        source_rect,
        target_rect,
        options,
    );
    simplify_path(&raw)
}

fn direct_elbow(source: Point, target: Point, grid: Grid) -> [Point; 4] {
    let (lo, hi) =
        if source.y <= target.y { (source.y, target.y) } else { (target.y, source.y) };
    // Snapping may push the midline past an endpoint when they are close.
    let mid_y = grid.snap((source.y + target.y) / 2.0).max(lo).min(hi);
    [source, source.with_y(mid_y), target.with_y(mid_y), target]
}

fn is_clear(points: &[Point], obstacles: &[Rect]) -> bool {
    points.windows(2).all(|segment| {
        obstacles.iter().all(|rect| !segment_crosses_rect(segment[0], segment[1], rect))
    })
}

/// Weaker than [`is_clear`]: only the bends have to stay out of the nodes.
fn waypoints_clear(points: &[Point], obstacles: &[Rect]) -> bool {
    points
        .iter()
        .skip(1)
        .take(points.len().saturating_sub(2))
        .all(|p| obstacles.iter().all(|rect| !rect.interior_contains(*p)))
}

#[derive(Debug, Clone, Copy)]
struct Detour {
    points: [Point; 6],
    length: f64,
    lane_x: f64,
    on_canvas: bool,
}

impl Detour {
    fn new(
        source: Point,
        target: Point,
        exit_y: f64,
        lane_x: f64,
        entry_y: f64,
        options: &RouteOptions,
    ) -> Self {
        let points = [
            source,
            source.with_y(exit_y),
            Point::new(lane_x, exit_y),
            Point::new(lane_x, entry_y),
            target.with_y(entry_y),
            target,
        ];
        let length = points.windows(2).map(|pair| pair[0].manhattan_distance(&pair[1])).sum();
        let on_canvas = match options.canvas() {
            Some(canvas) => points.iter().all(|p| is_point_in_bounds(*p, canvas)),
            None => true,
        };
        Self { points, length, lane_x, on_canvas }
    }

    /// On-canvas first, then shorter, then further right.
    fn rank(&self, other: &Self) -> Ordering {
        other
            .on_canvas
            .cmp(&self.on_canvas)
            .then_with(|| compare_lengths(self.length, other.length))
            .then_with(|| other.lane_x.total_cmp(&self.lane_x))
    }
}

fn compare_lengths(a: f64, b: f64) -> Ordering {
    if (a - b).abs() <= LENGTH_EPSILON {
        Ordering::Equal
    } else {
        a.total_cmp(&b)
    }
}

fn push_unique(values: &mut SmallVec<[f64; 4]>, value: f64) {
    if !values.contains(&value) {
        values.push(value);
    }
}

/// Candidate vertical lanes: the grid line nearest the middle of any horizontal
/// gap between the two nodes, then one clearance past the outer right and outer
/// left edges.
fn lane_candidates(obstacles: &[Rect; 2], grid: Grid, clearance: f64) -> SmallVec<[f64; 4]> {
    let mut lanes = SmallVec::<[f64; 4]>::new();

    for (left, right) in [(&obstacles[0], &obstacles[1]), (&obstacles[1], &obstacles[0])] {
        let (gap_start, gap_end) = (left.right(), right.x);
        if gap_start >= gap_end {
            continue;
        }
        let lane = grid.snap((gap_start + gap_end) / 2.0);
        // Narrow gaps may have no grid line strictly inside them.
        if lane > gap_start && lane < gap_end {
            push_unique(&mut lanes, lane);
        }
    }

    let outer_right = obstacles[0].right().max(obstacles[1].right());
    let outer_left = obstacles[0].x.min(obstacles[1].x);
    push_unique(&mut lanes, grid.snap_up(outer_right + clearance));
    push_unique(&mut lanes, grid.snap_down(outer_left - clearance));

    lanes
}

fn best_detour(
    source: Point,
    target: Point,
    obstacles: &[Rect; 2],
    options: &RouteOptions,
) -> Option<Detour> {
    let grid = options.grid();
    let clearance = options.clearance();

    let lowest_bottom = obstacles[0].bottom().max(obstacles[1].bottom());
    let highest_top = obstacles[0].y.min(obstacles[1].y);

    // Leave the source downwards and enter the target from above, first just
    // past the anchors, then past both nodes.
    let mut exits = SmallVec::<[f64; 4]>::new();
    push_unique(&mut exits, grid.snap_up(source.y + clearance));
    push_unique(&mut exits, grid.snap_up(lowest_bottom + clearance));

    let mut entries = SmallVec::<[f64; 4]>::new();
    push_unique(&mut entries, grid.snap_down(target.y - clearance));
    push_unique(&mut entries, grid.snap_down(highest_top - clearance));

    let lanes = lane_candidates(obstacles, grid, clearance);

    let mut best: Option<Detour> = None;
    let mut best_overlapping: Option<Detour> = None;
    for &exit_y in &exits {
        for &entry_y in &entries {
            for &lane_x in &lanes {
                let detour = Detour::new(source, target, exit_y, lane_x, entry_y, options);
                let slot = if is_clear(&detour.points, obstacles) {
                    &mut best
                } else if waypoints_clear(&detour.points, obstacles) {
                    &mut best_overlapping
                } else {
                    continue;
                };
                keep_better(slot, detour);
            }
        }
    }

    best.or(best_overlapping)
}

fn keep_better(slot: &mut Option<Detour>, candidate: Detour) {
    let better = match slot {
        Some(current) => candidate.rank(current) == Ordering::Less,
        None => true,
    };
    if better {
        *slot = Some(candidate);
    }
}
