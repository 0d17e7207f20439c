// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of elbow-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use elbow_route::{Point, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// Target below and to the right; the direct elbow is clear.
    Direct,
    /// Target above with a gap between the nodes; routes through the gap.
    GapDetour,
    /// Target stacked straight above; routes around the outside.
    StackedDetour,
}

pub fn rects(case: Case) -> (Rect, Rect) {
    match case {
        Case::Direct => (Rect::new(60.0, 60.0, 80.0, 60.0), Rect::new(250.0, 200.0, 80.0, 60.0)),
        Case::GapDetour => {
            (Rect::new(60.0, 200.0, 80.0, 60.0), Rect::new(300.0, 40.0, 80.0, 60.0))
        }
        Case::StackedDetour => {
            (Rect::new(100.0, 200.0, 80.0, 60.0), Rect::new(100.0, 40.0, 80.0, 60.0))
        }
    }
}

/// A deterministic sweep of node pairs: the target walks a `side` x `side`
/// lattice around a fixed source, so the set mixes direct elbows and detours.
pub fn sweep(side: usize) -> Vec<(Rect, Rect)> {
    let source = Rect::new(400.0, 400.0, 80.0, 60.0);
    let mut out = Vec::with_capacity(side * side);
    for row in 0..side {
        for col in 0..side {
            let x = col as f64 * 900.0 / side as f64;
            let y = row as f64 * 900.0 / side as f64;
            let target = Rect::new(x, y, 80.0, 60.0);
            out.push((source, target));
        }
    }
    out
}

/// A long staircase polyline with `steps` corners, padded with collinear
/// and repeated points so simplification has work to do.
pub fn noisy_staircase(steps: usize) -> Vec<Point> {
    let mut out = Vec::with_capacity(steps * 4 + 1);
    let mut x = 0.0;
    let mut y = 0.0;
    out.push(Point::new(x, y));
    for _ in 0..steps {
        out.push(Point::new(x, y + 10.0));
        y += 20.0;
        out.push(Point::new(x, y));
        out.push(Point::new(x, y));
        x += 20.0;
        out.push(Point::new(x, y));
    }
    out
}
