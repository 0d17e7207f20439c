// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of elbow-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::rect::Rect;

/// The two 80x60 nodes of the canvas demo in their starting positions.
pub(crate) fn demo_rects() -> (Rect, Rect) {
    (Rect::new(60.0, 60.0, 80.0, 60.0), Rect::new(250.0, 200.0, 80.0, 60.0))
}

/// Target dragged above the source with a wide horizontal gap between them.
pub(crate) fn target_above_with_gap() -> (Rect, Rect) {
    (Rect::new(60.0, 200.0, 80.0, 60.0), Rect::new(300.0, 40.0, 80.0, 60.0))
}

/// Target dragged above the source, both stacked in the same column.
pub(crate) fn target_stacked_above() -> (Rect, Rect) {
    (Rect::new(100.0, 200.0, 80.0, 60.0), Rect::new(100.0, 40.0, 80.0, 60.0))
}

/// Wider target above the source, shifted right so the two overlap horizontally.
pub(crate) fn target_above_offset() -> (Rect, Rect) {
    (Rect::new(100.0, 200.0, 80.0, 60.0), Rect::new(160.0, 60.0, 100.0, 60.0))
}
