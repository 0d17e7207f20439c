// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of elbow-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Geometric value types shared by the router and its callers.
//!
//! Everything here is `Copy` data in canvas pixel space (x grows right, y grows down).

pub mod canvas;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod point;
pub mod rect;

pub use canvas::CanvasSize;
pub use point::Point;
pub use rect::Rect;
