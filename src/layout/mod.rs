// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of elbow-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Connector routing.
//!
//! This module computes orthogonal connector paths between two nodes and reduces them to the
//! waypoints needed for drawing.

pub mod elbow;
pub mod options;
pub mod simplify;

pub use elbow::{connect_rects, create_elbow_connector, route_elbow};
pub use options::RouteOptions;
pub use simplify::{is_orthogonal_path, simplify_path};
