// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of elbow-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! JSON documents for routing requests and their results.

pub mod request;

pub use request::{
    export_route_response, parse_route_request, RequestError, RouteRequest, RouteResponse,
};
