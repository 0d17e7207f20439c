// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of elbow-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{Grid, GridError};
use crate::layout::{route_elbow, simplify_path, RouteOptions};
use crate::model::{CanvasSize, Point, Rect};

/// A routing request as read from JSON.
///
/// Only the two node rectangles are required. Missing anchors default to the
/// bottom-centre of the source node and the top-centre of the target node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRequest {
    pub source_rect: Rect,
    pub target_rect: Rect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clearance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas: Option<CanvasSize>,
    #[serde(default = "default_simplify")]
    pub simplify: bool,
}

fn default_simplify() -> bool {
    true
}

/// The routed connector, ready to be stroked as a polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteResponse {
    pub points: Vec<Point>,
}

#[derive(Debug)]
pub enum RequestError {
    Json { source: serde_json::Error },
    InvalidRect { field: &'static str, rect: Rect },
    InvalidPoint { field: &'static str, point: Point },
    InvalidGrid { source: GridError },
    InvalidClearance { clearance: f64 },
    InvalidCanvas { canvas: CanvasSize },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { source } => write!(f, "invalid route request json: {source}"),
            Self::InvalidRect { field, rect } => write!(
                f,
                "{field} must have finite coordinates and a non-negative size (got {rect})"
            ),
            Self::InvalidPoint { field, point } => {
                write!(f, "{field} must have finite coordinates (got {point})")
            }
            Self::InvalidGrid { source } => write!(f, "invalid grid_size: {source}"),
            Self::InvalidClearance { clearance } => {
                write!(f, "clearance must be finite and non-negative (got {clearance})")
            }
            Self::InvalidCanvas { canvas } => write!(
                f,
                "canvas must have a finite, non-negative size (got {}x{})",
                canvas.w, canvas.h
            ),
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source } => Some(source),
            Self::InvalidGrid { source } => Some(source),
            _ => None,
        }
    }
}

impl RouteRequest {
    pub fn new(source_rect: Rect, target_rect: Rect) -> Self {
        Self {
            source_rect,
            target_rect,
            source: None,
            target: None,
            grid_size: None,
            clearance: None,
            canvas: None,
            simplify: true,
        }
    }

    pub fn source_anchor(&self) -> Point {
        self.source.unwrap_or_else(|| self.source_rect.bottom_center())
    }

    pub fn target_anchor(&self) -> Point {
        self.target.unwrap_or_else(|| self.target_rect.top_center())
    }

    /// Checks the geometry and builds the routing options.
    pub fn options(&self) -> Result<RouteOptions, RequestError> {
        validate_rect("source_rect", &self.source_rect)?;
        validate_rect("target_rect", &self.target_rect)?;
        validate_point("source", self.source_anchor())?;
        validate_point("target", self.target_anchor())?;

        let mut options = RouteOptions::new();
        if let Some(size) = self.grid_size {
            let grid = Grid::new(size).map_err(|source| RequestError::InvalidGrid { source })?;
            options = options.with_grid(grid);
        }
        if let Some(clearance) = self.clearance {
            if !clearance.is_finite() || clearance < 0.0 {
                return Err(RequestError::InvalidClearance { clearance });
            }
            options = options.with_clearance(clearance);
        }
        if let Some(canvas) = self.canvas {
            if !(canvas.w.is_finite() && canvas.h.is_finite() && canvas.w >= 0.0 && canvas.h >= 0.0)
            {
                return Err(RequestError::InvalidCanvas { canvas });
            }
            options = options.with_canvas(canvas);
        }
        Ok(options)
    }

    pub fn route(&self) -> Result<RouteResponse, RequestError> {
        let options = self.options()?;
        let raw = route_elbow(
            self.source_anchor(),
            self.target_anchor(),
            &self.source_rect,
            &self.target_rect,
            &options,
        );
        let points = if self.simplify { simplify_path(&raw) } else { raw };
        Ok(RouteResponse { points })
    }
}

fn validate_rect(field: &'static str, rect: &Rect) -> Result<(), RequestError> {
    let finite = [rect.x, rect.y, rect.w, rect.h].iter().all(|v| v.is_finite());
    if !finite || rect.w < 0.0 || rect.h < 0.0 {
        return Err(RequestError::InvalidRect { field, rect: *rect });
    }
    Ok(())
}

fn validate_point(field: &'static str, point: Point) -> Result<(), RequestError> {
    if !(point.x.is_finite() && point.y.is_finite()) {
        return Err(RequestError::InvalidPoint { field, point });
    }
    Ok(())
}

pub fn parse_route_request(input: &str) -> Result<RouteRequest, RequestError> {
    let request: RouteRequest =
        serde_json::from_str(input).map_err(|source| RequestError::Json { source })?;
    request.options()?;
    Ok(request)
}

pub fn export_route_response(response: &RouteResponse) -> Result<String, RequestError> {
    serde_json::to_string(response).map_err(|source| RequestError::Json { source })
}
