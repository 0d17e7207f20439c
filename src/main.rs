// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of elbow-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! elbow-route CLI entrypoint.
//!
//! Routes one connector between two node rectangles and prints the path as JSON
//! (`{"points":[{"x":..,"y":..},..]}`) on stdout.
//!
//! Use `--request <file>` (or `--request -` for stdin) to read a full JSON routing request
//! instead of passing the rectangles as flags.

use std::error::Error;
use std::io::Read;

use elbow_route::format::{export_route_response, parse_route_request, RouteRequest};
use elbow_route::model::{CanvasSize, Rect};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} --source <x,y,w,h> --target <x,y,w,h> [--grid <size>] [--clearance <px>] [--canvas <w,h>] [--raw]\n  {program} --request <file|->\n\nThe connector leaves the bottom-centre of the source rectangle and enters the top-centre\nof the target rectangle. --raw prints the router's waypoints without simplification.\n--canvas makes detours prefer waypoints inside a canvas of that size."
    );
}

#[derive(Debug, Default, Clone, PartialEq)]
struct CliOptions {
    request_path: Option<String>,
    source_rect: Option<Rect>,
    target_rect: Option<Rect>,
    grid_size: Option<f64>,
    clearance: Option<f64>,
    canvas: Option<CanvasSize>,
    raw: bool,
}

fn parse_numbers<const N: usize>(raw: &str) -> Option<[f64; N]> {
    let mut out = [0.0; N];
    let mut parts = raw.split(',');
    for slot in out.iter_mut() {
        *slot = parts.next()?.trim().parse::<f64>().ok()?;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(out)
}

fn parse_rect(raw: &str) -> Option<Rect> {
    let [x, y, w, h] = parse_numbers::<4>(raw)?;
    Some(Rect::new(x, y, w, h))
}

fn parse_canvas(raw: &str) -> Option<CanvasSize> {
    let [w, h] = parse_numbers::<2>(raw)?;
    Some(CanvasSize::new(w, h))
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--request" => {
                if options.request_path.is_some() {
                    return Err(());
                }
                options.request_path = Some(args.next().ok_or(())?);
            }
            "--source" => {
                if options.source_rect.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.source_rect = Some(parse_rect(&raw).ok_or(())?);
            }
            "--target" => {
                if options.target_rect.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.target_rect = Some(parse_rect(&raw).ok_or(())?);
            }
            "--grid" => {
                if options.grid_size.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.grid_size = Some(raw.trim().parse().map_err(|_| ())?);
            }
            "--clearance" => {
                if options.clearance.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.clearance = Some(raw.trim().parse().map_err(|_| ())?);
            }
            "--canvas" => {
                if options.canvas.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                options.canvas = Some(parse_canvas(&raw).ok_or(())?);
            }
            "--raw" => {
                if options.raw {
                    return Err(());
                }
                options.raw = true;
            }
            _ => return Err(()),
        }
    }

    let has_geometry_flags = options.source_rect.is_some()
        || options.target_rect.is_some()
        || options.grid_size.is_some()
        || options.clearance.is_some()
        || options.canvas.is_some()
        || options.raw;

    if options.request_path.is_some() {
        if has_geometry_flags {
            return Err(());
        }
        return Ok(options);
    }

    if options.source_rect.is_none() || options.target_rect.is_none() {
        return Err(());
    }

    Ok(options)
}

fn request_from_flags(options: &CliOptions) -> Option<RouteRequest> {
    let mut request = RouteRequest::new(options.source_rect?, options.target_rect?);
    request.grid_size = options.grid_size;
    request.clearance = options.clearance;
    request.canvas = options.canvas;
    request.simplify = !options.raw;
    Some(request)
}

fn read_request_source(path: &str) -> std::io::Result<String> {
    if path == "-" {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        return Ok(input);
    }
    std::fs::read_to_string(path)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "elbow-route".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let request = match options.request_path.as_deref() {
            Some(path) => {
                let input = read_request_source(path)
                    .map_err(|err| format!("cannot read request {path:?}: {err}"))?;
                parse_route_request(&input)?
            }
            None => request_from_flags(&options).ok_or("missing --source or --target")?,
        };

        let response = request.route()?;
        println!("{}", export_route_response(&response)?);
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("elbow-route: {err}");
        std::process::exit(1);
    }
}
