// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of elbow-route and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

/// Bench run settings, overridable through `ELBOW_*` environment variables.
///
/// Routing a single connector takes well under a microsecond, so the defaults
/// favour more samples over long measurement windows.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BenchSettings {
    samples: usize,
    warm_up: Duration,
    measurement: Duration,
    /// Sampling frequency in Hz; `None` runs without the flamegraph profiler.
    profile_hz: Option<i32>,
}

impl Default for BenchSettings {
    fn default() -> Self {
        Self {
            samples: 100,
            warm_up: Duration::from_secs(2),
            measurement: Duration::from_secs(4),
            profile_hz: Some(1000),
        }
    }
}

fn read_env<T: FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<T>().ok())
}

impl BenchSettings {
    fn from_env() -> Self {
        let defaults = Self::default();
        let secs = |name: &str, default: Duration, max: u64| {
            read_env::<u64>(name).map(|s| Duration::from_secs(s.clamp(1, max))).unwrap_or(default)
        };

        // ELBOW_PROFILE_FREQ=0 disables profiling on hosts without perf events.
        let profile_hz = match read_env::<i32>("ELBOW_PROFILE_FREQ") {
            Some(hz) if hz <= 0 => None,
            Some(hz) => Some(hz.min(5000)),
            None => defaults.profile_hz,
        };

        Self {
            samples: read_env::<usize>("ELBOW_BENCH_SAMPLE_SIZE")
                .map(|n| n.clamp(10, 500))
                .unwrap_or(defaults.samples),
            warm_up: secs("ELBOW_BENCH_WARMUP_SECS", defaults.warm_up, 60),
            measurement: secs("ELBOW_BENCH_MEASUREMENT_SECS", defaults.measurement, 120),
            profile_hz,
        }
    }

    fn into_criterion(self) -> Criterion {
        let criterion = Criterion::default()
            .sample_size(self.samples)
            .warm_up_time(self.warm_up)
            .measurement_time(self.measurement);
        match self.profile_hz {
            Some(hz) => criterion.with_profiler(PProfProfiler::new(hz, Output::Flamegraph(None))),
            None => criterion,
        }
    }
}

/// Criterion config shared by every bench target. Flamegraphs are written when
/// the bench runs with `--profile-time <secs>`.
pub fn criterion() -> Criterion {
    BenchSettings::from_env().into_criterion()
}
