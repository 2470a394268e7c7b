//! Benchmark profiles for the Rally drill generator.
//!
//! Provides named window profiles shared by the benchmarks:
//!
//! - [`tight_profile`]: a narrow window where roughly one attempt in five
//!   dead-ends on its first shot
//! - [`wide_profile`]: a window that rarely prunes candidates
//! - [`window_profiles`]: every profile with its benchmark label

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rally_field::DistanceWindow;

/// Shots per generated sequence in the generation benchmarks.
pub const BENCH_SHOTS: usize = 100;

/// `[1, 4.5]`: Back-row openings have no reachable cell across the net.
pub fn tight_profile() -> DistanceWindow {
    DistanceWindow {
        min: 1.0,
        max: 4.5,
    }
}

/// `[0, 8]`: nearly every cell stays reachable.
pub fn wide_profile() -> DistanceWindow {
    DistanceWindow { min: 0.0, max: 8.0 }
}

/// All profiles, labelled, unconstrained first.
pub fn window_profiles() -> Vec<(&'static str, DistanceWindow)> {
    vec![
        ("unconstrained", DistanceWindow::UNBOUNDED),
        ("wide", wide_profile()),
        ("tight", tight_profile()),
    ]
}
