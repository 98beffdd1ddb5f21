//! Single test binary entry point.
//!
//! All integration tests link into one binary to keep link time down.
//!
//! Structure:
//! - helpers: App builder and drag helpers shared by the suites
//! - integration: Event sequences driven through `MazeApp`
//! - unit: Single-component tests against the public API

mod helpers;
mod unit;
