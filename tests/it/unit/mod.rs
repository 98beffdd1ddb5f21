//! Unit tests for mazemask.

mod ascii_render_tests;
mod command_tests;
mod perf_tests;
mod settings_tests;
