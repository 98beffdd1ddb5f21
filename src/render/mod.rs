//! Text rendering for the command-line front end.
//!
//! - `ascii` - grid to `+---+` text
//! - `text_view` - [`View`](crate::view::View) implementation over any `Write`

pub mod ascii;
mod text_view;

pub use text_view::TextView;
