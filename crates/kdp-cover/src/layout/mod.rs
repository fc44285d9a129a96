//! Geometry calculation modules
//!
//! This module handles all the numeric layout work:
//! - Spine width and full-cover dimensions
//! - Safe zones and the barcode reservation
//! - Interior page size and margins
//! - Fitting a line of text into a zone

mod cover;
mod interior;
mod text;

pub use cover::*;
pub use interior::*;
pub use text::*;
