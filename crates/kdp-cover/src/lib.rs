pub mod constants;
mod config;
pub mod layout;
mod request;
pub mod template;
mod types;

pub use config::*;
pub use layout::{SpineCalculator, TextFit, TextOrientation, calculate_interior, fit_text};
pub use request::*;
pub use template::{render_cover_template, write_cover_template};
pub use types::*;
