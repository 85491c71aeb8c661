//! Markdown conversion capability.
//!
//! The converter is intentionally kept pure: it accepts markdown input,
//! produces deterministic markup output, and surfaces structured errors.
//! Placing the result in the page happens in the caller.

mod runtime;
mod service;
mod types;

pub use runtime::{InFlightError, InFlightRenders, RenderGuard};
pub use service::{ComrakConverter, converter};
pub use types::{ConversionError, Converter, RenderError};
