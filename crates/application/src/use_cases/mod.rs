//! Application use cases (business logic orchestration).

pub mod interpolate;
mod load_and_interpolate;

pub use interpolate::{interpolate_check, interpolate_connect, interpolate_services};
pub use load_and_interpolate::*;
