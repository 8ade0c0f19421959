//! Utility Modules
//!
//! Amount parsing and display formatting shared by the screens.

pub mod formatting;
pub mod validation;

pub use formatting::*;
pub use validation::*;
