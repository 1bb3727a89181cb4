//! Runtime property reflection for plain Rust structs.
//!

pub use reflekt_core;
pub use reflekt_core::*;

/// Re-export all common types for easy access.
pub mod prelude {
    pub use reflekt_core::prelude::*;
}
