//! Error type for registry operations.

/// Errors returned by [`PropertyRegistry`](crate::registry::PropertyRegistry).
///
/// Registration and registry access never fail; only output and name
/// lookups do.
#[derive(Debug, thiserror::Error)]
pub enum ReflectError {
    /// Writing rendered properties to the output failed.
    #[error("failed to write properties: {0}")]
    Io(#[from] std::io::Error),

    /// No descriptor with the requested name is registered.
    #[error("no property named `{name}` registered for {type_name}")]
    UnknownProperty {
        /// The reflecting type whose registry was searched.
        type_name: &'static str,
        /// The name that was looked up.
        name: String,
    },
}
