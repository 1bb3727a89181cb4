//! Procedural macros for `reflekt_core`.
//!
//! This crate provides `#[derive(Reflect)]`, which generates the property
//! registration list for a struct from its annotated fields.

mod crate_path;
mod reflect;

use proc_macro::TokenStream;

/// Derive macro for the `Reflect` trait.
///
/// Generates an implementation of `reflekt_core::reflect::Reflect` whose
/// `register` adds one property per field marked `#[property]`, in
/// declaration order. Unmarked fields are not registered.
///
/// # Attributes
///
/// - `rename` (optional): The property name. Defaults to the field name.
/// - `meta` (optional): Free-form metadata string. Defaults to `""`.
/// - `opaque` (optional): Register a field whose type is not `i32`, `f32`
///   or `String`. The property is listed without a value.
///
/// # Example
///
/// ```ignore
/// use reflekt_core::reflect::Reflect;
///
/// #[derive(Reflect)]
/// struct Player {
///     #[property(rename = "Health", meta = "VisibleAnywhere")]
///     health: i32,
///     #[property(rename = "Inventory", opaque)]
///     inventory: Vec<String>,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(property))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    reflect::derive_reflect(input)
}
