//! Locates `reflekt_core` from the consuming crate.
//!
//! Generated code names `reflekt_core` by absolute path. The path is taken
//! from the consumer's `Cargo.toml`, in this order:
//! 1. `reflekt_core` itself, or a direct (possibly renamed) dependency on it.
//! 2. The `reflekt` umbrella, as `::reflekt::reflekt_core`.
//! 3. Plain `::reflekt_core`, so a missing dependency is reported against
//!    that name.

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

/// Returns the absolute token path of `reflekt_core` for generated code.
///
/// `reflekt_core` declares `extern crate self as reflekt_core`, so
/// `::reflekt_core` also resolves inside the crate itself.
pub(crate) fn reflekt_core_path() -> TokenStream {
    match crate_name("reflekt_core") {
        Ok(FoundCrate::Itself) => quote!(::reflekt_core),
        Ok(FoundCrate::Name(name)) => {
            let ident = format_ident!("{}", name);
            quote!(::#ident)
        }
        Err(_) => match crate_name("reflekt") {
            Ok(FoundCrate::Name(name)) => {
                let umbrella = format_ident!("{}", name);
                quote!(::#umbrella::reflekt_core)
            }
            _ => quote!(::reflekt_core),
        },
    }
}
