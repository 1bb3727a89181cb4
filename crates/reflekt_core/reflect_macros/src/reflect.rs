//! Derive macro for the `Reflect` trait.

use crate::crate_path::reflekt_core_path;
use darling::ast::{Data, Fields};
use darling::util::Ignored;
use darling::{FromDeriveInput, FromMeta};
use proc_macro::TokenStream;
use quote::{quote, quote_spanned};
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{DeriveInput, Meta, parse_macro_input};

/// Parsed input for the macro.
#[derive(FromDeriveInput)]
#[darling(supports(struct_named))]
struct ReflectArgs {
    ident: syn::Ident,
    generics: syn::Generics,
    data: Data<Ignored, syn::Field>,
}

/// Arguments of a field's `#[property(...)]` attribute.
#[derive(Default, FromMeta)]
#[darling(default)]
struct PropertyArgs {
    /// Display name. Defaults to the field name.
    rename: Option<String>,

    /// Free-form metadata string.
    meta: String,

    /// Register without rendering the value.
    opaque: bool,
}

impl PropertyArgs {
    /// Parses the field's `#[property]` attribute, if it has one.
    ///
    /// A bare `#[property]` takes every default. Only one attribute is
    /// allowed per field.
    fn from_field(field: &syn::Field) -> darling::Result<Option<Self>> {
        let mut attrs = field
            .attrs
            .iter()
            .filter(|attr| attr.path().is_ident("property"));

        let Some(attr) = attrs.next() else {
            return Ok(None);
        };

        let mut errors = darling::Error::accumulator();
        for duplicate in attrs {
            errors.push(
                darling::Error::custom("duplicate `#[property]` attribute")
                    .with_span(duplicate.path()),
            );
        }

        let parsed = match &attr.meta {
            Meta::Path(_) => Some(Self::default()),
            meta => errors.handle(Self::from_meta(meta).map_err(|err| err.with_span(attr))),
        };
        errors.finish_with(parsed)
    }
}

/// Implementation of the `#[derive(Reflect)]` macro.
///
/// For a struct like:
///
/// ```ignore
/// #[derive(Reflect)]
/// struct Player {
///     #[property(rename = "Health", meta = "VisibleAnywhere")]
///     health: i32,
/// }
/// ```
///
/// generates:
///
/// ```ignore
/// impl reflekt_core::reflect::Reflect for Player {
///     fn register(registry: &mut reflekt_core::registry::PropertyRegistry<Self>) {
///         registry.add::<i32>("Health", "VisibleAnywhere", |this: &Self| &this.health);
///     }
/// }
/// ```
pub(crate) fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let args = match ReflectArgs::from_derive_input(&input) {
        Ok(args) => args,
        Err(err) => return err.write_errors().into(),
    };

    let name = &args.ident;
    let (impl_generics, ty_generics, where_clause) = args.generics.split_for_impl();

    let fields = match args.data {
        Data::Struct(Fields { fields, .. }) => fields,
        Data::Enum(_) => unreachable!("darling rejects enums via `supports`"),
    };

    let core_crate = reflekt_core_path();

    let mut errors = darling::Error::accumulator();
    let mut registrations = Vec::new();

    for field in &fields {
        let Some(property) = errors.handle(PropertyArgs::from_field(field)).flatten() else {
            continue;
        };
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };

        let property_name = property
            .rename
            .unwrap_or_else(|| ident.unraw().to_string());
        let meta = &property.meta;
        let ty = &field.ty;
        // Spanned on the field type so an unsupported type is reported there.
        let method = if property.opaque {
            quote_spanned!(ty.span()=> add_opaque::<#ty>)
        } else {
            quote_spanned!(ty.span()=> add::<#ty>)
        };

        registrations.push(quote! {
            registry.#method(#property_name, #meta, |this: &Self| &this.#ident);
        });
    }

    if let Err(err) = errors.finish() {
        return err.write_errors().into();
    }

    let expanded = quote! {
        impl #impl_generics #core_crate::reflect::Reflect for #name #ty_generics #where_clause {
            fn register(registry: &mut #core_crate::registry::PropertyRegistry<Self>) {
                #(#registrations)*
            }
        }
    };

    expanded.into()
}
