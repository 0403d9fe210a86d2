//!
//! Macros for the main crate.
//!

mod utils;

use proc_macro::TokenStream as Tokens;
use quote::{quote, ToTokens};
use syn::parse_macro_input;
use utils::{get_item_attrs, keyword_variants, BisonRef, ToRustdoc};

///
/// ## BisonRef
///
/// Allows easy reference of the **GNU Bison** manual.
///
/// This macro will add an additional section at the top of the Rustdoc
/// for the item attached, linking to the relevant node of the manual.
///
/// ### Example
///
/// ```ignore
/// use crate::BisonRef;
///
/// // With custom title.
/// #[BisonRef("Token-Decl", "Token Type Names")]
/// struct TokenDecl;
///
/// // Without custom title.
/// #[BisonRef("Actions")]
/// struct UserCode;
/// ```
///
#[allow(non_snake_case)]
#[proc_macro_attribute]
pub fn BisonRef(params: Tokens, target: Tokens) -> Tokens {
    let mut target: syn::Item = parse_macro_input!(target);
    let params: BisonRef = parse_macro_input!(params);
    let attrs = params.to_rustdoc();

    let Some(original_attrs) = get_item_attrs(&mut target) else {
        return syn::Error::new_spanned(target, "Cannot add a manual reference to this item.")
            .into_compile_error()
            .into();
    };

    // Prepend our new documentation to the start of
    // the attribute macros.
    *original_attrs = attrs
        .into_iter()
        .chain(original_attrs.iter().cloned())
        .collect();

    target.into_token_stream().into()
}

///
/// ## Keywords
///
/// Builds the keyword catalog of a fieldless enum whose variants
/// are each tagged with `#[keyword("%...")]`.
///
/// Generates:
/// * `ALL`, every variant in declaration order,
/// * `keyword()`, the spelling of a variant,
/// * `from_keyword()`, the reverse lookup.
///
/// ### Example
///
/// ```ignore
/// #[derive(Keywords)]
/// enum Directive {
///     #[keyword("%token")]
///     Token,
///     #[keyword("%type")]
///     Type,
/// }
///
/// assert_eq!(Directive::from_keyword("%type"), Some(Directive::Type));
/// ```
///
#[proc_macro_derive(Keywords, attributes(keyword))]
pub fn derive_keywords(target: Tokens) -> Tokens {
    let target: syn::DeriveInput = parse_macro_input!(target);
    let name = &target.ident;

    let variants = match keyword_variants(&target) {
        Ok(variants) => variants,
        Err(err) => return err.into_compile_error().into(),
    };

    let idents = variants.iter().map(|(ident, _)| ident).collect::<Vec<_>>();
    let keywords = variants.iter().map(|(_, kw)| kw).collect::<Vec<_>>();

    quote! {
        impl #name {
            ///
            /// Every variant, in declaration order.
            ///
            pub const ALL: &'static [Self] = &[#(Self::#idents),*];

            ///
            /// The keyword as written in a grammar file, `%` included.
            ///
            pub fn keyword(&self) -> &'static str {
                match self {
                    #(Self::#idents => #keywords,)*
                }
            }

            ///
            /// Look up a variant by its exact spelling.
            ///
            pub fn from_keyword(word: &str) -> Option<Self> {
                match word {
                    #(#keywords => Some(Self::#idents),)*
                    _ => None,
                }
            }
        }
    }
    .into()
}
