//!
//! Utilities for the utility macros.
//!

use std::ops::Deref;

use syn::{parse::Parse, punctuated::Punctuated, Token};

const MANUAL_ROOT: &str = "https://www.gnu.org/software/bison/manual/html_node";

///
/// A lit str, but an error is raised
/// if it is empty.
///
pub struct NonEmptyStr(syn::LitStr);

impl Parse for NonEmptyStr {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let lit: syn::LitStr = input.parse()?;

        if lit.value().is_empty() {
            return Err(syn::Error::new(lit.span(), "This should not be empty."));
        }

        Ok(Self(lit))
    }
}

impl Deref for NonEmptyStr {
    type Target = syn::LitStr;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

///
/// Parameters of `#[BisonRef(node, title?)]`.
///
pub struct BisonRef {
    node: NonEmptyStr,
    title: Option<NonEmptyStr>,
}

impl Parse for BisonRef {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let params = Punctuated::<NonEmptyStr, Token![,]>::parse_terminated(input)?;
        let mut params = params.into_iter();

        let Some(node) = params.next() else {
            return Err(input.error("Expected the name of a manual node."));
        };
        let title = params.next();

        if params.next().is_some() {
            return Err(input.error("Expected at most two parameters: node, title."));
        }

        Ok(Self { node, title })
    }
}

///
/// Things which can be expressed as doc attributes.
///
pub trait ToRustdoc {
    fn to_rustdoc(&self) -> Vec<syn::Attribute>;
}

impl ToRustdoc for BisonRef {
    fn to_rustdoc(&self) -> Vec<syn::Attribute> {
        let node = self.node.value();
        let title = self
            .title
            .as_ref()
            .map(|t| t.value())
            .unwrap_or_else(|| node.replace('-', " "));

        let lines = [
            "".to_string(),
            "### Bison Reference".to_string(),
            format!("See [{title}]({MANUAL_ROOT}/{node}.html) in the Bison manual."),
            "".to_string(),
        ];

        lines
            .into_iter()
            .map(|line| syn::parse_quote!(#[doc = #line]))
            .collect()
    }
}

///
/// Returns the attributes of the items we can document.
///
pub fn get_item_attrs(item: &mut syn::Item) -> Option<&mut Vec<syn::Attribute>> {
    match item {
        syn::Item::Const(syn::ItemConst { attrs, .. })
        | syn::Item::Enum(syn::ItemEnum { attrs, .. })
        | syn::Item::Fn(syn::ItemFn { attrs, .. })
        | syn::Item::Mod(syn::ItemMod { attrs, .. })
        | syn::Item::Struct(syn::ItemStruct { attrs, .. })
        | syn::Item::Trait(syn::ItemTrait { attrs, .. })
        | syn::Item::Type(syn::ItemType { attrs, .. }) => Some(attrs),
        _ => None,
    }
}

///
/// Collects `(variant, keyword)` pairs from an enum deriving `Keywords`.
///
pub fn keyword_variants(input: &syn::DeriveInput) -> syn::Result<Vec<(syn::Ident, syn::LitStr)>> {
    let syn::Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Keywords can only be derived for enums.",
        ));
    };

    data.variants
        .iter()
        .map(|variant| {
            if !matches!(variant.fields, syn::Fields::Unit) {
                return Err(syn::Error::new_spanned(
                    variant,
                    "Keyword variants cannot carry fields.",
                ));
            }

            let attr = variant
                .attrs
                .iter()
                .find(|attr| attr.path().is_ident("keyword"))
                .ok_or_else(|| {
                    syn::Error::new_spanned(variant, "Missing #[keyword(\"%...\")] attribute.")
                })?;

            let keyword: NonEmptyStr = attr.parse_args()?;
            if !keyword.value().starts_with('%') {
                return Err(syn::Error::new(
                    keyword.span(),
                    "Keywords start with `%`.",
                ));
            }

            Ok((variant.ident.clone(), keyword.0))
        })
        .collect()
}
