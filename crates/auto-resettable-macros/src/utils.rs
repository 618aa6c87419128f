use proc_macro2::TokenStream;
use quote::{
    quote,
    ToTokens,
};
use syn::{
    Fields,
    Item,
};

pub const HELPER_ATTRIBUTE: &str = "reset";

#[derive(Default)]
pub struct TokenBuffer {
    buf: TokenStream,
}

impl TokenBuffer {
    pub fn push(&mut self, tokens: impl ToTokens) {
        tokens.to_tokens(&mut self.buf);
    }
}

impl ToTokens for TokenBuffer {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let buf = &self.buf;
        tokens.extend(quote! { #buf });
    }
}

/// Removes `#[reset(...)]` from every field of `item`, including the fields
/// of enum variants. The compiler doesn't know the attribute, so it must not
/// survive the expansion.
pub fn strip_helper_attributes(item: &mut Item) {
    match item {
        Item::Struct(item) => strip_fields(&mut item.fields),
        Item::Enum(item) => {
            for variant in item.variants.iter_mut() {
                strip_fields(&mut variant.fields);
            }
        }
        Item::Union(item) => {
            for field in item.fields.named.iter_mut() {
                field.attrs.retain(|attr| !is_helper(attr));
            }
        }
        _ => {}
    }
}

fn strip_fields(fields: &mut Fields) {
    for field in fields.iter_mut() {
        field.attrs.retain(|attr| !is_helper(attr));
    }
}

fn is_helper(attr: &syn::Attribute) -> bool {
    attr.path().is_ident(HELPER_ATTRIBUTE)
}
