use std::collections::HashMap;

use auto_resettable_core::{
    ResetMethod,
    ResetValue,
};
use proc_macro2::{
    Ident,
    Span,
    TokenStream,
};
use quote::{
    quote,
    quote_spanned,
};
use syn::{
    spanned::Spanned,
    Expr,
    ItemStruct,
    Visibility,
};

use crate::{
    error::Error,
    lower::LoweredField,
    utils::TokenBuffer,
};

/// Generates `impl Ty { fn auto_reset(&mut self) { .. } }` for `item`.
pub fn impl_reset_method(
    item: &ItemStruct,
    method: &ResetMethod<'_, Expr>,
    fields: &HashMap<String, LoweredField>,
    vis: &Visibility,
) -> Result<TokenStream, Error> {
    let ident = &item.ident;
    let (impl_generics, ty_generics, where_clause) = item.generics.split_for_impl();
    let method_ident = Ident::new(method.name, Span::call_site());

    let mut body = TokenBuffer::default();
    for assignment in &method.body {
        let LoweredField { member, cfgs } = fields.get(assignment.name).ok_or_else(|| {
            syn::Error::new(
                ident.span(),
                format!("no field `{}` to reset", assignment.name),
            )
        })?;
        let span = member.span();
        let value = match assignment.value {
            ResetValue::Initializer(expr) => quote! { #expr },
            ResetValue::Absent => quote_spanned! {span=> ::core::option::Option::None },
        };
        body.push(quote_spanned! {span=>
            #(#cfgs)*
            self.#member = #value;
        });
    }

    Ok(quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #[allow(dead_code)]
            #vis fn #method_ident(&mut self) {
                #body
            }
        }
    })
}
