//! Implementation of the `#[auto_resettable]` attribute. Use it through the
//! `auto-resettable` crate.

mod args;
mod codegen;
mod error;
mod expand;
mod lower;
mod utils;

use auto_resettable_core::Diagnostic;
use darling::{
    ast::NestedMeta,
    FromMeta,
};
use proc_macro::TokenStream;
use proc_macro2::Span;
use proc_macro_error::{
    emit_error,
    proc_macro_error,
};
use quote::ToTokens;
use syn::{
    parse_macro_input,
    Item,
};

use crate::{
    args::ResettableArgs,
    expand::expand_item,
    utils::strip_helper_attributes,
};

/// Adds `fn auto_reset(&mut self)` to a struct.
///
/// The method sets every field with `#[reset(default = <expr>)]` back to
/// `<expr>`, evaluated anew on each call, and every `Option` field without a
/// default to `None`. Fields marked `#[reset(skip)]` and non-`Option` fields
/// without a default are left alone.
#[proc_macro_error]
#[proc_macro_attribute]
pub fn auto_resettable(attrs: TokenStream, input: TokenStream) -> TokenStream {
    let attrs = match NestedMeta::parse_meta_list(attrs.into()) {
        Ok(v) => v,
        Err(e) => {
            return TokenStream::from(darling::Error::from(e).write_errors());
        }
    };
    let args = match ResettableArgs::from_list(&attrs) {
        Ok(v) => v,
        Err(e) => {
            return TokenStream::from(e.write_errors());
        }
    };

    let item = parse_macro_input!(input as Item);
    let mut original = item.clone();
    strip_helper_attributes(&mut original);

    match expand_item(&args, item, Span::call_site()) {
        Ok(output) => {
            if let Some(diagnostic) = &output.diagnostic {
                report(diagnostic);
            }
            output.tokens.into()
        }
        Err(e) => {
            let mut tokens = original.into_token_stream();
            tokens.extend(e.write_errors());
            tokens.into()
        }
    }
}

fn report(diagnostic: &Diagnostic<Span>) {
    match &diagnostic.fix_it {
        Some(fix_it) => {
            emit_error!(
                diagnostic.anchor,
                "{}", diagnostic.message;
                note = "{}", diagnostic.id;
                help = "{}", fix_it.message
            );
        }
        None => {
            emit_error!(
                diagnostic.anchor,
                "{}", diagnostic.message;
                note = "{}", diagnostic.id
            );
        }
    }
}
