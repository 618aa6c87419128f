use auto_resettable_core::{
    expand,
    Diagnostic,
    Expansion,
    TypeDeclaration,
};
use proc_macro2::{
    Span,
    TokenStream,
};
use quote::ToTokens;
use syn::{
    Expr,
    Item,
    Visibility,
};

use crate::{
    args::ResettableArgs,
    codegen::impl_reset_method,
    error::Error,
    lower::{
        decl_kind,
        lower_struct,
    },
    utils::strip_helper_attributes,
};

pub struct Output {
    pub tokens: TokenStream,
    pub diagnostic: Option<Diagnostic<Span>>,
}

/// Expands `#[auto_resettable]` on `item`.
///
/// `anchor` is the span of the attribute. If the item can't be reset it is
/// returned untouched, together with a diagnostic anchored there.
pub fn expand_item(args: &ResettableArgs, item: Item, anchor: Span) -> Result<Output, Error> {
    let item = match item {
        Item::Struct(item) => item,
        mut item => {
            let decl = TypeDeclaration::<Expr>::new(decl_kind(&item));
            let diagnostic = expand(&decl, anchor).into_result().err();
            strip_helper_attributes(&mut item);
            return Ok(Output {
                tokens: item.into_token_stream(),
                diagnostic,
            });
        }
    };

    let lowered = lower_struct(&item)?;
    let vis = match &args.vis {
        Some(vis) => syn::parse_str::<Visibility>(vis)?,
        None => item.vis.clone(),
    };

    match expand(&lowered.decl, anchor) {
        Expansion::Generated(method) => {
            let reset_impl = impl_reset_method(&item, &method, &lowered.fields, &vis)?;
            let mut item = Item::Struct(item);
            strip_helper_attributes(&mut item);

            let mut tokens = item.into_token_stream();
            tokens.extend(reset_impl);
            Ok(Output {
                tokens,
                diagnostic: None,
            })
        }
        Expansion::Aborted(diagnostic) => {
            Ok(Output {
                tokens: item.into_token_stream(),
                diagnostic: Some(diagnostic),
            })
        }
    }
}
