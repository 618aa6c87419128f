use darling::{
    FromField,
    FromMeta,
};
use syn::{
    Expr,
    Ident,
    Meta,
    Type,
};

/// Arguments to `#[auto_resettable(...)]`.
#[derive(Debug, Default, FromMeta)]
pub struct ResettableArgs {
    /// Visibility of the generated method, e.g. `vis = "pub(crate)"`.
    /// Defaults to the visibility of the struct.
    #[darling(default)]
    pub vis: Option<String>,
}

/// A field and its `#[reset(...)]` helper attribute.
#[derive(Debug, FromField)]
#[darling(attributes(reset))]
pub struct FieldArgs {
    pub ident: Option<Ident>,
    pub ty: Type,
    /// Treat the field as fixed at construction.
    #[darling(default)]
    pub skip: bool,
    #[darling(default, rename = "default", with = verbatim_expr)]
    pub initializer: Option<Expr>,
}

// darling's own `Expr` parsing unwraps string literals, which would turn
// `default = "x"` into the path `x`.
fn verbatim_expr(meta: &Meta) -> darling::Result<Option<Expr>> {
    match meta {
        Meta::NameValue(name_value) => Ok(Some(name_value.value.clone())),
        _ => Err(darling::Error::unsupported_format("list or word").with_span(meta)),
    }
}
