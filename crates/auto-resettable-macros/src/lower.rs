use std::collections::HashMap;

use auto_resettable_core::{
    normalize_name,
    DeclKind,
    Member,
    Pattern,
    TypeAnnotation,
    TypeDeclaration,
    VariableBinding,
    VariableDecl,
};
use darling::FromField;
use syn::{
    spanned::Spanned,
    Attribute,
    Expr,
    Fields,
    Index,
    Item,
    ItemStruct,
    PathArguments,
    Type,
};

use crate::args::FieldArgs;

/// A declaration in the core model, plus how to address each field on `self`.
pub struct Lowered {
    pub decl: TypeDeclaration<Expr>,
    /// Keyed by the normalized binding name.
    pub fields: HashMap<String, LoweredField>,
}

pub struct LoweredField {
    pub member: syn::Member,
    /// `#[cfg(..)]` on the field. The assignment must carry them too, since
    /// the field may be configured out.
    pub cfgs: Vec<Attribute>,
}

pub fn decl_kind(item: &Item) -> DeclKind {
    let other = match item {
        Item::Struct(_) => return DeclKind::Struct,
        Item::Enum(_) => "enum",
        Item::Union(_) => "union",
        Item::Trait(_) => "trait",
        Item::Fn(_) => "fn",
        Item::Impl(_) => "impl",
        Item::Mod(_) => "mod",
        Item::Type(_) => "type",
        _ => "item",
    };
    DeclKind::Other(other.to_owned())
}

pub fn lower_struct(item: &ItemStruct) -> darling::Result<Lowered> {
    let mut errors = darling::Error::accumulator();
    let mut decl = TypeDeclaration::new(DeclKind::Struct);
    let mut fields = HashMap::new();

    let iter = match &item.fields {
        Fields::Named(named) => Some(named.named.iter()),
        Fields::Unnamed(unnamed) => Some(unnamed.unnamed.iter()),
        Fields::Unit => None,
    };

    for (i, field) in iter.into_iter().flatten().enumerate() {
        let Some(args) = errors.handle(FieldArgs::from_field(field)) else {
            continue;
        };

        let member = match &args.ident {
            Some(ident) => syn::Member::Named(ident.clone()),
            None => {
                syn::Member::Unnamed(Index {
                    index: i as u32,
                    span: field.span(),
                })
            }
        };
        let name = match &member {
            syn::Member::Named(ident) => ident.to_string(),
            syn::Member::Unnamed(index) => index.index.to_string(),
        };

        let binding = VariableBinding {
            pattern: Pattern::Identifier(name.clone()),
            ty: Some(annotate(&args.ty)),
            initializer: args.initializer,
        };
        let var = if args.skip {
            VariableDecl::immutable([binding])
        }
        else {
            VariableDecl::mutable([binding])
        };

        let cfgs = field
            .attrs
            .iter()
            .filter(|attr| attr.path().is_ident("cfg"))
            .cloned()
            .collect();

        decl.members.push(Member::Variable(var));
        fields.insert(
            normalize_name(&name).to_owned(),
            LoweredField { member, cfgs },
        );
    }

    errors.finish()?;

    Ok(Lowered { decl, fields })
}

/// `Option<_>` permits absence. Anything else is plain.
pub fn annotate(ty: &Type) -> TypeAnnotation {
    match ty {
        Type::Group(group) => annotate(&group.elem),
        Type::Paren(paren) => annotate(&paren.elem),
        Type::Path(path) if path.qself.is_none() => {
            match path.path.segments.last() {
                Some(segment)
                    if segment.ident == "Option"
                        && matches!(segment.arguments, PathArguments::AngleBracketed(_)) =>
                {
                    TypeAnnotation::Optional
                }
                _ => TypeAnnotation::Plain,
            }
        }
        _ => TypeAnnotation::Plain,
    }
}
