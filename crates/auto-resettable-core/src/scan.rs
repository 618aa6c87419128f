use crate::decl::{
    Member,
    Mutability,
    TypeDeclaration,
    VariableBinding,
};

/// Collects the mutable bindings of `decl` in declaration order.
///
/// Joint declarations are flattened left to right. Nested types are not
/// entered; they get their own expansion.
pub fn scan<E>(decl: &TypeDeclaration<E>) -> impl Iterator<Item = &VariableBinding<E>> {
    decl.members
        .iter()
        .filter_map(|member| {
            match member {
                Member::Variable(var) if var.mutability == Mutability::Mutable => Some(var),
                _ => None,
            }
        })
        .flat_map(|var| var.bindings.iter())
}
