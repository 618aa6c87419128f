//! Declaration model handed to the pipeline by a host.
//!
//! `E` is whatever the host uses for an expression fragment. The pipeline
//! never looks inside it.

/// One type declaration with the reset attribute attached.
#[derive(Clone, Debug, PartialEq)]
pub struct TypeDeclaration<E> {
    pub kind: DeclKind,
    pub members: Vec<Member<E>>,
}

impl<E> TypeDeclaration<E> {
    pub fn new(kind: DeclKind) -> Self {
        Self {
            kind,
            members: vec![],
        }
    }

    pub fn with_member(mut self, member: Member<E>) -> Self {
        self.members.push(member);
        self
    }

    pub fn with_variable(self, var: VariableDecl<E>) -> Self {
        self.with_member(Member::Variable(var))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeclKind {
    Class,
    Struct,
    /// Anything else. Holds the host's name for it, e.g. `enum`.
    Other(String),
}

impl DeclKind {
    pub fn accepts_reset(&self) -> bool {
        matches!(self, Self::Class | Self::Struct)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Member<E> {
    Variable(VariableDecl<E>),
    Function,
    NestedType,
    Other,
}

impl<E> From<VariableDecl<E>> for Member<E> {
    fn from(decl: VariableDecl<E>) -> Self {
        Self::Variable(decl)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutability {
    Mutable,
    Immutable,
}

/// A variable declaration. Several bindings can share one declaration, e.g.
/// `var a = 1, b = 2`.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDecl<E> {
    pub mutability: Mutability,
    pub bindings: Vec<VariableBinding<E>>,
}

impl<E> VariableDecl<E> {
    pub fn mutable(bindings: impl IntoIterator<Item = VariableBinding<E>>) -> Self {
        Self {
            mutability: Mutability::Mutable,
            bindings: bindings.into_iter().collect(),
        }
    }

    pub fn immutable(bindings: impl IntoIterator<Item = VariableBinding<E>>) -> Self {
        Self {
            mutability: Mutability::Immutable,
            bindings: bindings.into_iter().collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VariableBinding<E> {
    pub pattern: Pattern,
    pub ty: Option<TypeAnnotation>,
    pub initializer: Option<E>,
}

impl<E> VariableBinding<E> {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            pattern: Pattern::Identifier(name.into()),
            ty: None,
            initializer: None,
        }
    }

    pub fn with_type(mut self, ty: TypeAnnotation) -> Self {
        self.ty = Some(ty);
        self
    }

    pub fn with_initializer(mut self, initializer: E) -> Self {
        self.initializer = Some(initializer);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
    Identifier(String),
    /// Tuple or other non-identifier pattern. Never reset.
    Destructured,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeAnnotation {
    Plain,
    Optional,
    ImplicitlyUnwrappedOptional,
}

impl TypeAnnotation {
    pub fn permits_absence(&self) -> bool {
        matches!(self, Self::Optional | Self::ImplicitlyUnwrappedOptional)
    }
}
