//! Synthesis of a reset method for a type declaration.
//!
//! Given the members of one declaration, [`expand`] produces a method named
//! [`RESET_METHOD_NAME`] that reassigns every mutable field to its declared
//! initializer, or to the absent value if the field is optional and has no
//! initializer. Fields with neither are left for the caller to reset.
//!
//! The crate knows nothing about any concrete syntax tree. A host lowers its
//! declaration into a [`TypeDeclaration`], where `E` is the host's expression
//! fragment, and renders the resulting [`ResetMethod`] back into its own
//! syntax.
//!
//! ```
//! use auto_resettable_core::{
//!     expand,
//!     DeclKind,
//!     TypeAnnotation,
//!     TypeDeclaration,
//!     VariableBinding,
//!     VariableDecl,
//! };
//!
//! let decl = TypeDeclaration::new(DeclKind::Struct)
//!     .with_variable(VariableDecl::mutable([VariableBinding::named("a").with_initializer("1")]))
//!     .with_variable(VariableDecl::mutable([
//!         VariableBinding::named("b").with_type(TypeAnnotation::Optional)
//!     ]));
//!
//! let method = expand(&decl, ()).into_result().unwrap();
//! assert_eq!(
//!     method.to_string(),
//!     "fn auto_reset(&mut self) {\n    self.a = 1;\n    self.b = None;\n}"
//! );
//! ```

pub mod decl;
pub mod diagnostic;
pub mod emit;
pub mod resolve;
pub mod scan;

pub use crate::{
    decl::{
        DeclKind,
        Member,
        Mutability,
        Pattern,
        TypeAnnotation,
        TypeDeclaration,
        VariableBinding,
        VariableDecl,
    },
    diagnostic::{
        validate_target,
        Diagnostic,
        DiagnosticId,
        FixIt,
        ResettableDiagnostic,
        Severity,
    },
    emit::{
        emit,
        plan,
        Assignment,
        ResetMethod,
        ResetPlan,
        RESET_METHOD_NAME,
    },
    resolve::{
        normalize_name,
        resolve,
        ResetValue,
        ABSENT_SENTINEL,
    },
    scan::scan,
};

/// Outcome of one expansion: exactly one member or exactly one diagnostic.
#[derive(Debug, PartialEq)]
pub enum Expansion<'a, E, A> {
    Generated(ResetMethod<'a, E>),
    Aborted(Diagnostic<A>),
}

impl<'a, E, A> Expansion<'a, E, A> {
    /// Members to splice into the declaration. Empty if aborted.
    pub fn members(&self) -> &[ResetMethod<'a, E>] {
        match self {
            Self::Generated(method) => std::slice::from_ref(method),
            Self::Aborted(_) => &[],
        }
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic<A>> {
        match self {
            Self::Generated(_) => None,
            Self::Aborted(diagnostic) => Some(diagnostic),
        }
    }

    pub fn into_result(self) -> Result<ResetMethod<'a, E>, Diagnostic<A>> {
        match self {
            Self::Generated(method) => Ok(method),
            Self::Aborted(diagnostic) => Err(diagnostic),
        }
    }
}

/// Runs the whole pipeline on one declaration.
///
/// `anchor` identifies the attachment node and is only used if the
/// declaration kind is rejected.
pub fn expand<E, A>(decl: &TypeDeclaration<E>, anchor: A) -> Expansion<'_, E, A> {
    if let Err(diagnostic) = validate_target(&decl.kind) {
        tracing::debug!(kind = ?decl.kind, "aborting reset expansion");
        return Expansion::Aborted(diagnostic.at(anchor));
    }

    let plan = plan(decl);
    tracing::debug!(
        kind = ?decl.kind,
        members = decl.members.len(),
        assignments = plan.len(),
        "generating reset method"
    );

    Expansion::Generated(emit(plan))
}
