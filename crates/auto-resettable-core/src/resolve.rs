use std::fmt::{
    self,
    Display,
};

use crate::decl::{
    Pattern,
    VariableBinding,
};

/// Text of the absent value in generated Rust.
pub const ABSENT_SENTINEL: &str = "None";

/// What a field gets reassigned to.
#[derive(Debug, PartialEq)]
pub enum ResetValue<'a, E> {
    /// The declared initializer, copied as-is. Re-evaluated on every reset.
    Initializer(&'a E),
    Absent,
}

impl<'a, E> Clone for ResetValue<'a, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, E> Copy for ResetValue<'a, E> {}

impl<'a, E: Display> Display for ResetValue<'a, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initializer(expr) => write!(f, "{expr}"),
            Self::Absent => write!(f, "{ABSENT_SENTINEL}"),
        }
    }
}

/// Strips whitespace some parsers leave after identifiers without a type
/// annotation.
pub fn normalize_name(name: &str) -> &str {
    name.trim_end()
}

/// Decides how `binding` is reset, or `None` if it must be reset by hand.
///
/// An initializer always wins, even over an optional type.
pub fn resolve<E>(binding: &VariableBinding<E>) -> Option<(&str, ResetValue<'_, E>)> {
    let name = match &binding.pattern {
        Pattern::Identifier(name) => normalize_name(name),
        Pattern::Destructured => {
            tracing::trace!("skipping destructured binding");
            return None;
        }
    };

    if let Some(initializer) = &binding.initializer {
        Some((name, ResetValue::Initializer(initializer)))
    }
    else if binding.ty.map_or(false, |ty| ty.permits_absence()) {
        Some((name, ResetValue::Absent))
    }
    else {
        tracing::trace!(name, "no default and not optional, skipping");
        None
    }
}
