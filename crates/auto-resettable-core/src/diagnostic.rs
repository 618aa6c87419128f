use std::fmt::{
    self,
    Display,
};

use serde::{
    Serialize,
    Serializer,
};

use crate::decl::DeclKind;

pub const DIAGNOSTIC_DOMAIN: &str = "auto_resettable";

/// Every way an attachment can be rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ResettableDiagnostic {
    #[error("#[auto_resettable] can only be attached to classes and structs")]
    NotAClassNorAStruct,
}

impl ResettableDiagnostic {
    pub fn id(&self) -> DiagnosticId {
        let id = match self {
            Self::NotAClassNorAStruct => "not_a_class_nor_a_struct",
        };
        DiagnosticId {
            domain: DIAGNOSTIC_DOMAIN,
            id,
        }
    }

    pub fn severity(&self) -> Severity {
        Severity::Error
    }

    pub fn fix_it(&self) -> FixIt {
        match self {
            Self::NotAClassNorAStruct => {
                FixIt {
                    message: "Remove `#[auto_resettable]`".to_owned(),
                    replacement: String::new(),
                }
            }
        }
    }

    pub fn at<A>(self, anchor: A) -> Diagnostic<A> {
        Diagnostic {
            id: self.id(),
            message: self.to_string(),
            severity: self.severity(),
            anchor,
            fix_it: Some(self.fix_it()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagnosticId {
    pub domain: &'static str,
    pub id: &'static str,
}

impl Display for DiagnosticId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.domain, self.id)
    }
}

impl Serialize for DiagnosticId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
}

/// A suggested edit: replace the anchor with `replacement`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FixIt {
    pub message: String,
    pub replacement: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Diagnostic<A> {
    pub id: DiagnosticId,
    pub message: String,
    pub severity: Severity,
    /// The attachment node.
    pub anchor: A,
    pub fix_it: Option<FixIt>,
}

/// Checks that the attribute sits on a declaration that can be reset.
pub fn validate_target(kind: &DeclKind) -> Result<(), ResettableDiagnostic> {
    if kind.accepts_reset() {
        Ok(())
    }
    else {
        Err(ResettableDiagnostic::NotAClassNorAStruct)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{
        validate_target,
        ResettableDiagnostic,
        Severity,
    };
    use crate::decl::DeclKind;

    #[test]
    fn it_accepts_classes_and_structs() {
        assert_eq!(validate_target(&DeclKind::Class), Ok(()));
        assert_eq!(validate_target(&DeclKind::Struct), Ok(()));
    }

    #[test]
    fn it_rejects_everything_else() {
        for kind in ["enum", "union", "trait", "fn"] {
            assert_eq!(
                validate_target(&DeclKind::Other(kind.to_owned())),
                Err(ResettableDiagnostic::NotAClassNorAStruct)
            );
        }
    }

    #[test]
    fn it_builds_an_error_with_a_removal_fix_it() {
        let diagnostic = ResettableDiagnostic::NotAClassNorAStruct.at(7u32);
        assert_eq!(
            diagnostic.id.to_string(),
            "auto_resettable.not_a_class_nor_a_struct"
        );
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(
            diagnostic.message,
            "#[auto_resettable] can only be attached to classes and structs"
        );
        assert_eq!(diagnostic.anchor, 7);

        let fix_it = diagnostic.fix_it.unwrap();
        assert_eq!(fix_it.message, "Remove `#[auto_resettable]`");
        assert_eq!(fix_it.replacement, "");
    }

    #[test]
    fn it_serializes_to_the_diagnostic_record() {
        let diagnostic = ResettableDiagnostic::NotAClassNorAStruct.at("attr");
        let json = serde_json::to_value(&diagnostic).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "auto_resettable.not_a_class_nor_a_struct",
                "message": "#[auto_resettable] can only be attached to classes and structs",
                "severity": "error",
                "anchor": "attr",
                "fix_it": {
                    "message": "Remove `#[auto_resettable]`",
                    "replacement": "",
                },
            })
        );
    }
}
