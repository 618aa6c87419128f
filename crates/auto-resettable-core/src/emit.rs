use std::fmt::{
    self,
    Display,
};

use crate::{
    decl::TypeDeclaration,
    resolve::{
        resolve,
        ResetValue,
    },
    scan::scan,
};

/// Name of the synthesized method. The same for every declaration, so call
/// sites can rely on it.
pub const RESET_METHOD_NAME: &str = "auto_reset";

/// Ordered `(name, value)` pairs that survived resolution.
pub type ResetPlan<'a, E> = Vec<(&'a str, ResetValue<'a, E>)>;

/// Scans and resolves `decl` into a reset plan.
pub fn plan<E>(decl: &TypeDeclaration<E>) -> ResetPlan<'_, E> {
    scan(decl).filter_map(resolve).collect()
}

/// `name = value`
#[derive(Debug, PartialEq)]
pub struct Assignment<'a, E> {
    pub name: &'a str,
    pub value: ResetValue<'a, E>,
}

impl<'a, E: Display> Display for Assignment<'a, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

/// The synthesized member.
#[derive(Debug, PartialEq)]
pub struct ResetMethod<'a, E> {
    pub name: &'static str,
    pub body: Vec<Assignment<'a, E>>,
}

impl<'a, E> ResetMethod<'a, E> {
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl<'a, E: Display> Display for ResetMethod<'a, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "fn {}(&mut self) {{", self.name)?;
        for assignment in &self.body {
            writeln!(f, "    self.{assignment};")?;
        }
        write!(f, "}}")
    }
}

/// Turns a plan into the reset method. An empty plan still produces a method.
pub fn emit<'a, E>(plan: ResetPlan<'a, E>) -> ResetMethod<'a, E> {
    ResetMethod {
        name: RESET_METHOD_NAME,
        body: plan
            .into_iter()
            .map(|(name, value)| Assignment { name, value })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{
        emit,
        plan,
        RESET_METHOD_NAME,
    };
    use crate::{
        decl::{
            DeclKind,
            TypeAnnotation,
            TypeDeclaration,
            VariableBinding,
            VariableDecl,
        },
        resolve::ResetValue,
    };

    fn lines(decl: &TypeDeclaration<&'static str>) -> Vec<String> {
        emit(plan(decl))
            .body
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn it_emits_an_empty_method_for_an_empty_plan() {
        let method = emit::<&str>(vec![]);
        assert_eq!(method.name, RESET_METHOD_NAME);
        assert!(method.is_empty());
        assert_eq!(method.to_string(), "fn auto_reset(&mut self) {\n}");
    }

    #[test]
    fn it_emits_assignments_in_plan_order() {
        let method = emit(vec![
            ("z", ResetValue::Initializer(&"1")),
            ("a", ResetValue::Absent),
        ]);
        assert_eq!(
            method.to_string(),
            "fn auto_reset(&mut self) {\n    self.z = 1;\n    self.a = None;\n}"
        );
    }

    #[test]
    fn it_resets_the_hello_scenario() {
        let decl = TypeDeclaration::new(DeclKind::Class)
            .with_variable(VariableDecl::mutable([
                VariableBinding::named("a").with_initializer("\"Hello\"")
            ]))
            .with_variable(VariableDecl::immutable([
                VariableBinding::named("b").with_initializer("6")
            ]))
            .with_variable(VariableDecl::mutable([
                VariableBinding::named("c").with_initializer("Int()")
            ]));

        assert_eq!(lines(&decl), ["a = \"Hello\"", "c = Int()"]);
    }

    #[test]
    fn it_resets_a_mixed_declaration() {
        let decl = TypeDeclaration::new(DeclKind::Struct)
            .with_variable(VariableDecl::mutable([VariableBinding::named("id")
                .with_type(TypeAnnotation::Plain)
                .with_initializer(".init()")]))
            .with_variable(VariableDecl::mutable([VariableBinding::named(
                "non_nil_optional",
            )
            .with_type(TypeAnnotation::Optional)
            .with_initializer("\"o\"")]))
            .with_variable(VariableDecl::mutable([VariableBinding::named(
                "optional_closure",
            )
            .with_type(TypeAnnotation::Optional)]))
            .with_variable(VariableDecl::mutable([VariableBinding::named(
                "implicitly_unwrapped_bool",
            )
            .with_type(TypeAnnotation::ImplicitlyUnwrappedOptional)]))
            .with_variable(VariableDecl::mutable([
                VariableBinding::named("injected_int").with_type(TypeAnnotation::Plain)
            ]))
            .with_variable(VariableDecl::immutable([VariableBinding::named("o")
                .with_type(TypeAnnotation::Optional)
                .with_initializer("3")]))
            .with_variable(VariableDecl::mutable([VariableBinding::named(
                "weirdly_positioned_bool",
            )
            .with_type(TypeAnnotation::Plain)
            .with_initializer("false")]));

        assert_eq!(
            lines(&decl),
            [
                "id = .init()",
                "non_nil_optional = \"o\"",
                "optional_closure = None",
                "implicitly_unwrapped_bool = None",
                "weirdly_positioned_bool = false",
            ]
        );
    }
}
