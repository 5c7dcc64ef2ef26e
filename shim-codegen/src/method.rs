//! Logical methods: one method name with all of its overloads.

use typeshim_declarations::MethodDeclaration;

/// A parameter of the merged parameter list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedParameter {
    pub name: String,
    /// Declared as a rest parameter by the overload it was first seen in.
    pub rest: bool,
}

/// The unit of generation.
///
/// Invariant: `name` is never empty and `parameters` holds each named
/// parameter of every overload exactly once, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalMethod {
    name: String,
    overloads: Vec<MethodDeclaration>,
    parameters: Vec<MergedParameter>,
}

impl LogicalMethod {
    /// Create a method from its overloads, in discovery order.
    ///
    /// Returns `None` for an empty name.
    pub fn new(name: impl Into<String>, overloads: Vec<MethodDeclaration>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            return None;
        }
        let mut method = Self {
            name,
            overloads,
            parameters: Vec::new(),
        };
        method.merge_parameters();
        Some(method)
    }

    /// Rebuild the merged parameter list from the overloads.
    pub fn merge_parameters(&mut self) {
        let mut merged: Vec<MergedParameter> = Vec::new();
        for parameter in self.overloads.iter().flat_map(|o| &o.parameters) {
            let Some(name) = parameter.name.as_deref() else {
                continue;
            };
            if merged.iter().any(|p| p.name == name) {
                continue;
            }
            merged.push(MergedParameter {
                name: name.to_string(),
                rest: parameter.rest,
            });
        }
        self.parameters = merged;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn overloads(&self) -> &[MethodDeclaration] {
        &self.overloads
    }

    pub fn parameters(&self) -> &[MergedParameter] {
        &self.parameters
    }

    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().map(|p| p.name.as_str())
    }

    /// Comma-joined parameter list; a trailing rest parameter keeps its `...`.
    pub fn parameter_list(&self) -> String {
        let last = self.parameters.len().saturating_sub(1);
        self.parameters
            .iter()
            .enumerate()
            .map(|(i, p)| {
                if p.rest && i == last {
                    format!("...{}", p.name)
                } else {
                    p.name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// One-line description used in the documentation block.
    pub fn description(&self) -> String {
        format!("Creates a schema for a `{}` type.", self.name)
    }

    /// Overload signatures in discovery order.
    pub fn signatures(&self) -> impl Iterator<Item = String> + '_ {
        self.overloads.iter().filter_map(MethodDeclaration::signature)
    }
}

#[cfg(test)]
mod tests {
    use typeshim_declarations::Parameter;

    use super::*;

    fn overload(class: &str, params: &[&str]) -> MethodDeclaration {
        MethodDeclaration::new(
            "Object",
            class,
            params.iter().map(|p| Parameter::named(*p)).collect(),
        )
    }

    #[test]
    fn test_merge_first_seen_order() {
        let method = LogicalMethod::new(
            "Object",
            vec![
                overload("JsonTypeBuilder", &["props"]),
                overload("JavaScriptTypeBuilder", &["props", "options"]),
            ],
        )
        .unwrap();

        assert_eq!(method.parameter_names().collect::<Vec<_>>(), vec!["props", "options"]);
        assert_eq!(method.parameter_list(), "props, options");
        assert_eq!(method.overloads().len(), 2);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let mut method = LogicalMethod::new(
            "Object",
            vec![overload("A", &["b", "a"]), overload("B", &["a", "c", "b"])],
        )
        .unwrap();
        let first = method.parameters().to_vec();

        method.merge_parameters();

        assert_eq!(method.parameters(), first.as_slice());
        assert_eq!(method.parameter_list(), "b, a, c");
    }

    #[test]
    fn test_unnamed_parameters_skipped() {
        let this = Parameter {
            name: None,
            optional: false,
            rest: false,
        };
        let declaration = MethodDeclaration::new("Ref", "A", vec![this, Parameter::named("schema")]);

        let method = LogicalMethod::new("Ref", vec![declaration]).unwrap();

        assert_eq!(method.parameter_list(), "schema");
    }

    #[test]
    fn test_rest_parameter_only_when_last() {
        let rest = |name: &str| Parameter {
            name: Some(name.into()),
            optional: false,
            rest: true,
        };
        let trailing = LogicalMethod::new(
            "Union",
            vec![MethodDeclaration::new("Union", "A", vec![rest("types")])],
        )
        .unwrap();
        let shadowed = LogicalMethod::new(
            "Union",
            vec![
                MethodDeclaration::new("Union", "A", vec![rest("types")]),
                MethodDeclaration::new("Union", "B", vec![Parameter::named("options")]),
            ],
        )
        .unwrap();

        assert_eq!(trailing.parameter_list(), "...types");
        assert_eq!(shadowed.parameter_list(), "types, options");
    }

    #[test]
    fn test_description() {
        let method = LogicalMethod::new("Number", Vec::new()).unwrap();
        assert_eq!(method.description(), "Creates a schema for a `Number` type.");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(LogicalMethod::new("", Vec::new()).is_none());
    }
}
