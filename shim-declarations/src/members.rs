//! Class member extraction.

use tree_sitter::Node;

use crate::Source;

/// Accessibility of a class member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    fn from_modifier(text: &str) -> Self {
        match text {
            "private" => Self::Private,
            "protected" => Self::Protected,
            _ => Self::Public,
        }
    }
}

/// One declared parameter of a method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Identifier of the parameter; `None` for `this` and destructuring patterns.
    pub name: Option<String>,
    /// Declared with `?`.
    pub optional: bool,
    /// Declared as `...name`.
    pub rest: bool,
}

impl Parameter {
    /// A required parameter with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            optional: false,
            rest: false,
        }
    }
}

/// A method member of a builder class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDeclaration {
    /// Method name; `None` for computed, string or private (`#x`) names.
    pub name: Option<String>,
    /// Name of the declaring class.
    pub class: String,
    pub visibility: Visibility,
    /// Type parameter list including angle brackets, e.g. `<T extends TSchema>`.
    pub type_parameters: Option<String>,
    /// Names of the declared type parameters, e.g. `T`.
    pub type_parameter_names: Vec<String>,
    pub parameters: Vec<Parameter>,
    /// Parameter list text including parentheses, on one line without comments.
    pub parameters_text: String,
    /// Return annotation including the leading colon, e.g. `: TObject<T>`.
    pub return_type: Option<String>,
}

impl MethodDeclaration {
    /// Build a declaration by hand, as if parsed from `class`.
    pub fn new(
        name: impl Into<String>,
        class: impl Into<String>,
        parameters: Vec<Parameter>,
    ) -> Self {
        let parameters_text = format!(
            "({})",
            parameters
                .iter()
                .filter_map(|p| p.name.as_deref())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Self {
            name: Some(name.into()),
            class: class.into(),
            visibility: Visibility::Public,
            type_parameters: None,
            type_parameter_names: Vec::new(),
            parameters,
            parameters_text,
            return_type: None,
        }
    }

    /// Whether the method is part of the class's public surface.
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    /// Whether a type parameter of this declaration is called `name`.
    pub fn declares_type_parameter(&self, name: &str) -> bool {
        self.type_parameter_names.iter().any(|p| p == name)
    }

    /// Names of the named parameters, in declaration order.
    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.parameters.iter().filter_map(|p| p.name.as_deref())
    }

    /// Overload signature without modifiers, on a single line.
    ///
    /// `Object<T extends TProperties>(properties: T): TObject<T>`
    pub fn signature(&self) -> Option<String> {
        let name = self.name.as_deref()?;
        Some(format!(
            "{}{}{}{}",
            name,
            self.type_parameters.as_deref().unwrap_or_default(),
            self.parameters_text,
            self.return_type.as_deref().unwrap_or_default()
        ))
    }
}

/// A member found in a class body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassMember {
    Method(MethodDeclaration),
    Property { name: Option<String> },
    Other { kind: &'static str },
}

impl ClassMember {
    /// The method declaration, if this member is one.
    pub fn as_method(&self) -> Option<&MethodDeclaration> {
        match self {
            Self::Method(method) => Some(method),
            _ => None,
        }
    }
}

/// Extract the members of a `class_body` node.
pub(crate) fn class_members(body: Node<'_>, source: &Source, class: &str) -> Vec<ClassMember> {
    let mut cursor = body.walk();
    body.named_children(&mut cursor)
        .filter_map(|child| match child.kind() {
            "method_signature" | "abstract_method_signature" | "method_definition" => {
                Some(ClassMember::Method(method_declaration(child, source, class)))
            }
            "public_field_definition" => Some(ClassMember::Property {
                name: child
                    .child_by_field_name("name")
                    .map(|n| source.node_text(n).to_string()),
            }),
            "comment" => None,
            kind => Some(ClassMember::Other { kind }),
        })
        .collect()
}

fn method_declaration(node: Node<'_>, source: &Source, class: &str) -> MethodDeclaration {
    let name = node
        .child_by_field_name("name")
        .filter(|n| n.kind() == "property_identifier")
        .map(|n| source.node_text(n).to_string());

    let mut cursor = node.walk();
    let visibility = node
        .children(&mut cursor)
        .find(|c| c.kind() == "accessibility_modifier")
        .map(|c| Visibility::from_modifier(source.node_text(c)))
        .unwrap_or_default();

    let parameters_node = node.child_by_field_name("parameters");
    let parameters = parameters_node
        .map(|n| parse_parameters(n, source))
        .unwrap_or_default();

    let type_parameters_node = node.child_by_field_name("type_parameters");
    let type_parameter_names = type_parameters_node
        .map(|n| {
            let mut cursor = n.walk();
            n.named_children(&mut cursor)
                .filter(|c| c.kind() == "type_parameter")
                .filter_map(|c| c.child_by_field_name("name"))
                .map(|c| source.node_text(c).to_string())
                .collect()
        })
        .unwrap_or_default();

    MethodDeclaration {
        name,
        class: class.to_string(),
        visibility,
        type_parameters: type_parameters_node.map(|n| single_line(n, source)),
        type_parameter_names,
        parameters,
        parameters_text: parameters_node
            .map(|n| single_line(n, source))
            .unwrap_or_else(|| "()".to_string()),
        return_type: node
            .child_by_field_name("return_type")
            .map(|n| single_line(n, source)),
    }
}

/// Source text of `node` on one line.
///
/// Comments are dropped and whitespace between tokens becomes a single
/// space, except just inside brackets and before `,` and `;`. String and
/// template literals are copied verbatim.
fn single_line(node: Node<'_>, source: &Source) -> String {
    let mut out = String::new();
    let mut last_end = None;
    push_tokens(node, source, &mut out, &mut last_end);
    out
}

fn push_tokens(node: Node<'_>, source: &Source, out: &mut String, last_end: &mut Option<usize>) {
    if node.kind() == "comment" {
        return;
    }

    let literal = matches!(node.kind(), "string" | "template_string" | "template_literal_type");
    if node.child_count() == 0 || literal {
        let text = source.node_text(node);
        let spaced = last_end.is_some_and(|end| node.start_byte() > end);
        let opened = out.ends_with(['(', '[', '<']);
        let closes = text.starts_with([')', ']', '>', ',', ';']);
        if spaced && !opened && !closes {
            out.push(' ');
        }
        out.push_str(text);
        *last_end = Some(node.end_byte());
        return;
    }

    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    for child in children {
        push_tokens(child, source, out, last_end);
    }
}

fn parse_parameters(node: Node<'_>, source: &Source) -> Vec<Parameter> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|c| matches!(c.kind(), "required_parameter" | "optional_parameter"))
        .map(|param| {
            let pattern = param.child_by_field_name("pattern");
            let (name, rest) = match pattern.map(|p| (p, p.kind())) {
                Some((p, "identifier")) => (Some(source.node_text(p).to_string()), false),
                Some((p, "rest_pattern")) => {
                    let mut rest_cursor = p.walk();
                    let name = p
                        .named_children(&mut rest_cursor)
                        .find(|c| c.kind() == "identifier")
                        .map(|c| source.node_text(c).to_string());
                    (name, true)
                }
                _ => (None, false),
            };
            Parameter {
                name,
                optional: param.kind() == "optional_parameter",
                rest,
            }
        })
        .collect()
}
