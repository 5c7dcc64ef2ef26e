//! Builder class discovery.

use std::path::PathBuf;

use tree_sitter::Node;

use crate::{
    ClassMember, MethodDeclaration, Program, Source,
    members::class_members,
};

/// A class declaration whose name is on the builder allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderClass {
    pub name: String,
    /// Root source the class was declared in.
    pub source: PathBuf,
    /// Members in declaration order.
    pub members: Vec<ClassMember>,
}

impl BuilderClass {
    /// Method members, in declaration order.
    pub fn methods(&self) -> impl Iterator<Item = &MethodDeclaration> {
        self.members.iter().filter_map(ClassMember::as_method)
    }
}

/// Select the builder classes declared at the top level of every root source.
///
/// Only direct top-level declarations are considered (optionally wrapped in
/// `export` and/or `declare`); classes inside namespaces, modules or
/// functions are ignored. The result is in source order, then declaration
/// order within each source.
pub fn builder_classes(program: &Program, names: &[String]) -> Vec<BuilderClass> {
    let mut builders = Vec::new();

    for source in program.sources() {
        let root = source.root_node();
        let mut cursor = root.walk();
        let declarations: Vec<Node<'_>> = root.named_children(&mut cursor).collect();

        for node in declarations {
            let Some(class) = class_declaration(node) else {
                continue;
            };
            let Some(name) = class
                .child_by_field_name("name")
                .map(|n| source.node_text(n).to_string())
            else {
                continue;
            };
            if !names.iter().any(|allowed| allowed == &name) {
                tracing::trace!(class = %name, "skipping class not on the builder list");
                continue;
            }

            builders.push(builder_class(class, source, name));
        }
    }

    tracing::info!(builders = builders.len(), "discovered builder classes");
    builders
}

fn builder_class(class: Node<'_>, source: &Source, name: String) -> BuilderClass {
    let members = class
        .child_by_field_name("body")
        .map(|body| class_members(body, source, &name))
        .unwrap_or_default();

    tracing::debug!(
        class = %name,
        source = %source.path().display(),
        members = members.len(),
        "found builder class"
    );

    BuilderClass {
        name,
        source: source.path().to_path_buf(),
        members,
    }
}

/// Unwrap `export` / `declare` wrappers down to a class declaration.
fn class_declaration(node: Node<'_>) -> Option<Node<'_>> {
    match node.kind() {
        "class_declaration" | "abstract_class_declaration" => Some(node),
        "export_statement" => node
            .child_by_field_name("declaration")
            .and_then(class_declaration),
        "ambient_declaration" => {
            let mut cursor = node.walk();
            let children: Vec<_> = node.named_children(&mut cursor).collect();
            children.into_iter().find_map(class_declaration)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(files: &[(&str, &str)]) -> Program {
        let sources = files
            .iter()
            .map(|(path, text)| Source::parse(*path, *text).unwrap())
            .collect();
        Program::from_sources(sources)
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_filters_by_allow_list() {
        let program = program(&[(
            "json.d.ts",
            "export declare class JsonTypeBuilder {\n    Any(): TAny;\n}\nexport declare class Other {\n    Any(): TAny;\n}\n",
        )]);

        let builders = builder_classes(&program, &names(&["JsonTypeBuilder"]));

        assert_eq!(builders.len(), 1);
        assert_eq!(builders[0].name, "JsonTypeBuilder");
        assert_eq!(builders[0].source, PathBuf::from("json.d.ts"));
        assert_eq!(builders[0].methods().count(), 1);
    }

    #[test]
    fn test_accepts_declaration_wrappers() {
        let program = program(&[(
            "builders.d.ts",
            "declare class A {}\nexport class B {}\nexport declare abstract class C {}\nclass D {}\n",
        )]);

        let builders = builder_classes(&program, &names(&["A", "B", "C", "D"]));

        let found: Vec<_> = builders.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(found, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_ignores_nested_classes() {
        let program = program(&[(
            "nested.d.ts",
            "declare namespace Inner {\n    class JsonTypeBuilder {\n        Any(): TAny;\n    }\n}\n",
        )]);

        assert!(builder_classes(&program, &names(&["JsonTypeBuilder"])).is_empty());
    }

    #[test]
    fn test_discovery_order_follows_sources() {
        let program = program(&[
            ("b.d.ts", "export declare class Second {}\nexport declare class Third {}\n"),
            ("a.d.ts", "export declare class First {}\n"),
        ]);

        let builders = builder_classes(&program, &names(&["First", "Second", "Third"]));

        let found: Vec<_> = builders.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(found, vec!["Second", "Third", "First"]);
    }

    #[test]
    fn test_no_matching_classes() {
        let program = program(&[("a.d.ts", "export declare const x: number;\n")]);

        assert!(builder_classes(&program, &names(&["JsonTypeBuilder"])).is_empty());
    }
}
