//! Template rendering of the generated module.

use std::{borrow::Cow, path::Path};

use minijinja::{AutoEscape, Environment, UndefinedBehavior, context, syntax::SyntaxConfig};
use serde::Serialize;

use crate::{Error, LogicalMethod, Result, TypePatcher};

/// Template used when no template file is configured.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/builders.ts.jinja");

const TEMPLATE_NAME: &str = "builders.ts";

/// Per-method view handed to the template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateData {
    pub name: String,
    /// Documentation block, one line per element joined with newlines.
    pub comment: String,
    /// Comma-joined merged parameter list.
    pub parameters: String,
    /// Overload signatures with internal types qualified.
    pub signatures: Vec<String>,
}

impl TemplateData {
    pub fn new(method: &LogicalMethod, patcher: &TypePatcher<'_>) -> Self {
        Self {
            name: method.name().to_string(),
            comment: format!("/**\n * {}\n */", method.description()),
            parameters: method.parameter_list(),
            signatures: method.signatures().map(|s| patcher.patch(&s)).collect(),
        }
    }
}

/// Read the template at `path`, or the built-in one.
pub fn load_template(path: Option<&Path>) -> Result<Cow<'static, str>> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map(Cow::Owned)
            .map_err(|source| Error::TemplateRead {
                path: path.to_path_buf(),
                source,
            }),
        None => Ok(Cow::Borrowed(DEFAULT_TEMPLATE)),
    }
}

/// Render a module template.
///
/// Templates use `[% %]` blocks, `[[ ]]` variables and `[# #]` comments so
/// they never clash with TypeScript braces. Referencing an undefined value
/// is an error.
pub fn render_module(
    template: &str,
    methods: &[TemplateData],
    namespace: &str,
    module: &str,
) -> Result<String> {
    let render_error = |source: minijinja::Error| Error::TemplateRender {
        name: TEMPLATE_NAME.to_string(),
        source,
    };

    let mut env = Environment::new();
    env.set_syntax(
        SyntaxConfig::builder()
            .block_delimiters("[%", "%]")
            .variable_delimiters("[[", "]]")
            .comment_delimiters("[#", "#]")
            .build()
            .map_err(render_error)?,
    );
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);

    env.add_template(TEMPLATE_NAME, template).map_err(render_error)?;
    let rendered = env
        .get_template(TEMPLATE_NAME)
        .and_then(|tmpl| tmpl.render(context! { methods, namespace, module }))
        .map_err(render_error)?;

    tracing::debug!(
        methods = methods.len(),
        bytes = rendered.len(),
        "rendered module template"
    );
    Ok(rendered)
}
