//! TypeScript declaration loading for typeshim.
//!
//! Declaration files are parsed with tree-sitter into a [`Program`]. The
//! [`builder_classes`] filter then selects the configured builder classes
//! from the top level of every root source and extracts their members.
//!
//! ```ignore
//! use typeshim_declarations::{Program, builder_classes};
//!
//! let program = Program::load(["json.d.ts", "javascript.d.ts"])?;
//! let builders = builder_classes(&program, &["JsonTypeBuilder".to_string()]);
//! ```

mod classes;
mod error;
mod members;
mod program;

pub use classes::{BuilderClass, builder_classes};
pub use error::{Error, Result};
pub use members::{ClassMember, MethodDeclaration, Parameter, Visibility};
pub use program::{Program, Source};
