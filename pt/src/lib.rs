//! PromptTemplate - literal `{{placeholder}}` substitution
//!
//! A deliberately small template compiler: every `{{name}}` whose name appears
//! in the variable map is replaced by its value, everything else is copied
//! through untouched.
//!
//! # Example
//!
//! ```
//! use prompttemplate::{Variables, compile};
//!
//! let vars = Variables::from([("x", "A")]);
//! assert_eq!(compile("{{x}} and {{x}}, not {{y}}", &vars), "A and A, not {{y}}");
//! ```

pub mod cli;
mod error;
mod template;
mod variables;

pub use error::TemplateError;
pub use template::{Template, compile, placeholder};
pub use variables::{Variables, parse_assignment};
