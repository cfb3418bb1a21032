//! Project templates for ADL generation.
//!
//! Template bodies are embedded at compile time (see [`builtin`]) and
//! resolved per target language by the [`TemplateRegistry`]. The
//! [`TemplateRenderer`] turns a body plus a JSON context into file
//! contents, and [`header`] decides which generated files get a
//! provenance comment.

pub mod builtin;
pub mod context;
pub mod error;
pub mod header;
pub mod registry;
pub mod renderer;

pub use context::{document_context, skill_context};
pub use error::{Result, TemplateError};
pub use header::{header_for, with_header, CommentStyle, GenerationMetadata};
pub use registry::{FileMap, TemplateEntry, TemplateRegistry, TemplateRoot};
pub use renderer::{render_path, TemplateRenderer};
