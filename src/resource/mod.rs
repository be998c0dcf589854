//! Resource addressing
//!
//! - `uri` - Matches concrete request addresses to logical resources
//! - `query` - Query-string parameters with "first wins" reduction
//! - `template` - Templates advertised to clients and used by completion

pub mod query;
pub mod template;
pub mod uri;

pub use query::QueryParams;
pub use template::{TemplateDescriptor, TemplateKind, TemplateRef, TEMPLATES};
pub use uri::{match_uri, ResolvedUri, ResourceRoute};
