//! Template parsing

mod error;
pub mod frontmatter;
pub mod template;

pub use error::ParseError;
pub use frontmatter::split_frontmatter;
pub use template::parse_template;
