//! Inline-specific types that own their syntax delimiters.
//!
//! All delimiter constants live here, not scattered in parser code. The
//! parser calls these types; it never hardcodes `**` or `` ` ``.

pub mod code_span;
pub mod delimited;
pub mod embed;
pub mod link;
pub mod reference;
pub mod tag;

pub use code_span::CodeSpan;
pub use delimited::Delimited;
pub use embed::Embed;
pub use link::Link;
pub use reference::Reference;
pub use tag::Tag;
