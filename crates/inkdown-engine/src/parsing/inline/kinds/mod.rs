//! One module per inline construct.
//!
//! Each parser owns its delimiter constants and its trip characters; the
//! engine never hardcodes a construct's syntax. Registration order in
//! [`crate::parsing::inline::ParserRegistry::with_defaults`] is the
//! precedence order between parsers sharing a trip character.

pub mod anchor;
pub mod code_span;
pub mod emphasis;
pub mod html_anchor;
pub mod image;
pub mod line_break;
pub mod link;
pub mod strikethrough;

pub use anchor::LinkAnchorParser;
pub use code_span::CodeSpanParser;
pub use emphasis::{BoldParser, ItalicParser};
pub use html_anchor::HtmlAnchorParser;
pub use image::ImageParser;
pub use line_break::LineBreakParser;
pub use link::LinkParser;
pub use strikethrough::StrikethroughParser;
