//! One module per block construct.
//!
//! Each rule owns its leading-marker syntax; the block engine only
//! dispatches on the results. All rules take the source and a line content
//! span and never read outside it.

pub mod code;
pub mod heading;
pub mod list;
pub mod quote;
pub mod reference;
pub mod table;
pub mod thematic_break;

pub use code::{CodeFence, FenceKind, FenceSig, IndentedCode};
pub use heading::Heading;
pub use list::ListMarker;
pub use quote::QuoteRule;
pub use reference::ReferenceDefinition;
pub use table::TableRule;
pub use thematic_break::ThematicBreakRule;
