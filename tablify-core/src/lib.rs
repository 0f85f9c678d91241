pub mod analysis;
pub mod consts;
pub mod error;
pub mod layout;
pub mod parse;
pub mod render;

// Re-export commonly used types
pub use analysis::{
    bbox::Bbox,
    grid::{Axis, assign_grid},
};
pub use layout::element::{Fragment, LabeledFragment};
pub use parse::parser::{ParserConfig, Table, TableParser};
pub use render::{
    config::{LineEnding, RenderConfig, RenderConfigBuilder},
    table::{TableRenderer, render},
};
