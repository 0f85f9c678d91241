use serde::Serialize;
use snafu::ensure;
use tracing::*;

use crate::{
    analysis::grid::assign_grid,
    error::{NoTextSnafu, TablifyError},
    layout::element::{Fragment, LabeledFragment},
    render::{config::RenderConfig, table::TableRenderer},
};

#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Replace control characters (tabs, stray line breaks) in recognized text
    /// with spaces.
    pub trim_control_chars: bool,
    /// Strip leading and trailing whitespace from recognized text.
    pub trim_whitespace: bool,
    pub render: RenderConfig,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            trim_control_chars: true,
            trim_whitespace: true,
            render: RenderConfig::default(),
        }
    }
}

/// A reconstructed table: the labeled fragments and their rendering.
#[derive(Debug, Clone, Serialize)]
pub struct Table {
    pub cells: Vec<LabeledFragment>,
    pub rows: usize,
    pub columns: usize,
    pub text: String,
}

/// Turns the lines of one recognition result into a table.
#[derive(Debug, Clone, Default)]
pub struct TableParser {
    pub config: ParserConfig,
}

impl TableParser {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Fails with [`TablifyError::NoText`] when recognition found nothing.
    #[instrument(skip_all, fields(fragments = fragments.len()))]
    pub fn parse(&self, fragments: Vec<Fragment>) -> Result<Table, TablifyError> {
        ensure!(!fragments.is_empty(), NoTextSnafu);

        let fragments: Vec<Fragment> = fragments
            .into_iter()
            .map(|fragment| self.clean(fragment))
            .collect();

        let (cells, rows) = assign_grid(&fragments);
        let columns = cells.iter().map(|cell| cell.column()).max().unwrap_or(0);
        let text = TableRenderer::new(self.config.render.clone()).render(&cells, rows);

        info!(rows, columns, "table reconstructed");

        Ok(Table {
            cells,
            rows,
            columns,
            text,
        })
    }

    fn clean(&self, mut fragment: Fragment) -> Fragment {
        if self.config.trim_control_chars && fragment.text.chars().any(char::is_control) {
            fragment.text = fragment
                .text
                .chars()
                .map(|c| if c.is_control() { ' ' } else { c })
                .collect();
        }
        if self.config.trim_whitespace {
            let trimmed = fragment.text.trim();
            if trimmed.len() != fragment.text.len() {
                fragment.text = trimmed.to_string();
            }
        }
        fragment
    }
}
