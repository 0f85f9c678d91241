use std::{borrow::Cow, iter};

use tracing::*;

use crate::{
    analysis::grid::Axis,
    consts::*,
    layout::element::LabeledFragment,
    render::config::RenderConfig,
};

/// Formats labeled fragments into a bordered fixed-width text table.
#[derive(Clone, Debug, Default)]
pub struct TableRenderer {
    config: RenderConfig,
}

/// Cell texts laid out by grid position, plus the width of every column.
struct CellGrid<'a> {
    rows: Vec<Vec<Option<Cow<'a, str>>>>,
    widths: Vec<usize>,
}

impl<'a> CellGrid<'a> {
    fn build(labeled: &'a [LabeledFragment], row_count: usize) -> Self {
        let column_count = labeled.iter().map(|l| l.column()).max().unwrap_or(0);
        // Sized from the data; rows past the last labeled one would render nothing.
        let filled_rows = labeled
            .iter()
            .map(|l| l.row())
            .max()
            .unwrap_or(0)
            .min(row_count);
        let mut rows: Vec<Vec<Option<Cow<'a, str>>>> =
            vec![vec![None; column_count]; filled_rows];

        // Column sweep order, so merged text reads left to right.
        let mut ordered: Vec<&LabeledFragment> = labeled.iter().collect();
        ordered.sort_by(|a, b| Axis::Column.compare(a.fragment(), b.fragment()));

        for fragment in ordered {
            let slot = match (fragment.row().checked_sub(1), fragment.column().checked_sub(1)) {
                (Some(row), Some(column)) => {
                    rows.get_mut(row).and_then(|cells| cells.get_mut(column))
                }
                _ => None,
            };
            let Some(slot) = slot else {
                warn!(
                    row = fragment.row(),
                    column = fragment.column(),
                    row_count,
                    "fragment outside of table, skipped"
                );
                continue;
            };

            match slot {
                Some(text) => {
                    warn!(
                        row = fragment.row(),
                        column = fragment.column(),
                        "fragments share a cell, merging"
                    );
                    let text = text.to_mut();
                    text.push(MERGED_CELL_SEPARATOR);
                    text.push_str(fragment.text());
                }
                None => *slot = Some(Cow::Borrowed(fragment.text())),
            }
        }

        let widths = (0..column_count)
            .map(|column| {
                rows.iter()
                    .filter_map(|row| row[column].as_deref())
                    .map(|text| text.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        Self { rows, widths }
    }
}

impl TableRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Renders rows `1..=row_count` as a table whose first row is the header.
    ///
    /// Returns an empty string when there is nothing to draw, rather than an
    /// empty bordered box.
    pub fn render(&self, labeled: &[LabeledFragment], row_count: usize) -> String {
        if row_count == 0 {
            return String::new();
        }

        let grid = CellGrid::build(labeled, row_count);
        if grid.rows.is_empty() || grid.widths.is_empty() {
            return String::new();
        }

        let line_ending = self.config.line_ending.as_str();
        let line_len = grid
            .widths
            .iter()
            .map(|width| width + 2 * self.config.padding + 1)
            .sum::<usize>()
            + 1
            + line_ending.len();
        let mut table = String::with_capacity(line_len.saturating_mul(grid.rows.len() + 3));

        let border = self.border(&grid.widths);
        table.push_str(&border);
        for (idx, row) in grid.rows.iter().enumerate() {
            self.push_line(&mut table, row, &grid.widths);
            if idx == 0 {
                table.push_str(&border);
            }
        }
        table.push_str(&border);

        debug!(
            rows = grid.rows.len(),
            columns = grid.widths.len(),
            bytes = table.len(),
            "table rendered"
        );
        table
    }

    fn border(&self, widths: &[usize]) -> String {
        let mut border = String::new();
        for width in widths {
            border.push(BORDER_CORNER);
            border.extend(iter::repeat_n(BORDER_FILL, width + 2 * self.config.padding));
        }
        border.push(BORDER_CORNER);
        border.push_str(self.config.line_ending.as_str());
        border
    }

    /// Appends one content line. Rows without any fragment produce nothing.
    fn push_line(&self, table: &mut String, row: &[Option<Cow<'_, str>>], widths: &[usize]) {
        if row.iter().all(Option::is_none) {
            return;
        }

        let padding = self.config.padding;
        for (cell, &width) in row.iter().zip(widths) {
            let text = cell.as_deref().unwrap_or_default();
            table.push(CELL_SEPARATOR);
            table.extend(iter::repeat_n(CELL_FILL, padding));
            table.push_str(text);
            table.extend(iter::repeat_n(
                CELL_FILL,
                width - text.chars().count() + padding,
            ));
        }
        table.push(CELL_SEPARATOR);
        table.push_str(self.config.line_ending.as_str());
    }
}

/// Renders with the default configuration.
pub fn render(labeled: &[LabeledFragment], row_count: usize) -> String {
    TableRenderer::default().render(labeled, row_count)
}
