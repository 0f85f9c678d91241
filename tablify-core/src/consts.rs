/// Glyph placed at every column boundary of a border line.
pub const BORDER_CORNER: char = '+';

/// Glyph repeated along a border line above each column.
pub const BORDER_FILL: char = '-';

/// Glyph separating cells on a content line.
pub const CELL_SEPARATOR: char = '|';

/// Glyph used to pad cell text up to its column width.
pub const CELL_FILL: char = ' ';

/// Spaces between a cell separator and the cell text, on each side.
///
/// With the default of 1 a column of width `w` occupies `w + 2` characters
/// between two separators, which is also the length of its border dash run.
pub const DEFAULT_CELL_PADDING: usize = 1;

/// Separator used when two fragments fall into the same cell.
pub const MERGED_CELL_SEPARATOR: char = ' ';

/// Status message reported to the user when recognition produced no lines.
pub const NO_TEXT_FOUND: &str = "No text found";

/// Path argument meaning "read from standard input".
pub const STDIN_PATH: &str = "-";
