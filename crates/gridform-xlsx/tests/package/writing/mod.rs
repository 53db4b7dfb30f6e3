//! Writing tests - verify the XML parts produced by `XlsxWriter`.

mod cells;
mod dimensions;
mod merged_cells;
mod package;
mod styles;
