//! Drive a [`SheetBackend`] from a computed [`Layout`]

use crate::backend::SheetBackend;
use crate::error::Result;
use crate::layout::{Layout, PlacedCell, SizingDirective};

/// Write every placed cell, then every sizing directive, into `backend`
///
/// Stops at the first backend error; cells written before it stay written.
pub fn render<B: SheetBackend + ?Sized>(layout: &Layout, backend: &mut B) -> Result<()> {
    for cell in &layout.cells {
        render_cell(cell, backend)?;
    }

    for directive in &layout.sizing {
        match directive {
            SizingDirective::ColumnWidth { column, width } => {
                backend.set_column_width(column, *width)?
            }
            SizingDirective::RowHeight { row, height } => backend.set_row_height(*row, *height)?,
        }
    }

    log::debug!(
        "rendered {} cells and {} sizing directives",
        layout.cells.len(),
        layout.sizing.len()
    );
    Ok(())
}

fn render_cell<B: SheetBackend + ?Sized>(cell: &PlacedCell, backend: &mut B) -> Result<()> {
    backend.set_cell_value(cell.row, cell.column, &cell.value)?;

    if cell.is_single() {
        backend.apply_style_to_cell(cell.row, cell.column, &cell.style)?;
    } else {
        backend.merge_and_style_range(
            cell.row,
            cell.column,
            cell.end_row(),
            cell.end_column(),
            &cell.style,
        )?;
    }

    // After styling, which would otherwise reset it
    if let Some(format) = &cell.number_format {
        backend.set_cell_number_format(cell.row, cell.column, format)?;
    }
    Ok(())
}
