//! Example: lay out a small report from JSON and save it as xlsx

use gridform::{
    default_style_from_json, workbook_from_descriptor, ConvertOptions, Result, SheetDescriptor,
    WorkbookExt,
};

const REPORT: &str = r##"{
    "start_row": 2,
    "start_column": 2,
    "number_format": "#,##0.00",
    "column_widths": [{"column_letter": "B", "width": 24}, {"column_number": 3, "width": 14}],
    "rows": [
        {"row_height": 28,
         "cells": [{"value": "Quarterly totals", "width": 2,
                    "style": {"font": {"bold": true, "size": 14},
                              "alignment": {"horizontal": "center"},
                              "border": {"bottom": {"border_style": "medium"}}}}]},
        {"rows_shift": 1,
         "cells": [{"value": "Item", "style": {"fill": {"fill_type": "solid", "start_color": "D9D9D9"}}},
                   {"value": "Amount", "style": {"fill": {"fill_type": "solid", "start_color": "D9D9D9"}}}]},
        {"cells": [{"value": "Hardware"}, {"value": 1250.5}]},
        {"cells": [{"value": "Services"}, {"value": 980}]},
        {"cells": [{"value": "Total", "style": {"font": {"bold": true}}},
                   {"value": 2230.5, "style": {"font": {"bold": true},
                                               "border": {"top": {"border_style": "double"}}}}]}
    ]
}"##;

fn main() -> Result<()> {
    let descriptor = SheetDescriptor::from_json(REPORT)?;
    let options = ConvertOptions::new()
        .with_sheet_name("Report")
        .with_default_style(default_style_from_json(r#"{"font": {"name": "Arial", "size": 10}}"#)?);

    let workbook = workbook_from_descriptor(&descriptor, &options)?;

    let path = std::env::temp_dir().join("gridform-report.xlsx");
    workbook.save(&path)?;
    println!("Created {}", path.display());

    let sheet = workbook.worksheet();
    for (row, col, cell) in sheet.iter_cells() {
        if !cell.value.is_empty() {
            println!(
                "{}: {}",
                gridform_core::CellAddress::new(row, col),
                cell.value
            );
        }
    }

    Ok(())
}
