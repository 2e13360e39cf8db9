//! XLSX rendering of test case rows.

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};

use crate::error::AppResult;
use crate::models::{COLUMN_HEADERS, TabularRow};

/// Name of the single worksheet.
pub const SHEET_NAME: &str = "SIT Test Cases";

/// MIME type of the generated workbook.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Header fill.
const HEADER_FILL: u32 = 0x2563EB;

/// Column widths in Excel character units, same order as the headers.
const COLUMN_WIDTHS: [f64; 7] = [8.0, 15.0, 50.0, 40.0, 20.0, 12.0, 12.0];

/// Render rows as a one-sheet workbook and return the file bytes.
///
/// Row 0 is the header; each `TabularRow` follows in order.
pub fn render_workbook(rows: &[TabularRow]) -> AppResult<Vec<u8>> {
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_pattern(FormatPattern::Solid)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_border(FormatBorder::Thin);

    let cell_format = Format::new()
        .set_text_wrap()
        .set_align(FormatAlign::Top)
        .set_border(FormatBorder::Thin);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, (header, width)) in COLUMN_HEADERS.iter().zip(COLUMN_WIDTHS).enumerate() {
        let col = col as u16;
        worksheet.set_column_width(col, width)?;
        worksheet.write_string_with_format(0, col, *header, &header_format)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    for (row_idx, row) in (1u32..).zip(rows) {
        worksheet.write_number_with_format(row_idx, 0, row.sr_no, &cell_format)?;
        for (col, text) in (1u16..).zip(row.text_cells()) {
            worksheet.write_string_with_format(row_idx, col, text, &cell_format)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}
