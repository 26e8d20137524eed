//! Spreadsheet output.

use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, XlsxError};

use super::COLUMNS;
use crate::error::Error;
use crate::models::InterfaceRecord;

/// Write `<output_base>.xlsx`: one worksheet, one row per record.
pub fn write_excel(records: &[InterfaceRecord], output_base: &str) -> Result<(), Error> {
    let path = format!("{output_base}.xlsx");
    write_workbook(records, &path).map_err(|e| Error::ReportWrite {
        path,
        reason: e.to_string(),
    })
}

fn write_workbook(records: &[InterfaceRecord], path: &str) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_size(12)
        .set_border(FormatBorder::Thin);
    let base_format = Format::new()
        .set_align(FormatAlign::Left)
        .set_align(FormatAlign::VerticalCenter);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("vEdgeData")?;

    for (col, header) in COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    for (row, record) in records.iter().enumerate() {
        let row = row as u32 + 1;
        for (col, cell) in record.cells().iter().enumerate() {
            worksheet.write_string_with_format(row, col as u16, cell.as_str(), &base_format)?;
        }
    }

    worksheet.autofit();
    workbook.save(path)?;
    Ok(())
}
