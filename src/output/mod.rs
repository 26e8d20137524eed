//! Report generation.
//!
//! - [`excel`] - .xlsx workbook output
//! - [`html`] - static HTML table output

mod excel;
mod html;

pub use excel::write_excel;
pub use html::{render_html, write_html};

use crate::error::Error;
use crate::models::InterfaceRecord;

/// Report column headers, shared by both artifacts.
pub const COLUMNS: [&str; 7] = [
    "system-ip",
    "host-name",
    "reachability",
    "version",
    "site-id",
    "interface-name",
    "interface-IP",
];

/// Write `<output_base>.xlsx` and `<output_base>.html` from the same records
/// in one pass.
pub fn write_reports(records: &[InterfaceRecord], output_base: &str) -> Result<(), Error> {
    write_excel(records, output_base)?;
    write_html(records, output_base)?;
    Ok(())
}
