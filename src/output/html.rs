//! Static HTML table output.

use super::COLUMNS;
use crate::error::Error;
use crate::models::InterfaceRecord;

/// Write `<output_base>.html`: a bordered table, one row per record.
///
/// Rendering carries no timestamps, so identical records produce a
/// byte-identical file on every run.
pub fn write_html(records: &[InterfaceRecord], output_base: &str) -> Result<(), Error> {
    let path = format!("{output_base}.html");
    std::fs::write(&path, render_html(records)).map_err(|e| Error::ReportWrite {
        path,
        reason: e.to_string(),
    })
}

/// Render the full document.
pub fn render_html(records: &[InterfaceRecord]) -> String {
    let mut html = String::new();
    html.push_str("<html>\n<head>\n<title>Cisco Public IPs</title>\n</head>\n<body>\n");
    html.push_str("<table border='1'>\n<thead>\n<tr>");
    for header in COLUMNS {
        html.push_str(&format!("<th>{}</th>", escape_html(header)));
    }
    html.push_str("</tr>\n</thead>\n<tbody>\n");
    for record in records {
        html.push_str("<tr>");
        for cell in record.cells() {
            html.push_str(&format!("<td>{}</td>", escape_html(&cell)));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    html
}

/// Escape text destined for element content.
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
