//! Markdown change log of applied updates

use crate::domain::UpdateRecord;
use crate::error::ReportError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Render one bullet per changed record: `` * `dependency old -> new` ``
pub fn render_markdown(records: &[UpdateRecord]) -> String {
    records
        .iter()
        .filter(|record| record.is_change())
        .map(|record| format!("* `{}`\n", record))
        .collect()
}

/// Append the rendered records to `path`, creating it if needed
pub fn append_markdown(path: &Path, records: &[UpdateRecord]) -> Result<(), ReportError> {
    let rendered = render_markdown(records);
    if rendered.is_empty() {
        return Ok(());
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| ReportError::write_error(path, e))?;
    file.write_all(rendered.as_bytes())
        .map_err(|e| ReportError::write_error(path, e))
}
