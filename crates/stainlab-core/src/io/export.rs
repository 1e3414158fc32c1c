use std::path::Path;

use rust_xlsxwriter::{Workbook, XlsxError};
use tracing::info;

use crate::error::{Result, StainlabError};
use crate::stats::StatRecord;

/// Write records to an `.xlsx` workbook: one header row taken from the first
/// record, then one row per record in order.
///
/// Every record must have the same columns as the first; a mismatch is
/// reported before anything is written.
pub fn write_xlsx(records: &[StatRecord], path: &Path) -> Result<()> {
    let first = records.first().ok_or(StainlabError::NoStatistics)?;
    let columns = first.columns();

    if let Some(odd) = records.iter().find(|r| r.columns() != columns) {
        return Err(StainlabError::WriteFailed {
            path: path.to_path_buf(),
            reason: format!(
                "columns of '{}' differ from '{}'",
                odd.image_name, first.image_name
            ),
        });
    }

    let failed = |e: XlsxError| StainlabError::WriteFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, name) in columns.iter().enumerate() {
        sheet.write_string(0, col as u16, *name).map_err(failed)?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        sheet
            .write_string(row, 0, record.image_name.as_str())
            .map_err(failed)?;
        sheet
            .write_number(row, 1, record.total_pixels as f64)
            .map_err(failed)?;
        for (j, (_, value)) in record.metrics.iter().enumerate() {
            sheet
                .write_number(row, j as u16 + 2, *value)
                .map_err(failed)?;
        }
    }

    workbook.save(path).map_err(failed)?;
    info!("Exported {} record(s) to {}", records.len(), path.display());
    Ok(())
}
