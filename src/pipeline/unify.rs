use serde_json::Value;
use tracing::debug;

use super::source::{
    RawRow, ReviewSource, Sheet, COMMENT_FIELD, RATING_FIELD, REQUIRED_COLUMNS, REQUIRED_SHEETS,
};
use crate::error::{PipelineError, Result};

/// Extracts the rating/comment columns from a source and concatenates them
/// into one raw row batch.
///
/// For a workbook the rows of "ATC" always precede the rows of
/// "Encuesta salida", regardless of the order the sheets arrived in. No rows
/// are filtered here; the unified count is the sum of the sheet counts.
///
/// The flat path has a weaker contract: it only requires the two columns to
/// be present, under either their export headers or their canonical names.
pub struct SheetUnifier;

impl SheetUnifier {
    pub fn unify(source: &ReviewSource) -> Result<Vec<RawRow>> {
        match source {
            ReviewSource::Workbook(workbook) => {
                let mut rows = Vec::new();
                for name in REQUIRED_SHEETS {
                    let sheet = workbook.sheet(name).ok_or_else(|| {
                        PipelineError::StructuralValidation(format!(
                            "missing required sheet '{name}'"
                        ))
                    })?;
                    let [rating_col, comment_col] = REQUIRED_COLUMNS;
                    rows.extend(Self::extract_rows(sheet, rating_col, comment_col, Some(name)));
                    debug!(sheet = name, rows = sheet.row_count(), "unified sheet");
                }
                Ok(rows)
            }
            ReviewSource::Flat(sheet) => {
                let rating_col = Self::resolve_column(sheet, REQUIRED_COLUMNS[0], RATING_FIELD)?;
                let comment_col = Self::resolve_column(sheet, REQUIRED_COLUMNS[1], COMMENT_FIELD)?;
                Ok(Self::extract_rows(sheet, rating_col, comment_col, None))
            }
        }
    }

    /// Accepts either the export header or the canonical field name.
    fn resolve_column<'a>(
        sheet: &Sheet,
        original: &'a str,
        canonical: &'a str,
    ) -> Result<&'a str> {
        if sheet.has_column(original) {
            Ok(original)
        } else if sheet.has_column(canonical) {
            Ok(canonical)
        } else {
            Err(PipelineError::StructuralValidation(format!(
                "flat table must contain a '{original}' (or '{canonical}') column"
            )))
        }
    }

    fn extract_rows(
        sheet: &Sheet,
        rating_col: &str,
        comment_col: &str,
        source_sheet: Option<&str>,
    ) -> Vec<RawRow> {
        sheet
            .rows
            .iter()
            .map(|row| RawRow {
                rating: cell(row, rating_col),
                comment: cell(row, comment_col),
                source_sheet: source_sheet.map(str::to_owned),
            })
            .collect()
    }
}

/// A null cell and an absent cell are the same thing: no token.
fn cell(row: &serde_json::Map<String, Value>, column: &str) -> Option<Value> {
    row.get(column).filter(|v| !v.is_null()).cloned()
}
