use serde::Serialize;

use super::source::{Workbook, REQUIRED_COLUMNS, REQUIRED_SHEETS};

/// Outcome of the structural checks on a workbook's shape.
///
/// Computed once per source and never mutated. `reason` names the first
/// violated expectation; checks short-circuit, so at most one reason is ever
/// reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub reason: Option<String>,
}

impl ValidationResult {
    fn ok() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    fn fail(reason: impl Into<String>) -> Self {
        Self {
            valid: false,
            reason: Some(reason.into()),
        }
    }
}

/// Validates the structural contract of a workbook export.
///
/// Only headers and shape are inspected, never cell values. Checks run in a
/// fixed order and stop at the first failure:
/// sheet count, then each required sheet name in declared order, then each
/// required column per sheet in the workbook's own order.
pub struct WorkbookValidator;

impl WorkbookValidator {
    pub fn validate(workbook: &Workbook) -> ValidationResult {
        if workbook.sheet_count() != 2 {
            return ValidationResult::fail(format!(
                "workbook must contain exactly 2 sheets, found {}",
                workbook.sheet_count()
            ));
        }

        for name in REQUIRED_SHEETS {
            if !workbook.contains_sheet(name) {
                return ValidationResult::fail(format!("missing required sheet '{name}'"));
            }
        }

        for (name, sheet) in workbook.iter() {
            for column in REQUIRED_COLUMNS {
                if !sheet.has_column(column) {
                    return ValidationResult::fail(format!(
                        "sheet '{name}' is missing required column '{column}'"
                    ));
                }
            }
        }

        ValidationResult::ok()
    }
}
