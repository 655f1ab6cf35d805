use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sheet names a workbook export must contain, in concatenation order.
pub const REQUIRED_SHEETS: [&str; 2] = ["ATC", "Encuesta salida"];

/// Column headers each required sheet must carry verbatim.
pub const REQUIRED_COLUMNS: [&str; 2] = ["Calificacion", "Comentarios"];

/// Canonical field names after unification.
pub const RATING_FIELD: &str = "calificacion";
pub const COMMENT_FIELD: &str = "comentarios";

/// A single tabular sheet: an explicit header row plus record rows.
///
/// Cell tokens are `serde_json::Value` so a cell can hold text, a number, or
/// nothing at all, exactly as survey exports arrive. Headers are carried
/// separately from the rows so that a zero-row sheet still has a shape to
/// validate.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Sheet {
    pub columns: Vec<String>,
    pub rows: Vec<serde_json::Map<String, Value>>,
}

impl Sheet {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// A multi-sheet source: named sheets in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Workbook {
    sheets: Vec<(String, Sheet)>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, sheet: Sheet) {
        self.sheets.push((name.into(), sheet));
    }

    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    pub fn contains_sheet(&self, name: &str) -> bool {
        self.sheets.iter().any(|(n, _)| n == name)
    }

    /// Sheets in insertion order, which is the order column checks run in.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Sheet)> {
        self.sheets.iter().map(|(n, s)| (n.as_str(), s))
    }
}

impl FromIterator<(String, Sheet)> for Workbook {
    fn from_iter<I: IntoIterator<Item = (String, Sheet)>>(iter: I) -> Self {
        Self {
            sheets: iter.into_iter().collect(),
        }
    }
}

/// The two input shapes the pipeline accepts.
///
/// A workbook export goes through structural validation; a flat table only
/// has to carry the rating and comment columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ReviewSource {
    Workbook(Workbook),
    Flat(Sheet),
}

/// One source row after unification, before any cleaning.
///
/// Tokens are `None` when the cell was absent or null. Dropped as soon as the
/// row is mapped into a canonical review or rejected.
#[derive(Debug, Clone)]
pub struct RawRow {
    pub rating: Option<Value>,
    pub comment: Option<Value>,
    pub source_sheet: Option<String>,
}
