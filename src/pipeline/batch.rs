use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use super::rating::RatingNormalizer;
use super::relevance::RelevanceFilter;
use super::source::{RawRow, ReviewSource};
use super::text::TextNormalizer;
use super::unify::SheetUnifier;
use super::validate::WorkbookValidator;
use crate::config::Config;
use crate::domain::CanonicalReview;
use crate::error::{PipelineError, Result};

/// Stages a batch moves through. `Failed` is only reachable from
/// `Validating`; every later stage absorbs bad rows instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PipelineStage {
    Init,
    Validating,
    Unifying,
    RatingClean,
    TextClean,
    Filtering,
    Done,
    Failed,
}

/// Which input shape produced a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SourceKind {
    Workbook,
    Flat,
}

/// Row-level accounting for one pipeline run.
///
/// Rejections shrink the row count but never fail the batch; these counters
/// are the observable trace of what was dropped and why.
#[derive(Debug, Clone, Serialize)]
pub struct BatchDiagnostics {
    pub source: SourceKind,
    pub rows_unified: usize,
    pub rejected_rating: usize,
    pub rejected_text: usize,
    pub rejected_relevance: usize,
    pub rows_out: usize,
    pub stage: PipelineStage,
    pub processed_at: DateTime<Utc>,
}

/// Terminal outcome of a successful run. An empty batch is valid and is
/// reported as such, distinct from a structural failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BatchOutcome {
    Empty,
    Populated(usize),
}

/// A cleaned review batch plus its diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct CleanBatch {
    pub reviews: Vec<CanonicalReview>,
    pub diagnostics: BatchDiagnostics,
}

impl CleanBatch {
    pub fn outcome(&self) -> BatchOutcome {
        if self.reviews.is_empty() {
            BatchOutcome::Empty
        } else {
            BatchOutcome::Populated(self.reviews.len())
        }
    }
}

/// One rating-accepted row awaiting text cleaning.
struct RatedRow {
    rating: i64,
    comment: Option<serde_json::Value>,
}

/// Orchestrates validation, unification, and the three row-cleaning stages.
///
/// Row order is preserved end to end: unification concatenates in declared
/// sheet order and every cleaning stage drops rows without reordering the
/// survivors.
#[derive(Debug, Clone, Default)]
pub struct ReviewPipeline {
    rating: RatingNormalizer,
}

impl ReviewPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            rating: RatingNormalizer::new(config.rating),
        }
    }

    /// Runs one source through the whole pipeline.
    ///
    /// Only a structural failure returns an error, and it aborts the batch
    /// with no partial output. Zero surviving rows is a success; callers
    /// distinguish it through [`CleanBatch::outcome`].
    pub fn run(&self, source: &ReviewSource) -> Result<CleanBatch> {
        let source_kind = match source {
            ReviewSource::Workbook(_) => SourceKind::Workbook,
            ReviewSource::Flat(_) => SourceKind::Flat,
        };

        if let ReviewSource::Workbook(workbook) = source {
            debug!(stage = ?PipelineStage::Validating, "validating workbook structure");
            let result = WorkbookValidator::validate(workbook);
            if !result.valid {
                let reason = result.reason.unwrap_or_else(|| "invalid workbook".into());
                warn!(stage = ?PipelineStage::Failed, %reason, "aborting batch");
                return Err(PipelineError::StructuralValidation(reason));
            }
        }

        debug!(stage = ?PipelineStage::Unifying, "unifying source rows");
        let raw_rows = SheetUnifier::unify(source)?;
        let rows_unified = raw_rows.len();

        debug!(stage = ?PipelineStage::RatingClean, rows = rows_unified, "cleaning ratings");
        let rated: Vec<RatedRow> = raw_rows
            .into_iter()
            .filter_map(|row: RawRow| {
                self.rating.normalize(row.rating.as_ref()).map(|rating| RatedRow {
                    rating,
                    comment: row.comment,
                })
            })
            .collect();
        let rejected_rating = rows_unified - rated.len();

        debug!(stage = ?PipelineStage::TextClean, rows = rated.len(), "cleaning comments");
        let rated_count = rated.len();
        let texted: Vec<(i64, String)> = rated
            .into_iter()
            .filter_map(|row| {
                TextNormalizer::normalize_token(row.comment.as_ref())
                    .map(|comment| (row.rating, comment))
            })
            .collect();
        let rejected_text = rated_count - texted.len();

        debug!(stage = ?PipelineStage::Filtering, rows = texted.len(), "filtering noise");
        let texted_count = texted.len();
        let reviews: Vec<CanonicalReview> = texted
            .into_iter()
            .filter(|(_, comment)| RelevanceFilter::is_relevant(comment))
            .map(|(rating, comment)| CanonicalReview::new(comment, rating))
            .collect();
        let rejected_relevance = texted_count - reviews.len();

        let diagnostics = BatchDiagnostics {
            source: source_kind,
            rows_unified,
            rejected_rating,
            rejected_text,
            rejected_relevance,
            rows_out: reviews.len(),
            stage: PipelineStage::Done,
            processed_at: Utc::now(),
        };

        info!(
            rows_unified,
            rejected_rating,
            rejected_text,
            rejected_relevance,
            rows_out = reviews.len(),
            "batch complete"
        );

        Ok(CleanBatch {
            reviews,
            diagnostics,
        })
    }
}
