// Review cleaning pipeline: source shapes, structural validation, and the
// row-level normalization stages.

pub mod batch;
pub mod rating;
pub mod relevance;
pub mod source;
pub mod text;
pub mod unify;
pub mod validate;

pub use batch::{BatchDiagnostics, BatchOutcome, CleanBatch, PipelineStage, ReviewPipeline};
pub use rating::{RatingDomain, RatingNormalizer};
pub use relevance::RelevanceFilter;
pub use source::{RawRow, ReviewSource, Sheet, Workbook};
pub use text::TextNormalizer;
pub use unify::SheetUnifier;
pub use validate::{ValidationResult, WorkbookValidator};
