use serde::Serialize;

/// A cleaned, validated review ready for sentiment classification.
///
/// Instances can only be produced through [`CanonicalReview::new`], which
/// derives `longitud` from the comment's character count. The comment is
/// expected to be the output of the text normalizer and the rating the output
/// of the rating normalizer; the pipeline is the only producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalReview {
    comentarios: String,
    calificacion: i64,
    longitud: usize,
}

impl CanonicalReview {
    pub fn new(comentarios: String, calificacion: i64) -> Self {
        let longitud = comentarios.chars().count();
        Self {
            comentarios,
            calificacion,
            longitud,
        }
    }

    pub fn comentarios(&self) -> &str {
        &self.comentarios
    }

    pub fn calificacion(&self) -> i64 {
        self.calificacion
    }

    /// Character count of the comment, computed at construction.
    pub fn longitud(&self) -> usize {
        self.longitud
    }
}

/// Sentiment label attached to a review by the external classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sentiment {
    Detractor,
    Neutro,
    Promotor,
}

impl Sentiment {
    /// Maps a classifier score in `{-1, 0, +1}` to its label.
    pub fn from_score(score: i8) -> Option<Self> {
        match score {
            -1 => Some(Sentiment::Detractor),
            0 => Some(Sentiment::Neutro),
            1 => Some(Sentiment::Promotor),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Detractor => "Detractor",
            Sentiment::Neutro => "Neutro",
            Sentiment::Promotor => "Promotor",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A review annotated with its sentiment label.
///
/// Classification composes with the review instead of mutating it, so the
/// canonical record flows onward unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedReview {
    pub review: CanonicalReview,
    pub sentiment: Sentiment,
}

impl ClassifiedReview {
    pub fn new(review: CanonicalReview, sentiment: Sentiment) -> Self {
        Self { review, sentiment }
    }
}
