use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Closed domain of accepted ratings.
///
/// This deployment uses the 0-10 scale of the source surveys (NPS-style
/// Detractor/Neutro/Promotor reporting downstream). Deployments on a 1-5
/// corpus override it through the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingDomain {
    pub min: i64,
    pub max: i64,
}

impl Default for RatingDomain {
    fn default() -> Self {
        Self { min: 0, max: 10 }
    }
}

impl RatingDomain {
    pub fn contains(&self, rating: i64) -> bool {
        (self.min..=self.max).contains(&rating)
    }
}

/// Coerces messy rating tokens into bounded integers.
///
/// Tokens like `"5 puntos"` keep only the prefix before the first whitespace
/// run; fractional values are truncated toward zero, never rounded. Anything
/// absent, non-numeric, or outside the domain rejects the row.
#[derive(Debug, Clone)]
pub struct RatingNormalizer {
    domain: RatingDomain,
}

impl RatingNormalizer {
    pub fn new(domain: RatingDomain) -> Self {
        Self { domain }
    }

    pub fn domain(&self) -> RatingDomain {
        self.domain
    }

    pub fn normalize(&self, token: Option<&Value>) -> Option<i64> {
        let token = token?;
        let text = match token {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => return None,
        };

        let prefix = text.split_whitespace().next()?;
        let parsed: f64 = prefix.parse().ok()?;
        if !parsed.is_finite() {
            return None;
        }

        let rating = parsed.trunc() as i64;
        self.domain.contains(rating).then_some(rating)
    }
}

impl Default for RatingNormalizer {
    fn default() -> Self {
        Self::new(RatingDomain::default())
    }
}
