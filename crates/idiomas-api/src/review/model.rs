use idiomas_catalog::Word;
use serde::{Deserialize, Deserializer, Serialize, de};
use validator::Validate;

/// Review submission for a single card
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReviewRequest {
    /// Reviewed word, echoed back without lookup
    pub word_id: String,
    /// 0 again, 1 hard, 2 good, 3 easy
    #[serde(deserialize_with = "integral")]
    #[validate(range(min = 0, max = 3, message = "must be between 0 and 3"))]
    pub grade: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub word_id: String,
    pub next_due_seconds: u64,
    pub next_word: Word,
}

/// Accept integers and floats without a fractional part (`3.0`).
fn integral<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Number {
        Int(i64),
        Float(f64),
    }

    match Number::deserialize(deserializer)? {
        Number::Int(n) => Ok(n),
        Number::Float(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
            Ok(f as i64)
        }
        Number::Float(f) => Err(de::Error::custom(format!(
            "invalid value: {f}, expected an integer"
        ))),
    }
}
