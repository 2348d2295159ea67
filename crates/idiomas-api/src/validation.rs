use validator::{Validate, ValidationErrors};

use crate::error::ApiError;

/// Run the `validator` rules on a request payload.
///
/// # Examples
/// ```
/// use idiomas_api::{review::model::ReviewRequest, validation::validate_payload};
///
/// let ok = ReviewRequest { word_id: "w1".to_string(), grade: 2 };
/// assert!(validate_payload(&ok).is_ok());
///
/// let bad = ReviewRequest { word_id: "w1".to_string(), grade: 9 };
/// assert!(validate_payload(&bad).is_err());
/// ```
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), ApiError> {
    payload
        .validate()
        .map_err(|errors| ApiError::Validation(describe(&errors)))
}

/// Flatten field errors into one message, e.g. `grade: must be between 0 and 3`.
fn describe(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: invalid value ({})", e.code),
            })
        })
        .collect();

    messages.sort();
    messages.join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::model::ReviewRequest;

    #[test]
    fn test_validate_grade_range() {
        for grade in 0..=3 {
            let request = ReviewRequest {
                word_id: "w1".to_string(),
                grade,
            };
            assert!(validate_payload(&request).is_ok());
        }

        for grade in [-1, 4, 100] {
            let request = ReviewRequest {
                word_id: "w1".to_string(),
                grade,
            };
            let err = validate_payload(&request).unwrap_err();
            assert!(matches!(err, ApiError::Validation(ref m) if m.starts_with("grade:")));
        }
    }
}
