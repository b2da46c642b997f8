//! Strict parsing of the provider's reply into a [`TextAnalysis`]
//!
//! The reply must be a syntactically valid JSON object on its own: leading or
//! trailing non-JSON text is a parse failure, not something to be salvaged.

use serde_json::Value;

use crate::model::TextAnalysis;
use crate::service::analysis::error::AnalysisError;

/// Parse the raw completion text into a structured analysis
///
/// Missing keys default (`emotion` -> 0, `factuality` -> 0, `notes` -> "").
/// Present keys must coerce: numbers and numeric strings for the scores, a
/// string for the notes.
pub fn parse_reply(raw: &str) -> Result<TextAnalysis, AnalysisError> {
    let reply: Value = serde_json::from_str(raw).map_err(|_| AnalysisError::MalformedReply {
        raw: raw.to_string(),
    })?;

    let reply = reply
        .as_object()
        .ok_or_else(|| AnalysisError::Coercion("reply is not a JSON object".to_string()))?;

    let emotion = match reply.get("emotion") {
        Some(value) => coerce_int(value, "emotion")?,
        None => 0,
    };

    let factuality = match reply.get("factuality") {
        Some(value) => coerce_int(value, "factuality")?,
        None => 0,
    };

    let notes = match reply.get("notes") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            return Err(AnalysisError::Coercion(format!(
                "field 'notes' is not a string: {}",
                other
            )));
        }
        None => String::new(),
    };

    Ok(TextAnalysis {
        emotion,
        factuality,
        notes,
    })
}

/// Coerce a JSON value to an integer
///
/// Floats truncate toward zero; strings are parsed as integers. Anything else
/// (null, bool, array, object) is uncoercible.
fn coerce_int(value: &Value, field: &str) -> Result<i64, AnalysisError> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .ok_or_else(|| {
                AnalysisError::Coercion(format!("field '{}' is out of integer range", field))
            }),
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| {
            AnalysisError::Coercion(format!("field '{}' is a non-numeric string: {:?}", field, s))
        }),
        other => Err(AnalysisError::Coercion(format!(
            "field '{}' is not a number: {}",
            field, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_shape_passes_through_unchanged() {
        let raw = r#"{"emotion": -3, "factuality": -4, "notes": "No obvious argumentative fallacies"}"#;

        let analysis = parse_reply(raw).unwrap();

        assert_eq!(analysis.emotion, -3);
        assert_eq!(analysis.factuality, -4);
        assert_eq!(analysis.notes, "No obvious argumentative fallacies");
    }

    #[test]
    fn missing_keys_default() {
        let analysis = parse_reply("{}").unwrap();

        assert_eq!(analysis.emotion, 0);
        assert_eq!(analysis.factuality, 0);
        assert_eq!(analysis.notes, "");
    }

    #[test]
    fn partially_missing_keys_default_individually() {
        let analysis = parse_reply(r#"{"emotion": 2}"#).unwrap();

        assert_eq!(analysis.emotion, 2);
        assert_eq!(analysis.factuality, 0);
        assert_eq!(analysis.notes, "");
    }

    #[test]
    fn numeric_strings_coerce() {
        let analysis = parse_reply(r#"{"emotion": "3", "factuality": "-5"}"#).unwrap();

        assert_eq!(analysis.emotion, 3);
        assert_eq!(analysis.factuality, -5);
    }

    #[test]
    fn floats_truncate_toward_zero() {
        let analysis = parse_reply(r#"{"emotion": 3.9, "factuality": -2.7}"#).unwrap();

        assert_eq!(analysis.emotion, 3);
        assert_eq!(analysis.factuality, -2);
    }

    #[test]
    fn non_numeric_string_is_a_coercion_error() {
        let result = parse_reply(r#"{"emotion": "strong", "factuality": 1}"#);

        assert!(matches!(result, Err(AnalysisError::Coercion(_))));
    }

    #[test]
    fn null_score_is_a_coercion_error() {
        let result = parse_reply(r#"{"emotion": null}"#);

        assert!(matches!(result, Err(AnalysisError::Coercion(_))));
    }

    #[test]
    fn non_string_notes_is_a_coercion_error() {
        let result = parse_reply(r#"{"notes": ["ad hominem"]}"#);

        assert!(matches!(result, Err(AnalysisError::Coercion(_))));
    }

    #[test]
    fn non_object_json_is_a_coercion_error() {
        let result = parse_reply(r#"[1, 2, 3]"#);

        assert!(matches!(result, Err(AnalysisError::Coercion(_))));
    }

    #[test]
    fn invalid_json_carries_raw_text_verbatim() {
        let raw = r#"Sure, here is the analysis: {"emotion": 2}"#;

        match parse_reply(raw) {
            Err(AnalysisError::MalformedReply { raw: carried }) => assert_eq!(carried, raw),
            other => panic!("expected MalformedReply, got {:?}", other),
        }
    }

    #[test]
    fn trailing_garbage_is_a_parse_failure() {
        let raw = r#"{"emotion": 2} and that's my answer"#;

        assert!(matches!(
            parse_reply(raw),
            Err(AnalysisError::MalformedReply { .. })
        ));
    }
}
