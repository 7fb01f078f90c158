use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One analysis run's result, as returned by the analysis service.
///
/// Every field is optional on the wire. Absence, `null`, or a wrong-typed
/// value all decode to the field's default; input shape problems are never
/// surfaced as errors.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    /// Resume-to-job match score, intended range 0-100.
    #[serde(deserialize_with = "lenient_score")]
    pub ats_score: f32,
    /// Skills the job asks for that the resume lacks.
    #[serde(deserialize_with = "lenient_strings")]
    pub missing_skills_job: Vec<String>,
    /// Ordered improvement suggestions.
    #[serde(deserialize_with = "lenient_strings")]
    pub suggestions: Vec<String>,
    /// Technical skills detected in the resume.
    #[serde(deserialize_with = "lenient_strings")]
    pub skills_found: Vec<String>,
    /// Soft skills detected in the resume.
    #[serde(deserialize_with = "lenient_strings")]
    pub soft_skills_found: Vec<String>,
    /// Extracted resume text, already truncated server-side.
    #[serde(deserialize_with = "lenient_text")]
    pub raw_text_preview: String,
}

impl AnalysisResult {
    /// Decode an analysis payload from JSON text.
    ///
    /// Accepts both the bare analysis object and the `{"analysis": {...}}`
    /// envelope the service wraps responses in.
    pub fn from_json_str(payload: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(payload)?;
        Ok(Self::from_json_value(value))
    }

    /// Decode an already-parsed JSON value, unwrapping the response
    /// envelope when present. Non-object input yields the default result.
    pub fn from_json_value(value: Value) -> Self {
        let inner = match value {
            Value::Object(mut map) => match map.remove("analysis") {
                Some(Value::Object(inner)) => Value::Object(inner),
                _ => Value::Object(map),
            },
            other => other,
        };
        serde_json::from_value(inner).unwrap_or_default()
    }
}

fn lenient_score<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(number) => Ok(number.as_f64().unwrap_or(0.0) as f32),
        other => {
            if !other.is_null() {
                log::warn!("ats_score has non-numeric type; treating as 0");
            }
            Ok(0.0)
        }
    }
}

fn lenient_strings<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let Value::Array(items) = value else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(text) => Some(text),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        })
        .collect())
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(text) => Ok(text),
        _ => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::AnalysisResult;
    use serde_json::json;

    #[test]
    fn missing_fields_decode_to_defaults() {
        let result = AnalysisResult::from_json_str("{}").unwrap();
        assert_eq!(result, AnalysisResult::default());
        assert_eq!(result.ats_score, 0.0);
        assert!(result.suggestions.is_empty());
        assert!(result.raw_text_preview.is_empty());
    }

    #[test]
    fn bare_and_enveloped_shapes_decode_identically() {
        let bare = r#"{"ats_score": 57, "skills_found": ["Python", "Go"]}"#;
        let wrapped = r#"{"analysis": {"ats_score": 57, "skills_found": ["Python", "Go"]}}"#;
        let from_bare = AnalysisResult::from_json_str(bare).unwrap();
        let from_wrapped = AnalysisResult::from_json_str(wrapped).unwrap();
        assert_eq!(from_bare, from_wrapped);
        assert_eq!(from_bare.ats_score, 57.0);
        assert_eq!(from_bare.skills_found, vec!["Python", "Go"]);
    }

    #[test]
    fn wrong_typed_fields_degrade_without_error() {
        let payload = json!({
            "ats_score": "not a number",
            "skills_found": "Python",
            "suggestions": [1, "add metrics", null],
            "raw_text_preview": 42,
        });
        let result = AnalysisResult::from_json_value(payload);
        assert_eq!(result.ats_score, 0.0);
        assert!(result.skills_found.is_empty());
        assert_eq!(result.suggestions, vec!["1", "add metrics"]);
        assert!(result.raw_text_preview.is_empty());
    }

    #[test]
    fn non_object_payload_yields_default() {
        assert_eq!(
            AnalysisResult::from_json_value(serde_json::Value::Null),
            AnalysisResult::default()
        );
        let result = AnalysisResult::from_json_str("[1, 2, 3]").unwrap();
        assert_eq!(result, AnalysisResult::default());
    }

    #[test]
    fn fractional_scores_survive_decoding() {
        let result = AnalysisResult::from_json_str(r#"{"ats_score": 57.5}"#).unwrap();
        assert!((result.ats_score - 57.5).abs() < f32::EPSILON);
    }
}
