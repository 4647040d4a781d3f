use serde::{Deserialize, Serialize};

/// One actionable improvement tip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub description: String,
}

/// A named sub-score rendered as one bar of the metrics chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailedMetric {
    pub label: String,
    /// 0 to 100
    pub value: f64,
}

/// The structured verdict returned by the model for one submitted text.
///
/// Every field is required on the wire; a payload missing any of them does not
/// deserialize. Scores are range-checked by `parser::parse_analysis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub ai_score: f64,    // 0 to 100
    pub human_score: f64, // 0 to 100
    pub readability: String,
    pub tone: String,
    pub key_findings: Vec<String>,
    pub suggestions: Vec<Suggestion>,
    pub detailed_metrics: Vec<DetailedMetric>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_field_names() {
        let result = AnalysisResult {
            ai_score: 80.0,
            human_score: 20.0,
            readability: "Easy".to_string(),
            tone: "Neutral".to_string(),
            key_findings: vec!["f1".to_string()],
            suggestions: vec![Suggestion {
                title: "T".to_string(),
                description: "D".to_string(),
            }],
            detailed_metrics: vec![DetailedMetric {
                label: "Perplexity".to_string(),
                value: 90.0,
            }],
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["aiScore"], 80.0);
        assert_eq!(value["humanScore"], 20.0);
        assert_eq!(value["keyFindings"][0], "f1");
        assert_eq!(value["suggestions"][0]["title"], "T");
        assert_eq!(value["detailedMetrics"][0]["label"], "Perplexity");
        assert!(value.get("ai_score").is_none());
    }

    #[test]
    fn test_integer_scores_deserialize_as_numbers() {
        let json = r#"{"label": "Burstiness", "value": 42}"#;
        let metric: DetailedMetric = serde_json::from_str(json).unwrap();
        assert_eq!(metric.value, 42.0);
    }

    #[test]
    fn test_suggestion_requires_description() {
        let json = r#"{"title": "Vary sentence length"}"#;
        assert!(serde_json::from_str::<Suggestion>(json).is_err());
    }
}
