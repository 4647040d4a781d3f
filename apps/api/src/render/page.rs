//! Full-page HTML rendering. A pure function of `PageView`.

use chrono::{Datelike, Utc};

use crate::analysis::input::{char_count, meets_minimum, MAX_CHARS, MIN_CHARS};
use crate::analysis::models::{AnalysisResult, Suggestion};
use crate::render::chart::{render_gauge, render_metric_chart, EMPHASIS_COLOR, HUMAN_COLOR};
use crate::render::escape::escape_html;

const PLACEHOLDER: &str = "Paste your text here (min 50 characters)...";
const SUBMIT_LABEL: &str = "Check Content";
const PENDING_LABEL: &str = "Analyzing Patterns...";

/// Everything the page shows. There is no other UI state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageView {
    pub text: String,
    pub analyzing: bool,
    pub error: Option<String>,
    pub result: Option<AnalysisResult>,
}

impl PageView {
    pub fn submit_enabled(&self) -> bool {
        !self.analyzing && meets_minimum(&self.text)
    }
}

pub fn render_page(view: &PageView) -> String {
    let layout = if view.result.is_some() {
        "layout with-result"
    } else {
        "layout"
    };
    let results = view.result.as_ref().map(render_results).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Veritas AI | AI Content Detector</title>
<style>{STYLE}</style>
</head>
<body>
<header><div class="brand"><span class="logo">V</span><h1>Veritas AI</h1></div></header>
<main class="{layout}">
{input}
{results}
</main>
{footer}
<script>{SCRIPT}</script>
</body>
</html>
"#,
        input = render_input(view),
        footer = render_footer(),
    )
}

fn render_input(view: &PageView) -> String {
    let text = escape_html(&view.text);
    let count = char_count(&view.text);
    let disabled = if view.submit_enabled() { "" } else { " disabled" };
    let label = if view.analyzing {
        PENDING_LABEL
    } else {
        SUBMIT_LABEL
    };
    let clear = if view.text.is_empty() {
        String::new()
    } else {
        r#"<form method="post" action="/reset" class="clear-form"><button type="submit" class="clear">Clear</button></form>"#
            .to_string()
    };
    let error = view
        .error
        .as_deref()
        .map(|e| format!(r#"<div class="error" role="alert">{}</div>"#, escape_html(e)))
        .unwrap_or_default();

    format!(
        r#"<section class="input">
  <h2>AI Content Detector</h2>
  <p class="lede">Paste your text below to analyze its origin, quality, and human-like characteristics.</p>
  <form method="post" action="/" id="analyze-form">
    <textarea name="text" id="text" maxlength="{MAX_CHARS}" data-min="{MIN_CHARS}" placeholder="{PLACEHOLDER}">
{text}</textarea>
    <div class="counter"><span id="char-count">{count}</span> / {MAX_CHARS} characters</div>
    {error}
    <button type="submit" id="submit" class="submit" data-pending-label="{PENDING_LABEL}"{disabled}>{label}</button>
  </form>
  {clear}
</section>"#
    )
}

fn render_results(result: &AnalysisResult) -> String {
    let findings: String = result
        .key_findings
        .iter()
        .enumerate()
        .map(|(i, finding)| {
            format!(
                r#"<li class="finding"><span class="index">{}</span><p>{}</p></li>"#,
                i + 1,
                escape_html(finding)
            )
        })
        .collect();
    let suggestions: String = result.suggestions.iter().map(render_suggestion).collect();

    format!(
        r#"<section class="results">
  <div class="gauges">
    {ai_gauge}
    {human_gauge}
  </div>
  <div class="card metrics">
    <div class="metrics-head">
      <h3>Detailed Metrics</h3>
      <span class="label">Readability: {readability}</span>
      <span class="label">Tone: {tone}</span>
    </div>
    {chart}
  </div>
  <div class="findings">
    <h3>Key Observations</h3>
    <ol>{findings}</ol>
  </div>
  <div class="tips">
    <h3>Optimization Tips</h3>
    <ol>{suggestions}</ol>
  </div>
</section>"#,
        ai_gauge = render_gauge("ai-gauge", "AI Probability", result.ai_score, EMPHASIS_COLOR),
        human_gauge = render_gauge("human-gauge", "Human Probability", result.human_score, HUMAN_COLOR),
        readability = escape_html(&result.readability),
        tone = escape_html(&result.tone),
        chart = render_metric_chart(&result.detailed_metrics),
    )
}

fn render_suggestion(suggestion: &Suggestion) -> String {
    format!(
        r#"<li class="tip"><strong>{}</strong><p>{}</p></li>"#,
        escape_html(&suggestion.title),
        escape_html(&suggestion.description)
    )
}

fn render_footer() -> String {
    format!(
        r#"<footer><span>Veritas AI</span><p>&copy; {} Veritas AI Content Checker. Powered by Gemini.</p></footer>"#,
        Utc::now().year()
    )
}

const STYLE: &str = r#"
body{margin:0;font-family:system-ui,sans-serif;background:#F8F9FA;color:#1A1A1A}
header{background:#fff;border-bottom:1px solid #E5E7EB;padding:0 1rem;height:4rem;display:flex;align-items:center}
.brand{display:flex;gap:.5rem;align-items:center}.brand h1{font-size:1.25rem;margin:0}
.logo{width:2rem;height:2rem;border-radius:.5rem;background:#4F46E5;color:#fff;display:flex;align-items:center;justify-content:center;font-weight:700}
.layout{max-width:56rem;margin:0 auto;padding:3rem 1rem}
.layout.with-result{max-width:80rem;display:grid;grid-template-columns:5fr 7fr;gap:3rem}
textarea{width:100%;height:400px;box-sizing:border-box;padding:1.5rem;border:1px solid #E5E7EB;border-radius:1rem;font-size:1.1rem;resize:none}
.counter{text-align:right;font-size:.75rem;color:#9CA3AF;margin:.5rem 0}
.error{padding:1rem;background:#FEF2F2;border:1px solid #FEE2E2;border-radius:.75rem;color:#DC2626;font-size:.875rem;margin-bottom:1rem}
.submit{width:100%;padding:1rem;border:0;border-radius:.75rem;background:#4F46E5;color:#fff;font-weight:600;cursor:pointer}
.submit:disabled{background:#A5B4FC;cursor:not-allowed}
.clear{background:none;border:0;color:#9CA3AF;cursor:pointer;font-size:.75rem}.clear:hover{color:#EF4444}
.card{background:#fff;border:1px solid #E5E7EB;border-radius:1rem;padding:1.5rem}
.gauges{display:grid;grid-template-columns:1fr 1fr;gap:1rem;margin-bottom:2rem}
.gauge-title{display:block;font-size:.8rem;font-weight:600;text-transform:uppercase;color:#6B7280}
.gauge-value{display:block;font-size:3rem;font-weight:700;margin:.5rem 0}
.track{background:#F1F5F9;border-radius:999px;height:.5rem;overflow:hidden;flex:1}
.gauge-fill,.metric-bar{height:100%}
.metrics-head{display:flex;gap:1rem;align-items:baseline;flex-wrap:wrap}.label{font-size:.75rem;color:#6B7280}
.metric-row{display:flex;align-items:center;gap:.75rem;margin:.75rem 0}
.metric-row .track{height:1.5rem;border-radius:0 4px 4px 0}
.metric-label{width:8rem;font-size:.75rem;font-weight:500;color:#64748B}.metric-value{width:2.5rem;font-size:.75rem}
.findings ol,.tips ol{list-style:none;padding:0}
.finding{display:flex;gap:1rem;background:#fff;border:1px solid #E5E7EB;border-radius:.75rem;padding:1rem;margin-bottom:.75rem}
.index{width:1.25rem;height:1.25rem;border-radius:999px;background:#EEF2FF;color:#4F46E5;font-size:.65rem;font-weight:700;display:flex;align-items:center;justify-content:center;flex-shrink:0}
.tips{background:#312E81;color:#fff;border-radius:1rem;padding:1.5rem;margin-top:2rem}
.tip strong{text-transform:uppercase;letter-spacing:.1em;font-size:.8rem;color:#C7D2FE}
footer{border-top:1px solid #E5E7EB;background:#fff;padding:3rem 1rem;margin-top:6rem;display:flex;justify-content:space-between;color:#9CA3AF;font-size:.8rem}
"#;

/// Keeps the counter and the submit button in step with the textarea, and locks
/// the button while the single analysis request is in flight.
const SCRIPT: &str = r#"
(function(){
  var form=document.getElementById('analyze-form');
  var text=document.getElementById('text');
  var count=document.getElementById('char-count');
  var submit=document.getElementById('submit');
  var min=parseInt(text.dataset.min,10);
  var pending=false;
  function sync(){
    count.textContent=text.value.length;
    submit.disabled=pending||text.value.trim().length===0||text.value.length<min;
  }
  text.addEventListener('input',sync);
  form.addEventListener('submit',function(e){
    if(pending||submit.disabled){e.preventDefault();return;}
    pending=true;
    submit.disabled=true;
    submit.textContent=submit.dataset.pendingLabel;
  });
  sync();
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::DetailedMetric;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            ai_score: 80.0,
            human_score: 20.0,
            readability: "Easy".to_string(),
            tone: "Neutral".to_string(),
            key_findings: vec!["Uniform sentence length".to_string(), "Few idioms".to_string()],
            suggestions: vec![Suggestion {
                title: "Vary rhythm".to_string(),
                description: "Mix short and long sentences.".to_string(),
            }],
            detailed_metrics: vec![DetailedMetric {
                label: "Perplexity".to_string(),
                value: 90.0,
            }],
        }
    }

    #[test]
    fn test_empty_page_has_disabled_submit_and_no_results() {
        let html = render_page(&PageView::default());
        assert!(html.contains(r#"id="submit" class="submit" data-pending-label="Analyzing Patterns..." disabled>Check Content</button>"#));
        assert!(!html.contains("class=\"results\""));
        assert!(!html.contains("action=\"/reset\""), "no clear action without input");
        assert!(html.contains(r#"maxlength="5000""#));
    }

    #[test]
    fn test_submit_enabled_at_minimum_length() {
        let view = PageView {
            text: "a".repeat(MIN_CHARS),
            ..Default::default()
        };
        assert!(view.submit_enabled());
        let html = render_page(&view);
        assert!(html.contains(">Check Content</button>"));
        assert!(!html.contains(" disabled>"));
        assert!(html.contains(r#"<span id="char-count">50</span>"#));
        assert!(html.contains(r#"action="/reset""#));
    }

    #[test]
    fn test_pending_view_disables_submit() {
        let view = PageView {
            text: "a".repeat(200),
            analyzing: true,
            ..Default::default()
        };
        assert!(!view.submit_enabled());
        assert!(render_page(&view).contains(" disabled>Analyzing Patterns...</button>"));
    }

    #[test]
    fn test_result_sections_rendered() {
        let view = PageView {
            text: "a".repeat(60),
            result: Some(sample_result()),
            ..Default::default()
        };
        let html = render_page(&view);
        assert!(html.contains("layout with-result"));
        assert!(html.contains(r#"id="ai-gauge""#));
        assert!(html.contains(">80%<"));
        assert!(html.contains(">20%<"));
        assert!(html.contains("Readability: Easy"));
        assert!(html.contains("Tone: Neutral"));
        assert!(html.contains(r#"<span class="index">1</span><p>Uniform sentence length</p>"#));
        assert!(html.contains(r#"<span class="index">2</span><p>Few idioms</p>"#));
        assert!(html.contains("<strong>Vary rhythm</strong><p>Mix short and long sentences.</p>"));
        assert!(html.contains("width:90%;background:#4F46E5"));
    }

    #[test]
    fn test_error_rendered_and_input_preserved() {
        let view = PageView {
            text: "short <text>".to_string(),
            error: Some("Please enter at least 50 characters for a reliable analysis.".to_string()),
            ..Default::default()
        };
        let html = render_page(&view);
        assert!(html.contains(r#"role="alert">Please enter at least 50 characters"#));
        assert!(html.contains(">\nshort &lt;text&gt;</textarea>"));
    }

    #[test]
    fn test_leading_newline_survives_textarea_parsing() {
        let view = PageView {
            text: "\nIntro line after a blank line".to_string(),
            ..Default::default()
        };
        // The parser drops the first LF after <textarea>, so the text's own newline must follow it.
        assert!(render_page(&view).contains(">\n\nIntro line after a blank line</textarea>"));
    }

    #[test]
    fn test_model_strings_are_escaped() {
        let mut result = sample_result();
        result.key_findings = vec!["<img src=x onerror=alert(1)>".to_string()];
        result.tone = "\"quoted\"".to_string();
        let html = render_page(&PageView {
            result: Some(result),
            ..Default::default()
        });
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("Tone: &quot;quoted&quot;"));
    }

    #[test]
    fn test_footer_carries_current_year() {
        let html = render_page(&PageView::default());
        assert!(html.contains(&format!("&copy; {} Veritas AI", Utc::now().year())));
    }
}
