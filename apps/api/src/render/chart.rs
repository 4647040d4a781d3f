//! Score gauges and the horizontal metrics bar chart.

use crate::analysis::models::DetailedMetric;
use crate::render::escape::escape_html;

/// Metrics strictly above this value get the emphasized bar color.
pub const HIGH_METRIC_THRESHOLD: f64 = 70.0;
pub const EMPHASIS_COLOR: &str = "#4F46E5";
pub const NEUTRAL_COLOR: &str = "#94A3B8";
pub const HUMAN_COLOR: &str = "#059669";

pub fn metric_color(value: f64) -> &'static str {
    if value > HIGH_METRIC_THRESHOLD {
        EMPHASIS_COLOR
    } else {
        NEUTRAL_COLOR
    }
}

/// Formats a score the way it is displayed: `80` for whole numbers, `80.5` otherwise.
pub fn format_score(value: f64) -> String {
    format!("{value}")
}

/// Bar width in percent on the fixed 0-100 axis.
fn bar_width(value: f64) -> String {
    format_score(value.clamp(0.0, 100.0))
}

/// A percentage gauge card: big figure plus a proportional bar.
pub fn render_gauge(id: &str, title: &str, value: f64, color: &str) -> String {
    let score = format_score(value);
    let width = bar_width(value);
    format!(
        r#"<div class="card gauge" id="{id}">
  <span class="gauge-title">{title}</span>
  <span class="gauge-value" style="color:{color}">{score}%</span>
  <div class="track"><div class="gauge-fill" style="width:{width}%;background:{color}"></div></div>
</div>"#
    )
}

pub fn render_metric_chart(metrics: &[DetailedMetric]) -> String {
    let rows: String = metrics.iter().map(render_metric_row).collect();
    format!(r#"<div class="metric-chart">{rows}</div>"#)
}

fn render_metric_row(metric: &DetailedMetric) -> String {
    let label = escape_html(&metric.label);
    let color = metric_color(metric.value);
    let width = bar_width(metric.value);
    let value = format_score(metric.value);
    format!(
        r#"
  <div class="metric-row" data-label="{label}">
    <span class="metric-label">{label}</span>
    <div class="track"><div class="metric-bar" style="width:{width}%;background:{color}" title="{label}: {value}"></div></div>
    <span class="metric-value">{value}</span>
  </div>"#
    )
}
