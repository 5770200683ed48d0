use crate::viz::columns::{ColumnKind, ColumnProfile};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSuggestion {
    pub chart_type: String,
    pub title: String,
    pub reasoning: String,
    pub priority: u32,
    pub config: Value,
}

fn reasoning_for(chart_type: &str) -> &'static str {
    match chart_type {
        "line" => "Time-based data is best displayed as a line chart to show trends over time",
        "bar" => "Bar charts effectively compare values across periods or categories",
        "pie" => "Pie charts show proportional relationships for count data",
        "scatter" => "Scatter plots reveal correlations between numeric fields",
        "table" => "Table format preserves all data details for analysis",
        _ => "Versatile choice for most data comparisons",
    }
}

/// Recommend chart types for a profiled column set.
///
/// A fixed decision table evaluated top to bottom; the first matching row
/// supplies the ordered chart list. Always yields at least one suggestion,
/// with a raw table view when there is nothing to chart.
pub fn suggest(profiles: &[ColumnProfile]) -> Vec<ChartSuggestion> {
    let date = profiles.iter().find(|p| p.kind == ColumnKind::DateLike);
    let numerics: Vec<&ColumnProfile> = profiles
        .iter()
        .filter(|p| p.kind == ColumnKind::Numeric)
        .collect();
    let categorical = profiles.iter().find(|p| p.kind == ColumnKind::Categorical);

    let has_count_column = profiles.iter().any(|p| p.name.to_lowercase().contains("count"));
    let has_aggregate_column = profiles.iter().any(|p| {
        let name = p.name.to_lowercase();
        ["sum", "avg", "total", "mean"].iter().any(|kw| name.contains(kw))
    });

    let charts: Vec<(&str, String)> = match (date, numerics.first(), categorical) {
        (Some(d), Some(n), _) => vec![
            ("line", format!("{} over {}", n.name, d.name)),
            ("bar", format!("{} per {}", n.name, d.name)),
        ],
        (None, Some(n), Some(c)) if has_count_column => vec![
            ("bar", format!("{} by {}", n.name, c.name)),
            ("pie", format!("Composition by {}", c.name)),
        ],
        (None, Some(n), Some(c)) if has_aggregate_column => vec![
            ("bar", format!("{} by {}", n.name, c.name)),
            ("scatter", format!("{} vs {}", n.name, c.name)),
        ],
        (None, Some(n), None) if numerics.len() >= 2 => {
            vec![("scatter", format!("{} vs {}", numerics[1].name, n.name))]
        }
        _ if !profiles.is_empty() => vec![
            ("bar", "Data comparison".to_string()),
            ("table", "Data table".to_string()),
        ],
        _ => vec![("table", "Data table".to_string())],
    };

    charts
        .into_iter()
        .enumerate()
        .map(|(i, (chart_type, title))| ChartSuggestion {
            chart_type: chart_type.to_string(),
            title,
            reasoning: reasoning_for(chart_type).to_string(),
            priority: i as u32 + 1,
            config: sample_figure(chart_type),
        })
        .collect()
}

/// Static plotly-style figure stub for a chart type, suitable for rendering
/// a placeholder on the client.
pub fn sample_figure(chart_type: &str) -> Value {
    match chart_type {
        "line" => json!({
            "data": [{
                "type": "scatter",
                "mode": "lines+markers",
                "x": ["2025-01", "2025-02", "2025-03", "2025-04"],
                "y": [45000, 52000, 48000, 58000],
                "name": "Trend",
                "line": {"width": 3},
            }],
            "layout": {
                "title": "Trend Over Time",
                "xaxis": {"title": "Period"},
                "yaxis": {"title": "Value"},
            },
        }),
        "pie" => json!({
            "data": [{
                "type": "pie",
                "labels": ["Category A", "Category B", "Category C", "Category D"],
                "values": [30, 25, 25, 20],
            }],
            "layout": {"title": "Distribution Breakdown"},
        }),
        "scatter" => json!({
            "data": [{
                "type": "scatter",
                "mode": "markers",
                "x": [1, 2, 3, 4, 5],
                "y": [10, 20, 15, 25, 18],
                "marker": {"size": 10},
            }],
            "layout": {
                "title": "Correlation Analysis",
                "xaxis": {"title": "X Variable"},
                "yaxis": {"title": "Y Variable"},
            },
        }),
        "table" => json!({
            "data": [{"type": "table"}],
            "layout": {"title": "Data Table"},
        }),
        _ => json!({
            "data": [{
                "type": "bar",
                "x": ["Jan", "Feb", "Mar", "Apr"],
                "y": [45000, 52000, 48000, 58000],
                "name": "Values",
            }],
            "layout": {
                "title": "Comparison",
                "xaxis": {"title": "Category"},
                "yaxis": {"title": "Value"},
            },
        }),
    }
}
