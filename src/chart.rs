use std::path::Path;

use crate::errors::BenchError;
use crate::report::Reporter;
use crate::types::{ResultSet, Stats};

pub const WIDTH: f64 = 600.0;
pub const BAR_HEIGHT: f64 = 40.0;
pub const GAP: f64 = 20.0;
pub const MARGIN_LEFT: f64 = 150.0;
pub const MARGIN_RIGHT: f64 = 50.0;
pub const MARGIN_TOP: f64 = 50.0;
pub const MARGIN_TOP_WITH_SUBTITLE: f64 = 80.0;
pub const MARGIN_BOTTOM: f64 = 30.0;
pub const TITLE: &str = "Execution Time (Lower is Better)";
pub const PALETTE: [&str; 5] = ["#3498db", "#2ecc71", "#9b59b6", "#e74c3c", "#f1c40f"];

/// Named values to plot, in file order, plus the auxiliary stats.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    pub entries: Vec<(String, f64)>,
    pub stats: Stats,
}

impl ChartData {
    /// Plot each measurement's average. A repeated name keeps its first
    /// position and takes the last value.
    pub fn from_result_set(set: ResultSet) -> Self {
        let mut entries: Vec<(String, f64)> = Vec::with_capacity(set.results.len());
        for m in set.results {
            match entries.iter_mut().find(|(name, _)| *name == m.name) {
                Some(existing) => existing.1 = m.avg,
                None => entries.push((m.name, m.avg)),
            }
        }
        ChartData {
            entries,
            stats: set.stats,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One laid-out horizontal bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub name: String,
    pub value: f64,
    pub y: f64,
    pub width: f64,
    pub color: &'static str,
}

/// Load a results file for charting. Failures are reported and yield no entries.
pub fn parse_results(path: &Path, reporter: &mut dyn Reporter) -> ChartData {
    match ResultSet::read_from(path) {
        Ok(set) => ChartData::from_result_set(set),
        Err(e) => {
            reporter.error(&format!("Error reading JSON: {}", e));
            ChartData::default()
        }
    }
}

/// Stats rendered as `key: value` pairs, or `None` when there are none.
pub fn subtitle(stats: &Stats) -> Option<String> {
    if stats.is_empty() {
        return None;
    }
    let parts: Vec<String> = stats
        .iter()
        .map(|(k, v)| match v {
            serde_json::Value::String(s) => format!("{}: {}", k, s),
            other => format!("{}: {}", k, other),
        })
        .collect();
    Some(parts.join(", "))
}

fn margin_top(data: &ChartData) -> f64 {
    if subtitle(&data.stats).is_some() {
        MARGIN_TOP_WITH_SUBTITLE
    } else {
        MARGIN_TOP
    }
}

/// Sort ascending by value and size each bar against the largest value.
pub fn layout_bars(data: &ChartData) -> Vec<Bar> {
    let mut order: Vec<&(String, f64)> = data.entries.iter().collect();
    order.sort_by(|a, b| a.1.total_cmp(&b.1));

    let mut max_val = data.entries.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    if max_val == 0.0 {
        max_val = 1.0;
    }
    let scale = (WIDTH - MARGIN_LEFT - MARGIN_RIGHT) / max_val;

    let top = margin_top(data);
    order
        .into_iter()
        .enumerate()
        .map(|(i, (name, value))| Bar {
            name: name.clone(),
            value: *value,
            y: top + (BAR_HEIGHT + GAP) * i as f64,
            width: value * scale,
            color: PALETTE[i % PALETTE.len()],
        })
        .collect()
}

pub fn chart_height(data: &ChartData) -> f64 {
    margin_top(data) + (BAR_HEIGHT + GAP) * data.entries.len() as f64 + MARGIN_BOTTOM
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the bar chart as an SVG document.
pub fn render_svg(data: &ChartData) -> String {
    let height = chart_height(data);
    let center = WIDTH / 2.0;

    let mut svg = vec![
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
            WIDTH, height
        ),
        r#"<rect width="100%" height="100%" fill="white"/>"#.to_string(),
        format!(
            r#"<text x="{}" y="30" text-anchor="middle" font-family="sans-serif" font-size="16" font-weight="bold">{}</text>"#,
            center, TITLE
        ),
    ];

    if let Some(sub) = subtitle(&data.stats) {
        svg.push(format!(
            r##"<text x="{}" y="55" text-anchor="middle" font-family="sans-serif" font-size="14" fill="#555">{}</text>"##,
            center,
            escape_xml(&sub)
        ));
    }

    for bar in layout_bars(data) {
        let text_y = bar.y + BAR_HEIGHT / 2.0 + 5.0;
        svg.push(format!(
            r#"<text x="{}" y="{}" text-anchor="end" font-family="sans-serif" font-size="14">{}</text>"#,
            MARGIN_LEFT - 10.0,
            text_y,
            escape_xml(&bar.name)
        ));
        svg.push(format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" rx="4"/>"#,
            MARGIN_LEFT, bar.y, bar.width, BAR_HEIGHT, bar.color
        ));
        svg.push(format!(
            r#"<text x="{}" y="{}" font-family="sans-serif" font-size="12">{:.1} ms</text>"#,
            MARGIN_LEFT + bar.width + 10.0,
            text_y,
            bar.value
        ));
    }

    svg.push("</svg>".to_string());
    svg.join("\n")
}

pub fn write_svg(data: &ChartData, path: &Path) -> Result<(), BenchError> {
    std::fs::write(path, render_svg(data)).map_err(|source| BenchError::ChartWrite {
        path: path.to_path_buf(),
        source,
    })
}
