//! Text table and HTML chart for benchmark rows.

use std::fs;
use std::path::Path;

use serde_json::json;

use crate::bench::BenchRow;
use crate::config::BenchConfig;
use crate::error::BenchError;

const CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js";

/// Header of the console table, followed by a separator line.
pub fn table_header() -> String {
    format!(
        "{:<12}{:<16}{:<16}{:<16}\n{}",
        "Size",
        "Moore (us)",
        "Sort (us)",
        "Brute (us)",
        "-".repeat(60)
    )
}

/// One line of the console table. Brute force shows `N/A` above the cap.
pub fn table_row(row: &BenchRow) -> String {
    let brute = match row.brute_us {
        Some(us) => format!("{us:.2}"),
        None => "N/A".to_string(),
    };
    format!(
        "{:<12}{:<16}{:<16}{:<16}",
        row.size,
        format!("{:.2}", row.moore_us),
        format!("{:.2}", row.sort_us),
        brute
    )
}

/// Formats `n` with comma thousands separators.
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[inline]
fn round2(us: f64) -> f64 {
    (us * 100.0).round() / 100.0
}

/// Renders a self-contained HTML page with a log-scale line chart of `rows`.
///
/// Only the chart library is loaded from a CDN; the data is inlined.
pub fn render_html(rows: &[BenchRow], config: &BenchConfig) -> Result<String, BenchError> {
    let labels: Vec<String> = rows.iter().map(|r| r.size.to_string()).collect();
    let moore: Vec<f64> = rows.iter().map(|r| round2(r.moore_us)).collect();
    let sort: Vec<f64> = rows.iter().map(|r| round2(r.sort_us)).collect();
    let brute: Vec<Option<f64>> = rows.iter().map(|r| r.brute_us.map(round2)).collect();

    let datasets = json!([
        {
            "label": "Moore voting (us)",
            "data": moore,
            "borderColor": "#e65c2f",
            "backgroundColor": "rgba(230,92,47,0.15)",
            "tension": 0.25
        },
        {
            "label": "Sort-based (us)",
            "data": sort,
            "borderColor": "#2f6fe6",
            "backgroundColor": "rgba(47,111,230,0.12)",
            "tension": 0.25
        },
        {
            "label": "Brute force (us)",
            "data": brute,
            "borderColor": "#2f9e44",
            "backgroundColor": "rgba(47,158,68,0.12)",
            "tension": 0.25
        }
    ]);

    let labels = serde_json::to_string(&labels)?;
    let datasets = serde_json::to_string_pretty(&datasets)?;
    let max_size = group_thousands(config.max_size);
    let cap = group_thousands(config.brute_force_cap);

    Ok(format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Majority Benchmark</title>
  <script src="{CHART_JS_URL}"></script>
  <style>
    :root {{ --bg: #f3efe8; --ink: #201d16; --accent: #e65c2f; --accent2: #2f6fe6; --accent3: #2f9e44; }}
    body {{ margin: 0; font-family: 'Georgia', serif; background: radial-gradient(circle at top, #fff6e7 0%, var(--bg) 55%, #eadfcf 100%); color: var(--ink); }}
    .wrap {{ max-width: 980px; margin: 0 auto; padding: 40px 24px 56px; }}
    h1 {{ font-size: 2.3rem; letter-spacing: 0.02em; margin-bottom: 12px; }}
    p {{ margin-top: 0; max-width: 720px; }}
    .card {{ background: rgba(255,255,255,0.7); border-radius: 18px; padding: 18px 18px 26px; box-shadow: 0 20px 40px rgba(0,0,0,0.08); }}
    canvas {{ width: 100%; height: 420px; }}
  </style>
</head>
<body>
  <div class="wrap">
    <h1>Majority Element Benchmark</h1>
    <p>Timing results for Moore voting, sort-based, and brute force majority detection with a growing array up to {max_size} elements (brute force capped at {cap}).</p>
    <div class="card">
      <canvas id="benchChart"></canvas>
    </div>
  </div>
  <script>
    const labels = {labels};
    const data = {{
      labels,
      datasets: {datasets}
    }};

    new Chart(document.getElementById('benchChart'), {{
      type: 'line',
      data,
      options: {{
        responsive: true,
        plugins: {{ legend: {{ position: 'bottom' }} }},
        scales: {{ y: {{ type: 'logarithmic', title: {{ display: true, text: 'Time (microseconds, log)' }} }}, x: {{ title: {{ display: true, text: 'Array size' }} }} }}
      }}
    }});
  </script>
</body>
</html>
"#
    ))
}

/// Renders the report and writes it to `path`, replacing any existing file.
pub fn write_html(
    path: impl AsRef<Path>,
    rows: &[BenchRow],
    config: &BenchConfig,
) -> Result<(), BenchError> {
    let path = path.as_ref();
    let html = render_html(rows, config)?;
    fs::write(path, html).map_err(|source| BenchError::Write {
        path: path.to_path_buf(),
        source,
    })
}
