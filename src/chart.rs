//! Chart rendering
//!
//! Renders a time series as a self-contained HTML line chart. The page pulls
//! plotly.js from its CDN and embeds the data inline, so the artifact needs
//! no server and opens directly in a browser.

use chrono::NaiveDate;
use std::path::Path;

use crate::core::{HedgeError, HedgeResult};

/// Render (date, value) points as a line chart and write it to `path`
pub fn render_line_chart(
    path: &Path,
    title: &str,
    series_name: &str,
    points: &[(NaiveDate, f64)],
) -> HedgeResult<()> {
    if points.is_empty() {
        return Err(HedgeError::data_unavailable(format!(
            "nothing to chart for {:?}",
            title
        )));
    }

    let dates: Vec<String> = points
        .iter()
        .map(|(d, _)| d.format("%Y-%m-%d").to_string())
        .collect();
    let values: Vec<f64> = points.iter().map(|(_, v)| *v).collect();

    let x = serde_json::to_string(&dates).map_err(|e| HedgeError::Serialization(e.to_string()))?;
    let y = serde_json::to_string(&values).map_err(|e| HedgeError::Serialization(e.to_string()))?;

    let html = format!(
        r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>{title}</title>
  <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
  <style>
    body {{
      margin: 0;
      background: #0f172a;
      color: #e5e7eb;
      font-family: "Segoe UI", sans-serif;
      padding: 16px;
    }}
    .panel {{
      background: #111827;
      border: 1px solid #374151;
      border-radius: 12px;
      padding: 12px;
      max-width: 1100px;
      margin: 0 auto;
    }}
    .title {{
      font-size: 18px;
      font-weight: 700;
      margin: 0 0 8px 4px;
    }}
    #chart {{
      width: 100%;
      min-height: 480px;
    }}
  </style>
</head>
<body>
  <section class="panel">
    <h2 class="title">{title}</h2>
    <div id="chart"></div>
  </section>
  <script>
    const trace = {{
      x: {x},
      y: {y},
      mode: 'lines',
      type: 'scatter',
      name: '{series_name}',
      line: {{color: '#22d3ee', width: 2}}
    }};

    Plotly.newPlot('chart', [trace], {{
      paper_bgcolor: '#111827',
      plot_bgcolor: '#111827',
      font: {{color: '#e5e7eb'}},
      margin: {{t: 24, r: 24, b: 48, l: 64}},
      xaxis: {{gridcolor: '#374151'}},
      yaxis: {{gridcolor: '#374151'}}
    }}, {{responsive: true}});
  </script>
</body>
</html>
"#
    );

    std::fs::write(path, html)?;

    tracing::info!("Wrote chart {:?} ({} points)", path, points.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_render_chart() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test_chart.html");

        let points = vec![(date(2025, 1, 2), 100.5), (date(2025, 1, 3), 101.25)];
        render_line_chart(&path, "Test Chart", "px", &points).unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains("Test Chart"));
        assert!(html.contains("2025-01-02"));
        assert!(html.contains("101.25"));
    }

    #[test]
    fn test_empty_series_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.html");

        assert!(matches!(
            render_line_chart(&path, "Empty", "px", &[]),
            Err(HedgeError::DataUnavailable(_))
        ));
        assert!(!path.exists());
    }
}
