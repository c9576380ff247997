use crate::workout::{InfoMessage, UNKNOWN_WORKOUT_MESSAGE, WorkoutKind};

fn format_label(kind: WorkoutKind) -> &'static str {
    match kind {
        WorkoutKind::Swimming => "Swimming (strokes, hours, kg, pool m, lengths)",
        WorkoutKind::Running => "Running (steps, hours, kg)",
        WorkoutKind::Walking => "Race walking (steps, hours, kg, height cm)",
    }
}

pub fn render_landing_page() -> String {
    let mut options = String::new();
    for kind in WorkoutKind::ALL {
        options.push_str(&format!(
            "<option value=\"{}\">{} · {}</option>",
            kind.code(),
            kind.code(),
            format_label(kind)
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>FitCalc</title>
  <style>
    body {{ font-family: Arial, sans-serif; margin: 0; padding: 0; background: #f7f7f7; }}
    header {{ background: #20232a; color: white; padding: 1rem 2rem; }}
    main {{ padding: 2rem; max-width: 960px; margin: 0 auto; }}
    form {{ background: white; padding: 2rem; border: 1px solid #ddd; }}
    label {{ display: block; margin-bottom: 1rem; }}
    input, select {{ width: 100%; padding: 0.5rem; margin-top: 0.25rem; }}
    button {{ background: #2563eb; color: white; border: none; padding: 0.75rem 1.5rem; border-radius: 4px; cursor: pointer; }}
    button:hover {{ background: #1d4ed8; }}
    .summary-grid {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(160px, 1fr)); gap: 1rem; }}
    .summary-card {{ background: white; padding: 1rem; border: 1px solid #ddd; }}
    .status {{ margin-top: 1rem; }}
  </style>
</head>
<body>
  <header><h1>FitCalc</h1></header>
  <main>
    <p>Enter the sensor readings of a workout to estimate distance, speed and calories.</p>
    <form id="workout-form">
      <label>Workout type
        <select name="workout_type">{options}</select>
      </label>
      <label>Readings (comma separated)
        <input name="data" placeholder="15000, 1, 75" />
      </label>
      <button type="submit">Calculate</button>
    </form>
    <div class="status" id="status"></div>
  </main>
  <script>
    const form = document.getElementById('workout-form');
    const statusEl = document.getElementById('status');

    form.addEventListener('submit', async (e) => {{
      e.preventDefault();
      const body = new URLSearchParams(new FormData(form));
      statusEl.textContent = 'Calculating...';
      try {{
        const response = await fetch('/calculate', {{ method: 'POST', body }});
        const message = await response.text();
        if (response.ok) {{
          statusEl.innerHTML = message;
        }} else {{
          statusEl.textContent = 'Calculation failed: ' + message;
        }}
      }} catch (err) {{
        statusEl.textContent = 'Calculation failed: ' + err;
      }}
    }});
  </script>
</body>
</html>"#
    )
}

pub fn render_report(info: &InfoMessage) -> String {
    let mut body = String::new();

    body.push_str("<section class=\"results-card\">");
    body.push_str(&format!(
        "<div class=\"results-header\"><p class=\"eyebrow\">Workout Overview</p><h2>{}</h2></div>",
        info.training_type
    ));

    body.push_str("<div class=\"summary-grid\">");
    for (label, value) in [
        ("Duration", format!("{:.3} h", info.duration)),
        ("Distance", format!("{:.3} km", info.distance)),
        ("Mean speed", format!("{:.3} km/h", info.speed)),
        ("Calories", format!("{:.3} kcal", info.calories)),
    ] {
        body.push_str(&format!(
            "<div class=\"summary-card\"><p class=\"label\">{label}</p><p class=\"value\">{value}</p></div>"
        ));
    }
    body.push_str("</div>");

    body.push_str(&format!(
        "<p class=\"report-line\">{}</p>",
        info.get_message()
    ));
    body.push_str("</section>");
    body
}

pub fn render_unknown_workout() -> String {
    format!("<section class=\"results-card\"><p class=\"report-line\">{UNKNOWN_WORKOUT_MESSAGE}</p></section>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landing_page_offers_every_code() {
        let page = render_landing_page();
        for kind in WorkoutKind::ALL {
            assert!(page.contains(&format!("value=\"{}\"", kind.code())));
        }
        assert!(page.contains("/calculate"));
    }

    #[test]
    fn report_contains_summary_line() {
        let info = InfoMessage {
            training_type: "Swimming".into(),
            duration: 1.0,
            distance: 1.0,
            speed: 1.0,
            calories: 336.0,
        };
        let rendered = render_report(&info);
        assert!(rendered.contains("Workout Overview"));
        assert!(rendered.contains("336.000 kcal"));
        assert!(rendered.contains(&info.get_message()));
    }
}
