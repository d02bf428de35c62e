//! # Request Handlers
//!
//! The dashboard page (`index`) and the JSON endpoint behind its controls
//! (`update::show`). The page carries a small script that watches the two
//! dropdowns, calls `/api/update` on every change, and applies the two
//! returned values positionally: status text into the text placeholder,
//! map spec into the chart placeholder.

/// HTML templating and response helpers.
pub mod template;
/// The `/api/update` endpoint.
pub mod update;

use crate::layout;
use actix_web::Responder;
use once_cell::sync::Lazy;

/// The browser half of the update cycle. Reads the current control values,
/// fetches `/api/update`, and patches the status div and the Plotly map.
/// Runs once on load to draw the default selection. Element ids come from
/// the same constants the layout tree is built from.
static PAGE_SCRIPT: Lazy<String> = Lazy::new(|| {
    format!(
        r#"<script>
const yearControl = document.getElementById('{year_id}');
const factorControl = document.getElementById('{factor_id}');

async function refresh() {{
  const year = yearControl.value;
  const factors = Array.from(factorControl.selectedOptions).map(o => o.value).join(',');
  const resp = await fetch(`/api/update?year=${{encodeURIComponent(year)}}&factors=${{encodeURIComponent(factors)}}`);
  if (!resp.ok) return;
  const payload = await resp.json();
  document.getElementById('{status_id}').textContent = payload.status_text;

  const spec = payload.map_spec;
  const trace = {{
    type: spec.chart_type,
    locationmode: spec.location_mode,
    locations: spec.rows.map(r => r[spec.location_field]),
    z: spec.rows.map(r => r[spec.color_field]),
    text: spec.rows.map(r => spec.hover_fields.map(f => r[f]).join(': ')),
    colorscale: spec.color_scale.map(s => [s.at, s.color]),
    zmin: 0,
    colorbar: {{ title: spec.color_label }},
  }};
  Plotly.react('{map_id}', [trace], {{ geo: {{ scope: spec.scope }}, margin: {{ t: 24, b: 0 }} }});
}}

yearControl.addEventListener('change', refresh);
factorControl.addEventListener('change', refresh);
refresh();
</script>"#,
        year_id = layout::YEAR_CONTROL_ID,
        factor_id = layout::FACTOR_CONTROL_ID,
        status_id = layout::STATUS_ID,
        map_id = layout::MAP_ID,
    )
});

/// Renders the dashboard page: the declarative layout tree followed by the
/// page script.
pub async fn index() -> impl Responder {
    let contents = format!("{}\n{}", layout::render_html(&layout::PAGE), &*PAGE_SCRIPT);
    template::to_html_response(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test, web};

    #[actix_web::test]
    async fn index_serves_controls_and_script() {
        let app =
            test::init_service(App::new().route("/", web::get().to(index))).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert!(resp.status().is_success());
        let body = test::read_body(resp).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains("Percent of Bee Colonies Affected by Various Factors"));
        assert!(html.contains(r#"<select id="slct_year""#));
        assert!(html.contains("/api/update"));
        assert!(html.contains("Plotly.react"));
    }

    #[core::prelude::v1::test]
    fn page_script_targets_the_layout_ids() {
        for id in [
            layout::YEAR_CONTROL_ID,
            layout::FACTOR_CONTROL_ID,
            layout::STATUS_ID,
        ] {
            assert!(PAGE_SCRIPT.contains(&format!("getElementById('{id}')")));
        }
        assert!(PAGE_SCRIPT.contains(&format!("Plotly.react('{}'", layout::MAP_ID)));
    }
}
