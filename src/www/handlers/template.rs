//! # HTML Templating and Response Helpers
//!
//! This module provides a simple HTML templating system using the `handlebars`
//! crate. It defines a single main page layout and offers helper functions
//! to render content within this layout.

use actix_web::HttpResponse;
use handlebars::Handlebars;
use once_cell::sync::Lazy;
use serde_json::json;

/// A lazily-initialized, global instance of the Handlebars templating engine.
static ENGINE: Lazy<Handlebars> = Lazy::new(new_engine);

/// Creates and configures a new `Handlebars` engine instance.
///
/// This function registers a single template string named "main", the HTML
/// layout for all pages. The layout pulls in the stylesheet and the Plotly
/// renderer and leaves a `{{{contents}}}` placeholder where page-specific
/// content is injected.
pub fn new_engine() -> Handlebars<'static> {
    let mut handlebars = Handlebars::new();
    handlebars
        .register_template_string(
            "main",
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1.0,user-scalable=yes">
<title>Bee Colony Impact</title>
<link rel="stylesheet" type="text/css" href="/static/style.css">
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js" charset="utf-8"></script>
</head>
<body>
<main>
<article>
{{{contents}}}
</article>
</main>
</body>
</html>"#,
        )
        .unwrap();
    handlebars
}

/// Renders the given content string into the main HTML layout.
pub fn render(contents: &str) -> String {
    ENGINE
        .render(
            "main",
            &json!({
                "contents": contents,
            }),
        )
        .unwrap()
}

/// Creates a standard HTML `Ok` response from a string slice.
pub fn to_html_response(result: &str) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html")
        .body(render(result))
}
