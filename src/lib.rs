// # Beemap: Bee-Colony Impact Dashboard
//
// This crate serves an interactive choropleth map of the percentage of bee
// colonies impacted by various factors across US states. A static CSV is
// loaded and aggregated once at startup into an immutable record set; two
// dropdown controls (year and affecting factor) drive a pure update function
// whose output the browser renders with Plotly.

/// CSV loading and group-by-mean aggregation into the immutable record set.
pub mod dataset;

/// The fixed factor enumeration and year options shown in the controls.
pub mod factors;

/// The declarative UI tree (heading, controls, placeholders) and its HTML rendering.
pub mod layout;

/// Declarative choropleth description consumed by the browser-side renderer.
pub mod mapspec;

/// The pure control-change handler: selection in, status text and map spec out.
pub mod update;

/// WWW server implementation.
pub mod www;
