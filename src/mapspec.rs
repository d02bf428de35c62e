//! # Choropleth Map Specification
//!
//! A [`MapSpec`] is a declarative description of the choropleth: which
//! geography it covers, which row fields drive placement, color, and hover
//! text, the color scale, and the data rows themselves. The server never
//! draws anything; the page script turns the spec into a Plotly trace.

use serde::Serialize;

/// One data row of the map: a state shaded by its mean impact percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapRow {
    pub state: String,
    pub state_code: String,
    pub impact_pct: f64,
}

/// One stop of a sequential color scale, at a position in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorStop {
    pub at: f64,
    pub color: &'static str,
}

/// The YlOrRd sequential scale: light yellow for low impact through dark
/// red for high impact.
pub const YL_OR_RD: &[ColorStop] = &[
    ColorStop { at: 0.0, color: "#ffffcc" },
    ColorStop { at: 0.125, color: "#ffeda0" },
    ColorStop { at: 0.25, color: "#fed976" },
    ColorStop { at: 0.375, color: "#feb24c" },
    ColorStop { at: 0.5, color: "#fd8d3c" },
    ColorStop { at: 0.625, color: "#fc4e2a" },
    ColorStop { at: 0.75, color: "#e31a1c" },
    ColorStop { at: 0.875, color: "#bd0026" },
    ColorStop { at: 1.0, color: "#800026" },
];

/// A declarative choropleth description. Field names are stable: the page
/// script reads them by name to build the Plotly trace.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapSpec {
    pub chart_type: &'static str,
    pub scope: &'static str,
    pub location_mode: &'static str,
    /// The row field whose value places a row on the map.
    pub location_field: &'static str,
    /// The row field whose value selects the shade.
    pub color_field: &'static str,
    /// The row fields shown on hover.
    pub hover_fields: [&'static str; 2],
    pub color_scale: &'static [ColorStop],
    /// Legend label for the color bar.
    pub color_label: &'static str,
    pub rows: Vec<MapRow>,
}

impl MapSpec {
    /// Builds the US-states choropleth spec around the given rows. An empty
    /// row set is valid and renders an uncolored map.
    pub fn usa_states(rows: Vec<MapRow>) -> MapSpec {
        MapSpec {
            chart_type: "choropleth",
            scope: "usa",
            location_mode: "USA-states",
            location_field: "state_code",
            color_field: "impact_pct",
            hover_fields: ["state", "impact_pct"],
            color_scale: YL_OR_RD,
            color_label: "% of Bee Colonies",
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_serializes_with_stable_field_names() {
        let spec = MapSpec::usa_states(vec![MapRow {
            state: "California".to_string(),
            state_code: "CA".to_string(),
            impact_pct: 15.0,
        }]);
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["chart_type"], "choropleth");
        assert_eq!(json["scope"], "usa");
        assert_eq!(json["location_mode"], "USA-states");
        assert_eq!(json["location_field"], "state_code");
        assert_eq!(json["color_field"], "impact_pct");
        assert_eq!(json["hover_fields"][0], "state");
        assert_eq!(json["rows"][0]["state_code"], "CA");
        assert_eq!(json["rows"][0]["impact_pct"], 15.0);
    }

    #[test]
    fn color_scale_spans_unit_interval() {
        assert_eq!(YL_OR_RD.first().unwrap().at, 0.0);
        assert_eq!(YL_OR_RD.last().unwrap().at, 1.0);
        assert!(YL_OR_RD.windows(2).all(|w| w[0].at < w[1].at));
    }

    #[test]
    fn empty_rows_are_valid() {
        let spec = MapSpec::usa_states(Vec::new());
        assert!(spec.rows.is_empty());
        assert!(serde_json::to_string(&spec).is_ok());
    }
}
