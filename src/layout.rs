//! # UI Declaration
//!
//! The page is declared as a tree of typed nodes (heading, selects,
//! placeholders) built once and rendered to HTML by the index handler. The
//! tree is data, not behavior: all interactivity lives in the page script
//! and the `/api/update` endpoint.

use crate::factors::{DEFAULT_YEAR, Factor, YEARS};
use once_cell::sync::Lazy;

/// Control and placeholder element ids, shared with the page script.
pub const YEAR_CONTROL_ID: &str = "slct_year";
pub const FACTOR_CONTROL_ID: &str = "afft_by";
pub const STATUS_ID: &str = "output_container";
pub const MAP_ID: &str = "bee_map";

/// One option of a select control.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

/// A node of the declarative page tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Heading { text: String },
    /// Single-choice dropdown.
    Select {
        id: String,
        options: Vec<Choice>,
        selected: String,
    },
    /// Multi-choice list; any subset may be selected, including none.
    MultiSelect {
        id: String,
        options: Vec<Choice>,
        selected: Vec<String>,
    },
    TextPlaceholder { id: String },
    ChartPlaceholder { id: String },
}

/// The page tree, built once.
pub static PAGE: Lazy<Vec<Node>> = Lazy::new(page);

fn page() -> Vec<Node> {
    vec![
        Node::Heading {
            text: "Percent of Bee Colonies Affected by Various Factors".to_string(),
        },
        Node::Select {
            id: YEAR_CONTROL_ID.to_string(),
            options: YEARS
                .iter()
                .map(|y| Choice {
                    label: y.to_string(),
                    value: y.to_string(),
                })
                .collect(),
            selected: DEFAULT_YEAR.to_string(),
        },
        Node::MultiSelect {
            id: FACTOR_CONTROL_ID.to_string(),
            options: Factor::ALL
                .iter()
                .map(|f| Choice {
                    label: f.label().to_string(),
                    value: f.as_str().to_string(),
                })
                .collect(),
            // All factors selected on first load.
            selected: Factor::ALL.iter().map(|f| f.as_str().to_string()).collect(),
        },
        Node::TextPlaceholder {
            id: STATUS_ID.to_string(),
        },
        Node::ChartPlaceholder {
            id: MAP_ID.to_string(),
        },
    ]
}

/// Renders the tree to HTML. Values and labels come from fixed tables, so
/// no escaping is required beyond what the tables themselves guarantee.
pub fn render_html(nodes: &[Node]) -> String {
    let mut w = String::new();
    for node in nodes {
        match node {
            Node::Heading { text } => {
                w.push_str(&format!("<h1>{text}</h1>\n"));
            }
            Node::Select {
                id,
                options,
                selected,
            } => {
                w.push_str(&format!("<select id=\"{id}\" class=\"control\">\n"));
                for opt in options {
                    let sel = if &opt.value == selected { " selected" } else { "" };
                    w.push_str(&format!(
                        "<option value=\"{}\"{}>{}</option>\n",
                        opt.value, sel, opt.label
                    ));
                }
                w.push_str("</select>\n");
            }
            Node::MultiSelect {
                id,
                options,
                selected,
            } => {
                w.push_str(&format!(
                    "<select id=\"{id}\" class=\"control\" multiple size=\"{}\">\n",
                    options.len()
                ));
                for opt in options {
                    let sel = if selected.contains(&opt.value) { " selected" } else { "" };
                    w.push_str(&format!(
                        "<option value=\"{}\"{}>{}</option>\n",
                        opt.value, sel, opt.label
                    ));
                }
                w.push_str("</select>\n");
            }
            Node::TextPlaceholder { id } => {
                w.push_str(&format!("<div id=\"{id}\"></div>\n"));
            }
            Node::ChartPlaceholder { id } => {
                w.push_str(&format!("<div id=\"{id}\" class=\"map\"></div>\n"));
            }
        }
    }
    w
}
