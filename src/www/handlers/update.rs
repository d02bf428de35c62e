//! # Update Endpoint Handler
//!
//! `GET /api/update` is the server half of the control-change cycle: the
//! page script calls it with the current selection whenever either control
//! changes, and applies the returned status text and map spec to the DOM.

use crate::dataset::Dataset;
use crate::factors::Factor;
use crate::mapspec::MapSpec;
use crate::update;

use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The query parameters of `/api/update`.
#[derive(Debug, Deserialize)]
pub struct UpdateQuery {
    /// The selected year. The browser sends it as text; actix deserializes
    /// it into an integer here, so the equality test downstream always
    /// compares integers. A non-numeric value is rejected with 400 before
    /// the handler runs.
    pub year: i32,
    /// Comma-separated factor wire values. Absent or empty means no factor
    /// is selected.
    #[serde(default)]
    pub factors: String,
}

/// The JSON body returned to the page script.
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub status_text: String,
    pub map_spec: MapSpec,
}

/// Parses the comma-separated factor list into a set. Unknown names are
/// dropped: membership of a value outside the enumerated set can never
/// match a record anyway.
pub fn parse_factors(s: &str) -> BTreeSet<Factor> {
    s.split(',').filter_map(Factor::from_wire).collect()
}

/// Handles `GET /api/update`.
pub async fn show(data: web::Data<Dataset>, query: web::Query<UpdateQuery>) -> impl Responder {
    let factors = parse_factors(&query.factors);
    let (status_text, map_spec) = update::update(&data, query.year, &factors);
    HttpResponse::Ok().json(UpdateResponse {
        status_text,
        map_spec,
    })
}
