//! # Control-Change Handler
//!
//! The pure function behind every control change: given the immutable
//! record set, a selected year, and a set of selected factors, produce the
//! status line and the map specification. No side effects, so concurrent
//! calls over the shared [`Dataset`] need no coordination.

use crate::dataset::Dataset;
use crate::factors::Factor;
use crate::mapspec::{MapRow, MapSpec};
use std::collections::BTreeSet;

/// Filters the record set by exact year equality and factor membership,
/// then wraps the surviving rows in a US-states choropleth spec.
///
/// An empty factor set or a year absent from the data yields a spec with
/// zero rows; neither is an error.
pub fn update(
    dataset: &Dataset,
    selected_year: i32,
    selected_factors: &BTreeSet<Factor>,
) -> (String, MapSpec) {
    let rows = dataset
        .records()
        .iter()
        .filter(|r| r.year == selected_year)
        .filter(|r| selected_factors.contains(&r.factor))
        .map(|r| MapRow {
            state: r.state.clone(),
            state_code: r.state_code.clone(),
            impact_pct: r.impact_pct,
        })
        .collect();
    let status_text = format!("The year chosen was: {selected_year}");
    (status_text, MapSpec::usa_states(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
state,ansi,affected_by,year,state_code,pct_of_colonies_impacted
California,6,Disease,2015,CA,10.0
California,6,Disease,2015,CA,20.0
California,6,Varroa_mites,2015,CA,40.0
California,6,Disease,2016,CA,12.0
Texas,48,Disease,2016,TX,5.0
Texas,48,Pesticides,2017,TX,8.0
Texas,48,Other,2018,TX,3.0
";

    fn fixture() -> Dataset {
        Dataset::from_csv(CSV).unwrap()
    }

    fn all_factors() -> BTreeSet<Factor> {
        Factor::ALL.into_iter().collect()
    }

    #[test]
    fn filters_by_exact_year() {
        let ds = fixture();
        let (_, spec) = update(&ds, 2016, &all_factors());
        assert_eq!(spec.rows.len(), 2);
        let codes: Vec<_> = spec.rows.iter().map(|r| r.state_code.as_str()).collect();
        assert!(codes.contains(&"CA"));
        assert!(codes.contains(&"TX"));
        // No bleed-through from other years.
        assert!(spec.rows.iter().all(|r| r.impact_pct == 12.0 || r.impact_pct == 5.0));
    }

    #[test]
    fn filters_by_factor_membership() {
        let ds = fixture();
        let only_disease: BTreeSet<_> = [Factor::Disease].into_iter().collect();
        let (_, spec) = update(&ds, 2015, &only_disease);
        assert_eq!(spec.rows.len(), 1);
        assert_eq!(spec.rows[0].state_code, "CA");
        assert_eq!(spec.rows[0].impact_pct, 15.0);
    }

    #[test]
    fn empty_factor_set_yields_zero_rows() {
        let ds = fixture();
        let (status, spec) = update(&ds, 2015, &BTreeSet::new());
        assert!(spec.rows.is_empty());
        assert_eq!(status, "The year chosen was: 2015");
    }

    #[test]
    fn absent_year_yields_zero_rows() {
        let ds = fixture();
        let only_disease: BTreeSet<_> = [Factor::Disease].into_iter().collect();
        let (status, spec) = update(&ds, 1999, &only_disease);
        assert!(spec.rows.is_empty());
        assert_eq!(status, "The year chosen was: 1999");
    }

    #[test]
    fn status_text_interpolates_the_year() {
        let ds = fixture();
        let (status, _) = update(&ds, 2017, &all_factors());
        assert_eq!(status, "The year chosen was: 2017");
    }

    #[test]
    fn identical_inputs_give_identical_outputs() {
        let ds = fixture();
        let factors: BTreeSet<_> = [Factor::Disease, Factor::VarroaMites].into_iter().collect();
        let first = update(&ds, 2015, &factors);
        let second = update(&ds, 2015, &factors);
        assert_eq!(first.0, second.0);
        assert_eq!(first.1, second.1);
    }
}
