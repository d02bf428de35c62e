//! # Factor and Year Options
//!
//! The fixed set of colony-affecting factors and the years covered by the
//! survey data. These drive both CSV validation and the dropdown controls.

/// A factor affecting bee colonies, as categorized by the survey data.
///
/// Each factor has a wire value (the string stored in the CSV and sent by
/// the browser, e.g. `Pests_excl_Varroa`) and a display label shown in the
/// factor dropdown (e.g. "Pests excluding Varroa").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Factor {
    Disease,
    Other,
    Pesticides,
    PestsExclVarroa,
    VarroaMites,
}

impl Factor {
    /// All factors, in dropdown display order.
    pub const ALL: [Factor; 5] = [
        Factor::Disease,
        Factor::Other,
        Factor::Pesticides,
        Factor::PestsExclVarroa,
        Factor::VarroaMites,
    ];

    /// The wire value stored in the CSV and exchanged with the browser.
    pub fn as_str(self) -> &'static str {
        match self {
            Factor::Disease => "Disease",
            Factor::Other => "Other",
            Factor::Pesticides => "Pesticides",
            Factor::PestsExclVarroa => "Pests_excl_Varroa",
            Factor::VarroaMites => "Varroa_mites",
        }
    }

    /// The human-readable label shown in the factor dropdown.
    pub fn label(self) -> &'static str {
        match self {
            Factor::Disease => "Disease",
            Factor::Other => "Other",
            Factor::Pesticides => "Pesticides",
            Factor::PestsExclVarroa => "Pests excluding Varroa",
            Factor::VarroaMites => "Varroa Mites",
        }
    }

    /// Looks up a factor by its wire value. Unknown values return `None`.
    pub fn from_wire(s: &str) -> Option<Factor> {
        Factor::ALL.iter().copied().find(|f| f.as_str() == s)
    }
}

/// The survey years offered by the year dropdown.
pub const YEARS: [i32; 4] = [2015, 2016, 2017, 2018];

/// The year selected when the page first loads.
pub const DEFAULT_YEAR: i32 = 2015;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values_round_trip() {
        for f in Factor::ALL {
            assert_eq!(Factor::from_wire(f.as_str()), Some(f));
        }
        assert!(Factor::from_wire("Mites").is_none());
        assert!(Factor::from_wire("").is_none());
    }

    #[test]
    fn labels_differ_from_wire_values_where_expected() {
        assert_eq!(Factor::PestsExclVarroa.as_str(), "Pests_excl_Varroa");
        assert_eq!(Factor::PestsExclVarroa.label(), "Pests excluding Varroa");
        assert_eq!(Factor::VarroaMites.label(), "Varroa Mites");
        assert_eq!(Factor::Disease.label(), "Disease");
    }

    #[test]
    fn year_options_contain_default() {
        assert_eq!(YEARS, [2015, 2016, 2017, 2018]);
        assert!(YEARS.contains(&DEFAULT_YEAR));
    }
}
