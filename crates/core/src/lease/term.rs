//! Allowed lease terms.

use serde::{Deserialize, Serialize};

use crate::quiz::PLEASE_SELECT;

/// Lease term in months, limited to the terms the simulator offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum LeaseTerm {
    /// One year.
    Months12,
    /// Two years.
    Months24,
    /// Three years.
    Months36,
}

impl LeaseTerm {
    /// All allowed terms, shortest first.
    pub const ALL: [Self; 3] = [Self::Months12, Self::Months24, Self::Months36];

    /// Number of months in the term.
    #[must_use]
    pub const fn months(self) -> u32 {
        match self {
            Self::Months12 => 12,
            Self::Months24 => 24,
            Self::Months36 => 36,
        }
    }

    /// Returns the term with exactly `months` months, if allowed.
    #[must_use]
    pub fn from_months(months: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|term| term.months() == months)
    }

    /// Parses a selectbox value. The placeholder, blanks and terms
    /// outside the allowed set all mean "not selected".
    #[must_use]
    pub fn parse_selection(selection: &str) -> Option<Self> {
        let selection = selection.trim();
        if selection == PLEASE_SELECT {
            return None;
        }
        selection.parse::<u32>().ok().and_then(Self::from_months)
    }

    /// Options as presented to the learner, placeholder first.
    #[must_use]
    pub fn options() -> Vec<String> {
        std::iter::once(PLEASE_SELECT.to_string())
            .chain(Self::ALL.iter().map(|term| term.months().to_string()))
            .collect()
    }
}

impl TryFrom<u32> for LeaseTerm {
    type Error = String;

    fn try_from(months: u32) -> Result<Self, Self::Error> {
        Self::from_months(months).ok_or_else(|| format!("Unsupported lease term: {months} months"))
    }
}

impl From<LeaseTerm> for u32 {
    fn from(term: LeaseTerm) -> Self {
        term.months()
    }
}

impl std::fmt::Display for LeaseTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} months", self.months())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("12", Some(LeaseTerm::Months12))]
    #[case(" 24 ", Some(LeaseTerm::Months24))]
    #[case("36", Some(LeaseTerm::Months36))]
    #[case("Please select", None)]
    #[case("", None)]
    #[case("18", None)]
    #[case("twelve", None)]
    fn test_parse_selection(#[case] input: &str, #[case] expected: Option<LeaseTerm>) {
        assert_eq!(LeaseTerm::parse_selection(input), expected);
    }

    #[test]
    fn test_options_lead_with_placeholder() {
        assert_eq!(
            LeaseTerm::options(),
            vec!["Please select", "12", "24", "36"]
        );
    }

    #[test]
    fn test_try_from() {
        assert_eq!(LeaseTerm::try_from(36), Ok(LeaseTerm::Months36));
        assert!(LeaseTerm::try_from(48).is_err());
        assert_eq!(u32::from(LeaseTerm::Months24), 24);
        assert_eq!(LeaseTerm::Months12.to_string(), "12 months");
    }
}
