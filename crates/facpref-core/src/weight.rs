//! Assignment weight policy
//!
//! The whole policy is the ordered rule table in [`RULES`]. Rules are checked
//! top to bottom and the first match decides the weight; when nothing matches
//! the weight is 0, which still counts as a ledger entry.

/// Lowest weight, used when no rule matches
pub const NO_SIGNAL: u8 = 0;

/// Tenure bands. Every tenure value lands in exactly one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenureBand {
    /// Ten years or fewer
    Junior,
    /// Eleven years or more
    Senior,
}

impl TenureBand {
    pub fn of(tenure: i64) -> Self {
        if tenure <= 10 {
            TenureBand::Junior
        } else {
            TenureBand::Senior
        }
    }
}

/// A rating comparison against a fixed threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    Above(i64),
    Below(i64),
    AtMost(i64),
}

impl Rating {
    fn matches(self, value: i64) -> bool {
        match self {
            Rating::Above(t) => value > t,
            Rating::Below(t) => value < t,
            Rating::AtMost(t) => value <= t,
        }
    }
}

/// One row of the weight table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightRule {
    pub name: &'static str,
    pub band: TenureBand,
    pub desire: Rating,
    pub comfort: Rating,
    pub weight: u8,
}

impl WeightRule {
    fn matches(&self, band: TenureBand, desire: i64, comfort: i64) -> bool {
        self.band == band && self.desire.matches(desire) && self.comfort.matches(comfort)
    }
}

/// The weight table, in evaluation order
pub const RULES: &[WeightRule] = &[
    WeightRule {
        name: "junior_eager_and_comfortable",
        band: TenureBand::Junior,
        desire: Rating::Above(3),
        comfort: Rating::Above(3),
        weight: 4,
    },
    WeightRule {
        name: "junior_reluctant_and_uncomfortable",
        band: TenureBand::Junior,
        desire: Rating::Below(2),
        comfort: Rating::Below(2),
        weight: 2,
    },
    WeightRule {
        name: "senior_reluctant_and_uncomfortable",
        band: TenureBand::Senior,
        desire: Rating::Below(2),
        comfort: Rating::Below(2),
        weight: 1,
    },
    WeightRule {
        name: "senior_eager_not_fully_comfortable",
        band: TenureBand::Senior,
        desire: Rating::Above(3),
        comfort: Rating::AtMost(3),
        weight: 3,
    },
];

/// First rule matching the inputs, if any
pub fn matching_rule(tenure: i64, desire: i64, comfort: i64) -> Option<&'static WeightRule> {
    let band = TenureBand::of(tenure);
    RULES.iter().find(|rule| rule.matches(band, desire, comfort))
}

/// Weight tier in 0..=4 for a faculty/course pairing. Total over all integers.
pub fn resolve_weight(tenure: i64, desire: i64, comfort: i64) -> u8 {
    matching_rule(tenure, desire, comfort).map_or(NO_SIGNAL, |rule| rule.weight)
}
