//! Protons-on-target accounting.

use std::fmt;
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Beam exposure collected over a subrun.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct POTSummary {
    /// Total protons on target.
    pub totpot: f64,
    /// Protons on target passing beam quality cuts.
    pub totgoodpot: f64,
    pub totspills: i32,
    pub goodspills: i32,
}

impl POTSummary {
    pub fn new(totpot: f64, totgoodpot: f64, totspills: i32, goodspills: i32) -> Self {
        Self {
            totpot,
            totgoodpot,
            totspills,
            goodspills,
        }
    }

    /// Adds the counters of `other` to this summary, field by field.
    pub fn aggregate(&mut self, other: &POTSummary) {
        self.totpot += other.totpot;
        self.totgoodpot += other.totgoodpot;
        self.totspills += other.totspills;
        self.goodspills += other.goodspills;

        trace!(
            totpot = self.totpot,
            totgoodpot = self.totgoodpot,
            totspills = self.totspills,
            goodspills = self.goodspills,
            "Aggregated POT summary"
        );
    }
}

impl AddAssign<&POTSummary> for POTSummary {
    fn add_assign(&mut self, other: &POTSummary) {
        self.aggregate(other);
    }
}

impl fmt::Display for POTSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "This sub run has {} total spills with an exposure of {} POT\n\
             with cuts on beam quality, there are {} good spills with an exposure of {} POT",
            self.totspills, self.totpot, self.goodspills, self.totgoodpot
        )
    }
}
