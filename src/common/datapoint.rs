// Datapoints returned by a statistics query and how one is picked
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use chrono::{
    DateTime,
    Utc,
};
use std::str::FromStr;

/// One timestamped sample of a CloudWatch statistic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Datapoint {
    /// When the sample was taken.
    pub timestamp: Option<DateTime<Utc>>,

    /// The `Average` statistic of the sample.
    pub average: Option<f64>,
}

/// Convenience type for a list of `Datapoint`.
pub type Datapoints = Vec<Datapoint>;

/// Which datapoint wins when a query returns more than one.
///
/// CloudWatch makes no ordering promise for `GetMetricStatistics`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum DatapointSelection {
    /// Take the first datapoint in the order CloudWatch returned them.
    #[default]
    First,

    /// Take the datapoint with the most recent timestamp.
    Latest,
}

impl DatapointSelection {
    /// Pick a datapoint from `datapoints`, `None` if there are none.
    pub fn select<'a>(&self, datapoints: &'a [Datapoint]) -> Option<&'a Datapoint> {
        match self {
            Self::First  => datapoints.first(),
            // Datapoints without a timestamp sort before all others.
            Self::Latest => datapoints.iter().max_by_key(|d| d.timestamp),
        }
    }
}

// This should match the possible values given to the --datapoint argument.
impl FromStr for DatapointSelection {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first"  => Ok(Self::First),
            "latest" => Ok(Self::Latest),
            _        => Err("no match"),
        }
    }
}
