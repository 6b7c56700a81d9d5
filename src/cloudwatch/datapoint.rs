// Conversion from the SDK's Datapoint to ours
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_sdk_cloudwatch::types::Datapoint as CloudWatchDatapoint;
use aws_smithy_types_convert::date_time::DateTimeExt;
use crate::common::Datapoint;
use tracing::debug;

impl From<&CloudWatchDatapoint> for Datapoint {
    fn from(datapoint: &CloudWatchDatapoint) -> Self {
        // A timestamp chrono can't represent is treated as missing, it then
        // loses when picking the latest datapoint.
        let timestamp = datapoint.timestamp()
            .and_then(|t| match t.to_chrono_utc() {
                Ok(t)  => Some(t),
                Err(e) => {
                    debug!("Ignoring unrepresentable timestamp {:?}: {}", t, e);
                    None
                },
            });

        Self {
            timestamp,
            average: datapoint.average(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_cloudwatch::primitives::{
        DateTime,
        DateTimeFormat,
    };
    use aws_sdk_cloudwatch::types::StandardUnit;
    use chrono::{
        TimeZone,
        Utc,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn test_datapoint_from() {
        let timestamp = DateTime::from_str(
            "2020-03-01T20:59:00Z",
            DateTimeFormat::DateTime,
        ).unwrap();

        let datapoint = CloudWatchDatapoint::builder()
            .average(123_456_789.0)
            .timestamp(timestamp)
            .unit(StandardUnit::Bytes)
            .build();

        let ret = Datapoint::from(&datapoint);

        let expected = Datapoint {
            timestamp: Utc.with_ymd_and_hms(2020, 3, 1, 20, 59, 0).single(),
            average:   Some(123_456_789.0),
        };

        assert_eq!(ret, expected);
    }

    #[test]
    fn test_datapoint_from_empty() {
        let datapoint = CloudWatchDatapoint::builder().build();

        let ret = Datapoint::from(&datapoint);

        assert_eq!(ret, Datapoint::default());
    }
}
