// Tue Jan 15 2026 - Alex

use crate::aggregation::error::AggregationError;
use crate::aggregation::sum::sum_records;
use crate::record::{Location, RawRecord, CASES};

/// Sources don't always sum their own tables properly, so allow 10% slack.
pub const DEFAULT_TOLERANCE: f64 = 0.10;

/// A computed aggregate checked against an independently reported total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregationCheck {
    pub computed: f64,
    pub reported: f64,
    pub tolerance: f64,
}

impl AggregationCheck {
    pub fn new(computed: f64, reported: f64) -> Self {
        Self {
            computed,
            reported,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn lower_bound(&self) -> f64 {
        self.reported * (1.0 - self.tolerance)
    }

    pub fn upper_bound(&self) -> f64 {
        self.reported * (1.0 + self.tolerance)
    }

    /// Bounds are inclusive.
    pub fn verify(&self) -> Result<(), AggregationError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(AggregationError::InvalidTolerance(self.tolerance));
        }

        // NaN lands here too
        if !(self.reported > 0.0) {
            return Err(AggregationError::NonPositiveTotal(self.reported));
        }

        if (self.computed - self.reported).abs() <= self.reported * self.tolerance {
            Ok(())
        } else {
            Err(AggregationError::Mismatch {
                computed: self.computed,
                reported: self.reported,
                tolerance: self.tolerance,
            })
        }
    }
}

/// Sums `sub_records` into a region total and checks it against
/// `reported_total`.
///
/// On success the summed record is tagged with `region` and is meant to be
/// returned alongside the sub-region records.
pub fn aggregate_and_verify(
    sub_records: &[RawRecord],
    reported_total: f64,
    tolerance: f64,
    region: &Location,
) -> Result<RawRecord, AggregationError> {
    if sub_records.is_empty() {
        return Err(AggregationError::NoSubRecords);
    }

    let mut summed = sum_records(sub_records);
    let computed = summed.get(CASES).and_then(|v| v.as_f64()).unwrap_or(0.0);

    AggregationCheck::new(computed, reported_total)
        .with_tolerance(tolerance)
        .verify()?;

    for (name, value) in region.to_fields() {
        summed.insert(name, value);
    }

    Ok(summed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{raw_record, FieldValue};

    fn subs(cases: &[i64]) -> Vec<RawRecord> {
        cases.iter().map(|c| raw_record([("cases", *c)])).collect()
    }

    #[test]
    fn test_lower_bound_is_inclusive() {
        assert!(AggregationCheck::new(90.0, 100.0).verify().is_ok());
    }

    #[test]
    fn test_upper_bound_is_inclusive() {
        assert!(AggregationCheck::new(110.0, 100.0).verify().is_ok());
    }

    #[test]
    fn test_outside_tolerance() {
        let err = AggregationCheck::new(80.0, 100.0).verify().unwrap_err();
        assert!(matches!(err, AggregationError::Mismatch { computed, reported, .. } if computed == 80.0 && reported == 100.0));
        assert!(AggregationCheck::new(111.0, 100.0).verify().is_err());
    }

    #[test]
    fn test_zero_reported_total_always_fails() {
        assert_eq!(
            AggregationCheck::new(0.0, 0.0).verify(),
            Err(AggregationError::NonPositiveTotal(0.0))
        );
        assert_eq!(
            AggregationCheck::new(50.0, -3.0).verify(),
            Err(AggregationError::NonPositiveTotal(-3.0))
        );
    }

    #[test]
    fn test_custom_tolerance() {
        assert!(AggregationCheck::new(95.0, 100.0).with_tolerance(0.05).verify().is_ok());
        assert!(AggregationCheck::new(94.0, 100.0).with_tolerance(0.05).verify().is_err());
        assert_eq!(
            AggregationCheck::new(1.0, 1.0).with_tolerance(-0.1).verify(),
            Err(AggregationError::InvalidTolerance(-0.1))
        );
    }

    #[test]
    fn test_bounds() {
        let check = AggregationCheck::new(0.0, 200.0);
        assert!((check.lower_bound() - 180.0).abs() < 1e-9);
        assert!((check.upper_bound() - 220.0).abs() < 1e-9);
    }

    #[test]
    fn test_aggregate_and_verify_tags_region() {
        let region = Location::country("iso1:AU");
        let total = aggregate_and_verify(&subs(&[40, 50]), 100.0, DEFAULT_TOLERANCE, &region).unwrap();

        assert_eq!(total.get("cases"), Some(&FieldValue::Integer(90)));
        assert_eq!(total.get("country"), Some(&FieldValue::from("iso1:AU")));
    }

    #[test]
    fn test_aggregate_and_verify_mismatch() {
        let region = Location::country("iso1:AU");
        let result = aggregate_and_verify(&subs(&[30, 50]), 100.0, DEFAULT_TOLERANCE, &region);
        assert!(matches!(result, Err(AggregationError::Mismatch { .. })));
    }

    #[test]
    fn test_aggregate_and_verify_needs_sub_records() {
        let result = aggregate_and_verify(&[], 100.0, DEFAULT_TOLERANCE, &Location::new());
        assert_eq!(result, Err(AggregationError::NoSubRecords));
    }
}
