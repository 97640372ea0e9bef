// Tue Jan 13 2026 - Alex

use crate::record::{FieldValue, RawRecord, CASES};
use crate::validation::error::ValidationError;

/// Enforces the minimal record contract on adapter output.
#[derive(Debug, Clone, Default)]
pub struct RecordValidator;

impl RecordValidator {
    pub fn new() -> Self {
        Self
    }

    /// Checks one candidate. Field checks run in field order, so the error
    /// names the first offending field.
    pub fn validate(&self, record: &RawRecord) -> Result<(), ValidationError> {
        let cases = record.get(CASES).ok_or(ValidationError::MissingCases)?;

        for (name, value) in record {
            if value.is_null() {
                return Err(ValidationError::NullField(name.clone()));
            }
            if value.is_non_finite() {
                return Err(ValidationError::NotANumber(name.clone()));
            }
        }

        match cases {
            FieldValue::Integer(n) if *n < 0 => Err(ValidationError::NegativeCases(*n as f64)),
            FieldValue::Float(f) if *f < 0.0 => Err(ValidationError::NegativeCases(*f)),
            FieldValue::Float(f) if f.fract() != 0.0 => Err(ValidationError::FractionalCases(*f)),
            FieldValue::Integer(_) | FieldValue::Float(_) => Ok(()),
            other => Err(ValidationError::NonNumericCases(other.to_cell())),
        }
    }

    /// Checks a whole batch, failing on the first invalid candidate.
    pub fn validate_all(&self, records: &[RawRecord]) -> Result<(), ValidationError> {
        for (index, record) in records.iter().enumerate() {
            if let Err(e) = self.validate(record) {
                log::debug!("candidate {} rejected: {}", index, e);
                return Err(e);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::raw_record;

    #[test]
    fn test_valid_record() {
        let record = raw_record([("cases", FieldValue::from(5)), ("deaths", 1.into())]);
        assert!(RecordValidator::new().validate(&record).is_ok());
    }

    #[test]
    fn test_missing_cases() {
        let record = raw_record([("deaths", 1)]);
        assert_eq!(RecordValidator::new().validate(&record), Err(ValidationError::MissingCases));
    }

    #[test]
    fn test_null_field() {
        let record = raw_record([("cases", FieldValue::from(3)), ("recovered", FieldValue::Null)]);
        assert_eq!(
            RecordValidator::new().validate(&record),
            Err(ValidationError::NullField("recovered".to_string()))
        );
    }

    #[test]
    fn test_nan_field() {
        let record = raw_record([("cases", FieldValue::from(3)), ("tested", f64::NAN.into())]);
        assert_eq!(
            RecordValidator::new().validate(&record),
            Err(ValidationError::NotANumber("tested".to_string()))
        );
    }

    #[test]
    fn test_nan_cases() {
        let record = raw_record([("cases", f64::NAN)]);
        assert_eq!(
            RecordValidator::new().validate(&record),
            Err(ValidationError::NotANumber("cases".to_string()))
        );
    }

    #[test]
    fn test_infinite_field() {
        let validator = RecordValidator::new();
        let record = raw_record([("cases", FieldValue::from(5)), ("tested", f64::INFINITY.into())]);
        assert_eq!(
            validator.validate(&record),
            Err(ValidationError::NotANumber("tested".to_string()))
        );

        let record = raw_record([("cases", FieldValue::from(5)), ("deaths", f64::NEG_INFINITY.into())]);
        assert_eq!(
            validator.validate(&record),
            Err(ValidationError::NotANumber("deaths".to_string()))
        );
    }

    #[test]
    fn test_cases_must_be_whole() {
        let validator = RecordValidator::new();
        assert_eq!(
            validator.validate(&raw_record([("cases", 2.5)])),
            Err(ValidationError::FractionalCases(2.5))
        );
        assert!(validator.validate(&raw_record([("cases", 4.0)])).is_ok());
    }

    #[test]
    fn test_cases_must_be_numeric_and_non_negative() {
        let validator = RecordValidator::new();
        assert_eq!(
            validator.validate(&raw_record([("cases", "12")])),
            Err(ValidationError::NonNumericCases("12".to_string()))
        );
        assert_eq!(
            validator.validate(&raw_record([("cases", -4)])),
            Err(ValidationError::NegativeCases(-4.0))
        );
    }

    #[test]
    fn test_validate_all_stops_at_first_invalid() {
        let records = vec![
            raw_record([("cases", 1)]),
            raw_record([("deaths", 2)]),
            raw_record([("cases", FieldValue::Null)]),
        ];
        assert_eq!(
            RecordValidator::new().validate_all(&records),
            Err(ValidationError::MissingCases)
        );
    }
}
