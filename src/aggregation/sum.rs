// Tue Jan 15 2026 - Alex

use crate::record::{FieldValue, RawRecord};

/// Sums every numeric field shared by all `records`.
///
/// Field order follows the first record. Integer columns stay integers unless
/// the sum overflows; any float in a column makes the sum a float.
pub fn sum_records(records: &[RawRecord]) -> RawRecord {
    let mut summed = RawRecord::new();
    let Some(first) = records.first() else {
        return summed;
    };

    for name in first.keys() {
        let values: Option<Vec<&FieldValue>> = records
            .iter()
            .map(|r| r.get(name).filter(|v| v.is_numeric()))
            .collect();

        if let Some(values) = values {
            summed.insert(name.clone(), sum_values(&values));
        }
    }

    summed
}

fn sum_values(values: &[&FieldValue]) -> FieldValue {
    let mut int_total: Option<i64> = Some(0);
    let mut float_total = 0.0;

    for value in values {
        match value {
            FieldValue::Integer(i) => {
                int_total = int_total.and_then(|t| t.checked_add(*i));
                float_total += *i as f64;
            }
            FieldValue::Float(f) => {
                int_total = None;
                float_total += f;
            }
            _ => {}
        }
    }

    match int_total {
        Some(total) => FieldValue::Integer(total),
        None => FieldValue::Float(float_total),
    }
}
