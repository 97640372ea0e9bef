// Tue Jan 13 2026 - Alex

use crate::output::error::OutputError;
use crate::record::{CaseRecord, ResultSet, CASES, CITY, COUNTRY, COUNTY, DEATHS, RECOVERED, STATE, TESTED, URL};
use indexmap::IndexSet;

/// Columns that always lead the table, whatever sources ran.
pub const CANONICAL_COLUMNS: [&str; 9] = [CITY, COUNTY, STATE, COUNTRY, CASES, DEATHS, RECOVERED, TESTED, URL];

/// Ordered column names: canonical prefix, then first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet {
    columns: IndexSet<String>,
}

impl ColumnSet {
    pub fn canonical() -> Self {
        Self {
            columns: CANONICAL_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn discover<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a CaseRecord>,
    {
        let mut set = Self::canonical();
        for record in records {
            for name in record.field_names() {
                if !set.columns.contains(name) {
                    set.columns.insert(name.to_string());
                }
            }
        }
        set
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn row_for(&self, record: &CaseRecord) -> Vec<String> {
        self.columns
            .iter()
            .map(|column| record.get(column).map(|v| v.to_cell()).unwrap_or_default())
            .collect()
    }
}

/// Schema-unified view of a result set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_records(records: &[CaseRecord]) -> Self {
        let columns = ColumnSet::discover(records);
        Self {
            header: columns.names().map(str::to_string).collect(),
            rows: records.iter().map(|r| columns.row_for(r)).collect(),
        }
    }

    /// Header line first, one line per record, standard quoting.
    pub fn to_csv(&self) -> Result<String, OutputError> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(&self.header)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }

        let bytes = writer.into_inner().map_err(|e| OutputError::Flush(e.into_error()))?;
        Ok(String::from_utf8(bytes)?)
    }
}

pub fn to_table(results: &ResultSet) -> Table {
    Table::from_records(results.records())
}

pub fn to_csv(results: &ResultSet) -> Result<String, OutputError> {
    to_table(results).to_csv()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{raw_record, FieldValue};

    fn record(pairs: Vec<(&str, FieldValue)>) -> CaseRecord {
        CaseRecord::from_fields(raw_record(pairs))
    }

    fn sample() -> Vec<CaseRecord> {
        vec![
            record(vec![("county", "A".into()), ("cases", 5.into())]),
            record(vec![("county", "B".into()), ("cases", 3.into()), ("deaths", 1.into())]),
        ]
    }

    #[test]
    fn test_canonical_prefix_when_empty() {
        let table = Table::from_records(&[]);
        assert_eq!(table.header, CANONICAL_COLUMNS.to_vec());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_missing_field_is_empty_cell() {
        let table = Table::from_records(&sample());
        let deaths = table.header.iter().position(|c| c == "deaths").unwrap();

        assert_eq!(table.header.iter().filter(|c| *c == "deaths").count(), 1);
        assert_eq!(table.header.len(), CANONICAL_COLUMNS.len());
        assert_eq!(table.rows[0][deaths], "");
        assert_eq!(table.rows[1][deaths], "1");
        assert_eq!(table.rows[0][1], "A");
        assert_eq!(table.rows[0][4], "5");
    }

    #[test]
    fn test_extra_columns_in_first_seen_order() {
        let records = vec![
            record(vec![("cases", 1.into()), ("hospitalized", 2.into())]),
            record(vec![("icu", 1.into()), ("cases", 4.into()), ("hospitalized", 0.into())]),
            record(vec![("cases", 2.into()), ("active", 1.into())]),
        ];
        let columns = ColumnSet::discover(&records);
        let extra: Vec<_> = columns.names().skip(CANONICAL_COLUMNS.len()).collect();

        assert_eq!(extra, vec!["hospitalized", "icu", "active"]);
    }

    #[test]
    fn test_column_order_ignores_field_order_within_record() {
        let a = vec![record(vec![("cases", 1.into()), ("x", 1.into()), ("county", "A".into())])];
        let b = vec![record(vec![("county", "A".into()), ("x", 1.into()), ("cases", 1.into())])];

        assert_eq!(ColumnSet::discover(&a), ColumnSet::discover(&b));
        assert_eq!(Table::from_records(&a).rows, Table::from_records(&b).rows);
    }

    #[test]
    fn test_csv_rendering() {
        let csv = Table::from_records(&sample()).to_csv().unwrap();
        let expected = "city,county,state,country,cases,deaths,recovered,tested,url\n\
                        ,A,,,5,,,,\n\
                        ,B,,,3,1,,,\n";
        assert_eq!(csv, expected);
    }

    #[test]
    fn test_csv_quotes_embedded_delimiters() {
        let records = vec![record(vec![("county", "Bristol, City of".into()), ("cases", 2.into())])];
        let csv = Table::from_records(&records).to_csv().unwrap();
        assert!(csv.lines().nth(1).unwrap().starts_with(",\"Bristol, City of\","));
    }
}
