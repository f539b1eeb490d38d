use crate::modules::timesheets::core::record::{
    TimesheetRecord, TimesheetRecordFields, ValidationError,
};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// A CSV submission that cannot be imported. Any one bad row rejects the
/// whole body. `line_number` counts from 1 and includes the header line.
#[derive(Debug, Error, PartialEq)]
pub enum MalformedRowError {
    #[error("Illegal # of fields: {count}. Expected {expected}. line {line_number}: \"{line}\"")]
    FieldCount {
        line_number: usize,
        line: String,
        count: usize,
        expected: usize,
    },

    #[error("line {line_number}: {field} is not a number: \"{value}\"")]
    Number {
        line_number: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line_number}: {source}")]
    Invalid {
        line_number: usize,
        source: ValidationError,
    },
}

/// Parses a CSV upload into records, in submission order.
///
/// The first line is a header and is always skipped. Every other line must
/// hold exactly [`TimesheetRecord::FIELD_COUNT`] comma-separated columns;
/// trailing empty columns count. No quoting is supported and no duplicates
/// are removed here.
pub fn parse_csv(body: &str) -> Result<Vec<TimesheetRecord>, MalformedRowError> {
    let records = body
        .lines()
        .enumerate()
        .skip(1)
        .map(|(index, line)| parse_row(index + 1, line))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(rows = records.len(), "parsed csv body");
    Ok(records)
}

fn parse_row(line_number: usize, line: &str) -> Result<TimesheetRecord, MalformedRowError> {
    let columns: Vec<&str> = line.split(',').collect();
    if columns.len() != TimesheetRecord::FIELD_COUNT {
        return Err(MalformedRowError::FieldCount {
            line_number,
            line: line.to_string(),
            count: columns.len(),
            expected: TimesheetRecord::FIELD_COUNT,
        });
    }

    let fields = TimesheetRecordFields {
        date: columns[0].to_string(),
        client: columns[1].to_string(),
        project: columns[2].to_string(),
        project_code: columns[3].to_string(),
        task: columns[4].to_string(),
        hours: number(line_number, "hours", columns[5])?,
        hours_rounded: number(line_number, "hoursRounded", columns[6])?,
        is_billable: columns[7].to_string(),
        is_invoiced: columns[8].to_string(),
        is_approved: columns[9].to_string(),
        first_name: columns[10].to_string(),
        last_name: columns[11].to_string(),
        department: columns[12].to_string(),
        is_employee: columns[13].to_string(),
        billable_rate: number(line_number, "billableRate", columns[14])?,
        cost_rate: number(line_number, "costRate", columns[15])?,
        cost_amount: number(line_number, "costAmount", columns[16])?,
        currency: columns[17].to_string(),
        external_ref_url: columns[18].to_string(),
    };

    TimesheetRecord::new(fields)
        .map_err(|source| MalformedRowError::Invalid { line_number, source })
}

fn number<T: FromStr>(
    line_number: usize,
    field: &'static str,
    raw: &str,
) -> Result<T, MalformedRowError> {
    raw.parse().map_err(|_| MalformedRowError::Number {
        line_number,
        field,
        value: raw.to_string(),
    })
}
