// Shared test fixture for timesheet records.
// Defaults come from json/timesheet_record.json; setters override single
// attributes. `csv_line` renders the same record as an upload row.

use crate::modules::timesheets::core::record::{TimesheetRecord, TimesheetRecordFields};

pub const CSV_HEADER: &str = "Date,Client,Project,Project Code,Task,Hours,Hours Rounded,\
Billable?,Invoiced?,Approved?,First Name,Last Name,Department,Employee?,\
Billable Rate,Cost Rate,Cost Amount,Currency,External Reference URL";

/// Header line followed by `lines`, newline terminated.
pub fn csv_body(lines: &[String]) -> String {
    let mut body = format!("{CSV_HEADER}\n");
    for line in lines {
        body.push_str(line);
        body.push('\n');
    }
    body
}

pub struct TimesheetRecordBuilder {
    inner: TimesheetRecordFields,
}

impl Default for TimesheetRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TimesheetRecordBuilder {
    pub fn new() -> Self {
        let inner = serde_json::from_str(include_str!("json/timesheet_record.json"))
            .expect("fixture json should deserialize");
        Self { inner }
    }

    pub fn date(mut self, v: impl Into<String>) -> Self {
        self.inner.date = v.into();
        self
    }

    pub fn client(mut self, v: impl Into<String>) -> Self {
        self.inner.client = v.into();
        self
    }

    pub fn project(mut self, v: impl Into<String>) -> Self {
        self.inner.project = v.into();
        self
    }

    pub fn project_code(mut self, v: impl Into<String>) -> Self {
        self.inner.project_code = v.into();
        self
    }

    pub fn task(mut self, v: impl Into<String>) -> Self {
        self.inner.task = v.into();
        self
    }

    pub fn hours(mut self, v: f64) -> Self {
        self.inner.hours = v;
        self
    }

    pub fn is_billable(mut self, v: impl Into<String>) -> Self {
        self.inner.is_billable = v.into();
        self
    }

    pub fn first_name(mut self, v: impl Into<String>) -> Self {
        self.inner.first_name = v.into();
        self
    }

    pub fn last_name(mut self, v: impl Into<String>) -> Self {
        self.inner.last_name = v.into();
        self
    }

    pub fn department(mut self, v: impl Into<String>) -> Self {
        self.inner.department = v.into();
        self
    }

    pub fn is_employee(mut self, v: impl Into<String>) -> Self {
        self.inner.is_employee = v.into();
        self
    }

    pub fn billable_rate(mut self, v: i32) -> Self {
        self.inner.billable_rate = v;
        self
    }

    pub fn currency(mut self, v: impl Into<String>) -> Self {
        self.inner.currency = v.into();
        self
    }

    pub fn external_ref_url(mut self, v: impl Into<String>) -> Self {
        self.inner.external_ref_url = v.into();
        self
    }

    pub fn fields(self) -> TimesheetRecordFields {
        self.inner
    }

    pub fn build(self) -> TimesheetRecord {
        TimesheetRecord::try_from(self.inner).expect("fixture record should be valid")
    }

    pub fn csv_line(&self) -> String {
        let f = &self.inner;
        [
            f.date.clone(),
            f.client.clone(),
            f.project.clone(),
            f.project_code.clone(),
            f.task.clone(),
            f.hours.to_string(),
            f.hours_rounded.to_string(),
            f.is_billable.clone(),
            f.is_invoiced.clone(),
            f.is_approved.clone(),
            f.first_name.clone(),
            f.last_name.clone(),
            f.department.clone(),
            f.is_employee.clone(),
            f.billable_rate.to_string(),
            f.cost_rate.to_string(),
            f.cost_amount.to_string(),
            f.currency.clone(),
            f.external_ref_url.clone(),
        ]
        .join(",")
    }
}

#[cfg(test)]
mod timesheet_record_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = TimesheetRecordBuilder::default().build();
        assert_eq!(built.date(), "1/2/2023");
        assert_eq!(built.client(), "Acme");
        assert_eq!(built.hours(), 7.5);
        assert_eq!(built.cost_amount(), 600);
        assert_eq!(built.external_ref_url(), "");
    }

    #[rstest]
    fn csv_line_has_one_column_per_attribute() {
        let line = TimesheetRecordBuilder::new().csv_line();
        assert_eq!(line.split(',').count(), TimesheetRecord::FIELD_COUNT);
        assert!(line.starts_with("1/2/2023,Acme,Website,WEB-01,Development,7.5,7.5,"));
    }
}
