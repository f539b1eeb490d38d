use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must not be blank")]
    Blank { field: &'static str },

    #[error("billableRate must not be negative, got {value}")]
    NegativeBillableRate { value: i32 },

    #[error("externalRefURL is not a valid URL: \"{value}\" ({reason})")]
    InvalidUrl { value: String, reason: String },
}

/// Raw attributes of a timesheet record, in CSV column order.
///
/// This is the transport shape: nothing here is validated. Turn it into a
/// [`TimesheetRecord`] with `TimesheetRecord::try_from`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetRecordFields {
    pub date: String,
    pub client: String,
    pub project: String,
    pub project_code: String,
    pub task: String,
    pub hours: f64,
    pub hours_rounded: f64,
    pub is_billable: String,
    pub is_invoiced: String,
    pub is_approved: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub department: String,
    pub is_employee: String,
    pub billable_rate: i32,
    pub cost_rate: i32,
    pub cost_amount: i32,
    pub currency: String,
    #[serde(rename = "externalRefURL", default)]
    pub external_ref_url: String,
}

/// One validated, immutable timesheet entry.
///
/// Equality and hashing are structural over all 19 attributes. The float
/// attributes compare by bit pattern (`NaN == NaN`, `0.0 != -0.0`), which keeps
/// `Eq` and `Hash` lawful. The record store relies on this for deduplication.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(
    try_from = "TimesheetRecordFields",
    into = "TimesheetRecordFields"
)]
pub struct TimesheetRecord(TimesheetRecordFields);

impl TimesheetRecord {
    /// Number of attributes, and so the number of columns in a CSV row.
    pub const FIELD_COUNT: usize = 19;

    pub fn new(fields: TimesheetRecordFields) -> Result<Self, ValidationError> {
        Self::try_from(fields)
    }

    pub fn date(&self) -> &str {
        &self.0.date
    }

    pub fn client(&self) -> &str {
        &self.0.client
    }

    pub fn project(&self) -> &str {
        &self.0.project
    }

    pub fn project_code(&self) -> &str {
        &self.0.project_code
    }

    pub fn task(&self) -> &str {
        &self.0.task
    }

    pub fn hours(&self) -> f64 {
        self.0.hours
    }

    pub fn hours_rounded(&self) -> f64 {
        self.0.hours_rounded
    }

    pub fn is_billable(&self) -> &str {
        &self.0.is_billable
    }

    pub fn is_invoiced(&self) -> &str {
        &self.0.is_invoiced
    }

    pub fn is_approved(&self) -> &str {
        &self.0.is_approved
    }

    pub fn first_name(&self) -> &str {
        &self.0.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.0.last_name
    }

    pub fn department(&self) -> &str {
        &self.0.department
    }

    pub fn is_employee(&self) -> &str {
        &self.0.is_employee
    }

    pub fn billable_rate(&self) -> i32 {
        self.0.billable_rate
    }

    pub fn cost_rate(&self) -> i32 {
        self.0.cost_rate
    }

    pub fn cost_amount(&self) -> i32 {
        self.0.cost_amount
    }

    pub fn currency(&self) -> &str {
        &self.0.currency
    }

    pub fn external_ref_url(&self) -> &str {
        &self.0.external_ref_url
    }
}

impl TryFrom<TimesheetRecordFields> for TimesheetRecord {
    type Error = ValidationError;

    fn try_from(fields: TimesheetRecordFields) -> Result<Self, Self::Error> {
        let required = [
            ("date", &fields.date),
            ("client", &fields.client),
            ("project", &fields.project),
            ("projectCode", &fields.project_code),
            ("task", &fields.task),
            ("isBillable", &fields.is_billable),
            ("isInvoiced", &fields.is_invoiced),
            ("isApproved", &fields.is_approved),
            ("firstName", &fields.first_name),
            ("lastName", &fields.last_name),
            ("isEmployee", &fields.is_employee),
            ("currency", &fields.currency),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::Blank { field });
            }
        }

        if fields.billable_rate < 0 {
            return Err(ValidationError::NegativeBillableRate {
                value: fields.billable_rate,
            });
        }

        if !fields.external_ref_url.trim().is_empty() {
            Url::parse(&fields.external_ref_url).map_err(|e| ValidationError::InvalidUrl {
                value: fields.external_ref_url.clone(),
                reason: e.to_string(),
            })?;
        }

        Ok(Self(fields))
    }
}

impl From<TimesheetRecord> for TimesheetRecordFields {
    fn from(record: TimesheetRecord) -> Self {
        record.0
    }
}

impl PartialEq for TimesheetRecord {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (&self.0, &other.0);
        a.date == b.date
            && a.client == b.client
            && a.project == b.project
            && a.project_code == b.project_code
            && a.task == b.task
            && a.hours.to_bits() == b.hours.to_bits()
            && a.hours_rounded.to_bits() == b.hours_rounded.to_bits()
            && a.is_billable == b.is_billable
            && a.is_invoiced == b.is_invoiced
            && a.is_approved == b.is_approved
            && a.first_name == b.first_name
            && a.last_name == b.last_name
            && a.department == b.department
            && a.is_employee == b.is_employee
            && a.billable_rate == b.billable_rate
            && a.cost_rate == b.cost_rate
            && a.cost_amount == b.cost_amount
            && a.currency == b.currency
            && a.external_ref_url == b.external_ref_url
    }
}

impl Eq for TimesheetRecord {}

// Must hash exactly the attributes compared in `eq`.
impl Hash for TimesheetRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let f = &self.0;
        f.date.hash(state);
        f.client.hash(state);
        f.project.hash(state);
        f.project_code.hash(state);
        f.task.hash(state);
        f.hours.to_bits().hash(state);
        f.hours_rounded.to_bits().hash(state);
        f.is_billable.hash(state);
        f.is_invoiced.hash(state);
        f.is_approved.hash(state);
        f.first_name.hash(state);
        f.last_name.hash(state);
        f.department.hash(state);
        f.is_employee.hash(state);
        f.billable_rate.hash(state);
        f.cost_rate.hash(state);
        f.cost_amount.hash(state);
        f.currency.hash(state);
        f.external_ref_url.hash(state);
    }
}
