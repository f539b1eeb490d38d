// Field accessor registry.
//
// Resolves a textual field name to a getter on TimesheetRecord, so the store
// can search by any string attribute without a per-field match.
// Numeric attributes have no accessor.

use crate::modules::timesheets::core::record::TimesheetRecord;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown field: {field}")]
pub struct UnknownFieldError {
    pub field: String,
}

pub type FieldReader = fn(&TimesheetRecord) -> &str;

#[derive(Clone, Copy)]
pub struct FieldAccessor {
    name: &'static str,
    reader: FieldReader,
}

impl fmt::Debug for FieldAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldAccessor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl FieldAccessor {
    /// Canonical attribute name, e.g. `projectCode`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn read<'a>(&self, record: &'a TimesheetRecord) -> &'a str {
        (self.reader)(record)
    }

    /// Case-insensitive comparison. `lowercase_value` must already be lowercased.
    pub fn matches(&self, record: &TimesheetRecord, lowercase_value: &str) -> bool {
        self.read(record).to_lowercase() == lowercase_value
    }
}

const TEXT_FIELDS: [(&str, FieldReader); 14] = [
    ("date", TimesheetRecord::date),
    ("client", TimesheetRecord::client),
    ("project", TimesheetRecord::project),
    ("projectCode", TimesheetRecord::project_code),
    ("task", TimesheetRecord::task),
    ("isBillable", TimesheetRecord::is_billable),
    ("isInvoiced", TimesheetRecord::is_invoiced),
    ("isApproved", TimesheetRecord::is_approved),
    ("firstName", TimesheetRecord::first_name),
    ("lastName", TimesheetRecord::last_name),
    ("department", TimesheetRecord::department),
    ("isEmployee", TimesheetRecord::is_employee),
    ("currency", TimesheetRecord::currency),
    ("externalRefURL", TimesheetRecord::external_ref_url),
];

static REGISTRY: LazyLock<HashMap<String, FieldAccessor>> = LazyLock::new(|| {
    TEXT_FIELDS
        .iter()
        .map(|&(name, reader)| (name.to_lowercase(), FieldAccessor { name, reader }))
        .collect()
});

/// Looks up the accessor for `field`, ignoring case.
///
/// Both the attribute name (`isBillable`) and its boolean-style short form
/// (`billable`, read as `is` + name) resolve to the same accessor.
pub fn resolve(field: &str) -> Result<FieldAccessor, UnknownFieldError> {
    let key = field.to_lowercase();
    REGISTRY
        .get(&key)
        .or_else(|| REGISTRY.get(&format!("is{key}")))
        .copied()
        .ok_or_else(|| UnknownFieldError {
            field: field.to_string(),
        })
}
