use crate::modules::timesheets::core::dates::DateRange;
use crate::modules::timesheets::core::fields::UnknownFieldError;
use thiserror::Error;

/// Fields that may be used as search criteria.
pub const SEARCH_FIELDS: [&str; 10] = [
    "client",
    "lastName",
    "firstName",
    "department",
    "project",
    "projectCode",
    "isBillable",
    "isInvoiced",
    "isEmployee",
    "isApproved",
];

pub fn is_search_field(name: &str) -> bool {
    SEARCH_FIELDS
        .iter()
        .any(|field| field.eq_ignore_ascii_case(name))
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    #[error(transparent)]
    UnknownField(#[from] UnknownFieldError),

    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

/// Conjunction of `field = value` criteria, optionally within a date range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    criteria: Vec<(String, String)>,
    range: DateRange,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self {
            criteria: Vec::new(),
            range: DateRange::unbounded(),
        }
    }

    pub fn with_criterion(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.criteria.push((field.into(), value.into()));
        self
    }

    pub fn within(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }

    pub fn criteria(&self) -> &[(String, String)] {
        &self.criteria
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn has_criteria(&self) -> bool {
        !self.criteria.is_empty()
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new()
    }
}
