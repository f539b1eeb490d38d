// Shapes search results for output: either keep only the listed keys of each
// record object, or drop the listed keys. Key names are the JSON attribute
// names (`projectCode`, `externalRefURL`, ...) and are matched exactly.

use crate::modules::timesheets::core::record::TimesheetRecord;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    All,
    Include(Vec<String>),
    Exclude(Vec<String>),
}

fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

impl Projection {
    /// `show` wins over `remove` when both are given.
    pub fn from_params(show: Option<&str>, remove: Option<&str>) -> Self {
        match (show, remove) {
            (Some(show), _) => Self::Include(split_names(show)),
            (None, Some(remove)) => Self::Exclude(split_names(remove)),
            (None, None) => Self::All,
        }
    }

    pub fn apply<'a>(
        &self,
        records: impl IntoIterator<Item = &'a TimesheetRecord>,
    ) -> serde_json::Result<Value> {
        let projected = records
            .into_iter()
            .map(|record| {
                serde_json::to_value(record).map(|value| match value {
                    Value::Object(object) => Value::Object(self.shape(object)),
                    other => other,
                })
            })
            .collect::<serde_json::Result<Vec<_>>>()?;
        Ok(Value::Array(projected))
    }

    fn shape(&self, mut object: Map<String, Value>) -> Map<String, Value> {
        match self {
            Self::All => object,
            Self::Include(names) => names
                .iter()
                .filter_map(|name| object.remove_entry(name))
                .collect(),
            Self::Exclude(names) => {
                for name in names {
                    object.remove(name);
                }
                object
            }
        }
    }
}
