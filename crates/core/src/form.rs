//! Form codec: HTML form submissions <-> records.

use std::collections::HashMap;

use crate::error::CoreError;
use crate::record::{AnyRecord, FieldKind, FieldValue};
use crate::reflect;
use crate::registry::RecordType;
use crate::types::RecordId;

/// A decoded `application/x-www-form-urlencoded` body: field name to every
/// value submitted under that name, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSubmission {
    values: HashMap<String, Vec<String>>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect `(name, value)` pairs, keeping repeated names.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut submission = Self::new();
        for (name, value) in pairs {
            submission.append(name, value);
        }
        submission
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values
            .entry(name.into())
            .or_default()
            .push(value.into());
    }

    /// First value submitted for `name`.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A field ready to be rendered as a form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub kind: FieldKind,
    pub value: String,
    /// Identifier fields are server-assigned and rendered read-only.
    pub read_only: bool,
}

/// Build a new record of `record_type` from a submission.
///
/// Fields missing from the submission keep their zero value and unknown keys
/// are ignored. A non-empty identifier value must parse as a [`RecordId`].
pub fn decode(
    submission: &FormSubmission,
    record_type: &RecordType,
) -> Result<Box<dyn AnyRecord>, CoreError> {
    let mut record = record_type.instantiate();

    for spec in record_type.fields() {
        let Some(raw) = submission.first(spec.name) else {
            continue;
        };

        let value = match spec.kind {
            FieldKind::Text => FieldValue::Text(raw.to_string()),
            FieldKind::GeneratedId if raw.is_empty() => continue,
            FieldKind::GeneratedId => {
                let id = raw
                    .parse::<RecordId>()
                    .map_err(|e| CoreError::InvalidEncoding {
                        field: spec.name.to_string(),
                        reason: e.to_string(),
                    })?;
                FieldValue::Id(Some(id))
            }
        };

        record.assign(spec.name, value)?;
    }

    Ok(record)
}

/// Ordered form fields for rendering `record`.
pub fn encode(record: &dyn AnyRecord) -> Vec<FormField> {
    reflect::fields(record)
        .into_iter()
        .map(|field| FormField {
            name: field.name,
            kind: field.kind,
            value: field.value.render(),
            read_only: field.is_identifier(),
        })
        .collect()
}
