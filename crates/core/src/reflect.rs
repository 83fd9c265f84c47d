//! Field reflection over type-erased records.

use crate::error::CoreError;
use crate::record::{AnyRecord, FieldKind, FieldRole, FieldSpec, FieldValue};
use crate::types::RecordId;

/// One field of a record together with its current value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectedField {
    pub name: &'static str,
    pub stored_as: &'static str,
    pub kind: FieldKind,
    pub role: FieldRole,
    pub value: FieldValue,
}

impl ReflectedField {
    fn new(spec: FieldSpec, value: FieldValue) -> Self {
        Self {
            name: spec.name,
            stored_as: spec.stored_as,
            kind: spec.kind,
            role: spec.role,
            value,
        }
    }

    pub fn is_identifier(&self) -> bool {
        self.role == FieldRole::Identifier
    }
}

/// Enumerate a record's fields in declaration order.
///
/// Works the same on a zero-valued record (blank form) and on a populated one.
pub fn fields(record: &dyn AnyRecord) -> Vec<ReflectedField> {
    record
        .read_fields()
        .into_iter()
        .map(|(spec, value)| ReflectedField::new(spec, value))
        .collect()
}

/// Current identifier of a record, if set.
pub fn identifier(record: &dyn AnyRecord) -> Option<RecordId> {
    record
        .read_fields()
        .into_iter()
        .find_map(|(spec, value)| match value {
            FieldValue::Id(id) if spec.is_identifier() => id,
            _ => None,
        })
}

/// Write a generated identifier into the record's identifier field.
pub fn set_identifier(record: &mut dyn AnyRecord, id: RecordId) -> Result<(), CoreError> {
    let spec = record
        .read_fields()
        .into_iter()
        .map(|(spec, _)| spec)
        .find(FieldSpec::is_identifier)
        .ok_or_else(|| {
            CoreError::InvalidRecordType(format!(
                "{} has no identifier field",
                record.type_name()
            ))
        })?;
    record.assign(spec.name, FieldValue::Id(Some(id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Article, Category};

    #[test]
    fn zero_value_record_reflects_empty_values() {
        let fields = fields(&Article::default());

        assert_eq!(fields.len(), 4);
        assert!(fields[0].is_identifier());
        assert_eq!(fields[0].kind, FieldKind::GeneratedId);
        assert!(fields.iter().all(|f| f.value.render().is_empty()));
    }

    #[test]
    fn populated_record_reflects_values() {
        let id = RecordId::generate();
        let article = Article {
            id: Some(id),
            title: "Test Title".into(),
            content: "Test Content".into(),
            author: "Test Author".into(),
        };

        let rendered: Vec<_> = fields(&article)
            .into_iter()
            .map(|f| (f.name, f.value.render()))
            .collect();

        assert_eq!(
            rendered,
            [
                ("ID", id.to_string()),
                ("Title", "Test Title".to_string()),
                ("Content", "Test Content".to_string()),
                ("Author", "Test Author".to_string()),
            ]
        );
    }

    #[test]
    fn set_identifier_merges_into_record() {
        let mut category = Category {
            id: None,
            name: "News".into(),
        };
        let id = RecordId::generate();

        set_identifier(&mut category, id).unwrap();

        assert_eq!(category.id, Some(id));
        assert_eq!(identifier(&category), Some(id));
        assert_eq!(category.name, "News");
    }

    #[test]
    fn set_identifier_overwrites_existing_value() {
        let mut article = Article {
            id: Some(RecordId::generate()),
            ..Article::default()
        };
        let id = RecordId::generate();

        set_identifier(&mut article, id).unwrap();

        assert_eq!(article.id, Some(id));
    }
}
