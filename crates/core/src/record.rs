//! Compile-time field tables for record types.
//!
//! Each record type lists its fields once in [`Record::FIELDS`], pairing the
//! form-facing name and the stored name with a typed accessor/mutator. The
//! blanket [`AnyRecord`] impl erases the concrete type so the registry, the
//! form codec and the storage gateway can all work on `dyn AnyRecord`.

use std::any::Any;
use std::fmt;

use crate::error::CoreError;
use crate::types::RecordId;

/// Value kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain text, zero value is the empty string.
    Text,
    /// Store-generated identifier, zero value is "unset".
    GeneratedId,
}

/// Whether a field is the record's identifier or ordinary data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Identifier,
    Data,
}

/// Type-erased description of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Name used in forms (`Title`, `ArticleID`, ...).
    pub name: &'static str,
    /// Key used in the stored document (`title`, `article_id`, ...).
    pub stored_as: &'static str,
    pub kind: FieldKind,
    pub role: FieldRole,
}

impl FieldSpec {
    pub fn is_identifier(&self) -> bool {
        self.role == FieldRole::Identifier
    }
}

/// Current value of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Id(Option<RecordId>),
}

impl FieldValue {
    /// String form used for rendering: an unset identifier renders empty.
    pub fn render(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Id(Some(id)) => id.to_string(),
            Self::Id(None) => String::new(),
        }
    }

    const fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Id(_) => FieldKind::GeneratedId,
        }
    }
}

/// Typed accessor/mutator pair for one field of `R`.
pub enum Accessor<R> {
    Identifier {
        get: fn(&R) -> Option<RecordId>,
        set: fn(&mut R, Option<RecordId>),
    },
    Text {
        get: fn(&R) -> &str,
        set: fn(&mut R, String),
    },
}

/// One entry of a record type's field table.
pub struct Field<R> {
    pub name: &'static str,
    pub stored_as: &'static str,
    pub accessor: Accessor<R>,
}

impl<R> Field<R> {
    pub fn spec(&self) -> FieldSpec {
        let (kind, role) = match &self.accessor {
            Accessor::Identifier { .. } => (FieldKind::GeneratedId, FieldRole::Identifier),
            Accessor::Text { .. } => (FieldKind::Text, FieldRole::Data),
        };
        FieldSpec {
            name: self.name,
            stored_as: self.stored_as,
            kind,
            role,
        }
    }

    fn read(&self, record: &R) -> FieldValue {
        match &self.accessor {
            Accessor::Identifier { get, .. } => FieldValue::Id(get(record)),
            Accessor::Text { get, .. } => FieldValue::Text(get(record).to_string()),
        }
    }

    fn write(&self, record: &mut R, value: FieldValue) -> Result<(), CoreError> {
        match (&self.accessor, value) {
            (Accessor::Identifier { set, .. }, FieldValue::Id(id)) => set(record, id),
            (Accessor::Text { set, .. }, FieldValue::Text(text)) => set(record, text),
            (_, value) => {
                return Err(CoreError::Internal(format!(
                    "field {} expects {:?}, got {:?}",
                    self.name,
                    self.spec().kind,
                    value.kind()
                )))
            }
        }
        Ok(())
    }
}

/// A concrete record type with a static field table.
///
/// The zero value (`Default`) is the empty record used to render a blank form.
pub trait Record: Default + fmt::Debug + Send + Sync + 'static {
    /// Human-readable type name, used in page titles and log fields.
    const TYPE_NAME: &'static str;
    /// Collection the record type is stored in.
    const COLLECTION: &'static str;
    /// Ordered field table; must contain exactly one identifier field.
    const FIELDS: &'static [Field<Self>];
}

/// Object-safe view over any [`Record`].
pub trait AnyRecord: fmt::Debug + Send + Sync {
    fn type_name(&self) -> &'static str;

    fn collection(&self) -> &'static str;

    /// Field specs and current values, in declaration order.
    fn read_fields(&self) -> Vec<(FieldSpec, FieldValue)>;

    /// Overwrite the named field. Fails if the field does not exist or the
    /// value has the wrong kind.
    fn assign(&mut self, field: &str, value: FieldValue) -> Result<(), CoreError>;

    fn as_any(&self) -> &dyn Any;
}

impl<R: Record> AnyRecord for R {
    fn type_name(&self) -> &'static str {
        R::TYPE_NAME
    }

    fn collection(&self) -> &'static str {
        R::COLLECTION
    }

    fn read_fields(&self) -> Vec<(FieldSpec, FieldValue)> {
        R::FIELDS
            .iter()
            .map(|field| (field.spec(), field.read(self)))
            .collect()
    }

    fn assign(&mut self, field: &str, value: FieldValue) -> Result<(), CoreError> {
        let entry = R::FIELDS
            .iter()
            .find(|f| f.name == field)
            .ok_or_else(|| CoreError::Internal(format!("{} has no field {field}", R::TYPE_NAME)))?;
        entry.write(self, value)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::models::Article;

    #[test]
    fn specs_follow_declaration_order() {
        let names: Vec<_> = Article::default()
            .read_fields()
            .into_iter()
            .map(|(spec, _)| spec.name)
            .collect();
        assert_eq!(names, ["ID", "Title", "Content", "Author"]);
    }

    #[test]
    fn assign_text_field() {
        let mut article = Article::default();
        article
            .assign("Title", FieldValue::Text("Hello".into()))
            .unwrap();
        assert_eq!(article.title, "Hello");
    }

    #[test]
    fn assign_rejects_kind_mismatch() {
        let mut article = Article::default();
        let err = article
            .assign("Title", FieldValue::Id(Some(RecordId::generate())))
            .unwrap_err();
        assert_matches!(err, CoreError::Internal(_));
    }

    #[test]
    fn assign_rejects_unknown_field() {
        let mut article = Article::default();
        let err = article
            .assign("Nope", FieldValue::Text(String::new()))
            .unwrap_err();
        assert_matches!(err, CoreError::Internal(msg) if msg.contains("Nope"));
    }

    #[test]
    fn render_unset_identifier_is_empty() {
        assert_eq!(FieldValue::Id(None).render(), "");
    }
}
