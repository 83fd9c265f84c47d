use discontent_core::record::{AnyRecord, FieldValue};
use discontent_core::reflect;
use serde_json::{Map, Value};

/// A stored document: data fields keyed by their stored names.
pub type Document = Map<String, Value>;

/// Convert a record into the document that gets persisted.
///
/// The identifier is left out; the store assigns its own on insert.
pub fn from_record(record: &dyn AnyRecord) -> Document {
    reflect::fields(record)
        .into_iter()
        .filter(|field| !field.is_identifier())
        .map(|field| {
            let value = match field.value {
                FieldValue::Text(text) => Value::String(text),
                FieldValue::Id(Some(id)) => Value::String(id.to_string()),
                FieldValue::Id(None) => Value::Null,
            };
            (field.stored_as.to_string(), value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use discontent_core::models::{Article, Comment};
    use discontent_core::types::RecordId;
    use serde_json::json;

    use super::*;

    #[test]
    fn uses_stored_names_and_skips_identifier() {
        let article = Article {
            id: Some(RecordId::generate()),
            title: "Test Title".into(),
            content: "Body".into(),
            author: "Me".into(),
        };

        let document = from_record(&article);

        assert_eq!(
            Value::Object(document),
            json!({"title": "Test Title", "content": "Body", "author": "Me"})
        );
    }

    #[test]
    fn zero_value_fields_are_stored_empty() {
        let document = from_record(&Comment::default());

        assert_eq!(document.len(), 3);
        assert_eq!(document["article_id"], json!(""));
    }
}
