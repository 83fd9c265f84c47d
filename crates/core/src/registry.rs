//! Record registry: collection name <-> record type.
//!
//! Types are registered once at startup; afterwards the registry is shared
//! read-only (behind an `Arc` in the api state). Lookups are keyed by the
//! collection name, and a second table keyed by [`TypeId`] answers the
//! reverse question for a record instance.

use std::any::TypeId;
use std::collections::HashMap;

use crate::error::CoreError;
use crate::models::{Article, Category, Comment};
use crate::record::{AnyRecord, FieldSpec, Record};

/// Type-erased descriptor of a registered record type.
#[derive(Debug)]
pub struct RecordType {
    type_name: &'static str,
    collection: &'static str,
    fields: Vec<FieldSpec>,
    type_id: TypeId,
    instantiate: fn() -> Box<dyn AnyRecord>,
}

impl RecordType {
    /// Build the descriptor for `R`, checking its field table.
    pub fn of<R: Record>() -> Result<Self, CoreError> {
        let fields: Vec<FieldSpec> = R::FIELDS.iter().map(|f| f.spec()).collect();

        let identifiers = fields.iter().filter(|f| f.is_identifier()).count();
        if identifiers != 1 {
            return Err(CoreError::InvalidRecordType(format!(
                "{} must have exactly one identifier field, found {identifiers}",
                R::TYPE_NAME
            )));
        }

        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|f| f.name == field.name) {
                return Err(CoreError::InvalidRecordType(format!(
                    "{} declares field {} twice",
                    R::TYPE_NAME,
                    field.name
                )));
            }
        }

        Ok(Self {
            type_name: R::TYPE_NAME,
            collection: R::COLLECTION,
            fields,
            type_id: TypeId::of::<R>(),
            instantiate: || -> Box<dyn AnyRecord> { Box::new(R::default()) },
        })
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn collection(&self) -> &'static str {
        self.collection
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// The single identifier field (guaranteed by [`RecordType::of`]).
    pub fn identifier(&self) -> &FieldSpec {
        self.fields
            .iter()
            .find(|f| f.is_identifier())
            .unwrap_or(&self.fields[0])
    }

    /// A fresh zero-valued instance.
    pub fn instantiate(&self) -> Box<dyn AnyRecord> {
        (self.instantiate)()
    }
}

/// Closed set of record types the server knows about.
#[derive(Debug, Default)]
pub struct RecordRegistry {
    types: Vec<RecordType>,
    by_collection: HashMap<&'static str, usize>,
    by_type: HashMap<TypeId, &'static str>,
}

impl RecordRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in content types: articles, categories and
    /// comments.
    pub fn builtin() -> Result<Self, CoreError> {
        let mut registry = Self::new();
        registry.register::<Article>()?;
        registry.register::<Category>()?;
        registry.register::<Comment>()?;
        Ok(registry)
    }

    /// Add `R` to the registry.
    pub fn register<R: Record>(&mut self) -> Result<(), CoreError> {
        let record_type = RecordType::of::<R>()?;

        if self.by_collection.contains_key(record_type.collection) {
            return Err(CoreError::InvalidRecordType(format!(
                "collection {} is already registered",
                record_type.collection
            )));
        }

        self.by_collection
            .insert(record_type.collection, self.types.len());
        self.by_type
            .insert(record_type.type_id, record_type.collection);
        self.types.push(record_type);
        Ok(())
    }

    /// Look up a record type by collection name.
    pub fn resolve(&self, collection: &str) -> Result<&RecordType, CoreError> {
        self.by_collection
            .get(collection)
            .map(|&index| &self.types[index])
            .ok_or_else(|| CoreError::collection_not_found(collection))
    }

    /// Collection name a record instance belongs to.
    pub fn describe(&self, record: &dyn AnyRecord) -> Result<&'static str, CoreError> {
        self.by_type
            .get(&record.as_any().type_id())
            .copied()
            .ok_or_else(|| CoreError::NotFound {
                entity: "Record type",
                key: record.type_name().to_string(),
            })
    }

    /// Registered collection names, in registration order.
    pub fn collections(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.types.iter().map(|t| t.collection)
    }
}
