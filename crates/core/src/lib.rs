//! Discontent core: record types and the generic form <-> record mapping.
//!
//! Nothing in this crate knows about HTTP or storage. The api crate turns
//! requests into [`form::FormSubmission`]s and the db crate turns records into
//! stored documents; both go through the field tables declared in [`models`].

pub mod error;
pub mod form;
pub mod models;
pub mod record;
pub mod reflect;
pub mod registry;
pub mod types;
