//! # datalayer-model
//!
//! Semantic validation and model resolution for declarative datalayer
//! models: enums, custom types, structs, persistence groups and
//! datapoints with stable numeric ids.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! generate  → Load, validate, emit, commit atomically
//!   ↓
//! emit      → Emitter trait, artifact buffering and commit
//!   ↓
//! overview  → Derived absolute addresses per datapoint
//!   ↓
//! validate  → Typestate pipeline: types → enums → structs → groups → datapoints
//!   ↓
//! project   → Model file loading, fragment merging
//!   ↓
//! model     → Raw (serde) and validated entities, literal values
//!   ↓
//! base      → ModelConfig, Persistence, Access
//! ```

// ============================================================================
// MODULES (dependency order: base → model → project → validate → overview → emit)
// ============================================================================

/// Foundation types: configuration tables, persistence and access modes
pub mod base;

/// Raw and validated model entities
pub mod model;

/// Model loading: single documents and fragment directories
pub mod project;

/// Semantic validation pipeline
pub mod validate;

/// Derived datapoint overview (absolute addresses)
pub mod overview;

/// Emitter seam and atomic artifact commit
pub mod emit;

mod generate;

pub use base::{Access, ModelConfig, Persistence};
pub use generate::{Error, Generated, generate, generate_from_path, render};
pub use model::{RawDocument, ValidatedModel};
pub use validate::{ModelError, Pipeline, Stage, validate};
