//! Core types for ucplan.
//!
//! Form state, its persistence, configuration and the error types shared by
//! the rest of the crate.

mod config;
mod error;
mod form;
mod store;

pub use config::{ClipboardConfig, Config, ExportConfig, StorageConfig, LOCAL_CONFIG_FILE};
pub use error::{ClipboardError, ExportError, FormError, FormResult, StorageError};
pub use form::{
    score_key, stakeholder_key, stakeholder_keys, FieldKey, FormState, StakeholderAttribute,
    StakeholderRole, CHECKED, DEFAULT_SCORE, UNCHECKED,
};
pub use store::{FileStorage, MemoryStorage, StateStore, StoragePort, DEFAULT_STORAGE_KEY};
