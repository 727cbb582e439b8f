#![allow(clippy::format_push_string)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

//! # ucplan
//!
//! Plan marketing data-science use cases through a nine-phase process and
//! export each phase as markdown.
//!
//! The phase catalog describes every phase: its questions, scoring axes and
//! completion checklist. Answers live in a single flat form state that is
//! persisted after every change. From that state ucplan generates markdown
//! documents (one phase, or all of them with a progress summary), previews
//! them as HTML, copies them to the clipboard or writes them to disk.
//!
//! ## Quick Start
//!
//! ```bash
//! # Where am I?
//! ucplan timeline
//!
//! # Fill in phase 1
//! ucplan set useCaseName "Churn Predictor"
//! ucplan score strategicAlignment 5
//! ucplan check 1 0
//!
//! # Export
//! ucplan export 1
//! ucplan export --all
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::needless_lifetimes)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_panics_doc)]

pub mod catalog;
pub mod core;
pub mod export;
pub mod markdown;
pub mod preview;
pub mod view;

pub use catalog::{phase, phases, PhaseDefinition};
pub use core::{Config, FileStorage, FormState, StateStore, StoragePort};
pub use markdown::{generate_all_phases_markdown, generate_phase_markdown, PhaseExportRecord};
pub use preview::markdown_to_html;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name, used for config and data directories.
pub const APP_NAME: &str = "ucplan";
