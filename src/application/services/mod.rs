//! Application services — one module per use-case.
//!
//! Each service composes domain logic with port trait calls. Services
//! import only from `crate::domain` and `crate::application::ports` —
//! never from `crate::infra`, `crate::commands`, or `crate::output`.

pub mod agent_catalog;
pub mod import_service;
pub mod settings;
pub mod token_service;
