//! accessmap-chat
//!
//! The local chat layer: before free text goes anywhere near the remote
//! dialog collaborator, `resolver` tries to answer the narrow "hours/details
//! of X" intent directly and to interpret short follow-ups ("show it on the
//! map") against the previously matched service.

#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod engine;
pub mod entity;
pub mod overrides;
pub mod patterns;
pub mod resolver;

pub use engine::ChatEngine;
pub use entity::find_best_service_match;
pub use resolver::{ChatSession, Resolution};
