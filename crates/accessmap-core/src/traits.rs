//! Boundary traits for the out-of-scope collaborators.
//!
//! The core never talks to the map, the network or the microphone directly;
//! the hosting UI wires these up and feeds the core's output into them.

use crate::types::{DialogReply, ServiceId, ServiceLocation};

pub trait CatalogProvider: Send + Sync {
    fn all_services(&self) -> &[ServiceLocation];
}

pub trait MapRenderer: Send + Sync {
    fn focus_service(&self, id: &str);
    fn show_markers(&self, ids: &[ServiceId]);
}

/// Remote NLU fallback. May fail (network/auth/timeout); callers must catch
/// and degrade to a fixed apologetic message, never surface the raw error.
pub trait RemoteDialogService: Send + Sync {
    fn send_message(&self, text: &str) -> anyhow::Result<DialogReply>;
}

/// Speech capture. `stop` yields the transcript, which is handed to the
/// intent resolver exactly as if it had been typed.
pub trait VoiceCapture: Send + Sync {
    fn start(&self) -> anyhow::Result<()>;
    fn stop(&self) -> anyhow::Result<Option<String>>;
}
