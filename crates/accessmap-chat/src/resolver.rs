//! Per-turn intent resolution.
//!
//! Order matters: action intent (against the previously matched service)
//! first, then the hours intent, then `Forward` — anything the local layer
//! does not claim goes to the remote dialog collaborator, and the resolver
//! never calls it directly. All functions are total over their input; "no
//! match" is a normal outcome, not an error.

use accessmap_core::catalog::Catalog;
use accessmap_core::types::{
    ActionKind, ChatAction, ChatMessage, Sender, ServiceId, ServiceLocation,
};
use accessmap_search::SearchIndex;
use tracing::debug;

use crate::entity::find_best_service_match;
use crate::overrides::hours_override;
use crate::patterns::{action_intent, hours_intent};

pub const CLARIFY_PROMPT: &str =
    "I couldn't find that service. Could you give me its full name, like \"Kingston General Hospital\"?";
pub const MAP_PROMPT: &str = "Want me to show it on the map?";
pub const HOURS_NOT_LISTED: &str = "not listed yet";

/// The single piece of conversation state the resolver keeps: which service
/// the last successful turn referred to. Cleared when the conversation UI
/// closes.
#[derive(Debug, Default)]
pub struct ChatSession {
    last_matched_service_id: Option<ServiceId>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_matched_service_id(&self) -> Option<&str> {
        self.last_matched_service_id.as_deref()
    }

    pub fn reset(&mut self) {
        self.last_matched_service_id = None;
    }
}

/// Outcome of one conversation turn.
#[derive(Debug)]
pub enum Resolution {
    /// Answered locally; append this bot message to the history.
    Reply(ChatMessage),
    /// Not claimed by the local layer; the caller must forward the text to
    /// the remote dialog collaborator.
    Forward,
}

/// Resolve one user turn against the catalog.
///
/// `index` must be built from the same catalog snapshot; the caller owns
/// both and rebuilds the index when the catalog reference changes.
pub fn resolve_turn(
    session: &mut ChatSession,
    text: &str,
    catalog: &Catalog,
    index: &SearchIndex<'_>,
) -> Resolution {
    if let Some(kind) = action_intent(text) {
        if let Some(service) = session
            .last_matched_service_id()
            .and_then(|id| catalog.get(id))
        {
            debug!("turn: follow-up {:?} on '{}'", kind, service.name);
            return Resolution::Reply(action_confirmation(kind, service));
        }
    }

    if !hours_intent(text) {
        debug!("turn: no local intent, forwarding");
        return Resolution::Forward;
    }

    match find_best_service_match(text, index) {
        None => {
            session.last_matched_service_id = None;
            Resolution::Reply(bot_message(CLARIFY_PROMPT.to_string(), Vec::new()))
        }
        Some(service) => {
            session.last_matched_service_id = Some(service.id.clone());
            Resolution::Reply(hours_reply(service))
        }
    }
}

/// Confirmation for a follow-up action; the hosting UI performs the actual
/// map/detail work with the referenced id.
fn action_confirmation(kind: ActionKind, service: &ServiceLocation) -> ChatMessage {
    let text = match kind {
        ActionKind::ShowOnMap => format!("Showing {} on the map.", service.name),
        ActionKind::ShowDetails => format!("Here are the details for {}.", service.name),
    };
    bot_message(text, vec![chat_action(kind, service)])
}

/// Compose the hours reply: hours line, website/info line, one aggregated
/// details sentence, closing map prompt. Absent fields are omitted entirely;
/// the field order is fixed.
fn hours_reply(service: &ServiceLocation) -> ChatMessage {
    let hours = hours_override(&service.id)
        .or(service.hours.as_deref())
        .unwrap_or(HOURS_NOT_LISTED);
    let mut text = format!("Hours for {}: {}.", service.name, hours);

    if let Some(url) = &service.website {
        text.push_str(&format!(" Website: {url}."));
    } else if let Some(url) = service.detail_text("more_information") {
        text.push_str(&format!(" Info: {url}."));
    }

    if let Some(sentence) = details_sentence(service) {
        text.push(' ');
        text.push_str(&sentence);
    }

    text.push(' ');
    text.push_str(MAP_PROMPT);

    bot_message(text, vec![chat_action(ActionKind::ShowOnMap, service)])
}

/// One sentence aggregating the optional detail fields, in fixed order:
/// type, affordability, region, services list.
fn details_sentence(service: &ServiceLocation) -> Option<String> {
    let mut clauses = Vec::new();
    if let Some(sub) = service.detail_text("sub_description") {
        clauses.push(format!("Type: {sub}"));
    }
    if let Some(afford) = service.detail_text("affordability") {
        clauses.push(format!("Affordability: {afford}"));
    }
    if let Some(region) = service.detail_text("region") {
        clauses.push(format!("Region: {region}"));
    }
    if let Some(list) = service.details.get("services").and_then(|v| v.as_list()) {
        if !list.is_empty() {
            clauses.push(format!("Services: {}", list.join(", ")));
        }
    }
    if clauses.is_empty() {
        None
    } else {
        Some(format!("{}.", clauses.join("; ")))
    }
}

fn chat_action(kind: ActionKind, service: &ServiceLocation) -> ChatAction {
    let label = match kind {
        ActionKind::ShowOnMap => "Show on map",
        ActionKind::ShowDetails => "Show details",
    };
    ChatAction {
        id: format!("act-{}", service.id),
        label: label.to_string(),
        kind,
        service_id: service.id.clone(),
    }
}

pub(crate) fn bot_message(text: String, actions: Vec<ChatAction>) -> ChatMessage {
    ChatMessage {
        id: String::new(), // assigned by the conversation owner
        text,
        sender: Sender::Bot,
        timestamp_ms: now_ms(),
        actions,
    }
}

pub(crate) fn now_ms() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}
