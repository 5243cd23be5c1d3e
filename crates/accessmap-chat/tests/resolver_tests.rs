use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use accessmap_chat::engine::{ChatEngine, APOLOGY, WELCOME};
use accessmap_chat::resolver::{resolve_turn, ChatSession, Resolution, CLARIFY_PROMPT, MAP_PROMPT};
use accessmap_core::catalog::Catalog;
use accessmap_core::traits::RemoteDialogService;
use accessmap_core::types::{
    ActionKind, Coordinates, DetailValue, DialogReply, Sender, ServiceCategory, ServiceLocation,
};
use accessmap_search::SearchIndex;

fn service(id: &str, name: &str, hours: Option<&str>) -> ServiceLocation {
    ServiceLocation {
        id: id.to_string(),
        name: name.to_string(),
        category: ServiceCategory::Healthcare,
        address: "76 Stuart St, Kingston".to_string(),
        coordinates: Coordinates { latitude: 44.23, longitude: -76.48 },
        description: String::new(),
        phone: None,
        website: None,
        hours: hours.map(str::to_string),
        details: HashMap::new(),
    }
}

fn catalog() -> Catalog {
    let mut farm = service("food-7", "Stuart Street Farm Stand", None);
    farm.category = ServiceCategory::Grocery;
    farm.details = HashMap::from([
        ("sub_description".to_string(), DetailValue::Text("Farm Stand".to_string())),
        ("affordability".to_string(), DetailValue::Text("Low-cost".to_string())),
        ("region".to_string(), DetailValue::Text("Central".to_string())),
        (
            "services".to_string(),
            DetailValue::List(vec!["produce".to_string(), "eggs".to_string()]),
        ),
        (
            "more_information".to_string(),
            DetailValue::Text("https://example.org/farm-stand".to_string()),
        ),
    ]);

    let mut kgh = service("kgh-1", "Kingston General Hospital", Some("24/7"));
    kgh.website = Some("https://kingstonhsc.ca".to_string());

    let dieu = service("hotel-dieu-1", "Hotel Dieu Hospital", Some("Mon-Fri 8am-8pm"));

    Catalog::new(vec![kgh, dieu, farm]).expect("catalog")
}

#[test]
fn hours_intent_end_to_end() {
    let catalog = catalog();
    let index = SearchIndex::build(catalog.all());
    let mut session = ChatSession::new();

    let resolution = resolve_turn(
        &mut session,
        "What are the hours for Kingston General Hospital?",
        &catalog,
        &index,
    );
    let Resolution::Reply(message) = resolution else {
        panic!("expected a local reply");
    };
    assert_eq!(message.sender, Sender::Bot);
    assert!(message.text.contains("24/7"));
    assert!(message.text.contains("Website: https://kingstonhsc.ca."));
    assert!(message.text.ends_with(MAP_PROMPT));
    assert_eq!(message.actions.len(), 1);
    assert_eq!(message.actions[0].kind, ActionKind::ShowOnMap);
    assert_eq!(message.actions[0].service_id, "kgh-1");
    assert_eq!(session.last_matched_service_id(), Some("kgh-1"));
}

#[test]
fn stored_hours_reach_the_reply_verbatim() {
    let catalog = catalog();
    let index = SearchIndex::build(catalog.all());
    let mut session = ChatSession::new();

    let Resolution::Reply(message) =
        resolve_turn(&mut session, "hours for Hotel Dieu Hospital?", &catalog, &index)
    else {
        panic!("expected a local reply");
    };
    assert!(message.text.contains("Hours for Hotel Dieu Hospital: Mon-Fri 8am-8pm."));
}

#[test]
fn hours_override_wins_over_stored_hours() {
    let catalog = catalog();
    let index = SearchIndex::build(catalog.all());
    let mut session = ChatSession::new();

    // kgh-1 stores "24/7", but the data patch replaces it wholesale.
    let Resolution::Reply(message) = resolve_turn(
        &mut session,
        "hours for Kingston General Hospital",
        &catalog,
        &index,
    ) else {
        panic!("expected a local reply");
    };
    assert!(message
        .text
        .contains("Hours for Kingston General Hospital: Open 24/7, Monday to Sunday."));
    assert!(!message.text.contains("Hours for Kingston General Hospital: 24/7."));
}

#[test]
fn missing_hours_fall_back_to_not_listed_and_info_label() {
    let catalog = catalog();
    let index = SearchIndex::build(catalog.all());
    let mut session = ChatSession::new();

    let Resolution::Reply(message) = resolve_turn(
        &mut session,
        "when is the Stuart Street Farm Stand open?",
        &catalog,
        &index,
    ) else {
        panic!("expected a local reply");
    };
    assert!(message.text.contains("Hours for Stuart Street Farm Stand: not listed yet."));
    // No website field, so the details-derived URL gets the "Info" label.
    assert!(message.text.contains("Info: https://example.org/farm-stand."));
    // Detail clauses in fixed order, absent fields omitted.
    assert!(message.text.contains(
        "Type: Farm Stand; Affordability: Low-cost; Region: Central; Services: produce, eggs."
    ));
}

#[test]
fn follow_up_action_reuses_last_match() {
    let catalog = catalog();
    let index = SearchIndex::build(catalog.all());
    let mut session = ChatSession::new();

    let _ = resolve_turn(&mut session, "hours for Kingston General Hospital", &catalog, &index);
    assert_eq!(session.last_matched_service_id(), Some("kgh-1"));

    let Resolution::Reply(message) =
        resolve_turn(&mut session, "show it on the map", &catalog, &index)
    else {
        panic!("follow-up must be answered locally");
    };
    assert!(message.text.contains("Kingston General Hospital"));
    assert_eq!(message.actions[0].kind, ActionKind::ShowOnMap);
    // Follow-ups do not disturb the matched-service state.
    assert_eq!(session.last_matched_service_id(), Some("kgh-1"));
}

#[test]
fn action_without_prior_match_falls_through() {
    let catalog = catalog();
    let index = SearchIndex::build(catalog.all());
    let mut session = ChatSession::new();

    // No previous turn: "show it on the map" has nothing to refer to and no
    // hours intent, so it goes to the remote collaborator.
    assert!(matches!(
        resolve_turn(&mut session, "show it on the map", &catalog, &index),
        Resolution::Forward
    ));
}

#[test]
fn no_match_returns_clarifying_prompt_and_clears_state() {
    let catalog = catalog();
    let index = SearchIndex::build(catalog.all());
    let mut session = ChatSession::new();

    let _ = resolve_turn(&mut session, "hours for Kingston General Hospital", &catalog, &index);
    let Resolution::Reply(message) =
        resolve_turn(&mut session, "hours for Xyzzy Nonexistent Place", &catalog, &index)
    else {
        panic!("expected the clarifying prompt");
    };
    assert_eq!(message.text, CLARIFY_PROMPT);
    assert!(message.actions.is_empty());
    assert_eq!(session.last_matched_service_id(), None);
}

#[test]
fn unclaimed_input_is_forwarded() {
    let catalog = catalog();
    let index = SearchIndex::build(catalog.all());
    let mut session = ChatSession::new();

    assert!(matches!(
        resolve_turn(&mut session, "tell me a joke", &catalog, &index),
        Resolution::Forward
    ));
}

#[test]
fn session_reset_clears_follow_up_context() {
    let catalog = catalog();
    let index = SearchIndex::build(catalog.all());
    let mut session = ChatSession::new();

    let _ = resolve_turn(&mut session, "hours for Kingston General Hospital", &catalog, &index);
    session.reset();
    assert!(matches!(
        resolve_turn(&mut session, "show it on the map", &catalog, &index),
        Resolution::Forward
    ));
}

// --- engine wiring ---

struct CountingRemote {
    calls: Arc<AtomicUsize>,
    fail: bool,
}

impl CountingRemote {
    fn new(fail: bool) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (Self { calls: Arc::clone(&calls), fail }, calls)
    }
}

impl RemoteDialogService for CountingRemote {
    fn send_message(&self, text: &str) -> anyhow::Result<DialogReply> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            anyhow::bail!("simulated network failure");
        }
        Ok(DialogReply {
            message: format!("remote echo: {text}"),
            intent: None,
            slots: HashMap::new(),
            service_id: None,
        })
    }
}

#[test]
fn engine_starts_with_welcome_and_forwards_unclaimed_text() {
    let catalog = catalog();
    let index = SearchIndex::build(catalog.all());
    let (remote, calls) = CountingRemote::new(false);
    let mut engine = ChatEngine::new(Box::new(remote));

    assert_eq!(engine.history().len(), 1);
    assert_eq!(engine.history()[0].text, WELCOME);

    let reply = engine.handle_message("tell me a joke", &catalog, &index);
    assert_eq!(reply.text, "remote echo: tell me a joke");
    assert_eq!(reply.sender, Sender::Bot);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    // user message + bot reply appended after the welcome
    assert_eq!(engine.history().len(), 3);
}

#[test]
fn engine_converts_remote_failure_into_apology() {
    let catalog = catalog();
    let index = SearchIndex::build(catalog.all());
    let (remote, _) = CountingRemote::new(true);
    let mut engine = ChatEngine::new(Box::new(remote));

    let reply = engine.handle_message("tell me a joke", &catalog, &index);
    assert_eq!(reply.text, APOLOGY);
}

#[test]
fn engine_answers_hours_locally_without_touching_remote() {
    let catalog = catalog();
    let index = SearchIndex::build(catalog.all());
    let (remote, calls) = CountingRemote::new(true);
    let mut engine = ChatEngine::new(Box::new(remote));

    let reply = engine.handle_message("hours for Kingston General Hospital?", &catalog, &index);
    assert!(reply.text.contains("24/7"));
    let follow_up = engine.handle_message("show it on the map", &catalog, &index);
    assert!(follow_up.text.contains("Kingston General Hospital"));
    assert_eq!(calls.load(Ordering::SeqCst), 0, "local turns never reach the remote");
}
