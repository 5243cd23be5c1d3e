use accessmap_chat::find_best_service_match;
use accessmap_core::types::{Coordinates, ServiceCategory, ServiceLocation};
use accessmap_search::SearchIndex;

fn service(id: &str, name: &str, address: &str) -> ServiceLocation {
    ServiceLocation {
        id: id.to_string(),
        name: name.to_string(),
        category: ServiceCategory::Community,
        address: address.to_string(),
        coordinates: Coordinates { latitude: 44.23, longitude: -76.48 },
        description: String::new(),
        phone: None,
        website: None,
        hours: None,
        details: Default::default(),
    }
}

fn catalog() -> Vec<ServiceLocation> {
    vec![
        service("kgh-1", "Kingston General Hospital", "76 Stuart St, Kingston"),
        service("hotel-dieu-1", "Hotel Dieu Hospital", "166 Brock St, Kingston"),
        service("metro-1", "Metro", "1201 Princess St, Kingston"),
        service("metro-2", "Metro - Princess Street", "1201 Princess St, Kingston"),
        service("freshco-1", "FreshCo Kingston Centre", "805 Gardiners Rd, Kingston"),
        service("market-1", "Memorial Centre Farmers Market", "303 York St, Kingston"),
    ]
}

#[test]
fn direct_substring_pass_ignores_surrounding_words() {
    let services = catalog();
    let index = SearchIndex::build(&services);
    let found = find_best_service_match("I love Kingston General Hospital downtown", &index)
        .expect("direct match");
    assert_eq!(found.id, "kgh-1");
}

#[test]
fn direct_substring_prefers_longest_name() {
    let services = catalog();
    let index = SearchIndex::build(&services);
    // Both "Metro" and "Metro - Princess Street" are substrings; the longer
    // official name wins.
    let found = find_best_service_match("hours for metro princess street please", &index)
        .expect("match");
    assert_eq!(found.id, "metro-2");
}

#[test]
fn token_pass_resolves_partial_references() {
    let services = catalog();
    let index = SearchIndex::build(&services);
    // "kingston" is a stop word, so this cannot hit the direct pass; the
    // single strong name token "general" carries the match.
    let found = find_best_service_match("kingston general", &index).expect("token match");
    assert_eq!(found.id, "kgh-1");
}

#[test]
fn single_generic_shared_token_is_rejected() {
    let services = catalog();
    let index = SearchIndex::build(&services);
    // "dieu" matches one of Hotel Dieu's two name tokens; one of two is not
    // enough without the strong-single-token exception.
    assert!(find_best_service_match("dieu", &index).is_none());
    // Pure stop words tokenize to nothing at all.
    assert!(find_best_service_match("the hospital service centre", &index).is_none());
}

#[test]
fn strong_single_token_exception() {
    let services = catalog();
    let index = SearchIndex::build(&services);
    // "FreshCo Kingston Centre" keeps exactly one name token after stop-word
    // filtering ("freshco", 7 chars); the full name is not a substring of the
    // input, so only the token pass can resolve this.
    let found = find_best_service_match("is freshco expensive", &index).expect("match");
    assert_eq!(found.id, "freshco-1");
}

#[test]
fn two_token_matches_beat_one() {
    let services = catalog();
    let index = SearchIndex::build(&services);
    let found = find_best_service_match("farmers market at memorial", &index).expect("match");
    assert_eq!(found.id, "market-1");
}

#[test]
fn empty_input_matches_nothing() {
    let services = catalog();
    let index = SearchIndex::build(&services);
    assert!(find_best_service_match("", &index).is_none());
    assert!(find_best_service_match("   !?!   ", &index).is_none());
}
