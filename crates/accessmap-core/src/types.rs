//! Domain types shared by the search ranker, the chat resolver and the UI glue.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type ServiceId = String;

/// Fixed category enumeration for catalog entries.
///
/// The wire form is the lower-case name (matches the static catalog data and
/// the mapping tables in `categories`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Healthcare,
    Grocery,
    Community,
    Recreation,
    Transportation,
    Banking,
    Pharmacy,
    Education,
    Government,
    Emergency,
    Housing,
    Libraries,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 12] = [
        ServiceCategory::Healthcare,
        ServiceCategory::Grocery,
        ServiceCategory::Community,
        ServiceCategory::Recreation,
        ServiceCategory::Transportation,
        ServiceCategory::Banking,
        ServiceCategory::Pharmacy,
        ServiceCategory::Education,
        ServiceCategory::Government,
        ServiceCategory::Emergency,
        ServiceCategory::Housing,
        ServiceCategory::Libraries,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ServiceCategory::Healthcare => "healthcare",
            ServiceCategory::Grocery => "grocery",
            ServiceCategory::Community => "community",
            ServiceCategory::Recreation => "recreation",
            ServiceCategory::Transportation => "transportation",
            ServiceCategory::Banking => "banking",
            ServiceCategory::Pharmacy => "pharmacy",
            ServiceCategory::Education => "education",
            ServiceCategory::Government => "government",
            ServiceCategory::Emergency => "emergency",
            ServiceCategory::Housing => "housing",
            ServiceCategory::Libraries => "libraries",
        }
    }

    /// Human-readable label for list headers and chat replies.
    pub fn label(self) -> &'static str {
        match self {
            ServiceCategory::Healthcare => "Healthcare",
            ServiceCategory::Grocery => "Groceries",
            ServiceCategory::Community => "Community services",
            ServiceCategory::Recreation => "Recreation",
            ServiceCategory::Transportation => "Transportation",
            ServiceCategory::Banking => "Banks",
            ServiceCategory::Pharmacy => "Pharmacies",
            ServiceCategory::Education => "Education",
            ServiceCategory::Government => "Government",
            ServiceCategory::Emergency => "Emergency services",
            ServiceCategory::Housing => "Housing",
            ServiceCategory::Libraries => "Libraries",
        }
    }

    /// Marker color used by the map layer (bright, high-contrast palette).
    pub fn color(self) -> &'static str {
        match self {
            ServiceCategory::Healthcare => "#FF3366",
            ServiceCategory::Grocery => "#39FF14",
            ServiceCategory::Community => "#E6E6FA",
            ServiceCategory::Recreation => "#FF69B4",
            ServiceCategory::Transportation => "#FFFF00",
            ServiceCategory::Banking => "#00CED1",
            ServiceCategory::Pharmacy => "#BF00FF",
            ServiceCategory::Education => "#00BFFF",
            ServiceCategory::Government => "#FFB347",
            ServiceCategory::Emergency => "#FF4500",
            ServiceCategory::Housing => "#FF8C00",
            ServiceCategory::Libraries => "#9370DB",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Open-ended detail value carried in `ServiceLocation::details`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum DetailValue {
    Text(String),
    Number(f64),
    List(Vec<String>),
}

impl DetailValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DetailValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            DetailValue::List(items) => Some(items),
            _ => None,
        }
    }
}

/// A catalog entry. Immutable after load; `id` is unique across the catalog.
///
/// `name` is the primary matching target, `address` the secondary one.
/// `details` carries open-ended per-source fields (`sub_description`,
/// `affordability`, `region`, `services`, `more_information`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceLocation {
    pub id: ServiceId,
    pub name: String,
    pub category: ServiceCategory,
    pub address: String,
    pub coordinates: Coordinates,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub details: HashMap<String, DetailValue>,
}

impl ServiceLocation {
    pub fn detail_text(&self, key: &str) -> Option<&str> {
        self.details.get(key).and_then(DetailValue::as_text)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A structured, clickable follow-up offered alongside a chat reply.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatAction {
    pub id: String,
    pub label: String,
    pub kind: ActionKind,
    pub service_id: ServiceId,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    ShowOnMap,
    ShowDetails,
}

/// One entry of the append-only conversation history. Never mutated after
/// creation, only appended by the conversation owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub sender: Sender,
    pub timestamp_ms: u64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<ChatAction>,
}

/// Reply shape of the remote dialog collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogReply {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub slots: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<ServiceId>,
}

/// Straight-line travel estimate between two catalog entries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TravelEstimate {
    pub distance_km: f64,
    pub walking_minutes: u32,
    pub driving_minutes: u32,
}
