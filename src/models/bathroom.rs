use serde::Serialize;

/// One bathroom-family event as stored.
///
/// `person1`/`person2` hold the canonical identity snapshot computed at write
/// time; they are never recomputed when the alias table changes later.
#[derive(Debug, Clone, Serialize)]
pub struct BathroomEvent {
    pub id: i64,
    pub event_type: String, // ⇔ bathroom_events.event_type (open vocabulary)
    pub timestamp: String,  // ⇔ bathroom_events.timestamp (TEXT, ISO 8601)
    pub location: Option<String>,
    pub in_vr: bool, // ⇔ bathroom_events.in_vr (INTEGER 0/1)
    pub person1_raw: Option<String>,
    pub person1: Option<String>, // canonical snapshot
    pub person2_raw: Option<String>,
    pub person2: Option<String>, // canonical snapshot
    pub created_at: String,      // ⇔ bathroom_events.created_at (TEXT, RFC 3339)
}

/// Insert/update payload for a bathroom event.
/// Raw and canonical participant fields travel together so the store never
/// derives one from the other.
#[derive(Debug, Clone)]
pub struct NewBathroomEvent {
    pub event_type: String,
    pub timestamp: String,
    pub location: Option<String>,
    pub in_vr: bool,
    pub person1_raw: Option<String>,
    pub person1: Option<String>,
    pub person2_raw: Option<String>,
    pub person2: Option<String>,
}
