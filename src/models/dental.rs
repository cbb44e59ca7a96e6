use serde::Serialize;

/// One dental-family event (a brushing) as stored.
#[derive(Debug, Clone, Serialize)]
pub struct DentalEvent {
    pub id: i64,
    pub timestamp: String, // ⇔ dental_events.timestamp (TEXT, ISO 8601)
    pub used_flosser: bool, // ⇔ dental_events.used_flosser (INTEGER 0/1)
    pub duration: Option<i64>, // seconds, when the producer tracked it
    pub created_at: String,
}

/// Insert/update payload for a dental event.
#[derive(Debug, Clone)]
pub struct NewDentalEvent {
    pub timestamp: String,
    pub used_flosser: bool,
    pub duration: Option<i64>,
}
