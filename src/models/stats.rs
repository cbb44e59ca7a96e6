use super::{bathroom::BathroomEvent, dental::DentalEvent};
use serde::Serialize;

/// Count of one event type on one day.
#[derive(Debug, Clone, Serialize)]
pub struct TypeDayCount {
    pub event_type: String,
    pub date: String, // YYYY-MM-DD
    pub count: i64,
}

/// Count of one event type at one location.
#[derive(Debug, Clone, Serialize)]
pub struct TypeLocationCount {
    pub event_type: String,
    pub location: String,
    pub count: i64,
}

/// Leaderboard row: canonical participant and how often they appear.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PersonCount {
    pub person: String,
    pub count: i64,
}

/// Per-day brushing count plus how many of those used the flosser.
/// `floss_count` is a summed boolean flag, not a distinct event type.
#[derive(Debug, Clone, Serialize)]
pub struct DentalDayCount {
    pub date: String,
    pub brush_count: i64,
    pub floss_count: i64,
}

/// The combined dashboard payload. Derived on every read from the current
/// store contents; nothing in here is persisted or cached.
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub bathroom_stats: Vec<TypeDayCount>,
    pub location_stats: Vec<TypeLocationCount>,
    pub person_stats: Vec<PersonCount>,
    pub dental_stats: Vec<DentalDayCount>,
    pub recent_bathroom: Vec<BathroomEvent>,
    pub recent_dental: Vec<DentalEvent>,
}
