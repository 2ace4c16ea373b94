use chrono::{DateTime, Utc};

use crate::ExtraFields;

auto_derived!(
    /// Kind of corporate or calendar event
    #[derive(Copy)]
    pub enum EventType {
        #[cfg_attr(feature = "serde", serde(rename = "AGM"))]
        Agm,
        Results,
        #[cfg_attr(feature = "serde", serde(rename = "Board Meeting"))]
        BoardMeeting,
        #[cfg_attr(feature = "serde", serde(rename = "Investor Meet"))]
        InvestorMeet,
        #[cfg_attr(feature = "serde", serde(rename = "Product Launch"))]
        ProductLaunch,
        Inauguration,
        #[cfg_attr(feature = "serde", serde(rename = "Earnings Call"))]
        EarningsCall,
        Conference,
        #[cfg_attr(feature = "serde", serde(rename = "Press Release"))]
        PressRelease,
    }

    /// Corporate or calendar event
    pub struct Event {
        /// Unique Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,

        /// Event title
        pub title: String,
        /// When the event takes place
        pub date: DateTime<Utc>,
        /// Event description
        pub description: String,
        /// Kind of event
        #[cfg_attr(feature = "serde", serde(rename = "type"))]
        pub event_type: EventType,
        /// Free text tags
        #[cfg_attr(feature = "serde", serde(default))]
        pub tags: String,
        /// Headline shown alongside the event
        #[cfg_attr(feature = "serde", serde(default))]
        pub headline: String,

        /// When the event was created
        #[cfg_attr(feature = "serde", serde(rename = "createdAt"))]
        pub created_at: DateTime<Utc>,
        /// When the event was last updated
        #[cfg_attr(feature = "serde", serde(rename = "updatedAt"))]
        pub updated_at: DateTime<Utc>,

        /// Any other fields present on the stored document
        #[cfg_attr(feature = "serde", serde(flatten))]
        pub extra: ExtraFields,
    }

    /// New event information
    #[cfg_attr(feature = "validator", derive(validator::Validate))]
    pub struct DataCreateEvent {
        /// Event title
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 256)))]
        pub title: String,
        /// When the event takes place
        pub date: DateTime<Utc>,
        /// Event description
        #[cfg_attr(feature = "validator", validate(length(min = 1, max = 4096)))]
        pub description: String,
        /// Kind of event
        #[cfg_attr(feature = "serde", serde(rename = "type"))]
        pub event_type: EventType,
        /// Free text tags
        #[cfg_attr(feature = "serde", serde(default))]
        pub tags: String,
        /// Headline shown alongside the event
        #[cfg_attr(feature = "serde", serde(default))]
        pub headline: String,
    }

    /// List of events
    pub struct EventsResponse {
        /// Whether the operation succeeded
        pub success: bool,
        /// Events sorted by date
        pub events: Vec<Event>,
    }

    /// Single event
    pub struct EventResponse {
        /// Whether the operation succeeded
        pub success: bool,
        /// Event
        pub event: Event,
    }

    /// Newly created event
    pub struct CreateEventResponse {
        /// Whether the operation succeeded
        pub success: bool,
        /// Human readable outcome
        pub message: String,
        /// Created event
        pub event: Event,
    }
);

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::{DataCreateEvent, EventType};

    #[test]
    fn event_types_use_display_names() {
        let data: DataCreateEvent = serde_json::from_value(serde_json::json!({
            "title": "Q2 Results",
            "date": "2026-10-20T10:00:00Z",
            "description": "Quarterly results",
            "type": "Board Meeting"
        }))
        .expect("event data");

        assert_eq!(data.event_type, EventType::BoardMeeting);
        assert!(data.tags.is_empty());
        assert_eq!(
            serde_json::to_value(EventType::Agm).expect("json"),
            serde_json::json!("AGM")
        );
    }

    #[test]
    fn unknown_event_type_is_rejected() {
        let data = serde_json::from_value::<DataCreateEvent>(serde_json::json!({
            "title": "Party",
            "date": "2026-10-20T10:00:00Z",
            "description": "Office party",
            "type": "Party"
        }));

        assert!(data.is_err());
    }
}
