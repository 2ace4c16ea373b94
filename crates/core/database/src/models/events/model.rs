use chrono::{DateTime, Utc};
use newsdesk_models::v0::{DataCreateEvent, EventType};
use newsdesk_models::ExtraFields;
use newsdesk_result::Result;

use crate::{util::new_id, Database};

auto_derived!(
    /// Corporate or calendar event
    pub struct Event {
        /// Unique Id
        #[serde(rename = "_id", with = "crate::util::object_id")]
        pub id: String,
        /// Event title
        pub title: String,
        /// When the event takes place
        #[serde(with = "crate::util::iso_bson_chrono")]
        pub date: DateTime<Utc>,
        /// Event description
        pub description: String,
        /// Kind of event
        #[serde(rename = "type")]
        pub event_type: EventType,
        /// Free text tags
        #[serde(default)]
        pub tags: String,
        /// Headline shown alongside the event
        #[serde(default)]
        pub headline: String,

        /// When the event was created
        #[serde(
            rename = "createdAt",
            with = "crate::util::iso_bson_chrono",
            default = "Utc::now"
        )]
        pub created_at: DateTime<Utc>,
        /// When the event was last updated
        #[serde(
            rename = "updatedAt",
            with = "crate::util::iso_bson_chrono",
            default = "Utc::now"
        )]
        pub updated_at: DateTime<Utc>,

        /// Fields not modelled here, kept as-is
        #[serde(flatten)]
        pub extra: ExtraFields,
    }
);

impl Event {
    /// Create a new event
    pub async fn create(db: &Database, data: DataCreateEvent) -> Result<Event> {
        let now = Utc::now();
        let event = Event {
            id: new_id(),
            title: data.title,
            date: data.date,
            description: data.description,
            event_type: data.event_type,
            tags: data.tags,
            headline: data.headline,
            created_at: now,
            updated_at: now,
            extra: Default::default(),
        };

        db.insert_event(&event).await?;
        info!("Created event {} ({}).", event.id, event.title);
        Ok(event)
    }
}
