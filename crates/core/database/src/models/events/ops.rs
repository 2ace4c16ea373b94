use newsdesk_result::Result;

use crate::Event;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractEvents: Sync + Send {
    /// Insert a new event into the database
    async fn insert_event(&self, event: &Event) -> Result<()>;

    /// Fetch an event by its id
    async fn fetch_event(&self, id: &str) -> Result<Event>;

    /// Fetch all events, soonest first
    async fn fetch_events(&self) -> Result<Vec<Event>>;

    /// Fetch events by their ids, skipping any that do not exist
    async fn fetch_events_by_ids(&self, ids: &[String]) -> Result<Vec<Event>>;

    /// Delete an event by its id
    async fn delete_event(&self, id: &str) -> Result<()>;
}
