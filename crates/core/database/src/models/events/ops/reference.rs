use newsdesk_result::Result;

use super::AbstractEvents;
use crate::{Event, ReferenceDb};

#[async_trait]
impl AbstractEvents for ReferenceDb {
    /// Insert a new event into the database
    async fn insert_event(&self, event: &Event) -> Result<()> {
        let mut events = self.events.lock().await;
        if events.contains_key(&event.id) {
            Err(create_database_error!("insert", "events"))
        } else {
            events.insert(event.id.to_string(), event.clone());
            Ok(())
        }
    }

    /// Fetch an event by its id
    async fn fetch_event(&self, id: &str) -> Result<Event> {
        let events = self.events.lock().await;
        events
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(UnknownEvent))
    }

    /// Fetch all events, soonest first
    async fn fetch_events(&self) -> Result<Vec<Event>> {
        let events = self.events.lock().await;
        let mut events: Vec<Event> = events.values().cloned().collect();
        events.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(events)
    }

    /// Fetch events by their ids, skipping any that do not exist
    async fn fetch_events_by_ids(&self, ids: &[String]) -> Result<Vec<Event>> {
        let events = self.events.lock().await;
        Ok(ids.iter().filter_map(|id| events.get(id).cloned()).collect())
    }

    /// Delete an event by its id
    async fn delete_event(&self, id: &str) -> Result<()> {
        let mut events = self.events.lock().await;
        if events.remove(id).is_some() {
            Ok(())
        } else {
            Err(create_error!(UnknownEvent))
        }
    }
}
