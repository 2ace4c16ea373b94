use mongodb::options::FindOptions;
use newsdesk_result::Result;

use super::AbstractEvents;
use crate::{Event, MongoDb};

static COL: &str = "events";

#[async_trait]
impl AbstractEvents for MongoDb {
    /// Insert a new event into the database
    async fn insert_event(&self, event: &Event) -> Result<()> {
        query!(self, insert_one, COL, event).map(|_| ())
    }

    /// Fetch an event by its id
    async fn fetch_event(&self, id: &str) -> Result<Event> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(UnknownEvent))
    }

    /// Fetch all events, soonest first
    async fn fetch_events(&self) -> Result<Vec<Event>> {
        query!(
            self,
            find_with_options,
            COL,
            doc! {},
            FindOptions::builder().sort(doc! { "date": 1_i32 }).build()
        )
    }

    /// Fetch events by their ids, skipping any that do not exist
    async fn fetch_events_by_ids(&self, ids: &[String]) -> Result<Vec<Event>> {
        query!(self, find_by_ids, COL, ids)
    }

    /// Delete an event by its id
    async fn delete_event(&self, id: &str) -> Result<()> {
        let result = query!(self, delete_one_by_id, COL, id)?;
        if result.deleted_count == 0 {
            Err(create_error!(UnknownEvent))
        } else {
            Ok(())
        }
    }
}
