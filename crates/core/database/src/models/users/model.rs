use std::collections::HashMap;

use chrono::{DateTime, Utc};
use newsdesk_models::ExtraFields;
use newsdesk_result::Result;

use crate::{
    util::{new_id, reference::Reference},
    Database, Event, NewsItem,
};

auto_derived!(
    /// Bookmarked news article
    pub struct SavedNews {
        /// Id of the saved article
        #[serde(rename = "newsId", with = "crate::util::object_id")]
        pub news_id: String,
        /// When the article was saved
        #[serde(
            rename = "savedAt",
            with = "crate::util::iso_bson_chrono",
            default = "Utc::now"
        )]
        pub saved_at: DateTime<Utc>,
    }

    /// Bookmarked event
    pub struct SavedEvent {
        /// Id of the saved event
        #[serde(rename = "eventId", with = "crate::util::object_id")]
        pub event_id: String,
        /// When the event was saved
        #[serde(
            rename = "savedAt",
            with = "crate::util::iso_bson_chrono",
            default = "Utc::now"
        )]
        pub saved_at: DateTime<Utc>,
    }

    /// Reader account
    pub struct User {
        /// Unique Id
        #[serde(rename = "_id", with = "crate::util::object_id")]
        pub id: String,
        /// Display name
        #[serde(default)]
        pub name: String,
        /// Contact email
        #[serde(default)]
        pub email: String,

        /// Bookmarked news articles
        #[serde(default)]
        pub saved_news: Vec<SavedNews>,
        /// Bookmarked events
        #[serde(default)]
        pub saved_events: Vec<SavedEvent>,

        /// When the account was created
        #[serde(
            rename = "createdAt",
            with = "crate::util::iso_bson_chrono",
            default = "Utc::now"
        )]
        pub created_at: DateTime<Utc>,

        /// Fields not modelled here, kept as-is
        #[serde(flatten)]
        pub extra: ExtraFields,
    }
);

/// Saved-list on a user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavedList {
    News,
    Events,
}

impl SavedList {
    /// Name of the list field on the user document
    pub fn field(&self) -> &'static str {
        match self {
            SavedList::News => "saved_news",
            SavedList::Events => "saved_events",
        }
    }

    /// Name of the id field within each saved entry
    pub fn key(&self) -> &'static str {
        match self {
            SavedList::News => "newsId",
            SavedList::Events => "eventId",
        }
    }
}

impl User {
    /// Create a new user
    pub async fn create(db: &Database, name: String, email: String) -> Result<User> {
        let user = User {
            id: new_id(),
            name,
            email,
            saved_news: vec![],
            saved_events: vec![],
            created_at: Utc::now(),
            extra: Default::default(),
        };

        db.insert_user(&user).await?;
        Ok(user)
    }

    /// Flip the presence of an item in one of this user's saved-lists
    ///
    /// Returns whether the item is saved afterwards.
    pub fn toggle_entry(&mut self, item_id: &str, list: SavedList) -> bool {
        match list {
            SavedList::News => {
                if let Some(index) = self.saved_news.iter().position(|e| e.news_id == item_id) {
                    self.saved_news.remove(index);
                    false
                } else {
                    self.saved_news.push(SavedNews {
                        news_id: item_id.to_string(),
                        saved_at: Utc::now(),
                    });
                    true
                }
            }
            SavedList::Events => {
                if let Some(index) = self.saved_events.iter().position(|e| e.event_id == item_id) {
                    self.saved_events.remove(index);
                    false
                } else {
                    self.saved_events.push(SavedEvent {
                        event_id: item_id.to_string(),
                        saved_at: Utc::now(),
                    });
                    true
                }
            }
        }
    }

    /// Save the item if absent, otherwise remove it
    ///
    /// Returns whether the item is saved afterwards.
    pub async fn toggle_saved(
        db: &Database,
        user_id: &str,
        item_id: &str,
        list: SavedList,
    ) -> Result<bool> {
        let user = Reference::parse(user_id, "userId")?;
        let item = Reference::parse(item_id, list.key())?;

        let saved = db.toggle_saved_item(&user.id, &item.id, list).await?;
        info!(
            "{} {} in {} of {}.",
            if saved { "Saved" } else { "Removed" },
            item.id,
            list.field(),
            user.id
        );

        Ok(saved)
    }

    /// Fetch the articles this user has saved, in the order they were saved
    ///
    /// Entries pointing at articles that no longer exist are skipped.
    pub async fn fetch_saved_news(db: &Database, user_id: &str) -> Result<Vec<NewsItem>> {
        let user = Reference::parse(user_id, "userId")?.as_user(db).await?;
        let ids: Vec<String> = user.saved_news.into_iter().map(|e| e.news_id).collect();

        let mut found: HashMap<String, NewsItem> = db
            .fetch_news_by_ids(&ids)
            .await?
            .into_iter()
            .map(|item| (item.id.clone(), item))
            .collect();

        Ok(ids.iter().filter_map(|id| found.remove(id)).collect())
    }

    /// Fetch the events this user has saved, in the order they were saved
    ///
    /// Entries pointing at events that no longer exist are skipped.
    pub async fn fetch_saved_events(db: &Database, user_id: &str) -> Result<Vec<Event>> {
        let user = Reference::parse(user_id, "userId")?.as_user(db).await?;
        let ids: Vec<String> = user.saved_events.into_iter().map(|e| e.event_id).collect();

        let mut found: HashMap<String, Event> = db
            .fetch_events_by_ids(&ids)
            .await?
            .into_iter()
            .map(|event| (event.id.clone(), event))
            .collect();

        Ok(ids.iter().filter_map(|id| found.remove(id)).collect())
    }

    /// Empty one of this user's saved-lists
    pub async fn clear_saved(db: &Database, user_id: &str, list: SavedList) -> Result<()> {
        let user = Reference::parse(user_id, "userId")?;
        db.clear_saved_items(&user.id, list).await?;
        info!("Cleared {} of {}.", list.field(), user.id);
        Ok(())
    }
}
