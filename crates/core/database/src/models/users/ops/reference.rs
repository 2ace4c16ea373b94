use newsdesk_result::Result;

use super::AbstractUsers;
use crate::{ReferenceDb, SavedList, User};

#[async_trait]
impl AbstractUsers for ReferenceDb {
    /// Insert a new user into the database
    async fn insert_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.lock().await;
        if users.contains_key(&user.id) {
            Err(create_database_error!("insert", "users"))
        } else {
            users.insert(user.id.to_string(), user.clone());
            Ok(())
        }
    }

    /// Fetch a user from the database
    async fn fetch_user(&self, id: &str) -> Result<User> {
        let users = self.users.lock().await;
        users
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(UnknownUser))
    }

    /// Atomically add the item to the saved-list if absent, otherwise remove it
    async fn toggle_saved_item(
        &self,
        user_id: &str,
        item_id: &str,
        list: SavedList,
    ) -> Result<bool> {
        let mut users = self.users.lock().await;
        let user = users
            .get_mut(user_id)
            .ok_or_else(|| create_error!(UnknownUser))?;

        Ok(user.toggle_entry(item_id, list))
    }

    /// Empty a saved-list
    async fn clear_saved_items(&self, user_id: &str, list: SavedList) -> Result<()> {
        let mut users = self.users.lock().await;
        let user = users
            .get_mut(user_id)
            .ok_or_else(|| create_error!(UnknownUser))?;

        match list {
            SavedList::News => user.saved_news.clear(),
            SavedList::Events => user.saved_events.clear(),
        }

        Ok(())
    }

    /// Delete a user by their id
    async fn delete_user(&self, id: &str) -> Result<()> {
        let mut users = self.users.lock().await;
        if users.remove(id).is_some() {
            Ok(())
        } else {
            Err(create_error!(UnknownUser))
        }
    }
}
