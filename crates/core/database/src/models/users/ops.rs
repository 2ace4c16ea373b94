use newsdesk_result::Result;

use crate::{SavedList, User};

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractUsers: Sync + Send {
    /// Insert a new user into the database
    async fn insert_user(&self, user: &User) -> Result<()>;

    /// Fetch a user from the database
    async fn fetch_user(&self, id: &str) -> Result<User>;

    /// Atomically add the item to the saved-list if absent, otherwise remove it
    ///
    /// Returns whether the item is saved afterwards.
    async fn toggle_saved_item(&self, user_id: &str, item_id: &str, list: SavedList)
        -> Result<bool>;

    /// Empty a saved-list
    async fn clear_saved_items(&self, user_id: &str, list: SavedList) -> Result<()>;

    /// Delete a user by their id
    async fn delete_user(&self, id: &str) -> Result<()>;
}
