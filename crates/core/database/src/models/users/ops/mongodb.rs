use newsdesk_result::Result;

use super::AbstractUsers;
use crate::{util::object_id, MongoDb, SavedList, User};

static COL: &str = "users";

/// Rounds of add-then-remove before giving up on a contended toggle
static TOGGLE_ATTEMPTS: usize = 3;

#[async_trait]
impl AbstractUsers for MongoDb {
    /// Insert a new user into the database
    async fn insert_user(&self, user: &User) -> Result<()> {
        query!(self, insert_one, COL, user).map(|_| ())
    }

    /// Fetch a user from the database
    async fn fetch_user(&self, id: &str) -> Result<User> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(UnknownUser))
    }

    /// Atomically add the item to the saved-list if absent, otherwise remove it
    async fn toggle_saved_item(
        &self,
        user_id: &str,
        item_id: &str,
        list: SavedList,
    ) -> Result<bool> {
        let field = list.field();
        let key = list.key();
        let path = format!("{field}.{key}");
        let user = MongoDb::id_filter(user_id);
        let item = object_id::any_form(item_id);

        for _ in 0..TOGGLE_ATTEMPTS {
            let mut filter = user.clone();
            filter.insert(path.as_str(), doc! { "$nin": item.clone() });

            let added = query!(
                self,
                update_one,
                COL,
                filter,
                doc! {
                    "$push": {
                        field: {
                            key: object_id::to_bson(item_id),
                            "savedAt": bson::DateTime::now()
                        }
                    }
                }
            )?;

            if added.modified_count == 1 {
                return Ok(true);
            }

            let mut filter = user.clone();
            filter.insert(path.as_str(), doc! { "$in": item.clone() });

            let removed = query!(
                self,
                update_one,
                COL,
                filter,
                doc! {
                    "$pull": {
                        field: {
                            key: {
                                "$in": item.clone()
                            }
                        }
                    }
                }
            )?;

            if removed.modified_count == 1 {
                return Ok(false);
            }

            if query!(self, count_documents, COL, user.clone())? == 0 {
                return Err(create_error!(UnknownUser));
            }

            debug!("Saved list {field} of {user_id} changed during toggle, retrying.");
        }

        error!("Gave up toggling {item_id} in {field} of {user_id}.");
        Err(create_error!(InternalError))
    }

    /// Empty a saved-list
    async fn clear_saved_items(&self, user_id: &str, list: SavedList) -> Result<()> {
        let result = query!(
            self,
            update_one_by_id,
            COL,
            user_id,
            doc! {
                "$set": {
                    list.field(): []
                }
            }
        )?;

        if result.matched_count == 0 {
            Err(create_error!(UnknownUser))
        } else {
            Ok(())
        }
    }

    /// Delete a user by their id
    async fn delete_user(&self, id: &str) -> Result<()> {
        let result = query!(self, delete_one_by_id, COL, id)?;
        if result.deleted_count == 0 {
            Err(create_error!(UnknownUser))
        } else {
            Ok(())
        }
    }
}
