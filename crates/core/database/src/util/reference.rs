use newsdesk_result::Result;

use crate::{util::object_id, Database, Event, NewsItem, User};

/// Reference to some object in the database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Id of object, in canonical form once parsed
    pub id: String,
}

impl Reference {
    /// Create a Ref from a string, rejecting anything that is not a valid id
    ///
    /// Spellings of the same object id resolve to the same Ref.
    /// `field` names the offending input in the returned error.
    pub fn parse(id: &str, field: &str) -> Result<Reference> {
        match object_id::canonical(id) {
            Some(id) => Ok(Reference { id }),
            None => Err(create_error!(InvalidArgument {
                field: field.to_string()
            })),
        }
    }

    /// Create a Ref from a required request field
    pub fn required(id: Option<&str>, field: &str) -> Result<Reference> {
        match id {
            Some(id) => Reference::parse(id, field),
            None => Err(create_error!(InvalidArgument {
                field: field.to_string()
            })),
        }
    }

    /// Fetch user from Ref
    pub async fn as_user(&self, db: &Database) -> Result<User> {
        db.fetch_user(&self.id).await
    }

    /// Fetch news article from Ref
    pub async fn as_news(&self, db: &Database) -> Result<NewsItem> {
        db.fetch_news(&self.id).await
    }

    /// Fetch event from Ref
    pub async fn as_event(&self, db: &Database) -> Result<Event> {
        db.fetch_event(&self.id).await
    }
}
