mod admin_migrations;
mod companies;
mod events;
mod news;
mod symbols;
mod users;

pub use admin_migrations::*;
pub use companies::*;
pub use events::*;
pub use news::*;
pub use symbols::*;
pub use users::*;

#[cfg(feature = "mongodb")]
use crate::MongoDb;
use crate::{Database, ReferenceDb};

pub trait AbstractDatabase:
    Sync
    + Send
    + admin_migrations::AbstractMigrations
    + companies::AbstractCompanies
    + events::AbstractEvents
    + news::AbstractNews
    + symbols::AbstractSymbols
    + users::AbstractUsers
{
}

impl AbstractDatabase for ReferenceDb {}
#[cfg(feature = "mongodb")]
impl AbstractDatabase for MongoDb {}

impl std::ops::Deref for Database {
    type Target = dyn AbstractDatabase;

    fn deref(&self) -> &Self::Target {
        match &self {
            Database::Reference(dummy) => dummy,
            #[cfg(feature = "mongodb")]
            Database::MongoDb(mongo) => mongo,
        }
    }
}
