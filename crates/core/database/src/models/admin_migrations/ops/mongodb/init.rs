use newsdesk_result::Result;

use super::scripts::{create_indexes, LATEST_REVISION};

use crate::mongodb::bson::doc;
use crate::{MigrationInfo, MongoDb};

pub async fn create_database(db: &MongoDb) -> Result<()> {
    info!("Creating database.");

    for collection in [
        "users",
        "filtered_news",
        "events",
        "Company_data",
        "sector",
        "Commodities",
        "migrations",
    ] {
        db.db()
            .create_collection(collection)
            .await
            .map_err(|_| create_database_error!("create_collection", collection))?;
    }

    create_indexes(db).await?;

    db.col::<MigrationInfo>("migrations")
        .insert_one(MigrationInfo {
            id: 0,
            revision: LATEST_REVISION,
        })
        .await
        .map_err(|_| create_database_error!("insert_one", "migrations"))?;

    info!("Created database at revision {LATEST_REVISION}.");
    Ok(())
}
