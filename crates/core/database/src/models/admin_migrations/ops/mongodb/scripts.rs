use mongodb::{options::UpdateOptions, IndexModel};
use newsdesk_result::Result;

use crate::mongodb::bson::{doc, Document};
use crate::{MigrationInfo, MongoDb};

pub const LATEST_REVISION: i32 = 4; // MUST BE +1 to last migration

pub async fn migrate_database(db: &MongoDb) -> Result<()> {
    let migrations = db.col::<MigrationInfo>("migrations");
    let info = migrations
        .find_one(doc! {})
        .await
        .map_err(|_| create_database_error!("find_one", "migrations"))?;

    // Collections written by the ingestion pipeline can exist before we ever ran
    let (id, revision) = match info {
        Some(info) => (info.id, info.revision),
        None => {
            warn!("No migration information found, migrating from scratch.");
            (0, 0)
        }
    };

    let revision = run_migrations(db, revision).await?;

    migrations
        .update_one(
            doc! {
                "_id": id
            },
            doc! {
                "$set": {
                    "revision": revision
                }
            },
        )
        .with_options(UpdateOptions::builder().upsert(true).build())
        .await
        .map_err(|_| create_database_error!("update_one", "migrations"))?;

    info!("Migration complete. Currently at revision {}.", revision);
    Ok(())
}

pub async fn run_migrations(db: &MongoDb, revision: i32) -> Result<i32> {
    info!("Starting database migration.");

    if revision <= 0 {
        info!("Running migration [revision 0]: Test migration system.");
    }

    if revision <= 1 {
        info!("Running migration [revision 1 / 2024-06-03]: Index news and events.");
        create_indexes(db).await?;
    }

    if revision <= 2 {
        info!("Running migration [revision 2 / 2024-07-19]: Add saved lists to legacy users.");

        for field in ["saved_news", "saved_events"] {
            let mut filter = Document::new();
            filter.insert(field, doc! { "$exists": false });

            let mut set = Document::new();
            set.insert(field, Vec::<Document>::new());

            db.col::<Document>("users")
                .update_many(filter, doc! { "$set": set })
                .await
                .map_err(|_| create_database_error!("update_many", "users"))?;
        }
    }

    if revision <= 3 {
        info!("Running migration [revision 3 / 2024-09-02]: Index company listings.");
        create_company_indexes(db).await?;
    }

    // Reminder to update LATEST_REVISION when adding new migrations.
    Ok(LATEST_REVISION.max(revision))
}

/// Indexes backing the news, events and company queries
pub async fn create_indexes(db: &MongoDb) -> Result<()> {
    db.col::<Document>("filtered_news")
        .create_indexes([
            IndexModel::builder().keys(doc! { "sector": 1_i32 }).build(),
            IndexModel::builder()
                .keys(doc! { "PublishedAt": -1_i32 })
                .build(),
            IndexModel::builder().keys(doc! { "global": 1_i32 }).build(),
            IndexModel::builder()
                .keys(doc! { "commodities": 1_i32 })
                .build(),
        ])
        .await
        .map_err(|_| create_database_error!("create_indexes", "filtered_news"))?;

    db.col::<Document>("events")
        .create_index(IndexModel::builder().keys(doc! { "date": 1_i32 }).build())
        .await
        .map_err(|_| create_database_error!("create_index", "events"))?;

    create_company_indexes(db).await
}

/// Indexes backing company listing lookups
async fn create_company_indexes(db: &MongoDb) -> Result<()> {
    db.col::<Document>("Company_data")
        .create_index(
            IndexModel::builder()
                .keys(doc! { "NAME OF COMPANY": 1_i32 })
                .build(),
        )
        .await
        .map_err(|_| create_database_error!("create_index", "Company_data"))?;

    Ok(())
}
