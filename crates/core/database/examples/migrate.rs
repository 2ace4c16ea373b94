use newsdesk_database::DatabaseInfo;

#[async_std::main]
async fn main() {
    newsdesk_config::setup_logging();

    let db = DatabaseInfo::Auto.connect().await.unwrap();
    db.migrate_database().await.unwrap();
}
