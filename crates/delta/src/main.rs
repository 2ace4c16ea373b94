#[macro_use]
extern crate rocket;
#[macro_use]
extern crate rocket_okapi;
#[macro_use]
extern crate serde_json;

pub mod routes;
pub mod util;

use log::info;
use newsdesk_config::config;
use newsdesk_database::{matching::CompanyMatcher, DatabaseInfo};
use rocket::{Build, Rocket};

/// Build the API server
pub async fn web() -> Rocket<Build> {
    // Get settings
    let config = config().await;

    // Setup database
    let db = DatabaseInfo::Auto.connect().await.unwrap();
    db.migrate_database().await.unwrap();

    // Setup company matching
    let matcher = CompanyMatcher::new(config.features.strict_company_matching.into());
    info!(
        "Matching company names in {:?} mode.",
        matcher.mode()
    );

    // Configure Rocket
    let rocket = rocket::build();
    routes::mount(config, rocket)
        .mount(
            "/swagger/",
            rocket_okapi::swagger_ui::make_swagger_ui(&rocket_okapi::swagger_ui::SwaggerUIConfig {
                url: "../openapi.json".to_owned(),
                ..Default::default()
            }),
        )
        .register("/", util::catchers::all_catchers())
        .manage(db)
        .manage(matcher)
}

#[launch]
async fn rocket() -> _ {
    newsdesk_config::setup_logging();

    info!(
        "Starting Newsdesk API [version {}].",
        env!("CARGO_PKG_VERSION")
    );

    web().await
}
