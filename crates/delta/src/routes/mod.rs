use newsdesk_config::Settings;
use rocket::{Build, Rocket};
use rocket_okapi::{okapi::openapi3::OpenApi, settings::OpenApiSettings};

mod companies;
mod events;
mod lookup;
mod news;
mod root;
mod users;

pub fn mount(config: Settings, mut rocket: Rocket<Build>) -> Rocket<Build> {
    let settings = OpenApiSettings::default();

    mount_endpoints_and_merged_docs! {
        rocket, "/".to_owned(), settings,
        "/" => (vec![], custom_openapi_spec(&config)),
        "" => openapi_get_routes_spec![root::root],
        "/news" => news::routes(),
        "/events" => events::routes(),
        "/companies" => companies::routes(),
        "/lookup" => lookup::routes(),
        "/users" => users::routes()
    };

    rocket
}

fn custom_openapi_spec(config: &Settings) -> OpenApi {
    use rocket_okapi::okapi::openapi3::*;

    let mut extensions = schemars::Map::new();
    extensions.insert(
        "x-tagGroups".to_owned(),
        json!([
          {
            "name": "Newsdesk",
            "tags": [
              "Core"
            ]
          },
          {
            "name": "Content",
            "tags": [
              "News",
              "Events"
            ]
          },
          {
            "name": "Markets",
            "tags": [
              "Companies",
              "Lookup"
            ]
          },
          {
            "name": "Readers",
            "tags": [
              "Saved Items"
            ]
          }
        ]),
    );

    OpenApi {
        openapi: OpenApi::default_version(),
        info: Info {
            title: "Newsdesk API".to_owned(),
            description: Some(format!(
                "Market news, corporate events, listings and reader bookmarks. Company matching is {}.",
                if config.features.strict_company_matching {
                    "strict"
                } else {
                    "loose"
                }
            )),
            license: Some(License {
                name: "AGPLv3".to_owned(),
                ..Default::default()
            }),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        },
        servers: vec![Server {
            url: "http://localhost:8000".to_owned(),
            description: Some("Local Newsdesk Environment".to_owned()),
            ..Default::default()
        }],
        extensions,
        tags: vec![
            Tag {
                name: "Core".to_owned(),
                description: Some(
                    "Use in your applications to determine information about the Newsdesk node"
                        .to_owned(),
                ),
                ..Default::default()
            },
            Tag {
                name: "News".to_owned(),
                description: Some("Browse curated feeds and company specific news".to_owned()),
                ..Default::default()
            },
            Tag {
                name: "Events".to_owned(),
                description: Some("List and schedule corporate events".to_owned()),
                ..Default::default()
            },
            Tag {
                name: "Companies".to_owned(),
                description: Some("Browse listed companies and their ticker symbols".to_owned()),
                ..Default::default()
            },
            Tag {
                name: "Lookup".to_owned(),
                description: Some("Find symbols for sectors and commodities".to_owned()),
                ..Default::default()
            },
            Tag {
                name: "Saved Items".to_owned(),
                description: Some("Bookmark news and events for later".to_owned()),
                ..Default::default()
            },
        ],
        ..Default::default()
    }
}
