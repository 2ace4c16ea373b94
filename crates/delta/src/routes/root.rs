use newsdesk_config::config;
use newsdesk_result::Result;
use rocket::serde::json::Json;
use schemars::JsonSchema;
use serde::Serialize;

/// # Feature Configuration
#[derive(Serialize, JsonSchema, Debug)]
pub struct NewsdeskFeatures {
    /// Whether company names must match exactly, ignoring legal suffixes
    pub strict_company_matching: bool,
    /// Maximum number of items returned by a curated feed
    pub feed_limit: i64,
}

/// # Server Configuration
#[derive(Serialize, JsonSchema, Debug)]
pub struct NewsdeskConfig {
    /// Newsdesk API Version
    pub newsdesk: String,
    /// Features enabled on this Newsdesk node
    pub features: NewsdeskFeatures,
}

/// # Query Node
///
/// Fetch the server configuration for this Newsdesk instance.
#[openapi(tag = "Core")]
#[get("/")]
pub async fn root() -> Result<Json<NewsdeskConfig>> {
    let config = config().await;

    Ok(Json(NewsdeskConfig {
        newsdesk: env!("CARGO_PKG_VERSION").to_string(),
        features: NewsdeskFeatures {
            strict_company_matching: config.features.strict_company_matching,
            feed_limit: config.features.feed_limit,
        },
    }))
}
