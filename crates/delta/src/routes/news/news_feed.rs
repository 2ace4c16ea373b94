use newsdesk_config::config;
use newsdesk_database::{Database, NewsFeed};
use newsdesk_models::v0::{self, ListResponse};
use newsdesk_result::Result;
use rocket::{serde::json::Json, State};

/// # News Feed
///
/// Fetch the latest articles on a curated feed: `global`, `commodities` or `trending`.
#[openapi(tag = "News")]
#[get("/feed/<feed>")]
pub async fn news_feed(
    db: &State<Database>,
    feed: String,
) -> Result<Json<ListResponse<v0::NewsItem>>> {
    let feed: NewsFeed = feed.parse()?;
    let limit = config().await.features.feed_limit;

    let items = db.fetch_news_feed(feed, limit).await?;
    Ok(Json(
        items
            .into_iter()
            .map(Into::into)
            .collect::<Vec<v0::NewsItem>>()
            .into(),
    ))
}
