use bson::Document;
use mongodb::options::FindOptions;
use newsdesk_result::Result;

use super::AbstractNews;
use crate::{MongoDb, NewsFeed, NewsItem, TRENDING_IMPACT, TRENDING_SENTIMENTS};

static COL: &str = "filtered_news";

impl NewsFeed {
    /// Store-side filter selecting the articles on this feed
    fn filter(&self) -> Document {
        match self {
            NewsFeed::Global => doc! { "global": true },
            NewsFeed::Commodities => doc! { "commodities": true },
            NewsFeed::Trending => doc! {
                "$or": [
                    { "impact": TRENDING_IMPACT },
                    { "sentiment": { "$in": TRENDING_SENTIMENTS.to_vec() } }
                ]
            },
        }
    }
}

fn newest_first() -> FindOptions {
    FindOptions::builder()
        .sort(doc! { "PublishedAt": -1_i32 })
        .build()
}

#[async_trait]
impl AbstractNews for MongoDb {
    /// Insert a new article into the database
    async fn insert_news(&self, item: &NewsItem) -> Result<()> {
        query!(self, insert_one, COL, item).map(|_| ())
    }

    /// Fetch an article by its id
    async fn fetch_news(&self, id: &str) -> Result<NewsItem> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(UnknownNews))
    }

    /// Fetch every article, newest first
    async fn fetch_all_news(&self) -> Result<Vec<NewsItem>> {
        query!(self, find_with_options, COL, doc! {}, newest_first())
    }

    /// Fetch articles with the given sector, newest first
    async fn fetch_news_by_sector(&self, sector: &str) -> Result<Vec<NewsItem>> {
        query!(
            self,
            find_with_options,
            COL,
            doc! {
                "sector": sector
            },
            newest_first()
        )
    }

    /// Fetch articles by their ids, skipping any that do not exist
    async fn fetch_news_by_ids(&self, ids: &[String]) -> Result<Vec<NewsItem>> {
        query!(self, find_by_ids, COL, ids)
    }

    /// Fetch up to `limit` articles on the given feed, newest first
    async fn fetch_news_feed(&self, feed: NewsFeed, limit: i64) -> Result<Vec<NewsItem>> {
        query!(
            self,
            find_with_options,
            COL,
            feed.filter(),
            FindOptions::builder()
                .sort(doc! { "PublishedAt": -1_i32 })
                .limit(limit)
                .build()
        )
    }

    /// Delete an article by its id
    async fn delete_news(&self, id: &str) -> Result<()> {
        let result = query!(self, delete_one_by_id, COL, id)?;
        if result.deleted_count == 0 {
            Err(create_error!(UnknownNews))
        } else {
            Ok(())
        }
    }
}
