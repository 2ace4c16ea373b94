use newsdesk_result::Result;

use crate::{NewsFeed, NewsItem};

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractNews: Sync + Send {
    /// Insert a new article into the database
    async fn insert_news(&self, item: &NewsItem) -> Result<()>;

    /// Fetch an article by its id
    async fn fetch_news(&self, id: &str) -> Result<NewsItem>;

    /// Fetch every article, newest first
    async fn fetch_all_news(&self) -> Result<Vec<NewsItem>>;

    /// Fetch articles with the given sector, newest first
    async fn fetch_news_by_sector(&self, sector: &str) -> Result<Vec<NewsItem>>;

    /// Fetch articles by their ids, skipping any that do not exist
    async fn fetch_news_by_ids(&self, ids: &[String]) -> Result<Vec<NewsItem>>;

    /// Fetch up to `limit` articles on the given feed, newest first
    async fn fetch_news_feed(&self, feed: NewsFeed, limit: i64) -> Result<Vec<NewsItem>>;

    /// Delete an article by its id
    async fn delete_news(&self, id: &str) -> Result<()>;
}
