use newsdesk_result::Result;

use super::AbstractNews;
use crate::{models::news::model::sort_newest_first, NewsFeed, NewsItem, ReferenceDb};

#[async_trait]
impl AbstractNews for ReferenceDb {
    /// Insert a new article into the database
    async fn insert_news(&self, item: &NewsItem) -> Result<()> {
        let mut news = self.news.lock().await;
        if news.contains_key(&item.id) {
            Err(create_database_error!("insert", "filtered_news"))
        } else {
            news.insert(item.id.to_string(), item.clone());
            Ok(())
        }
    }

    /// Fetch an article by its id
    async fn fetch_news(&self, id: &str) -> Result<NewsItem> {
        let news = self.news.lock().await;
        news.get(id)
            .cloned()
            .ok_or_else(|| create_error!(UnknownNews))
    }

    /// Fetch every article, newest first
    async fn fetch_all_news(&self) -> Result<Vec<NewsItem>> {
        let news = self.news.lock().await;
        let mut items: Vec<NewsItem> = news.values().cloned().collect();
        sort_newest_first(&mut items);
        Ok(items)
    }

    /// Fetch articles with the given sector, newest first
    async fn fetch_news_by_sector(&self, sector: &str) -> Result<Vec<NewsItem>> {
        let news = self.news.lock().await;
        let mut items: Vec<NewsItem> = news
            .values()
            .filter(|item| item.sector.as_deref() == Some(sector))
            .cloned()
            .collect();
        sort_newest_first(&mut items);
        Ok(items)
    }

    /// Fetch articles by their ids, skipping any that do not exist
    async fn fetch_news_by_ids(&self, ids: &[String]) -> Result<Vec<NewsItem>> {
        let news = self.news.lock().await;
        Ok(ids.iter().filter_map(|id| news.get(id).cloned()).collect())
    }

    /// Fetch up to `limit` articles on the given feed, newest first
    async fn fetch_news_feed(&self, feed: NewsFeed, limit: i64) -> Result<Vec<NewsItem>> {
        let news = self.news.lock().await;
        let mut items: Vec<NewsItem> = news
            .values()
            .filter(|item| feed.includes(item))
            .cloned()
            .collect();
        sort_newest_first(&mut items);
        items.truncate(limit.max(0) as usize);
        Ok(items)
    }

    /// Delete an article by its id
    async fn delete_news(&self, id: &str) -> Result<()> {
        let mut news = self.news.lock().await;
        if news.remove(id).is_some() {
            Ok(())
        } else {
            Err(create_error!(UnknownNews))
        }
    }
}
