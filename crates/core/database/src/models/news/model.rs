use std::str::FromStr;

use newsdesk_matching::CompanyMatcher;
use newsdesk_models::ExtraFields;
use newsdesk_result::{Error, Result};

use crate::Database;

/// Sector label given to stories about individual companies
pub static COMPANY_SPECIFIC_SECTOR: &str = "Company Specific";

/// Impact rating that puts a story on the trending feed
pub static TRENDING_IMPACT: &str = "Very High";

/// Sentiments that put a story on the trending feed
pub static TRENDING_SENTIMENTS: [&str; 2] = ["Very Bullish", "Very Bearish"];

auto_derived!(
    /// News article produced by the ingestion pipeline
    #[derive(Default)]
    pub struct NewsItem {
        /// Unique Id
        #[serde(rename = "_id", with = "crate::util::object_id")]
        pub id: String,

        /// Headline of the story
        #[serde(rename = "Headline", skip_serializing_if = "Option::is_none", default)]
        pub headline: Option<String>,
        /// When the story was published by the wire service
        #[serde(rename = "PublishedAt", skip_serializing_if = "Option::is_none", default)]
        pub published_at: Option<String>,
        /// Summary written during ingestion
        #[serde(skip_serializing_if = "Option::is_none", default)]
        pub summary: Option<String>,
        /// Full story text
        #[serde(skip_serializing_if = "Option::is_none", default)]
        pub story: Option<String>,

        /// Classification label
        #[serde(skip_serializing_if = "Option::is_none", default)]
        pub sector: Option<String>,
        /// Free-text names of the companies this story references
        #[serde(default)]
        pub companies: Vec<String>,
        /// Whether this is global news
        #[serde(default)]
        pub global: bool,
        /// Whether this story concerns commodities
        #[serde(default)]
        pub commodities: bool,

        /// Market sentiment
        #[serde(skip_serializing_if = "Option::is_none", default)]
        pub sentiment: Option<String>,
        /// Estimated market impact
        #[serde(skip_serializing_if = "Option::is_none", default)]
        pub impact: Option<String>,

        /// Fields not modelled here, kept as-is
        #[serde(flatten)]
        pub extra: ExtraFields,
    }
);

/// Curated news feeds backed by a fixed store-side filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsFeed {
    /// Stories flagged as global news
    Global,
    /// Stories flagged as concerning commodities
    Commodities,
    /// Stories with a very high impact or extreme sentiment
    Trending,
}

impl FromStr for NewsFeed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "global" => Ok(NewsFeed::Global),
            "commodities" => Ok(NewsFeed::Commodities),
            "trending" => Ok(NewsFeed::Trending),
            _ => Err(create_error!(NotFound)),
        }
    }
}

impl NewsFeed {
    /// Whether the given article belongs on this feed
    pub fn includes(&self, item: &NewsItem) -> bool {
        match self {
            NewsFeed::Global => item.global,
            NewsFeed::Commodities => item.commodities,
            NewsFeed::Trending => {
                item.impact.as_deref() == Some(TRENDING_IMPACT)
                    || item
                        .sentiment
                        .as_deref()
                        .is_some_and(|sentiment| TRENDING_SENTIMENTS.contains(&sentiment))
            }
        }
    }
}

impl NewsItem {
    /// Keep the articles whose company list references the given company
    ///
    /// Relative order is preserved. Articles without companies never match.
    pub fn filter_by_company(
        matcher: &CompanyMatcher,
        company: &str,
        items: Vec<NewsItem>,
    ) -> Result<Vec<NewsItem>> {
        let query = matcher.query(company);
        if query.is_blank() {
            return Err(create_error!(InvalidArgument {
                field: "companyName".to_string()
            }));
        }

        Ok(items
            .into_iter()
            .filter(|item| query.matches_any(&item.companies))
            .collect())
    }

    /// Fetch company specific news mentioning the given company, newest first
    pub async fn fetch_by_company(
        db: &Database,
        matcher: &CompanyMatcher,
        company: &str,
    ) -> Result<Vec<NewsItem>> {
        if company.trim().is_empty() {
            return Err(create_error!(InvalidArgument {
                field: "companyName".to_string()
            }));
        }

        let candidates = db.fetch_news_by_sector(COMPANY_SPECIFIC_SECTOR).await?;
        let total = candidates.len();
        let sample = candidates
            .first()
            .map(|item| item.companies.clone())
            .unwrap_or_default();

        let items = NewsItem::filter_by_company(matcher, company, candidates)?;
        debug!(
            "Matched {} of {} company news items for {:?}.",
            items.len(),
            total,
            company
        );

        if items.is_empty() && total > 0 {
            debug!("No match for {company:?}, first item lists {sample:?}.");
        }

        Ok(items)
    }
}

/// Sort articles so the most recently published come first
pub(crate) fn sort_newest_first(items: &mut [NewsItem]) {
    items.sort_by(|a, b| b.published_at.cmp(&a.published_at));
}

#[cfg(test)]
mod tests {
    use newsdesk_matching::{CompanyMatcher, MatchMode};
    use newsdesk_result::ErrorType;

    use crate::{util::new_id, NewsFeed, NewsItem, COMPANY_SPECIFIC_SECTOR};

    fn article(headline: &str, published_at: &str, companies: &[&str]) -> NewsItem {
        NewsItem {
            id: new_id(),
            headline: Some(headline.to_string()),
            published_at: Some(published_at.to_string()),
            sector: Some(COMPANY_SPECIFIC_SECTOR.to_string()),
            companies: companies.iter().map(|name| name.to_string()).collect(),
            ..Default::default()
        }
    }

    fn headlines(items: &[NewsItem]) -> Vec<&str> {
        items
            .iter()
            .filter_map(|item| item.headline.as_deref())
            .collect()
    }

    #[test]
    fn filter_preserves_order() {
        let matcher = CompanyMatcher::default();
        let items = vec![
            article("a", "3", &["Tata Motors Limited"]),
            article("b", "2", &["Infosys Ltd"]),
            article("c", "1", &["Wipro", "tata motors"]),
            article("d", "0", &[]),
        ];

        let matched = NewsItem::filter_by_company(&matcher, "Tata Motors", items).unwrap();
        assert_eq!(headlines(&matched), vec!["a", "c"]);
    }

    #[test]
    fn filter_without_matches_is_empty() {
        let matcher = CompanyMatcher::default();
        let items = vec![article("a", "1", &["Infosys Ltd"]), article("b", "0", &[])];

        assert!(NewsItem::filter_by_company(&matcher, "Reliance", items)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn filter_respects_strict_mode() {
        let matcher = CompanyMatcher::new(MatchMode::Strict);
        let items = vec![
            article("a", "1", &["Tata Motors Limited"]),
            article("b", "0", &["Tata Steel Ltd"]),
        ];

        let matched = NewsItem::filter_by_company(&matcher, "Tata", items.clone()).unwrap();
        assert!(matched.is_empty());

        let matched = NewsItem::filter_by_company(&matcher, "Tata Steel", items).unwrap();
        assert_eq!(headlines(&matched), vec!["b"]);
    }

    #[test]
    fn blank_company_is_invalid() {
        let matcher = CompanyMatcher::default();
        let error = NewsItem::filter_by_company(&matcher, "  ", vec![]).unwrap_err();
        assert_eq!(
            error.error_type,
            ErrorType::InvalidArgument {
                field: "companyName".to_string()
            }
        );
    }

    #[test]
    fn feeds() {
        let mut trending = article("t", "1", &[]);
        trending.sentiment = Some("Very Bearish".to_string());

        let mut global = article("g", "1", &[]);
        global.global = true;

        assert!(NewsFeed::Trending.includes(&trending));
        assert!(!NewsFeed::Trending.includes(&global));
        assert!(NewsFeed::Global.includes(&global));
        assert!(!NewsFeed::Commodities.includes(&global));
        assert_eq!("trending".parse::<NewsFeed>().unwrap(), NewsFeed::Trending);
        assert!("sports".parse::<NewsFeed>().is_err());
    }

    #[async_std::test]
    async fn fetch_by_company() {
        database_test!(|db| async move {
            let matcher = CompanyMatcher::default();

            let older = article("older", "2026-10-01", &["HDFC Bank Ltd."]);
            let newer = article("newer", "2026-10-02", &["hdfc bank"]);
            let mut other_sector = article("macro", "2026-10-03", &["HDFC Bank"]);
            other_sector.sector = Some("Macro".to_string());

            for item in [&older, &newer, &other_sector] {
                db.insert_news(item).await.unwrap();
            }

            let items = NewsItem::fetch_by_company(&db, &matcher, "HDFC Bank Limited")
                .await
                .unwrap();
            assert_eq!(headlines(&items), vec!["newer", "older"]);

            assert!(NewsItem::fetch_by_company(&db, &matcher, "")
                .await
                .is_err());
        });
    }

    #[async_std::test]
    async fn crud() {
        database_test!(|db| async move {
            let mut global = article("global", "2026-10-02", &[]);
            global.global = true;
            let plain = article("plain", "2026-10-03", &[]);
            let mut trending = article("trending", "2026-10-01", &[]);
            trending.impact = Some("Very High".to_string());

            for item in [&global, &plain, &trending] {
                db.insert_news(item).await.unwrap();
            }

            assert_eq!(db.fetch_news(&plain.id).await.unwrap(), plain);
            assert_eq!(
                headlines(&db.fetch_all_news().await.unwrap()),
                vec!["plain", "global", "trending"]
            );
            assert_eq!(
                headlines(&db.fetch_news_feed(NewsFeed::Global, 50).await.unwrap()),
                vec!["global"]
            );
            assert_eq!(
                headlines(&db.fetch_news_feed(NewsFeed::Trending, 50).await.unwrap()),
                vec!["trending"]
            );
            assert!(db
                .fetch_news_feed(NewsFeed::Commodities, 50)
                .await
                .unwrap()
                .is_empty());

            let by_ids = db
                .fetch_news_by_ids(&[trending.id.clone(), new_id()])
                .await
                .unwrap();
            assert_eq!(headlines(&by_ids), vec!["trending"]);

            db.delete_news(&plain.id).await.unwrap();
            assert_eq!(
                db.fetch_news(&plain.id).await.unwrap_err().error_type,
                ErrorType::UnknownNews
            );
        });
    }
}
