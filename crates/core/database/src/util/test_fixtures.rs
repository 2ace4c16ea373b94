use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde_json::from_str;

use crate::{util::new_id, Database, Event, NewsItem, User};

static RE_ID: Lazy<Regex> = Lazy::new(|| Regex::new("__ID:(\\d+)__").unwrap());

#[derive(Debug, Deserialize)]
#[serde(tag = "_object_type")]
enum LoadedFixture {
    User(User),
    NewsItem(NewsItem),
    Event(Event),
}

pub async fn load_fixture(db: &Database, input: &str) -> HashMap<String, String> {
    let mut ids = HashMap::<String, String>::new();
    let input = RE_ID.replace_all(input, |cap: &Captures| {
        let d = cap.get(1).unwrap().as_str();

        ids.entry(d.to_string()).or_insert_with(new_id).clone()
    });

    // Deserialise the fixtures
    let items: Vec<LoadedFixture> = from_str(&input).expect("Failed to deserialise fixture");

    // Load all of the items within
    for item in items {
        match item {
            LoadedFixture::User(user) => db.insert_user(&user).await.unwrap(),
            LoadedFixture::NewsItem(item) => db.insert_news(&item).await.unwrap(),
            LoadedFixture::Event(event) => db.insert_event(&event).await.unwrap(),
        }
    }

    // Return IDs for ease of use
    ids
}

#[async_trait]
pub trait FetchFixture {
    async fn user(&self, db: &Database, d: usize) -> User;
    async fn news(&self, db: &Database, d: usize) -> NewsItem;
    async fn event(&self, db: &Database, d: usize) -> Event;
}

#[async_trait]
impl FetchFixture for HashMap<String, String> {
    async fn user(&self, db: &Database, d: usize) -> User {
        db.fetch_user(self.get(&d.to_string()).unwrap())
            .await
            .unwrap()
    }

    async fn news(&self, db: &Database, d: usize) -> NewsItem {
        db.fetch_news(self.get(&d.to_string()).unwrap())
            .await
            .unwrap()
    }

    async fn event(&self, db: &Database, d: usize) -> Event {
        db.fetch_event(self.get(&d.to_string()).unwrap())
            .await
            .unwrap()
    }
}

#[macro_export]
macro_rules! fixture {
    ( $database:expr, $name:expr, $( $variable:ident $type:ident $id: expr )+ ) => {
        use $crate::util::test_fixtures::FetchFixture;

        let fixtures = $crate::util::test_fixtures::load_fixture(
            &$database,
            include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/", $name, ".json")),
        )
        .await;

        $(
            let $variable = fixtures.$type(&$database, $id).await;
        )+
    };
}
