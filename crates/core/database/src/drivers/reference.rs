use std::{collections::HashMap, sync::Arc};

use futures::lock::Mutex;

use crate::{Company, Event, MarketSymbol, NewsItem, SymbolKind, User};

database_derived!(
    /// Reference implementation
    #[derive(Default)]
    pub struct ReferenceDb {
        pub users: Arc<Mutex<HashMap<String, User>>>,
        pub news: Arc<Mutex<HashMap<String, NewsItem>>>,
        pub events: Arc<Mutex<HashMap<String, Event>>>,
        pub companies: Arc<Mutex<HashMap<String, Company>>>,
        pub symbols: Arc<Mutex<HashMap<SymbolKind, Vec<MarketSymbol>>>>,
    }
);
