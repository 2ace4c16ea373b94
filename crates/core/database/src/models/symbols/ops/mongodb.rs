use bson::{Bson, Document, Regex};
use newsdesk_result::Result;

use super::AbstractSymbols;
use crate::{MarketSymbol, MongoDb, SymbolKind};

impl SymbolKind {
    /// Collection holding symbols of this kind
    fn collection(&self) -> &'static str {
        match self {
            SymbolKind::Sector => "sector",
            SymbolKind::Commodity => "Commodities",
        }
    }

    /// Store-side filter answering a lookup for the given name
    fn filter(&self, name: &str) -> Document {
        let name = match self {
            SymbolKind::Sector => Bson::String(name.to_string()),
            SymbolKind::Commodity => Bson::RegularExpression(Regex {
                pattern: format!("^{}$", regex::escape(name)),
                options: "i".to_string(),
            }),
        };

        doc! {
            "NAME OF SECTOR": name
        }
    }
}

#[async_trait]
impl AbstractSymbols for MongoDb {
    /// Insert a new symbol into the database
    async fn insert_symbol(&self, kind: SymbolKind, symbol: &MarketSymbol) -> Result<()> {
        query!(self, insert_one, kind.collection(), symbol).map(|_| ())
    }

    /// Fetch the first symbol of the given kind answering to the name
    async fn fetch_symbol(&self, kind: SymbolKind, name: &str) -> Result<Option<MarketSymbol>> {
        query!(self, find_one, kind.collection(), kind.filter(name))
    }
}
