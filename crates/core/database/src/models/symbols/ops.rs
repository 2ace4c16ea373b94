use newsdesk_result::Result;

use crate::{MarketSymbol, SymbolKind};

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractSymbols: Sync + Send {
    /// Insert a new symbol into the database
    async fn insert_symbol(&self, kind: SymbolKind, symbol: &MarketSymbol) -> Result<()>;

    /// Fetch the first symbol of the given kind answering to the name
    async fn fetch_symbol(&self, kind: SymbolKind, name: &str) -> Result<Option<MarketSymbol>>;
}
