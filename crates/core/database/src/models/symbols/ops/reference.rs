use newsdesk_result::Result;

use super::AbstractSymbols;
use crate::{MarketSymbol, ReferenceDb, SymbolKind};

#[async_trait]
impl AbstractSymbols for ReferenceDb {
    /// Insert a new symbol into the database
    async fn insert_symbol(&self, kind: SymbolKind, symbol: &MarketSymbol) -> Result<()> {
        let mut symbols = self.symbols.lock().await;
        symbols.entry(kind).or_default().push(symbol.clone());
        Ok(())
    }

    /// Fetch the first symbol of the given kind answering to the name
    async fn fetch_symbol(&self, kind: SymbolKind, name: &str) -> Result<Option<MarketSymbol>> {
        let symbols = self.symbols.lock().await;
        Ok(symbols.get(&kind).and_then(|symbols| {
            symbols
                .iter()
                .find(|symbol| kind.name_matches(&symbol.name, name))
                .cloned()
        }))
    }
}
