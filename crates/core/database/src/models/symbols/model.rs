use newsdesk_result::Result;

use crate::{Database, DEFAULT_EXCHANGE};

auto_derived!(
    /// Trading symbol of a sector index or commodity
    pub struct MarketSymbol {
        /// Name of the sector or commodity
        #[serde(rename = "NAME OF SECTOR")]
        pub name: String,
        /// Ticker symbol, possibly qualified like `TVC:GOLD`
        #[serde(rename = "SYMBOL")]
        pub symbol: String,
    }
);

/// Kind of symbol being looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    /// Sector indices, named exactly
    Sector,
    /// Commodities, named in any case
    Commodity,
}

impl SymbolKind {
    /// Whether a stored name answers a lookup for the given name
    pub fn name_matches(&self, stored: &str, name: &str) -> bool {
        match self {
            SymbolKind::Sector => stored == name,
            SymbolKind::Commodity => stored.to_lowercase() == name.to_lowercase(),
        }
    }

    /// Exchange reported alongside symbols of this kind
    pub fn exchange(&self) -> Option<&'static str> {
        match self {
            SymbolKind::Sector => Some(DEFAULT_EXCHANGE),
            SymbolKind::Commodity => None,
        }
    }
}

impl MarketSymbol {
    /// Look up the symbol for a sector or commodity by name
    pub async fn lookup(
        db: &Database,
        kind: SymbolKind,
        name: Option<&str>,
    ) -> Result<Option<MarketSymbol>> {
        let Some(name) = name.map(str::trim).filter(|name| !name.is_empty()) else {
            return Err(create_error!(InvalidArgument {
                field: "name".to_string()
            }));
        };

        let symbol = db.fetch_symbol(kind, name).await?;
        if symbol.is_none() {
            debug!("No {kind:?} symbol for {name:?}.");
        }

        Ok(symbol)
    }
}

#[cfg(test)]
mod tests {
    use newsdesk_result::ErrorType;

    use crate::{MarketSymbol, SymbolKind};

    fn symbol(name: &str, symbol: &str) -> MarketSymbol {
        MarketSymbol {
            name: name.to_string(),
            symbol: symbol.to_string(),
        }
    }

    #[test]
    fn name_matching() {
        assert!(SymbolKind::Sector.name_matches("NIFTY BANK", "NIFTY BANK"));
        assert!(!SymbolKind::Sector.name_matches("NIFTY BANK", "nifty bank"));
        assert!(SymbolKind::Commodity.name_matches("Crude Oil", "CRUDE oil"));
        assert!(!SymbolKind::Commodity.name_matches("Crude Oil", "Crude"));
    }

    #[async_std::test]
    async fn lookup() {
        database_test!(|db| async move {
            db.insert_symbol(SymbolKind::Sector, &symbol("NIFTY BANK", "BANKNIFTY"))
                .await
                .unwrap();
            db.insert_symbol(SymbolKind::Commodity, &symbol("Gold", "TVC:GOLD"))
                .await
                .unwrap();
            db.insert_symbol(SymbolKind::Commodity, &symbol("Gold.*", "TVC:NOPE"))
                .await
                .unwrap();

            assert_eq!(
                MarketSymbol::lookup(&db, SymbolKind::Sector, Some("NIFTY BANK"))
                    .await
                    .unwrap(),
                Some(symbol("NIFTY BANK", "BANKNIFTY"))
            );
            assert_eq!(
                MarketSymbol::lookup(&db, SymbolKind::Sector, Some("nifty bank"))
                    .await
                    .unwrap(),
                None
            );
            assert_eq!(
                MarketSymbol::lookup(&db, SymbolKind::Commodity, Some(" gOLD "))
                    .await
                    .unwrap(),
                Some(symbol("Gold", "TVC:GOLD"))
            );
            assert_eq!(
                MarketSymbol::lookup(&db, SymbolKind::Commodity, Some("Gold Mini"))
                    .await
                    .unwrap(),
                None
            );
            assert_eq!(
                MarketSymbol::lookup(&db, SymbolKind::Commodity, Some("gold.*"))
                    .await
                    .unwrap()
                    .map(|found| found.symbol),
                Some("TVC:NOPE".to_string())
            );
            assert!(MarketSymbol::lookup(&db, SymbolKind::Sector, Some("Metals"))
                .await
                .unwrap()
                .is_none());
            assert_eq!(
                MarketSymbol::lookup(&db, SymbolKind::Commodity, None)
                    .await
                    .unwrap_err()
                    .error_type,
                ErrorType::InvalidArgument {
                    field: "name".to_string()
                }
            );
        });
    }
}
