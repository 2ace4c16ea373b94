use newsdesk_models::v0::*;

impl From<crate::NewsItem> for NewsItem {
    fn from(value: crate::NewsItem) -> Self {
        NewsItem {
            id: value.id,
            headline: value.headline,
            published_at: value.published_at,
            summary: value.summary,
            story: value.story,
            sector: value.sector,
            companies: value.companies,
            global: value.global,
            commodities: value.commodities,
            sentiment: value.sentiment,
            impact: value.impact,
            extra: value.extra,
        }
    }
}

impl From<crate::Event> for Event {
    fn from(value: crate::Event) -> Self {
        Event {
            id: value.id,
            title: value.title,
            date: value.date,
            description: value.description,
            event_type: value.event_type,
            tags: value.tags,
            headline: value.headline,
            created_at: value.created_at,
            updated_at: value.updated_at,
            extra: value.extra,
        }
    }
}

impl From<crate::Company> for Company {
    fn from(value: crate::Company) -> Self {
        Company {
            exchange: value.exchange_or_default().to_string(),
            id: value.id,
            symbol: value.symbol,
            name: value.name,
            extra: value.extra,
        }
    }
}

impl From<crate::Company> for Listing {
    fn from(value: crate::Company) -> Self {
        Listing {
            exchange: Some(value.exchange_or_default().to_string()),
            name: value.name,
            symbol: value.symbol,
        }
    }
}

impl crate::MarketSymbol {
    /// Describe this symbol as a listing of the given kind
    pub fn into_listing(self, kind: crate::SymbolKind) -> Listing {
        Listing {
            name: self.name,
            symbol: self.symbol,
            exchange: kind.exchange().map(ToString::to_string),
        }
    }
}
