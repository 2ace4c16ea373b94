use crate::ExtraFields;

auto_derived!(
    /// Listed company
    pub struct Company {
        /// Unique Id
        #[cfg_attr(feature = "serde", serde(rename = "_id"))]
        pub id: String,
        /// Ticker symbol
        #[cfg_attr(feature = "serde", serde(rename = "SYMBOL"))]
        pub symbol: String,
        /// Registered name of the company
        #[cfg_attr(feature = "serde", serde(rename = "NAME OF COMPANY"))]
        pub name: String,
        /// Exchange the company trades on
        #[cfg_attr(feature = "serde", serde(rename = "EXCHANGE"))]
        pub exchange: String,

        /// Any other fields present on the stored document
        #[cfg_attr(feature = "serde", serde(flatten))]
        pub extra: ExtraFields,
    }

    /// Trading symbol for a company, sector or commodity
    pub struct Listing {
        /// Name as stored
        pub name: String,
        /// Ticker symbol
        pub symbol: String,
        /// Exchange, absent for commodities
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "Option::is_none", default)
        )]
        pub exchange: Option<String>,
    }

    /// Listings found for a batch of company names
    pub struct ListingsResponse {
        /// Whether the operation succeeded
        pub success: bool,
        /// Listings, one per company found
        pub data: Vec<Listing>,
    }

    /// Result of looking up a single name
    pub struct LookupResponse {
        /// Whether a listing was found
        pub success: bool,
        /// Listing, if found
        #[cfg_attr(
            feature = "serde",
            serde(skip_serializing_if = "Option::is_none", default)
        )]
        pub data: Option<Listing>,
    }
);

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::{Listing, LookupResponse};

    #[test]
    fn missing_lookup_has_no_data() {
        let value = serde_json::to_value(LookupResponse {
            success: false,
            data: None,
        })
        .expect("json");
        assert_eq!(value, serde_json::json!({ "success": false }));
    }

    #[test]
    fn commodity_listing_has_no_exchange() {
        let value = serde_json::to_value(Listing {
            name: "Gold".to_string(),
            symbol: "TVC:GOLD".to_string(),
            exchange: None,
        })
        .expect("json");
        assert_eq!(value, serde_json::json!({ "name": "Gold", "symbol": "TVC:GOLD" }));
    }
}
