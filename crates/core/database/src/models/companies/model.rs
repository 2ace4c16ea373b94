use newsdesk_models::ExtraFields;
use newsdesk_result::Result;

use crate::Database;

/// Exchange assumed when a listing does not name one
pub static DEFAULT_EXCHANGE: &str = "NSE";

auto_derived!(
    /// Listed company
    pub struct Company {
        /// Unique Id
        #[serde(rename = "_id", with = "crate::util::object_id")]
        pub id: String,
        /// Ticker symbol
        #[serde(rename = "SYMBOL")]
        pub symbol: String,
        /// Registered name of the company
        #[serde(rename = "NAME OF COMPANY")]
        pub name: String,
        /// Exchange the company trades on
        #[serde(rename = "EXCHANGE", skip_serializing_if = "Option::is_none", default)]
        pub exchange: Option<String>,

        /// Fields not modelled here, kept as-is
        #[serde(flatten)]
        pub extra: ExtraFields,
    }
);

impl Company {
    /// Exchange this company trades on
    pub fn exchange_or_default(&self) -> &str {
        self.exchange
            .as_deref()
            .filter(|exchange| !exchange.trim().is_empty())
            .unwrap_or(DEFAULT_EXCHANGE)
    }

    /// Split a comma separated list of names, dropping blanks
    pub fn parse_names(names: &str) -> Vec<String> {
        names
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ToString::to_string)
            .collect()
    }

    /// Fetch the companies whose registered name is in the given comma separated list
    pub async fn fetch_by_names(db: &Database, names: Option<&str>) -> Result<Vec<Company>> {
        let Some(names) = names.filter(|names| !names.is_empty()) else {
            return Err(create_error!(InvalidArgument {
                field: "names".to_string()
            }));
        };

        let names = Company::parse_names(names);
        if names.is_empty() {
            return Ok(vec![]);
        }

        let companies = db.fetch_companies_by_names(&names).await?;
        debug!("Found {} of {} companies by name.", companies.len(), names.len());
        Ok(companies)
    }
}
