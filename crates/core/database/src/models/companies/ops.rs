use newsdesk_result::Result;

use crate::Company;

#[cfg(feature = "mongodb")]
mod mongodb;
mod reference;

#[async_trait]
pub trait AbstractCompanies: Sync + Send {
    /// Insert a new company into the database
    async fn insert_company(&self, company: &Company) -> Result<()>;

    /// Fetch all companies, ordered by name
    async fn fetch_companies(&self) -> Result<Vec<Company>>;

    /// Fetch a company by its id
    async fn fetch_company(&self, id: &str) -> Result<Company>;

    /// Fetch companies with any of the given names, ordered by name
    async fn fetch_companies_by_names(&self, names: &[String]) -> Result<Vec<Company>>;
}
