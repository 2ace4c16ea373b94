use bson::Document;
use mongodb::options::FindOptions;
use newsdesk_result::Result;

use super::AbstractCompanies;
use crate::{Company, MongoDb};

static COL: &str = "Company_data";

fn by_name() -> FindOptions {
    FindOptions::builder()
        .sort(doc! { "NAME OF COMPANY": 1_i32 })
        .build()
}

#[async_trait]
impl AbstractCompanies for MongoDb {
    /// Insert a new company into the database
    async fn insert_company(&self, company: &Company) -> Result<()> {
        query!(self, insert_one, COL, company).map(|_| ())
    }

    /// Fetch all companies, ordered by name
    async fn fetch_companies(&self) -> Result<Vec<Company>> {
        query!(self, find_with_options, COL, Document::new(), by_name())
    }

    /// Fetch a company by its id
    async fn fetch_company(&self, id: &str) -> Result<Company> {
        query!(self, find_one_by_id, COL, id)?.ok_or_else(|| create_error!(UnknownCompany))
    }

    /// Fetch companies with any of the given names, ordered by name
    async fn fetch_companies_by_names(&self, names: &[String]) -> Result<Vec<Company>> {
        query!(
            self,
            find_with_options,
            COL,
            doc! {
                "NAME OF COMPANY": {
                    "$in": names
                }
            },
            by_name()
        )
    }
}
