use newsdesk_result::Result;

use super::AbstractCompanies;
use crate::{Company, ReferenceDb};

fn by_name(mut companies: Vec<Company>) -> Vec<Company> {
    companies.sort_by(|a, b| a.name.cmp(&b.name));
    companies
}

#[async_trait]
impl AbstractCompanies for ReferenceDb {
    /// Insert a new company into the database
    async fn insert_company(&self, company: &Company) -> Result<()> {
        let mut companies = self.companies.lock().await;
        if companies.contains_key(&company.id) {
            Err(create_database_error!("insert", "Company_data"))
        } else {
            companies.insert(company.id.to_string(), company.clone());
            Ok(())
        }
    }

    /// Fetch all companies, ordered by name
    async fn fetch_companies(&self) -> Result<Vec<Company>> {
        let companies = self.companies.lock().await;
        Ok(by_name(companies.values().cloned().collect()))
    }

    /// Fetch a company by its id
    async fn fetch_company(&self, id: &str) -> Result<Company> {
        let companies = self.companies.lock().await;
        companies
            .get(id)
            .cloned()
            .ok_or_else(|| create_error!(UnknownCompany))
    }

    /// Fetch companies with any of the given names, ordered by name
    async fn fetch_companies_by_names(&self, names: &[String]) -> Result<Vec<Company>> {
        let companies = self.companies.lock().await;
        Ok(by_name(
            companies
                .values()
                .filter(|company| names.contains(&company.name))
                .cloned()
                .collect(),
        ))
    }
}
