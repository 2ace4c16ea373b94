use newsdesk_database::{matching::CompanyMatcher, Database, NewsItem};
use newsdesk_models::v0;
use newsdesk_result::Result;
use rocket::{serde::json::Json, State};

/// # Company News
///
/// Fetch company specific news mentioning the given company, newest first.
///
/// Legal suffixes such as "Ltd" or "Inc." are ignored when comparing names.
#[openapi(tag = "News")]
#[get("/company/<company_name>")]
pub async fn company_news(
    db: &State<Database>,
    matcher: &State<CompanyMatcher>,
    company_name: String,
) -> Result<Json<Vec<v0::NewsItem>>> {
    let items = NewsItem::fetch_by_company(db, matcher, &company_name).await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use newsdesk_models::v0;
    use rocket::http::Status;

    #[rocket::async_test]
    async fn company_news() {
        let harness = TestHarness::new().await;
        let tata = harness
            .new_news("2026-10-01", &["Tata Motors Limited"])
            .await;
        harness.new_news("2026-10-02", &["Infosys Ltd"]).await;

        let response = harness
            .client
            .get("/news/company/Tata%20Motors")
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        let body: serde_json::Value = response.into_json().await.expect("news");
        assert!(body.is_array());

        let items: Vec<v0::NewsItem> = serde_json::from_value(body).expect("news items");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, tata.id);
    }

    #[rocket::async_test]
    async fn blank_company() {
        let harness = TestHarness::new().await;

        let response = harness
            .client
            .get("/news/company/%20%20")
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);

        let body: serde_json::Value = response.into_json().await.expect("error");
        assert_eq!(body["type"], "InvalidArgument");
        assert_eq!(body["field"], "companyName");
    }
}
