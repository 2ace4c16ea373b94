use newsdesk_database::{util::reference::Reference, Database};
use newsdesk_models::v0;
use newsdesk_result::Result;
use rocket::{serde::json::Json, State};

/// # Fetch News
///
/// Fetch a single news article by its id.
#[openapi(tag = "News")]
#[get("/<id>")]
pub async fn fetch_news(db: &State<Database>, id: String) -> Result<Json<v0::NewsItem>> {
    let item = Reference::parse(&id, "id")?.as_news(db).await?;
    Ok(Json(item.into()))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use newsdesk_database::util::new_id;
    use newsdesk_models::v0;
    use rocket::http::Status;

    #[rocket::async_test]
    async fn fetch_news() {
        let harness = TestHarness::new().await;
        let item = harness.new_news("2026-10-01", &["Infosys Ltd"]).await;

        let response = harness
            .client
            .get(format!("/news/{}", item.id))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        let body: v0::NewsItem = response.into_json().await.expect("`NewsItem`");
        assert_eq!(body.companies, item.companies);
    }

    #[rocket::async_test]
    async fn fetch_unknown_or_malformed() {
        let harness = TestHarness::new().await;

        let response = harness
            .client
            .get(format!("/news/{}", new_id()))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::NotFound);

        let response = harness.client.get("/news/not-an-id").dispatch().await;
        assert_eq!(response.status(), Status::BadRequest);
    }
}
