use newsdesk_database::Database;
use newsdesk_models::v0;
use newsdesk_result::Result;
use rocket::{serde::json::Json, State};

/// # List News
///
/// Fetch every news article, newest first.
#[openapi(tag = "News")]
#[get("/")]
pub async fn list_news(db: &State<Database>) -> Result<Json<Vec<v0::NewsItem>>> {
    let items = db.fetch_all_news().await?;
    Ok(Json(items.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use newsdesk_models::v0;
    use rocket::http::Status;

    #[rocket::async_test]
    async fn list_news() {
        let harness = TestHarness::new().await;
        harness.new_news("2026-10-01", &[]).await;
        let newest = harness.new_news("2026-10-02", &[]).await;

        let response = harness.client.get("/news").dispatch().await;
        assert_eq!(response.status(), Status::Ok);

        let body: serde_json::Value = response.into_json().await.expect("news");
        assert!(body.is_array());

        let items: Vec<v0::NewsItem> = serde_json::from_value(body).expect("news items");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, newest.id);
    }
}
