use newsdesk_database::{util::reference::Reference, Database, SavedList, User};
use newsdesk_models::v0::{DataToggleSavedNews, ToggleSavedResponse};
use newsdesk_result::Result;
use rocket::{serde::json::Json, State};

/// # Toggle Saved News
///
/// Save a news article, or remove it if it is already saved.
#[openapi(tag = "Saved Items")]
#[post("/saved-news", data = "<data>")]
pub async fn toggle_saved_news(
    db: &State<Database>,
    data: Json<DataToggleSavedNews>,
) -> Result<Json<ToggleSavedResponse>> {
    let data = data.into_inner();
    let user = Reference::required(data.user_id.as_deref(), "userId")?;
    let news = Reference::required(data.news_id.as_deref(), "newsId")?;

    let saved = User::toggle_saved(db, &user.id, &news.id, SavedList::News).await?;
    Ok(Json(ToggleSavedResponse {
        success: true,
        saved,
    }))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use newsdesk_database::util::new_id;
    use newsdesk_models::v0;
    use rocket::http::{ContentType, Status};

    #[rocket::async_test]
    async fn toggle_saved_news() {
        let harness = TestHarness::new().await;
        let user = harness.new_user().await;
        let item = harness.new_news("2026-10-01", &[]).await;

        for expected in [true, false] {
            let response = harness
                .client
                .post("/users/saved-news")
                .header(ContentType::JSON)
                .body(json!({ "userId": user.id, "newsId": item.id }).to_string())
                .dispatch()
                .await;
            assert_eq!(response.status(), Status::Ok);

            let body: v0::ToggleSavedResponse = response.into_json().await.expect("toggle");
            assert!(body.success);
            assert_eq!(body.saved, expected);
        }

        let user = harness.db.fetch_user(&user.id).await.expect("`User`");
        assert!(user.saved_news.is_empty());
    }

    #[rocket::async_test]
    async fn toggle_saved_news_ignores_id_case() {
        let harness = TestHarness::new().await;
        let user = harness.new_user().await;
        let item = harness.new_news("2026-10-01", &[]).await;

        for (user_id, news_id, expected) in [
            (user.id.clone(), item.id.clone(), true),
            (user.id.to_uppercase(), item.id.to_uppercase(), false),
            (user.id.to_uppercase(), item.id.clone(), true),
        ] {
            let response = harness
                .client
                .post("/users/saved-news")
                .header(ContentType::JSON)
                .body(json!({ "userId": user_id, "newsId": news_id }).to_string())
                .dispatch()
                .await;
            assert_eq!(response.status(), Status::Ok);

            let body: v0::ToggleSavedResponse = response.into_json().await.expect("toggle");
            assert_eq!(body.saved, expected);
        }

        let user = harness.db.fetch_user(&user.id).await.expect("`User`");
        assert_eq!(user.saved_news.len(), 1);
        assert_eq!(user.saved_news[0].news_id, item.id);
    }

    #[rocket::async_test]
    async fn toggle_saved_news_bad_input() {
        let harness = TestHarness::new().await;

        let response = harness
            .client
            .post("/users/saved-news")
            .header(ContentType::JSON)
            .body(json!({ "userId": new_id() }).to_string())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);

        let body: serde_json::Value = response.into_json().await.expect("error");
        assert_eq!(body["field"], "newsId");

        let response = harness
            .client
            .post("/users/saved-news")
            .header(ContentType::JSON)
            .body(json!({ "userId": "nope", "newsId": new_id() }).to_string())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::BadRequest);

        let response = harness
            .client
            .post("/users/saved-news")
            .header(ContentType::JSON)
            .body(json!({ "userId": new_id(), "newsId": new_id() }).to_string())
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::NotFound);
    }
}
