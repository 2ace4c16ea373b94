use newsdesk_database::{Database, User};
use newsdesk_models::v0::{self, ListResponse};
use newsdesk_result::Result;
use rocket::{serde::json::Json, State};

/// # Fetch Saved News
///
/// Fetch the news articles a user has saved, in the order they were saved.
#[openapi(tag = "Saved Items")]
#[get("/<user_id>/saved-news")]
pub async fn fetch_saved_news(
    db: &State<Database>,
    user_id: String,
) -> Result<Json<ListResponse<v0::NewsItem>>> {
    let items = User::fetch_saved_news(db, &user_id).await?;

    Ok(Json(
        items
            .into_iter()
            .map(Into::into)
            .collect::<Vec<v0::NewsItem>>()
            .into(),
    ))
}

#[cfg(test)]
mod test {
    use crate::util::test::TestHarness;
    use newsdesk_database::{util::new_id, SavedList, User};
    use newsdesk_models::v0;
    use rocket::http::Status;

    #[rocket::async_test]
    async fn fetch_saved_news() {
        let harness = TestHarness::new().await;
        let user = harness.new_user().await;
        let item = harness.new_news("2026-10-01", &[]).await;

        User::toggle_saved(&harness.db, &user.id, &item.id, SavedList::News)
            .await
            .expect("toggle");
        User::toggle_saved(&harness.db, &user.id, &new_id(), SavedList::News)
            .await
            .expect("toggle");

        let response = harness
            .client
            .get(format!("/users/{}/saved-news", user.id))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);

        let body: v0::ListResponse<v0::NewsItem> = response.into_json().await.expect("news");
        assert_eq!(body.count, 1);
        assert_eq!(body.data[0].id, item.id);

        let response = harness
            .client
            .get(format!("/users/{}/saved-news", new_id()))
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::NotFound);
    }
}
