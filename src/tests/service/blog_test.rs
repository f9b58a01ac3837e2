#[cfg(test)]
mod tests {
    use crate::tests::test_state;
    use folio::errors::ApiError;
    use folio::model::blog::{BlogPost, CreateBlogPostRequest, UpdateBlogPostRequest};
    use folio::util::maybe::MaybeAbsent::Present;

    fn new_post(slug: &str, published_at: Option<i64>) -> CreateBlogPostRequest {
        CreateBlogPostRequest {
            title: format!("Post {slug}"),
            slug: slug.to_string(),
            content: "Body text".to_string(),
            excerpt: "Summary".to_string(),
            featured_image: None,
            tags: Some(vec!["rust".to_string()]),
            category: "engineering".to_string(),
            is_published: None,
            published_at,
        }
    }

    #[tokio::test]
    async fn published_list_filters_drafts_and_sorts_newest_first() {
        let state = test_state().await;

        BlogPost::create(&state.db, &new_post("older", Some(1_000)))
            .await
            .unwrap();
        BlogPost::create(&state.db, &new_post("newer", Some(2_000)))
            .await
            .unwrap();

        let mut draft = new_post("draft", Some(3_000));
        draft.is_published = Some(false);
        let draft = BlogPost::create(&state.db, &draft).await.unwrap();

        let published = BlogPost::published(&state.db).await.unwrap();
        assert_eq!(published.len(), 2);
        assert_eq!(published[0].slug, "newer");
        assert_eq!(published[1].slug, "older");

        // the draft is hidden from the list yet reachable by id
        let fetched = BlogPost::find_by_id(&state.db, draft.id).await.unwrap();
        assert!(!fetched.unwrap().is_published);
    }

    #[tokio::test]
    async fn create_fills_publication_time_when_missing() {
        let state = test_state().await;

        let post = BlogPost::create(&state.db, &new_post("fresh", None))
            .await
            .unwrap();
        assert!(post.is_published);
        assert!(post.published_at.is_some());
        assert_eq!(post.tags.0, vec!["rust"]);
    }

    #[tokio::test]
    async fn slug_lookup_finds_the_row() {
        let state = test_state().await;

        let created = BlogPost::create(&state.db, &new_post("hello-world", None))
            .await
            .unwrap();

        let by_slug = BlogPost::find_by_slug(&state.db, "hello-world")
            .await
            .unwrap();
        assert_eq!(by_slug.unwrap().id, created.id);

        assert!(BlogPost::find_by_slug(&state.db, "nope")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn duplicate_slug_is_rejected() {
        let state = test_state().await;

        BlogPost::create(&state.db, &new_post("taken", None))
            .await
            .unwrap();

        let result = BlogPost::create(&state.db, &new_post("taken", None)).await;
        assert!(matches!(result, Err(ApiError::Sqlx(_))));
    }

    #[tokio::test]
    async fn update_touches_updated_at_and_only_supplied_fields() {
        let state = test_state().await;

        let post = BlogPost::create(&state.db, &new_post("evolving", Some(1_000)))
            .await
            .unwrap();

        let patch = UpdateBlogPostRequest {
            title: Present("Second draft".to_string()),
            ..Default::default()
        };

        let updated = BlogPost::update(&state.db, post.id, &patch).await.unwrap();
        assert_eq!(updated.title, "Second draft");
        assert_eq!(updated.slug, "evolving");
        assert_eq!(updated.content, post.content);
        assert!(updated.updated_at >= post.updated_at);
    }

    #[tokio::test]
    async fn explicit_null_clears_publication_time() {
        let state = test_state().await;

        let post = BlogPost::create(&state.db, &new_post("unpublishing", Some(1_000)))
            .await
            .unwrap();

        let patch = UpdateBlogPostRequest {
            is_published: Present(false),
            published_at: Present(None),
            ..Default::default()
        };

        let updated = BlogPost::update(&state.db, post.id, &patch).await.unwrap();
        assert!(!updated.is_published);
        assert_eq!(updated.published_at, None);
    }

    #[tokio::test]
    async fn update_of_missing_row_is_not_found() {
        let state = test_state().await;

        let patch = UpdateBlogPostRequest {
            title: Present("Ghost".to_string()),
            ..Default::default()
        };

        let result = BlogPost::update(&state.db, 42, &patch).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let state = test_state().await;

        let post = BlogPost::create(&state.db, &new_post("gone", None))
            .await
            .unwrap();

        BlogPost::delete(&state.db, post.id).await.unwrap();
        BlogPost::delete(&state.db, post.id).await.unwrap();

        assert!(BlogPost::find_by_id(&state.db, post.id)
            .await
            .unwrap()
            .is_none());
    }
}
