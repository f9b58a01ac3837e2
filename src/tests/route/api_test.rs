#[cfg(test)]
mod tests {
    use crate::tests::test_state;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::Router;
    use folio::create_app;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    async fn app() -> Router {
        create_app(test_state().await).await
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    /// Bootstraps the default admin and returns a fresh session token.
    async fn login(app: &Router) -> String {
        let (status, _) = send(app, "POST", "/api/admin/create-default", None, None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(
            app,
            "POST",
            "/api/admin/login",
            None,
            Some(json!({"username": "admin", "password": "password"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        body["sessionToken"].as_str().unwrap().to_string()
    }

    fn project_payload(title: &str) -> Value {
        json!({
            "title": title,
            "description": "A project",
            "image": "https://example.com/shot.png",
            "category": "web-app",
            "tags": ["Rust", "Axum"],
            "primaryTags": ["Rust"],
            "demoUrl": "#",
            "githubUrl": "#"
        })
    }

    #[tokio::test]
    async fn contact_submission_round_trip() {
        let app = app().await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/contacts",
            None,
            Some(json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "Hello"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["contact"]["name"], "Ada");
        assert_eq!(body["contact"]["email"], "ada@example.com");
        assert!(body["message"].as_str().unwrap().starts_with("Thank you"));

        let (status, body) = send(&app, "GET", "/api/contacts", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn invalid_contact_submissions_are_rejected_and_not_stored() {
        let app = app().await;

        let cases = [
            json!({"name": "", "email": "a@b.co", "message": "hi"}),
            json!({"name": "Ada", "email": "a@b.co", "message": "   "}),
            json!({"name": "Ada", "email": "not-an-email", "message": "hi"}),
        ];

        for case in cases {
            let (status, _) = send(&app, "POST", "/api/contacts", None, Some(case)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }

        let (_, body) = send(&app, "GET", "/api/contacts", None, None).await;
        assert_eq!(body.as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn admin_writes_require_a_session() {
        let app = app().await;

        let (status, _) = send(
            &app,
            "POST",
            "/api/admin/projects",
            None,
            Some(project_payload("No auth")),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(
            &app,
            "POST",
            "/api/admin/projects",
            Some("bogus-token"),
            Some(project_payload("Bad auth")),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    // The blog write endpoints share their paths with the public reads but
    // still demand a session; this pins the guarded contract.
    #[tokio::test]
    async fn blog_writes_are_guarded_reads_are_public() {
        let app = app().await;

        let (status, _) = send(&app, "GET", "/api/blog", None, None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(
            &app,
            "POST",
            "/api/blog",
            None,
            Some(json!({
                "title": "Nope",
                "slug": "nope",
                "content": "x",
                "excerpt": "x",
                "category": "misc"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(&app, "DELETE", "/api/blog/1", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn project_crud_and_visibility_contract() {
        let app = app().await;
        let token = login(&app).await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/admin/projects",
            Some(&token),
            Some(project_payload("Showcase")),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Project created successfully");
        let id = body["project"]["id"].as_i64().unwrap();

        // partial update: only the title changes
        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/admin/projects/{id}"),
            Some(&token),
            Some(json!({"title": "Renamed"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["project"]["title"], "Renamed");

        let (_, body) = send(&app, "GET", &format!("/api/projects/{id}"), None, None).await;
        assert_eq!(body["title"], "Renamed");
        assert_eq!(body["description"], "A project");

        // deactivating hides the row from the list but not from id lookup
        let (status, _) = send(
            &app,
            "PUT",
            &format!("/api/admin/projects/{id}"),
            Some(&token),
            Some(json!({"isActive": false})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, "GET", "/api/projects", None, None).await;
        assert_eq!(body.as_array().unwrap().len(), 0);

        let (status, _) = send(&app, "GET", &format!("/api/projects/{id}"), None, None).await;
        assert_eq!(status, StatusCode::OK);

        // delete twice: both report success
        for _ in 0..2 {
            let (status, body) = send(
                &app,
                "DELETE",
                &format!("/api/admin/projects/{id}"),
                Some(&token),
                None,
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["message"], "Project deleted successfully");
        }

        let (status, _) = send(&app, "GET", &format!("/api/projects/{id}"), None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn bad_and_unknown_ids() {
        let app = app().await;

        let (status, _) = send(&app, "GET", "/api/projects/abc", None, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, "GET", "/api/projects/12345", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, "GET", "/api/tech-stack/abc", None, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, "GET", "/api/blog/12345", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn login_lifecycle() {
        let app = app().await;

        // bootstrap is idempotent
        let (_, body) = send(&app, "POST", "/api/admin/create-default", None, None).await;
        assert_eq!(body["message"], "Default admin created successfully");
        let (_, body) = send(&app, "POST", "/api/admin/create-default", None, None).await;
        assert_eq!(body["message"], "Default admin already exists");

        let (status, _) = send(
            &app,
            "POST",
            "/api/admin/login",
            None,
            Some(json!({"username": "admin", "password": "wrong"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(
            &app,
            "POST",
            "/api/admin/login",
            None,
            Some(json!({"username": "nobody", "password": "password"})),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, body) = send(
            &app,
            "POST",
            "/api/admin/login",
            None,
            Some(json!({"username": "admin", "password": "password"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let token = body["sessionToken"].as_str().unwrap().to_string();
        assert_eq!(body["admin"]["username"], "admin");
        // the hash never crosses the wire
        assert!(body["admin"].get("password").is_none());

        let (status, body) = send(&app, "GET", "/api/admin/me", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["admin"]["email"], "admin@example.com");

        let (status, _) = send(&app, "POST", "/api/admin/logout", Some(&token), None).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app, "GET", "/api/admin/me", Some(&token), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn missing_token_and_missing_credentials_are_400_or_401() {
        let app = app().await;

        let (status, _) = send(&app, "GET", "/api/admin/me", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(
            &app,
            "POST",
            "/api/admin/login",
            None,
            Some(json!({"username": "", "password": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn blog_crud_with_session() {
        let app = app().await;
        let token = login(&app).await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/blog",
            Some(&token),
            Some(json!({
                "title": "First post",
                "slug": "first-post",
                "content": "Welcome",
                "excerpt": "Welcome",
                "category": "news"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["post"]["slug"], "first-post");
        let id = body["post"]["id"].as_i64().unwrap();

        // slugs are unique; a second post under the same slug is a conflict
        let (status, _) = send(
            &app,
            "POST",
            "/api/blog",
            Some(&token),
            Some(json!({
                "title": "Clone",
                "slug": "first-post",
                "content": "x",
                "excerpt": "x",
                "category": "news"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/blog/{id}"),
            Some(&token),
            Some(json!({"title": "First post, revised"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["post"]["title"], "First post, revised");

        let (_, body) = send(&app, "GET", "/api/blog", None, None).await;
        assert_eq!(body.as_array().unwrap().len(), 1);

        // idempotent delete, matching the other resources
        for _ in 0..2 {
            let (status, body) = send(
                &app,
                "DELETE",
                &format!("/api/blog/{id}"),
                Some(&token),
                None,
            )
            .await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["message"], "Blog post deleted successfully");
        }
    }

    #[tokio::test]
    async fn tech_stack_crud() {
        let app = app().await;
        let token = login(&app).await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/admin/tech-stack",
            Some(&token),
            Some(json!({
                "name": "Rust",
                "icon": "Rs",
                "bg": "bg-orange-700",
                "description": "Systems Language",
                "category": "backend"
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["tech"]["name"], "Rust");
        let id = body["tech"]["id"].as_i64().unwrap();

        let (status, body) = send(
            &app,
            "PUT",
            &format!("/api/admin/tech-stack/{id}"),
            Some(&token),
            Some(json!({"description": "Fast and safe"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Tech stack updated successfully");

        let (_, body) = send(&app, "GET", &format!("/api/tech-stack/{id}"), None, None).await;
        assert_eq!(body["description"], "Fast and safe");
        assert_eq!(body["name"], "Rust");

        let (status, body) = send(
            &app,
            "DELETE",
            &format!("/api/admin/tech-stack/{id}"),
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Tech stack deleted successfully");

        let (_, body) = send(&app, "GET", "/api/tech-stack", None, None).await;
        assert_eq!(body.as_array().unwrap().len(), 0);
    }
}
