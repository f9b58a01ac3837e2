#[cfg(test)]
mod tests {
    use crate::tests::test_state;
    use folio::model::contact::{Contact, CreateContactRequest};

    fn submission(name: &str, email: &str, message: &str) -> CreateContactRequest {
        CreateContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            subject: None,
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn create_persists_submitted_fields() {
        let state = test_state().await;

        let created = Contact::create(
            &state.db,
            &submission("Ada", "ada@example.com", "Hello there"),
        )
        .await
        .unwrap();

        assert_eq!(created.name, "Ada");
        assert_eq!(created.email, "ada@example.com");
        assert_eq!(created.message, "Hello there");
        assert_eq!(created.subject, None);
        // created_at is set server-side, never taken from the payload
        assert!(created.created_at > 0);
    }

    #[tokio::test]
    async fn list_returns_submissions_oldest_first() {
        let state = test_state().await;

        Contact::create(&state.db, &submission("First", "a@b.co", "one"))
            .await
            .unwrap();
        Contact::create(&state.db, &submission("Second", "c@d.co", "two"))
            .await
            .unwrap();

        let contacts = Contact::all(&state.db).await.unwrap();
        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].name, "First");
        assert_eq!(contacts[1].name, "Second");
        assert!(contacts[0].created_at <= contacts[1].created_at);
    }

    #[tokio::test]
    async fn subject_is_optional_and_kept_when_given() {
        let state = test_state().await;

        let mut request = submission("Ada", "ada@example.com", "Hi");
        request.subject = Some("Job offer".to_string());

        let created = Contact::create(&state.db, &request).await.unwrap();
        assert_eq!(created.subject.as_deref(), Some("Job offer"));
    }
}
