use integration_tests::empty_backends;
use pb_core::error::AppError;
use pb_core::models::{NewPost, PostPatch};
use pb_core::PostService;

#[tokio::test]
async fn get_is_idempotent() {
    for (name, repo) in empty_backends().await {
        let service = PostService::new(repo);
        let created = service.create_post(NewPost::new("a", "t", "c")).await.unwrap();

        let first = service.get_post(created.id).await.unwrap();
        let second = service.get_post(created.id).await.unwrap();
        assert_eq!(first, second, "{name}");
        assert_eq!(first, created, "{name}");
    }
}

#[tokio::test]
async fn update_ignores_empty_and_absent_fields() {
    for (name, repo) in empty_backends().await {
        let service = PostService::new(repo);
        let created = service.create_post(NewPost::new("a", "t", "c")).await.unwrap();

        let patch = PostPatch {
            title: Some(String::new()),
            content: Some("fresh".into()),
            author: None,
        };
        let updated = service.update_post(created.id, patch).await.unwrap();
        assert_eq!(updated.title, "t", "{name}");
        assert_eq!(updated.content, "fresh", "{name}");
        assert_eq!(updated.author, "a", "{name}");
        assert_eq!(service.get_post(created.id).await.unwrap(), updated, "{name}");

        let unchanged = service
            .update_post(created.id, PostPatch::default())
            .await
            .unwrap();
        assert_eq!(unchanged, updated, "{name}");
    }
}

#[tokio::test]
async fn missing_ids_are_not_found() {
    for (name, repo) in empty_backends().await {
        let service = PostService::new(repo);

        assert!(
            matches!(service.get_post(999999).await, Err(AppError::NotFound(..))),
            "{name}"
        );
        assert!(
            matches!(
                service.update_post(999999, PostPatch::default()).await,
                Err(AppError::NotFound(..))
            ),
            "{name}"
        );
        assert!(
            matches!(service.delete_post(999999).await, Err(AppError::NotFound(..))),
            "{name}"
        );
    }
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    for (name, repo) in empty_backends().await {
        let service = PostService::new(repo);
        let created = service.create_post(NewPost::new("a", "t", "c")).await.unwrap();

        let removed = service.delete_post(created.id).await.unwrap();
        assert_eq!(removed, created, "{name}");
        assert!(
            matches!(service.get_post(created.id).await, Err(AppError::NotFound(..))),
            "{name}"
        );
    }
}
