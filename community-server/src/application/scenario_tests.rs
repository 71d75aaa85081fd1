use axum::http::StatusCode;
use axum::response::IntoResponse;

use super::comment_service::CommentService;
use super::like_service::LikeService;
use super::post_service::PostService;
use super::test_support::InMemoryStore;
use crate::domain::comment::CreateCommentRequest;
use crate::domain::error::DomainError;
use crate::domain::post::CreatePostRequest;
use crate::presentation::http::app_error::AppError;

#[tokio::test]
async fn two_users_post_comment_like_and_delete() {
    let store = InMemoryStore::new();
    store.add_user("u1", "alice");
    store.add_user("u2", "bob");
    let posts = PostService::new(store.clone(), store.clone());
    let comments = CommentService::new(store.clone(), store.clone(), store.clone());
    let likes = LikeService::new(store.clone());

    let post = posts
        .create_post(
            "u1",
            CreatePostRequest {
                title: "Hi".to_string(),
                content: "Hello".to_string(),
            },
        )
        .await
        .expect("U1 creates a post");
    assert_eq!(post.views, 0);
    assert_eq!(post.like_count, 0);
    assert_eq!(post.comment_count, 0);

    let comment = comments
        .create_comment(
            post.id,
            "u2",
            CreateCommentRequest {
                content: "Nice!".to_string(),
            },
        )
        .await
        .expect("U2 comments");
    assert_eq!(comments.comment_count(post.id).await.expect("count"), 1);

    likes.add_like("u2", post.id).await.expect("U2 likes");
    likes.add_like("u2", post.id).await.expect("U2 likes again");
    assert_eq!(likes.like_count(post.id).await.expect("count"), 1);

    let err = comments
        .delete_comment(comment.id, "u1")
        .await
        .expect_err("U1 does not own the comment");
    assert!(matches!(err, DomainError::Unauthorized));
    let status = AppError::from(err).into_response().status();
    assert_eq!(status, StatusCode::FORBIDDEN);

    comments
        .delete_comment(comment.id, "u2")
        .await
        .expect("U2 deletes own comment");
    assert_eq!(comments.comment_count(post.id).await.expect("count"), 0);

    let detail = posts.get_post_detail(post.id).await.expect("detail");
    assert_eq!(detail.post.like_count, 1);
    assert_eq!(detail.post.comment_count, 0);
    assert!(detail.comments.is_empty());
}
