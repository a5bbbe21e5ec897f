#![cfg(feature = "memory")]

use blog_repo::memory::{InMemoryPostRepo, InMemoryUserRepo};
use blog_types::domain::post::NewPost;
use blog_types::domain::user::NewUser;
use blog_types::ports::{PostRepository, UserRepository};

#[tokio::test]
async fn memory_user_crud_flow() {
    let repo = InMemoryUserRepo::new();
    assert!(repo.list().await.unwrap().is_empty());

    let id = repo
        .insert(NewUser {
            name: "ADA".into(),
        })
        .await
        .unwrap();
    assert_eq!(id, 1);

    let fetched = repo.get(id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "ADA");

    let second = repo
        .insert(NewUser {
            name: "GRACE".into(),
        })
        .await
        .unwrap();
    assert_eq!(second, 2);

    let listed = repo.list().await.unwrap();
    assert_eq!(
        listed.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![1, 2]
    );

    let touched = repo
        .update(
            id,
            NewUser {
                name: "LOVELACE".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(touched, 1);
    assert_eq!(repo.get(id).await.unwrap().unwrap().name, "LOVELACE");

    assert_eq!(repo.remove(id).await.unwrap(), 1);
    assert!(repo.get(id).await.unwrap().is_none());
}

#[tokio::test]
async fn memory_ids_are_not_reused_after_remove() {
    let repo = InMemoryPostRepo::new();
    let first = repo
        .insert(NewPost {
            text: "hi".into(),
            user_id: 1,
        })
        .await
        .unwrap();
    repo.remove(first).await.unwrap();

    let next = repo
        .insert(NewPost {
            text: "again".into(),
            user_id: 1,
        })
        .await
        .unwrap();
    assert_eq!(next, first + 1);
}

#[tokio::test]
async fn memory_repo_handles_missing_rows() {
    let repo = InMemoryPostRepo::new();
    assert!(repo.get(42).await.unwrap().is_none());

    let touched = repo
        .update(
            42,
            NewPost {
                text: "bye".into(),
                user_id: 1,
            },
        )
        .await
        .unwrap();
    assert_eq!(touched, 0);
    assert!(repo.get(42).await.unwrap().is_none());

    assert_eq!(repo.remove(42).await.unwrap(), 0);
}
