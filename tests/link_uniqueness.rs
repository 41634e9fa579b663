mod common;

use smol_url::domain::repositories::LinkRepository;
use smol_url::error::AppError;
use smol_url::utils::validation::LinkDraft;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creation_with_same_code_admits_one() {
    let (state, repo) = common::create_test_state(false);

    let handles: Vec<_> = (0..24)
        .map(|i| {
            let service = state.link_service.clone();
            tokio::spawn(async move {
                let url = format!("https://example.com/{i}");
                service
                    .create_short_link(LinkDraft::new(&url, Some("shared")))
                    .await
            })
        })
        .collect();

    let mut created = Vec::new();
    let mut duplicates = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(link) => created.push(link),
            Err(AppError::DuplicateCode { .. }) => duplicates += 1,
            Err(e) => panic!("unexpected error: {e:?}"),
        }
    }

    assert_eq!(created.len(), 1);
    assert_eq!(duplicates, 23);

    let stored = repo.find_by_code("shared").await.unwrap().unwrap();
    assert_eq!(stored.target_url, created[0].link.target_url);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_generated_codes_resolve_to_their_urls() {
    let (state, _repo) = common::create_test_state(false);

    for i in 0..20 {
        let url = format!("https://example.com/page/{i}");
        let created = state
            .link_service
            .create_short_link(LinkDraft::new(&url, None))
            .await
            .unwrap();

        let target = state.resolver.resolve(&created.link.code).await.unwrap();
        assert_eq!(target.location(), url);
        assert!(!target.is_fallback());
    }
}
