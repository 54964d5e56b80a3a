//! Concurrent registration safety.

use std::sync::Arc;

use linkmap::application::services::LinkService;
use linkmap::infrastructure::storage::MemoryLinkRepository;
use tokio::task::JoinSet;

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_registration_of_same_url() {
    const TASKS: usize = 32;

    let service = Arc::new(LinkService::new(Arc::new(MemoryLinkRepository::new())));

    let mut join_set = JoinSet::new();
    for _ in 0..TASKS {
        let service = service.clone();
        join_set.spawn(async move {
            service
                .register("http://example.com/concurrent".to_string())
                .await
                .unwrap()
        });
    }

    let mut codes = Vec::with_capacity(TASKS);
    let mut inserted = 0;
    while let Some(result) = join_set.join_next().await {
        let (link, already_existed) = result.unwrap();
        if !already_existed {
            inserted += 1;
        }
        codes.push(link.code);
    }

    // Every caller observed the same code, and exactly one entry was stored
    assert_eq!(codes.len(), TASKS);
    assert!(codes.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(inserted, 1);
    assert_eq!(service.count().await.unwrap(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_registration_of_distinct_urls() {
    const TASKS: usize = 32;

    let service = Arc::new(LinkService::new(Arc::new(MemoryLinkRepository::new())));

    let mut join_set = JoinSet::new();
    for i in 0..TASKS {
        let service = service.clone();
        join_set.spawn(async move {
            service
                .register(format!("http://example.com/{}", i))
                .await
                .unwrap()
        });
    }

    while let Some(result) = join_set.join_next().await {
        let (_, already_existed) = result.unwrap();
        assert!(!already_existed);
    }

    assert_eq!(service.count().await.unwrap(), TASKS);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_reads_run_alongside_writes() {
    const WRITERS: usize = 16;
    const READERS: usize = 16;

    let service = Arc::new(LinkService::new(Arc::new(MemoryLinkRepository::new())));

    let mut join_set = JoinSet::new();
    for i in 0..WRITERS {
        let service = service.clone();
        join_set.spawn(async move {
            service
                .register(format!("http://example.com/w/{}", i))
                .await
                .unwrap();
        });
    }
    for _ in 0..READERS {
        let service = service.clone();
        join_set.spawn(async move {
            // Lists observe some consistent prefix of the writes
            let urls = service.list_urls().await.unwrap();
            assert!(urls.len() <= WRITERS);
        });
    }

    while let Some(result) = join_set.join_next().await {
        result.unwrap();
    }

    assert_eq!(service.count().await.unwrap(), WRITERS);
}
