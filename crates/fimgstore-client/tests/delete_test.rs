mod helpers;

use fimgstore_client::ClientError;
use helpers::{
    client_for, fast_policy, key, unreachable_client, BASIC_AUTH, OTHER_KEY, TEST_KEY, THIRD_KEY,
};
use mockito::{Matcher, Server};

#[tokio::test]
async fn test_delete_returns_true_below_300() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/DelImage")
        .match_query(Matcher::UrlEncoded("id".into(), TEST_KEY.into()))
        .with_status(200)
        .create_async()
        .await;

    let client = client_for(&server);
    let deleted = client.delete_file(&key(TEST_KEY), &fast_policy(0)).await;

    assert!(deleted.unwrap());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_sends_basic_auth() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/DelImage")
        .match_header("authorization", BASIC_AUTH)
        .match_query(Matcher::UrlEncoded("id".into(), TEST_KEY.into()))
        .with_status(200)
        .create_async()
        .await;

    let client = client_for(&server);
    let deleted = client
        .delete_file(&key(TEST_KEY), &fast_policy(0))
        .await
        .unwrap();

    assert!(deleted);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_bad_status_is_false_and_never_retried() {
    let mut server = Server::new_async().await;

    // expect(1): a completed 404 must not be attempted again even though
    // the policy would allow three more tries
    let mock = server
        .mock("GET", "/DelImage")
        .match_query(Matcher::UrlEncoded("id".into(), TEST_KEY.into()))
        .with_status(404)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let deleted = client
        .delete_file(&key(TEST_KEY), &fast_policy(3))
        .await
        .unwrap();

    assert!(!deleted);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_transport_failure_exhausts_the_budget() {
    let client = unreachable_client();

    let result = client.delete_file(&key(TEST_KEY), &fast_policy(1)).await;

    match result {
        Err(ClientError::RetriesExhausted { attempts, source }) => {
            assert_eq!(attempts, 2);
            assert!(matches!(*source, ClientError::Transport(_)));
        }
        other => panic!("expected RetriesExhausted, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_key_never_reaches_the_wire() {
    let mut server = Server::new_async().await;

    // Key validation happens at construction, so a corrupt id cannot
    // produce a request at all.
    let mock = server
        .mock("GET", "/DelImage")
        .expect(0)
        .create_async()
        .await;

    assert!(fimgstore_core::FileKey::new("not-a-key").is_err());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_batch_continues_past_a_failing_key() {
    let mut server = Server::new_async().await;

    let first = server
        .mock("GET", "/DelImage")
        .match_query(Matcher::UrlEncoded("id".into(), TEST_KEY.into()))
        .with_status(200)
        .expect(1)
        .create_async()
        .await;
    let second = server
        .mock("GET", "/DelImage")
        .match_query(Matcher::UrlEncoded("id".into(), OTHER_KEY.into()))
        .with_status(500)
        .expect(1)
        .create_async()
        .await;
    let third = server
        .mock("GET", "/DelImage")
        .match_query(Matcher::UrlEncoded("id".into(), THIRD_KEY.into()))
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let keys = vec![key(TEST_KEY), key(OTHER_KEY), key(THIRD_KEY)];
    let batch = client.delete_files(&keys, &fast_policy(0)).await;

    assert_eq!(batch.outcomes.len(), 3);
    assert_eq!(batch.failed_count(), 1);
    assert!(matches!(batch.outcomes[0].result, Ok(true)));
    assert!(matches!(batch.outcomes[1].result, Ok(false)));
    assert!(matches!(batch.outcomes[2].result, Ok(true)));

    first.assert_async().await;
    second.assert_async().await;
    third.assert_async().await;
}

#[tokio::test]
async fn test_empty_batch_makes_no_requests() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/DelImage")
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    let batch = client.delete_files(&[], &fast_policy(0)).await;

    assert!(batch.is_complete_success());
    assert!(batch.outcomes.is_empty());
    mock.assert_async().await;
}
