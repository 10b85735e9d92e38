mod helpers;

use fimgstore_client::ClientError;
use fimgstore_core::Point;
use helpers::{client_for, key, BASIC_AUTH, OTHER_KEY, TEST_KEY};
use mockito::{Matcher, Server};
use tokio_test::assert_ok;

#[tokio::test]
async fn test_create_file_carries_source_query_and_options() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("PUT", "/PutImage")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("id".into(), TEST_KEY.into()),
            Matcher::UrlEncoded("isPartOf".into(), "doc-0001".into()),
        ]))
        .with_status(200)
        .with_body(OTHER_KEY)
        .create_async()
        .await;

    let client = client_for(&server);
    let source = client.uri_builder().file_uri(&key(TEST_KEY)).unwrap();
    let created = client
        .create_file(&source, Some("doc-0001"), None, None)
        .await
        .unwrap();

    assert_eq!(created.as_str(), OTHER_KEY);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_blackened_image_sends_polygons() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("PUT", "/PutImage")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("polygon".into(), "0,0 10,0 10,10".into()),
            Matcher::UrlEncoded("id".into(), TEST_KEY.into()),
        ]))
        .with_status(200)
        .with_body(OTHER_KEY)
        .create_async()
        .await;

    let client = client_for(&server);
    let polygons = vec![vec![Point::new(0, 0), Point::new(10, 0), Point::new(10, 10)]];
    let created = client
        .create_blackened_image(&key(TEST_KEY), &polygons, None, None, None)
        .await
        .unwrap();

    assert_eq!(created.as_str(), OTHER_KEY);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_upload_sends_multipart_part_named_file() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("PUT", "/PutImage")
        .match_header("authorization", BASIC_AUTH)
        .match_body(Matcher::AllOf(vec![
            Matcher::Regex("name=\"file\"".into()),
            Matcher::Regex("filename=\"page_0001.jpg\"".into()),
            Matcher::Regex("fake image bytes".into()),
        ]))
        .with_status(200)
        .with_body(OTHER_KEY)
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client
        .upload("page_0001.jpg", b"fake image bytes".to_vec(), None, None)
        .await;

    let created = assert_ok!(result);
    assert_eq!(created.as_str(), OTHER_KEY);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_upload_with_replace_key_targets_existing_file() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("PUT", "/PutImage")
        .match_query(Matcher::UrlEncoded("replaceKey".into(), OTHER_KEY.into()))
        .with_status(200)
        .with_body(OTHER_KEY)
        .create_async()
        .await;

    let client = client_for(&server);
    let replace = key(OTHER_KEY);
    let created = client
        .upload("scan.png", vec![0, 1, 2, 3], None, Some(&replace))
        .await
        .unwrap();

    assert_eq!(created.as_str(), OTHER_KEY);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unexpected_body_is_not_mistaken_for_a_key() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("PUT", "/PutImage")
        .with_status(200)
        .with_body("<html><body>It works!</body></html>")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .upload("scan.png", vec![0, 1, 2, 3], None, None)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::UnexpectedResponse(_)));
}

#[tokio::test]
async fn test_server_rejection_surfaces_status_and_body() {
    let mut server = Server::new_async().await;

    let _mock = server
        .mock("PUT", "/PutImage")
        .with_status(507)
        .with_body("disk full")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .upload("scan.png", vec![0, 1, 2, 3], None, None)
        .await
        .unwrap_err();

    match err {
        ClientError::RemoteRejection { status, body } => {
            assert_eq!(status, 507);
            assert_eq!(body, "disk full");
        }
        other => panic!("expected RemoteRejection, got {:?}", other),
    }
}
