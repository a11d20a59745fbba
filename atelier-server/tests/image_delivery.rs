//! Image delivery integration tests: catalog resolution, content sniffing,
//! and cache headers.

mod common;

use axum::http::StatusCode;

use common::{JPEG_HEADER, test_server, write_asset};

#[tokio::test]
async fn serves_a_photo_with_sniffed_content_type() {
    let dir = tempfile::tempdir().unwrap();
    write_asset(dir.path(), "/Bali/bali-1.jpeg", JPEG_HEADER);
    let server = test_server(dir.path());

    let response = server.get("/images/bali/1").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.header("content-type"), "image/jpeg");
    assert_eq!(
        response.header("cache-control"),
        "public, max-age=31536000, immutable"
    );
    assert_eq!(&response.as_bytes()[..], JPEG_HEADER);
}

#[tokio::test]
async fn serves_the_collection_cover() {
    let dir = tempfile::tempdir().unwrap();
    write_asset(dir.path(), "/Iceland/cover.jpg", JPEG_HEADER);
    let server = test_server(dir.path());

    let response = server.get("/images/iceland/cover").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.header("content-type"), "image/jpeg");
}

#[tokio::test]
async fn sniffed_format_wins_over_the_file_extension() {
    let dir = tempfile::tempdir().unwrap();
    let mut webp = vec![0u8; 16];
    webp[0..4].copy_from_slice(b"RIFF");
    webp[8..12].copy_from_slice(b"WEBP");
    // Authored as .jpeg on disk, but the bytes are WebP.
    write_asset(dir.path(), "/Bali/bali-1.jpeg", &webp);
    let server = test_server(dir.path());

    let response = server.get("/images/bali/1").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.header("content-type"), "image/webp");
}

#[tokio::test]
async fn unrecognized_content_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    write_asset(dir.path(), "/Bali/bali-1.jpeg", b"not an image at all");
    let server = test_server(dir.path());

    let response = server.get("/images/bali/1").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn missing_file_on_disk_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(dir.path());

    let response = server.get("/images/bali/1").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn out_of_range_index_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(dir.path());

    let response = server.get("/images/iceland/999").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn non_numeric_selector_is_a_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(dir.path());

    let response = server.get("/images/iceland/latest").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_collection_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let server = test_server(dir.path());

    let response = server.get("/images/atlantis/1").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
