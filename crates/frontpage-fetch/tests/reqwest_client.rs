//! `ReqwestClient` against a local HTTP server.

use frontpage_fetch::{Batch, Catalog, DateRange, FetchError, Fetcher, Outcome, ReqwestClient, ScanKind};
use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_downloads_from_server_and_reports_missing_days() {
    let server = MockServer::start().await;
    let jpeg = vec![0xFFu8, 0xD8, 0xFF, 0xE0, 1, 2, 3, 4, 5];

    Mock::given(method("GET"))
        .and(path("/images/1851/09/18/nytfrontpage/scan.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(jpeg.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let catalog = Catalog::new(
        server.uri(),
        vec![DateRange::new(date(1851, 9, 18), date(1851, 9, 19), ScanKind::LowRes)],
    );
    let batch = Batch::new(Fetcher::new(ReqwestClient::new().unwrap(), dir.path()));

    let reports = batch.run(catalog.urls(), |_| {}).await;
    assert_eq!(reports.len(), 2);

    let saved = dir.path().join("1851").join("09").join("1851_09_18.jpg");
    assert_eq!(std::fs::read(saved).unwrap(), jpeg);
    assert!(!dir.path().join("1851").join("09").join("1851_09_19.jpg").exists());

    for report in &reports {
        match report.url.ends_with("/18/nytfrontpage/scan.jpg") {
            true => assert!(matches!(report.result, Ok(Outcome::Downloaded { bytes: 9 }))),
            false => assert!(matches!(
                &report.result,
                Err(FetchError::Status { code: 404, reason }) if reason == "Not Found"
            )),
        }
    }

    let requests = server.received_requests().await.unwrap();
    assert!(requests.iter().all(|r| !r.headers.contains_key("expect")));
}
