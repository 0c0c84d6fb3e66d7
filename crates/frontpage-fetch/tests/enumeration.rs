//! Whole-archive enumeration properties.

use std::collections::HashSet;

use chrono::{Local, NaiveDate};
use frontpage_fetch::{Catalog, DateRange, ScanKind, derive_path};
use frontpage_fetch::data::DEFAULT_BASE_URL;

fn assert_one_url_per_day(kind: ScanKind, end: NaiveDate) {
    let range = DateRange::archive(kind, end);
    let urls: Vec<String> = range.urls(DEFAULT_BASE_URL).collect();
    let expected_days = (end - kind.first_day()).num_days() as usize + 1;

    assert_eq!(urls.len(), expected_days);
    assert_eq!(urls.len(), range.len());

    let paths: Vec<_> = urls.iter().map(|u| derive_path(u).unwrap()).collect();
    let unique: HashSet<_> = paths.iter().collect();
    assert_eq!(unique.len(), paths.len(), "duplicate destinations for {kind}");

    // Zero-padded names sort in date order.
    assert!(paths.windows(2).all(|w| w[0] < w[1]), "{kind} not ascending");
    assert!(urls.iter().all(|u| u.ends_with(kind.extension())));

    for (day, path) in range.days().zip(&paths) {
        let name = format!("{}.{}", day.format("%Y_%m_%d"), kind.extension());
        assert_eq!(path.file_name().unwrap().to_str().unwrap(), name);
    }
}

#[test]
fn test_low_res_archive_through_today() {
    assert_one_url_per_day(ScanKind::LowRes, Local::now().date_naive());
}

#[test]
fn test_high_res_archive_through_today() {
    assert_one_url_per_day(ScanKind::HighRes, Local::now().date_naive());
}

#[test]
fn test_catalog_concatenates_ranges_lazily() {
    let today = Local::now().date_naive();
    let catalog = Catalog::archive(DEFAULT_BASE_URL, today);

    let mut urls = catalog.urls();
    assert_eq!(
        urls.next().as_deref(),
        Some("http://www.nytimes.com/images/1851/09/18/nytfrontpage/scan.jpg")
    );

    let total = 1 + urls.count();
    assert_eq!(total, catalog.len());

    let first_pdf = catalog.urls().position(|u| u.ends_with(".pdf")).unwrap();
    assert_eq!(first_pdf, catalog.ranges()[0].len());
}
