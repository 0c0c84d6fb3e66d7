use chrono::{Datelike, NaiveDate};

use crate::data::ScanKind;

/// Path segment between the date and the file name in every scan URL.
pub const FIXED_SEGMENT: &str = "nytfrontpage";

/// Every calendar day from `start` through `end`, inclusive, ascending.
///
/// The iterator is lazy and stops as soon as a day passes `end`, so an
/// inverted range yields nothing.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}

/// Builds the scan URL for one day.
///
/// ```
/// use chrono::NaiveDate;
/// use frontpage_fetch::ScanKind;
/// use frontpage_fetch::core::scan_url;
///
/// let day = NaiveDate::from_ymd_opt(1851, 9, 18).unwrap();
/// assert_eq!(
///     scan_url("http://www.nytimes.com", ScanKind::LowRes, day),
///     "http://www.nytimes.com/images/1851/09/18/nytfrontpage/scan.jpg"
/// );
/// ```
pub fn scan_url(base: &str, kind: ScanKind, day: NaiveDate) -> String {
    format!(
        "{}/images/{:04}/{:02}/{:02}/{FIXED_SEGMENT}/scan.{}",
        base.trim_end_matches('/'),
        day.year(),
        day.month(),
        day.day(),
        kind.extension()
    )
}
