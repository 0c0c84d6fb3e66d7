use std::path::PathBuf;

use url::Url;

use crate::error::{FetchError, Result};

/// Maps a scan URL to its destination, relative to the output root.
///
/// The URL path must end in `/images/{YYYY}/{MM}/{DD}/<segment>/scan.{ext}`;
/// the result is `{YYYY}/{MM}/{YYYY}_{MM}_{DD}.{ext}`. Anything before the
/// `images` segment (a path prefix on the base URL) is ignored.
///
/// ```
/// use std::path::PathBuf;
/// use frontpage_fetch::derive_path;
///
/// let path = derive_path("http://www.nytimes.com/images/2017/10/02/nytfrontpage/scan.pdf").unwrap();
/// assert_eq!(path, PathBuf::from("2017").join("10").join("2017_10_02.pdf"));
/// ```
pub fn derive_path(url: &str) -> Result<PathBuf> {
    let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;
    let segments: Vec<&str> = parsed
        .path_segments()
        .ok_or_else(|| FetchError::InvalidUrl(url.to_string()))?
        .collect();

    let [.., images, year, month, day, _, file] = segments.as_slice() else {
        return Err(FetchError::InvalidUrl(url.to_string()));
    };

    let extension = file
        .strip_prefix("scan.")
        .filter(|ext| !ext.is_empty() && !ext.contains('.'));

    match extension {
        Some(ext)
            if *images == "images"
                && is_digits(year, 4)
                && is_digits(month, 2)
                && is_digits(day, 2) =>
        {
            Ok(PathBuf::from(year)
                .join(month)
                .join(format!("{year}_{month}_{day}.{ext}")))
        }
        _ => Err(FetchError::InvalidUrl(url.to_string())),
    }
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scan_url;
    use crate::data::ScanKind;
    use chrono::NaiveDate;

    #[test]
    fn test_derive_path_low_res() {
        let path =
            derive_path("http://www.nytimes.com/images/1851/09/18/nytfrontpage/scan.jpg").unwrap();
        assert_eq!(path, PathBuf::from("1851").join("09").join("1851_09_18.jpg"));
    }

    #[test]
    fn test_derive_path_ignores_base_prefix() {
        let path = derive_path("http://127.0.0.1:9000/mirror/images/2012/07/06/nytfrontpage/scan.pdf")
            .unwrap();
        assert_eq!(path, PathBuf::from("2012").join("07").join("2012_07_06.pdf"));
    }

    #[test]
    fn test_derive_path_inverts_scan_url() {
        let start = NaiveDate::from_ymd_opt(2015, 12, 25).unwrap();
        for day in start.iter_days().take(10) {
            for kind in ScanKind::ALL {
                let url = scan_url("http://www.nytimes.com", kind, day);
                let expected = PathBuf::from(day.format("%Y").to_string())
                    .join(day.format("%m").to_string())
                    .join(format!("{}.{}", day.format("%Y_%m_%d"), kind.extension()));
                assert_eq!(derive_path(&url).unwrap(), expected);
            }
        }
    }

    #[test]
    fn test_derive_path_rejects_short_path() {
        let err = derive_path("http://www.nytimes.com/images/2017/10/scan.jpg").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[test]
    fn test_derive_path_rejects_non_numeric_date() {
        assert!(derive_path("http://h/images/20x7/10/02/nytfrontpage/scan.jpg").is_err());
        assert!(derive_path("http://h/images/2017/1/02/nytfrontpage/scan.jpg").is_err());
    }

    #[test]
    fn test_derive_path_rejects_unexpected_file_name() {
        assert!(derive_path("http://h/images/2017/10/02/nytfrontpage/page.jpg").is_err());
        assert!(derive_path("http://h/images/2017/10/02/nytfrontpage/scan.").is_err());
        assert!(derive_path("http://h/pics/2017/10/02/nytfrontpage/scan.jpg").is_err());
    }

    #[test]
    fn test_derive_path_rejects_unparseable_url() {
        assert!(matches!(derive_path("not a url"), Err(FetchError::InvalidUrl(_))));
    }
}
