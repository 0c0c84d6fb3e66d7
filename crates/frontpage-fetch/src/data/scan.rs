use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{days_between, scan_url};

/// Host serving the daily front-page scans.
pub const DEFAULT_BASE_URL: &str = "http://www.nytimes.com";

const LOW_RES_FIRST_DAY: NaiveDate =
    NaiveDate::from_ymd_opt(1851, 9, 18).expect("valid calendar date");
const HIGH_RES_FIRST_DAY: NaiveDate =
    NaiveDate::from_ymd_opt(2012, 7, 6).expect("valid calendar date");

/// The two published scan flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScanKind {
    /// Daily front-page image, published as `scan.jpg`.
    LowRes,
    /// Daily front-page document, published as `scan.pdf`.
    HighRes,
}

impl ScanKind {
    pub const ALL: [ScanKind; 2] = [ScanKind::LowRes, ScanKind::HighRes];

    pub fn extension(self) -> &'static str {
        match self {
            ScanKind::LowRes => "jpg",
            ScanKind::HighRes => "pdf",
        }
    }

    /// Earliest day the remote archive carries this kind of scan.
    pub fn first_day(self) -> NaiveDate {
        match self {
            ScanKind::LowRes => LOW_RES_FIRST_DAY,
            ScanKind::HighRes => HIGH_RES_FIRST_DAY,
        }
    }
}

impl fmt::Display for ScanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanKind::LowRes => write!(f, "low-res"),
            ScanKind::HighRes => write!(f, "high-res"),
        }
    }
}

/// A closed range of days for one scan kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub kind: ScanKind,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate, kind: ScanKind) -> Self {
        Self { start, end, kind }
    }

    /// From the first archived day of `kind` through `end`.
    pub fn archive(kind: ScanKind, end: NaiveDate) -> Self {
        Self::new(kind.first_day(), end, kind)
    }

    /// Number of days in the range; zero when `start > end`.
    pub fn len(&self) -> usize {
        let span = (self.end - self.start).num_days();
        if span < 0 { 0 } else { span as usize + 1 }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        days_between(self.start, self.end)
    }

    pub fn urls<'a>(&self, base: &'a str) -> impl Iterator<Item = String> + use<'a> {
        let kind = self.kind;
        self.days().map(move |day| scan_url(base, kind, day))
    }
}

/// Base URL plus the ordered ranges to download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    base: String,
    ranges: Vec<DateRange>,
}

impl Catalog {
    pub fn new(base: impl Into<String>, ranges: Vec<DateRange>) -> Self {
        Self {
            base: base.into(),
            ranges,
        }
    }

    /// Low-resolution images first, then high-resolution documents, each
    /// from its first archived day through `end`.
    pub fn archive(base: impl Into<String>, end: NaiveDate) -> Self {
        let ranges = ScanKind::ALL
            .into_iter()
            .map(|kind| DateRange::archive(kind, end))
            .collect();
        Self::new(base, ranges)
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn ranges(&self) -> &[DateRange] {
        &self.ranges
    }

    /// Total number of URLs [`Catalog::urls`] will yield.
    pub fn len(&self) -> usize {
        self.ranges.iter().map(DateRange::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All URLs, range by range, each range in ascending date order.
    pub fn urls(&self) -> impl Iterator<Item = String> + '_ {
        self.ranges.iter().flat_map(|range| range.urls(&self.base))
    }
}
