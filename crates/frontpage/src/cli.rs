use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{ArgAction, Parser, ValueEnum};
use frontpage_fetch::ScanKind;

#[derive(Clone, Debug, Parser)]
#[command(name = "frontpage", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct App {
    /// Directory the `{YYYY}/{MM}/` tree is written under
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Scheme and host serving `/images/...`
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Concurrent connections to the remote host
    ///
    /// Each active download holds a socket and a file handle, so the open-file
    /// limit (`ulimit -n`) must allow about twice this many descriptors. Lower
    /// the value if downloads fail with "Too many open files".
    #[arg(short = 'c', long, value_name = "N")]
    pub max_connections: Option<usize>,

    /// Last day to download, inclusive [default: today]
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub until: Option<NaiveDate>,

    /// Download a single kind of scan
    #[arg(long, value_enum)]
    pub only: Option<KindArg>,

    /// Hide the overall progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// TOML settings file [default: ./frontpage.toml when present]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Low-resolution images
    Jpg,
    /// High-resolution documents
    Pdf,
}

impl From<KindArg> for ScanKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Jpg => ScanKind::LowRes,
            KindArg::Pdf => ScanKind::HighRes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        App::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let app = App::try_parse_from(["frontpage"]).unwrap();
        assert!(app.output_dir.is_none());
        assert!(app.only.is_none());
        assert!(!app.no_progress);
        assert_eq!(app.verbose, 0);
    }

    #[test]
    fn test_all_arguments() {
        let app = App::try_parse_from([
            "frontpage",
            "-o",
            "scans",
            "--base-url",
            "http://localhost:8080",
            "-c",
            "16",
            "--until",
            "2012-07-10",
            "--only",
            "pdf",
            "--no-progress",
            "-vv",
        ])
        .unwrap();

        assert_eq!(app.output_dir, Some(PathBuf::from("scans")));
        assert_eq!(app.base_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(app.max_connections, Some(16));
        assert_eq!(app.until, NaiveDate::from_ymd_opt(2012, 7, 10));
        assert_eq!(app.only.map(ScanKind::from), Some(ScanKind::HighRes));
        assert!(app.no_progress);
        assert_eq!(app.verbose, 2);
    }

    #[test]
    fn test_max_connections_help_mentions_open_file_limit() {
        let help = App::command().render_long_help().to_string();
        assert!(help.contains("ulimit -n"));
        assert!(help.contains("Too many open files"));
    }

    #[test]
    fn test_rejects_malformed_date() {
        assert!(App::try_parse_from(["frontpage", "--until", "10/02/2017"]).is_err());
    }
}
