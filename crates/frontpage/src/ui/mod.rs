mod report;
pub mod tracker;

pub use report::Reporter;
