// Work report module root
pub mod fetcher;
pub mod report;

pub use fetcher::WorkTimeFetcher;
