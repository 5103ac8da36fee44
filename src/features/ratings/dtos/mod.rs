mod rating_dto;

pub use rating_dto::{CategoryScoreSummary, RatingSummary};
