mod review;
mod review_category_score;
mod review_question;

pub use review::Review;
pub use review_category_score::ReviewCategoryScore;
pub use review_question::ReviewQuestion;
