use std::collections::{BTreeMap, HashSet};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::features::ratings::dtos::{CategoryScoreSummary, RatingSummary};
use crate::features::reviews::models::Review;

/// Case-insensitive substring filter on review city / country.
///
/// Blank values mean "no filter" for that field. A review without the
/// field never matches a filter on it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationFilter {
    city: Option<String>,
    country: Option<String>,
}

impl LocationFilter {
    pub fn new(city: Option<&str>, country: Option<&str>) -> Self {
        Self {
            city: normalize_needle(city),
            country: normalize_needle(country),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.city.is_none() && self.country.is_none()
    }

    pub fn matches(&self, review: &Review) -> bool {
        field_matches(self.city.as_deref(), review.city.as_deref())
            && field_matches(self.country.as_deref(), review.country.as_deref())
    }
}

fn normalize_needle(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.to_lowercase())
}

fn field_matches(needle: Option<&str>, value: Option<&str>) -> bool {
    match needle {
        None => true,
        Some(needle) => value.is_some_and(|v| v.to_lowercase().contains(needle)),
    }
}

/// Running totals for one category
struct CategoryTally<'a> {
    category_name: &'a str,
    rating_sum: i64,
    rating_rows: i64,
    reviews: HashSet<Uuid>,
}

/// Aggregate a company's reviews.
///
/// Weights on reviews and category scores are reported through
/// `weighted_review_count` only; every average is a straight arithmetic mean.
/// An empty (or fully filtered) input yields zeros and an empty category map.
pub fn aggregate(reviews: &[Review], filter: &LocationFilter) -> RatingSummary {
    let filtered: Vec<&Review> = reviews.iter().filter(|r| filter.matches(r)).collect();

    let rated: Vec<Decimal> = filtered.iter().filter_map(|r| r.aggregate_rating).collect();
    let total_aggregated: Decimal = rated.iter().sum();
    let average_rating = if rated.is_empty() {
        0.0
    } else {
        to_f64(total_aggregated / Decimal::from(rated.len()))
    };

    let weighted_review_count: Decimal = filtered.iter().map(|r| r.review_weight).sum();

    let mut tallies: BTreeMap<&str, CategoryTally> = BTreeMap::new();
    for review in &filtered {
        for score in &review.category_scores {
            let tally = tallies
                .entry(score.category_id.as_str())
                .or_insert_with(|| CategoryTally {
                    category_name: score.category_name.as_str(),
                    rating_sum: 0,
                    rating_rows: 0,
                    reviews: HashSet::new(),
                });
            tally.rating_sum += i64::from(score.rating);
            tally.rating_rows += 1;
            tally.reviews.insert(review.id);
        }
    }

    let category_scores = tallies
        .into_iter()
        .map(|(category_id, tally)| {
            let summary = CategoryScoreSummary {
                average_rating: tally.rating_sum as f64 / tally.rating_rows as f64,
                total_reviews: tally.reviews.len() as i64,
                category_name: tally.category_name.to_string(),
            };
            (category_id.to_string(), summary)
        })
        .collect();

    RatingSummary {
        average_rating,
        review_count: filtered.len() as i64,
        weighted_review_count: to_f64(weighted_review_count),
        total_aggregated_score: to_f64(total_aggregated),
        category_scores,
    }
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{category_score, review, review_at};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_no_reviews() {
        let summary = aggregate(&[], &LocationFilter::default());

        assert_eq!(summary.average_rating, 0.0);
        assert_eq!(summary.review_count, 0);
        assert_eq!(summary.weighted_review_count, 0.0);
        assert!(summary.category_scores.is_empty());
    }

    #[test]
    fn test_two_review_scenario() {
        let company = Uuid::new_v4();
        let mut a = review(company, Some(4.0));
        a.category_scores = vec![
            category_score(a.id, "pricing", "Pricing", 5),
            category_score(a.id, "service", "Service", 3),
        ];
        let mut b = review(company, Some(2.0));
        b.category_scores = vec![category_score(b.id, "pricing", "Pricing", 3)];

        let summary = aggregate(&[a, b], &LocationFilter::default());

        assert_close(summary.average_rating, 3.0);
        assert_eq!(summary.review_count, 2);
        assert_close(summary.total_aggregated_score, 6.0);

        let pricing = &summary.category_scores["pricing"];
        assert_close(pricing.average_rating, 4.0);
        assert_eq!(pricing.total_reviews, 2);
        assert_eq!(pricing.category_name, "Pricing");

        let service = &summary.category_scores["service"];
        assert_close(service.average_rating, 3.0);
        assert_eq!(service.total_reviews, 1);
    }

    #[test]
    fn test_null_aggregate_rating_counts_but_does_not_average() {
        let company = Uuid::new_v4();
        let reviews = vec![
            review(company, Some(5.0)),
            review(company, None),
            review(company, Some(3.0)),
        ];

        let summary = aggregate(&reviews, &LocationFilter::default());

        assert_close(summary.average_rating, 4.0);
        assert_eq!(summary.review_count, 3);
    }

    #[test]
    fn test_all_ratings_null() {
        let company = Uuid::new_v4();
        let reviews = vec![review(company, None), review(company, None)];

        let summary = aggregate(&reviews, &LocationFilter::default());

        assert_eq!(summary.average_rating, 0.0);
        assert_eq!(summary.review_count, 2);
    }

    #[test]
    fn test_category_counts_each_review_once() {
        let company = Uuid::new_v4();
        let mut r = review(company, Some(4.0));
        r.category_scores = (1..=5)
            .map(|rating| category_score(r.id, "responsiveness", "Responsiveness", rating))
            .collect();

        let summary = aggregate(&[r], &LocationFilter::default());

        let responsiveness = &summary.category_scores["responsiveness"];
        assert_eq!(responsiveness.total_reviews, 1);
        assert_close(responsiveness.average_rating, 3.0);
    }

    #[test]
    fn test_category_average_is_over_score_rows() {
        let company = Uuid::new_v4();
        let mut thorough = review(company, Some(5.0));
        thorough.category_scores = (0..5)
            .map(|_| category_score(thorough.id, "responsiveness", "Responsiveness", 5))
            .collect();
        let mut brief = review(company, Some(1.0));
        brief.category_scores = vec![category_score(
            brief.id,
            "responsiveness",
            "Responsiveness",
            0,
        )];

        let summary = aggregate(&[thorough, brief], &LocationFilter::default());

        // Six rows, not the mean of the two per-review means (2.5)
        let responsiveness = &summary.category_scores["responsiveness"];
        assert_close(responsiveness.average_rating, 25.0 / 6.0);
        assert_eq!(responsiveness.total_reviews, 2);
    }

    #[test]
    fn test_category_average_ignores_weights() {
        let company = Uuid::new_v4();
        let mut anonymous = review(company, Some(2.0));
        anonymous.review_weight = Decimal::new(5, 1);
        let mut score = category_score(anonymous.id, "pricing", "Pricing", 2);
        score.weight = Decimal::new(5, 1);
        anonymous.category_scores = vec![score];

        let mut named = review(company, Some(4.0));
        named.category_scores = vec![category_score(named.id, "pricing", "Pricing", 4)];

        let summary = aggregate(&[anonymous, named], &LocationFilter::default());

        assert_close(summary.average_rating, 3.0);
        assert_close(summary.category_scores["pricing"].average_rating, 3.0);
        assert_close(summary.weighted_review_count, 1.5);
    }

    #[test]
    fn test_country_filter() {
        let company = Uuid::new_v4();
        let mut london = review_at(company, Some(5.0), Some("London"), Some("UK"));
        london.category_scores = vec![category_score(london.id, "service", "Service", 5)];
        let mut paris = review_at(company, Some(1.0), Some("Paris"), Some("France"));
        paris.category_scores = vec![category_score(paris.id, "pricing", "Pricing", 1)];

        let summary = aggregate(&[london, paris], &LocationFilter::new(None, Some("UK")));

        assert_eq!(summary.review_count, 1);
        assert_close(summary.average_rating, 5.0);
        assert_eq!(summary.category_scores.len(), 1);
        assert!(summary.category_scores.contains_key("service"));
    }

    #[test]
    fn test_city_filter_is_case_insensitive() {
        let company = Uuid::new_v4();
        let reviews = vec![
            review_at(company, Some(4.0), Some("London"), Some("UK")),
            review_at(company, Some(2.0), Some("Paris"), Some("France")),
        ];

        let summary = aggregate(&reviews, &LocationFilter::new(Some("lon"), None));
        assert_eq!(summary.review_count, 1);
        assert_close(summary.average_rating, 4.0);

        let summary = aggregate(&reviews, &LocationFilter::new(Some("PARIS"), Some("fr")));
        assert_eq!(summary.review_count, 1);
        assert_close(summary.average_rating, 2.0);
    }

    #[test]
    fn test_filter_excludes_reviews_without_location() {
        let company = Uuid::new_v4();
        let reviews = vec![
            review_at(company, Some(4.0), None, Some("Germany")),
            review_at(company, Some(2.0), Some("Stuttgart"), Some("Germany")),
        ];

        let summary = aggregate(&reviews, &LocationFilter::new(Some("stutt"), None));
        assert_eq!(summary.review_count, 1);

        let summary = aggregate(&reviews, &LocationFilter::new(None, Some("germany")));
        assert_eq!(summary.review_count, 2);
    }

    #[test]
    fn test_filter_matching_nothing() {
        let company = Uuid::new_v4();
        let mut r = review_at(company, Some(4.0), Some("London"), Some("UK"));
        r.category_scores = vec![category_score(r.id, "pricing", "Pricing", 4)];

        let summary = aggregate(&[r], &LocationFilter::new(Some("tokyo"), None));

        assert_eq!(summary, RatingSummary::default());
    }

    #[test]
    fn test_blank_filter_values_are_ignored() {
        let filter = LocationFilter::new(Some(""), Some("   "));
        assert!(filter.is_empty());
        assert_eq!(filter, LocationFilter::default());
    }

    #[test]
    fn test_filter_is_literal() {
        let company = Uuid::new_v4();
        let reviews = vec![review_at(company, Some(4.0), Some("London"), Some("UK"))];

        let summary = aggregate(&reviews, &LocationFilter::new(Some("l%n"), None));
        assert_eq!(summary.review_count, 0);
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let company = Uuid::new_v4();
        let mut a = review_at(company, Some(3.5), Some("Hamburg"), Some("Germany"));
        a.category_scores = vec![
            category_score(a.id, "documentation", "Documentation", 4),
            category_score(a.id, "pricing", "Pricing", 2),
        ];
        let b = review_at(company, None, Some("Bremen"), Some("Germany"));
        let reviews = vec![a, b];
        let filter = LocationFilter::new(None, Some("germ"));

        let first = aggregate(&reviews, &filter);
        let second = aggregate(&reviews, &filter);

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
