use std::cmp::Ordering;

use crate::models::{Category, GroupStat, RatingRecord};

/// Direction for ranking by weighted average.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Descending,
    Ascending,
}

/// An undefined average ranks like an empty group.
fn rank_value(average: f64) -> f64 {
    if average.is_nan() { 0.0 } else { average }
}

/// Compare two averages. NaN compares as 0 so the order stays total.
fn compare_averages(a: f64, b: f64, order: SortOrder) -> Ordering {
    let ord = rank_value(a)
        .partial_cmp(&rank_value(b))
        .unwrap_or(Ordering::Equal);
    match order {
        SortOrder::Ascending => ord,
        SortOrder::Descending => ord.reverse(),
    }
}

/// Sort groups by weighted average.
///
/// The sort is stable: groups with equal averages keep their input order in
/// both directions.
pub fn rank<C: Category>(mut stats: Vec<GroupStat<C>>, order: SortOrder) -> Vec<GroupStat<C>> {
    stats.sort_by(|a, b| compare_averages(a.weighted_average, b.weighted_average, order));
    stats
}

/// First group in a ranking that has any rating data.
pub fn top_group<C: Category>(ranked: &[GroupStat<C>]) -> Option<&GroupStat<C>> {
    ranked.iter().find(|g| g.has_data())
}

/// Records ordered by individual rating, highest first, for the list view.
pub fn sort_by_rating(records: &[RatingRecord]) -> Vec<RatingRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare_averages(a.rating, b.rating, SortOrder::Descending));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Emotion, FoodType, MealTime};

    fn stat(key: MealTime, average: f64, count: u64) -> GroupStat<MealTime> {
        GroupStat {
            key,
            total_count: count,
            weighted_sum: average * count as f64,
            weighted_average: average,
        }
    }

    #[test]
    fn test_rank_descending_by_default() {
        let ranked = rank(
            vec![
                stat(MealTime::Breakfast, 3.0, 1),
                stat(MealTime::Lunch, 4.5, 1),
                stat(MealTime::Dinner, 4.0, 1),
            ],
            SortOrder::default(),
        );
        let keys: Vec<MealTime> = ranked.into_iter().map(|g| g.key).collect();
        assert_eq!(keys, vec![MealTime::Lunch, MealTime::Dinner, MealTime::Breakfast]);
    }

    #[test]
    fn test_rank_ascending_keeps_ties_in_input_order() {
        let ranked = rank(
            vec![
                stat(MealTime::Snack, 4.0, 1),
                stat(MealTime::Dinner, 2.0, 1),
                stat(MealTime::Breakfast, 4.0, 1),
            ],
            SortOrder::Ascending,
        );
        let keys: Vec<MealTime> = ranked.into_iter().map(|g| g.key).collect();
        assert_eq!(keys, vec![MealTime::Dinner, MealTime::Snack, MealTime::Breakfast]);
    }

    #[test]
    fn test_top_group_skips_empty_groups() {
        let ranked = vec![stat(MealTime::Lunch, 0.0, 0), stat(MealTime::Dinner, 3.0, 2)];
        assert_eq!(top_group(&ranked).map(|g| g.key.clone()), Some(MealTime::Dinner));
        assert!(top_group(&ranked[..1]).is_none());
    }

    #[test]
    fn test_nan_average_ranks_like_empty_group() {
        let nan = stat(MealTime::Lunch, f64::NAN, 2);
        let forward = rank(
            vec![
                nan.clone(),
                stat(MealTime::Dinner, 4.0, 1),
                stat(MealTime::Snack, 2.0, 1),
            ],
            SortOrder::Descending,
        );
        let backward = rank(
            vec![
                stat(MealTime::Snack, 2.0, 1),
                stat(MealTime::Dinner, 4.0, 1),
                nan,
            ],
            SortOrder::Descending,
        );

        let expected = vec![MealTime::Dinner, MealTime::Snack, MealTime::Lunch];
        for ranked in [forward, backward] {
            let keys: Vec<MealTime> = ranked.iter().map(|g| g.key.clone()).collect();
            assert_eq!(keys, expected);
            assert_eq!(top_group(&ranked).map(|g| g.key.clone()), Some(MealTime::Dinner));
        }
    }

    #[test]
    fn test_sort_by_rating_is_stable() {
        let records = vec![
            RatingRecord::new("A", FoodType::Meat, MealTime::Lunch, Emotion::Happy, 3.0, 1),
            RatingRecord::new("B", FoodType::Meat, MealTime::Lunch, Emotion::Happy, 4.0, 1),
            RatingRecord::new("C", FoodType::Meat, MealTime::Lunch, Emotion::Happy, 3.0, 1),
        ];
        let names: Vec<String> = sort_by_rating(&records).into_iter().map(|r| r.food).collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }
}
