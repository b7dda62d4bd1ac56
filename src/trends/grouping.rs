use std::collections::HashMap;

use crate::models::{Category, GroupStat, RatingRecord};

/// Group records by the dimension of `C` and compute weighted averages.
///
/// Every key of `universe` appears in the result, in declared order, even
/// when no record carries it. Keys seen in the data but missing from the
/// universe are appended in first-seen order. Records sharing a key are
/// summed independently; no deduplication happens here.
pub fn group_by<C: Category>(records: &[RatingRecord], universe: &[C]) -> Vec<GroupStat<C>> {
    let mut groups: Vec<GroupStat<C>> = Vec::with_capacity(universe.len());
    let mut index: HashMap<C, usize> = HashMap::with_capacity(universe.len());

    for key in universe {
        if !index.contains_key(key) {
            index.insert(key.clone(), groups.len());
            groups.push(GroupStat::empty(key.clone()));
        }
    }

    for record in records {
        let key = C::of(record);
        let slot = match index.get(key) {
            Some(&slot) => slot,
            None => {
                log::debug!(
                    "{} '{}' is outside the declared universe",
                    C::DIMENSION.name(),
                    key
                );
                index.insert(key.clone(), groups.len());
                groups.push(GroupStat::empty(key.clone()));
                groups.len() - 1
            }
        };
        groups[slot].add(record.count, record.weighted_rating());
    }

    groups
}

/// Group over the full declared universe of `C`.
pub fn group_by_universe<C: Category>(records: &[RatingRecord]) -> Vec<GroupStat<C>> {
    group_by(records, &C::universe())
}

/// Sum of record counts.
pub fn total_count(records: &[RatingRecord]) -> u64 {
    records.iter().map(|r| u64::from(r.count)).sum()
}

/// Count-weighted average rating across all records, ignoring groups.
///
/// Returns `None` when there is no rating data to average.
pub fn overall_average(records: &[RatingRecord]) -> Option<f64> {
    let count = total_count(records);
    if count == 0 {
        return None;
    }
    let weighted: f64 = records.iter().map(RatingRecord::weighted_rating).sum();
    Some(weighted / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Emotion, FoodType, MealTime};

    fn record(emotion: Emotion, rating: f64, count: u32) -> RatingRecord {
        RatingRecord::new("Rice", FoodType::Grains, MealTime::Lunch, emotion, rating, count)
    }

    #[test]
    fn test_universe_keys_always_present() {
        let groups = group_by_universe::<MealTime>(&[]);
        let keys: Vec<MealTime> = groups.iter().map(|g| g.key.clone()).collect();
        assert_eq!(keys, MealTime::universe());
        assert!(groups.iter().all(|g| g.total_count == 0 && g.weighted_average == 0.0));
    }

    #[test]
    fn test_out_of_universe_keys_appended_in_first_seen_order() {
        let records = vec![
            record(Emotion::Other("bored".to_string()), 3.0, 1),
            record(Emotion::Sad, 2.0, 1),
            record(Emotion::Other("calm".to_string()), 4.0, 1),
            record(Emotion::Other("bored".to_string()), 5.0, 1),
        ];
        let groups = group_by(&records, &[Emotion::Happy, Emotion::Sad]);

        let keys: Vec<&str> = groups.iter().map(|g| g.key.label()).collect();
        assert_eq!(keys, vec!["happy", "sad", "bored", "calm"]);
        assert_eq!(groups[2].total_count, 2);
        assert!((groups[2].weighted_average - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_count_records_do_not_skew_average() {
        let records = vec![record(Emotion::Angry, 1.0, 0), record(Emotion::Angry, 4.0, 2)];
        let groups = group_by(&records, &[Emotion::Angry]);
        assert_eq!(groups[0].total_count, 2);
        assert!((groups[0].weighted_average - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_universe_keys_collapse() {
        let groups = group_by::<Emotion>(&[], &[Emotion::Fear, Emotion::Fear]);
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn test_overall_average() {
        assert_eq!(overall_average(&[]), None);
        assert_eq!(overall_average(&[record(Emotion::Happy, 4.0, 0)]), None);

        let records = vec![record(Emotion::Happy, 5.0, 1), record(Emotion::Sad, 2.0, 2)];
        assert!((overall_average(&records).unwrap() - 3.0).abs() < 1e-9);
    }
}
