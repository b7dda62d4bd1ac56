use crate::models::Category;

/// Aggregated ratings for one category key.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStat<C> {
    /// The category this group collects.
    pub key: C,

    /// Sum of record counts in the group.
    pub total_count: u64,

    /// Sum of `rating * count` in the group.
    pub weighted_sum: f64,

    /// `weighted_sum / total_count`, or 0 for an empty group.
    pub weighted_average: f64,
}

impl<C: Category> GroupStat<C> {
    pub fn empty(key: C) -> Self {
        Self {
            key,
            total_count: 0,
            weighted_sum: 0.0,
            weighted_average: 0.0,
        }
    }

    /// Fold one record's contribution into the group.
    pub fn add(&mut self, count: u32, weighted_rating: f64) {
        self.total_count += u64::from(count);
        self.weighted_sum += weighted_rating;
        self.weighted_average = if self.total_count > 0 {
            self.weighted_sum / self.total_count as f64
        } else {
            0.0
        };
    }

    pub fn has_data(&self) -> bool {
        self.total_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MealTime;

    #[test]
    fn test_empty_group_average_is_zero() {
        let mut stat = GroupStat::empty(MealTime::Lunch);
        stat.add(0, 0.0);
        assert_eq!(stat.weighted_average, 0.0);
        assert!(!stat.has_data());
    }

    #[test]
    fn test_add_updates_average() {
        let mut stat = GroupStat::empty(MealTime::Dinner);
        stat.add(2, 10.0);
        stat.add(1, 3.0);
        assert_eq!(stat.total_count, 3);
        assert!((stat.weighted_average - 13.0 / 3.0).abs() < 1e-9);
    }
}
