//! Release-date filters: how many movies came out in a month or on a weekday.

use crate::calendar::{month_ordinal, weekday_ordinal};
use crate::engine::QueryEngine;
use crate::error::QueryError;
use chrono::{Datelike, NaiveDate};
use tracing::{debug, instrument};

impl QueryEngine {
    /// Number of movies released in the given month (Spanish month name).
    ///
    /// Movies without a release date never match.
    #[instrument(skip(self))]
    pub fn count_by_release_month(&self, month_name: &str) -> Result<usize, QueryError> {
        let month = month_ordinal(month_name)?;
        let count = self.count_released(|date| date.month() == month);
        debug!("{} movies released in month {}", count, month);
        Ok(count)
    }

    /// Number of movies released on the given weekday (Spanish day name).
    ///
    /// Movies without a release date never match.
    #[instrument(skip(self))]
    pub fn count_by_release_weekday(&self, day_name: &str) -> Result<usize, QueryError> {
        let weekday = weekday_ordinal(day_name)?;
        let count = self.count_released(|date| date.weekday().num_days_from_monday() == weekday);
        debug!("{} movies released on weekday {}", count, weekday);
        Ok(count)
    }

    fn count_released(&self, matches: impl Fn(NaiveDate) -> bool) -> usize {
        self.catalog
            .movies()
            .iter()
            .filter_map(|movie| movie.release_date)
            .filter(|&date| matches(date))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::WEEKDAY_NAMES;
    use data_loader::{Catalog, Movie};
    use std::sync::Arc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_engine() -> QueryEngine {
        let movies = vec![
            // Monday
            Movie::new(1, "A").released(date(2024, 1, 1)),
            // Wednesday
            Movie::new(2, "B").released(date(2024, 1, 17)),
            // Sunday
            Movie::new(3, "C").released(date(2023, 12, 31)),
            Movie::new(4, "Undated"),
        ];
        QueryEngine::new(Arc::new(Catalog::new(movies, vec![], vec![]).unwrap()))
    }

    #[test]
    fn test_count_by_month() {
        let engine = create_test_engine();
        assert_eq!(engine.count_by_release_month("enero"), Ok(2));
        assert_eq!(engine.count_by_release_month("Diciembre"), Ok(1));
        assert_eq!(engine.count_by_release_month("junio"), Ok(0));
    }

    #[test]
    fn test_count_by_weekday() {
        let engine = create_test_engine();
        assert_eq!(engine.count_by_release_weekday("lunes"), Ok(1));
        assert_eq!(engine.count_by_release_weekday("miércoles"), Ok(1));
        assert_eq!(engine.count_by_release_weekday("domingo"), Ok(1));
        assert_eq!(engine.count_by_release_weekday("martes"), Ok(0));
    }

    #[test]
    fn test_weekdays_partition_dated_movies() {
        let engine = create_test_engine();
        let total: usize = WEEKDAY_NAMES
            .iter()
            .map(|day| engine.count_by_release_weekday(day).unwrap())
            .sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_unknown_names_are_invalid() {
        let engine = create_test_engine();
        assert!(matches!(
            engine.count_by_release_month("january"),
            Err(QueryError::InvalidArgument { .. })
        ));
        assert!(matches!(
            engine.count_by_release_weekday("monday"),
            Err(QueryError::InvalidArgument { .. })
        ));
    }
}
