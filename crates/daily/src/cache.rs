//! Per-year memo of built liturgical years.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, trace};

use crate::error::OfficeError;
use crate::year::LiturgicalYear;

/// Thread-safe memo of [`LiturgicalYear`]s keyed by civil year.
///
/// Years are built outside the lock. Two threads asking for the same
/// unseen year may both build it; the first insertion is kept and both
/// receive it.
#[derive(Debug, Default)]
pub struct CalendarCache {
    years: RwLock<HashMap<i32, Arc<LiturgicalYear>>>,
}

impl CalendarCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the memoized year, building and inserting it on a miss.
    pub fn get_or_build(&self, year: i32) -> Result<Arc<LiturgicalYear>, OfficeError> {
        {
            let years = self.years.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(built) = years.get(&year) {
                trace!(year, "calendar cache hit");
                return Ok(Arc::clone(built));
            }
        }

        debug!(year, "calendar cache miss, building");
        let built = Arc::new(LiturgicalYear::build(year)?);
        let mut years = self.years.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(years.entry(year).or_insert(built)))
    }

    /// Number of memoized years.
    pub fn len(&self) -> usize {
        self.years.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use office_calendar::CalendarError;

    #[test]
    fn builds_once_per_year() {
        let cache = CalendarCache::new();
        assert!(cache.is_empty());
        let first = cache.get_or_build(2024).unwrap();
        let second = cache.get_or_build(2024).unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
        cache.get_or_build(2025).unwrap();
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn failures_are_not_memoized() {
        let cache = CalendarCache::new();
        assert_eq!(
            cache.get_or_build(300_000).unwrap_err(),
            OfficeError::Calendar(CalendarError::InvalidYear { year: 300_000 })
        );
        assert!(cache.is_empty());
    }

    #[test]
    fn shared_across_threads() {
        let cache = Arc::new(CalendarCache::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || cache.get_or_build(2030).unwrap())
            })
            .collect();
        let years: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(years.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
        assert_eq!(cache.len(), 1);
    }
}
