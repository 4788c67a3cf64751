// 📊 Listing Count Feed - available-residence count from the listings widget
//
// The widget reports its count through `report`; nothing inspects its markup.
// Reports older than `max_age` are ignored and the configured fallback is served.

use serde::Serialize;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CountSource {
    Reported,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListingCount {
    pub count: usize,
    pub source: CountSource,
}

#[derive(Debug, Clone)]
pub struct ListingCountFeed {
    fallback: usize,
    max_age: Duration,
    last: Option<(usize, Instant)>,
}

impl ListingCountFeed {
    pub fn new(fallback: usize, max_age: Duration) -> Self {
        ListingCountFeed {
            fallback,
            max_age,
            last: None,
        }
    }

    /// Callback entry point for the listings widget
    pub fn report(&mut self, count: usize, now: Instant) {
        log::info!("listings widget reported {} available residences", count);
        self.last = Some((count, now));
    }

    pub fn current(&self, now: Instant) -> ListingCount {
        match self.last {
            Some((count, at)) if now.saturating_duration_since(at) <= self.max_age => ListingCount {
                count,
                source: CountSource::Reported,
            },
            _ => ListingCount {
                count: self.fallback,
                source: CountSource::Fallback,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_before_any_report() {
        let feed = ListingCountFeed::new(12, Duration::from_secs(300));
        let count = feed.current(Instant::now());

        assert_eq!(count.count, 12);
        assert_eq!(count.source, CountSource::Fallback);
    }

    #[test]
    fn test_fresh_report_wins() {
        let now = Instant::now();
        let mut feed = ListingCountFeed::new(12, Duration::from_secs(300));
        feed.report(7, now);

        let count = feed.current(now + Duration::from_secs(60));
        assert_eq!(count, ListingCount { count: 7, source: CountSource::Reported });
    }

    #[test]
    fn test_stale_report_falls_back() {
        let now = Instant::now();
        let mut feed = ListingCountFeed::new(12, Duration::from_secs(300));
        feed.report(7, now);

        let count = feed.current(now + Duration::from_secs(301));
        assert_eq!(count.source, CountSource::Fallback);
        assert_eq!(count.count, 12);
    }

    #[test]
    fn test_reported_zero_is_not_fallback() {
        let now = Instant::now();
        let mut feed = ListingCountFeed::new(12, Duration::from_secs(300));
        feed.report(0, now);

        assert_eq!(feed.current(now).count, 0);
        assert_eq!(feed.current(now).source, CountSource::Reported);
    }
}
