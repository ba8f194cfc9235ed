//! Nearest trading day lookup.

use tessera_core::Date;

use crate::types::PriceRecord;

/// Returns the record whose date is closest to `target`, before or after.
///
/// Linear scan; the first record at the minimum absolute distance wins, so
/// with a date-sorted series a tie between the day before and the day after
/// resolves to the earlier day. Returns `None` for an empty input.
pub fn closest_entry<'a, I>(records: I, target: Date) -> Option<&'a PriceRecord>
where
    I: IntoIterator<Item = &'a PriceRecord>,
{
    let mut closest: Option<(&PriceRecord, u64)> = None;
    for record in records {
        let diff = record.date.abs_days_between(&target);
        match closest {
            Some((_, best)) if diff >= best => {}
            _ => closest = Some((record, diff)),
        }
    }
    closest.map(|(record, _)| record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::Ticker;

    fn record(d: &str, close: f64) -> PriceRecord {
        PriceRecord::close_only(Date::parse(d).unwrap(), Ticker::new("AAA").unwrap(), close)
    }

    fn target(d: &str) -> Date {
        Date::parse(d).unwrap()
    }

    #[test]
    fn test_exact_match() {
        let series = vec![record("2018-02-05", 1.0), record("2018-02-07", 2.0)];
        let found = closest_entry(&series, target("2018-02-07")).unwrap();
        assert_eq!(found.close, 2.0);
    }

    #[test]
    fn test_weekend_target_snaps_to_nearest() {
        // Saturday 2018-02-10: Friday is 1 day away, Monday 2 days.
        let series = vec![record("2018-02-09", 1.0), record("2018-02-12", 2.0)];
        let found = closest_entry(&series, target("2018-02-10")).unwrap();
        assert_eq!(found.close, 1.0);
    }

    #[test]
    fn test_tie_prefers_first() {
        let series = vec![record("2018-02-09", 1.0), record("2018-02-11", 2.0)];
        let found = closest_entry(&series, target("2018-02-10")).unwrap();
        assert_eq!(found.close, 1.0);
    }

    #[test]
    fn test_target_outside_history() {
        let series = vec![record("2015-01-02", 1.0), record("2018-02-07", 2.0)];
        assert_eq!(closest_entry(&series, target("2010-01-01")).unwrap().close, 1.0);
        assert_eq!(closest_entry(&series, target("2030-01-01")).unwrap().close, 2.0);
    }

    #[test]
    fn test_empty() {
        let series: Vec<PriceRecord> = Vec::new();
        assert!(closest_entry(&series, target("2018-02-07")).is_none());
    }
}
