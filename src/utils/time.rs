use chrono::{DateTime, Local, LocalResult, TimeZone};

pub const TICK_LABEL_FMT: &str = "%m-%d";
pub const DAY_FMT: &str = "%Y-%m-%d";

/// Convert epoch seconds to local time; `None` when the instant cannot be represented.
pub fn local_from_epoch(seconds: i64) -> Option<DateTime<Local>> {
    match Local.timestamp_opt(seconds, 0) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(first, _) => Some(first),
        LocalResult::None => None,
    }
}

pub fn tick_label(timestamp: &DateTime<Local>) -> String {
    timestamp.format(TICK_LABEL_FMT).to_string()
}

pub fn day_label(timestamp: &DateTime<Local>) -> String {
    timestamp.format(DAY_FMT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_round_trips_through_local_time() {
        let dt = local_from_epoch(1_700_000_000).expect("representable");
        assert_eq!(dt.timestamp(), 1_700_000_000);
    }

    #[test]
    fn out_of_range_epoch_is_rejected() {
        assert!(local_from_epoch(i64::MAX).is_none());
    }

    #[test]
    fn tick_label_is_month_day() {
        let dt = local_from_epoch(1_700_000_000).unwrap();
        assert_eq!(tick_label(&dt), dt.format("%m-%d").to_string());
        assert_eq!(tick_label(&dt).len(), 5);
    }
}
