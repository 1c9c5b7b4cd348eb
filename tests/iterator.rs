use chrono::{DateTime, Duration, Utc};
use cron_mask::{Result, Schedule};

#[test]
fn iterator() -> Result<()> {
    let schedule = Schedule::new("0 0 0 * * *")?;
    let now = Utc::now();

    // Get the next 10 timestamps starting from now
    let events: Vec<_> = schedule.iter(&now).take(10).collect();
    assert_eq!(events.len(), 10);
    assert!(events[0] > now);
    assert!(events.windows(2).all(|pair| pair[1] - pair[0] == Duration::days(1)));

    Ok(())
}

#[test]
fn interval_iterator() -> Result<()> {
    let schedule = Schedule::new("@every 15m")?;
    let now = DateTime::parse_from_rfc3339("2024-02-29T23:50:10.125Z").unwrap().with_timezone(&Utc);

    let events: Vec<_> = schedule.into_iter(&now).take(3).map(|t| t.to_rfc3339()).collect();
    assert_eq!(
        events,
        vec!["2024-03-01T00:05:10+00:00", "2024-03-01T00:20:10+00:00", "2024-03-01T00:35:10+00:00"]
    );

    Ok(())
}

#[test]
fn day_of_month_or_day_of_week() -> Result<()> {
    let schedule = Schedule::new("0 0 0 1,15 * MON")?;
    let now = DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z").unwrap();

    let events: Vec<_> = schedule.iter(&now).take(4).map(|t| t.date_naive().to_string()).collect();
    assert_eq!(events, vec!["2024-01-08", "2024-01-15", "2024-01-22", "2024-01-29"]);

    Ok(())
}
