use crate::common::*;

const SECS_PER_DAY: f64 = 86_400.0;

#[doc = "Current instant in the given zone."]
pub fn now_in(tz: &Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(tz)
}

#[doc = r#"
    Parses a timestamp read from the weight log and converts it to `tz`.

    RFC 3339 is what this program writes. The space separated variant
    (`2024-03-01 08:15:00.123456+01:00`) is accepted as well since spreadsheet
    tools tend to rewrite the column that way.
"#]
pub fn parse_store_timestamp(raw: &str, tz: &Tz) -> anyhow::Result<DateTime<Tz>> {
    let raw: &str = raw.trim();

    let parsed: DateTime<FixedOffset> = DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z"))
        .map_err(|e| anyhow!("[parse_store_timestamp] invalid timestamp '{}': {}", raw, e))?;

    Ok(parsed.with_timezone(tz))
}

#[doc = "RFC 3339 with explicit offset and microseconds, e.g. `2024-03-01T08:15:00.123456+01:00`."]
pub fn format_store_timestamp(dt: &DateTime<Tz>) -> String {
    dt.with_timezone(&dt.offset().fix())
        .to_rfc3339_opts(SecondsFormat::Micros, false)
}

#[doc = "Fractional number of days from `from` to `to` (negative if `to` is earlier)."]
pub fn days_between<A: TimeZone, B: TimeZone>(from: &DateTime<A>, to: &DateTime<B>) -> f64 {
    let delta: chrono::Duration = to.with_timezone(&Utc) - from.with_timezone(&Utc);

    match delta.num_microseconds() {
        Some(micros) => micros as f64 / 1_000_000.0 / SECS_PER_DAY,
        None => delta.num_seconds() as f64 / SECS_PER_DAY,
    }
}

#[doc = "Moves `dt` by a fractional number of days."]
pub fn add_days(dt: &DateTime<Tz>, days: f64) -> DateTime<Tz> {
    let micros: i64 = (days * SECS_PER_DAY * 1_000_000.0).round() as i64;
    *dt + chrono::Duration::microseconds(micros)
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

#[doc = r#"
    Renders the distance between `then` and `now` the way people say it:
    "just now", "5 minutes ago", "3 days ago", "2 weeks ago", "in 1 hour".
"#]
pub fn diff_for_humans<A: TimeZone, B: TimeZone>(then: &DateTime<A>, now: &DateTime<B>) -> String {
    let secs: i64 = (now.with_timezone(&Utc) - then.with_timezone(&Utc)).num_seconds();
    let future: bool = secs < 0;
    let secs: i64 = secs.abs();

    let amount: String = if secs < 10 {
        return "just now".to_string();
    } else if secs < 60 {
        "a few seconds".to_string()
    } else if secs < 3_600 {
        plural(secs / 60, "minute")
    } else if secs < 86_400 {
        plural(secs / 3_600, "hour")
    } else {
        let days: i64 = secs / 86_400;

        if days < 7 {
            plural(days, "day")
        } else if days < 30 {
            plural(days / 7, "week")
        } else if days < 365 {
            plural(days / 30, "month")
        } else {
            plural(days / 365, "year")
        }
    };

    if future {
        format!("in {}", amount)
    } else {
        format!("{} ago", amount)
    }
}
