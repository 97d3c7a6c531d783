//! Date helper functions

use chrono::{DateTime, TimeZone};

/// Format a date using Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY-MM-DD") // -> "2024-01-15"
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let chrono_format = moment_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// Long date in the reading language, like "2025년 10월 25일" or "October 25, 2025"
pub fn localized_date<Tz: TimeZone>(date: &DateTime<Tz>, language: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let primary = language
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    let pattern = match primary.as_str() {
        "ko" => "%Y년 %-m월 %-d일",
        "ja" | "zh" => "%Y年%-m月%-d日",
        "de" => "%-d.%-m.%Y",
        "fr" | "es" | "it" | "pt" => "%-d/%-m/%Y",
        _ => "%B %-d, %Y",
    };
    date.format(pattern).to_string()
}

/// Date for display: the configured Moment.js format, or the localized long
/// form when none is set
pub fn display_date<Tz: TimeZone>(date: &DateTime<Tz>, format: &str, language: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    if format.is_empty() {
        localized_date(date, language)
    } else {
        format_date(date, format)
    }
}

/// Format a date in ISO 8601 / XML format
pub fn date_xml<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string()
}

/// Moment.js tokens, longest first so `YYYY` wins over `YY`
const MOMENT_TOKENS: [(&str, &str); 15] = [
    ("YYYY", "%Y"),
    ("MMMM", "%B"),
    ("DDDD", "%j"),
    ("dddd", "%A"),
    ("MMM", "%b"),
    ("ddd", "%a"),
    ("SSS", "%3f"),
    ("YY", "%y"),
    ("MM", "%m"),
    ("DD", "%d"),
    ("HH", "%H"),
    ("hh", "%I"),
    ("mm", "%M"),
    ("ss", "%S"),
    ("ZZ", "%z"),
];

/// Convert Moment.js format to chrono format in a single left-to-right pass
fn moment_to_chrono_format(format: &str) -> String {
    let mut result = String::with_capacity(format.len() * 2);
    let mut rest = format;

    'outer: while let Some(c) = rest.chars().next() {
        for (token, replacement) in MOMENT_TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                result.push_str(replacement);
                rest = tail;
                continue 'outer;
            }
        }
        if c == '%' {
            result.push_str("%%");
        } else {
            result.push(c);
        }
        rest = &rest[c.len_utf8()..];
    }

    result
}
