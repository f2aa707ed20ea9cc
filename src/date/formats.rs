//! `chrono` format tables for the date cascade, in precedence order.

/// Formats carrying a numeric UTC offset.
pub(super) const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f %z",
    "%Y/%m/%d %H:%M:%S %z",
    "%d %b %Y %H:%M:%S %z",
    "%a, %d %b %Y %H:%M:%S %z",
    "%a %d %b %Y %H:%M:%S %z",
    "%a %b %d %H:%M:%S %z %Y",
    "%b %d %Y %H:%M:%S %z",
    "%b %d, %Y %H:%M:%S %z",
    "%d-%b-%Y %H:%M:%S %z",
    "%d/%b/%Y:%H:%M:%S %z",
    "%m/%d/%Y %H:%M:%S %z",
];

/// Naive date-times: ISO, named month, 12-hour, US numeric, EU numeric, dotted.
pub(super) const NAIVE_DATETIME_FORMATS: &[&str] = &[
    // ISO
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    // named month
    "%b %d, %Y %H:%M:%S",
    "%b %d, %Y %H:%M",
    "%b %d %Y %H:%M:%S",
    "%d %b %Y %H:%M:%S",
    "%d %b %Y %H:%M",
    "%a, %d %b %Y %H:%M:%S",
    "%a %d %b %Y %H:%M:%S",
    "%a %b %d %H:%M:%S %Y",
    "%b %d %H:%M:%S %Y",
    "%d-%b-%Y %H:%M:%S",
    "%d/%b/%Y:%H:%M:%S",
    // 12-hour
    "%Y-%m-%d %I:%M:%S %p",
    "%b %d, %Y %I:%M:%S %p",
    "%b %d, %Y %I:%M %p",
    "%d %b %Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%d/%m/%Y %I:%M:%S %p",
    // US before EU
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
];

/// Bare dates, read as midnight.
pub(super) const NAIVE_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%b %d, %Y",
    "%b %d %Y",
    "%d %b %Y",
    "%a, %d %b %Y",
    "%d-%b-%Y",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%d.%m.%Y",
];

/// Year-less date-times; the year is supplied as a `%Y ` prefix.
pub(super) const YEARLESS_DATETIME_FORMATS: &[&str] = &[
    "%Y %b %d %H:%M:%S",
    "%Y %b %d %H:%M",
    "%Y %d %b %H:%M:%S",
    "%Y %d %b %H:%M",
    "%Y %m/%d %H:%M:%S",
    "%Y %m/%d %H:%M",
];

/// Year-less dates; the year is supplied as a `%Y ` prefix.
pub(super) const YEARLESS_DATE_FORMATS: &[&str] = &["%Y %b %d", "%Y %d %b", "%Y %m/%d"];
