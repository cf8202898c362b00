use chrono::{Month, Weekday};

/// weekdays in Monday-first order.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// the months covered by the published trip datasets. filtering is restricted
/// to the first half of the year.
pub const FILTERABLE_MONTHS: [Month; 6] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
];

/// full English name of a weekday. this is the naming used by both the
/// day filter and the time of travel report.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// case-insensitive lookup of a weekday by its full name.
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    let name = name.trim();
    WEEKDAYS
        .iter()
        .find(|w| weekday_name(**w).eq_ignore_ascii_case(name))
        .copied()
}

/// full English name for a month number in [1, 12].
pub fn month_name(month_number: u32) -> Option<&'static str> {
    let number = u8::try_from(month_number).ok()?;
    Month::try_from(number).ok().map(|m| m.name())
}

/// case-insensitive lookup of a month by its full name.
pub fn month_from_name(name: &str) -> Option<Month> {
    let name = name.trim();
    (1..=12u8)
        .filter_map(|n| Month::try_from(n).ok())
        .find(|m| m.name().eq_ignore_ascii_case(name))
}

/// true if the month is within [`FILTERABLE_MONTHS`].
pub fn is_filterable_month(month: &Month) -> bool {
    FILTERABLE_MONTHS.contains(month)
}
