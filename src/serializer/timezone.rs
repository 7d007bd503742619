use chrono::Local;

/// The host's offset in minutes, in the JavaScript `getTimezoneOffset`
/// convention: UTC minus local time, so positive west of UTC.
pub fn host_offset_minutes() -> i32 {
    -(Local::now().offset().local_minus_utc() / 60)
}

/// Converts a raw `getTimezoneOffset`-style value into whole hours, east of
/// UTC positive. Partial hours are truncated toward zero.
pub fn timezone_offset_hours(raw_offset_minutes: i32) -> i32 {
    if raw_offset_minutes == 0 {
        0
    } else {
        -(raw_offset_minutes / 60)
    }
}
