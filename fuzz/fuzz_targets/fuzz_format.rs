#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (String, i32, u16, i32)| {
    use datepattern::{compile, CivilDateTime, LocaleMessages};

    let (pattern, year, day_of_year, offset) = data;
    let month = u32::from(day_of_year % 12) + 1;
    let day = u32::from(day_of_year % 28) + 1;
    let Some(dt) = CivilDateTime::from_ymd_opt(year / 4, month, day)
        .and_then(|d| d.and_hms_milli_opt(u32::from(day_of_year) % 24, 0, 0, 0))
    else {
        return;
    };
    let dt = dt.with_offset_minutes(offset % (24 * 60));

    let compiled = compile(&pattern);
    // every name has a message, so rendering never fails
    compiled.render(&dt, &LocaleMessages::english()).unwrap();
});
