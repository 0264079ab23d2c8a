use std::io::{self, Write};

use chrono::Weekday;

use crate::constants::{COLOR_RED, COLOR_RESET, ELLIPSIS, NAME_MAX_LEN};
use crate::data_types::stwno_data_types::{MealRecord, DATE_FORMAT};
use crate::data_types::PrintOptions;

const WEEK_DAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

fn weekday_name(day: Weekday) -> &'static str {
    WEEK_DAYS[day.num_days_from_sunday() as usize]
}

/// Shortens overlong names so that name and meal type together stay within
/// `NAME_MAX_LEN` characters (plus the ellipsis).
pub fn truncate_name(name: &str, meal_type: &str) -> String {
    if name.chars().count() <= NAME_MAX_LEN {
        return name.to_string();
    }

    // meal types as long as the limit leave nothing of the name
    let keep = NAME_MAX_LEN.saturating_sub(meal_type.chars().count());
    let mut short: String = name.chars().take(keep).collect();
    short.push_str(ELLIPSIS);
    short
}

/// Buckets indexed Sunday = 0 .. Saturday = 6, by the weekday of the parsed date.
pub fn group_by_weekday(meals: &[MealRecord]) -> [Vec<&MealRecord>; 7] {
    let mut buckets: [Vec<&MealRecord>; 7] = Default::default();
    for meal in meals {
        buckets[meal.weekday().num_days_from_sunday() as usize].push(meal);
    }
    buckets
}

pub fn print_meals<W: Write>(
    out: &mut W,
    meals: &[MealRecord],
    options: &PrintOptions,
) -> io::Result<()> {
    let (highlight, reset) = if options.color {
        (COLOR_RED, COLOR_RESET)
    } else {
        ("", "")
    };

    let buckets = group_by_weekday(meals);
    let mut printed = 0;

    for (idx, bucket) in buckets.iter().enumerate() {
        if let Some(today) = options.today {
            if today.num_days_from_sunday() as usize != idx {
                continue;
            }
        }

        let mut date = None;
        for meal in bucket {
            if date != Some(meal.date) {
                writeln!(
                    out,
                    "{}{} {}:{}",
                    highlight,
                    meal.date.format(DATE_FORMAT),
                    weekday_name(meal.weekday()),
                    reset
                )?;
                date = Some(meal.date);
            }
            writeln!(
                out,
                "    - {} : {} [{}]",
                meal.price_for(options.tier),
                truncate_name(&meal.name, &meal.meal_type),
                meal.meal_type
            )?;
            printed += 1;
        }
    }

    if let (Some(today), 0) = (options.today, printed) {
        writeln!(out, "No meals for {}.", weekday_name(today))?;
    }

    Ok(())
}
