use std::io::Read;
use std::time::Instant;

use csv::Trim;

use crate::data_types::stwno_data_types::MealRecord;
use crate::errors::{MensaError, MensaResult};

/// datum;tag;warengruppe;name;kennz;preis;stud;bed;gast
pub const MEAL_COLUMNS: usize = 9;

/// Reads the (already repaired) weekly plan. The first line is the header and
/// gets skipped, columns are mapped by position.
pub fn parse_meals<R: Read>(input: R) -> MensaResult<Vec<MealRecord>> {
    let now = Instant::now();
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(false)
        .trim(Trim::All)
        .from_reader(input);

    // rows are held to the header's width by the reader, the header to ours
    let columns = rdr.headers()?.len();
    if columns != MEAL_COLUMNS {
        return Err(MensaError::InvalidRow {
            line: 1,
            reason: format!("expected {} columns, got {}", MEAL_COLUMNS, columns),
        });
    }

    let mut meals = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map_or(0, |pos| pos.line());
        let meal: MealRecord = record.deserialize(None).map_err(|e| MensaError::InvalidRow {
            line,
            reason: e.to_string(),
        })?;
        meals.push(meal);
    }

    log::debug!("parsed {} meals: {:.2?}", meals.len(), now.elapsed());
    Ok(meals)
}
