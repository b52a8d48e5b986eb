//! Fixed lookup tables from Spanish month and weekday names to ordinals.

use crate::error::QueryError;

/// The twelve month names, January first. A month's number is its position
/// plus one.
pub const MONTH_NAMES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Weekday name -> days from Monday (Monday=0 ... Sunday=6).
/// Accented spellings are accepted alongside the plain ones.
const WEEKDAYS: [(&str, u32); 9] = [
    ("lunes", 0),
    ("martes", 1),
    ("miercoles", 2),
    ("miércoles", 2),
    ("jueves", 3),
    ("viernes", 4),
    ("sabado", 5),
    ("sábado", 5),
    ("domingo", 6),
];

/// The seven canonical weekday names, Monday first
pub const WEEKDAY_NAMES: [&str; 7] = [
    "lunes",
    "martes",
    "miercoles",
    "jueves",
    "viernes",
    "sabado",
    "domingo",
];

/// Month number (1-12) for a Spanish month name
pub fn month_ordinal(name: &str) -> Result<u32, QueryError> {
    let key = name.trim().to_lowercase();
    MONTH_NAMES
        .iter()
        .position(|&candidate| candidate == key)
        .map(|index| index as u32 + 1)
        .ok_or_else(|| QueryError::invalid_argument("month", name))
}

/// Days from Monday (0-6) for a Spanish weekday name
pub fn weekday_ordinal(name: &str) -> Result<u32, QueryError> {
    lookup(&WEEKDAYS, name).ok_or_else(|| QueryError::invalid_argument("weekday", name))
}

fn lookup(table: &[(&str, u32)], name: &str) -> Option<u32> {
    let key = name.trim().to_lowercase();
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|&(_, ordinal)| ordinal)
}
