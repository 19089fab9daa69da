//! S8 Validate (§4.8): advisory per-field checks over a finished table,
//! collapsed to summary rows past a per-check failure threshold. Never
//! blocks emission; callers only ever read the produced report.

use crate::store::{Geometry, Table};
use crate::value::{AttrValue, Scalar};

/// A single failed record, or a synthetic summary row standing in for a
/// check that overflowed `MAX_FAILURES_PER_CHECK`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    pub layer: String,
    pub record: String,
    pub field: String,
    pub code: &'static str,
    pub message: String,
}

const MAX_FAILURES_PER_CHECK: usize = 100;

/// One named check family, run once per (layer, field) pair it applies to.
pub trait ValidationCheck {
    fn failure_code(&self) -> &'static str;
    fn run(&self, layer: &str, table: &Table) -> Vec<ValidationFailure>;
}

fn record_id(table: &Table, row: usize) -> String {
    table.nid_of(row).map(str::to_string).unwrap_or_else(|| table.uuid[row].clone())
}

fn str_cell(table: &Table, field: &str, row: usize) -> Option<String> {
    match table.column(field)?.get(row)? {
        AttrValue::Scalar(Scalar::Str(s)) => Some(s.clone()),
        _ => None,
    }
}

fn int_cell(table: &Table, field: &str, row: usize) -> Option<i64> {
    match table.column(field)?.get(row)? {
        AttrValue::Scalar(Scalar::Int(i)) => Some(*i),
        AttrValue::Scalar(Scalar::Real(r)) => Some(*r as i64),
        _ => None,
    }
}

fn collapse(layer: &str, field: &str, code: &'static str, mut failures: Vec<ValidationFailure>) -> Vec<ValidationFailure> {
    if failures.len() > MAX_FAILURES_PER_CHECK {
        vec![ValidationFailure {
            layer: layer.to_string(),
            record: "-".to_string(),
            field: field.to_string(),
            code,
            message: "Many records failed.".to_string(),
        }]
    } else {
        failures.drain(..).collect()
    }
}

/// Speed (`roadseg.speed`) must be in [5, 120] and divisible by 5 (§4.8).
pub struct SpeedLimitCheck {
    pub field: &'static str,
}

impl ValidationCheck for SpeedLimitCheck {
    fn failure_code(&self) -> &'static str {
        "E101"
    }

    fn run(&self, layer: &str, table: &Table) -> Vec<ValidationFailure> {
        let mut failures = Vec::new();
        for row in 0..table.num_rows() {
            let Some(speed) = int_cell(table, self.field, row) else { continue };
            let message = if speed < 5 {
                Some("Speed is below 5 kph")
            } else if speed > 120 {
                Some("Speed is above 120 kph")
            } else if speed % 5 != 0 {
                Some("Speed is not divisible by 5 kph")
            } else {
                None
            };
            if let Some(message) = message {
                failures.push(ValidationFailure {
                    layer: layer.to_string(),
                    record: record_id(table, row),
                    field: self.field.to_string(),
                    code: self.failure_code(),
                    message: message.to_string(),
                });
            }
        }
        collapse(layer, self.field, self.failure_code(), failures)
    }
}

/// Date-as-string fields (§6 "Date-as-string format"): non-empty, length
/// ∈ {4,6,8}, year ∈ [1960, current], month ∈ [1,12], day valid for its
/// month including leap years.
pub struct DateCheck {
    pub field: &'static str,
    pub current_year: i32,
}

impl ValidationCheck for DateCheck {
    fn failure_code(&self) -> &'static str {
        "E102"
    }

    fn run(&self, layer: &str, table: &Table) -> Vec<ValidationFailure> {
        let mut failures = Vec::new();
        let Some(col) = table.column(self.field) else { return failures };
        for row in 0..table.num_rows() {
            let is_missing = match &col[row] {
                AttrValue::Scalar(Scalar::Str(s)) => s.is_empty(),
                AttrValue::Scalar(Scalar::Null) => true,
                _ => false,
            };
            if is_missing {
                failures.push(self.failure(layer, table, row, "Missing date value"));
                continue;
            }
            let Some(value) = str_cell(table, self.field, row) else { continue };
            if let Some(message) = self.validate_shape(&value) {
                failures.push(self.failure(layer, table, row, message));
            }
        }
        collapse(layer, self.field, self.failure_code(), failures)
    }
}

impl DateCheck {
    fn failure(&self, layer: &str, table: &Table, row: usize, message: &str) -> ValidationFailure {
        ValidationFailure {
            layer: layer.to_string(),
            record: record_id(table, row),
            field: self.field.to_string(),
            code: self.failure_code(),
            message: message.to_string(),
        }
    }

    fn validate_shape(&self, value: &str) -> Option<&'static str> {
        if !matches!(value.len(), 4 | 6 | 8) {
            return Some("Invalid date length");
        }
        let year: i32 = value[..4].parse().ok()?;
        if year < 1960 || year > self.current_year {
            return Some("Year value out of range");
        }
        if value.len() >= 6 {
            let month: u32 = value[4..6].parse().ok()?;
            if !(1..=12).contains(&month) {
                return Some("Invalid month value");
            }
            if value.len() == 8 {
                let day: u32 = value[6..8].parse().ok()?;
                if day < 1 || day > days_in_month(year, month) {
                    return Some("Invalid day value");
                }
            }
        }
        None
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Flags duplicate point geometries within a table (§4.8).
pub struct DuplicatePointCheck;

impl ValidationCheck for DuplicatePointCheck {
    fn failure_code(&self) -> &'static str {
        "E103"
    }

    fn run(&self, layer: &str, table: &Table) -> Vec<ValidationFailure> {
        let mut failures = Vec::new();
        let Some(geoms) = table.geometry.as_ref() else { return failures };

        let mut seen: std::collections::HashMap<Vec<u8>, usize> = std::collections::HashMap::new();
        for (row, geom) in geoms.iter().enumerate() {
            let Some(Geometry::Point(_)) = geom else { continue };
            let key = geom.as_ref().unwrap().to_wkb();
            if seen.contains_key(&key) {
                failures.push(ValidationFailure {
                    layer: layer.to_string(),
                    record: record_id(table, row),
                    field: "geometry".to_string(),
                    code: self.failure_code(),
                    message: "Duplicate point geometry".to_string(),
                });
            } else {
                seen.insert(key, row);
            }
        }
        collapse(layer, "geometry", self.failure_code(), failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids;
    use nrn_schema::table;

    #[test]
    fn speed_outside_range_and_not_divisible_by_five_both_fail() {
        let mut t = Table::new(table("roadseg").unwrap());
        let a = t.push_default_row(ids::new_uuid());
        t.column_mut("speed").unwrap()[a] = AttrValue::Scalar(Scalar::Int(3));
        let b = t.push_default_row(ids::new_uuid());
        t.column_mut("speed").unwrap()[b] = AttrValue::Scalar(Scalar::Int(47));
        let c = t.push_default_row(ids::new_uuid());
        t.column_mut("speed").unwrap()[c] = AttrValue::Scalar(Scalar::Int(50));

        let check = SpeedLimitCheck { field: "speed" };
        let failures = check.run("roadseg", &t);
        assert_eq!(failures.len(), 2);
    }

    #[test]
    fn date_rejects_future_year_and_invalid_day() {
        let mut t = Table::new(table("roadseg").unwrap());
        let a = t.push_default_row(ids::new_uuid());
        t.column_mut("credate").unwrap()[a] = AttrValue::Scalar(Scalar::Str("30000101".into()));
        let b = t.push_default_row(ids::new_uuid());
        t.column_mut("credate").unwrap()[b] = AttrValue::Scalar(Scalar::Str("20230230".into()));
        let c = t.push_default_row(ids::new_uuid());
        t.column_mut("credate").unwrap()[c] = AttrValue::Scalar(Scalar::Str("20240229".into()));

        let check = DateCheck { field: "credate", current_year: 2026 };
        let failures = check.run("roadseg", &t);
        let failed_records: Vec<&str> = failures.iter().map(|f| f.record.as_str()).collect();
        assert_eq!(failures.len(), 2);
        assert!(failed_records.contains(&t.nid_of(a).unwrap()));
        assert!(failed_records.contains(&t.nid_of(b).unwrap()));
    }

    #[test]
    fn duplicate_points_flag_the_second_occurrence_only() {
        let mut t = Table::new(table("junction").unwrap());
        for _ in 0..2 {
            let idx = t.push_default_row(ids::new_uuid());
            t.geometry.as_mut().unwrap()[idx] = Some(Geometry::Point(geo::Point::new(-66.0, 45.0)));
        }
        let check = DuplicatePointCheck;
        let failures = check.run("junction", &t);
        assert_eq!(failures.len(), 1);
    }

    #[test]
    fn failures_past_threshold_collapse_to_one_summary_row() {
        let mut t = Table::new(table("roadseg").unwrap());
        for _ in 0..150 {
            let idx = t.push_default_row(ids::new_uuid());
            t.column_mut("speed").unwrap()[idx] = AttrValue::Scalar(Scalar::Int(3));
        }
        let check = SpeedLimitCheck { field: "speed" };
        let failures = check.run("roadseg", &t);
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].record, "-");
    }
}
