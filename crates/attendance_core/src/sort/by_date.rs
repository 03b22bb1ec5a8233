//! Stable adjacent-exchange sort over attendance records.

use crate::model::attendance::AttendanceRecord;

/// Sorts records ascending by date in place.
///
/// Adjacent pairs swap only when the earlier date is strictly after the
/// later one, so equal dates never cross each other. Stops after the first
/// pass that performs no swap.
pub fn sort_records_by_date(records: &mut [AttendanceRecord]) {
    let len = records.len();
    for pass in 0..len.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..len - pass - 1 {
            if records[j].date() > records[j + 1].date() {
                records.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::sort_records_by_date;
    use crate::model::attendance::AttendanceRecord;
    use chrono::NaiveDate;

    fn mark(day: u32, subject: &str, present: bool) -> AttendanceRecord {
        let date = NaiveDate::from_ymd_opt(2024, 3, day).expect("valid date");
        AttendanceRecord::new("S1", date, subject, present)
    }

    #[test]
    fn empty_and_single_inputs_are_untouched() {
        let mut empty: Vec<AttendanceRecord> = Vec::new();
        sort_records_by_date(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![mark(4, "Math", true)];
        sort_records_by_date(&mut single);
        assert_eq!(single, vec![mark(4, "Math", true)]);
    }

    #[test]
    fn equal_dates_keep_input_order() {
        let mut records = vec![
            mark(3, "a", true),
            mark(1, "b", false),
            mark(2, "c", true),
            mark(1, "d", true),
            mark(3, "e", false),
            mark(1, "f", false),
        ];
        sort_records_by_date(&mut records);

        let subjects: Vec<&str> = records.iter().map(|r| r.subject()).collect();
        assert_eq!(subjects, vec!["b", "d", "f", "c", "a", "e"]);
    }
}
