//! Partition-exchange sort over students by name.

use crate::model::student::Student;
use std::cmp::Ordering;

/// Compares two strings ignoring case, char by char.
pub fn compare_ignore_case(left: &str, right: &str) -> Ordering {
    left.chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase))
}

/// Sorts students by case-insensitive name in place.
///
/// Quicksort with the last element as pivot; elements whose name compares
/// less than the pivot are swapped to the front. Not stable.
pub fn sort_students_by_name(students: &mut [Student]) {
    if students.len() < 2 {
        return;
    }
    let pivot = partition(students);
    let (left, right) = students.split_at_mut(pivot);
    sort_students_by_name(left);
    sort_students_by_name(&mut right[1..]);
}

fn partition(students: &mut [Student]) -> usize {
    let high = students.len() - 1;
    let mut store = 0;
    for j in 0..high {
        if compare_ignore_case(&students[j].name, &students[high].name) == Ordering::Less {
            students.swap(store, j);
            store += 1;
        }
    }
    students.swap(store, high);
    store
}

#[cfg(test)]
mod tests {
    use super::{compare_ignore_case, sort_students_by_name};
    use crate::model::student::Student;
    use std::cmp::Ordering;

    fn named(names: &[&str]) -> Vec<Student> {
        names
            .iter()
            .enumerate()
            .map(|(idx, name)| Student::new(format!("S{idx}"), *name, "", ""))
            .collect()
    }

    fn names(students: &[Student]) -> Vec<&str> {
        students.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn compare_ignores_ascii_case() {
        assert_eq!(compare_ignore_case("alice", "ALICE"), Ordering::Equal);
        assert_eq!(compare_ignore_case("Bob", "alice"), Ordering::Greater);
        assert_eq!(compare_ignore_case("al", "Alice"), Ordering::Less);
    }

    #[test]
    fn sorts_mixed_case_names() {
        let mut students = named(&["bob", "Alice", "charlie"]);
        sort_students_by_name(&mut students);
        assert_eq!(names(&students), vec!["Alice", "bob", "charlie"]);
    }

    #[test]
    fn handles_reverse_and_sorted_inputs() {
        let mut reversed = named(&["Eve", "diana", "Charlie", "bob", "Alice"]);
        sort_students_by_name(&mut reversed);
        assert_eq!(
            names(&reversed),
            vec!["Alice", "bob", "Charlie", "diana", "Eve"]
        );

        let mut sorted = named(&["a", "b", "c", "d"]);
        sort_students_by_name(&mut sorted);
        assert_eq!(names(&sorted), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn keeps_every_student_when_names_tie() {
        let mut students = named(&["sam", "Sam", "adam", "SAM"]);
        sort_students_by_name(&mut students);

        assert_eq!(students.len(), 4);
        assert_eq!(students[0].name, "adam");
        assert!(students[1..]
            .iter()
            .all(|s| s.name.eq_ignore_ascii_case("sam")));
    }
}
