//! Text menu over the attendance service.
//!
//! # Responsibility
//! - Collect free-text input, parse dates and yes/no answers.
//! - Render records, students and percentages with status bands.
//!
//! # Invariants
//! - Store errors are printed and the loop continues.
//! - End of input behaves like choosing exit.

use crate::seed::load_sample_data;
use attendance_core::{
    build_report, format_date, parse_date, AppConfig, AttendanceRecord, AttendanceService,
    InMemoryAttendanceRepository, Student,
};
use chrono::{Local, NaiveDate};
use log::warn;
use std::io::{self, BufRead, Write};

const RULE: &str = "----------------------------------------------------------";

type Service = AttendanceService<InMemoryAttendanceRepository>;

pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
    service: Service,
    config: AppConfig,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, service: Service, config: AppConfig) -> Self {
        Self {
            input,
            output,
            service,
            config,
        }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (W, Service) {
        (self.output, self.service)
    }

    /// Runs the menu until exit or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "ATTENDANCE MANAGEMENT SYSTEM")?;
        if self.ask_yes_no("Load sample data? (y/n): ")? {
            match load_sample_data(&mut self.service, today(), &mut rand::thread_rng()) {
                Ok(()) => writeln!(self.output, "✓ Sample data loaded.")?,
                Err(err) => self.report_error(&err)?,
            }
        }

        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                break;
            };
            match choice.as_str() {
                "1" => self.add_student()?,
                "2" => self.add_subject()?,
                "3" => self.mark_attendance()?,
                "4" => self.view_student_attendance()?,
                "5" => self.view_by_date()?,
                "6" => self.view_by_subject()?,
                "7" => self.view_percentage()?,
                "8" => self.view_subject_percentages()?,
                "9" => self.view_all_students()?,
                "10" => self.view_low_attendance()?,
                "11" => self.view_report()?,
                "0" => break,
                _ => writeln!(self.output, "✗ Invalid choice! Please try again.")?,
            }
        }

        writeln!(self.output, "Goodbye.")
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(
            self.output,
            "\n1. Add Student  2. Add Subject  3. Mark Attendance\n\
             4. Student Attendance  5. By Date  6. By Subject\n\
             7. Percentage  8. Subject-wise  9. All Students\n\
             10. Low Attendance  11. Full Report  0. Exit"
        )
    }

    fn add_student(&mut self) -> io::Result<()> {
        let id = self.prompt_or_empty("Student ID: ")?;
        let name = self.prompt_or_empty("Name: ")?;
        let email = self.prompt_or_empty("Email: ")?;
        let department = self.prompt_or_empty("Department: ")?;

        match self
            .service
            .register_student(Student::new(id, name, email, department))
        {
            Ok(()) => writeln!(self.output, "✓ Student added."),
            Err(err) => self.report_error(&err),
        }
    }

    fn add_subject(&mut self) -> io::Result<()> {
        let name = self.prompt_or_empty("Subject name: ")?;
        self.service.register_subject(&name);
        writeln!(self.output, "✓ Subject added.")
    }

    fn mark_attendance(&mut self) -> io::Result<()> {
        let student_id = self.prompt_or_empty("Student ID: ")?;
        let Some(student_name) = self.service.get_student(&student_id).map(|s| s.name.clone())
        else {
            return writeln!(self.output, "✗ Student not found!");
        };

        let raw_date = self.prompt_or_empty("Date (dd-MM-yyyy, blank for today): ")?;
        let date = if raw_date.is_empty() {
            today()
        } else {
            match parse_date(&raw_date) {
                Ok(date) => date,
                Err(err) => return self.report_error(&err),
            }
        };

        let Some(subject) = self.choose_subject()? else {
            return Ok(());
        };
        let present = self.ask_yes_no("Is student present? (y/n): ")?;

        match self
            .service
            .mark_attendance(&student_id, date, present, &subject)
        {
            Ok(()) => writeln!(
                self.output,
                "✓ Marked {} for {} in {} on {}.",
                if present { "Present" } else { "Absent" },
                student_name,
                subject,
                format_date(date)
            ),
            Err(err) => self.report_error(&err),
        }
    }

    fn view_student_attendance(&mut self) -> io::Result<()> {
        let student_id = self.prompt_or_empty("Student ID: ")?;
        match self.service.attendance_by_student(&student_id) {
            Ok(records) => self.print_records(&records),
            Err(err) => self.report_error(&err),
        }
    }

    fn view_by_date(&mut self) -> io::Result<()> {
        let raw = self.prompt_or_empty("Date (dd-MM-yyyy): ")?;
        match parse_date(&raw) {
            Ok(date) => {
                let records = self.service.attendance_by_date(date);
                self.print_records(&records)
            }
            Err(err) => self.report_error(&err),
        }
    }

    fn view_by_subject(&mut self) -> io::Result<()> {
        let Some(subject) = self.choose_subject()? else {
            return Ok(());
        };
        let records = self.service.attendance_by_subject(&subject);
        self.print_records(&records)
    }

    fn view_percentage(&mut self) -> io::Result<()> {
        let student_id = self.prompt_or_empty("Student ID: ")?;
        let summary = self
            .service
            .record_count(&student_id)
            .and_then(|count| Ok((count, self.service.overall_percentage(&student_id)?)));
        match summary {
            Ok((0, _)) => writeln!(self.output, "✗ No attendance records found!"),
            Ok((_, percentage)) => {
                let status = self.config.bands.classify(percentage);
                writeln!(
                    self.output,
                    "Overall Attendance: {percentage:.2}%\nStatus: {} {}",
                    status.symbol(),
                    status.label()
                )
            }
            Err(err) => self.report_error(&err),
        }
    }

    fn view_subject_percentages(&mut self) -> io::Result<()> {
        let student_id = self.prompt_or_empty("Student ID: ")?;
        let per_subject = match self.service.subject_percentages(&student_id) {
            Ok(map) => map,
            Err(err) => return self.report_error(&err),
        };
        if per_subject.is_empty() {
            return writeln!(self.output, "✗ No attendance records found!");
        }
        for (subject, percentage) in &per_subject {
            let status = self.config.bands.classify(*percentage);
            writeln!(
                self.output,
                "{subject:<25} : {percentage:6.2}% {}",
                status.symbol()
            )?;
        }
        Ok(())
    }

    fn view_all_students(&mut self) -> io::Result<()> {
        let students = self.service.students_sorted_by_name();
        if students.is_empty() {
            return writeln!(self.output, "✗ No students found!");
        }
        for student in &students {
            writeln!(self.output, "{student}")?;
        }
        writeln!(self.output, "Total Students: {}", students.len())
    }

    fn view_low_attendance(&mut self) -> io::Result<()> {
        let default = self.config.low_attendance_threshold;
        let raw = self.prompt_or_empty(&format!("Threshold % (blank for {default}): "))?;
        let threshold = if raw.is_empty() {
            default
        } else {
            match raw.parse::<f64>() {
                Ok(value) => value,
                Err(_) => return writeln!(self.output, "✗ Invalid number: {raw}"),
            }
        };

        let students = self.service.low_attendance_students(threshold);
        if students.is_empty() {
            return writeln!(self.output, "✓ No students below {threshold}% attendance!");
        }
        for student in &students {
            let percentage = self.service.overall_percentage(&student.id).unwrap_or(0.0);
            writeln!(self.output, "{student} | Attendance: {percentage:.2}%")?;
        }
        writeln!(self.output, "Total Students: {}", students.len())
    }

    fn view_report(&mut self) -> io::Result<()> {
        let rows = match build_report(&self.service, &self.config.bands) {
            Ok(rows) => rows,
            Err(err) => return self.report_error(&err),
        };
        for row in &rows {
            writeln!(self.output, "\n{}", row.student)?;
            let Some(status) = row.status else {
                writeln!(self.output, "  Overall Attendance: No records")?;
                continue;
            };
            writeln!(
                self.output,
                "  Overall Attendance: {:.2}% {}",
                row.overall_percentage,
                status.symbol()
            )?;
            for (subject, percentage) in &row.subject_percentages {
                writeln!(self.output, "    - {subject:<25} : {percentage:.2}%")?;
            }
        }
        writeln!(self.output, "\nTotal Students: {}", rows.len())
    }

    fn choose_subject(&mut self) -> io::Result<Option<String>> {
        let subjects = self.service.list_subjects();
        if subjects.is_empty() {
            writeln!(self.output, "✗ No subjects available! Please add subjects first.")?;
            return Ok(None);
        }
        for (idx, subject) in subjects.iter().enumerate() {
            writeln!(self.output, "{}. {subject}", idx + 1)?;
        }
        let raw = self.prompt_or_empty("Select Subject (number): ")?;
        let picked = raw
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| subjects.get(idx).cloned());
        if picked.is_none() {
            writeln!(self.output, "✗ Invalid subject selection!")?;
        }
        Ok(picked)
    }

    fn print_records(&mut self, records: &[AttendanceRecord]) -> io::Result<()> {
        if records.is_empty() {
            return writeln!(self.output, "✗ No attendance records found!");
        }
        writeln!(self.output, "{RULE}")?;
        for record in records {
            writeln!(self.output, "{record}")?;
        }
        writeln!(self.output, "{RULE}\nTotal Records: {}", records.len())
    }

    fn report_error(&mut self, err: &dyn std::error::Error) -> io::Result<()> {
        warn!("event=command_failed module=cli status=error reason={err}");
        writeln!(self.output, "✗ Error: {err}")
    }

    fn ask_yes_no(&mut self, message: &str) -> io::Result<bool> {
        Ok(self.prompt_or_empty(message)?.eq_ignore_ascii_case("y"))
    }

    fn prompt_or_empty(&mut self, message: &str) -> io::Result<String> {
        Ok(self.prompt(message)?.unwrap_or_default())
    }

    /// Prints `message` and reads one trimmed line; `None` at end of input.
    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::Console;
    use attendance_core::{AppConfig, AttendanceService, InMemoryAttendanceRepository};
    use std::io::Cursor;

    fn run_script(script: &str) -> (String, AttendanceService<InMemoryAttendanceRepository>) {
        let service = AttendanceService::new(InMemoryAttendanceRepository::new());
        let mut console = Console::new(
            Cursor::new(script.to_string()),
            Vec::new(),
            service,
            AppConfig::default(),
        );
        console.run().unwrap();
        let (output, service) = console.into_parts();
        (String::from_utf8(output).unwrap(), service)
    }

    #[test]
    fn add_student_subject_and_mark_through_menu() {
        let script = "n\n\
            1\nS1\nAlice\nalice@example.com\nCS\n\
            2\nMath\n\
            3\nS1\n01-03-2024\n1\ny\n\
            7\nS1\n\
            0\n";
        let (output, service) = run_script(script);

        assert_eq!(service.attendance_by_student("S1").unwrap().len(), 1);
        assert!(output.contains("Marked Present for Alice in Math on 01-03-2024"));
        assert!(output.contains("Overall Attendance: 100.00%"));
        assert!(output.contains("GOOD ATTENDANCE"));
    }

    #[test]
    fn errors_are_reported_and_loop_continues() {
        let script = "n\n\
            1\nS1\nAlice\na@x\nCS\n\
            1\nS1\nBob\nb@x\nEE\n\
            5\n2024-03-01\n\
            9\n";
        let (output, service) = run_script(script);

        assert!(output.contains("✗ Error: student already exists: S1"));
        assert!(output.contains("✗ Error: invalid date `2024-03-01`"));
        assert!(output.contains("Total Students: 1"));
        assert_eq!(service.list_students().len(), 1);
        assert!(output.ends_with("Goodbye.\n"));
    }

    #[test]
    fn invalid_subject_number_is_rejected() {
        let script = "n\n1\nS1\nAlice\na@x\nCS\n2\nMath\n3\nS1\n\n7\n0\n";
        let (output, service) = run_script(script);

        assert!(output.contains("✗ Invalid subject selection!"));
        assert!(service.attendance_by_student("S1").unwrap().is_empty());
    }

    #[test]
    fn sample_data_feeds_report() {
        let (output, service) = run_script("y\n11\n0\n");
        assert_eq!(service.list_students().len(), 5);
        assert!(output.contains("Alice Johnson"));
        assert!(output.contains("Total Students: 5"));
    }
}
