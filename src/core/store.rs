//! Line-oriented record file persistence
//!
//! The format is plain UTF-8 text: four identity lines, then one
//! `SEMESTER:<name>` ... `ENDSEMESTER` block per semester, with one
//! `code,name,credits,grade` line per course. Grade points are never
//! stored; they are re-derived from the letter grade on load.
//!
//! Known limitation: the course name field cannot contain a comma (there
//! is no escaping in this scheme). The writer warns when it sees one.

use crate::core::models::{Course, Grade, Semester};
use crate::core::record::StudentRecord;
use crate::{debug, warn};
use std::error::Error;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Line prefix that opens a semester block; the rest of the line is the
/// semester name verbatim
const SEMESTER_PREFIX: &str = "SEMESTER:";

/// Standalone line that closes a semester block
const SEMESTER_END: &str = "ENDSEMESTER";

/// Write a record to a file in the line-oriented format
///
/// No partial-write guarantee is made; the caller reports failure and the
/// in-memory record is unaffected either way.
///
/// # Errors
/// Returns an error if the destination cannot be opened or written
pub fn save_record<P: AsRef<Path>>(record: &StudentRecord, path: P) -> Result<(), Box<dyn Error>> {
    let mut file = File::create(path)?;

    writeln!(file, "{}", record.student_name)?;
    writeln!(file, "{}", record.register_number)?;
    writeln!(file, "{}", record.program)?;
    writeln!(file, "{}", record.department)?;

    for semester in &record.semesters {
        writeln!(file, "{SEMESTER_PREFIX}{}", semester.name)?;
        for course in &semester.courses {
            if course.name.contains(',') {
                warn!(
                    "Course name '{}' contains a comma; it will not load back intact",
                    course.name
                );
            }
            writeln!(
                file,
                "{},{},{},{}",
                course.code, course.name, course.credit_hours, course.grade
            )?;
        }
        writeln!(file, "{SEMESTER_END}")?;
    }

    Ok(())
}

/// Read a record file and build a fresh [`StudentRecord`] from it
///
/// The parse runs to completion before the result is handed back, so the
/// caller can replace its current record atomically; a read failure leaves
/// the caller's record untouched.
///
/// # Errors
/// Returns an error if the source cannot be opened or read
pub fn load_record<P: AsRef<Path>>(path: P) -> Result<StudentRecord, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_record(&content))
}

/// Parse the line-oriented record format
///
/// Lenient by design: missing identity lines become empty strings,
/// malformed course lines are skipped, and course lines outside a
/// `SEMESTER:`/`ENDSEMESTER` block are ignored.
#[must_use]
pub fn parse_record(content: &str) -> StudentRecord {
    let mut lines = content.lines();

    let student_name = lines.next().unwrap_or_default().to_string();
    let register_number = lines.next().unwrap_or_default().to_string();
    let program = lines.next().unwrap_or_default().to_string();
    let department = lines.next().unwrap_or_default().to_string();

    let mut record = StudentRecord::new(student_name, register_number, program, department);
    let mut current: Option<Semester> = None;

    for line in lines {
        if let Some(name) = line.strip_prefix(SEMESTER_PREFIX) {
            // An unterminated previous block still keeps its courses
            if let Some(semester) = current.take() {
                record.add_semester(semester);
            }
            current = Some(Semester::new(name.to_string()));
        } else if line == SEMESTER_END {
            if let Some(semester) = current.take() {
                record.add_semester(semester);
            }
        } else if let Some(semester) = current.as_mut() {
            if let Some(course) = parse_course_line(line) {
                semester.add_course(course);
            } else {
                debug!("Skipping malformed course line: {line}");
            }
        }
        // Lines outside a semester block are ignored
    }

    if let Some(semester) = current.take() {
        record.add_semester(semester);
    }

    record
}

/// Parse a `code,name,credits,grade` course line
///
/// The grade field is the remainder of the line after the third comma; an
/// unrecognized grade letter coerces to `F`.
///
/// # Returns
/// `None` when the line has fewer than four fields or a non-numeric
/// credit-hours field
#[must_use]
pub fn parse_course_line(line: &str) -> Option<Course> {
    let mut parts = line.splitn(4, ',');
    let code = parts.next()?;
    let name = parts.next()?;
    let credits = parts.next()?;
    let grade = parts.next()?;

    let credit_hours = credits.trim().parse::<u32>().ok()?;

    Some(Course::new(
        name.to_string(),
        code.to_string(),
        credit_hours,
        Grade::parse(grade.trim()),
    ))
}
