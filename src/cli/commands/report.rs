//! Reporting command handlers: semester results, CGPA, transcript, search,
//! and the grade-system reference table

use cgpa_tracker::error;
use cgpa_tracker::models::{Grade, Semester};
use cgpa_tracker::record::StudentRecord;
use cgpa_tracker::store;
use std::path::Path;

const RULE: &str =
    "----------------------------------------------------------------------------";

/// Show one semester's course table, SGPA, and credit total.
///
/// An unknown semester name is an informational outcome, not an error.
pub fn sgpa(file: &Path, semester_name: &str) {
    let Some(record) = load_or_report(file) else {
        return;
    };

    match record.find_semester(semester_name) {
        Some(semester) => {
            println!("\n=== {semester_name} Results ===");
            print_semester_table(semester);
        }
        None => println!("✗ Semester '{semester_name}' not found"),
    }
}

/// Show the overall CGPA and its classification band.
pub fn cgpa(file: &Path) {
    let Some(record) = load_or_report(file) else {
        return;
    };

    let value = record.cgpa();
    println!("\nCumulative GPA (CGPA): {value:.2}");
    println!("Classification: {}", classification(value));
}

/// Show the full academic transcript: identity header, every semester's
/// course table with SGPA and credits, and the overall CGPA.
pub fn transcript(file: &Path) {
    let Some(record) = load_or_report(file) else {
        return;
    };

    println!("\n=== ACADEMIC TRANSCRIPT ===");
    println!("Student Name: {}", record.student_name);
    println!("Register Number: {}", record.register_number);
    println!("Program: {}", record.program);
    println!("Department: {}", record.department);

    // Index iteration shows duplicate-named semesters too
    for semester in &record.semesters {
        println!("\nSemester: {}", semester.name);
        print_semester_table(semester);
    }

    println!("\nCumulative GPA (CGPA): {:.2}", record.cgpa());
}

/// Search for a course by exact code across all semesters.
pub fn search(file: &Path, code: &str) {
    let Some(record) = load_or_report(file) else {
        return;
    };

    let hits = record.search_course(code);
    if hits.is_empty() {
        println!("✗ Course with code {code} not found");
        return;
    }

    println!("\nCourse Found:");
    println!("{RULE}");
    println!(
        "{:>12}{:>30}{:>8}{:>8}{:>13}{:>15}",
        "Course Code", "Course Name", "Credits", "Grade", "Grade Points", "Semester"
    );
    println!("{RULE}");
    for hit in hits {
        println!(
            "{:>12}{:>30}{:>8}{:>8}{:>13.2}{:>15}",
            hit.course.code,
            hit.course.name,
            hit.course.credit_hours,
            hit.course.grade.as_str(),
            hit.course.grade_points(),
            hit.semester
        );
    }
    println!("{RULE}");
}

/// Show the grade-system reference table.
pub fn grades() {
    println!("\n=== GRADE SYSTEM (10-point scale) ===");
    for grade in Grade::ALL {
        println!(
            "{:<3}- {} ({} points)",
            grade.as_str(),
            grade.description(),
            grade.points()
        );
    }
}

/// Load a record file, reporting failure to the user on error
fn load_or_report(file: &Path) -> Option<StudentRecord> {
    match store::load_record(file) {
        Ok(record) => Some(record),
        Err(e) => {
            error!("Failed to load record {}: {e}", file.display());
            eprintln!("✗ Failed to load {}: {e}", file.display());
            None
        }
    }
}

/// Print the fixed-width course table for one semester with its footer
fn print_semester_table(semester: &Semester) {
    println!("{RULE}");
    println!(
        "{:>12}{:>30}{:>8}{:>8}{:>13}",
        "Course Code", "Course Name", "Credits", "Grade", "Grade Points"
    );
    println!("{RULE}");
    for course in &semester.courses {
        println!(
            "{:>12}{:>30}{:>8}{:>8}{:>13.2}",
            course.code,
            course.name,
            course.credit_hours,
            course.grade.as_str(),
            course.grade_points()
        );
    }
    println!("{RULE}");
    println!("Semester SGPA: {:.2}", semester.sgpa());
    println!("Total Credits: {}", semester.total_credits());
}

/// Classification band for a CGPA value
fn classification(cgpa: f64) -> &'static str {
    if cgpa >= 9.0 {
        "First Class with Distinction"
    } else if cgpa >= 8.0 {
        "First Class"
    } else if cgpa >= 7.0 {
        "Second Class"
    } else if cgpa >= 6.0 {
        "Third Class"
    } else {
        "Need Improvement"
    }
}
