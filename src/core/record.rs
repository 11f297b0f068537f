//! Student academic record aggregate

use crate::core::models::{Course, Semester};
use serde::{Deserialize, Serialize};

/// A course found by [`StudentRecord::search_course`], paired with the name
/// of the semester that contains it
#[derive(Debug, Clone, PartialEq)]
pub struct CourseHit<'a> {
    /// The matched course
    pub course: &'a Course,
    /// Name of the containing semester
    pub semester: &'a str,
}

/// A student's full academic record across semesters
///
/// Identity fields are set at construction; semesters are only ever
/// appended. Queries return structured data or an explicit empty/not-found
/// outcome, never an error for "nothing matched".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Student's full name
    pub student_name: String,

    /// University register number
    pub register_number: String,

    /// Program (e.g., "B.Tech CSE")
    pub program: String,

    /// Department
    pub department: String,

    /// Semesters in insertion order; names are not enforced unique
    pub semesters: Vec<Semester>,
}

impl StudentRecord {
    /// Create a new record with identity fields and no semesters
    #[must_use]
    pub const fn new(
        student_name: String,
        register_number: String,
        program: String,
        department: String,
    ) -> Self {
        Self {
            student_name,
            register_number,
            program,
            department,
            semesters: Vec::new(),
        }
    }

    /// Append a semester to the record
    ///
    /// Names are not required to be unique; a duplicate-named semester is
    /// reachable by index iteration but shadowed for name lookup.
    pub fn add_semester(&mut self, semester: Semester) {
        self.semesters.push(semester);
    }

    /// Find a semester by exact (case-sensitive) name
    ///
    /// # Returns
    /// The first match in insertion order, or `None` if absent
    #[must_use]
    pub fn find_semester(&self, name: &str) -> Option<&Semester> {
        self.semesters.iter().find(|s| s.name == name)
    }

    /// Cumulative Grade Point Average: credit-weighted mean of grade points
    /// over every course of every semester
    ///
    /// # Returns
    /// `0.0` when the record holds no courses at all
    #[must_use]
    pub fn cgpa(&self) -> f64 {
        let mut total_grade_points = 0.0;
        let mut total_credit_hours: u32 = 0;

        for semester in &self.semesters {
            for course in &semester.courses {
                total_grade_points += course.grade_points() * f64::from(course.credit_hours);
                total_credit_hours += course.credit_hours;
            }
        }

        if total_credit_hours == 0 {
            return 0.0;
        }
        total_grade_points / f64::from(total_credit_hours)
    }

    /// Find every course with an exactly matching code across all semesters
    ///
    /// # Returns
    /// Matches in semester-then-course insertion order; empty when none
    #[must_use]
    pub fn search_course(&self, code: &str) -> Vec<CourseHit<'_>> {
        let mut hits = Vec::new();
        for semester in &self.semesters {
            for course in &semester.courses {
                if course.code == code {
                    hits.push(CourseHit {
                        course,
                        semester: &semester.name,
                    });
                }
            }
        }
        hits
    }

    /// All semester names in insertion order
    #[must_use]
    pub fn semester_names(&self) -> Vec<String> {
        self.semesters.iter().map(|s| s.name.clone()).collect()
    }

    /// Replace this record wholesale with a freshly built one
    ///
    /// File loading parses a complete new record first and only then calls
    /// this, so a failed load can never leave the record half-populated.
    pub fn replace_with(&mut self, other: Self) {
        *self = other;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Grade;

    fn course(code: &str, credits: u32, grade: Grade) -> Course {
        Course::new(format!("{code} name"), code.to_string(), credits, grade)
    }

    fn sample_record() -> StudentRecord {
        let mut record = StudentRecord::new(
            "Priya Raman".to_string(),
            "RA2111003010042".to_string(),
            "B.Tech CSE".to_string(),
            "Computing".to_string(),
        );

        let mut first = Semester::new("Semester I".to_string());
        first.add_course(course("CSE101", 4, Grade::O));
        first.add_course(course("MAT201", 3, Grade::BPlus));
        record.add_semester(first);

        let mut second = Semester::new("Semester II".to_string());
        second.add_course(course("CSE102", 4, Grade::A));
        second.add_course(course("CSE101", 2, Grade::P));
        record.add_semester(second);

        record
    }

    #[test]
    fn test_empty_record_cgpa_is_zero() {
        let record = StudentRecord::new(
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        );
        assert!(record.cgpa().abs() < f64::EPSILON);
    }

    #[test]
    fn test_cgpa_spans_all_semesters() {
        let record = sample_record();
        // (10*4 + 7*3 + 8*4 + 4*2) / 13 = 101/13
        assert!((record.cgpa() - 101.0 / 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_find_semester_exact_match() {
        let record = sample_record();
        assert!(record.find_semester("Semester I").is_some());
        assert!(record.find_semester("semester i").is_none());
        assert!(record.find_semester("Semester III").is_none());
    }

    #[test]
    fn test_find_semester_returns_first_duplicate() {
        let mut record = sample_record();
        let mut duplicate = Semester::new("Semester I".to_string());
        duplicate.add_course(course("ELE101", 3, Grade::C));
        record.add_semester(duplicate);

        let found = record.find_semester("Semester I").unwrap();
        assert_eq!(found.courses[0].code, "CSE101");
        // Both remain reachable by index
        assert_eq!(record.semesters.len(), 3);
        assert_eq!(record.semesters[2].courses[0].code, "ELE101");
    }

    #[test]
    fn test_search_course_across_semesters() {
        let record = sample_record();
        let hits = record.search_course("CSE101");

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].semester, "Semester I");
        assert_eq!(hits[0].course.credit_hours, 4);
        assert_eq!(hits[1].semester, "Semester II");
        assert_eq!(hits[1].course.credit_hours, 2);
    }

    #[test]
    fn test_search_course_no_match_is_empty() {
        let record = sample_record();
        assert!(record.search_course("BIO101").is_empty());
    }

    #[test]
    fn test_semester_names_preserve_order() {
        let record = sample_record();
        assert_eq!(record.semester_names(), ["Semester I", "Semester II"]);
    }

    #[test]
    fn test_replace_with_swaps_everything() {
        let mut record = sample_record();
        let fresh = StudentRecord::new(
            "Arun K".to_string(),
            "RA200".to_string(),
            "MCA".to_string(),
            "Computing".to_string(),
        );

        record.replace_with(fresh);
        assert_eq!(record.student_name, "Arun K");
        assert!(record.semesters.is_empty());
    }
}
