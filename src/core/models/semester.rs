//! Semester model

use super::Course;
use serde::{Deserialize, Serialize};

/// A named semester owning an ordered list of courses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Semester {
    /// Semester name (e.g., "Semester I"), used as the lookup key
    pub name: String,

    /// Courses in insertion order
    pub courses: Vec<Course>,
}

impl Semester {
    /// Create a new, empty semester
    ///
    /// # Arguments
    /// * `name` - Semester name
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            courses: Vec::new(),
        }
    }

    /// Append a course to the semester
    ///
    /// Duplicate course codes are allowed; no validation is performed.
    pub fn add_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Semester Grade Point Average: credit-weighted mean of grade points
    ///
    /// # Returns
    /// `0.0` for an empty course list (not an error)
    #[must_use]
    pub fn sgpa(&self) -> f64 {
        if self.courses.is_empty() {
            return 0.0;
        }

        let mut total_grade_points = 0.0;
        let mut total_credit_hours: u32 = 0;

        for course in &self.courses {
            total_grade_points += course.grade_points() * f64::from(course.credit_hours);
            total_credit_hours += course.credit_hours;
        }

        total_grade_points / f64::from(total_credit_hours)
    }

    /// Sum of credit hours across all courses; `0` when empty
    #[must_use]
    pub fn total_credits(&self) -> u32 {
        self.courses.iter().map(|c| c.credit_hours).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Grade;

    fn course(code: &str, name: &str, credits: u32, grade: Grade) -> Course {
        Course::new(name.to_string(), code.to_string(), credits, grade)
    }

    #[test]
    fn test_empty_semester() {
        let semester = Semester::new("Semester I".to_string());
        assert!(semester.sgpa().abs() < f64::EPSILON);
        assert_eq!(semester.total_credits(), 0);
    }

    #[test]
    fn test_sgpa_weighted_average() {
        // (10*4 + 7*3) / 7 = 61/7
        let mut semester = Semester::new("Semester I".to_string());
        semester.add_course(course("CSE101", "Data Structures", 4, Grade::O));
        semester.add_course(course("MAT201", "Calculus", 3, Grade::BPlus));

        assert!((semester.sgpa() - 61.0 / 7.0).abs() < 1e-9);
        assert_eq!(semester.total_credits(), 7);
    }

    #[test]
    fn test_failing_grade_drags_average() {
        let mut semester = Semester::new("Semester II".to_string());
        semester.add_course(course("PHY101", "Physics", 4, Grade::F));
        semester.add_course(course("CHM101", "Chemistry", 4, Grade::O));

        assert!((semester.sgpa() - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_duplicate_codes_allowed() {
        let mut semester = Semester::new("Semester I".to_string());
        semester.add_course(course("CSE101", "Data Structures", 4, Grade::A));
        semester.add_course(course("CSE101", "Data Structures Lab", 2, Grade::A));

        assert_eq!(semester.courses.len(), 2);
        assert_eq!(semester.total_credits(), 6);
    }

    #[test]
    fn test_courses_keep_insertion_order() {
        let mut semester = Semester::new("Semester I".to_string());
        for code in ["CSE101", "MAT201", "PHY101"] {
            semester.add_course(course(code, "Course", 3, Grade::B));
        }

        let codes: Vec<&str> = semester.courses.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, ["CSE101", "MAT201", "PHY101"]);
    }
}
