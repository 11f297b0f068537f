//! Course and letter-grade models

use serde::{Deserialize, Serialize};

/// Letter grade on the 10-point university scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    /// Outstanding (10 points)
    O,
    /// Excellent (9 points)
    APlus,
    /// Very Good (8 points)
    A,
    /// Good (7 points)
    BPlus,
    /// Above Average (6 points)
    B,
    /// Average (5 points)
    C,
    /// Pass (4 points)
    P,
    /// Fail (0 points)
    F,
}

impl Grade {
    /// All grades in descending point order, for the grade-system table
    pub const ALL: [Self; 8] = [
        Self::O,
        Self::APlus,
        Self::A,
        Self::BPlus,
        Self::B,
        Self::C,
        Self::P,
        Self::F,
    ];

    /// Parse a letter grade, case-insensitively
    ///
    /// # Returns
    /// The matching grade, or `None` if the token is not one of the eight
    /// recognized letters
    #[must_use]
    pub fn try_parse(raw: &str) -> Option<Self> {
        match raw.to_ascii_uppercase().as_str() {
            "O" => Some(Self::O),
            "A+" => Some(Self::APlus),
            "A" => Some(Self::A),
            "B+" => Some(Self::BPlus),
            "B" => Some(Self::B),
            "C" => Some(Self::C),
            "P" => Some(Self::P),
            "F" => Some(Self::F),
            _ => None,
        }
    }

    /// Parse a letter grade, coercing anything unrecognized to `F`
    ///
    /// Invalid grades are never an error; they count as 0 points. Callers
    /// that want to report the coercion should use [`Self::try_parse`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self::try_parse(raw).unwrap_or(Self::F)
    }

    /// Grade point value of this grade
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::O => 10.0,
            Self::APlus => 9.0,
            Self::A => 8.0,
            Self::BPlus => 7.0,
            Self::B => 6.0,
            Self::C => 5.0,
            Self::P => 4.0,
            Self::F => 0.0,
        }
    }

    /// Canonical uppercase letter, as written to record files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::O => "O",
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::C => "C",
            Self::P => "P",
            Self::F => "F",
        }
    }

    /// Human-readable label for the grade-system table
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::O => "Outstanding",
            Self::APlus => "Excellent",
            Self::A => "Very Good",
            Self::BPlus => "Good",
            Self::B => "Above Average",
            Self::C => "Average",
            Self::P => "Pass",
            Self::F => "Fail",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single graded course within a semester
///
/// Constructed once with its final grade; the grade point is always derived
/// from the letter grade, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course name (e.g., "Data Structures")
    pub name: String,

    /// Course code (e.g., "CSE101"); identifies a course within a semester
    /// but is not globally unique
    pub code: String,

    /// Credit hours (positive integer weight used in averaging)
    pub credit_hours: u32,

    /// Final letter grade
    pub grade: Grade,
}

impl Course {
    /// Create a new course with its final grade
    ///
    /// # Arguments
    /// * `name` - Full course name
    /// * `code` - Course code
    /// * `credit_hours` - Credit hours
    /// * `grade` - Final letter grade
    #[must_use]
    pub const fn new(name: String, code: String, credit_hours: u32, grade: Grade) -> Self {
        Self {
            name,
            code,
            credit_hours,
            grade,
        }
    }

    /// Grade points earned, derived from the letter grade
    #[must_use]
    pub const fn grade_points(&self) -> f64 {
        self.grade.points()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_point_table() {
        assert!((Grade::O.points() - 10.0).abs() < f64::EPSILON);
        assert!((Grade::APlus.points() - 9.0).abs() < f64::EPSILON);
        assert!((Grade::A.points() - 8.0).abs() < f64::EPSILON);
        assert!((Grade::BPlus.points() - 7.0).abs() < f64::EPSILON);
        assert!((Grade::B.points() - 6.0).abs() < f64::EPSILON);
        assert!((Grade::C.points() - 5.0).abs() < f64::EPSILON);
        assert!((Grade::P.points() - 4.0).abs() < f64::EPSILON);
        assert!(Grade::F.points().abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Grade::parse("o"), Grade::O);
        assert_eq!(Grade::parse("a+"), Grade::APlus);
        assert_eq!(Grade::parse("b+"), Grade::BPlus);
        assert_eq!(Grade::parse("p"), Grade::P);
    }

    #[test]
    fn test_parse_coerces_unrecognized_to_fail() {
        assert_eq!(Grade::parse("X"), Grade::F);
        assert_eq!(Grade::parse("A-"), Grade::F);
        assert_eq!(Grade::parse(""), Grade::F);
        assert!(Grade::parse("absent").points().abs() < f64::EPSILON);
    }

    #[test]
    fn test_try_parse_rejects_unrecognized() {
        assert_eq!(Grade::try_parse("A+"), Some(Grade::APlus));
        assert_eq!(Grade::try_parse("f"), Some(Grade::F));
        assert!(Grade::try_parse("Z").is_none());
    }

    #[test]
    fn test_as_str_round_trips() {
        for grade in Grade::ALL {
            assert_eq!(Grade::parse(grade.as_str()), grade);
        }
    }

    #[test]
    fn test_course_creation() {
        let course = Course::new(
            "Data Structures".to_string(),
            "CSE101".to_string(),
            4,
            Grade::O,
        );

        assert_eq!(course.name, "Data Structures");
        assert_eq!(course.code, "CSE101");
        assert_eq!(course.credit_hours, 4);
        assert!((course.grade_points() - 10.0).abs() < f64::EPSILON);
    }
}
