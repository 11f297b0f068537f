//! Record creation and mutation command handlers

use cgpa_tracker::config::Config;
use cgpa_tracker::models::{Course, Grade, Semester};
use cgpa_tracker::record::StudentRecord;
use cgpa_tracker::store;
use cgpa_tracker::{error, info, warn};
use std::path::{Path, PathBuf};

/// Create a new record file with identity fields and no semesters.
///
/// # Arguments
/// * `name` - Student's full name
/// * `register` - Register number (also the default file stem)
/// * `program` - Program name
/// * `department` - Department name
/// * `output` - Explicit file path; defaults to `<records_dir>/<register>.rec`
/// * `config` - Configuration containing the default records directory
pub fn init(
    name: &str,
    register: &str,
    program: &str,
    department: &str,
    output: Option<PathBuf>,
    config: &Config,
) {
    let record = StudentRecord::new(
        name.to_string(),
        register.to_string(),
        program.to_string(),
        department.to_string(),
    );

    let path = match resolve_output(output, register, config) {
        Ok(path) => path,
        Err(msg) => {
            eprintln!("{msg}");
            return;
        }
    };

    match store::save_record(&record, &path) {
        Ok(()) => {
            info!("Record created for {register}");
            println!("✓ Record created: {}", path.display());
        }
        Err(e) => {
            error!("Failed to save record {}: {e}", path.display());
            eprintln!("✗ Failed to save {}: {e}", path.display());
        }
    }
}

/// Append a semester with its courses to an existing record file.
///
/// The whole record is loaded, extended, and written back; a load or parse
/// failure leaves the file untouched.
pub fn add(file: &Path, semester_name: &str, course_specs: &[String]) {
    if course_specs.is_empty() {
        eprintln!("✗ No courses provided. Semester not added.");
        return;
    }

    let mut record = match store::load_record(file) {
        Ok(record) => record,
        Err(e) => {
            error!("Failed to load record {}: {e}", file.display());
            eprintln!("✗ Failed to load {}: {e}", file.display());
            return;
        }
    };

    let mut semester = Semester::new(semester_name.to_string());
    for spec in course_specs {
        match parse_course_spec(spec) {
            Ok(course) => semester.add_course(course),
            Err(msg) => {
                eprintln!("✗ {msg}");
                return;
            }
        }
    }

    let course_count = semester.courses.len();
    record.add_semester(semester);

    match store::save_record(&record, file) {
        Ok(()) => {
            println!(
                "✓ Added '{semester_name}' with {course_count} courses to {}",
                file.display()
            );
        }
        Err(e) => {
            error!("Failed to save record {}: {e}", file.display());
            eprintln!("✗ Failed to save {}: {e}", file.display());
        }
    }
}

/// Resolve the output path for a new record file
fn resolve_output(
    output: Option<PathBuf>,
    register: &str,
    config: &Config,
) -> Result<PathBuf, String> {
    if let Some(path) = output {
        return Ok(path);
    }

    let records_dir = PathBuf::from(&config.paths.records_dir);
    std::fs::create_dir_all(&records_dir).map_err(|e| {
        format!(
            "✗ Failed to create records directory {}: {e}",
            records_dir.display()
        )
    })?;
    Ok(records_dir.join(format!("{register}.rec")))
}

/// Parse a `CODE,NAME,CREDITS,GRADE` course spec from the command line
///
/// Unlike file loading, a malformed spec here is a reported error; only an
/// unrecognized grade letter is coerced (to `F`, with a warning).
fn parse_course_spec(spec: &str) -> Result<Course, String> {
    let mut parts = spec.splitn(4, ',');
    let (Some(code), Some(name), Some(credits), Some(grade_raw)) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(format!(
            "Invalid course spec '{spec}': expected CODE,NAME,CREDITS,GRADE"
        ));
    };

    let credit_hours = credits
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("Invalid credit hours '{}' in '{spec}'", credits.trim()))?;

    let grade = Grade::try_parse(grade_raw.trim()).unwrap_or_else(|| {
        warn!(
            "Invalid grade '{}'. Using 'F' as default",
            grade_raw.trim()
        );
        Grade::F
    });

    Ok(Course::new(
        name.trim().to_string(),
        code.trim().to_string(),
        credit_hours,
        grade,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_course_spec() {
        let course = parse_course_spec("CSE101,Data Structures,4,O").unwrap();
        assert_eq!(course.code, "CSE101");
        assert_eq!(course.name, "Data Structures");
        assert_eq!(course.credit_hours, 4);
        assert_eq!(course.grade, Grade::O);
    }

    #[test]
    fn test_parse_course_spec_trims_fields() {
        let course = parse_course_spec(" CSE101 , Data Structures , 4 , a+ ").unwrap();
        assert_eq!(course.code, "CSE101");
        assert_eq!(course.grade, Grade::APlus);
    }

    #[test]
    fn test_parse_course_spec_rejects_short_specs() {
        assert!(parse_course_spec("CSE101,Data Structures,4").is_err());
        assert!(parse_course_spec("CSE101").is_err());
    }

    #[test]
    fn test_parse_course_spec_rejects_bad_credits() {
        assert!(parse_course_spec("CSE101,Data Structures,four,O").is_err());
    }

    #[test]
    fn test_parse_course_spec_coerces_bad_grade() {
        let course = parse_course_spec("CSE101,Data Structures,4,Z").unwrap();
        assert_eq!(course.grade, Grade::F);
    }
}
