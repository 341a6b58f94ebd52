use std::fs;
use std::io;
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::models::CourseContent;

const BUILTIN_COURSE: &str = include_str!("../../content/course.json");

/// Errors producing a usable [`CourseContent`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid course content: {0}")]
    Invalid(String),
}

/// The course document compiled into the binary.
pub fn load_builtin() -> Result<CourseContent, LoadError> {
    let content: CourseContent =
        serde_json::from_str(BUILTIN_COURSE).map_err(|source| LoadError::Parse {
            path: "built-in course".to_string(),
            source,
        })?;
    validate(&content)?;
    Ok(content)
}

/// Load a course document from a JSON file.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<CourseContent, LoadError> {
    let path = path.as_ref();

    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let content: CourseContent =
        serde_json::from_str(&json).map_err(|source| LoadError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    validate(&content)?;

    debug!(
        "loaded course \"{}\" with {} questions",
        content.title,
        content.questions.len()
    );
    Ok(content)
}

fn validate(content: &CourseContent) -> Result<(), LoadError> {
    if content.questions.is_empty() {
        return Err(LoadError::Invalid(
            "the course must contain at least one question".to_string(),
        ));
    }

    for (index, question) in content.questions.iter().enumerate() {
        if question.options.len() < 2 {
            return Err(LoadError::Invalid(format!(
                "question {} needs at least two options",
                index + 1
            )));
        }
        if question.correct_index >= question.options.len() {
            return Err(LoadError::Invalid(format!(
                "question {} marks option {} as correct but has only {} options",
                index + 1,
                question.correct_index,
                question.options.len()
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_course_is_valid() {
        let content = load_builtin().unwrap();
        assert!(!content.questions.is_empty());
        assert!(!content.materials.is_empty());
        assert!(!content.about.is_empty());
    }

    #[test]
    fn rejects_out_of_range_correct_index() {
        let mut content = load_builtin().unwrap();
        content.questions[0].correct_index = content.questions[0].options.len();
        assert!(matches!(validate(&content), Err(LoadError::Invalid(_))));
    }

    #[test]
    fn rejects_single_option_questions() {
        let mut content = load_builtin().unwrap();
        content.questions[0].options.truncate(1);
        assert!(matches!(validate(&content), Err(LoadError::Invalid(_))));
    }

    #[test]
    fn rejects_an_empty_question_list() {
        let mut content = load_builtin().unwrap();
        content.questions.clear();
        assert!(matches!(validate(&content), Err(LoadError::Invalid(_))));
    }

    #[test]
    fn missing_file_reports_an_io_error() {
        assert!(matches!(
            load_from_path("does-not-exist.json"),
            Err(LoadError::Io { .. })
        ));
    }
}
