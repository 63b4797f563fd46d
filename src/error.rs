use std::path::PathBuf;

use thiserror::Error;

use crate::session::quiz::QuizPhase;

/// Failure to turn the lesson dataset into a [`Curriculum`](crate::curriculum::Curriculum).
///
/// Always fatal at startup: there is no partially loaded curriculum.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("bundled lesson dataset `{0}` is missing")]
    Missing(String),
    #[error("failed to read lesson dataset {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("lesson dataset is not valid UTF-8")]
    Encoding(#[from] std::str::Utf8Error),
    #[error("lesson dataset does not match the expected schema")]
    Schema(#[from] serde_json::Error),
    #[error("grade {grade} lesson {lesson}: `{glyph}` is not a single character")]
    Glyph {
        grade: u32,
        lesson: u32,
        glyph: String,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("no character is on display while the quiz is {phase}")]
    InvalidState { phase: QuizPhase },
}
