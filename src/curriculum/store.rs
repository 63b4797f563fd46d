use std::fs;
use std::path::Path;

use rust_embed::Embed;

use crate::curriculum::model::Curriculum;
use crate::error::DataLoadError;

#[derive(Embed)]
#[folder = "assets/data/"]
struct DatasetAssets;

pub const BUNDLED_DATASET: &str = "lessons.json";

/// Decode a lesson dataset. Unknown keys are ignored at every level; anything
/// else that doesn't fit the schema fails the whole load.
pub fn load(raw: &[u8]) -> Result<Curriculum, DataLoadError> {
    let text = std::str::from_utf8(raw)?;
    let curriculum: Curriculum = serde_json::from_str(text)?;
    validate_glyphs(&curriculum)?;
    Ok(curriculum)
}

pub fn load_bundled() -> Result<Curriculum, DataLoadError> {
    let file = DatasetAssets::get(BUNDLED_DATASET)
        .ok_or_else(|| DataLoadError::Missing(BUNDLED_DATASET.to_string()))?;
    load(file.data.as_ref())
}

pub fn load_path(path: &Path) -> Result<Curriculum, DataLoadError> {
    let raw = fs::read(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load(&raw)
}

fn validate_glyphs(curriculum: &Curriculum) -> Result<(), DataLoadError> {
    for grade in curriculum.grades() {
        for lesson in grade.terms.iter().flat_map(|t| &t.lessons) {
            if let Some(bad) = lesson
                .characters
                .iter()
                .find(|c| c.glyph.chars().count() != 1)
            {
                return Err(DataLoadError::Glyph {
                    grade: grade.number,
                    lesson: lesson.number,
                    glyph: bad.glyph.clone(),
                });
            }
        }
    }
    Ok(())
}
