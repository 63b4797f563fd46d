use serde::Deserialize;

/// Root of the lesson dataset, in the order the dataset lists its grades.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Curriculum {
    grades: Vec<Grade>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Grade {
    #[serde(rename = "grade")]
    pub number: u32,
    pub terms: Vec<Term>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Term {
    #[serde(rename = "term")]
    pub label: String,
    pub lessons: Vec<Lesson>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Lesson {
    #[serde(rename = "lesson_number")]
    pub number: u32,
    pub title: String,
    pub characters: Vec<CharacterEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CharacterEntry {
    #[serde(rename = "char")]
    pub glyph: String,
    /// Informational tag from the dataset (e.g. read-only vs. writing character).
    #[serde(rename = "type")]
    pub kind: String,
}

impl Curriculum {
    pub fn new(grades: Vec<Grade>) -> Self {
        Self { grades }
    }

    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    pub fn grade(&self, number: u32) -> Option<&Grade> {
        self.grades.iter().find(|g| g.number == number)
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    pub fn lesson_count(&self) -> usize {
        self.grades
            .iter()
            .flat_map(|g| &g.terms)
            .map(|t| t.lessons.len())
            .sum()
    }

    pub fn character_count(&self) -> usize {
        self.grades
            .iter()
            .flat_map(|g| &g.terms)
            .flat_map(|t| &t.lessons)
            .map(|l| l.characters.len())
            .sum()
    }
}

impl Grade {
    pub fn term(&self, label: &str) -> Option<&Term> {
        self.terms.iter().find(|t| t.label == label)
    }
}

impl Lesson {
    /// The lesson's glyphs joined in dataset order, ready for the text field.
    pub fn text(&self) -> String {
        self.characters.iter().map(|c| c.glyph.as_str()).collect()
    }

    pub fn label(&self) -> String {
        format!("{} {}", self.number, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(glyph: &str) -> CharacterEntry {
        CharacterEntry {
            glyph: glyph.to_string(),
            kind: "recognize".to_string(),
        }
    }

    fn sample() -> Curriculum {
        Curriculum::new(vec![
            Grade {
                number: 1,
                terms: vec![
                    Term {
                        label: "上册".to_string(),
                        lessons: vec![Lesson {
                            number: 1,
                            title: "天地人".to_string(),
                            characters: vec![entry("天"), entry("地"), entry("人")],
                        }],
                    },
                    Term {
                        label: "下册".to_string(),
                        lessons: vec![
                            Lesson {
                                number: 1,
                                title: "春夏秋冬".to_string(),
                                characters: vec![entry("春"), entry("冬")],
                            },
                            Lesson {
                                number: 2,
                                title: "姓氏歌".to_string(),
                                characters: vec![],
                            },
                        ],
                    },
                ],
            },
            Grade {
                number: 2,
                terms: vec![],
            },
        ])
    }

    #[test]
    fn lookup_by_grade_number_and_term_label() {
        let curriculum = sample();
        let grade = curriculum.grade(1).unwrap();
        assert_eq!(grade.terms.len(), 2);
        assert_eq!(grade.term("下册").unwrap().lessons.len(), 2);
        assert!(grade.term("中册").is_none());
        assert!(curriculum.grade(3).is_none());
    }

    #[test]
    fn lesson_text_joins_glyphs_in_order() {
        let curriculum = sample();
        let lesson = &curriculum.grade(1).unwrap().terms[0].lessons[0];
        assert_eq!(lesson.text(), "天地人");
        assert_eq!(lesson.label(), "1 天地人");
    }

    #[test]
    fn counts_span_every_grade() {
        let curriculum = sample();
        assert_eq!(curriculum.lesson_count(), 3);
        assert_eq!(curriculum.character_count(), 5);
        assert!(!curriculum.is_empty());
        assert!(Curriculum::default().is_empty());
    }
}
