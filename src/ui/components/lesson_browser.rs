use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use rust_i18n::t;

use crate::curriculum::{Curriculum, Grade, Lesson, Term};
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BrowserColumn {
    Grades,
    Terms,
    Lessons,
}

/// Grade → term → lesson drill-down. Picking a grade clears the term choice,
/// the same way the lesson column disappears until a term is picked.
#[derive(Clone, Debug)]
pub struct LessonBrowser {
    pub column: BrowserColumn,
    pub grade_cursor: usize,
    pub term_cursor: usize,
    pub lesson_cursor: usize,
    pub selected_grade: Option<usize>,
    pub selected_term: Option<usize>,
}

impl Default for LessonBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl LessonBrowser {
    pub fn new() -> Self {
        Self {
            column: BrowserColumn::Grades,
            grade_cursor: 0,
            term_cursor: 0,
            lesson_cursor: 0,
            selected_grade: None,
            selected_term: None,
        }
    }

    pub fn grade<'c>(&self, curriculum: &'c Curriculum) -> Option<&'c Grade> {
        self.selected_grade
            .and_then(|i| curriculum.grades().get(i))
    }

    pub fn term<'c>(&self, curriculum: &'c Curriculum) -> Option<&'c Term> {
        let grade = self.grade(curriculum)?;
        self.selected_term.and_then(|i| grade.terms.get(i))
    }

    fn column_len(&self, curriculum: &Curriculum) -> usize {
        match self.column {
            BrowserColumn::Grades => curriculum.grades().len(),
            BrowserColumn::Terms => self.grade(curriculum).map_or(0, |g| g.terms.len()),
            BrowserColumn::Lessons => self.term(curriculum).map_or(0, |t| t.lessons.len()),
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.column {
            BrowserColumn::Grades => &mut self.grade_cursor,
            BrowserColumn::Terms => &mut self.term_cursor,
            BrowserColumn::Lessons => &mut self.lesson_cursor,
        }
    }

    pub fn next(&mut self, curriculum: &Curriculum) {
        let len = self.column_len(curriculum);
        if len == 0 {
            return;
        }
        let cursor = self.cursor_mut();
        *cursor = (*cursor + 1) % len;
    }

    pub fn prev(&mut self, curriculum: &Curriculum) {
        let len = self.column_len(curriculum);
        if len == 0 {
            return;
        }
        let cursor = self.cursor_mut();
        *cursor = if *cursor == 0 { len - 1 } else { *cursor - 1 };
    }

    /// Confirm the highlighted row. Grades and terms open the next column;
    /// a lesson is handed back to the caller.
    pub fn select<'c>(&mut self, curriculum: &'c Curriculum) -> Option<&'c Lesson> {
        match self.column {
            BrowserColumn::Grades => {
                let grade = curriculum.grades().get(self.grade_cursor)?;
                self.selected_grade = Some(self.grade_cursor);
                self.selected_term = None;
                self.term_cursor = 0;
                if !grade.terms.is_empty() {
                    self.column = BrowserColumn::Terms;
                }
                None
            }
            BrowserColumn::Terms => {
                let term = self.grade(curriculum)?.terms.get(self.term_cursor)?;
                self.selected_term = Some(self.term_cursor);
                self.lesson_cursor = 0;
                if !term.lessons.is_empty() {
                    self.column = BrowserColumn::Lessons;
                }
                None
            }
            BrowserColumn::Lessons => self.term(curriculum)?.lessons.get(self.lesson_cursor),
        }
    }

    pub fn back(&mut self) {
        self.column = match self.column {
            BrowserColumn::Grades | BrowserColumn::Terms => BrowserColumn::Grades,
            BrowserColumn::Lessons => BrowserColumn::Terms,
        };
    }
}

struct Column {
    title: String,
    items: Vec<String>,
    cursor: usize,
    selected: Option<usize>,
    active: bool,
}

pub struct LessonBrowserView<'a> {
    browser: &'a LessonBrowser,
    curriculum: &'a Curriculum,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> LessonBrowserView<'a> {
    pub fn new(
        browser: &'a LessonBrowser,
        curriculum: &'a Curriculum,
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            browser,
            curriculum,
            focused,
            theme,
        }
    }

    fn render_column(&self, column: Column, area: Rect, buf: &mut Buffer) {
        let Column {
            title,
            items,
            cursor,
            selected,
            active,
        } = column;
        let colors = &self.theme.colors;
        let border = if active && self.focused {
            colors.border_focused()
        } else {
            colors.border()
        };
        let block = Block::bordered()
            .title(format!(" {title} "))
            .border_style(Style::default().fg(border));
        let inner = block.inner(area);
        block.render(area, buf);

        let visible = inner.height as usize;
        if visible == 0 {
            return;
        }
        let first = if active && cursor >= visible {
            cursor + 1 - visible
        } else {
            0
        };

        let lines: Vec<Line> = items
            .iter()
            .enumerate()
            .skip(first)
            .take(visible)
            .map(|(i, item)| {
                let highlighted = active && i == cursor;
                let mut style = Style::default().fg(colors.fg());
                if selected == Some(i) {
                    style = style.bg(colors.selection_bg());
                }
                if highlighted {
                    style = style.fg(colors.accent()).add_modifier(Modifier::BOLD);
                }
                let indicator = if highlighted { ">" } else { " " };
                Line::from(Span::styled(format!("{indicator} {item}"), style))
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

impl Widget for LessonBrowserView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(3)])
            .split(area);

        Paragraph::new(Line::from(Span::styled(
            format!(" {}", t!("main.choose_lesson")),
            Style::default().fg(colors.muted()),
        )))
        .render(outer[0], buf);

        if self.curriculum.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                format!("  {}", t!("main.empty_curriculum")),
                Style::default().fg(colors.muted()),
            )))
            .block(Block::bordered().border_style(Style::default().fg(colors.border())))
            .render(outer[1], buf);
            return;
        }

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(25),
                Constraint::Percentage(50),
            ])
            .split(outer[1]);

        let browser = self.browser;
        let grades: Vec<String> = self
            .curriculum
            .grades()
            .iter()
            .map(|g| {
                let number = g.number.to_string();
                t!("main.grade_label", grade = number.as_str()).to_string()
            })
            .collect();
        self.render_column(
            Column {
                title: t!("main.grades").to_string(),
                items: grades,
                cursor: browser.grade_cursor,
                selected: browser.selected_grade,
                active: browser.column == BrowserColumn::Grades,
            },
            columns[0],
            buf,
        );

        let terms: Vec<String> = browser
            .grade(self.curriculum)
            .map(|g| g.terms.iter().map(|t| t.label.clone()).collect())
            .unwrap_or_default();
        self.render_column(
            Column {
                title: t!("main.terms").to_string(),
                items: terms,
                cursor: browser.term_cursor,
                selected: browser.selected_term,
                active: browser.column == BrowserColumn::Terms,
            },
            columns[1],
            buf,
        );

        let lessons: Vec<String> = browser
            .term(self.curriculum)
            .map(|t| t.lessons.iter().map(Lesson::label).collect())
            .unwrap_or_default();
        self.render_column(
            Column {
                title: t!("main.lessons").to_string(),
                items: lessons,
                cursor: browser.lesson_cursor,
                selected: None,
                active: browser.column == BrowserColumn::Lessons,
            },
            columns[2],
            buf,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curriculum::store;

    fn curriculum() -> Curriculum {
        store::load(
            r#"[
            {"grade": 1, "terms": [
                {"term": "上册", "lessons": [
                    {"lesson_number": 1, "title": "天地人", "characters": [
                        {"char": "天", "type": "r"}, {"char": "地", "type": "r"}]},
                    {"lesson_number": 2, "title": "金木水火土", "characters": [
                        {"char": "金", "type": "r"}]}
                ]},
                {"term": "下册", "lessons": []}
            ]},
            {"grade": 2, "terms": []}
        ]"#
            .as_bytes(),
        )
        .unwrap()
    }

    #[test]
    fn drill_down_to_a_lesson() {
        let c = curriculum();
        let mut browser = LessonBrowser::new();
        assert!(browser.select(&c).is_none());
        assert_eq!(browser.column, BrowserColumn::Terms);
        assert!(browser.select(&c).is_none());
        assert_eq!(browser.column, BrowserColumn::Lessons);

        browser.next(&c);
        let lesson = browser.select(&c).unwrap();
        assert_eq!(lesson.title, "金木水火土");
    }

    #[test]
    fn cursor_wraps_within_column() {
        let c = curriculum();
        let mut browser = LessonBrowser::new();
        browser.prev(&c);
        assert_eq!(browser.grade_cursor, 1);
        browser.next(&c);
        assert_eq!(browser.grade_cursor, 0);
    }

    #[test]
    fn picking_another_grade_clears_term() {
        let c = curriculum();
        let mut browser = LessonBrowser::new();
        browser.select(&c);
        browser.select(&c);
        assert!(browser.term(&c).is_some());

        browser.back();
        browser.back();
        browser.next(&c);
        browser.select(&c);
        assert_eq!(browser.selected_grade, Some(1));
        assert!(browser.selected_term.is_none());
        // Grade 2 has no terms, so focus stays on grades
        assert_eq!(browser.column, BrowserColumn::Grades);
    }

    #[test]
    fn empty_term_keeps_focus_on_terms() {
        let c = curriculum();
        let mut browser = LessonBrowser::new();
        browser.select(&c);
        browser.next(&c);
        assert!(browser.select(&c).is_none());
        assert_eq!(browser.column, BrowserColumn::Terms);
        assert_eq!(browser.term(&c).unwrap().label, "下册");
    }

    #[test]
    fn empty_curriculum_is_inert() {
        let c = Curriculum::default();
        let mut browser = LessonBrowser::new();
        browser.next(&c);
        browser.prev(&c);
        assert!(browser.select(&c).is_none());
        assert_eq!(browser.grade_cursor, 0);
    }
}
