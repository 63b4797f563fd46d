use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use rust_i18n::t;

use crate::app::{App, AppScreen, MainFocus};
use crate::ui::components::completion::CompletionPanel;
use crate::ui::components::confirm_dialog::ConfirmDialog;
use crate::ui::components::flashcard::Flashcard;
use crate::ui::components::lesson_browser::LessonBrowserView;
use crate::ui::components::load_error::LoadErrorPanel;
use crate::ui::components::progress_bar::ProgressBar;
use crate::ui::components::text_field::TextField;
use crate::ui::layout::{self, ScreenLayout};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()).fg(colors.fg()));
    frame.render_widget(bg, area);

    match app.screen() {
        AppScreen::Main => render_main(frame, app),
        AppScreen::Quiz => render_quiz(frame, app, false),
        AppScreen::ConfirmStop => {
            render_quiz(frame, app, true);
            render_stop_dialog(frame, app);
        }
        AppScreen::Complete => render_complete(frame, app),
        AppScreen::LoadFailed => render_load_failed(frame, app),
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect, info: String) {
    let colors = &app.theme.colors;
    let header = Paragraph::new(vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!(" {} ", t!("app.title")),
                Style::default()
                    .fg(colors.header_fg())
                    .bg(colors.header_bg())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                info,
                Style::default().fg(colors.muted()).bg(colors.header_bg()),
            ),
        ]),
    ])
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect, hints: &[&str]) {
    let lines = layout::pack_hint_lines(hints, area.width as usize);
    let text = lines.into_iter().next().unwrap_or_default();
    let footer = Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(app.theme.colors.muted()),
    )));
    frame.render_widget(footer, area);
}

fn render_main(frame: &mut Frame, app: &App) {
    let screen = ScreenLayout::new(frame.area());
    let Some(curriculum) = app.curriculum() else {
        return;
    };

    let lessons = curriculum.lesson_count().to_string();
    let characters = curriculum.character_count().to_string();
    let info = format!(
        "| {}",
        t!(
            "main.summary",
            lessons = lessons.as_str(),
            characters = characters.as_str()
        )
    );
    render_header(frame, app, screen.header, info);

    let (browser_area, editor_area) = layout::main_screen_split(screen.body);
    frame.render_widget(
        LessonBrowserView::new(
            &app.browser,
            curriculum,
            app.focus == MainFocus::Browser,
            &app.theme,
        ),
        browser_area,
    );

    let count = app.quizzable_count();
    let status = if count > 0 {
        let count = count.to_string();
        (t!("main.count", count = count.as_str()).to_string(), true)
    } else {
        (t!("main.no_characters").to_string(), false)
    };
    frame.render_widget(
        TextField::new(
            &app.input,
            t!("main.editor_title").to_string(),
            app.focus == MainFocus::Editor,
            &app.theme,
        )
        .status(status.0, status.1),
        editor_area,
    );

    let switch = t!("main.hints.switch").to_string();
    let quit = t!("main.hints.quit").to_string();
    let hints: Vec<String> = match app.focus {
        MainFocus::Browser => vec![
            t!("main.hints.move").to_string(),
            t!("main.hints.select").to_string(),
            t!("main.hints.back").to_string(),
            switch,
            quit,
        ],
        MainFocus::Editor => {
            let mut hints = Vec::new();
            if app.can_start() {
                hints.push(t!("main.hints.start").to_string());
            }
            hints.push(t!("main.hints.clear").to_string());
            hints.push(switch);
            hints.push(t!("main.hints.quit_editor").to_string());
            hints
        }
    };
    let hint_refs: Vec<&str> = hints.iter().map(String::as_str).collect();
    render_footer(frame, app, screen.footer, &hint_refs);
}

fn render_quiz(frame: &mut Frame, app: &App, dimmed: bool) {
    let screen = ScreenLayout::new(frame.area());
    let view = app.current_view();
    let (Some(character), Some(index), Some(total)) = (view.character, view.index, view.total)
    else {
        return;
    };

    let current = index.to_string();
    let total_text = total.to_string();
    let info = format!(
        "| {}",
        t!(
            "quiz.progress",
            current = current.as_str(),
            total = total_text.as_str()
        )
    );
    render_header(frame, app, screen.header, info);

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(screen.body);

    frame.render_widget(
        Flashcard::new(character, &app.theme).dimmed(dimmed),
        body[0],
    );
    if let Some(progress) = app.quiz().progress() {
        frame.render_widget(ProgressBar::new(progress, &app.theme), body[1]);
    }

    let next = t!("quiz.hints.next").to_string();
    let stop = t!("quiz.hints.stop").to_string();
    render_footer(frame, app, screen.footer, &[next.as_str(), stop.as_str()]);
}

fn render_stop_dialog(frame: &mut Frame, app: &App) {
    let dialog = ConfirmDialog::new(
        t!("dialog.title").to_string(),
        t!("dialog.confirm_stop").to_string(),
        &app.theme,
    )
    .actions(
        t!("dialog.confirm").to_string(),
        t!("dialog.cancel").to_string(),
    );
    frame.render_widget(dialog, frame.area());
}

fn render_complete(frame: &mut Frame, app: &App) {
    let screen = ScreenLayout::new(frame.area());
    let view = app.current_view();
    render_header(frame, app, screen.header, String::new());

    let panel_area = layout::centered_rect(60, 50, screen.body);
    frame.render_widget(
        CompletionPanel::new(view.total.unwrap_or(0), view.elapsed, &app.theme),
        panel_area,
    );

    let restart = t!("complete.restart").to_string();
    let back = t!("complete.return").to_string();
    render_footer(frame, app, screen.footer, &[restart.as_str(), back.as_str()]);
}

fn render_load_failed(frame: &mut Frame, app: &App) {
    let screen = ScreenLayout::new(frame.area());
    render_header(frame, app, screen.header, String::new());
    if let Some(err) = app.load_error() {
        let area = layout::centered_rect(70, 60, screen.body);
        frame.render_widget(LoadErrorPanel::new(err, &app.theme), area);
    }
}
