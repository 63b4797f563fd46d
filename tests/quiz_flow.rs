use std::collections::HashMap;
use std::io::Write;

use rand::SeedableRng;
use rand::rngs::SmallRng;

use hanzi_hero::app::{App, AppScreen, MainFocus};
use hanzi_hero::config::Config;
use hanzi_hero::curriculum::store;
use hanzi_hero::engine::filter;
use hanzi_hero::error::{DataLoadError, QuizError};
use hanzi_hero::session::quiz::{QuizEngine, QuizPhase};

fn app(seed: u64) -> App {
    App::with_rng(
        Config::default(),
        store::load_bundled(),
        SmallRng::seed_from_u64(seed),
    )
}

fn counts(chars: &[char]) -> HashMap<char, usize> {
    let mut map = HashMap::new();
    for &ch in chars {
        *map.entry(ch).or_insert(0) += 1;
    }
    map
}

#[test]
fn bundled_dataset_is_fully_quizzable() {
    let curriculum = store::load_bundled().unwrap();
    assert!(curriculum.grade(1).is_some());
    assert!(curriculum.grade(2).is_some());

    for grade in curriculum.grades() {
        for term in &grade.terms {
            for lesson in &term.lessons {
                assert!(!lesson.characters.is_empty(), "{}", lesson.label());
                for entry in &lesson.characters {
                    let mut chars = entry.glyph.chars();
                    let ch = chars.next().unwrap();
                    assert!(chars.next().is_none());
                    assert!(filter::is_quizzable(ch), "{ch} in {}", lesson.title);
                }
            }
        }
    }
}

#[test]
fn lesson_from_browser_runs_to_completion() {
    let mut app = app(11);
    assert_eq!(app.focus, MainFocus::Browser);

    // Grade 1, first term, first lesson
    app.browser_select();
    app.browser_select();
    app.browser_select();
    assert_eq!(app.focus, MainFocus::Editor);

    let expected = filter::extract_ideographs(app.input.value());
    assert!(!expected.is_empty());
    assert!(app.start_quiz());

    let mut seen = Vec::new();
    while app.screen() == AppScreen::Quiz {
        let view = app.current_view();
        assert_eq!(view.index, Some(seen.len() + 1));
        assert_eq!(view.total, Some(expected.len()));
        seen.push(view.character.unwrap());
        app.advance();
    }

    assert_eq!(app.screen(), AppScreen::Complete);
    assert_eq!(counts(&seen), counts(&expected));
    assert!(app.current_view().character.is_none());

    app.return_to_main();
    assert_eq!(app.screen(), AppScreen::Main);
}

#[test]
fn stop_dialog_keeps_the_current_card() {
    let mut app = app(5);
    app.input.set_text("大小多少");
    app.start_quiz();
    app.advance();
    let before = app.current_view();

    app.request_stop();
    assert_eq!(app.screen(), AppScreen::ConfirmStop);
    assert_eq!(app.current_view().character, before.character);
    assert_eq!(app.current_view().index, Some(2));

    app.cancel_stop();
    assert_eq!(app.current_view().character, before.character);

    app.request_stop();
    app.confirm_stop();
    assert_eq!(app.screen(), AppScreen::Main);
    assert_eq!(app.current_view().total, None);
}

#[test]
fn mixed_text_keeps_repeated_ideographs() {
    let mut engine = QuizEngine::with_rng(SmallRng::seed_from_u64(2));
    assert!(engine.start("Hello 你好，你们！123"));
    let mut working = engine.working_set().to_vec();
    working.sort_unstable();
    let mut expected = vec!['你', '好', '你', '们'];
    expected.sort_unstable();
    assert_eq!(working, expected);
}

#[test]
fn accessors_fail_outside_a_run() {
    let mut engine = QuizEngine::new();
    assert_eq!(
        engine.current_character(),
        Err(QuizError::InvalidState {
            phase: QuizPhase::Idle
        })
    );
    assert!(engine.progress().is_none());

    engine.start("一");
    engine.advance();
    assert!(engine.is_complete());
    assert!(engine.current_character().is_err());
}

#[test]
fn dataset_on_disk_overrides_bundled() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"[{{"grade": 3, "terms": [{{"term": "上册", "lessons": [
            {{"lesson_number": 1, "title": "大青树下的小学", "characters": [
                {{"char": "坪", "type": "识字"}}, {{"char": "戴", "type": "识字"}}]}}
        ]}}]}}]"#
    )
    .unwrap();

    let curriculum = store::load_path(file.path()).unwrap();
    assert_eq!(curriculum.character_count(), 2);
    assert_eq!(curriculum.grade(3).unwrap().term("上册").unwrap().lessons[0].text(), "坪戴");
}

#[test]
fn broken_dataset_shows_failure_screen() {
    let mut app = App::with_rng(
        Config::default(),
        store::load(br#"[{"grade": "one"}]"#),
        SmallRng::seed_from_u64(1),
    );
    assert!(matches!(app.load_error(), Some(DataLoadError::Schema(_))));
    assert_eq!(app.screen(), AppScreen::LoadFailed);
    app.input.set_text("天");
    assert!(!app.start_quiz());
}
