//! Hanzi flashcards for the terminal: a bundled grade/term/lesson curriculum,
//! a filter that keeps only quizzable ideographs, and a quiz engine that shows
//! them one at a time in random order.

rust_i18n::i18n!("locales", fallback = "en");

pub mod app;
pub mod config;
pub mod curriculum;
pub mod engine;
pub mod error;
pub mod event;
pub mod logging;
pub mod session;
pub mod ui;

/// Switch the UI language for every subsequent `t!` lookup.
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}
