pub mod completion;
pub mod confirm_dialog;
pub mod flashcard;
pub mod lesson_browser;
pub mod load_error;
pub mod progress_bar;
pub mod text_field;
