pub mod model;
pub mod store;

pub use model::{CharacterEntry, Curriculum, Grade, Lesson, Term};
