//! External collaborators: the color API and the word generator

pub mod color;
pub mod words;

pub use color::{ColorClient, RandomColor};
pub use words::random_word;
