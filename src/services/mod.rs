pub mod audio;
pub mod chat;
pub mod completions;
pub mod edits;
pub mod embeddings;
pub mod files;
pub mod fine_tunes;
pub mod fine_tuning;
pub mod images;
pub mod models;
pub mod moderations;

mod validation;
