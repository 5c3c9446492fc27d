pub mod movies;
pub mod root;
