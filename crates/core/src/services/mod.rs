pub mod movies;

pub use movies::MovieService;
