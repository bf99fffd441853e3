//! Input readers for the analysis pipeline.

pub mod lists;

pub use lists::{read_distance_list, read_distances, ListError};
