pub mod gallery;
pub mod image_output;
