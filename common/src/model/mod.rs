pub mod school;
pub mod upload;
