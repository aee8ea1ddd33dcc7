pub mod candidate;
pub mod course;
pub mod job;
