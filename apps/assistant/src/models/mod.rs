pub mod job;
pub mod resume;

pub use job::JobDetails;
pub use resume::ResumeSuggestions;
