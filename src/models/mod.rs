pub mod section;
pub mod project;
pub mod timeline;
pub mod track;
pub mod contact;

pub use section::SectionId;
pub use project::{Project, SortOption};
pub use timeline::{TimelineCategory, TimelineEntry};
pub use track::Track;
pub use contact::{ContactMessage, SubmissionStatus};
