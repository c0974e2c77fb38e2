pub mod course;
pub mod sidebar;

pub use course::CoursePage;
