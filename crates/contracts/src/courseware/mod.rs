pub mod course_meta;
pub mod sidebar;
