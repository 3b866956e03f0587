pub mod blog_posts;
pub mod home;
pub mod json_error;
pub mod projects;
pub mod system;
pub mod theme;
