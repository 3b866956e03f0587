use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Tag value meaning "no technology filter".
pub const ALL_TAGS: &str = "All";

pub const THEME_COOKIE: &str = "theme";
pub const PREFERS_COLOR_SCHEME_HEADER: &str = "Sec-CH-Prefers-Color-Scheme";

pub const PROJECTS_FILE: &str = "projects_data.json";
pub const BLOGS_FILE: &str = "blogs_data.json";
