//! Project names double as URL path segments.
//!
//! A name is lowercased and each space becomes a hyphen; the result is
//! percent-encoded for use in a link. Lookups compare route keys, so a
//! request segment only has to be decoded back to text before matching.

/// Lowercased name with every space replaced by a hyphen.
pub fn route_key(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// URL-safe path segment for a project name.
pub fn project_slug(name: &str) -> String {
    urlencoding::encode(&route_key(name)).into_owned()
}

/// True when `segment` addresses the project called `name`.
pub fn matches_slug(name: &str, segment: &str) -> bool {
    route_key(name) == route_key(segment)
}
