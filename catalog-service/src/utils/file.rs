use regex::Regex;
use std::sync::OnceLock;

pub const UPLOADS_ROUTE: &str = "/uploads";
pub const DEFAULT_UPLOAD_DIR: &str = "uploads";

fn unsafe_chars() -> &'static Regex {
    static UNSAFE: OnceLock<Regex> = OnceLock::new();
    UNSAFE.get_or_init(|| Regex::new(r"[^A-Za-z0-9._-]").expect("valid file name pattern"))
}

/// Reduces a client-supplied file name to a single safe path component.
pub fn sanitize_file_name(original: &str) -> String {
    let last_component = original
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default();
    let cleaned = unsafe_chars().replace_all(last_component, "_");
    let cleaned = cleaned.trim_start_matches('.');

    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}

pub fn upload_file_name(timestamp_millis: i64, original: &str) -> String {
    format!("{}-{}", timestamp_millis, sanitize_file_name(original))
}

pub fn upload_url(file_name: &str) -> String {
    format!("{}/{}", UPLOADS_ROUTE, file_name)
}
