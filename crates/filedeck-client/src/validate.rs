//! Client-side upload validation.
//!
//! Mirrors the checks the storage API applies server-side, so invalid
//! uploads fail locally before any bytes are sent.

use filedeck_core::config::upload::UploadConfig;
use filedeck_core::error::AppError;
use filedeck_core::result::AppResult;
use filedeck_entity::file::UploadRequest;
use filedeck_entity::size::format_size;

/// Maximum sanitized filename length in characters.
const MAX_FILENAME_LEN: usize = 200;

/// Substrings that indicate path traversal or encoding tricks in a key.
const DANGEROUS_KEY_PATTERNS: [&str; 5] = ["../", "/..", "\\", "%2e%2e", "%00"];

/// Reject keys that could escape the allowed prefix or contain traversal
/// sequences. The storage API applies the same check; running it here
/// fails bad keys before a request is sent.
pub fn validate_key(config: &UploadConfig, key: &str) -> AppResult<()> {
    if key.is_empty() || !key.starts_with(&config.key_prefix) {
        return Err(AppError::validation("Invalid file key"));
    }
    let lowered = key.to_lowercase();
    if lowered.contains('\0')
        || DANGEROUS_KEY_PATTERNS
            .iter()
            .any(|pattern| lowered.contains(pattern))
    {
        return Err(AppError::validation("Invalid file key"));
    }
    Ok(())
}

/// Valid extensions per accepted MIME type.
fn allowed_extensions(content_type: &str) -> Option<&'static [&'static str]> {
    match content_type {
        "image/jpeg" => Some(&["jpg", "jpeg", "jfif"]),
        "image/png" => Some(&["png"]),
        "image/gif" => Some(&["gif"]),
        "image/webp" => Some(&["webp"]),
        "image/svg+xml" => Some(&["svg"]),
        "application/pdf" => Some(&["pdf"]),
        "text/plain" => Some(&["txt", "text", "log", "md"]),
        "text/csv" => Some(&["csv"]),
        "application/json" => Some(&["json"]),
        "application/zip" => Some(&["zip"]),
        "video/mp4" => Some(&["mp4"]),
        "audio/mpeg" => Some(&["mp3", "mpeg"]),
        "audio/wav" => Some(&["wav"]),
        _ => None,
    }
}

/// Sanitize a filename the way the storage API does: strip path
/// components, drop unsafe characters, collapse runs of dots and
/// underscores, remove leading dots, and cap the length while keeping the
/// extension.
pub fn sanitize_filename(filename: &str) -> String {
    let name = filename.replace('\\', "/");
    let name = name.rsplit('/').next().unwrap_or_default();

    let mut cleaned = String::with_capacity(name.len());
    let mut run = 0usize;
    let mut run_char = '_';
    for ch in name.chars() {
        if ch == '\0' {
            continue;
        }
        let safe = if ch.is_alphanumeric() || ch == '_' || ch == '-' || ch == '.' {
            ch
        } else {
            '_'
        };
        if safe == '_' || safe == '.' {
            if run == 0 {
                run_char = safe;
            }
            run += 1;
            continue;
        }
        flush_run(&mut cleaned, run, run_char);
        run = 0;
        cleaned.push(safe);
    }
    flush_run(&mut cleaned, run, run_char);

    let cleaned = cleaned.trim_start_matches('.').trim();
    let capped = cap_length(cleaned, MAX_FILENAME_LEN);
    if capped.is_empty() {
        "unnamed".to_string()
    } else {
        capped
    }
}

/// A run of two or more `_`/`.` collapses to a single underscore; a lone
/// character is kept as-is.
fn flush_run(out: &mut String, run: usize, run_char: char) {
    match run {
        0 => {}
        1 => out.push(run_char),
        _ => out.push('_'),
    }
}

fn cap_length(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        return name.to_string();
    }
    match name.rsplit_once('.') {
        Some((base, ext)) if !ext.is_empty() => {
            let keep = max.saturating_sub(ext.chars().count() + 1);
            let base: String = base.chars().take(keep).collect();
            format!("{base}.{ext}")
        }
        _ => name.chars().take(max).collect(),
    }
}

/// Verify the file extension is consistent with the declared MIME type.
///
/// A type outside the accepted set always fails; a missing extension is
/// allowed because the content-type check alone is sufficient.
pub fn extension_matches_type(filename: &str, content_type: &str) -> bool {
    let Some(allowed) = allowed_extensions(content_type) else {
        return false;
    };
    let ext = match filename.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => return true,
    };
    if ext.is_empty() {
        return true;
    }
    allowed.contains(&ext.as_str())
}

/// Validate an upload against the configured limits.
///
/// Checked before any request is sent; failures carry
/// [`ErrorKind::Validation`](filedeck_core::error::ErrorKind::Validation).
pub fn validate_upload(config: &UploadConfig, request: &UploadRequest) -> AppResult<()> {
    if request.data.is_empty() {
        return Err(AppError::validation("Empty file"));
    }
    if request.data.len() as u64 > config.max_size_bytes {
        return Err(AppError::validation(format!(
            "File too large. Max size: {}",
            format_size(config.max_size_bytes)
        )));
    }
    if !config
        .allowed_types
        .iter()
        .any(|t| t == &request.content_type)
    {
        return Err(AppError::validation(format!(
            "File type '{}' not allowed",
            request.content_type
        )));
    }
    let safe_name = sanitize_filename(&request.filename);
    if !extension_matches_type(&safe_name, &request.content_type) {
        return Err(AppError::validation(
            "File extension does not match declared content type",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(filename: &str, content_type: &str, size: usize) -> UploadRequest {
        UploadRequest {
            filename: filename.to_string(),
            content_type: content_type.to_string(),
            data: vec![0u8; size],
        }
    }

    #[test]
    fn test_validate_key() {
        let config = UploadConfig::default();
        assert!(validate_key(&config, "uploads/photos/a.jpg").is_ok());
        assert!(validate_key(&config, "").is_err());
        assert!(validate_key(&config, "etc/passwd").is_err());
        assert!(validate_key(&config, "uploads/../secrets.txt").is_err());
        assert!(validate_key(&config, "uploads/%2E%2E/x").is_err());
        assert!(validate_key(&config, "uploads/a\\b").is_err());
    }

    #[test]
    fn test_sanitize_strips_path_components() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("dir\\sub\\evil.png"), "evil.png");
    }

    #[test]
    fn test_sanitize_replaces_unsafe_characters() {
        // The run of `)` + `.` collapses too, eating the extension dot.
        assert_eq!(sanitize_filename("my photo (1).jpg"), "my_photo_1_jpg");
        assert_eq!(sanitize_filename("a..b.txt"), "a_b.txt");
    }

    #[test]
    fn test_sanitize_strips_leading_dots_and_empty() {
        assert_eq!(sanitize_filename(".hidden"), "hidden");
        assert_eq!(sanitize_filename(""), "unnamed");
        assert_eq!(sanitize_filename("photos/"), "unnamed");
    }

    #[test]
    fn test_sanitize_caps_length_preserving_extension() {
        let long = format!("{}.png", "a".repeat(300));
        let out = sanitize_filename(&long);
        assert_eq!(out.chars().count(), MAX_FILENAME_LEN);
        assert!(out.ends_with(".png"));
    }

    #[test]
    fn test_extension_consistency() {
        assert!(extension_matches_type("a.jpeg", "image/jpeg"));
        assert!(extension_matches_type("noext", "image/jpeg"));
        assert!(!extension_matches_type("a.png", "image/jpeg"));
        assert!(!extension_matches_type("a.exe", "application/x-msdownload"));
    }

    #[test]
    fn test_validate_upload_size_cap() {
        let mut config = UploadConfig::default();
        config.max_size_bytes = 8;
        let err = validate_upload(&config, &request("a.png", "image/png", 9)).unwrap_err();
        assert!(err.message.contains("File too large"));
    }

    #[test]
    fn test_validate_upload_rejects_type_and_mismatch() {
        let config = UploadConfig::default();
        let err =
            validate_upload(&config, &request("a.exe", "application/x-msdownload", 1)).unwrap_err();
        assert!(err.message.contains("not allowed"));

        let err = validate_upload(&config, &request("a.png", "image/jpeg", 1)).unwrap_err();
        assert!(err.message.contains("does not match"));
    }

    #[test]
    fn test_validate_upload_accepts_valid() {
        let config = UploadConfig::default();
        assert!(validate_upload(&config, &request("photo.jpg", "image/jpeg", 1)).is_ok());
    }
}
