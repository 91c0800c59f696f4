//! Byte-size formatting matching the storage API's `size_human` convention.

/// Format a byte count the way the storage API does: one decimal place,
/// units from B through PB, dividing by 1024 per step.
pub fn format_size(size_bytes: u64) -> String {
    let mut size = size_bytes as f64;
    for unit in ["B", "KB", "MB", "GB", "TB"] {
        if size < 1024.0 {
            return format!("{size:.1} {unit}");
        }
        size /= 1024.0;
    }
    format!("{size:.1} PB")
}
