//! Best-effort extraction of a JSON array from a model reply.

/// Strips code fences and slices the reply from the first `[` to the last
/// `]`.
///
/// Never fails: when no ordered bracket pair exists the fence-stripped,
/// trimmed text is returned unchanged and validation decides what to do with
/// it.
pub fn extract_json_array(raw: &str) -> String {
    let cleaned = raw.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();

    match (cleaned.find('['), cleaned.rfind(']')) {
        (Some(start), Some(end)) if start < end => cleaned[start..=end].to_string(),
        _ => cleaned.to_string(),
    }
}
