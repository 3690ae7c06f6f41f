//! Small helpers shared across the crate.

/// Clamp an integer setting into `min..=max`.
pub fn clamp_usize(v: usize, min: usize, max: usize) -> usize {
    if v < min {
        min
    } else if v > max {
        max
    } else {
        v
    }
}

/// Convert a hyphenated slug to UpperCamelCase: `arrow-left-bold` → `ArrowLeftBold`.
///
/// Empty segments (from `--` or a leading/trailing `-`) contribute nothing.
pub fn upper_camel(slug: &str) -> String {
    let mut out = String::with_capacity(slug.len());
    for segment in slug.split('-') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
