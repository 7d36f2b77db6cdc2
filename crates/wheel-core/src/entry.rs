//! Wheel entries.

use serde::{Deserialize, Serialize};

/// Default slice colors, cycled by slice index when an entry has none.
pub const PALETTE: [&str; 12] = [
    "#f43f5e", "#ef4444", "#f59e0b", "#22c55e", "#14b8a6", "#3b82f6", "#a855f7", "#f97316",
    "#10b981", "#0ea5e9", "#eab308", "#84cc16",
];

/// One labeled slice of the wheel.
///
/// Labels need not be unique. The position of an entry in its list decides
/// which slice it occupies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Text shown on the slice.
    pub label: String,
    /// Optional image reference (path or URL) drawn into the slice.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Optional slice color, e.g. `#ff8800`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Entry {
    /// Create an entry with only a label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            image: None,
            color: None,
        }
    }

    /// Attach an image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Attach an explicit slice color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// The color this entry is drawn with when it sits at `index`.
    pub fn slice_color(&self, index: usize) -> &str {
        self.color
            .as_deref()
            .unwrap_or(PALETTE[index % PALETTE.len()])
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_methods() {
        let e = Entry::new("iPad").with_image("ipad.png").with_color("#000000");
        assert_eq!(e.label, "iPad");
        assert_eq!(e.image.as_deref(), Some("ipad.png"));
        assert_eq!(e.color.as_deref(), Some("#000000"));
    }

    #[test]
    fn palette_cycles_by_index() {
        let e = Entry::new("Ali");
        assert_eq!(e.slice_color(0), "#f43f5e");
        assert_eq!(e.slice_color(12), "#f43f5e");
        assert_eq!(e.slice_color(13), "#ef4444");
    }

    #[test]
    fn explicit_color_wins() {
        let e = Entry::new("Ali").with_color("#123456");
        assert_eq!(e.slice_color(3), "#123456");
    }

    #[test]
    fn optional_fields_omitted_in_json() {
        let json = serde_json::to_string(&Entry::new("Mug")).unwrap();
        assert_eq!(json, r#"{"label":"Mug"}"#);
        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Entry::new("Mug"));
    }
}
