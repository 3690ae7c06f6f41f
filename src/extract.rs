//! Pattern-based extraction from raw SVG text.
//!
//! Icons are never parsed into a document model. Each helper runs a regular
//! expression over the file contents and returns the matched slice, or
//! `None` when the pattern does not match. Inputs are expected to have a
//! single `<svg>` root element.

use std::sync::LazyLock;

use regex::Regex;

static ID_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bid="([\w|-]*)"#).expect("valid id pattern"));

static ROOT_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<svg\b[^>]*>").expect("valid root tag pattern"));

static ROOT_BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<svg\b[^>]*>(.*)</svg>").expect("valid body pattern"));

static VIEW_BOX_ATTR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bviewBox="([^"]*)""#).expect("valid viewBox pattern"));

static DIMENSION_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|\s)(width|height)="([^"]*)""#).expect("valid dimension pattern")
});

/// Width and height attributes of an icon's root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dimensions {
    pub width: Option<String>,
    pub height: Option<String>,
}

impl Dimensions {
    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }
}

/// Value of the first `id="..."` attribute in the file.
pub fn svg_id(data: &str) -> Option<&str> {
    ID_ATTR
        .captures(data)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// The opening `<svg ...>` tag.
pub fn root_tag(data: &str) -> Option<&str> {
    ROOT_OPEN.find(data).map(|m| m.as_str())
}

/// Everything between the `>` closing the opening `<svg` tag and the last
/// `</svg>`.
pub fn inner_data(data: &str) -> Option<&str> {
    ROOT_BODY
        .captures(data)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Value of the root element's `viewBox` attribute.
pub fn view_box(data: &str) -> Option<&str> {
    let tag = root_tag(data)?;
    VIEW_BOX_ATTR
        .captures(tag)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .filter(|v| !v.trim().is_empty())
}

/// First `width` and `height` attributes on the root element. Empty values
/// count as absent.
pub fn dimensions(data: &str) -> Dimensions {
    let mut dims = Dimensions::default();
    let Some(tag) = root_tag(data) else {
        return dims;
    };

    for caps in DIMENSION_ATTR.captures_iter(tag) {
        let value = &caps[2];
        if value.is_empty() {
            continue;
        }
        let slot = match &caps[1] {
            "width" => &mut dims.width,
            _ => &mut dims.height,
        };
        if slot.is_none() {
            *slot = Some(value.to_string());
        }
    }

    dims
}
