/// Resolved header theming for an accordion color token.
#[derive(Clone, Debug, PartialEq)]
pub enum HeaderTheme {
    /// One of the built-in palette themes, addressed by a stylesheet class.
    Named(&'static str),
    /// A literal hex color, expanded into scoped style variables.
    Custom(String),
    /// Unknown token: no themed active styling is produced.
    Unstyled,
}

/// Built-in palette. The stylesheet binds the five visual roles (active
/// background, active text, indicator dot, active chevron, focus ring) for
/// each of these classes.
const NAMED_THEMES: [(&str, &str); 6] = [
    ("blue", "accordion-theme-blue"),
    ("gray", "accordion-theme-gray"),
    ("green", "accordion-theme-green"),
    ("red", "accordion-theme-red"),
    ("purple", "accordion-theme-purple"),
    ("amber", "accordion-theme-amber"),
];

/// Alpha suffix appended to a hex color for the active background.
const BACKGROUND_ALPHA: &str = "15";
/// Alpha suffix appended to a hex color for the focus ring.
const FOCUS_RING_ALPHA: &str = "66";

/// Resolve a color token into header theming.
pub fn resolve_theme(color: &str) -> HeaderTheme {
    if let Some((_, class)) = NAMED_THEMES.iter().copied().find(|(name, _)| *name == color) {
        return HeaderTheme::Named(class);
    }
    if color.starts_with('#') {
        return HeaderTheme::Custom(custom_style_vars(color));
    }
    HeaderTheme::Unstyled
}

/// Scoped style variables for a literal hex color: the literal value drives
/// text, dot, chevron and focus ring; the active background and the focus
/// ring carry fixed alpha suffixes.
fn custom_style_vars(color: &str) -> String {
    format!(
        "--accordion-bg-active: {color}{BACKGROUND_ALPHA}; \
         --accordion-text-active: {color}; \
         --accordion-dot-color: {color}; \
         --accordion-chevron-active: {color}; \
         --accordion-focus-ring: {color}{FOCUS_RING_ALPHA};"
    )
}
