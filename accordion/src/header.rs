use leptos::*;

use crate::context::{use_accordion, use_section};
use crate::theme::{resolve_theme, HeaderTheme};

/// Clickable header slot toggling its enclosing section.
///
/// Active styling follows the accordion's color token: built-in palette
/// names map to a theme class, literal hex colors become scoped style
/// variables, anything else leaves the active state unstyled. The button
/// exposes `aria-expanded` and points at its content region via
/// `aria-controls`.
#[component]
pub fn AccordionHeader(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let accordion = use_accordion();
    let section = use_section();
    let is_open = section.is_open;

    let (theme_class, style_attr) = match resolve_theme(accordion.color()) {
        HeaderTheme::Named(class_name) => (Some(class_name), String::new()),
        HeaderTheme::Custom(vars) => (None, vars),
        HeaderTheme::Unstyled => (None, String::new()),
    };

    let header_tag = format!("{}-header-{}", accordion.name(), section.section_id);
    let content_id = format!("accordion-content-{}", section.section_id);

    let button_class = move || {
        let mut classes = vec!["accordion-header"];
        if let Some(theme_class) = theme_class {
            classes.push(theme_class);
        }
        if is_open.get() {
            classes.push("open");
        }
        if let Some(ref extra) = class {
            classes.push(extra);
        }
        classes.join(" ")
    };

    let toggle = {
        let accordion = accordion.clone();
        let section_id = section.section_id.clone();
        move |_| accordion.toggle(&section_id)
    };

    view! {
        <button
            class=button_class
            style=style_attr
            on:click=toggle
            aria-expanded=move || is_open.get().to_string()
            aria-controls=content_id
            data-accordion-header=header_tag
        >
            <span class="accordion-header-label">{children()}</span>
            <span class="accordion-header-icons">
                <Show when=move || is_open.get() fallback=|| ()>
                    <span class="accordion-dot" aria-hidden="true"></span>
                </Show>
                <svg
                    class="accordion-chevron"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2.5"
                    aria-hidden="true"
                >
                    <path stroke-linecap="round" stroke-linejoin="round" d="M19 9l-7 7-7-7"></path>
                </svg>
            </span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_header_css_classes() {
        assert_eq!("accordion-header", "accordion-header");
        assert_eq!("accordion-header-label", "accordion-header-label");
        assert_eq!("accordion-dot", "accordion-dot");
        assert_eq!("accordion-chevron", "accordion-chevron");
    }

    #[wasm_bindgen_test]
    fn test_open_class_assignment() {
        let mut classes = vec!["accordion-header"];
        let theme = resolve_theme("green");
        if let HeaderTheme::Named(theme_class) = theme {
            classes.push(theme_class);
        }
        classes.push("open");
        assert_eq!(classes.join(" "), "accordion-header accordion-theme-green open");
    }

    #[wasm_bindgen_test]
    fn test_header_tag_and_controls_reference() {
        let header_tag = format!("{}-header-{}", "faq", "shipping");
        let content_id = format!("accordion-content-{}", "shipping");
        assert_eq!(header_tag, "faq-header-shipping");
        assert_eq!(content_id, "accordion-content-shipping");
    }

    #[wasm_bindgen_test]
    fn test_unknown_color_produces_no_theme_class_or_style() {
        let (theme_class, style_attr) = match resolve_theme("not-a-theme") {
            HeaderTheme::Named(class) => (Some(class), String::new()),
            HeaderTheme::Custom(vars) => (None, vars),
            HeaderTheme::Unstyled => (None, String::new()),
        };
        assert!(theme_class.is_none());
        assert!(style_attr.is_empty());
    }
}
