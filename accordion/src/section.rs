use leptos::*;

use crate::context::{use_accordion, SectionContext};

/// One collapsible section of an [`Accordion`](crate::Accordion).
///
/// Derives its open flag from membership of `id` in the container's open
/// set and shares it with nested header and content slots.
#[component]
pub fn AccordionSection(
    #[prop(into)] id: String,
    #[prop(optional)] default_open: bool,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let accordion = use_accordion();

    // One-shot: runs in the setup body, not in an effect, so it fires once
    // per mount and never again when the open set changes afterwards.
    if default_open && !accordion.is_open_untracked(&id) {
        accordion.toggle(&id);
    }

    let is_open = {
        let accordion = accordion.clone();
        let id = id.clone();
        Signal::derive(move || accordion.is_open(&id))
    };
    provide_context(SectionContext {
        section_id: id.clone(),
        is_open,
    });

    let section_tag = format!("{}-{}", accordion.name(), id);
    let full_class = if let Some(extra) = class {
        format!("accordion-section {}", extra)
    } else {
        "accordion-section".to_string()
    };

    view! {
        <div class=full_class data-accordion-section=section_tag>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_section_css_classes() {
        assert_eq!("accordion-section", "accordion-section");
    }

    #[wasm_bindgen_test]
    fn test_section_tag_is_stable_for_name_and_id() {
        let tag = format!("{}-{}", "faq", "shipping");
        assert_eq!(tag, "faq-shipping");
    }
}
