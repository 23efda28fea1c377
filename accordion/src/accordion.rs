use leptos::*;

use crate::context::AccordionContext;

/// Collapsible-panel container.
///
/// Owns the set of open section ids and hands it to nested
/// [`AccordionSection`](crate::AccordionSection) slots through context. By
/// default only one section is open at a time; `multi_open` lifts that
/// restriction. The open set starts from `default_open` on every mount and
/// is discarded on unmount.
#[component]
pub fn Accordion(
    #[prop(into)] name: String,
    #[prop(optional)] multi_open: bool,
    #[prop(optional)] default_open: Vec<String>,
    #[prop(optional, into)] color: Option<String>,
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let color = color.unwrap_or_else(|| "blue".to_string());
    provide_context(AccordionContext::new(
        name.clone(),
        multi_open,
        default_open,
        color,
    ));

    let full_class = if let Some(extra) = class {
        format!("accordion {}", extra)
    } else {
        "accordion".to_string()
    };

    view! {
        <div class=full_class data-accordion-name=name>
            {children()}
        </div>
    }
}
