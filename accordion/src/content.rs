use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::context::{use_accordion, use_section};

/// Collapsible content region of a section.
///
/// The outer div clips and animates between zero and the measured natural
/// height of the children; the inner wrapper is what gets measured. Height
/// is re-read whenever the rendered children change size, so late-arriving
/// content is never clipped to a stale measurement.
#[component]
pub fn AccordionContent(
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let accordion = use_accordion();
    let section = use_section();
    let is_open = section.is_open;

    let inner_ref = create_node_ref::<html::Div>();
    let content_height = create_rw_signal(0);

    // Measure once the children are in the DOM, then keep the measurement
    // fresh while their rendered size changes. The style binding below picks
    // up every height update after this effect has run.
    create_effect(move |_| {
        if let Some(inner) = inner_ref.get() {
            content_height.set(inner.scroll_height());

            let measured = inner.clone();
            let handler = Closure::wrap(Box::new(move || {
                content_height.set(measured.scroll_height());
            }) as Box<dyn FnMut()>);

            if let Ok(observer) = web_sys::ResizeObserver::new(handler.as_ref().unchecked_ref()) {
                observer.observe(&inner);
                on_cleanup(move || {
                    observer.disconnect();
                    drop(handler);
                });
            }
        }
    });

    let style = move || region_style(is_open.get(), content_height.get());

    let content_tag = format!("{}-content-{}", accordion.name(), section.section_id);
    let region_id = format!("accordion-content-{}", section.section_id);

    let inner_class = if let Some(extra) = class {
        format!("accordion-content-inner {}", extra)
    } else {
        "accordion-content-inner".to_string()
    };

    view! {
        <div
            class="accordion-content"
            id=region_id
            style=style
            data-accordion-content=content_tag
        >
            <div class=inner_class node_ref=inner_ref>
                {children()}
            </div>
        </div>
    }
}

/// Transition target for the clipping container: the measured natural height
/// while open, exactly zero while closed.
fn region_style(is_open: bool, content_height: i32) -> String {
    if is_open {
        format!("height: {}px; opacity: 1;", content_height)
    } else {
        "height: 0px; opacity: 0;".to_string()
    }
}
