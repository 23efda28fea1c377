use leptos::*;

use accordion::{Accordion, AccordionContent, AccordionHeader, AccordionSection};

const ACCORDION_CODE_EXAMPLE: &str = r#"<Accordion name="my-accordion" color="green" multi_open=true>
    <AccordionSection id="section1">
        <AccordionHeader>"Section Header"</AccordionHeader>
        <AccordionContent>"Section Content"</AccordionContent>
    </AccordionSection>
</Accordion>"#;

const LIBRARY_FEATURES: [(&str, &str); 4] = [
    ("Minimalist", "Only essential components"),
    ("Performance", "Lightweight & fast"),
    ("Customizable", "Extensive styling options"),
    ("Developer DX", "Easy to use & integrate"),
];

const COMPONENT_REFERENCES: [(&str, &str); 3] = [
    ("AccordionSection", "one collapsible section"),
    ("AccordionHeader", "clickable section header"),
    ("AccordionContent", "height-animated section body"),
];

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="page">
            <Hero />
            <MainDemo />
            <LiveContentDemo />
            <ColorShowcase />
            <FeatureGrid />
        </main>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <header class="hero">
            <h1 class="hero-title">"Accordion"</h1>
            <p class="hero-tagline">"A themeable collapsible-panel widget"</p>
            <div class="status-pill" role="status" aria-live="polite">
                <span class="status-dot" aria-hidden="true"></span>
                <span>"System Running"</span>
            </div>
            <div class="card hero-card">
                <p>
                    "Minimalist, performance-first collapsible panels: "
                    "single- or multi-open modes, six built-in color themes, "
                    "custom hex colors and smooth height animation."
                </p>
            </div>
        </header>
    }
}

#[component]
fn MainDemo() -> impl IntoView {
    view! {
        <section class="card demo-section" aria-labelledby="accordion-demo">
            <h2 id="accordion-demo" class="section-title">"Accordion Component Demo"</h2>

            <Accordion
                name="main-demo"
                default_open=vec!["getting-started".to_string()]
                color="green"
            >
                <AccordionSection id="getting-started">
                    <AccordionHeader>"Getting Started"</AccordionHeader>
                    <AccordionContent>
                        <p>"This minimalist component library focuses on:"</p>
                        <ul class="demo-list">
                            <li>"Performance-first approach"</li>
                            <li>"Developer experience"</li>
                            <li>"Easy customization"</li>
                            <li>"Minimal bundle size"</li>
                        </ul>
                    </AccordionContent>
                </AccordionSection>

                <AccordionSection id="installation">
                    <AccordionHeader>"Installation"</AccordionHeader>
                    <AccordionContent>
                        <p>"Add the library to your workspace:"</p>
                        <code class="demo-code-line">"accordion = { path = \"../accordion\" }"</code>
                    </AccordionContent>
                </AccordionSection>

                <AccordionSection id="components">
                    <AccordionHeader>"Available Components"</AccordionHeader>
                    <AccordionContent>
                        <p>"Component reference:"</p>
                        <dl class="demo-reference">
                            {COMPONENT_REFERENCES.iter().map(|(component, description)| view! {
                                <div class="demo-reference-row">
                                    <dt><code>{*component}</code></dt>
                                    <dd>"= "{*description}</dd>
                                </div>
                            }).collect_view()}
                        </dl>
                    </AccordionContent>
                </AccordionSection>

                <AccordionSection id="usage">
                    <AccordionHeader>"Usage Example"</AccordionHeader>
                    <AccordionContent>
                        <p>"Declare sections inside the container:"</p>
                        <pre class="demo-code" aria-label="Code example showing accordion usage">
                            <code>{ACCORDION_CODE_EXAMPLE}</code>
                        </pre>
                    </AccordionContent>
                </AccordionSection>

                <AccordionSection id="customization">
                    <AccordionHeader>"Customization"</AccordionHeader>
                    <AccordionContent>
                        <p>"Every component supports extensive customization:"</p>
                        <ul class="demo-list">
                            <li><strong>"Color themes"</strong>" - built-in presets (blue, gray, green, red, purple, amber)"</li>
                            <li><strong>"Custom hex colors"</strong>" - any #rrggbb value"</li>
                            <li><strong>"class props"</strong>" - override any styling"</li>
                            <li><strong>"Data attributes"</strong>" - for easy debugging and testing"</li>
                        </ul>
                    </AccordionContent>
                </AccordionSection>
            </Accordion>
        </section>
    }
}

/// Multi-open accordion whose second section fills in asynchronously, so the
/// content region has to re-measure after the initial reveal.
#[component]
fn LiveContentDemo() -> impl IntoView {
    let release_notes = create_rw_signal(Option::<Vec<&'static str>>::None);

    create_effect(move |_| {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(800).await;
            release_notes.set(Some(vec![
                "Sections can stay open side by side in multi-open mode",
                "Content height follows late-arriving children",
                "Toggling an open section always closes it",
            ]));
        });
    });

    view! {
        <section class="card demo-section" aria-labelledby="multi-open-demo">
            <h2 id="multi-open-demo" class="section-title">"Multi-Open & Dynamic Content"</h2>
            <p class="demo-intro">
                "With " <code>"multi_open=true"</code> " any number of sections can be "
                "expanded at once. The release notes below load after a short delay; "
                "the open section grows to fit them."
            </p>

            <Accordion
                name="live-demo"
                multi_open=true
                default_open=vec!["notes".to_string()]
                color="purple"
            >
                <AccordionSection id="modes">
                    <AccordionHeader>"Open Modes"</AccordionHeader>
                    <AccordionContent>
                        <p>
                            "Single-open replaces the expanded section atomically; "
                            "multi-open adds to the set and leaves the rest untouched."
                        </p>
                    </AccordionContent>
                </AccordionSection>

                <AccordionSection id="notes">
                    <AccordionHeader>"Release Notes"</AccordionHeader>
                    <AccordionContent>
                        {move || match release_notes.get() {
                            Some(notes) => view! {
                                <ul class="demo-list">
                                    {notes.into_iter().map(|note| view! { <li>{note}</li> }).collect_view()}
                                </ul>
                            }.into_view(),
                            None => view! {
                                <p class="demo-muted">"Fetching release notes..."</p>
                            }.into_view(),
                        }}
                    </AccordionContent>
                </AccordionSection>
            </Accordion>
        </section>
    }
}

#[component]
fn ColorShowcase() -> impl IntoView {
    view! {
        <section class="card demo-section" aria-labelledby="color-variants">
            <h2 id="color-variants" class="section-title">"Color Variants Showcase"</h2>
            <p class="demo-intro">
                "The accordion supports multiple color themes out of the box. "
                "Click the accordions below to see the color variations:"
            </p>

            <div class="showcase-grid">
                <div>
                    <h3 class="showcase-label">"Green Theme"</h3>
                    <Accordion name="green-demo" color="green">
                        <AccordionSection id="green-1">
                            <AccordionHeader>"Eco-Friendly Design"</AccordionHeader>
                            <AccordionContent>"Perfect for nature and sustainability themes"</AccordionContent>
                        </AccordionSection>
                    </Accordion>
                </div>

                <div>
                    <h3 class="showcase-label">"Purple Theme"</h3>
                    <Accordion name="purple-demo" color="purple">
                        <AccordionSection id="purple-1">
                            <AccordionHeader>"Creative Solutions"</AccordionHeader>
                            <AccordionContent>"Ideal for creative and innovative projects"</AccordionContent>
                        </AccordionSection>
                    </Accordion>
                </div>

                <div>
                    <h3 class="showcase-label">"Red Theme"</h3>
                    <Accordion name="red-demo" color="red">
                        <AccordionSection id="red-1">
                            <AccordionHeader>"Important Notice"</AccordionHeader>
                            <AccordionContent>"Great for alerts and critical information"</AccordionContent>
                        </AccordionSection>
                    </Accordion>
                </div>

                <div>
                    <h3 class="showcase-label">"Amber Theme"</h3>
                    <Accordion name="amber-demo" color="amber">
                        <AccordionSection id="amber-1">
                            <AccordionHeader>"Warning Message"</AccordionHeader>
                            <AccordionContent>"Perfect for warnings and cautions"</AccordionContent>
                        </AccordionSection>
                    </Accordion>
                </div>

                <div>
                    <h3 class="showcase-label">"Custom Hex (#336699)"</h3>
                    <Accordion name="custom-demo" color="#336699">
                        <AccordionSection id="custom-1">
                            <AccordionHeader>"Brand Colors"</AccordionHeader>
                            <AccordionContent>"Any hex value drives the full active role set"</AccordionContent>
                        </AccordionSection>
                    </Accordion>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureGrid() -> impl IntoView {
    view! {
        <section class="feature-grid" aria-label="Key Features">
            {LIBRARY_FEATURES.iter().map(|(title, description)| view! {
                <article class="feature-card">
                    <h3 class="feature-title">{*title}</h3>
                    <p class="feature-description">{*description}</p>
                </article>
            }).collect_view()}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_library_features_are_complete() {
        assert_eq!(LIBRARY_FEATURES.len(), 4);
        assert!(LIBRARY_FEATURES.iter().any(|(title, _)| *title == "Performance"));
    }

    #[wasm_bindgen_test]
    fn test_component_reference_names() {
        let names: Vec<&str> = COMPONENT_REFERENCES.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec!["AccordionSection", "AccordionHeader", "AccordionContent"]
        );
    }

    #[wasm_bindgen_test]
    fn test_code_example_mentions_every_slot() {
        assert!(ACCORDION_CODE_EXAMPLE.contains("<Accordion"));
        assert!(ACCORDION_CODE_EXAMPLE.contains("<AccordionSection"));
        assert!(ACCORDION_CODE_EXAMPLE.contains("<AccordionHeader"));
        assert!(ACCORDION_CODE_EXAMPLE.contains("<AccordionContent"));
    }
}
