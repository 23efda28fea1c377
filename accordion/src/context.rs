use std::collections::HashSet;

use leptos::*;

/// Accordion-wide state shared with every nested slot.
///
/// Holds the set of currently open section ids. The set is only ever
/// mutated through [`AccordionContext::toggle`]; sections, headers and
/// content regions are read-only observers.
#[derive(Clone)]
pub struct AccordionContext {
    open_section_ids: RwSignal<HashSet<String>>,
    multi_open: bool,
    name: String,
    color: String,
}

impl AccordionContext {
    /// Create accordion state with the given initially open section ids.
    pub fn new(name: String, multi_open: bool, default_open: Vec<String>, color: String) -> Self {
        Self {
            open_section_ids: create_rw_signal(default_open.into_iter().collect()),
            multi_open,
            name,
            color,
        }
    }

    /// Toggle a section by id.
    ///
    /// Closing is unconditional. Opening replaces the whole set when only a
    /// single section may stay open, otherwise the id is added alongside the
    /// already open ones. Ids without a matching rendered section are kept
    /// but have no visible effect.
    pub fn toggle(&self, section_id: &str) {
        let multi_open = self.multi_open;
        self.open_section_ids
            .update(|open| toggle_section(open, section_id, multi_open));
    }

    /// Reactive membership test for a section id.
    pub fn is_open(&self, section_id: &str) -> bool {
        self.open_section_ids.with(|open| open.contains(section_id))
    }

    /// Non-reactive membership test, for one-shot mount logic.
    pub fn is_open_untracked(&self, section_id: &str) -> bool {
        self.open_section_ids
            .with_untracked(|open| open.contains(section_id))
    }

    /// Accordion name used for diagnostic attribute tagging.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Color token the headers resolve their theme from.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Whether several sections may be open at once.
    pub fn multi_open(&self) -> bool {
        self.multi_open
    }
}

/// Per-section state shared with header and content slots.
#[derive(Clone)]
pub struct SectionContext {
    pub section_id: String,
    pub is_open: Signal<bool>,
}

/// Fetch the enclosing accordion state.
///
/// Panics when called outside an `Accordion`; using a slot without its
/// container is a programmer error with no recovery path.
pub fn use_accordion() -> AccordionContext {
    use_context::<AccordionContext>()
        .expect("accordion slots must be used within an Accordion")
}

/// Fetch the enclosing section state.
///
/// Panics when called outside an `AccordionSection`.
pub fn use_section() -> SectionContext {
    use_context::<SectionContext>()
        .expect("AccordionHeader and AccordionContent must be used within an AccordionSection")
}

fn toggle_section(open: &mut HashSet<String>, section_id: &str, multi_open: bool) {
    if open.contains(section_id) {
        open.remove(section_id);
    } else if multi_open {
        open.insert(section_id.to_string());
    } else {
        // Atomic replace: the previously open section closes in the same
        // update that opens this one.
        *open = HashSet::from([section_id.to_string()]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_toggle_closes_open_section_in_either_mode() {
        let mut open = set(&["a"]);
        toggle_section(&mut open, "a", false);
        assert!(open.is_empty());

        let mut open = set(&["a", "b"]);
        toggle_section(&mut open, "a", true);
        assert_eq!(open, set(&["b"]));
    }

    #[test]
    fn test_toggle_single_mode_replaces_open_set() {
        let mut open = set(&["a"]);
        toggle_section(&mut open, "b", false);
        assert_eq!(open, set(&["b"]));
    }

    #[test]
    fn test_toggle_multi_mode_adds_to_open_set() {
        let mut open = set(&["a"]);
        toggle_section(&mut open, "b", true);
        assert_eq!(open, set(&["a", "b"]));
    }

    #[test]
    fn test_single_mode_never_holds_more_than_one_id() {
        let mut open = HashSet::new();
        for id in ["a", "b", "c", "a", "b", "b", "c"] {
            toggle_section(&mut open, id, false);
            assert!(open.len() <= 1);
        }
    }

    #[test]
    fn test_multi_mode_double_toggle_is_a_round_trip() {
        let mut open = set(&["a", "b"]);
        let before = open.clone();
        toggle_section(&mut open, "c", true);
        toggle_section(&mut open, "c", true);
        assert_eq!(open, before);
    }

    #[test]
    fn test_context_starts_from_default_open_list() {
        let runtime = create_runtime();

        let context = AccordionContext::new(
            "faq".to_string(),
            false,
            vec!["shipping".to_string()],
            "blue".to_string(),
        );
        assert!(context.is_open_untracked("shipping"));
        assert!(!context.is_open_untracked("returns"));

        runtime.dispose();
    }

    #[test]
    fn test_context_toggle_switches_sections() {
        let runtime = create_runtime();

        let context = AccordionContext::new(
            "faq".to_string(),
            false,
            vec!["shipping".to_string()],
            "blue".to_string(),
        );
        context.toggle("returns");
        assert!(context.is_open_untracked("returns"));
        assert!(!context.is_open_untracked("shipping"));

        runtime.dispose();
    }

    #[test]
    #[should_panic(expected = "must be used within an Accordion")]
    fn test_slot_outside_accordion_panics() {
        let _runtime = create_runtime();
        let _ = use_accordion();
    }

    #[test]
    #[should_panic(expected = "must be used within an AccordionSection")]
    fn test_slot_outside_section_panics() {
        let _runtime = create_runtime();
        let _ = use_section();
    }

    #[test]
    fn test_context_keeps_unknown_ids_inert_but_stored() {
        let runtime = create_runtime();

        let context =
            AccordionContext::new("faq".to_string(), true, Vec::new(), "blue".to_string());
        context.toggle("not-rendered-yet");
        assert!(context.is_open_untracked("not-rendered-yet"));

        runtime.dispose();
    }
}
