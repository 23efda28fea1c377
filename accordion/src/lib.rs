//! Themeable collapsible-panel (accordion) components.
//!
//! An [`Accordion`] owns the set of open section ids;
//! [`AccordionSection`] derives its open flag from that set, and the
//! [`AccordionHeader`] / [`AccordionContent`] slots inside it toggle and
//! reveal the section. Slots read their surroundings through context, so
//! they only compose inside their enclosing scopes.

pub mod accordion;
pub mod content;
pub mod context;
pub mod header;
pub mod section;
pub mod theme;

pub use accordion::Accordion;
pub use content::AccordionContent;
pub use header::AccordionHeader;
pub use section::AccordionSection;
