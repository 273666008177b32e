//! In-memory document used by native builds and tests.

use std::collections::{BTreeSet, HashMap};

use crate::document::{Document, Region, HIDDEN_CLASS};

/// One rendered entry of the project list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// Project id the entry selects
    pub id: u32,
    /// Displayed label
    pub label: String,
    /// Whether the entry carries the active marking
    pub active: bool,
}

/// A page shell held entirely in memory.
///
/// Regions start empty and displayed; the overlay starts with the hidden
/// class, matching the static page.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    width: f64,
    entries: Vec<ListEntry>,
    html: HashMap<Region, String>,
    classes: HashMap<Region, BTreeSet<String>>,
    hidden: BTreeSet<Region>,
    scroll_locked: bool,
}

impl MemoryDocument {
    /// Create a document with the given viewport width.
    pub fn new(width: f64) -> Self {
        let mut classes: HashMap<Region, BTreeSet<String>> = HashMap::new();
        classes
            .entry(Region::Overlay)
            .or_default()
            .insert(HIDDEN_CLASS.to_string());

        Self {
            width,
            entries: Vec::new(),
            html: HashMap::new(),
            classes,
            hidden: BTreeSet::new(),
            scroll_locked: false,
        }
    }

    /// Seed the initial markup of a region.
    pub fn with_inner_html(mut self, region: Region, html: &str) -> Self {
        self.html.insert(region, html.to_string());
        self
    }

    /// Seed a region as hidden via inline style.
    pub fn with_hidden(mut self, region: Region) -> Self {
        self.hidden.insert(region);
        self
    }

    /// Simulate a viewport resize.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.width = width;
    }

    /// Current markup of a region (empty if never set).
    pub fn inner_html(&self, region: Region) -> &str {
        self.html.get(&region).map(String::as_str).unwrap_or("")
    }

    /// Whether a region is displayed.
    pub fn is_displayed(&self, region: Region) -> bool {
        !self.hidden.contains(&region)
    }

    /// Whether body scrolling is currently suppressed.
    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    /// Rendered list entries in order.
    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// Ids of the entries currently marked active.
    pub fn active_entries(&self) -> Vec<u32> {
        self.entries
            .iter()
            .filter(|entry| entry.active)
            .map(|entry| entry.id)
            .collect()
    }
}

impl Document for MemoryDocument {
    fn viewport_width(&self) -> f64 {
        self.width
    }

    fn append_entry(&mut self, id: u32, label: &str) {
        self.entries.push(ListEntry {
            id,
            label: label.to_string(),
            active: false,
        });
    }

    fn set_active_entry(&mut self, id: Option<u32>) {
        for entry in &mut self.entries {
            entry.active = Some(entry.id) == id;
        }
    }

    fn set_inner_html(&mut self, region: Region, html: &str) {
        self.html.insert(region, html.to_string());
    }

    fn set_class(&mut self, region: Region, class: &str, present: bool) {
        let classes = self.classes.entry(region).or_default();
        if present {
            classes.insert(class.to_string());
        } else {
            classes.remove(class);
        }
    }

    fn has_class(&self, region: Region, class: &str) -> bool {
        self.classes
            .get(&region)
            .is_some_and(|classes| classes.contains(class))
    }

    fn set_displayed(&mut self, region: Region, displayed: bool) {
        if displayed {
            self.hidden.remove(&region);
        } else {
            self.hidden.insert(region);
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }
}
