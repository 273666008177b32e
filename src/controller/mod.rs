//! The view controller.
//!
//! Owns the catalog, the current selection and the overlay state, and maps
//! each [`Message`] onto document mutations plus deferred [`Task`]s.

use folio_dom::prelude::*;
use folio_dom::{ACTIVE_CLASS, HIDDEN_CLASS};

use crate::catalog::Catalog;
use crate::config::LayoutConfig;
use crate::message::Message;
use crate::model::Project;
use crate::overlay::{OverlayController, OverlayPhase};
use crate::render::{render_detail, render_welcome};

#[cfg(test)]
mod tests;

/// What the desktop detail container is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DesktopView {
    /// The static welcome fragment
    #[default]
    Welcome,
    /// Detail view of the project with this id
    Project(u32),
}

/// Drives the list, the desktop container and the overlay.
#[derive(Debug)]
pub struct ViewController {
    catalog: Catalog,
    layout: LayoutConfig,
    active: Option<u32>,
    desktop: DesktopView,
    overlay: OverlayController,
}

impl ViewController {
    /// Create a controller; the page is assumed to show the welcome view.
    pub fn new(catalog: Catalog, layout: LayoutConfig) -> Self {
        Self {
            catalog,
            layout,
            active: None,
            desktop: DesktopView::Welcome,
            overlay: OverlayController::new(),
        }
    }

    /// The project catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Id of the selected project.
    pub fn active_project_id(&self) -> Option<u32> {
        self.active
    }

    /// The selected project.
    pub fn active_project(&self) -> Option<&Project> {
        self.active.and_then(|id| self.catalog.get(id))
    }

    /// What the desktop container shows.
    pub fn desktop_view(&self) -> DesktopView {
        self.desktop
    }

    /// Overlay phase.
    pub fn overlay_phase(&self) -> OverlayPhase {
        self.overlay.phase()
    }

    fn is_desktop(&self, doc: &impl Document) -> bool {
        doc.viewport_width() > self.layout.desktop_breakpoint
    }

    /// Render one list entry per project, in catalog order. Call once.
    pub fn mount(&self, doc: &mut impl Document) {
        for project in self.catalog.iter() {
            doc.append_entry(project.id, &project.title);
        }
        log::info!("Rendered {} project entries", self.catalog.len());
    }

    /// Handle one message.
    pub fn update(&mut self, doc: &mut impl Document, message: Message) -> Vec<Task<Message>> {
        log::trace!("update: {:?}", message);
        match message {
            Message::SelectProject(id) => self.select_project(doc, id),
            Message::ResetToHome => self.reset_to_home(doc),
            Message::CloseOverlay => self.close_overlay(doc),
            Message::ViewportResized => self.reconcile_viewport(doc),
            Message::OverlayFrame { generation } => {
                if self.overlay.frame(generation) {
                    doc.set_class(Region::Overlay, ACTIVE_CLASS, true);
                }
                Vec::new()
            }
            Message::OverlayClosed { generation } => {
                if self.overlay.finish_close(generation) {
                    doc.set_scroll_locked(false);
                }
                Vec::new()
            }
        }
    }

    /// Select a project and show its detail view.
    ///
    /// Unknown ids are ignored with a warning.
    pub fn select_project(&mut self, doc: &mut impl Document, id: u32) -> Vec<Task<Message>> {
        let Some(project) = self.catalog.get(id) else {
            log::warn!("Ignoring selection of unknown project {}", id);
            return Vec::new();
        };
        let html = render_detail(project);
        log::debug!("Selected project {} ({})", id, project.title);

        self.active = Some(id);
        doc.set_active_entry(Some(id));

        if self.is_desktop(&*doc) {
            self.show_on_desktop(doc, id, &html);
            Vec::new()
        } else {
            doc.set_inner_html(Region::OverlayContent, &html);
            self.open_overlay(doc)
        }
    }

    /// Clear the selection and return to the welcome view.
    pub fn reset_to_home(&mut self, doc: &mut impl Document) -> Vec<Task<Message>> {
        self.active = None;
        doc.set_active_entry(None);

        if self.is_desktop(&*doc) {
            doc.set_inner_html(Region::Display, render_welcome());
            doc.set_displayed(Region::StaticClose, false);
            self.desktop = DesktopView::Welcome;
            Vec::new()
        } else {
            self.close_overlay(doc)
        }
    }

    /// Close the overlay and clear the selection.
    ///
    /// Background scroll stays locked until the transition has elapsed.
    pub fn close_overlay(&mut self, doc: &mut impl Document) -> Vec<Task<Message>> {
        self.active = None;
        doc.set_class(Region::Overlay, ACTIVE_CLASS, false);
        doc.set_active_entry(None);
        self.begin_close()
    }

    /// Move a selection made at overlay size into the desktop container.
    ///
    /// Only the overlay-to-desktop direction is reconciled.
    pub fn reconcile_viewport(&mut self, doc: &mut impl Document) -> Vec<Task<Message>> {
        if !self.is_desktop(&*doc) {
            return Vec::new();
        }
        let Some(id) = self.active else {
            return Vec::new();
        };

        if self.desktop != DesktopView::Project(id) {
            if let Some(project) = self.catalog.get(id) {
                let html = render_detail(project);
                log::debug!("Viewport widened, moving project {} inline", id);
                self.show_on_desktop(doc, id, &html);
            }
        }

        if self.overlay.is_shown() {
            doc.set_class(Region::Overlay, ACTIVE_CLASS, false);
            return self.begin_close();
        }
        Vec::new()
    }

    fn show_on_desktop(&mut self, doc: &mut impl Document, id: u32, html: &str) {
        doc.set_inner_html(Region::Display, html);
        doc.set_displayed(Region::StaticClose, true);
        self.desktop = DesktopView::Project(id);
    }

    fn open_overlay(&mut self, doc: &mut impl Document) -> Vec<Task<Message>> {
        let generation = self.overlay.open();
        doc.set_class(Region::Overlay, HIDDEN_CLASS, false);
        doc.set_scroll_locked(true);
        vec![Task::NextFrame(Message::OverlayFrame { generation })]
    }

    fn begin_close(&mut self) -> Vec<Task<Message>> {
        match self.overlay.close() {
            Some(generation) => vec![Task::Delay(
                self.layout.overlay_transition(),
                Message::OverlayClosed { generation },
            )],
            None => Vec::new(),
        }
    }
}
