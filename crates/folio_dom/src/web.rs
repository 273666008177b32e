//! Browser implementation of the document surface (wasm only).

use std::collections::HashMap;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, HtmlElement, Window};

use crate::document::{Document, Region, ACTIVE_CLASS};
use crate::error::DomError;
use crate::task::Task;

/// Element id of the project list container.
pub const LIST_ID: &str = "projectList";

/// Element id of the overlay close control.
pub const CLOSE_OVERLAY_ID: &str = "closeOverlay";

const ENTRY_CLASS: &str = "project-btn";
const ENTRY_ID_ATTR: &str = "data-project-id";

fn js_error(operation: &'static str, value: JsValue) -> DomError {
    DomError::Js {
        operation,
        message: format!("{:?}", value),
    }
}

/// The live page, bound to the static shell by element id.
pub struct WebDocument {
    window: Window,
    document: web_sys::Document,
    list: Element,
    regions: HashMap<Region, Element>,
    entries: Vec<(u32, Element)>,
}

impl WebDocument {
    /// Look up every shell element.
    ///
    /// The static close button is optional; all other regions and the list
    /// container are required.
    pub fn attach() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        let list = document
            .get_element_by_id(LIST_ID)
            .ok_or_else(|| DomError::missing(LIST_ID))?;

        let mut regions = HashMap::new();
        for &region in Region::all() {
            match document.get_element_by_id(region.element_id()) {
                Some(element) => {
                    regions.insert(region, element);
                }
                None if region == Region::StaticClose => {
                    log::debug!("No #{} in page, close affordance disabled", region.element_id());
                }
                None => return Err(DomError::missing(region.element_id())),
            }
        }

        Ok(Self {
            window,
            document,
            list,
            regions,
            entries: Vec::new(),
        })
    }

    /// The browser window.
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// The list container, for delegated click handling.
    pub fn list(&self) -> &Element {
        &self.list
    }

    /// Any element of the page by id.
    pub fn element(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    /// Text content of an element, e.g. an inline JSON data block.
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.element(id)?.text_content()
    }

    fn region(&self, region: Region) -> Option<&Element> {
        self.regions.get(&region)
    }

    fn build_entry(&self, id: u32, label: &str) -> Result<Element, JsValue> {
        let item = self.document.create_element("li")?;
        let button = self.document.create_element("button")?;
        button.set_class_name(ENTRY_CLASS);
        button.set_attribute(ENTRY_ID_ATTR, &id.to_string())?;
        button.set_text_content(Some(label));
        item.append_child(&button)?;
        self.list.append_child(&item)?;
        Ok(button)
    }
}

impl Document for WebDocument {
    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|width| width.as_f64())
            .unwrap_or(0.0)
    }

    fn append_entry(&mut self, id: u32, label: &str) {
        match self.build_entry(id, label) {
            Ok(button) => self.entries.push((id, button)),
            Err(e) => log::warn!("Failed to append list entry {}: {:?}", id, e),
        }
    }

    fn set_active_entry(&mut self, id: Option<u32>) {
        for (entry_id, button) in &self.entries {
            let active = Some(*entry_id) == id;
            if let Err(e) = button.class_list().toggle_with_force(ACTIVE_CLASS, active) {
                log::warn!("Failed to update entry {}: {:?}", entry_id, e);
            }
        }
    }

    fn set_inner_html(&mut self, region: Region, html: &str) {
        if let Some(element) = self.region(region) {
            element.set_inner_html(html);
        }
    }

    fn set_class(&mut self, region: Region, class: &str, present: bool) {
        let Some(element) = self.region(region) else {
            return;
        };
        let list = element.class_list();
        let result = if present {
            list.add_1(class)
        } else {
            list.remove_1(class)
        };
        if let Err(e) = result {
            log::warn!("Failed to toggle .{} on {:?}: {:?}", class, region, e);
        }
    }

    fn has_class(&self, region: Region, class: &str) -> bool {
        self.region(region)
            .is_some_and(|element| element.class_list().contains(class))
    }

    fn set_displayed(&mut self, region: Region, displayed: bool) {
        let Some(element) = self.region(region).and_then(|e| e.dyn_ref::<HtmlElement>()) else {
            return;
        };
        let value = if displayed { "block" } else { "none" };
        if let Err(e) = element.style().set_property("display", value) {
            log::warn!("Failed to set display on {:?}: {:?}", region, e);
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        let Some(body) = self.document.body() else {
            return;
        };
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if let Err(e) = result {
            log::warn!("Failed to update body overflow: {:?}", e);
        }
    }
}

/// Project id of the list entry an event originated from.
pub fn entry_id(event: &Event) -> Option<u32> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let entry = target.closest(&format!(".{}", ENTRY_CLASS)).ok()??;
    entry.get_attribute(ENTRY_ID_ATTR)?.parse().ok()
}

/// Attach a listener that lives for the rest of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| js_error("addEventListener", e))?;
    closure.forget();
    Ok(())
}

/// Hand a task to the browser; `deliver` runs with its message later.
pub fn schedule<M, F>(window: &Window, task: Task<M>, deliver: F) -> Result<(), DomError>
where
    M: 'static,
    F: FnOnce(M) + 'static,
{
    match task {
        Task::NextFrame(message) => {
            let callback = Closure::once_into_js(move || deliver(message));
            window
                .request_animation_frame(callback.unchecked_ref::<js_sys::Function>())
                .map_err(|e| js_error("requestAnimationFrame", e))?;
        }
        Task::Delay(delay, message) => {
            let callback = Closure::once_into_js(move || deliver(message));
            let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.unchecked_ref::<js_sys::Function>(),
                    millis,
                )
                .map_err(|e| js_error("setTimeout", e))?;
        }
    }
    Ok(())
}
