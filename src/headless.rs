//! Headless host: the controller driving an in-memory document.
//!
//! Used by the native driver binary and by tests. Deferred tasks go into a
//! virtual-time queue that is pumped explicitly.

use std::time::Duration;

use folio_dom::{MemoryDocument, Region, TaskQueue};

use crate::catalog::Catalog;
use crate::config::LayoutConfig;
use crate::controller::ViewController;
use crate::message::Message;
use crate::render::render_welcome;

/// A mounted controller with its document and task queue.
#[derive(Debug)]
pub struct Headless {
    /// The view controller
    pub controller: ViewController,
    /// The in-memory page
    pub doc: MemoryDocument,
    queue: TaskQueue<Message>,
}

impl Headless {
    /// Build the static page shell at `width` and mount the list.
    pub fn new(catalog: Catalog, layout: LayoutConfig, width: f64) -> Self {
        let mut doc = MemoryDocument::new(width)
            .with_inner_html(Region::Display, render_welcome())
            .with_hidden(Region::StaticClose);
        let controller = ViewController::new(catalog, layout);
        controller.mount(&mut doc);

        Self {
            controller,
            doc,
            queue: TaskQueue::new(),
        }
    }

    /// Deliver a message and queue the tasks it produced.
    pub fn send(&mut self, message: Message) {
        let tasks = self.controller.update(&mut self.doc, message);
        self.queue.extend(tasks);
    }

    /// Run one animation frame.
    pub fn frame(&mut self) {
        for message in self.queue.run_frame() {
            self.send(message);
        }
    }

    /// Advance virtual time, running a frame first as a browser would.
    pub fn wait(&mut self, by: Duration) {
        self.frame();
        for message in self.queue.advance(by) {
            self.send(message);
        }
    }

    /// Change the viewport width and deliver the resize event.
    pub fn resize(&mut self, width: f64) {
        self.doc.set_viewport_width(width);
        self.send(Message::ViewportResized);
    }

    /// Virtual time elapsed so far.
    pub fn now(&self) -> Duration {
        self.queue.now()
    }

    /// Tasks not yet delivered.
    pub fn pending(&self) -> usize {
        self.queue.pending()
    }
}
