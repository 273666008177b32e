use std::cell::RefCell;
use std::rc::Rc;

use folio_dom::web::{self, WebDocument};
use folio_dom::{DomError, Region};
use wasm_bindgen::prelude::*;

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::constants::INLINE_CATALOG_ID;
use crate::controller::ViewController;
use crate::message::Message;

struct App {
    controller: ViewController,
    doc: WebDocument,
}

type SharedApp = Rc<RefCell<App>>;

#[wasm_bindgen(start)]
pub fn start() {
    let config = AppConfig::load();
    folio_dom::init_logging(config.log_level.to_level_filter());
    log::info!("{} starting", config.app_name);

    if let Err(e) = run_app(config) {
        log::error!("Failed to start: {}", e);
    }
}

fn run_app(config: AppConfig) -> Result<(), DomError> {
    let mut doc = WebDocument::attach()?;
    let controller = ViewController::new(load_catalog(&doc), config.layout);
    controller.mount(&mut doc);

    let list = doc.list().clone();
    let close_overlay = doc.element(web::CLOSE_OVERLAY_ID);
    let static_close = doc.element(Region::StaticClose.element_id());
    let window = doc.window().clone();

    let app: SharedApp = Rc::new(RefCell::new(App { controller, doc }));

    let handle = Rc::clone(&app);
    web::listen(&list, "click", move |event| {
        if let Some(id) = web::entry_id(&event) {
            dispatch(&handle, Message::SelectProject(id));
        }
    })?;

    if let Some(button) = close_overlay {
        let handle = Rc::clone(&app);
        web::listen(&button, "click", move |_| dispatch(&handle, Message::CloseOverlay))?;
    }

    if let Some(button) = static_close {
        let handle = Rc::clone(&app);
        web::listen(&button, "click", move |_| dispatch(&handle, Message::ResetToHome))?;
    }

    let handle = Rc::clone(&app);
    web::listen(&window, "resize", move |_| dispatch(&handle, Message::ViewportResized))?;

    Ok(())
}

fn load_catalog(doc: &WebDocument) -> Catalog {
    let Some(json) = doc.text_of(INLINE_CATALOG_ID) else {
        return Catalog::builtin();
    };
    match Catalog::from_json(&json) {
        Ok(catalog) => {
            log::info!("Using inline catalog with {} projects", catalog.len());
            catalog
        }
        Err(e) => {
            log::warn!("Ignoring inline catalog: {}", e);
            Catalog::builtin()
        }
    }
}

fn dispatch(app: &SharedApp, message: Message) {
    let (tasks, window) = {
        let mut guard = app.borrow_mut();
        let App { controller, doc } = &mut *guard;
        (controller.update(doc, message), doc.window().clone())
    };

    for task in tasks {
        let handle = Rc::clone(app);
        if let Err(e) = web::schedule(&window, task, move |message| dispatch(&handle, message)) {
            log::warn!("Failed to schedule task: {}", e);
        }
    }
}
