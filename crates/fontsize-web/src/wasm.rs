#![forbid(unsafe_code)]

use std::cell::RefCell;
use std::rc::Rc;

use fontsize_core::{ClassTarget, FontSizeController, Step};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::{MountError, PageIds, resolve_elements};

/// The content region, read and written through its `class` attribute.
#[derive(Debug)]
struct ElementTarget(Element);

impl ClassTarget for ElementTarget {
    fn class_attribute(&self) -> String {
        self.0.class_name()
    }

    fn set_class_attribute(&mut self, value: &str) {
        self.0.set_class_name(value);
    }
}

type SharedController = Rc<RefCell<FontSizeController<ElementTarget>>>;

struct ClickListener {
    button: Element,
    callback: Closure<dyn FnMut()>,
}

impl ClickListener {
    fn attach(
        button: Element,
        controller: &SharedController,
        step: fn(&mut FontSizeController<ElementTarget>) -> Step,
    ) -> Result<Self, MountError> {
        let controller = Rc::clone(controller);
        let callback = Closure::<dyn FnMut()>::new(move || {
            step(&mut controller.borrow_mut());
        });
        button
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
            .map_err(|err| MountError::Listener(format!("{err:?}")))?;
        Ok(Self { button, callback })
    }

    fn detach(&self) {
        // Removal only fails for a callback that was never added.
        let _ = self
            .button
            .remove_event_listener_with_callback("click", self.callback.as_ref().unchecked_ref());
    }
}

/// Font size control mounted on the current page.
///
/// Keep the returned object alive for as long as the buttons should work;
/// dropping it (or calling `destroy`) unregisters both click listeners.
#[wasm_bindgen]
pub struct FontSizeWeb {
    controller: SharedController,
    listeners: Vec<ClickListener>,
}

#[wasm_bindgen]
impl FontSizeWeb {
    /// Mount on `#main`, `#increaseFontSizeButton` and `#decreaseFontSizeButton`.
    pub fn mount() -> Result<FontSizeWeb, JsValue> {
        Self::mount_ids(&PageIds::default()).map_err(to_js_error)
    }

    /// Mount on custom element ids.
    #[wasm_bindgen(js_name = mountWith)]
    pub fn mount_with(
        target_id: &str,
        increase_id: &str,
        decrease_id: &str,
    ) -> Result<FontSizeWeb, JsValue> {
        let ids = PageIds {
            target: target_id.to_owned(),
            increase: increase_id.to_owned(),
            decrease: decrease_id.to_owned(),
        };
        Self::mount_ids(&ids).map_err(to_js_error)
    }

    /// Step one tier up. Returns `false` when already at the largest tier.
    pub fn increase(&self) -> bool {
        self.controller.borrow_mut().increase().moved()
    }

    /// Step one tier down. Returns `false` when already at the smallest tier.
    pub fn decrease(&self) -> bool {
        self.controller.borrow_mut().decrease().moved()
    }

    pub fn index(&self) -> usize {
        self.controller.borrow().index()
    }

    /// Class label of the current tier.
    #[wasm_bindgen(js_name = tierClass)]
    pub fn tier_class(&self) -> String {
        self.controller.borrow().tier().class_name().to_owned()
    }

    /// Unregister the click listeners. The element keeps its current tier.
    pub fn destroy(&mut self) {
        for listener in self.listeners.drain(..) {
            listener.detach();
        }
    }
}

impl FontSizeWeb {
    fn mount_ids(ids: &PageIds) -> Result<Self, MountError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(MountError::NoDocument)?;
        let [target, increase, decrease] =
            resolve_elements(ids, |id| document.get_element_by_id(id))?;

        let controller: SharedController = Rc::new(RefCell::new(FontSizeController::shipped(
            ElementTarget(target),
        )));
        let mut mounted = Self {
            controller,
            listeners: Vec::with_capacity(2),
        };
        mounted.listeners.push(ClickListener::attach(
            increase,
            &mounted.controller,
            FontSizeController::increase,
        )?);
        mounted.listeners.push(ClickListener::attach(
            decrease,
            &mounted.controller,
            FontSizeController::decrease,
        )?);
        fontsize_core::info!(
            target = %ids.target,
            index = mounted.index(),
            "font size control mounted"
        );
        Ok(mounted)
    }
}

impl Drop for FontSizeWeb {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn to_js_error(err: MountError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}
