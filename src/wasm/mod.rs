//! WASM bindings for the reader

use crate::{FlipWidget, Page, PageId, Reader, ReaderError, Viewport};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

impl From<ReaderError> for JsValue {
    fn from(err: ReaderError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Page-flip widget living on the JS side.
///
/// Wraps any object exposing `mount(pagesJson, startPage)`, `flipNext()`,
/// `flipPrev()` and `turnToPage(index)`. Missing methods are skipped.
pub struct JsFlipWidget {
    handle: JsValue,
}

impl JsFlipWidget {
    pub fn new(handle: JsValue) -> Self {
        Self { handle }
    }

    /// Widget placeholder used until the page attaches the real one
    pub fn detached() -> Self {
        Self {
            handle: JsValue::UNDEFINED,
        }
    }

    fn call(&self, method: &str, args: &[JsValue]) {
        if self.handle.is_undefined() || self.handle.is_null() {
            return;
        }
        let Ok(value) = js_sys::Reflect::get(&self.handle, &JsValue::from_str(method)) else {
            return;
        };
        let Ok(function) = value.dyn_into::<js_sys::Function>() else {
            log::warn!("flip widget has no `{}` method", method);
            return;
        };
        let args: js_sys::Array = args.iter().collect();
        if let Err(err) = function.apply(&self.handle, &args) {
            log::warn!("flip widget `{}` threw: {:?}", method, err);
        }
    }
}

impl FlipWidget for JsFlipWidget {
    fn mount(&mut self, pages: &[Page], start: usize) {
        self.call(
            "mount",
            &[
                JsValue::from_str(&to_json(&pages)),
                JsValue::from_f64(start as f64),
            ],
        );
    }

    fn flip_next(&mut self) {
        self.call("flipNext", &[]);
    }

    fn flip_prev(&mut self) {
        self.call("flipPrev", &[]);
    }

    fn flip_to(&mut self, index: usize) {
        self.call("turnToPage", &[JsValue::from_f64(index as f64)]);
    }
}

/// WASM-exposed reader wrapper
#[wasm_bindgen]
pub struct WasmReader {
    reader: Reader<JsFlipWidget>,
}

#[wasm_bindgen]
impl WasmReader {
    /// Create a reader from JSON content and the current viewport
    #[wasm_bindgen(constructor)]
    pub fn new(content_json: &str, width: f32, height: f32) -> Result<WasmReader, JsValue> {
        let viewport = Viewport::new(width, height)?;
        let reader = Reader::from_json(content_json, viewport, JsFlipWidget::detached())?;
        Ok(Self { reader })
    }

    /// Attach the page-flip widget and mount the current pages on it
    #[wasm_bindgen(js_name = attachWidget)]
    pub fn attach_widget(&mut self, handle: JsValue) {
        self.reader.set_widget(JsFlipWidget::new(handle));
    }

    /// Track a viewport change. Returns true if the pages were rebuilt.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        match Viewport::new(width, height) {
            Ok(viewport) => self.reader.resize(viewport),
            Err(err) => {
                log::warn!("ignoring resize: {}", err);
                false
            }
        }
    }

    #[wasm_bindgen(js_name = nextPage)]
    pub fn next_page(&mut self) -> bool {
        self.reader.advance()
    }

    #[wasm_bindgen(js_name = prevPage)]
    pub fn prev_page(&mut self) -> bool {
        self.reader.retreat()
    }

    #[wasm_bindgen(js_name = jumpTo)]
    pub fn jump_to(&mut self, page: usize) -> bool {
        self.reader.jump_to(PageId(page))
    }

    #[wasm_bindgen(js_name = jumpToTitle)]
    pub fn jump_to_title(&mut self, title: &str) -> bool {
        self.reader.jump_to_title(title)
    }

    /// Forward a `keydown` event's `key`
    #[wasm_bindgen(js_name = handleKey)]
    pub fn handle_key(&mut self, key: &str) -> bool {
        self.reader.handle_key(key)
    }

    /// Forward the widget's flip event
    #[wasm_bindgen(js_name = onFlip)]
    pub fn on_flip(&mut self, index: usize) {
        self.reader.on_flip(index);
    }

    #[wasm_bindgen(js_name = getPageCount)]
    pub fn get_page_count(&self) -> usize {
        self.reader.page_count()
    }

    /// Pages as JSON
    #[wasm_bindgen(js_name = getPages)]
    pub fn get_pages(&self) -> String {
        to_json(&self.reader.pages())
    }

    /// Navigation UI state as JSON (1-based page numbers)
    #[wasm_bindgen(js_name = getNavigation)]
    pub fn get_navigation(&self) -> String {
        to_json(&self.reader.indicator())
    }

    #[wasm_bindgen(js_name = getSpreadLabel)]
    pub fn get_spread_label(&self) -> String {
        self.reader.indicator().spread_label()
    }

    /// Table of contents as JSON
    #[wasm_bindgen(js_name = getContents)]
    pub fn get_contents(&self) -> String {
        to_json(&self.reader.contents().entries())
    }

    /// Widget presentation settings as JSON
    #[wasm_bindgen(js_name = getSettings)]
    pub fn get_settings(&self) -> String {
        to_json(&self.reader.settings())
    }

    /// Active size profile as JSON
    #[wasm_bindgen(js_name = getProfile)]
    pub fn get_profile(&self) -> String {
        to_json(self.reader.profile())
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        log::warn!("failed to encode for JS: {}", err);
        "null".to_string()
    })
}
