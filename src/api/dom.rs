use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::core::Vec2;
use crate::domain::{ContentRect, Viewport};
use crate::systems::geometry::GeometrySource;

/// Measures every element matching a CSS selector
#[derive(Clone, Debug)]
pub struct DomGeometry {
    selector: String,
}

impl DomGeometry {
    pub fn new(selector: &str) -> Self {
        Self { selector: selector.to_string() }
    }
}

impl GeometrySource for DomGeometry {
    /// Bounding client rects shifted by the window scroll (document space).
    /// Any missing piece of the DOM yields an empty set.
    fn content_rects(&self) -> Vec<ContentRect> {
        let Some(window) = web_sys::window() else {
            return Vec::new();
        };
        let Some(document) = window.document() else {
            return Vec::new();
        };
        let Ok(nodes) = document.query_selector_all(&self.selector) else {
            console_warn!("invalid content selector '{}'", self.selector);
            return Vec::new();
        };

        let scroll_x = window.scroll_x().unwrap_or(0.0) as f32;
        let scroll_y = window.scroll_y().unwrap_or(0.0) as f32;

        let mut rects = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let r = element.get_bounding_client_rect();
            rects.push(ContentRect::new(
                r.left() as f32 + scroll_x,
                r.top() as f32 + scroll_y,
                r.width() as f32,
                r.height() as f32,
            ));
        }
        rects
    }
}

/// Current window size and scroll offset (zeros without a window)
pub fn window_viewport() -> Viewport {
    let Some(window) = web_sys::window() else {
        return Viewport::default();
    };
    let dimension = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };

    let mut viewport = Viewport::new(dimension(window.inner_width()), dimension(window.inner_height()));
    viewport.scroll = Vec2::new(
        window.scroll_x().unwrap_or(0.0) as f32,
        window.scroll_y().unwrap_or(0.0) as f32,
    );
    viewport
}
