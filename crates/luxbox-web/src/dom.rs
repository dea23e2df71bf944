#![forbid(unsafe_code)]

//! The modal DOM surface.
//!
//! One [`ModalSurface`] is built at construction time and reused across
//! opens: a dialog root, a fading overlay, and the image container. The
//! loading indicator is created per open and removed once the image has
//! loaded. Visibility is carried by `aria-hidden` on the root, which is
//! also what `isOpen()` reports.

use luxbox_core::focus::focusable_selector;
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

/// Class of the dialog root.
pub const ROOT_CLASS: &str = "luxbox";
/// Class of the overlay that fades with the transform animation.
pub const OVERLAY_CLASS: &str = "luxbox__overlay";
/// Class of the container the enlarged image is inserted into.
pub const IMAGE_CLASS: &str = "luxbox__image";
/// Class of the per-open loading indicator.
pub const LOADER_CLASS: &str = "luxbox__loader";
/// Marker class on registered trigger anchors.
pub const TRIGGER_CLASS: &str = "luxbox-zoom";
/// Modifier class on the image container while a drag is active.
pub const DRAGGING_CLASS: &str = "luxbox__image--is-dragging";

fn create_div(document: &Document) -> Result<HtmlElement, JsValue> {
    document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(JsValue::from)
}

/// The overlay, image container, and dialog root, created once.
#[derive(Debug, Clone)]
pub struct ModalSurface {
    pub root: HtmlElement,
    pub overlay: HtmlElement,
    pub image_container: HtmlElement,
}

impl ModalSurface {
    /// Build the modal subtree and append it to `body`.
    pub fn create(document: &Document, label: &str) -> Result<Self, JsValue> {
        let root = create_div(document)?;
        root.set_attribute("role", "dialog")?;
        root.set_attribute("aria-hidden", "true")?;
        root.set_attribute("tabindex", "0")?;
        root.set_attribute("aria-label", label)?;
        root.class_list().add_1(ROOT_CLASS)?;

        let overlay = create_div(document)?;
        overlay.class_list().add_1(OVERLAY_CLASS)?;
        overlay.style().set_property("opacity", "0")?;
        root.append_child(&overlay)?;

        let image_container = create_div(document)?;
        image_container.class_list().add_1(IMAGE_CLASS)?;
        root.append_child(&image_container)?;

        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        body.append_child(&root)?;

        Ok(Self {
            root,
            overlay,
            image_container,
        })
    }

    /// Build the loading indicator for one open.
    pub fn create_loader(document: &Document, label: &str) -> Result<HtmlElement, JsValue> {
        let loader = create_div(document)?;
        loader.class_list().add_1(LOADER_CLASS)?;
        loader.set_attribute("role", "progressbar")?;
        loader.set_attribute("aria-label", label)?;
        Ok(loader)
    }

    pub fn set_visible(&self, visible: bool) -> Result<(), JsValue> {
        self.root
            .set_attribute("aria-hidden", if visible { "false" } else { "true" })
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.root.get_attribute("aria-hidden").as_deref() == Some("false")
    }

    /// Toggle the active-drag affordance on the image container.
    pub fn set_dragging(&self, active: bool) -> Result<(), JsValue> {
        if active {
            self.image_container.class_list().add_1(DRAGGING_CLASS)
        } else {
            self.image_container.class_list().remove_1(DRAGGING_CLASS)
        }
    }

    /// Focusable descendants of the modal, in document order, with the
    /// root itself first (it carries `tabindex="0"`).
    ///
    /// Candidates are filtered to visible elements: a non-zero offset box
    /// or at least one client rect.
    #[must_use]
    pub fn focusable_children(&self) -> Vec<HtmlElement> {
        let mut children = vec![self.root.clone()];
        let matches = match self.root.query_selector_all(&focusable_selector()) {
            Ok(list) => list,
            Err(err) => {
                warn!(?err, "focusable query failed");
                return children;
            }
        };
        for index in 0..matches.length() {
            let Some(node) = matches.get(index) else {
                continue;
            };
            let Ok(element) = node.dyn_into::<HtmlElement>() else {
                continue;
            };
            if is_visible_element(&element) {
                children.push(element);
            }
        }
        children
    }
}

fn is_visible_element(element: &HtmlElement) -> bool {
    element.offset_width() != 0
        || element.offset_height() != 0
        || element.get_client_rects().length() != 0
}

/// Read an element's bounding rectangle into core geometry.
#[must_use]
pub fn bounding_rect(element: &Element) -> luxbox_core::Rect {
    let rect = element.get_bounding_client_rect();
    luxbox_core::Rect::new(rect.left(), rect.top(), rect.width(), rect.height())
}
