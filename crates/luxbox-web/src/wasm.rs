#![forbid(unsafe_code)]

//! The exported lightbox controller.
//!
//! [`Luxbox`] owns one modal surface, one state machine, one swipe
//! tracker, and one geometry snapshot per open. All mutation happens on
//! the single UI event loop; handlers run to completion, so a
//! `RefCell` around the shared state is enough. Event closures capture a
//! `Weak` reference so a dropped controller does not keep itself alive
//! through the DOM.
//!
//! Listener lifecycle follows a scoped-acquisition discipline: `open`
//! acquires the full runtime listener set, and every close path releases
//! exactly that set through one unbind routine. The non-image no-op path
//! returns before anything is acquired. The close animation's
//! `transitionend` subscription is one-shot (`once: true`) and stored, not
//! leaked, so exactly one cleanup runs per close.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use js_sys::Function;
use luxbox_core::config::LightboxConfig;
use luxbox_core::focus::{TabDirection, wrap_target};
use luxbox_core::geometry::{self, TransformDelta};
use luxbox_core::history::HistoryMarker;
use luxbox_core::state::ModalStateMachine;
use luxbox_core::swipe::{SwipeConfig, SwipeOutcome, SwipeTracker};
use luxbox_core::target::is_image_target;
use luxbox_core::{LightboxError, LightboxEvent};
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use web_sys::{
    AddEventListenerOptions, CustomEvent, Document, Event, FocusOptions, HtmlAnchorElement,
    HtmlElement, HtmlImageElement, KeyboardEvent, MouseEvent, PopStateEvent, TouchEvent, Window,
};

use crate::dom::{self, ModalSurface};
use crate::options;

// ---------------------------------------------------------------------------
// Shared controller state
// ---------------------------------------------------------------------------

struct Inner {
    window: Window,
    document: Document,
    config: LightboxConfig,
    machine: ModalStateMachine,
    swipe: SwipeTracker,
    surface: ModalSurface,
    /// Geometry of the current open; recomputed every time, never cached.
    delta: Option<TransformDelta>,
    /// Effective duration for the current open, reduced-motion applied.
    open_duration_ms: u32,
    /// Element focused immediately before open, restored on close.
    last_focus: Option<HtmlElement>,
    image: Option<HtmlImageElement>,
    loader: Option<HtmlElement>,
    handlers: Option<RuntimeHandlers>,
    onload: Option<Closure<dyn FnMut()>>,
    transition_end: Option<Closure<dyn FnMut(Event)>>,
    /// Shared activation handler attached to every registered trigger.
    trigger_handler: Option<Closure<dyn FnMut(MouseEvent)>>,
}

/// Listeners acquired on open and released on close, as one unit.
struct RuntimeHandlers {
    keydown: Closure<dyn FnMut(KeyboardEvent)>,
    wheel: Option<Closure<dyn FnMut(Event)>>,
    popstate: Closure<dyn FnMut(PopStateEvent)>,
    click: Closure<dyn FnMut(MouseEvent)>,
    touch: Option<TouchHandlers>,
}

struct TouchHandlers {
    start: Closure<dyn FnMut(TouchEvent)>,
    movement: Closure<dyn FnMut(TouchEvent)>,
    end: Closure<dyn FnMut(TouchEvent)>,
}

fn usage_error(err: LightboxError) -> JsValue {
    JsError::new(&err.to_string()).into()
}

fn stringify_options(options: &JsValue) -> Result<String, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok("{}".to_string());
    }
    let json = String::from(js_sys::JSON::stringify(options)?);
    if json == "undefined" {
        Ok("{}".to_string())
    } else {
        Ok(json)
    }
}

fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media("(prefers-reduced-motion)")
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

/// Touch capability is probed once per bind, not per event.
fn touch_capable(window: &Window) -> bool {
    js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("ontouchstart")).unwrap_or(false)
}

fn first_touch_y(event: &TouchEvent) -> Option<f64> {
    event.touches().get(0).map(|touch| touch.page_y() as f64)
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Image lightbox widget.
///
/// Construction merges the option object over the defaults, builds the
/// modal surface, and registers every element currently matching the
/// configured selector. The DOM is not re-scanned afterward; call
/// `add` for triggers inserted later.
#[wasm_bindgen]
pub struct Luxbox {
    inner: Rc<RefCell<Inner>>,
}

#[wasm_bindgen]
impl Luxbox {
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<Luxbox, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let json = stringify_options(&options)?;
        let config = options::merged_config(&json)
            .map_err(|err| JsValue::from_str(&format!("invalid options: {err}")))?;

        let surface = ModalSurface::create(&document, &config.lightbox_label)?;
        let swipe = SwipeTracker::new(SwipeConfig {
            threshold: config.threshold,
            swipe_close: config.swipe_close,
        });
        let selector = config.selector.clone();

        let inner = Rc::new(RefCell::new(Inner {
            window,
            document: document.clone(),
            config,
            machine: ModalStateMachine::new(),
            swipe,
            surface,
            delta: None,
            open_duration_ms: 0,
            last_focus: None,
            image: None,
            loader: None,
            handlers: None,
            onload: None,
            transition_end: None,
            trigger_handler: None,
        }));

        let weak = Rc::downgrade(&inner);
        let trigger = Closure::wrap(Box::new(move |event: MouseEvent| {
            event.prevent_default();
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let Some(target) = event
                .current_target()
                .and_then(|target| target.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            if let Err(err) = open_impl(&inner, &target) {
                warn!(?err, "open from trigger failed");
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        inner.borrow_mut().trigger_handler = Some(trigger);

        let luxbox = Luxbox { inner };
        let triggers = document.query_selector_all(&selector)?;
        for index in 0..triggers.length() {
            if let Some(element) = triggers
                .get(index)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            {
                luxbox.add(element);
            }
        }
        Ok(luxbox)
    }

    /// Open the modal for a trigger anchor.
    ///
    /// Throws the "already open" usage error unless the modal is fully
    /// closed. An href that is not an image is a defined no-op.
    pub fn open(&self, element: HtmlElement) -> Result<(), JsValue> {
        open_impl(&self.inner, &element)
    }

    /// Close the modal.
    ///
    /// Throws the "already closed" usage error unless the modal is open
    /// or still opening.
    pub fn close(&self) -> Result<(), JsValue> {
        close_impl(&self.inner)
    }

    /// Register a trigger. Idempotent.
    pub fn add(&self, element: HtmlElement) {
        add_impl(&self.inner, &element);
    }

    /// Unregister a trigger. Idempotent.
    pub fn remove(&self, element: HtmlElement) {
        remove_impl(&self.inner, &element);
    }

    /// Close if open, unregister every trigger, and announce `destroy`.
    pub fn destroy(&self) -> Result<(), JsValue> {
        if self.is_open() {
            close_impl(&self.inner)?;
        }
        let document = self.inner.borrow().document.clone();
        let triggers = document.query_selector_all(&format!(".{}", dom::TRIGGER_CLASS))?;
        for index in 0..triggers.length() {
            if let Some(element) = triggers
                .get(index)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            {
                remove_impl(&self.inner, &element);
            }
        }
        dispatch(&self.inner, LightboxEvent::Destroy);
        Ok(())
    }

    /// Whether the modal is currently visible.
    #[wasm_bindgen(js_name = isOpen)]
    pub fn is_open(&self) -> bool {
        self.inner.borrow().surface.is_visible()
    }

    /// Subscribe to a notification (`open`, `close`, `destroy`).
    pub fn on(&self, event: &str, callback: &Function) -> Result<(), JsValue> {
        if LightboxEvent::from_name(event).is_none() {
            debug!(event, "subscribing to an unknown notification name");
        }
        self.inner
            .borrow()
            .surface
            .root
            .add_event_listener_with_callback(event, callback)
    }

    /// Unsubscribe a previously registered callback.
    pub fn off(&self, event: &str, callback: &Function) -> Result<(), JsValue> {
        self.inner
            .borrow()
            .surface
            .root
            .remove_event_listener_with_callback(event, callback)
    }
}

// ---------------------------------------------------------------------------
// Trigger registry
// ---------------------------------------------------------------------------

fn add_impl(inner: &Rc<RefCell<Inner>>, element: &HtmlElement) {
    if element.class_list().contains(dom::TRIGGER_CLASS) {
        return;
    }
    if let Err(err) = element.class_list().add_1(dom::TRIGGER_CLASS) {
        warn!(?err, "could not mark trigger");
        return;
    }
    let guard = inner.borrow();
    if let Some(handler) = guard.trigger_handler.as_ref()
        && let Err(err) =
            element.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
    {
        warn!(?err, "could not bind trigger");
    }
}

fn remove_impl(inner: &Rc<RefCell<Inner>>, element: &HtmlElement) {
    if !element.class_list().contains(dom::TRIGGER_CLASS) {
        return;
    }
    if let Err(err) = element.class_list().remove_1(dom::TRIGGER_CLASS) {
        warn!(?err, "could not unmark trigger");
    }
    let guard = inner.borrow();
    if let Some(handler) = guard.trigger_handler.as_ref()
        && let Err(err) =
            element.remove_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
    {
        warn!(?err, "could not unbind trigger");
    }
}

// ---------------------------------------------------------------------------
// Open
// ---------------------------------------------------------------------------

fn open_impl(inner: &Rc<RefCell<Inner>>, element: &HtmlElement) -> Result<(), JsValue> {
    let root = {
        let mut guard = inner.borrow_mut();
        guard.machine.request_open().map_err(usage_error)?;

        let href = element
            .dyn_ref::<HtmlAnchorElement>()
            .map(HtmlAnchorElement::href)
            .or_else(|| element.get_attribute("href"))
            .unwrap_or_default();
        if !is_image_target(&href) {
            // Defined no-op: nothing has been acquired yet.
            debug!(%href, "trigger target is not an image");
            guard.machine.abort_open();
            return Ok(());
        }

        guard.last_focus = guard
            .document
            .active_element()
            .and_then(|active| active.dyn_into::<HtmlElement>().ok());
        guard.open_duration_ms = guard
            .config
            .effective_duration_ms(prefers_reduced_motion(&guard.window));

        // One history entry so native back-navigation maps to close.
        let state = js_sys::JSON::parse(HistoryMarker::to_json())?;
        let url = guard.window.location().href()?;
        guard
            .window
            .history()?
            .push_state_with_url(&state, "Image", Some(&url))?;

        bind_events(inner, &mut guard)?;

        let loader =
            ModalSurface::create_loader(&guard.document, &guard.config.loading_indicator_label)?;
        guard.surface.root.append_child(&loader)?;
        guard.loader = Some(loader);

        guard.surface.set_visible(true)?;
        begin_image_load(inner, &mut guard, element, &href)?;
        guard.surface.root.clone()
    };
    root.focus()?;
    dispatch(inner, LightboxEvent::Open);
    Ok(())
}

fn begin_image_load(
    inner: &Rc<RefCell<Inner>>,
    guard: &mut Inner,
    element: &HtmlElement,
    href: &str,
) -> Result<(), JsValue> {
    let image = guard
        .document
        .create_element("img")?
        .dyn_into::<HtmlImageElement>()
        .map_err(JsValue::from)?;

    let alt = element
        .query_selector("img")
        .ok()
        .flatten()
        .and_then(|thumb| thumb.dyn_into::<HtmlImageElement>().ok())
        .map(|thumb| thumb.alt())
        .unwrap_or_default();
    image.set_alt(&alt);
    image.set_src(href);

    // Captured now: the thumbnail may move before the image arrives, but
    // the animation must start from where the user clicked.
    let thumbnail = dom::bounding_rect(element);

    guard
        .surface
        .image_container
        .style()
        .set_property("opacity", "0")?;
    guard.surface.image_container.append_child(&image)?;

    let weak = Rc::downgrade(inner);
    let onload = Closure::wrap(Box::new(move || {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        if let Err(err) = finish_image_load(&inner, thumbnail) {
            warn!(?err, "enter animation setup failed");
        }
    }) as Box<dyn FnMut()>);
    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    guard.onload = Some(onload);
    guard.image = Some(image);
    Ok(())
}

/// Image loaded: measure, derive the transform delta, and run the
/// two-phase enter animation.
fn finish_image_load(inner: &Rc<RefCell<Inner>>, thumbnail: luxbox_core::Rect) -> Result<(), JsValue> {
    let (surface, image, delta, duration_ms, easing) = {
        let mut guard = inner.borrow_mut();
        let Some(image) = guard.image.clone() else {
            return Ok(());
        };
        if let Some(loader) = guard.loader.take() {
            loader.remove();
        }
        let full = dom::bounding_rect(&image);
        let delta = TransformDelta::between(thumbnail, full);
        guard.delta = Some(delta);
        guard
            .surface
            .image_container
            .style()
            .set_property("opacity", "1")?;
        guard.machine.mark_open();
        (
            guard.surface.clone(),
            image,
            delta,
            guard.open_duration_ms,
            guard.config.transition_timing_function.clone(),
        )
    };
    schedule_enter_animation(&surface, &image, delta, duration_ms, &easing)
}

/// Phase A snaps the full image onto the thumbnail footprint inside one
/// animation-frame callback (zero-duration, so it commits before paint);
/// phase B clears the transform one frame later with the configured
/// timing while the overlay fades in.
fn schedule_enter_animation(
    surface: &ModalSurface,
    image: &HtmlImageElement,
    delta: TransformDelta,
    duration_ms: u32,
    easing: &str,
) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let image = image.clone();
    let overlay = surface.overlay.clone();
    let transform_transition = geometry::transition_css("transform", duration_ms, easing);
    let opacity_transition = geometry::transition_css("opacity", duration_ms, easing);

    let phase_a = Closure::once_into_js(move || {
        let style = image.style();
        let _ = style.set_property("transform", &delta.to_css());
        let _ = style.set_property("transition", geometry::SNAP_TRANSITION);

        let phase_b = Closure::once_into_js(move || {
            let style = image.style();
            let _ = style.remove_property("transform");
            let _ = style.set_property("transition", &transform_transition);
            let _ = overlay.style().set_property("opacity", "1");
            let _ = overlay.style().set_property("transition", &opacity_transition);
        });
        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(phase_b.unchecked_ref());
        }
    });
    window.request_animation_frame(phase_a.unchecked_ref())?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Close
// ---------------------------------------------------------------------------

fn close_impl(inner: &Rc<RefCell<Inner>>) -> Result<(), JsValue> {
    let (window, surface, image, delta, duration_ms, easing, loader) = {
        let mut guard = inner.borrow_mut();
        guard.machine.request_close().map_err(usage_error)?;

        unbind_events(&mut guard);
        guard.swipe.reset();
        let _ = guard
            .surface
            .image_container
            .style()
            .set_property("transform", geometry::DRAG_IDENTITY);
        let _ = guard.surface.set_dragging(false);
        // A still-pending load must not resurrect the modal. The onload
        // property is cleared first so a late load cannot invoke the
        // dropped shim.
        if let Some(image) = guard.image.as_ref() {
            image.set_onload(None);
        }
        guard.onload = None;
        (
            guard.window.clone(),
            guard.surface.clone(),
            guard.image.clone(),
            guard.delta.take(),
            guard.open_duration_ms,
            guard.config.transition_timing_function.clone(),
            guard.loader.take(),
        )
    };

    if let Some(loader) = loader {
        loader.remove();
    }

    // Consume our history entry unless back-navigation already did.
    let history = window.history()?;
    let state = history.state()?;
    if !state.is_null()
        && !state.is_undefined()
        && let Ok(json) = js_sys::JSON::stringify(&state)
        && HistoryMarker::matches_json(&String::from(json))
    {
        let _ = history.back();
    }

    dispatch(inner, LightboxEvent::Close);

    match (image, delta) {
        (Some(image), Some(delta)) => {
            register_transition_end(inner, &image)?;
            schedule_exit_animation(&window, &surface, &image, delta, duration_ms, &easing)?;
        }
        _ => {
            // The image never finished loading; nothing to animate.
            finish_close(inner);
        }
    }
    Ok(())
}

/// One-shot subscription: exactly one `transitionend` completes a close,
/// no matter how many properties transition.
fn register_transition_end(
    inner: &Rc<RefCell<Inner>>,
    image: &HtmlImageElement,
) -> Result<(), JsValue> {
    let weak = Rc::downgrade(inner);
    let handler = Closure::wrap(Box::new(move |_event: Event| {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        finish_close(&inner);
    }) as Box<dyn FnMut(Event)>);
    let listener_options = AddEventListenerOptions::new();
    listener_options.set_once(true);
    image.add_event_listener_with_callback_and_add_event_listener_options(
        "transitionend",
        handler.as_ref().unchecked_ref(),
        &listener_options,
    )?;
    inner.borrow_mut().transition_end = Some(handler);
    Ok(())
}

fn schedule_exit_animation(
    window: &Window,
    surface: &ModalSurface,
    image: &HtmlImageElement,
    delta: TransformDelta,
    duration_ms: u32,
    easing: &str,
) -> Result<(), JsValue> {
    let image = image.clone();
    let overlay = surface.overlay.clone();
    let transform_transition = geometry::transition_css("transform", duration_ms, easing);
    let opacity_transition = geometry::transition_css("opacity", duration_ms, easing);

    let frame = Closure::once_into_js(move || {
        let style = image.style();
        let _ = style.set_property("transition", &transform_transition);
        let _ = style.set_property("transform", &delta.to_css());
        let _ = overlay.style().set_property("opacity", "0");
        let _ = overlay.style().set_property("transition", &opacity_transition);
    });
    window.request_animation_frame(frame.unchecked_ref())?;
    Ok(())
}

/// Final close step: restore focus without scrolling, hide the modal,
/// and detach the enlarged image.
///
/// Focus restoration fires synchronous focus events, and a host handler
/// on those may call back into the public API, so no borrow is held
/// across the DOM work.
fn finish_close(inner: &Rc<RefCell<Inner>>) {
    let (last_focus, surface, image) = {
        let mut guard = inner.borrow_mut();
        guard.transition_end = None;
        (
            guard.last_focus.take(),
            guard.surface.clone(),
            guard.image.take(),
        )
    };
    if let Some(last) = last_focus {
        let focus_options = FocusOptions::new();
        focus_options.set_prevent_scroll(true);
        let _ = last.focus_with_options(&focus_options);
    }
    let _ = surface.set_visible(false);
    if let Some(image) = image {
        image.remove();
    }
    inner.borrow_mut().machine.mark_closed();
}

// ---------------------------------------------------------------------------
// Runtime listeners
// ---------------------------------------------------------------------------

fn bind_events(inner: &Rc<RefCell<Inner>>, guard: &mut Inner) -> Result<(), JsValue> {
    let weak = Rc::downgrade(inner);

    let keydown = {
        let weak = weak.clone();
        Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if let Some(inner) = weak.upgrade() {
                handle_keydown(&inner, &event);
            }
        }) as Box<dyn FnMut(KeyboardEvent)>)
    };
    guard
        .window
        .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;

    let wheel = if guard.config.scroll_close {
        let weak = weak.clone();
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            if let Some(inner) = weak.upgrade()
                && let Err(err) = close_impl(&inner)
            {
                warn!(?err, "close on scroll failed");
            }
        }) as Box<dyn FnMut(Event)>);
        guard
            .window
            .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref())?;
        Some(closure)
    } else {
        None
    };

    let popstate = {
        let weak = weak.clone();
        Closure::wrap(Box::new(move |_event: PopStateEvent| {
            if let Some(inner) = weak.upgrade()
                && let Err(err) = close_impl(&inner)
            {
                warn!(?err, "close on back-navigation failed");
            }
        }) as Box<dyn FnMut(PopStateEvent)>)
    };
    guard
        .window
        .add_event_listener_with_callback("popstate", popstate.as_ref().unchecked_ref())?;

    let click = {
        let weak = weak.clone();
        Closure::wrap(Box::new(move |event: MouseEvent| {
            if let Some(inner) = weak.upgrade() {
                // A tap that ended a swipe is not a close request.
                let dragging = inner.borrow().swipe.was_dragging();
                if !dragging && let Err(err) = close_impl(&inner) {
                    warn!(?err, "close on click failed");
                }
            }
            event.stop_propagation();
        }) as Box<dyn FnMut(MouseEvent)>)
    };
    guard
        .surface
        .root
        .add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;

    let touch = if touch_capable(&guard.window) {
        Some(bind_touch_events(&weak, guard)?)
    } else {
        None
    };

    guard.handlers = Some(RuntimeHandlers {
        keydown,
        wheel,
        popstate,
        click,
        touch,
    });
    Ok(())
}

fn bind_touch_events(weak: &Weak<RefCell<Inner>>, guard: &mut Inner) -> Result<TouchHandlers, JsValue> {
    let start = {
        let weak = weak.clone();
        Closure::wrap(Box::new(move |event: TouchEvent| {
            event.stop_propagation();
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let Some(y) = first_touch_y(&event) else {
                return;
            };
            let surface = {
                let mut guard = inner.borrow_mut();
                guard.swipe.touch_start(y);
                guard.surface.clone()
            };
            let _ = surface.set_dragging(true);
        }) as Box<dyn FnMut(TouchEvent)>)
    };
    guard
        .surface
        .root
        .add_event_listener_with_callback("touchstart", start.as_ref().unchecked_ref())?;

    let movement = {
        let weak = weak.clone();
        Closure::wrap(Box::new(move |event: TouchEvent| {
            event.stop_propagation();
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let Some(y) = first_touch_y(&event) else {
                return;
            };
            let mut guard = inner.borrow_mut();
            if guard.swipe.is_pointer_down() {
                event.prevent_default();
                if let Some(offset) = guard.swipe.touch_move(y) {
                    let _ = guard
                        .surface
                        .image_container
                        .style()
                        .set_property("transform", &geometry::drag_css(offset));
                }
            }
        }) as Box<dyn FnMut(TouchEvent)>)
    };
    guard
        .surface
        .root
        .add_event_listener_with_callback("touchmove", movement.as_ref().unchecked_ref())?;

    let end = {
        let weak = weak.clone();
        Closure::wrap(Box::new(move |event: TouchEvent| {
            event.stop_propagation();
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let (outcome, surface) = {
                let mut guard = inner.borrow_mut();
                (guard.swipe.touch_end(), guard.surface.clone())
            };
            let _ = surface.set_dragging(false);
            let _ = surface
                .image_container
                .style()
                .set_property("transform", geometry::DRAG_IDENTITY);
            if outcome == SwipeOutcome::CommitClose
                && let Err(err) = close_impl(&inner)
            {
                warn!(?err, "close on swipe failed");
            }
        }) as Box<dyn FnMut(TouchEvent)>)
    };
    guard
        .surface
        .root
        .add_event_listener_with_callback("touchend", end.as_ref().unchecked_ref())?;

    Ok(TouchHandlers {
        start,
        movement,
        end,
    })
}

/// Release exactly the listener set `bind_events` acquired.
fn unbind_events(guard: &mut Inner) {
    let Some(handlers) = guard.handlers.take() else {
        return;
    };
    let _ = guard
        .window
        .remove_event_listener_with_callback("keydown", handlers.keydown.as_ref().unchecked_ref());
    if let Some(wheel) = &handlers.wheel {
        let _ = guard
            .window
            .remove_event_listener_with_callback("wheel", wheel.as_ref().unchecked_ref());
    }
    let _ = guard
        .window
        .remove_event_listener_with_callback("popstate", handlers.popstate.as_ref().unchecked_ref());
    let _ = guard
        .surface
        .root
        .remove_event_listener_with_callback("click", handlers.click.as_ref().unchecked_ref());
    if let Some(touch) = &handlers.touch {
        let root = &guard.surface.root;
        let _ = root
            .remove_event_listener_with_callback("touchstart", touch.start.as_ref().unchecked_ref());
        let _ = root.remove_event_listener_with_callback(
            "touchmove",
            touch.movement.as_ref().unchecked_ref(),
        );
        let _ =
            root.remove_event_listener_with_callback("touchend", touch.end.as_ref().unchecked_ref());
    }
}

// ---------------------------------------------------------------------------
// Keyboard
// ---------------------------------------------------------------------------

fn handle_keydown(inner: &Rc<RefCell<Inner>>, event: &KeyboardEvent) {
    let key = event.key();
    if key == "Tab" {
        let (children, active) = {
            let guard = inner.borrow();
            (
                guard.surface.focusable_children(),
                guard.document.active_element(),
            )
        };
        let focused = active.as_ref().and_then(|active| {
            children
                .iter()
                .position(|child| active.is_same_node(Some(child.as_ref())))
        });
        let direction = if event.shift_key() {
            TabDirection::Backward
        } else {
            TabDirection::Forward
        };
        if let Some(index) = wrap_target(focused, children.len(), direction) {
            event.prevent_default();
            let _ = children[index].focus();
        }
    } else if key == "Escape" {
        event.prevent_default();
        if let Err(err) = close_impl(inner) {
            warn!(?err, "close on escape failed");
        }
    }
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

fn dispatch(inner: &Rc<RefCell<Inner>>, event: LightboxEvent) {
    let root = inner.borrow().surface.root.clone();
    match CustomEvent::new(event.name()) {
        Ok(custom) => {
            let _ = root.dispatch_event(&custom);
        }
        Err(err) => warn!(?err, "could not create notification event"),
    }
}
