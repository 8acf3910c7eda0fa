use std::fmt;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;
use yew::functional::Reducible;
use yew::prelude::*;

use crate::config;

/// Vertical offset in pixels past which the bar turns opaque.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub scrolled: bool,
    pub listening: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    Attach,
    Scroll(f64),
    Detach,
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            NavAction::Attach => NavState { listening: true, ..*self },
            // Events delivered after teardown are dropped.
            NavAction::Scroll(_) if !self.listening => return self,
            NavAction::Scroll(offset) => NavState { scrolled: is_scrolled(offset), ..*self },
            NavAction::Detach => NavState { listening: false, ..*self },
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Something that emits `scroll` events and reports its vertical offset.
pub trait ScrollTarget: Clone + 'static {
    type Handle;
    type Error: fmt::Debug;

    fn offset(&self) -> Result<f64, Self::Error>;
    fn listen(&self, callback: Box<dyn FnMut()>) -> Result<Self::Handle, Self::Error>;
    fn unlisten(&self, handle: &Self::Handle) -> Result<(), Self::Error>;
}

impl ScrollTarget for Window {
    type Handle = Closure<dyn FnMut()>;
    type Error = JsValue;

    fn offset(&self) -> Result<f64, JsValue> {
        self.scroll_y()
    }

    fn listen(&self, callback: Box<dyn FnMut()>) -> Result<Self::Handle, JsValue> {
        let closure = Closure::wrap(callback);
        self.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
        Ok(closure)
    }

    fn unlisten(&self, closure: &Self::Handle) -> Result<(), JsValue> {
        self.remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
    }
}

/// A `scroll` listener on `T`, removed again when dropped.
pub struct ScrollListener<T: ScrollTarget = Window> {
    target: T,
    handle: T::Handle,
}

impl<T: ScrollTarget> ScrollListener<T> {
    pub fn attach(target: T, mut on_scroll: impl FnMut(f64) + 'static) -> Result<Self, T::Error> {
        let source = target.clone();
        let handle = target.listen(Box::new(move || match source.offset() {
            Ok(offset) => on_scroll(offset),
            Err(err) => warn!("failed to read scroll offset: {:?}", err),
        }))?;
        Ok(Self { target, handle })
    }
}

impl<T: ScrollTarget> Drop for ScrollListener<T> {
    fn drop(&mut self) {
        if let Err(err) = self.target.unlisten(&self.handle) {
            warn!("failed to detach scroll listener: {:?}", err);
        }
    }
}

/// Attaches a listener feeding `dispatch`. `Attach` is only sent once the
/// listener is in place, followed by the current offset.
pub fn subscribe<T: ScrollTarget>(
    target: T,
    dispatch: impl Fn(NavAction) + Clone + 'static,
) -> Option<ScrollListener<T>> {
    let on_scroll = dispatch.clone();
    match ScrollListener::attach(target.clone(), move |offset| on_scroll(NavAction::Scroll(offset))) {
        Ok(listener) => {
            dispatch(NavAction::Attach);
            // Initial check, the page may be restored mid-scroll
            if let Ok(offset) = target.offset() {
                dispatch(NavAction::Scroll(offset));
            }
            debug!("navigation scroll listener attached");
            Some(listener)
        }
        Err(err) => {
            warn!("failed to attach scroll listener: {:?}", err);
            None
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub brand: AttrValue,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let state = use_reducer(NavState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().and_then(|window| {
                    let dispatcher = dispatcher.clone();
                    subscribe(window, move |action| dispatcher.dispatch(action))
                });

                move || {
                    dispatcher.dispatch(NavAction::Detach);
                    drop(listener);
                }
            },
            (),
        );
    }

    html! {
        <nav class={classes!("top-nav", state.scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <a href={config::home_url()} class="nav-logo">{&props.brand}</a>
                <a href={config::work_url()} class="nav-link">
                    <BackArrow />
                    {"Back to Work"}
                </a>
            </div>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        border-bottom: 1px solid transparent;
                        transition: all 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(10, 10, 15, 0.8);
                        backdrop-filter: blur(16px);
                        -webkit-backdrop-filter: blur(16px);
                        border-bottom-color: rgba(255, 255, 255, 0.05);
                    }
                    .nav-content {
                        width: 100%;
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 1.25rem 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        font-family: var(--font-mono);
                        font-size: 0.875rem;
                        color: #fb7185;
                        text-decoration: none;
                    }
                    .nav-link {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        font-size: 0.875rem;
                        color: #a0a0b0;
                        text-decoration: none;
                        transition: color 0.2s ease;
                    }
                    .nav-link:hover {
                        color: #ffffff;
                    }
                "#}
            </style>
        </nav>
    }
}

/// Left arrow used by every "back" link.
#[function_component(BackArrow)]
pub fn back_arrow() -> Html {
    html! {
        <svg class="icon" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 19l-7-7m0 0l7-7m-7 7h18" />
        </svg>
    }
}
