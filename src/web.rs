//! Browser side of the effect: web-sys/gloo implementations of the
//! environment traits

use gloo_events::EventListener;
use gloo_render::{AnimationFrame, request_animation_frame};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MouseEvent};

use crate::effect::{FrameScheduler, MotionQuery, PointerTarget, REDUCED_MOTION_QUERY};
use crate::primitives::{Position, Rect};

/// `requestAnimationFrame`; dropping the handle calls `cancelAnimationFrame`
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationFrames;

impl FrameScheduler for AnimationFrames {
    type Handle = AnimationFrame;

    fn schedule(&self, task: Box<dyn FnOnce()>) -> AnimationFrame {
        request_animation_frame(move |_timestamp| task())
    }
}

impl PointerTarget for web_sys::Element {
    type Listener = EventListener;

    fn bounding_rect(&self) -> Rect {
        let rect = self.get_bounding_client_rect();
        Rect::new(
            rect.x() as f32,
            rect.y() as f32,
            rect.width() as f32,
            rect.height() as f32,
        )
    }

    fn on_pointer_move(&self, mut handler: Box<dyn FnMut(Position)>) -> EventListener {
        EventListener::new(self, "mousemove", move |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                handler(Position::new(mouse.client_x() as f32, mouse.client_y() as f32));
            }
        })
    }

    fn on_pointer_leave(&self, mut handler: Box<dyn FnMut()>) -> EventListener {
        EventListener::new(self, "mouseleave", move |_event| handler())
    }
}

/// `window.matchMedia("(prefers-reduced-motion: reduce)")`
pub struct MediaMotionQuery {
    list: MediaQueryList,
}

impl MediaMotionQuery {
    /// `None` outside a browser window or when `matchMedia` is unavailable
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        match window.match_media(REDUCED_MOTION_QUERY) {
            Ok(Some(list)) => Some(Self { list }),
            Ok(None) => None,
            Err(err) => {
                warn!(?err, "matchMedia threw, assuming motion is allowed");
                None
            }
        }
    }
}

impl MotionQuery for MediaMotionQuery {
    type Subscription = EventListener;

    fn matches(&self) -> bool {
        self.list.matches()
    }

    fn subscribe(&self, mut on_change: Box<dyn FnMut(bool)>) -> EventListener {
        let list = self.list.clone();
        EventListener::new(&self.list, "change", move |_event| on_change(list.matches()))
    }
}
