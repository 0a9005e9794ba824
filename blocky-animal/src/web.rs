// src/web.rs
// Page wiring: element lookups, DOM listeners and the two intervals.
use crate::config::ViewerConfig;
use crate::controls::{self, InputEvent, ROTATION_SLIDER_ID};
use crate::error::{Result, SetupError};
use crate::gl::GlRenderer;
use crate::scene::{Axis, PoseSliders, TailJoint};
use crate::viewer::{TickReport, TickToken, Toggle, Viewer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Event, EventTarget, HtmlCanvasElement, HtmlElement, HtmlInputElement, MouseEvent,
};

type SharedViewer = Rc<RefCell<Viewer<GlRenderer>>>;

// --- Page elements ---

struct PoseInput {
    id: &'static str,
    input: HtmlInputElement,
    joint: TailJoint,
    axis: Axis,
}

struct Page {
    canvas: HtmlCanvasElement,
    rotation: HtmlInputElement,
    pose: Vec<PoseInput>,
    toggle: HtmlElement,
    frame_time: HtmlElement,
    fps: HtmlElement,
}

fn element<T: JsCast>(document: &Document, id: &str) -> Result<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
        .ok_or_else(|| SetupError::ElementNotFound(id.to_string()))
}

impl Page {
    fn find(document: &Document, canvas_id: &str) -> Result<Self> {
        let pose = controls::POSE_SLIDERS
            .iter()
            .map(|&(id, joint, axis)| -> Result<PoseInput> {
                Ok(PoseInput {
                    id,
                    input: element(document, id)?,
                    joint,
                    axis,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            canvas: element(document, canvas_id)?,
            rotation: element(document, ROTATION_SLIDER_ID)?,
            pose,
            toggle: element(document, "animToggle")?,
            frame_time: element(document, "frameTime")?,
            fps: element(document, "fps")?,
        })
    }

    /// Puts every slider at the given pose; used once at startup.
    fn show_pose(&self, sliders: &PoseSliders) {
        self.rotation.set_value_as_number(sliders.rotation as f64);
        for p in &self.pose {
            let angles = sliders.joint(p.joint);
            let value = match p.axis {
                Axis::X => angles.x,
                Axis::Y => angles.y,
            };
            p.input.set_value_as_number(value as f64);
        }
    }

    /// Mirrors the tail values the animation wrote. Sliders the user owns
    /// are left alone so their pending edits survive the tick.
    fn show_animated(&self, sliders: &PoseSliders) {
        for (id, value) in controls::animated_sliders(sliders) {
            if let Some(p) = self.pose.iter().find(|p| p.id == id) {
                p.input.set_value_as_number(value as f64);
            }
        }
    }

    fn show_tick(&self, report: &TickReport) {
        self.frame_time
            .set_inner_text(&format!("{}", report.frame_ms.round()));
    }

    fn show_fps(&self, fps: f64) {
        self.fps.set_inner_text(&fps.to_string());
    }
}

// --- Scheduling and listeners ---

/// A running `setInterval`; dropping it clears the interval.
struct Interval {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    fn every(ms: i32, callback: impl FnMut() + 'static) -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| SetupError::Dom("no window".into()))?;
        let callback = Closure::<dyn FnMut()>::new(callback);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                ms,
            )
            .map_err(SetupError::dom)?;
        Ok(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}

/// A DOM listener removed again on drop.
struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn new(
        target: &EventTarget,
        event: &'static str,
        callback: impl FnMut(Event) + 'static,
    ) -> Result<Self> {
        let callback = Closure::<dyn FnMut(Event)>::new(callback);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(SetupError::dom)?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }

    fn mouse(
        target: &EventTarget,
        event: &'static str,
        mut callback: impl FnMut(&MouseEvent) + 'static,
    ) -> Result<Self> {
        Self::new(target, event, move |ev| {
            if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
                callback(ev);
            }
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

// Errors inside callbacks have nowhere to go but the JS console.
fn fail(err: SetupError) -> ! {
    log::error!("{err}");
    wasm_bindgen::throw_str(&err.to_string())
}

fn dispatch(viewer: &SharedViewer, event: InputEvent) {
    let result = viewer.borrow_mut().handle_input(event);
    if let Err(err) = result {
        fail(err);
    }
}

fn start_ticking(
    viewer: &SharedViewer,
    page: &Rc<Page>,
    token: TickToken,
    interval_ms: i32,
) -> Result<Interval> {
    let viewer = viewer.clone();
    let page = page.clone();
    Interval::every(interval_ms, move || {
        let result = viewer.borrow_mut().tick(token);
        match result {
            Ok(Some(report)) => {
                page.show_tick(&report);
                page.show_animated(&viewer.borrow().state().sliders);
            }
            Ok(None) => {}
            Err(err) => fail(err),
        }
    })
}

/// Everything that keeps the page alive; dropping it detaches the viewer.
pub struct App {
    viewer: SharedViewer,
    page: Rc<Page>,
    tick_interval_ms: i32,
    tick: Rc<RefCell<Option<Interval>>>,
    _fps: Interval,
    _listeners: Vec<Listener>,
}

impl App {
    pub fn start(config: ViewerConfig) -> Result<Self> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| SetupError::Dom("no document".into()))?;
        let page = Rc::new(Page::find(&document, &config.canvas_id)?);

        let renderer = GlRenderer::new(&page.canvas, config.clear_color)?;
        let viewer: SharedViewer = Rc::new(RefCell::new(Viewer::new(
            &config,
            renderer,
            crate::viewer::DateClock,
        )));
        page.show_pose(&config.initial_pose);
        viewer.borrow_mut().render()?;

        let tick_interval_ms = config.animation.tick_interval_ms;
        let tick = Rc::new(RefCell::new(None));
        let started = viewer.borrow_mut().start_animation();
        if let Some(token) = started {
            *tick.borrow_mut() = Some(start_ticking(&viewer, &page, token, tick_interval_ms)?);
        }

        let fps = {
            let viewer = viewer.clone();
            let page = page.clone();
            Interval::every(config.animation.fps_window_ms, move || {
                let sample = viewer.borrow_mut().sample_fps();
                if let Some(fps) = sample {
                    page.show_fps(fps);
                }
            })?
        };

        let listeners = Self::listen(&viewer, &page, &tick, tick_interval_ms)?;
        log::info!("viewer started");

        Ok(Self {
            viewer,
            page,
            tick_interval_ms,
            tick,
            _fps: fps,
            _listeners: listeners,
        })
    }

    fn listen(
        viewer: &SharedViewer,
        page: &Rc<Page>,
        tick: &Rc<RefCell<Option<Interval>>>,
        tick_interval_ms: i32,
    ) -> Result<Vec<Listener>> {
        let mut listeners = Vec::new();

        {
            let viewer = viewer.clone();
            let slider = page.rotation.clone();
            listeners.push(Listener::mouse(&page.rotation, "mousemove", move |ev| {
                dispatch(
                    &viewer,
                    InputEvent::RotationSlider {
                        buttons: ev.buttons(),
                        degrees: slider.value_as_number() as f32,
                    },
                );
            })?);
        }

        // Track clicks and arrow keys change the value without a drag.
        {
            let viewer = viewer.clone();
            let slider = page.rotation.clone();
            listeners.push(Listener::new(&page.rotation, "input", move |_| {
                dispatch(
                    &viewer,
                    InputEvent::RotationInput {
                        degrees: slider.value_as_number() as f32,
                    },
                );
            })?);
        }

        {
            let viewer = viewer.clone();
            listeners.push(Listener::mouse(&page.canvas, "mousemove", move |ev| {
                dispatch(
                    &viewer,
                    InputEvent::CanvasDrag {
                        buttons: ev.buttons(),
                        movement_x: ev.movement_x() as f32,
                        movement_y: ev.movement_y() as f32,
                    },
                );
            })?);
        }

        {
            let viewer = viewer.clone();
            listeners.push(Listener::mouse(&page.canvas, "mousedown", move |ev| {
                dispatch(
                    &viewer,
                    InputEvent::CanvasPointerDown {
                        shift_key: ev.shift_key(),
                    },
                );
            })?);
        }

        for p in &page.pose {
            let (joint, axis) = (p.joint, p.axis);

            let drag_viewer = viewer.clone();
            let input = p.input.clone();
            listeners.push(Listener::mouse(&p.input, "mousemove", move |ev| {
                dispatch(
                    &drag_viewer,
                    InputEvent::PoseSlider {
                        buttons: ev.buttons(),
                        joint,
                        axis,
                        degrees: input.value_as_number() as f32,
                    },
                );
            })?);

            let viewer = viewer.clone();
            let input = p.input.clone();
            listeners.push(Listener::new(&p.input, "input", move |_| {
                dispatch(
                    &viewer,
                    InputEvent::PoseInput {
                        joint,
                        axis,
                        degrees: input.value_as_number() as f32,
                    },
                );
            })?);
        }

        {
            let viewer = viewer.clone();
            let page_ref = page.clone();
            let tick = tick.clone();
            listeners.push(Listener::new(&page.toggle, "click", move |_| {
                let outcome = viewer.borrow_mut().toggle_animation();
                match outcome {
                    // Dropping the interval clears it.
                    Toggle::Stopped => drop(tick.borrow_mut().take()),
                    Toggle::Started(token) => {
                        match start_ticking(&viewer, &page_ref, token, tick_interval_ms) {
                            Ok(interval) => *tick.borrow_mut() = Some(interval),
                            Err(err) => fail(err),
                        }
                    }
                }
            })?);
        }

        Ok(listeners)
    }

    pub fn toggle_animation(&self) -> Result<bool> {
        let outcome = self.viewer.borrow_mut().toggle_animation();
        match outcome {
            Toggle::Stopped => {
                self.tick.borrow_mut().take();
                Ok(false)
            }
            Toggle::Started(token) => {
                let interval =
                    start_ticking(&self.viewer, &self.page, token, self.tick_interval_ms)?;
                *self.tick.borrow_mut() = Some(interval);
                Ok(true)
            }
        }
    }

    pub fn frame(&self) -> u64 {
        self.viewer.borrow().state().clock.frame
    }

    pub fn last_frame_ms(&self) -> f64 {
        self.viewer.borrow().last_frame_ms()
    }
}
