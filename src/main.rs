//! Lane Runner entry point
//!
//! Native builds run a headless autoplay session; the web build drives a
//! `<canvas id="canvas">` with requestAnimationFrame.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent, PointerEvent};

    use lane_runner::platform::{InputEvent, InputQueue, event_for_key};
    use lane_runner::renderer::{DrawCmd, build_draw_list, css_color};
    use lane_runner::sim::{GameState, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        queue: InputQueue,
        start_ms: f64,
    }

    fn request_frame(callback: &Closure<dyn FnMut(f64)>) {
        if let Some(window) = web_sys::window() {
            let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }

    /// Replay a draw list on a 2D context
    fn paint(ctx: &CanvasRenderingContext2d, width: f64, height: f64, cmds: &[DrawCmd]) {
        for cmd in cmds {
            match cmd {
                DrawCmd::Clear { color } => {
                    ctx.set_fill_style_str(&css_color(*color));
                    ctx.fill_rect(0.0, 0.0, width, height);
                }
                DrawCmd::Rect {
                    center,
                    size,
                    color,
                } => {
                    ctx.set_fill_style_str(&css_color(*color));
                    ctx.fill_rect(
                        (center.x - size.x * 0.5) as f64,
                        (center.y - size.y * 0.5) as f64,
                        size.x as f64,
                        size.y as f64,
                    );
                }
                DrawCmd::Ellipse {
                    center,
                    size,
                    color,
                } => {
                    ctx.set_fill_style_str(&css_color(*color));
                    ctx.begin_path();
                    let _ = ctx.ellipse(
                        center.x as f64,
                        center.y as f64,
                        (size.x * 0.5) as f64,
                        (size.y * 0.5) as f64,
                        0.0,
                        0.0,
                        std::f64::consts::TAU,
                    );
                    ctx.fill();
                }
                DrawCmd::Line {
                    from,
                    to,
                    width,
                    color,
                } => {
                    ctx.set_stroke_style_str(&css_color(*color));
                    ctx.set_line_width(*width as f64);
                    ctx.begin_path();
                    ctx.move_to(from.x as f64, from.y as f64);
                    ctx.line_to(to.x as f64, to.y as f64);
                    ctx.stroke();
                }
                DrawCmd::Text {
                    pos,
                    text,
                    size,
                    color,
                } => {
                    ctx.set_fill_style_str(&css_color(*color));
                    ctx.set_font(&format!("{}px monospace", size));
                    ctx.set_text_baseline("top");
                    let _ = ctx.fill_text(text, pos.x as f64, pos.y as f64);
                }
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or("missing #canvas element")?
            .dyn_into()?;
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("2d context unavailable")?
            .dyn_into()?;
        let performance = window.performance().ok_or("no performance clock")?;

        let seed = js_sys::Date::now() as u64;
        let mut state = GameState::new(seed);
        state.resize(canvas.width() as f32, canvas.height() as f32);
        log::info!("Lane Runner starting with seed {}", seed);

        let game = Rc::new(RefCell::new(Game {
            state,
            queue: InputQueue::new(),
            start_ms: performance.now(),
        }));

        // Arrow keys pick a lane
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(input) = event_for_key(&event.key()) {
                    let g = &mut *game.borrow_mut();
                    g.queue.push(input, &g.state.viewport);
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Tap/click picks the lane on that half of the canvas
        {
            let game = game.clone();
            let target = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: PointerEvent| {
                let rect = target.get_bounding_client_rect();
                let g = &mut *game.borrow_mut();
                // CSS pixels to canvas pixels
                let scale = if rect.width() > 0.0 {
                    g.state.viewport.width as f64 / rect.width()
                } else {
                    1.0
                };
                let x = ((event.client_x() as f64 - rect.left()) * scale) as f32;
                g.queue.push(InputEvent::Tap { x }, &g.state.viewport);
            });
            canvas
                .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        let width = canvas.width() as f64;
        let height = canvas.height() as f64;
        let frame: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let frame_handle = frame.clone();
        *frame_handle.borrow_mut() = Some(Closure::new(move |time: f64| {
            {
                let g = &mut *game.borrow_mut();
                let now = time - g.start_ms;
                let input = g.queue.take(now);
                tick(&mut g.state, &input);
                let cmds = build_draw_list(&g.state, now);
                paint(&ctx, width, height, &cmds);
            }
            if let Some(callback) = frame.borrow().as_ref() {
                request_frame(callback);
            }
        }));
        if let Some(callback) = frame_handle.borrow().as_ref() {
            request_frame(callback);
        }

        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Simulated session length for the headless run
#[cfg(not(target_arch = "wasm32"))]
const SESSION_SECONDS: u32 = 120;
#[cfg(not(target_arch = "wasm32"))]
const FRAME_MS: f64 = 1000.0 / 60.0;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use lane_runner::hud::DebugStats;
    use lane_runner::sim::{GameEvent, GameState, TickInput, tick};

    env_logger::init();

    let mut args = std::env::args().skip(1);
    let tuning = match args.next() {
        Some(path) => load_tuning(&path),
        None => lane_runner::Tuning::default(),
    };
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);

    log::info!("Lane Runner (native) headless autoplay, seed {}", seed);
    let mut state = GameState::with_tuning(seed, lane_runner::Viewport::default(), tuning);

    let frames = SESSION_SECONDS as u64 * 60;
    let mut bosses = 0;
    for frame in 1..=frames {
        let input = TickInput {
            now_ms: frame as f64 * FRAME_MS,
            autoplay: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        bosses += state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::BossSpawned { .. }))
            .count();
    }

    let stats = DebugStats::from_state(&state, frames as f64 * FRAME_MS);
    log::info!(
        "Session over: score {}, {} zombies destroyed, {} bosses seen",
        stats.score,
        stats.destroyed,
        bosses
    );
    match serde_json::to_string_pretty(&stats) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize stats: {}", e),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> lane_runner::Tuning {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            log::warn!("Could not read tuning file {}: {}; using defaults", path, e);
            return lane_runner::Tuning::default();
        }
    };
    match lane_runner::Tuning::from_json(&json) {
        Ok(tuning) => {
            log::info!("Loaded tuning from {}", path);
            tuning
        }
        Err(e) => {
            log::warn!("{}; using defaults", e);
            lane_runner::Tuning::default()
        }
    }
}
