//! Neon Runner entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement};

    use neon_runner::consts::FIELD_HEIGHT;
    use neon_runner::renderer::{CanvasPainter, scene};
    use neon_runner::sim::GameEvent;
    use neon_runner::{Session, SessionError, Tuning, TuningError, field_width_for_viewport};

    /// Browser-side game wrapper
    struct Game {
        session: Session,
        painter: CanvasPainter,
        /// An animation frame is already scheduled
        frame_pending: bool,
    }

    impl Game {
        fn new(seed: u64, tuning: Tuning, painter: CanvasPainter) -> Result<Self, TuningError> {
            Ok(Self {
                session: Session::new(seed, tuning)?,
                painter,
                frame_pending: false,
            })
        }

        /// Size the canvas to the viewport and tell the simulation
        fn resize(&mut self) {
            let Some(window) = web_sys::window() else {
                return;
            };
            let viewport = window
                .inner_width()
                .ok()
                .and_then(|w| w.as_f64())
                .unwrap_or(800.0) as f32;
            let width = field_width_for_viewport(viewport);
            self.painter.resize(width as u32, FIELD_HEIGHT as u32);
            self.session.set_field_width(width);
        }

        fn render(&self) {
            self.painter.paint(&scene(self.session.state()));
        }

        /// Apply queued simulation events to the DOM
        fn update_hud(&mut self) {
            let Some(document) = document() else {
                return;
            };
            for event in self.session.drain_events() {
                match event {
                    GameEvent::Started => {
                        set_hidden(&document, "start-screen", true);
                        set_hidden(&document, "game-over-screen", true);
                    }
                    GameEvent::ScoreChanged(score) => {
                        set_text(&document, "score", &format!("Score: {}", score));
                    }
                    GameEvent::GameOver { final_score } => {
                        set_text(&document, "final-score", &final_score.to_string());
                        set_hidden(&document, "game-over-screen", false);
                    }
                    GameEvent::Suspended => {}
                }
            }
        }
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn element(document: &Document, id: &str) -> Option<Element> {
        document.get_element_by_id(id)
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = element(document, id) {
            let classes = el.class_list();
            let result = if hidden {
                classes.add_1("hidden")
            } else {
                classes.remove_1("hidden")
            };
            if let Err(e) = result {
                log::warn!("Failed to toggle #{}: {:?}", id, e);
            }
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = element(document, id) {
            el.set_text_content(Some(text));
        }
    }

    fn now_ms() -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    fn navigator_online() -> bool {
        web_sys::window()
            .map(|w| w.navigator().on_line())
            .unwrap_or(true)
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Neon Runner starting...");

        let document = document().ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let seed = js_sys::Date::now() as u64;
        let game = Game::new(seed, Tuning::load(), CanvasPainter::new(canvas)?)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let game = Rc::new(RefCell::new(game));
        game.borrow_mut().resize();
        log::info!("Game initialized with seed: {}", seed);

        setup_input_handlers(game.clone())?;
        setup_start_buttons(game.clone(), &document)?;
        setup_connectivity(game.clone())?;

        // Initial check
        check_connectivity(&game);

        log::info!("Neon Runner ready");
        Ok(())
    }

    /// Jump on Space/ArrowUp, touch and mouse; `A` toggles autopilot
    fn setup_input_handlers(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.code().as_str() {
                    "Space" | "ArrowUp" => g.session.request_jump(now_ms()),
                    "KeyA" => {
                        g.session.toggle_autopilot();
                    }
                    _ => {}
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        for event_name in ["touchstart", "mousedown"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().session.request_jump(now_ms());
            });
            window.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().resize();
            });
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_start_buttons(game: Rc<RefCell<Game>>, document: &Document) -> Result<(), JsValue> {
        for id in ["start-btn", "restart-btn"] {
            let Some(btn) = document.get_element_by_id(id) else {
                log::warn!("Missing #{}", id);
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                start_game(&game);
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn start_game(game: &Rc<RefCell<Game>>) {
        let result = {
            let mut g = game.borrow_mut();
            let result = g.session.request_start();
            g.update_hud();
            result
        };
        match result {
            Ok(true) => request_animation_frame(game.clone()),
            Ok(false) => {}
            Err(SessionError::Offline) => {
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message("You must be online to play!");
                }
            }
        }
    }

    fn setup_connectivity(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        for event_name in ["online", "offline"] {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                check_connectivity(&game);
            });
            window.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn check_connectivity(game: &Rc<RefCell<Game>>) {
        let online = navigator_online();
        let mut g = game.borrow_mut();
        g.session.set_online(online);
        g.update_hud();
        if let Some(document) = document() {
            set_hidden(&document, "offline-overlay", online);
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.frame_pending {
                return;
            }
            g.frame_pending = true;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let keep_running = {
            let mut g = game.borrow_mut();
            g.frame_pending = false;
            let keep_running = g.session.frame(now_ms());
            g.render();
            g.update_hud();
            keep_running
        };

        if keep_running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use neon_runner::sim::GameEvent;
    use neon_runner::{Session, Tuning};

    env_logger::init();
    log::info!("Neon Runner (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - use `trunk serve` for the web version");

    let mut session = match Session::new(0x5eed, Tuning::load()) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Invalid tuning: {}", e);
            return;
        }
    };
    session.toggle_autopilot();
    if let Err(e) = session.request_start() {
        log::error!("Could not start: {}", e);
        return;
    }

    // 60 frames per second of simulated wall clock
    let mut frame = 0u64;
    while session.frame(frame as f64 * 1000.0 / 60.0) && frame < 60 * 60 {
        frame += 1;
    }

    for event in session.drain_events() {
        if let GameEvent::GameOver { final_score } = event {
            println!("Autopilot crashed after {} frames, score {}", frame, final_score);
            return;
        }
    }
    println!(
        "Autopilot survived {} frames, score {}",
        frame,
        session.state().score
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
