//! Fruit Drop entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use fruit_drop::Settings;
    use fruit_drop::input::InputQueue;
    use fruit_drop::renderer::{CanvasRenderer, SpriteCache, build_frame};
    use fruit_drop::sim::{GameEvent, GameState, Phase, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        settings: Settings,
        renderer: CanvasRenderer,
        input: InputQueue,
        document: Document,
    }

    impl Game {
        /// Run one simulation tick with the input gathered since last frame
        fn update(&mut self) {
            if self.input.take_restart() {
                self.restart();
            }
            let input = self.input.take_tick();
            tick(&mut self.state, &input);

            let mut scored = false;
            for event in self.state.drain_events() {
                log::debug!("{:?}", event);
                scored |= matches!(event, GameEvent::Merged { .. });
            }
            if scored {
                self.update_score_label();
            }
        }

        /// Render the current frame
        fn render(&self) {
            self.renderer.render(&build_frame(&self.state));
        }

        fn update_score_label(&self) {
            if let Some(el) = self.document.get_element_by_id("score") {
                el.set_text_content(Some(&self.state.score.label()));
            }
        }

        /// Reset game state with a fresh seed, keeping the rules
        fn restart(&mut self) {
            let seed = js_sys::Date::now() as u64;
            self.state = GameState::new(self.settings.sim_config(), seed);
            self.update_score_label();
            log::info!("Game restarted with seed: {}", seed);
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| JsValue::from_str("no canvas"))?
            .dyn_into()?;

        let settings = Settings::load();
        let config = settings.sim_config();
        canvas.set_width(config.width as u32);
        canvas.set_height(config.height as u32);

        let sprites = SpriteCache::load("").await;
        let renderer = CanvasRenderer::new(&canvas, sprites)?;

        let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
        log::info!("Game initialized with seed: {} ({} mode)", seed, config.mode.as_str());

        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(config, seed),
            settings,
            renderer,
            input: InputQueue::default(),
            document: document.clone(),
        }));
        game.borrow().update_score_label();

        setup_input_handlers(&canvas, game.clone())?;
        setup_auto_pause(&document, game.clone())?;

        // Start game loop
        request_animation_frame(game)?;

        log::info!("Fruit Drop running!");
        Ok(())
    }

    fn setup_input_handlers(
        canvas: &HtmlCanvasElement,
        game: Rc<RefCell<Game>>,
    ) -> Result<(), JsValue> {
        // Click - drop a piece under the pointer
        {
            let game = game.clone();
            let canvas_clone = canvas.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let rect = canvas_clone.get_bounding_client_rect();
                game.borrow_mut()
                    .input
                    .click(event.client_x() as f64, rect.left());
            });
            canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Keyboard
        {
            let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if let Some(command) = game.borrow_mut().input.key(&event.key()) {
                    log::info!("Key command: {:?}", command);
                }
            });
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn setup_auto_pause(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                let mut g = game.borrow_mut();
                if g.state.phase == Phase::Running {
                    g.input.request_pause();
                    log::info!("Auto-paused (tab hidden)");
                }
            }
        });
        document.add_event_listener_with_callback(
            "visibilitychange",
            closure.as_ref().unchecked_ref(),
        )?;
        closure.forget();
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            g.update();
            g.render();
        }

        if let Err(e) = request_animation_frame(game) {
            log::error!("Frame loop stopped: {:?}", e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&JsValue::from_str(&e.to_string()));
    }
    log::info!("Fruit Drop starting...");

    if let Err(e) = wasm_game::run().await {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Fruit Drop (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let settings = fruit_drop::Settings::load();
    let state = demo::run(&settings);

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize final state: {}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use fruit_drop::Settings;
    use fruit_drop::sim::{GameState, TickInput, tick};

    /// Ticks between automatic drops
    const DROP_INTERVAL: u64 = 40;
    const DROPS: u64 = 30;
    /// Drop columns, cycled
    const COLUMNS: [f32; 4] = [200.0, 320.0, 440.0, 560.0];

    /// Drop pieces on a fixed schedule and run until everything rests
    pub fn run(settings: &Settings) -> GameState {
        let seed = settings.seed.unwrap_or(1);
        let config = settings.sim_config();
        log::info!("Demo: seed {} ({} mode)", seed, config.mode.as_str());

        let mut state = GameState::new(config, seed);
        let mut dropped = 0;
        loop {
            let mut input = TickInput::default();
            if dropped < DROPS && state.time_ticks % DROP_INTERVAL == 0 {
                input.drops.push(COLUMNS[dropped as usize % COLUMNS.len()]);
                dropped += 1;
            }
            tick(&mut state, &input);

            for event in state.drain_events() {
                log::debug!("tick {}: {:?}", state.time_ticks, event);
            }
            if dropped == DROPS && state.is_settled() {
                break;
            }
        }

        log::info!(
            "Demo finished after {} ticks: {} pieces, {} merges, {}",
            state.time_ticks,
            state.pieces.len(),
            state.score.merges(),
            state.score.label()
        );
        state
    }
}
