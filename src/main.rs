//! Ember Run entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use ember_run::assets::FontSize;
    use ember_run::frame::Overlay;
    use ember_run::renderer::RenderState;
    use ember_run::sim::{GameState, TickInput, tick};
    use ember_run::{Frame, SimConfig};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        input: TickInput,
        // Track the terminal flag to log transitions
        last_over: bool,
    }

    impl Game {
        fn new(config: SimConfig, seed: u64) -> Self {
            Self {
                state: GameState::new(config, seed),
                render_state: None,
                input: TickInput::default(),
                last_over: false,
            }
        }

        /// Run one simulation tick. The step size is derived from the game
        /// speed inside the tick, so each displayed frame advances exactly
        /// one step.
        fn update(&mut self) {
            let input = self.input;
            tick(&mut self.state, &input);

            // Clear one-shot inputs after processing
            self.input.action = false;

            if self.state.game_over != self.last_over {
                if self.state.game_over {
                    log::info!("Game over at score {}", self.state.displayed_score());
                } else {
                    log::info!("Run restarted");
                }
                self.last_over = self.state.game_over;
            }
        }

        /// Render the current frame
        fn render(&mut self, frame: &Frame) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(frame) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self, overlay: &Overlay) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            match overlay {
                Overlay::Score(line) => {
                    if let Some(el) = document.get_element_by_id("score") {
                        el.set_text_content(Some(line));
                    }
                    if let Some(el) = document.get_element_by_id("game-over") {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
                Overlay::GameOver {
                    banner,
                    score,
                    prompt,
                } => {
                    if let Some(el) = document.get_element_by_id("score") {
                        el.set_text_content(Some(score));
                    }
                    if let Some(el) = document.get_element_by_id("game-over") {
                        let _ = el.set_attribute("class", "");
                    }
                    if let Some(el) = document.get_element_by_id("banner") {
                        el.set_text_content(Some(banner));
                    }
                    if let Some(el) = document.get_element_by_id("prompt") {
                        el.set_text_content(Some(prompt));
                    }
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Ember Run starting...");

        let config = SimConfig::load();
        if let Err(e) = config.validate() {
            log::error!("Invalid config, refusing to start: {}", e);
            return;
        }

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // HUD text sizes match the sprite-era layout
        if let Some(el) = document.get_element_by_id("score") {
            let _ = el.set_attribute(
                "style",
                &format!("font-size: {}pt", FontSize::Normal.points()),
            );
        }
        if let Some(el) = document.get_element_by_id("banner") {
            let _ = el.set_attribute(
                "style",
                &format!("font-size: {}pt", FontSize::Large.points()),
            );
        }
        if let Some(el) = document.get_element_by_id("prompt") {
            let _ = el.set_attribute(
                "style",
                &format!("font-size: {}pt", FontSize::Normal.points()),
            );
        }

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(config, seed)));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        // Set up input handlers
        setup_input_handlers(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Ember Run running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            match event.key().as_str() {
                " " => {
                    event.prevent_default();
                    game.borrow_mut().input.action = true;
                }
                _ => {}
            }
        });
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();

            g.update();
            let frame = Frame::capture(&g.state);
            g.render(&frame);
            g.update_hud(&frame.overlay);
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

/// Headless demo: an autopilot plays until it dies, logging progress.
/// Useful for eyeballing pacing without a browser.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use ember_run::SimConfig;
    use ember_run::consts::PLAYER_X;
    use ember_run::sim::{GameState, TickInput, tick};

    env_logger::init();

    let config = SimConfig::load();
    if let Err(e) = config.validate() {
        log::error!("Invalid config, refusing to start: {}", e);
        std::process::exit(1);
    }

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    log::info!("Ember Run (headless) starting with seed {}", seed);

    let mut state = GameState::new(config, seed);
    let mut ticks = 0u32;

    while !state.game_over && ticks < 100_000 {
        let mut input = TickInput::default();
        // Crude autopilot: jump when a fire closes in
        let threat = state
            .obstacles
            .iter()
            .any(|o| o.x > PLAYER_X && o.x < PLAYER_X + 150.0);
        if threat && !state.player.jumping {
            input.action = true;
        }

        tick(&mut state, &input);
        ticks += 1;

        if ticks % 600 == 0 {
            log::info!(
                "t={:.1}s speed={:.2} score={}",
                state.t,
                state.speed,
                state.displayed_score()
            );
        }
    }

    log::info!(
        "Run over after {} ticks: final score {}",
        ticks,
        state.displayed_score()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
