//! Plat Duel entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use plat_duel::audio::AudioManager;
    use plat_duel::consts::*;
    use plat_duel::input::{self, KeyState};
    use plat_duel::renderer::RenderState;
    use plat_duel::sim::{GamePhase, MatchState, Variant, reset, tick};
    use plat_duel::{FixedTimestep, Settings};

    thread_local! {
        /// Handle for `reset_match`, which the page calls from outside the loop
        static GAME: RefCell<Option<Rc<RefCell<Game>>>> = const { RefCell::new(None) };
    }

    /// Game instance holding all state
    struct Game {
        state: MatchState,
        render_state: Option<RenderState>,
        clock: FixedTimestep,
        last_time: f64,
        keys: KeyState,
        settings: Settings,
        audio: AudioManager,
        /// Phase shown by the DOM overlay
        last_phase: GamePhase,
    }

    impl Game {
        fn new(variant: Variant, settings: &Settings, arena: (f32, f32)) -> Self {
            let rules = variant.rules().with_arena(arena.0, arena.1);
            Self {
                state: MatchState::with_rules(variant, rules),
                render_state: None,
                clock: FixedTimestep::default(),
                last_time: 0.0,
                keys: KeyState::new(),
                settings: settings.clone(),
                audio: AudioManager::new(settings),
                last_phase: GamePhase::Playing,
            }
        }

        /// Run simulation ticks
        fn update(&mut self, dt: f32) {
            let steps = self.clock.advance(dt);
            for _ in 0..steps {
                let input = self.keys.sample(&self.state);
                tick(&mut self.state, &input);
                if self.state.rules.sound {
                    self.audio.play_events(&self.state.events);
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render_match(&self.state) {
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

        /// Update HUD elements and the win overlay in the DOM
        fn update_hud(&mut self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            if self.state.rules.show_match_ui {
                for (i, player) in self.state.players.iter().enumerate() {
                    let n = i + 1;
                    if let Some(el) = document.get_element_by_id(&format!("hud-p{}-name", n)) {
                        el.set_text_content(Some(&player.name));
                    }
                    if let Some(el) = document.get_element_by_id(&format!("hud-p{}-falls", n)) {
                        let max = self.state.rules.max_falls.unwrap_or(0);
                        el.set_text_content(Some(&format!("Falls: {}/{}", player.falls, max)));
                    }
                    if let Some(el) = document.get_element_by_id(&format!("hud-p{}-health", n)) {
                        el.set_text_content(Some(&player.health.to_string()));
                    }
                }
            }

            if self.state.phase == self.last_phase {
                return;
            }
            self.last_phase = self.state.phase;

            if let Some(el) = document.get_element_by_id("win-overlay") {
                match self.state.winner_banner() {
                    Some(banner) if self.state.rules.show_match_ui => {
                        if let Some(text) = document.get_element_by_id("win-text") {
                            text.set_text_content(Some(&banner));
                        }
                        let _ = el.set_attribute("class", "");
                    }
                    _ => {
                        let _ = el.set_attribute("class", "hidden");
                    }
                }
            }
        }

        /// Flip mute and remember it
        fn toggle_mute(&mut self) {
            self.settings.muted = !self.settings.muted;
            self.audio.set_volume(&self.settings);
            self.settings.save();
            log::info!("Sound {}", if self.settings.muted { "muted" } else { "on" });
        }

        /// Start the match over
        fn restart(&mut self) {
            reset(&mut self.state);
            self.clock.reset();
            self.keys.release_all();
        }
    }

    /// Reset the current match. Called by the page (e.g. a button on the win overlay).
    #[wasm_bindgen]
    pub fn reset_match() {
        GAME.with(|slot| {
            if let Some(game) = slot.borrow().as_ref() {
                game.borrow_mut().restart();
            }
        });
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Plat Duel starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Arena uses CSS pixels, the surface uses device pixels
        let dpr = window.device_pixel_ratio();
        let client_w = canvas.client_width().max(1);
        let client_h = canvas.client_height().max(1);
        let width = (client_w as f64 * dpr) as u32;
        let height = (client_h as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let settings = Settings::load();
        let query = window.location().search().unwrap_or_default();
        let variant = settings.variant_from_query(&query);

        let game = Rc::new(RefCell::new(Game::new(
            variant,
            &settings,
            (client_w as f32, client_h as f32),
        )));
        GAME.with(|slot| *slot.borrow_mut() = Some(game.clone()));

        log::info!("Mode: {} ({}x{} arena)", variant, client_w, client_h);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let arena = game.borrow().state.rules.arena;
        let render_state = RenderState::new(surface, &adapter, width, height, arena).await;
        game.borrow_mut().render_state = Some(render_state);

        // Hide the overlay left over from a previous page state
        if let Some(el) = document.get_element_by_id("win-overlay") {
            let _ = el.set_attribute("class", "hidden");
        }

        setup_input_handlers(game.clone());

        request_animation_frame(game);

        log::info!("Plat Duel running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Key down: mark held, keep bound keys from scrolling the page
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                if input::is_bound(&g.state, &key) {
                    event.prevent_default();
                } else if key == "m" && !event.repeat() {
                    g.toggle_mute();
                }
                g.keys.press(&key);
                // First key press counts as the user gesture audio needs
                g.audio.resume();
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys.release(&event.key());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: keyups won't arrive, drop everything held
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                game.borrow_mut().keys.release_all();
                log::debug!("Released held keys (window blur)");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();

            // Calculate delta time
            let dt = if g.last_time > 0.0 {
                ((time - g.last_time) / 1000.0) as f32
            } else {
                SIM_DT
            };
            g.last_time = time;

            g.update(dt);
            g.render();
            g.update_hud();
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Plat Duel (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the web version");

    headless_match();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Player 1 holds right and walks off the ledge until out of stocks
#[cfg(not(target_arch = "wasm32"))]
fn headless_match() {
    use plat_duel::sim::{MatchState, PlayerInput, TickInput, Variant, tick};

    let mut state = MatchState::new(Variant::Stock);
    let input = TickInput {
        players: vec![
            PlayerInput {
                right: true,
                ..Default::default()
            },
            PlayerInput::default(),
        ],
    };

    const TICK_LIMIT: u32 = 10_000;
    for _ in 0..TICK_LIMIT {
        tick(&mut state, &input);
        for event in &state.events {
            log::debug!("tick {}: {:?}", state.time_ticks, event);
        }
        if state.is_over() {
            break;
        }
    }

    match state.winner_banner() {
        Some(banner) => println!("{} ({} ticks)", banner, state.time_ticks),
        None => println!("No winner after {} ticks", state.time_ticks),
    }
}
