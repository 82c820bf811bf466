//! Sample screen driven without a renderer
//!
//! Seven buttons switch between the five reserved states and two custom
//! ones. Clicking the empty, error or custom views falls back to loading.
//!
//! Run with `RUST_LOG=debug` to see the container's own logging.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use state_layout::transition::ease_in_out;
use state_layout::{LayoutId, StateId, StateLayout, StateLayoutConfig, Transition, ViewSource};
use state_layout_headless::{
    advance, FadeAnimator, HeadlessStateLayout, LayoutCatalog, LayoutTemplate, ViewTree,
};

const STATE_CUSTOM1: &str = "custom1";
const STATE_CUSTOM2: &str = "custom2";

const FRAME: f32 = 1.0 / 60.0;

/// What the user does on each step of the script
enum Action {
    Press(StateId),
    ClickShownView,
    Wait(f32),
}

fn build_catalog() -> state_layout::Result<LayoutCatalog> {
    let screen = Vec2::new(360.0, 640.0);
    LayoutCatalog::new()
        .with("loading", LayoutTemplate::new("spinner", screen))?
        .with("content", LayoutTemplate::new("article", screen))?
        .with("empty", LayoutTemplate::new("nothing here", screen))?
        .with("error", LayoutTemplate::new("tap to retry", screen))?
        .with("main_custom1_src", LayoutTemplate::new("custom one", screen))?
        .with("main_custom2_src", LayoutTemplate::new("custom two", screen))
}

fn run_frames(layout: &mut HeadlessStateLayout, seconds: f32) {
    let mut remaining = seconds;
    while remaining > 0.0 {
        advance(layout, FRAME);
        remaining -= FRAME;
    }
    let drawn: Vec<String> = layout
        .host()
        .draw_list()
        .into_iter()
        .map(|item| format!("{} ({:.2})", item.name, item.opacity))
        .collect();
    log::info!(
        "[{}] drawn: {}",
        layout.current_state().map_or("<unset>", StateId::as_str),
        drawn.join(", ")
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = StateLayoutConfig::default()
        .with_loading_source(LayoutId::from("loading"))
        .with_content_source(LayoutId::from("content"))
        .with_empty_source(LayoutId::from("empty"))
        .with_error_source(LayoutId::from("error"))
        .with_use_out_transition(true)
        .with_out_transition(Transition::fade_out().with_easing(ease_in_out));
    let mut layout =
        StateLayout::with_config(ViewTree::new(build_catalog()?), FadeAnimator::new(), config)?;

    layout.bind_source(STATE_CUSTOM1, ViewSource::layout("main_custom1_src"))?;
    layout.bind_source(STATE_CUSTOM2, ViewSource::layout("main_custom2_src"))?;

    // Listeners cannot call back into the layout; they queue the next state
    let pending: Rc<RefCell<Option<StateId>>> = Rc::new(RefCell::new(None));
    for state in [
        StateId::EMPTY,
        StateId::ERROR,
        StateId::from(STATE_CUSTOM1),
        StateId::from(STATE_CUSTOM2),
    ] {
        let pending = pending.clone();
        layout.set_state_listener(state, move |_, clicked| {
            log::info!("clicked {clicked}, reloading");
            *pending.borrow_mut() = Some(StateId::LOADING);
        });
    }

    let script = [
        Action::Press(StateId::LOADING),
        Action::Wait(0.5),
        Action::Press(StateId::CONTENT),
        Action::Wait(0.15),
        Action::Wait(0.5),
        Action::Press(StateId::ERROR),
        Action::Wait(0.5),
        Action::ClickShownView,
        Action::Wait(0.5),
        Action::Press(StateId::from(STATE_CUSTOM1)),
        Action::Wait(0.5),
        Action::ClickShownView,
        Action::Wait(0.5),
        Action::Press(StateId::OFFLINE),
        Action::Wait(0.5),
        Action::ClickShownView,
        Action::Press(StateId::from(STATE_CUSTOM2)),
        Action::Wait(0.5),
    ];

    for action in script {
        match action {
            Action::Press(state) => {
                log::info!("press {state}");
                layout.show(state);
            }
            Action::ClickShownView => {
                let shown = layout
                    .current_state()
                    .and_then(|state| layout.view_for(state))
                    .copied();
                if let Some(view) = shown {
                    if layout.click(&view).is_none() {
                        log::info!("click ignored");
                    }
                }
                if let Some(next) = pending.borrow_mut().take() {
                    layout.show(next);
                }
            }
            Action::Wait(seconds) => run_frames(&mut layout, seconds),
        }
    }

    Ok(())
}
