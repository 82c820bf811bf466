//! The state container and its switching state machine

use std::slice;

use crate::config::StateLayoutConfig;
use crate::dispatch::ClickDispatcher;
use crate::error::Result;
use crate::host::{NoTransition, TransitionDriver, ViewHost, Visibility};
use crate::registry::{Rebind, StateRegistry};
use crate::source::ViewSource;
use crate::state::StateId;
use crate::transition::Transition;

/// Container that shows exactly one state's view at a time
///
/// Callers bind a view per state, optionally register a click listener per
/// state, and call [`show`](Self::show) to switch. Only the view bound to the
/// current state is visible; every other managed view is hidden.
///
/// # Example
///
/// ```ignore
/// let mut layout = StateLayout::new(host, animator);
/// layout.set_content_view(content);
/// layout.set_error_view_source(ViewSource::layout("error_page"))?;
/// layout.set_error_click_listener(|_view, state| println!("retry from {state}"));
///
/// layout.show_loading();
/// // ... later
/// layout.show_content();
/// ```
pub struct StateLayout<H: ViewHost, D = NoTransition> {
    host: H,
    driver: D,
    registry: StateRegistry<H::View>,
    dispatcher: ClickDispatcher<H::View>,
    current: Option<StateId>,
    /// Shared zero-size view for states bound to [`ViewSource::Absent`]
    placeholder: Option<H::View>,
    use_in_transition: bool,
    use_out_transition: bool,
    in_transition: Transition,
    out_transition: Transition,
}

impl<H, D> StateLayout<H, D>
where
    H: ViewHost,
    D: TransitionDriver<H::View>,
{
    /// Create a layout with the default configuration
    ///
    /// All five reserved states start out bound to the shared placeholder.
    pub fn new(host: H, driver: D) -> Self {
        let mut layout = Self::bare(host, driver, &StateLayoutConfig::default());
        for state in StateId::RESERVED {
            layout.bind_placeholder(state);
        }
        layout
    }

    /// Create a layout and bind every reserved state from `config`
    ///
    /// Fails if the host cannot resolve one of the configured layouts.
    pub fn with_config(host: H, driver: D, config: StateLayoutConfig) -> Result<Self> {
        let mut layout = Self::bare(host, driver, &config);
        for (state, source) in config.reserved_sources() {
            layout.bind_source(state, source.clone())?;
        }
        Ok(layout)
    }

    fn bare(host: H, driver: D, config: &StateLayoutConfig) -> Self {
        Self {
            host,
            driver,
            registry: StateRegistry::new(),
            dispatcher: ClickDispatcher::new(),
            current: None,
            placeholder: None,
            use_in_transition: config.use_in_transition,
            use_out_transition: config.use_out_transition,
            in_transition: config.in_transition,
            out_transition: config.out_transition,
        }
    }

    // ========== Registration ==========

    /// Bind `view` as the visual representation of `state`
    ///
    /// The view is hidden immediately, even when `state` is the current
    /// state, and becomes a child of the container unless it already is one.
    /// A previous view of `state` that is no longer bound anywhere is hidden,
    /// detached from the dispatcher and removed from the container.
    pub fn bind(&mut self, state: impl Into<StateId>, view: H::View) {
        let state = state.into();

        self.host.set_visibility(&view, Visibility::Gone);
        if !self.host.contains_child(&view) {
            self.host.add_child(view.clone());
        }

        match self.registry.insert(state.clone(), view.clone()) {
            Rebind::Orphaned(previous) => self.release(previous),
            // Still bound elsewhere, but no longer the view of the shown state
            Rebind::Shared(previous) if self.current.as_ref() == Some(&state) => {
                self.host.set_visibility(&previous, Visibility::Gone);
            }
            Rebind::Fresh | Rebind::Same | Rebind::Shared(_) => {}
        }

        if self.dispatcher.has_listener(&state) {
            self.dispatcher.attach(view.clone());
        }

        log::debug!("bound {view:?} to state {state}");
    }

    /// Resolve `source` through the host and bind the result to `state`
    ///
    /// [`ViewSource::Absent`] binds the shared zero-size placeholder.
    pub fn bind_source(
        &mut self,
        state: impl Into<StateId>,
        source: impl Into<ViewSource>,
    ) -> Result<()> {
        match source.into() {
            ViewSource::Absent => self.bind_placeholder(state.into()),
            ViewSource::Layout(layout) => {
                let view = self.host.inflate(&layout)?;
                self.bind(state, view);
            }
        }
        Ok(())
    }

    fn bind_placeholder(&mut self, state: StateId) {
        let view = match &self.placeholder {
            Some(view) => view.clone(),
            None => {
                let view = self.host.placeholder();
                self.placeholder = Some(view.clone());
                view
            }
        };
        self.bind(state, view);
    }

    /// Hide and detach a view that no state binds anymore
    fn release(&mut self, view: H::View) {
        log::debug!("detaching orphaned view {view:?}");
        self.host.set_visibility(&view, Visibility::Gone);
        self.dispatcher.detach(&view);
        self.host.remove_child(&view);
    }

    /// Bind `view` to the loading state
    pub fn set_loading_view(&mut self, view: H::View) {
        self.bind(StateId::LOADING, view);
    }

    /// Bind `view` to the content state
    pub fn set_content_view(&mut self, view: H::View) {
        self.bind(StateId::CONTENT, view);
    }

    /// Bind `view` to the empty state
    pub fn set_empty_view(&mut self, view: H::View) {
        self.bind(StateId::EMPTY, view);
    }

    /// Bind `view` to the error state
    pub fn set_error_view(&mut self, view: H::View) {
        self.bind(StateId::ERROR, view);
    }

    /// Bind `view` to the offline state
    pub fn set_offline_view(&mut self, view: H::View) {
        self.bind(StateId::OFFLINE, view);
    }

    /// Resolve `source` and bind it to the loading state
    pub fn set_loading_view_source(&mut self, source: impl Into<ViewSource>) -> Result<()> {
        self.bind_source(StateId::LOADING, source)
    }

    /// Resolve `source` and bind it to the content state
    pub fn set_content_view_source(&mut self, source: impl Into<ViewSource>) -> Result<()> {
        self.bind_source(StateId::CONTENT, source)
    }

    /// Resolve `source` and bind it to the empty state
    pub fn set_empty_view_source(&mut self, source: impl Into<ViewSource>) -> Result<()> {
        self.bind_source(StateId::EMPTY, source)
    }

    /// Resolve `source` and bind it to the error state
    pub fn set_error_view_source(&mut self, source: impl Into<ViewSource>) -> Result<()> {
        self.bind_source(StateId::ERROR, source)
    }

    /// Resolve `source` and bind it to the offline state
    pub fn set_offline_view_source(&mut self, source: impl Into<ViewSource>) -> Result<()> {
        self.bind_source(StateId::OFFLINE, source)
    }

    /// Register the click listener for `state`
    ///
    /// Works in either order with [`bind`](Self::bind): if a view is already
    /// bound the dispatcher is attached to it now, otherwise `bind` attaches
    /// it later.
    pub fn set_state_listener(
        &mut self,
        state: impl Into<StateId>,
        listener: impl FnMut(&H::View, &StateId) + 'static,
    ) {
        let state = state.into();
        if let Some(view) = self.registry.view_for(&state) {
            self.dispatcher.attach(view.clone());
        }
        log::debug!("listener registered for state {state}");
        self.dispatcher.set_listener(state, Box::new(listener));
    }

    /// Register the click listener for the loading state
    pub fn set_loading_click_listener(
        &mut self,
        listener: impl FnMut(&H::View, &StateId) + 'static,
    ) {
        self.set_state_listener(StateId::LOADING, listener);
    }

    /// Register the click listener for the empty state
    pub fn set_empty_click_listener(
        &mut self,
        listener: impl FnMut(&H::View, &StateId) + 'static,
    ) {
        self.set_state_listener(StateId::EMPTY, listener);
    }

    /// Register the click listener for the error state
    pub fn set_error_click_listener(
        &mut self,
        listener: impl FnMut(&H::View, &StateId) + 'static,
    ) {
        self.set_state_listener(StateId::ERROR, listener);
    }

    /// Register the click listener for the offline state
    pub fn set_offline_click_listener(
        &mut self,
        listener: impl FnMut(&H::View, &StateId) + 'static,
    ) {
        self.set_state_listener(StateId::OFFLINE, listener);
    }

    // ========== Switching ==========

    /// Switch to `state`
    ///
    /// Hides the current state's view, shows the view bound to `state` (each
    /// optionally animated), then commits `state` as current even if no view
    /// is bound to it. Showing the current state again does nothing.
    ///
    /// Returns whether a switch happened.
    pub fn show(&mut self, state: impl Into<StateId>) -> bool {
        let state = state.into();
        if self.current.as_ref() == Some(&state) {
            return false;
        }

        let outgoing = self
            .current
            .as_ref()
            .and_then(|current| self.registry.view_for(current))
            .cloned();
        if let Some(view) = outgoing {
            if self.use_out_transition {
                self.driver.begin(slice::from_ref(&view), &self.out_transition);
            }
            self.host.set_visibility(&view, Visibility::Gone);
        }

        let incoming = self.registry.view_for(&state).cloned();
        if let Some(view) = incoming {
            if self.use_in_transition {
                self.driver.begin(slice::from_ref(&view), &self.in_transition);
            }
            self.host.set_visibility(&view, Visibility::Visible);
        }

        log::debug!(
            "state {} -> {}",
            self.current.as_ref().map_or("<unset>", StateId::as_str),
            state
        );
        self.current = Some(state);
        true
    }

    /// Switch to the loading state
    pub fn show_loading(&mut self) -> bool {
        self.show(StateId::LOADING)
    }

    /// Switch to the content state
    pub fn show_content(&mut self) -> bool {
        self.show(StateId::CONTENT)
    }

    /// Switch to the empty state
    pub fn show_empty(&mut self) -> bool {
        self.show(StateId::EMPTY)
    }

    /// Switch to the error state
    pub fn show_error(&mut self) -> bool {
        self.show(StateId::ERROR)
    }

    /// Switch to the offline state
    pub fn show_offline(&mut self) -> bool {
        self.show(StateId::OFFLINE)
    }

    // ========== Click Dispatch ==========

    /// Deliver a click on `view` to the listener of the state it is bound under
    ///
    /// This is the single click handler the host invokes for every managed
    /// view. Clicks on unmanaged views, or on states without a listener, are
    /// swallowed and return `None`.
    ///
    /// Listeners run while the layout is mutably borrowed, so they cannot
    /// call back into it. Queue follow-up switches and apply them after this
    /// returns.
    pub fn click(&mut self, view: &H::View) -> Option<StateId> {
        self.dispatcher.dispatch(&self.registry, view)
    }

    /// Whether clicks on `view` reach the dispatcher
    pub fn is_clickable(&self, view: &H::View) -> bool {
        self.dispatcher.is_attached(view)
    }

    // ========== Transition Configuration ==========

    /// Enable or disable the enter animation
    pub fn use_in_transition(&mut self, enabled: bool) {
        self.use_in_transition = enabled;
    }

    /// Enable or disable the exit animation
    pub fn use_out_transition(&mut self, enabled: bool) {
        self.use_out_transition = enabled;
    }

    /// Replace the enter transition wholesale
    pub fn set_in_transition(&mut self, transition: Transition) {
        self.in_transition = transition;
    }

    /// Replace the exit transition wholesale
    pub fn set_out_transition(&mut self, transition: Transition) {
        self.out_transition = transition;
    }

    /// The transition run on the view being shown
    pub fn in_transition(&self) -> &Transition {
        &self.in_transition
    }

    /// The transition run on the view being hidden
    pub fn out_transition(&self) -> &Transition {
        &self.out_transition
    }

    /// Whether the enter animation is enabled
    pub fn uses_in_transition(&self) -> bool {
        self.use_in_transition
    }

    /// Whether the exit animation is enabled
    pub fn uses_out_transition(&self) -> bool {
        self.use_out_transition
    }

    // ========== Queries ==========

    /// The state shown last, or `None` before the first [`show`](Self::show)
    pub fn current_state(&self) -> Option<&StateId> {
        self.current.as_ref()
    }

    /// The view bound to `state`
    pub fn view_for(&self, state: &StateId) -> Option<&H::View> {
        self.registry.view_for(state)
    }

    /// The state `view` is bound under
    pub fn state_for(&self, view: &H::View) -> Option<&StateId> {
        self.registry.state_for(view)
    }

    /// Whether `state` has a bound view
    pub fn is_bound(&self, state: &StateId) -> bool {
        self.registry.contains_state(state)
    }

    /// The state and view bindings
    pub fn registry(&self) -> &StateRegistry<H::View> {
        &self.registry
    }

    /// The shared placeholder view, once it has been built
    pub fn placeholder(&self) -> Option<&H::View> {
        self.placeholder.as_ref()
    }

    /// The host container
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host
    ///
    /// Changing the visibility of managed views directly breaks the
    /// single-visible-view guarantee; go through [`show`](Self::show).
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The transition driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Mutable access to the transition driver
    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Borrow host and driver at once, e.g. to advance animations on the host
    pub fn parts_mut(&mut self) -> (&mut H, &mut D) {
        (&mut self.host, &mut self.driver)
    }
}
