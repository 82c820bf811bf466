//! Construction-time configuration of a [`StateLayout`](crate::StateLayout)

use crate::source::ViewSource;
use crate::state::StateId;
use crate::transition::Transition;

/// Sources for the reserved states and the transition setup
///
/// Every reserved state is bound from its source when the layout is built.
/// The default source is [`ViewSource::Absent`], so out of the box all five
/// reserved states share the zero-size placeholder.
#[derive(Debug, Clone)]
pub struct StateLayoutConfig {
    /// Source of the loading view
    pub loading_source: ViewSource,
    /// Source of the content view
    pub content_source: ViewSource,
    /// Source of the empty view
    pub empty_source: ViewSource,
    /// Source of the error view
    pub error_source: ViewSource,
    /// Source of the offline view
    pub offline_source: ViewSource,
    /// Animate the incoming view
    pub use_in_transition: bool,
    /// Animate the outgoing view
    pub use_out_transition: bool,
    /// Transition applied to the incoming view
    pub in_transition: Transition,
    /// Transition applied to the outgoing view
    pub out_transition: Transition,
}

impl Default for StateLayoutConfig {
    fn default() -> Self {
        Self {
            loading_source: ViewSource::Absent,
            content_source: ViewSource::Absent,
            empty_source: ViewSource::Absent,
            error_source: ViewSource::Absent,
            offline_source: ViewSource::Absent,
            use_in_transition: true,
            use_out_transition: false,
            in_transition: Transition::fade_in(),
            out_transition: Transition::fade_out(),
        }
    }
}

impl StateLayoutConfig {
    /// Set where the loading view comes from
    pub fn with_loading_source(mut self, source: impl Into<ViewSource>) -> Self {
        self.loading_source = source.into();
        self
    }

    /// Set where the content view comes from
    pub fn with_content_source(mut self, source: impl Into<ViewSource>) -> Self {
        self.content_source = source.into();
        self
    }

    /// Set where the empty view comes from
    pub fn with_empty_source(mut self, source: impl Into<ViewSource>) -> Self {
        self.empty_source = source.into();
        self
    }

    /// Set where the error view comes from
    pub fn with_error_source(mut self, source: impl Into<ViewSource>) -> Self {
        self.error_source = source.into();
        self
    }

    /// Set where the offline view comes from
    pub fn with_offline_source(mut self, source: impl Into<ViewSource>) -> Self {
        self.offline_source = source.into();
        self
    }

    /// Enable or disable the enter animation
    pub fn with_use_in_transition(mut self, value: bool) -> Self {
        self.use_in_transition = value;
        self
    }

    /// Enable or disable the exit animation
    pub fn with_use_out_transition(mut self, value: bool) -> Self {
        self.use_out_transition = value;
        self
    }

    /// Set the enter transition
    pub fn with_in_transition(mut self, transition: Transition) -> Self {
        self.in_transition = transition;
        self
    }

    /// Set the exit transition
    pub fn with_out_transition(mut self, transition: Transition) -> Self {
        self.out_transition = transition;
        self
    }

    /// Reserved states paired with their configured sources, in declaration order
    pub fn reserved_sources(&self) -> [(StateId, &ViewSource); 5] {
        [
            (StateId::LOADING, &self.loading_source),
            (StateId::CONTENT, &self.content_source),
            (StateId::EMPTY, &self.empty_source),
            (StateId::ERROR, &self.error_source),
            (StateId::OFFLINE, &self.offline_source),
        ]
    }
}
