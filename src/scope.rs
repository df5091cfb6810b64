//! Composition root for session state.
//!
//! [`Providers`] is built explicitly by whoever serves a session (one HTTP
//! request, one CLI run) and handed to the renderer. A consumer that asks
//! for a state container the root was not given gets
//! [`ContextError::MissingProvider`] instead of a silent default.

use thiserror::Error;

use crate::focus::{FocusContext, KeyValueStore};
use crate::theme::ColorSchemeContext;

/// Misuse of the provider scope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// A consumer ran outside the provider it depends on.
    #[error("{consumer} must be used within a {provider}")]
    MissingProvider {
        /// Name of the consuming operation
        consumer: &'static str,
        /// Name of the missing provider
        provider: &'static str,
    },
}

const COLOR_SCHEME_PROVIDER: &str = "ColorSchemeProvider";
const FOCUS_PROVIDER: &str = "FocusProvider";

/// Session state containers available to rendering.
#[derive(Debug, Clone)]
pub struct Providers<S> {
    color_scheme: Option<ColorSchemeContext>,
    focus: Option<FocusContext<S>>,
}

impl<S> Default for Providers<S> {
    fn default() -> Self {
        Self {
            color_scheme: None,
            focus: None,
        }
    }
}

impl<S: KeyValueStore> Providers<S> {
    /// An empty scope with no providers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the color scheme provider.
    pub fn with_color_scheme(mut self, ctx: ColorSchemeContext) -> Self {
        self.color_scheme = Some(ctx);
        self
    }

    /// Adds the focus provider.
    ///
    /// The context is hydrated here if the caller has not done so, so nothing
    /// downstream can see pre-hydration state.
    pub fn with_focus(mut self, mut ctx: FocusContext<S>) -> Self {
        ctx.hydrate();
        self.focus = Some(ctx);
        self
    }

    /// The active color scheme context.
    pub fn color_scheme(&self) -> Result<&ColorSchemeContext, ContextError> {
        self.color_scheme
            .as_ref()
            .ok_or(ContextError::MissingProvider {
                consumer: "color_scheme",
                provider: COLOR_SCHEME_PROVIDER,
            })
    }

    /// Mutable access to the color scheme context.
    pub fn color_scheme_mut(&mut self) -> Result<&mut ColorSchemeContext, ContextError> {
        self.color_scheme
            .as_mut()
            .ok_or(ContextError::MissingProvider {
                consumer: "color_scheme_mut",
                provider: COLOR_SCHEME_PROVIDER,
            })
    }

    /// The focus context.
    pub fn focus(&self) -> Result<&FocusContext<S>, ContextError> {
        self.focus.as_ref().ok_or(ContextError::MissingProvider {
            consumer: "focus",
            provider: FOCUS_PROVIDER,
        })
    }

    /// Mutable access to the focus context.
    pub fn focus_mut(&mut self) -> Result<&mut FocusContext<S>, ContextError> {
        self.focus.as_mut().ok_or(ContextError::MissingProvider {
            consumer: "focus_mut",
            provider: FOCUS_PROVIDER,
        })
    }

    /// Takes the focus context out, e.g. to flush its store into a response.
    pub fn into_focus(self) -> Option<FocusContext<S>> {
        self.focus
    }
}
