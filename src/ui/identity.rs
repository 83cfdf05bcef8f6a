//! Session identity context with request-coalescing semantics.
//!
//! The identity service is called at most once per page lifetime: the first
//! consumer to ask triggers the request, and every consumer (concurrent or
//! later) shares the same reactive state. There is no eviction and no
//! re-fetch; the identity is immutable for the page session.

use leptos::prelude::*;

use crate::core::model::Identity;
use crate::core::sync::FetchOnce;

/// Identity resolution state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum IdentityState {
    /// Initial state, or the single whoami request is in flight.
    #[default]
    Loading,
    /// The identity fetch failed. Dependents degrade to non-owner
    /// affordances instead of surfacing the failure per-row.
    Anonymous,
    /// Identity resolved for the rest of the page session.
    Known(Identity),
}

/// Identity context shared read-only across the component tree.
///
/// Constructed once at the composition root; every component that needs to
/// compare against a group owner or member reads `state`.
#[derive(Clone)]
pub struct IdentityContext {
    /// Current identity state.
    pub state: RwSignal<IdentityState>,
    fetch: FetchOnce,
}

impl IdentityContext {
    /// The resolved identity, if known.
    pub fn identity(&self) -> Option<Identity> {
        match self.state.get() {
            IdentityState::Known(identity) => Some(identity),
            _ => None,
        }
    }

    /// Trigger the underlying whoami request.
    ///
    /// Safe to call from any number of consumers: the [`FetchOnce`] guard
    /// coalesces them to a single request, and later callers simply observe
    /// the shared state.
    pub fn ensure_loaded(&self) {
        if !self.fetch.begin() {
            return;
        }

        #[cfg(not(feature = "ssr"))]
        {
            use leptos::task::spawn_local;

            let state = self.state;
            spawn_local(async move {
                match crate::core::service::whoami().await {
                    Ok(user) => state.set(IdentityState::Known(user)),
                    Err(err) => {
                        leptos::logging::warn!("identity fetch failed: {err}");
                        state.set(IdentityState::Anonymous);
                    }
                }
            });
        }
    }
}

/// Provide the identity context to the component tree.
pub fn provide_identity_context() -> IdentityContext {
    let ctx = IdentityContext {
        state: RwSignal::new(IdentityState::Loading),
        fetch: FetchOnce::new(),
    };
    provide_context(ctx.clone());
    ctx
}

/// Get the identity context from the component tree.
pub fn use_identity_context() -> IdentityContext {
    expect_context::<IdentityContext>()
}
