//! Ordered adapter registry.

use std::borrow::Cow;

use log::{debug, warn};

use super::{Adapter, EmailView, Parsed};
use crate::config::{MAX_FORWARD_HOPS, MAX_SUBJECT_SNIPPET};
use crate::error_handling::{update_error_stats, InfoType, ProcessingStats, ReportError, WarningType};
use crate::event::Event;
use crate::utils::sanitize::snippet;

/// Adapters in dispatch order.
///
/// Adapters are sorted by [`Adapter::priority`]; adapters with equal
/// priority keep their registration order.
#[derive(Default)]
pub struct Registry {
    adapters: Vec<Box<dyn Adapter>>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an adapter after every adapter of equal or lower priority value.
    pub fn register(&mut self, adapter: impl Adapter + 'static) {
        let priority = adapter.priority();
        let position = self
            .adapters
            .iter()
            .position(|existing| existing.priority() > priority)
            .unwrap_or(self.adapters.len());
        self.adapters.insert(position, Box::new(adapter));
    }

    /// Builder form of [`Registry::register`].
    pub fn with(mut self, adapter: impl Adapter + 'static) -> Self {
        self.register(adapter);
        self
    }

    /// Number of registered adapters.
    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    /// True when no adapter is registered.
    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Source ids in dispatch order.
    pub fn source_ids(&self) -> Vec<&str> {
        self.adapters.iter().map(|a| a.source_id()).collect()
    }

    /// The first adapter that matches `email`.
    pub fn find(&self, email: &EmailView) -> Option<&dyn Adapter> {
        self.adapters
            .iter()
            .find(|adapter| adapter.matches(email))
            .map(|adapter| adapter.as_ref())
    }

    /// Runs `email` through the first matching adapter.
    ///
    /// A [`Parsed::Forward`] result is dispatched again, up to
    /// [`MAX_FORWARD_HOPS`] times.
    ///
    /// # Errors
    ///
    /// - [`ReportError::NoMatchingAdapter`] if no adapter matches
    /// - [`ReportError::TooManyForwards`] if the hop limit is exceeded
    /// - whatever the chosen adapter returns
    pub fn dispatch(&self, email: &EmailView) -> Result<Vec<Event>, ReportError> {
        self.run(email, || {})
    }

    /// [`Registry::dispatch`], recording the outcome in `stats`.
    pub fn dispatch_with_stats(
        &self,
        email: &EmailView,
        stats: &ProcessingStats,
    ) -> Result<Vec<Event>, ReportError> {
        if email.subject().trim().is_empty() {
            stats.increment_warning(WarningType::MissingSubject);
        }

        let result = self.run(email, || stats.increment_info(InfoType::ForwardedReport));
        match &result {
            Ok(events) => {
                stats.add_info(InfoType::EventsEmitted, events.len());
                if events.iter().any(|event| event.event_date.is_none()) {
                    stats.increment_warning(WarningType::MissingEventDate);
                }
            }
            Err(error) => update_error_stats(stats, error),
        }
        result
    }

    fn run(
        &self,
        email: &EmailView,
        mut on_forward: impl FnMut(),
    ) -> Result<Vec<Event>, ReportError> {
        let mut current: Cow<'_, EmailView> = Cow::Borrowed(email);

        for _ in 0..=MAX_FORWARD_HOPS {
            let Some(adapter) = self.find(&current) else {
                return Err(ReportError::NoMatchingAdapter {
                    from: snippet(current.from(), MAX_SUBJECT_SNIPPET),
                    subject: snippet(current.subject(), MAX_SUBJECT_SNIPPET),
                });
            };

            debug!(
                "Dispatching report {:?} to {}",
                snippet(current.subject(), MAX_SUBJECT_SNIPPET),
                adapter.source_id()
            );
            match adapter.parse(&current)? {
                Parsed::Events(mut events) => {
                    let before = events.len();
                    events.retain(Event::has_identifier);
                    if events.len() < before {
                        warn!(
                            "{} returned {} event(s) without an IP or URL, dropping them",
                            adapter.source_id(),
                            before - events.len()
                        );
                    }
                    return Ok(events);
                }
                Parsed::Forward(next) => {
                    debug!("{} forwarded the report", adapter.source_id());
                    on_forward();
                    current = Cow::Owned(next);
                }
            }
        }

        warn!(
            "Report {:?} exceeded {} forwards",
            snippet(email.subject(), MAX_SUBJECT_SNIPPET),
            MAX_FORWARD_HOPS
        );
        Err(ReportError::TooManyForwards {
            hops: MAX_FORWARD_HOPS,
        })
    }
}
