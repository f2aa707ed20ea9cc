//! Unwraps forwarded reports.
//!
//! Abuse desks often receive a vendor report forwarded by a colleague or a
//! ticket system. This adapter peels off the outer message so the inner one
//! reaches the adapter for the original sender.

use log::debug;

use super::{Adapter, EmailView, Parsed};
use crate::config::MAX_SUBJECT_SNIPPET;
use crate::error_handling::ReportError;
use crate::utils::sanitize::snippet;

/// Priority of [`ForwardedMessageAdapter`]; runs before vendor adapters.
pub const FORWARD_PRIORITY: u32 = 10;

const SOURCE_ID: &str = "forwarded";

// Separator lines written by common mail clients above the forwarded message.
const FORWARD_MARKERS: &[&str] = &[
    "---------- Forwarded message ---------",
    "-------- Forwarded Message --------",
    "-----Original Message-----",
    "Begin forwarded message:",
];

/// Re-dispatches the message embedded in a forward.
///
/// Matches reports with a `message/rfc822` part or a forward separator in
/// the body. The embedded message becomes the new report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardedMessageAdapter;

impl ForwardedMessageAdapter {
    /// Creates the adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Adapter for ForwardedMessageAdapter {
    fn source_id(&self) -> &str {
        SOURCE_ID
    }

    fn priority(&self) -> u32 {
        FORWARD_PRIORITY
    }

    fn matches(&self, email: &EmailView) -> bool {
        email.part_by_content_type("message/rfc822").is_some()
            || forwarded_block(&email.text_body()).is_some()
    }

    fn parse(&self, email: &EmailView) -> Result<Parsed, ReportError> {
        let inner = match email.part_by_content_type("message/rfc822") {
            Some(part) => EmailView::from_raw(part.body().trim_start()),
            None => {
                let text = email.text_body();
                let block = forwarded_block(&text).unwrap_or("");
                EmailView::from_raw(block.trim_start())
            }
        };

        if inner.headers().is_empty() && inner.body().trim().is_empty() {
            return Err(ReportError::UnrecognizedFormat {
                source_id: SOURCE_ID.to_string(),
                subject: snippet(email.subject(), MAX_SUBJECT_SNIPPET),
            });
        }

        debug!(
            "Unwrapped forwarded report {:?} from {:?}",
            snippet(inner.subject(), MAX_SUBJECT_SNIPPET),
            snippet(inner.from(), MAX_SUBJECT_SNIPPET)
        );
        Ok(Parsed::Forward(inner))
    }
}

/// Text after the first forward separator line.
fn forwarded_block(text: &str) -> Option<&str> {
    FORWARD_MARKERS
        .iter()
        .filter_map(|marker| text.find(marker).map(|pos| (pos, marker.len())))
        .min_by_key(|(pos, _)| *pos)
        .map(|(pos, len)| {
            let rest = &text[pos + len..];
            rest.strip_prefix("\r\n")
                .or_else(|| rest.strip_prefix('\n'))
                .unwrap_or(rest)
        })
}
