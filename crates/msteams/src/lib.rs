//! Microsoft Teams MessageCard payloads for repository webhook events.
//!
//! This crate turns forge webhook events (pushes, issues, pull requests,
//! releases, and so on) into the `MessageCard` JSON accepted by Teams
//! incoming webhooks. It is a pure transformation: delivering the card is
//! left to the caller.
//!
//! # Usage
//!
//! ```no_run
//! use msteams::{get_payload, HookEvent, HookEventType, Payloader};
//!
//! # fn main() -> Result<(), msteams::CardError> {
//! let body = std::fs::read_to_string("push.json").unwrap();
//! let event = HookEvent::from_json(HookEventType::Push, &body)?;
//!
//! let card = get_payload(&event, "")?;
//! let json = card.json_payload()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - [`HookEvent`] pairs each event type with its typed payload
//! - [`get_payload`] dispatches an event to its builder in [`builders`]
//! - [`MessageCard`] is the wire format, encoded through [`Payloader`]

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod builders;
pub mod card;
pub mod error;
pub mod events;

pub use card::{Action, ActionTarget, Fact, MessageCard, Payloader, Section, ThemeColor};
pub use error::CardError;
pub use events::{HookEvent, HookEventType};

use tracing::debug;

/// Build the Teams card for a webhook event.
///
/// `meta` is the hook's integration settings; Teams needs none, so it is
/// ignored. Event types without a card produce [`MessageCard::default`].
///
/// # Errors
///
/// Returns an error only when a review card cannot classify its review.
pub fn get_payload(event: &HookEvent, meta: &str) -> Result<MessageCard, CardError> {
    let kind = event.event_type();
    debug!(event = %kind, meta_len = meta.len(), "Building MessageCard");

    match event {
        HookEvent::Create(p) => builders::create_card(p),
        HookEvent::Delete(p) => builders::delete_card(p),
        HookEvent::Fork(p) => builders::fork_card(p),
        HookEvent::Push(p) => builders::push_card(p),
        HookEvent::Issues(p) => builders::issues_card(p),
        HookEvent::IssueComment(p) => builders::issue_comment_card(p),
        HookEvent::PullRequest(p) => builders::pull_request_card(p),
        HookEvent::PullRequestReviewApproved(p)
        | HookEvent::PullRequestReviewRejected(p)
        | HookEvent::PullRequestReviewComment(p) => builders::review_card(p, kind),
        HookEvent::Repository(p) => builders::repository_card(p),
        HookEvent::Release(p) => builders::release_card(p),

        HookEvent::IssueAssign(_)
        | HookEvent::IssueLabel(_)
        | HookEvent::IssueMilestone(_)
        | HookEvent::PullRequestAssign(_)
        | HookEvent::PullRequestLabel(_)
        | HookEvent::PullRequestMilestone(_)
        | HookEvent::PullRequestComment(_)
        | HookEvent::PullRequestSync(_) => {
            debug!(event = %kind, "No card for event type, using empty card");
            Ok(MessageCard::default())
        }
    }
}
