//! Cards for pull request and review events.

use tracing::debug;

use crate::card::{Fact, MessageCard, ThemeColor};
use crate::error::CardError;
use crate::events::{HookEventType, IssueAction, PullRequestPayload};

use super::{assignee_names, issue_action, repository_fact};

/// Card for a pull request state change.
///
/// A closed pull request that was merged is reported as merged.
///
/// # Errors
///
/// Never fails.
pub fn pull_request_card(p: &PullRequestPayload) -> Result<MessageCard, CardError> {
    let pr = &p.pull_request;
    let assignees = assignee_names(pr.assignee.as_ref(), &pr.assignees);
    let (verb, color) = issue_action(p.action, &assignees, pr.has_merged);
    let title = format!(
        "[{}] Pull request {}: #{} {}",
        p.repository.full_name, verb, p.index, pr.title
    );

    Ok(MessageCard::new(
        title,
        color,
        &p.sender,
        pr.body.clone(),
        pull_request_facts(p),
        pr.html_url.clone(),
    ))
}

/// Card for a submitted review. `event` is the review flavor that was
/// dispatched.
///
/// Only the `synchronized` action carries a review; any other action yields
/// the empty card.
///
/// # Errors
///
/// Returns [`CardError::UnknownReviewEvent`] if `event` is not one of the
/// review event types.
pub fn review_card(
    p: &PullRequestPayload,
    event: HookEventType,
) -> Result<MessageCard, CardError> {
    if p.action != IssueAction::Synchronized {
        debug!(event = %event, action = ?p.action, "Review event without a review, skipping");
        return Ok(MessageCard::default());
    }

    let verb = review_verb(event)?;
    let title = format!(
        "[{}] Pull request review {}: #{} {}",
        p.repository.full_name, verb, p.index, p.pull_request.title
    );
    let color = match event {
        HookEventType::PullRequestReviewApproved => ThemeColor::Green,
        HookEventType::PullRequestReviewRejected => ThemeColor::Red,
        HookEventType::PullRequestReviewComment => ThemeColor::Grey,
        _ => ThemeColor::Yellow,
    };
    let text = p
        .review
        .as_ref()
        .map(|review| review.content.clone())
        .unwrap_or_default();

    Ok(MessageCard::new(
        title,
        color,
        &p.sender,
        text,
        pull_request_facts(p),
        p.pull_request.html_url.clone(),
    ))
}

/// Verb phrase for a review event type.
///
/// # Errors
///
/// Returns [`CardError::UnknownReviewEvent`] for non-review event types.
pub fn review_verb(event: HookEventType) -> Result<&'static str, CardError> {
    match event {
        HookEventType::PullRequestReviewApproved => Ok("approved"),
        HookEventType::PullRequestReviewRejected => Ok("rejected"),
        HookEventType::PullRequestReviewComment => Ok("commented"),
        other => Err(CardError::UnknownReviewEvent(other)),
    }
}

fn pull_request_facts(p: &PullRequestPayload) -> Vec<Fact> {
    vec![
        repository_fact(&p.repository),
        Fact::new("Pull request #:", p.pull_request.id.to_string()),
    ]
}
