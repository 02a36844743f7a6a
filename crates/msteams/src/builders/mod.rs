//! Card builders, one per event type.
//!
//! Every builder returns `Result` so the dispatcher can treat them uniformly,
//! even though only the review builder can fail.

#![allow(clippy::unnecessary_wraps)]

pub mod issues;
pub mod pulls;
pub mod repo;

pub use issues::{issue_comment_card, issues_card};
pub use pulls::{pull_request_card, review_card, review_verb};
pub use repo::{create_card, delete_card, fork_card, push_card, release_card, repository_card};

use crate::card::{Fact, ThemeColor};
use crate::events::{IssueAction, Repository, User};

/// The "Repository:" fact that leads every repository-scoped card.
fn repository_fact(repo: &Repository) -> Fact {
    Fact::new("Repository:", repo.full_name.clone())
}

/// Comma-separated pull request assignee logins, preferring the full list.
fn assignee_names(assignee: Option<&User>, assignees: &[User]) -> String {
    if assignees.is_empty() {
        assignee.map(|user| user.username.clone()).unwrap_or_default()
    } else {
        assignees
            .iter()
            .map(|user| user.username.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Verb phrase and color for an issue or pull request action.
///
/// `merged` only matters for `Closed`; issues always pass `false`.
fn issue_action(action: IssueAction, assignees: &str, merged: bool) -> (String, ThemeColor) {
    match action {
        IssueAction::Opened => ("opened".to_string(), ThemeColor::Green),
        IssueAction::Closed if merged => ("merged".to_string(), ThemeColor::Purple),
        IssueAction::Closed => ("closed".to_string(), ThemeColor::Red),
        IssueAction::Reopened => ("re-opened".to_string(), ThemeColor::Yellow),
        IssueAction::Edited => ("edited".to_string(), ThemeColor::Yellow),
        IssueAction::Assigned => (format!("assigned to {assignees}"), ThemeColor::Green),
        IssueAction::Unassigned => ("unassigned".to_string(), ThemeColor::Yellow),
        IssueAction::LabelUpdated => ("labels updated".to_string(), ThemeColor::Yellow),
        IssueAction::LabelCleared => ("labels cleared".to_string(), ThemeColor::Yellow),
        IssueAction::Synchronized => ("synchronized".to_string(), ThemeColor::Yellow),
        IssueAction::Milestoned => ("milestone".to_string(), ThemeColor::Yellow),
        IssueAction::Demilestoned => ("clear milestone".to_string(), ThemeColor::Yellow),
    }
}
