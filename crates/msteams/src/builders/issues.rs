//! Cards for issue and comment events.

use crate::card::{Fact, MessageCard, ThemeColor};
use crate::error::CardError;
use crate::events::{CommentAction, IssueCommentPayload, IssuePayload};

use super::{issue_action, repository_fact};

/// Card for an issue state change.
///
/// # Errors
///
/// Never fails.
pub fn issues_card(p: &IssuePayload) -> Result<MessageCard, CardError> {
    let assignee = p
        .issue
        .assignee
        .as_ref()
        .map(|user| user.username.clone())
        .unwrap_or_default();
    let (verb, color) = issue_action(p.action, &assignee, false);
    let title = format!(
        "[{}] Issue {}: #{} {}",
        p.repository.full_name, verb, p.index, p.issue.title
    );

    Ok(MessageCard::new(
        title,
        color,
        &p.sender,
        p.issue.body.clone(),
        vec![
            repository_fact(&p.repository),
            Fact::new("Issue #:", p.issue.id.to_string()),
        ],
        format!("{}/issues/{}", p.repository.html_url, p.issue.number),
    ))
}

/// Card for a comment created, edited, or deleted on an issue or pull request.
///
/// Links to the comment anchor, except for deleted comments which link to
/// the issue itself.
///
/// # Errors
///
/// Never fails.
pub fn issue_comment_card(p: &IssueCommentPayload) -> Result<MessageCard, CardError> {
    let target = if p.is_pull { "pull request" } else { "issue" };
    let issue_url = format!("{}/issues/{}", p.repository.html_url, p.issue.number);

    let (phrase, color, url) = match p.action {
        CommentAction::Created => {
            let color = if p.is_pull {
                ThemeColor::GreenLight
            } else {
                ThemeColor::OrangeLight
            };
            ("New comment on", color, comment_url(&issue_url, p.comment.id))
        }
        CommentAction::Edited => (
            "Comment edited on",
            ThemeColor::Yellow,
            comment_url(&issue_url, p.comment.id),
        ),
        CommentAction::Deleted => ("Comment deleted on", ThemeColor::Red, issue_url),
    };

    let title = format!(
        "[{}] {} {} #{}: {}",
        p.repository.full_name, phrase, target, p.issue.number, p.issue.title
    );

    Ok(MessageCard::new(
        title,
        color,
        &p.sender,
        p.comment.body.clone(),
        vec![
            repository_fact(&p.repository),
            Fact::new("Issue #:", p.issue.id.to_string()),
        ],
        url,
    ))
}

fn comment_url(issue_url: &str, comment_id: i64) -> String {
    format!("{issue_url}#issuecomment-{comment_id}")
}
