//! Webhook event payloads sent by the forge.
//!
//! These mirror the JSON bodies of the host's webhooks. Only `action` fields
//! and the top-level objects are required; everything else defaults so that
//! partially populated payloads still decode.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CardError;

// =============================================================================
// Shared objects
// =============================================================================

/// An account on the forge.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: i64,
    #[serde(rename = "login", alias = "username")]
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub avatar_url: String,
}

/// A repository.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Repository {
    pub id: i64,
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub html_url: String,
}

/// Author or committer identity recorded in a commit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitUser {
    pub name: String,
    pub email: String,
    pub username: String,
}

/// A commit included in a push.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PayloadCommit {
    pub id: String,
    pub message: String,
    pub url: String,
    pub author: CommitUser,
    pub committer: CommitUser,
    pub timestamp: Option<DateTime<Utc>>,
}

/// An issue.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Issue {
    pub id: i64,
    pub number: i64,
    pub html_url: String,
    pub user: User,
    pub title: String,
    pub body: String,
    pub assignee: Option<User>,
    pub assignees: Vec<User>,
    pub state: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// A comment on an issue or pull request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub id: i64,
    pub html_url: String,
    pub user: User,
    pub body: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// A pull request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PullRequest {
    pub id: i64,
    pub number: i64,
    pub html_url: String,
    pub user: User,
    pub title: String,
    pub body: String,
    pub assignee: Option<User>,
    pub assignees: Vec<User>,
    pub state: String,
    #[serde(rename = "merged")]
    pub has_merged: bool,
    pub merged_at: Option<DateTime<Utc>>,
}

/// The review attached to a pull request review event.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    #[serde(rename = "type")]
    pub review_type: String,
    pub content: String,
}

/// A release.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Release {
    pub id: i64,
    pub tag_name: String,
    pub name: String,
    #[serde(rename = "body")]
    pub note: String,
    pub url: String,
    pub html_url: String,
    pub created_at: Option<DateTime<Utc>>,
}

// =============================================================================
// Actions
// =============================================================================

/// What happened to an issue or pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueAction {
    Opened,
    Closed,
    Reopened,
    Edited,
    Assigned,
    Unassigned,
    LabelUpdated,
    LabelCleared,
    Synchronized,
    Milestoned,
    Demilestoned,
}

impl IssueAction {
    /// Every action, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Opened,
        Self::Closed,
        Self::Reopened,
        Self::Edited,
        Self::Assigned,
        Self::Unassigned,
        Self::LabelUpdated,
        Self::LabelCleared,
        Self::Synchronized,
        Self::Milestoned,
        Self::Demilestoned,
    ];
}

/// What happened to a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentAction {
    Created,
    Edited,
    Deleted,
}

/// What happened to a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepositoryAction {
    Created,
    Deleted,
}

/// What happened to a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseAction {
    Published,
    Updated,
    Deleted,
}

// =============================================================================
// Event payloads
// =============================================================================

/// A branch or tag was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePayload {
    #[serde(default)]
    pub sha: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub ref_type: String,
    pub repository: Repository,
    #[serde(default)]
    pub sender: User,
}

/// A branch or tag was deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletePayload {
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub ref_type: String,
    #[serde(default)]
    pub pusher_type: String,
    pub repository: Repository,
    #[serde(default)]
    pub sender: User,
}

/// A repository was forked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForkPayload {
    pub forkee: Repository,
    pub repository: Repository,
    #[serde(default)]
    pub sender: User,
}

/// Commits were pushed to a ref.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushPayload {
    #[serde(rename = "ref")]
    pub git_ref: String,
    #[serde(default)]
    pub before: String,
    #[serde(default)]
    pub after: String,
    #[serde(default)]
    pub compare_url: String,
    #[serde(default)]
    pub commits: Vec<PayloadCommit>,
    pub repository: Repository,
    #[serde(default)]
    pub pusher: User,
    #[serde(default)]
    pub sender: User,
}

/// An issue changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuePayload {
    pub action: IssueAction,
    #[serde(rename = "number", default)]
    pub index: i64,
    pub issue: Issue,
    pub repository: Repository,
    #[serde(default)]
    pub sender: User,
}

/// A comment on an issue or pull request changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueCommentPayload {
    pub action: CommentAction,
    pub issue: Issue,
    #[serde(default)]
    pub comment: Comment,
    pub repository: Repository,
    #[serde(default)]
    pub sender: User,
    #[serde(default)]
    pub is_pull: bool,
}

/// A pull request changed or was reviewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestPayload {
    pub action: IssueAction,
    #[serde(rename = "number", default)]
    pub index: i64,
    pub pull_request: PullRequest,
    pub repository: Repository,
    #[serde(default)]
    pub sender: User,
    #[serde(default)]
    pub review: Option<Review>,
}

/// A repository was created or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryPayload {
    pub action: RepositoryAction,
    pub repository: Repository,
    #[serde(default)]
    pub sender: User,
}

/// A release changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleasePayload {
    pub action: ReleaseAction,
    pub release: Release,
    pub repository: Repository,
    #[serde(default)]
    pub sender: User,
}

// =============================================================================
// Event types
// =============================================================================

/// The event tags a webhook can be subscribed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HookEventType {
    Create,
    Delete,
    Fork,
    Push,
    Issues,
    IssueAssign,
    IssueLabel,
    IssueMilestone,
    IssueComment,
    PullRequest,
    PullRequestAssign,
    PullRequestLabel,
    PullRequestMilestone,
    PullRequestComment,
    PullRequestReviewApproved,
    PullRequestReviewRejected,
    PullRequestReviewComment,
    PullRequestSync,
    Repository,
    Release,
}

impl HookEventType {
    /// Every event type, in declaration order.
    pub const ALL: [Self; 20] = [
        Self::Create,
        Self::Delete,
        Self::Fork,
        Self::Push,
        Self::Issues,
        Self::IssueAssign,
        Self::IssueLabel,
        Self::IssueMilestone,
        Self::IssueComment,
        Self::PullRequest,
        Self::PullRequestAssign,
        Self::PullRequestLabel,
        Self::PullRequestMilestone,
        Self::PullRequestComment,
        Self::PullRequestReviewApproved,
        Self::PullRequestReviewRejected,
        Self::PullRequestReviewComment,
        Self::PullRequestSync,
        Self::Repository,
        Self::Release,
    ];

    /// Get the wire name of this event type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Fork => "fork",
            Self::Push => "push",
            Self::Issues => "issues",
            Self::IssueAssign => "issue_assign",
            Self::IssueLabel => "issue_label",
            Self::IssueMilestone => "issue_milestone",
            Self::IssueComment => "issue_comment",
            Self::PullRequest => "pull_request",
            Self::PullRequestAssign => "pull_request_assign",
            Self::PullRequestLabel => "pull_request_label",
            Self::PullRequestMilestone => "pull_request_milestone",
            Self::PullRequestComment => "pull_request_comment",
            Self::PullRequestReviewApproved => "pull_request_review_approved",
            Self::PullRequestReviewRejected => "pull_request_review_rejected",
            Self::PullRequestReviewComment => "pull_request_review_comment",
            Self::PullRequestSync => "pull_request_sync",
            Self::Repository => "repository",
            Self::Release => "release",
        }
    }

    /// Whether a card builder exists for this event type.
    #[must_use]
    pub const fn has_card(self) -> bool {
        matches!(
            self,
            Self::Create
                | Self::Delete
                | Self::Fork
                | Self::Push
                | Self::Issues
                | Self::IssueComment
                | Self::PullRequest
                | Self::PullRequestReviewApproved
                | Self::PullRequestReviewRejected
                | Self::PullRequestReviewComment
                | Self::Repository
                | Self::Release
        )
    }
}

impl fmt::Display for HookEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookEventType {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CardError::UnknownEventType(s.to_string()))
    }
}

/// A webhook event together with its typed payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookEvent {
    Create(CreatePayload),
    Delete(DeletePayload),
    Fork(ForkPayload),
    Push(PushPayload),
    Issues(IssuePayload),
    IssueAssign(IssuePayload),
    IssueLabel(IssuePayload),
    IssueMilestone(IssuePayload),
    IssueComment(IssueCommentPayload),
    PullRequest(PullRequestPayload),
    PullRequestAssign(PullRequestPayload),
    PullRequestLabel(PullRequestPayload),
    PullRequestMilestone(PullRequestPayload),
    PullRequestComment(IssueCommentPayload),
    PullRequestReviewApproved(PullRequestPayload),
    PullRequestReviewRejected(PullRequestPayload),
    PullRequestReviewComment(PullRequestPayload),
    PullRequestSync(PullRequestPayload),
    Repository(RepositoryPayload),
    Release(ReleasePayload),
}

impl HookEvent {
    /// Decode a webhook body for the given event type.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::Json`] if the body does not match the payload
    /// shape of `kind`.
    pub fn from_json(kind: HookEventType, body: &str) -> Result<Self, CardError> {
        let event = match kind {
            HookEventType::Create => Self::Create(serde_json::from_str(body)?),
            HookEventType::Delete => Self::Delete(serde_json::from_str(body)?),
            HookEventType::Fork => Self::Fork(serde_json::from_str(body)?),
            HookEventType::Push => Self::Push(serde_json::from_str(body)?),
            HookEventType::Issues => Self::Issues(serde_json::from_str(body)?),
            HookEventType::IssueAssign => Self::IssueAssign(serde_json::from_str(body)?),
            HookEventType::IssueLabel => Self::IssueLabel(serde_json::from_str(body)?),
            HookEventType::IssueMilestone => Self::IssueMilestone(serde_json::from_str(body)?),
            HookEventType::IssueComment => Self::IssueComment(serde_json::from_str(body)?),
            HookEventType::PullRequest => Self::PullRequest(serde_json::from_str(body)?),
            HookEventType::PullRequestAssign => {
                Self::PullRequestAssign(serde_json::from_str(body)?)
            }
            HookEventType::PullRequestLabel => Self::PullRequestLabel(serde_json::from_str(body)?),
            HookEventType::PullRequestMilestone => {
                Self::PullRequestMilestone(serde_json::from_str(body)?)
            }
            HookEventType::PullRequestComment => {
                Self::PullRequestComment(serde_json::from_str(body)?)
            }
            HookEventType::PullRequestReviewApproved => {
                Self::PullRequestReviewApproved(serde_json::from_str(body)?)
            }
            HookEventType::PullRequestReviewRejected => {
                Self::PullRequestReviewRejected(serde_json::from_str(body)?)
            }
            HookEventType::PullRequestReviewComment => {
                Self::PullRequestReviewComment(serde_json::from_str(body)?)
            }
            HookEventType::PullRequestSync => Self::PullRequestSync(serde_json::from_str(body)?),
            HookEventType::Repository => Self::Repository(serde_json::from_str(body)?),
            HookEventType::Release => Self::Release(serde_json::from_str(body)?),
        };
        Ok(event)
    }

    /// Get the event type tag of this event.
    #[must_use]
    pub const fn event_type(&self) -> HookEventType {
        match self {
            Self::Create(_) => HookEventType::Create,
            Self::Delete(_) => HookEventType::Delete,
            Self::Fork(_) => HookEventType::Fork,
            Self::Push(_) => HookEventType::Push,
            Self::Issues(_) => HookEventType::Issues,
            Self::IssueAssign(_) => HookEventType::IssueAssign,
            Self::IssueLabel(_) => HookEventType::IssueLabel,
            Self::IssueMilestone(_) => HookEventType::IssueMilestone,
            Self::IssueComment(_) => HookEventType::IssueComment,
            Self::PullRequest(_) => HookEventType::PullRequest,
            Self::PullRequestAssign(_) => HookEventType::PullRequestAssign,
            Self::PullRequestLabel(_) => HookEventType::PullRequestLabel,
            Self::PullRequestMilestone(_) => HookEventType::PullRequestMilestone,
            Self::PullRequestComment(_) => HookEventType::PullRequestComment,
            Self::PullRequestReviewApproved(_) => HookEventType::PullRequestReviewApproved,
            Self::PullRequestReviewRejected(_) => HookEventType::PullRequestReviewRejected,
            Self::PullRequestReviewComment(_) => HookEventType::PullRequestReviewComment,
            Self::PullRequestSync(_) => HookEventType::PullRequestSync,
            Self::Repository(_) => HookEventType::Repository,
            Self::Release(_) => HookEventType::Release,
        }
    }
}

/// Strip the `refs/heads/` or `refs/tags/` prefix from a full ref name.
#[must_use]
pub fn ref_end_name(git_ref: &str) -> &str {
    git_ref
        .strip_prefix("refs/heads/")
        .or_else(|| git_ref.strip_prefix("refs/tags/"))
        .unwrap_or(git_ref)
}
