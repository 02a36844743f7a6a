//! Cards for ref, push, fork, repository, and release events.

use crate::card::{Fact, MessageCard, ThemeColor};
use crate::error::CardError;
use crate::events::{
    ref_end_name, CreatePayload, DeletePayload, ForkPayload, PayloadCommit, PushPayload,
    ReleaseAction, ReleasePayload, RepositoryAction, RepositoryPayload,
};

use super::repository_fact;

/// Card for a created branch or tag.
///
/// # Errors
///
/// Never fails.
pub fn create_card(p: &CreatePayload) -> Result<MessageCard, CardError> {
    let ref_name = ref_end_name(&p.git_ref);
    let title = format!(
        "[{}] {} {} created",
        p.repository.full_name, p.ref_type, ref_name
    );

    Ok(MessageCard::new(
        title,
        ThemeColor::Green,
        &p.sender,
        String::new(),
        vec![
            repository_fact(&p.repository),
            Fact::new(format!("{}:", p.ref_type), ref_name),
        ],
        format!("{}/src/{}", p.repository.html_url, ref_name),
    ))
}

/// Card for a deleted branch or tag.
///
/// # Errors
///
/// Never fails.
pub fn delete_card(p: &DeletePayload) -> Result<MessageCard, CardError> {
    let ref_name = ref_end_name(&p.git_ref);
    let title = format!(
        "[{}] {} {} deleted",
        p.repository.full_name, p.ref_type, ref_name
    );

    Ok(MessageCard::new(
        title,
        ThemeColor::Yellow,
        &p.sender,
        String::new(),
        vec![
            repository_fact(&p.repository),
            Fact::new(format!("{}:", p.ref_type), ref_name),
        ],
        format!("{}/src/{}", p.repository.html_url, ref_name),
    ))
}

/// Card for a fork. `repository` is the new fork, `forkee` its source.
///
/// # Errors
///
/// Never fails.
pub fn fork_card(p: &ForkPayload) -> Result<MessageCard, CardError> {
    let title = format!(
        "{} is forked to {}",
        p.forkee.full_name, p.repository.full_name
    );

    Ok(MessageCard::new(
        title,
        ThemeColor::Green,
        &p.sender,
        String::new(),
        vec![
            repository_fact(&p.repository),
            Fact::new("Forkee:", p.forkee.full_name.clone()),
        ],
        p.repository.html_url.clone(),
    ))
}

/// Card for pushed commits.
///
/// The link goes to the commit when exactly one was pushed, otherwise to the
/// compare view, and to the branch when neither URL is known.
///
/// # Errors
///
/// Never fails.
pub fn push_card(p: &PushPayload) -> Result<MessageCard, CardError> {
    let branch = ref_end_name(&p.git_ref);

    let (commit_desc, mut link) = match p.commits.as_slice() {
        [commit] => ("1 new commit".to_string(), commit.url.clone()),
        commits => (
            format!("{} new commits", commits.len()),
            p.compare_url.clone(),
        ),
    };
    if link.is_empty() {
        link = format!("{}/src/{}", p.repository.html_url, branch);
    }

    let title = format!("[{}:{}] {}", p.repository.full_name, branch, commit_desc);
    let text = p
        .commits
        .iter()
        .map(commit_line)
        .collect::<Vec<_>>()
        .join("\n");

    Ok(MessageCard::new(
        title,
        ThemeColor::Green,
        &p.sender,
        text,
        vec![
            repository_fact(&p.repository),
            Fact::new("Commit count:", p.commits.len().to_string()),
        ],
        link,
    ))
}

/// `[abc1234](url) message - author` for one commit.
fn commit_line(commit: &PayloadCommit) -> String {
    let short_id = commit.id.get(..7).unwrap_or(&commit.id);
    format!(
        "[{}]({}) {} - {}",
        short_id,
        commit.url,
        commit.message.trim_end_matches(['\r', '\n']),
        commit.author.name
    )
}

/// Card for a created or deleted repository.
///
/// Deleted repositories have nothing to link to, so the target URI is empty.
///
/// # Errors
///
/// Never fails.
pub fn repository_card(p: &RepositoryPayload) -> Result<MessageCard, CardError> {
    let (verb, color, url) = match p.action {
        RepositoryAction::Created => ("created", ThemeColor::Green, p.repository.html_url.clone()),
        RepositoryAction::Deleted => ("deleted", ThemeColor::Yellow, String::new()),
    };
    let title = format!("[{}] Repository {}", p.repository.full_name, verb);

    Ok(MessageCard::new(
        title,
        color,
        &p.sender,
        String::new(),
        vec![repository_fact(&p.repository)],
        url,
    ))
}

/// Card for a published, updated, or deleted release.
///
/// # Errors
///
/// Never fails.
pub fn release_card(p: &ReleasePayload) -> Result<MessageCard, CardError> {
    let verb = match p.action {
        ReleaseAction::Published => "created",
        ReleaseAction::Updated => "updated",
        ReleaseAction::Deleted => "deleted",
    };
    let title = format!(
        "[{}] Release {}: {}",
        p.repository.full_name, verb, p.release.tag_name
    );
    let url = if p.release.html_url.is_empty() {
        p.release.url.clone()
    } else {
        p.release.html_url.clone()
    };

    Ok(MessageCard::new(
        title,
        ThemeColor::Green,
        &p.sender,
        p.release.note.clone(),
        vec![
            repository_fact(&p.repository),
            Fact::new("Tag:", p.release.tag_name.clone()),
        ],
        url,
    ))
}
