//! End-to-end tests: webhook JSON in, MessageCard JSON out.

use msteams::builders::review_card;
use msteams::{
    get_payload, CardError, HookEvent, HookEventType, MessageCard, Payloader, ThemeColor,
};
use serde_json::{json, Value};

// =============================================================================
// Fixtures
// =============================================================================

fn repository() -> Value {
    json!({
        "id": 4,
        "name": "widgets",
        "full_name": "acme/widgets",
        "html_url": "https://git.example.com/acme/widgets"
    })
}

fn sender() -> Value {
    json!({
        "id": 2,
        "login": "ann",
        "full_name": "Ann Example",
        "email": "ann@example.com",
        "avatar_url": "https://git.example.com/avatars/2"
    })
}

fn push_body(commits: &Value) -> Value {
    json!({
        "ref": "refs/heads/main",
        "before": "0000000",
        "after": "def5678",
        "compare_url": "https://git.example.com/acme/widgets/compare/0000000...def5678",
        "commits": commits,
        "repository": repository(),
        "pusher": sender(),
        "sender": sender()
    })
}

fn pull_request_body(action: &str) -> Value {
    json!({
        "action": action,
        "number": 12,
        "pull_request": {
            "id": 3012,
            "number": 12,
            "html_url": "https://git.example.com/acme/widgets/pulls/12",
            "title": "Add gizmo",
            "body": "Adds the gizmo.",
            "merged": false
        },
        "review": {"type": "pull_request_review_approved", "content": "Ship it"},
        "repository": repository(),
        "sender": sender()
    })
}

fn decode(kind: HookEventType, body: &Value) -> HookEvent {
    HookEvent::from_json(kind, &body.to_string()).unwrap()
}

fn render(kind: HookEventType, body: &Value) -> MessageCard {
    get_payload(&decode(kind, body), "").unwrap()
}

// =============================================================================
// Push
// =============================================================================

#[test]
fn push_two_commits_scenario() {
    let commits = json!([
        {
            "id": "abc1234567890",
            "url": "https://x/c/abc1234",
            "message": "fix bug\n",
            "author": {"name": "Ann", "email": "ann@example.com"}
        },
        {
            "id": "def5678901234",
            "url": "https://x/c/def5678",
            "message": "add test",
            "author": {"name": "Bob", "email": "bob@example.com"}
        }
    ]);
    let card = render(HookEventType::Push, &push_body(&commits));

    assert_eq!(card.title, "[acme/widgets:main] 2 new commits");
    assert_eq!(card.summary, card.title);
    assert_eq!(card.theme_color, "1ac600");
    assert_eq!(
        card.sections[0].text,
        "[abc1234](https://x/c/abc1234) fix bug - Ann\n[def5678](https://x/c/def5678) add test - Bob"
    );
    assert_eq!(
        card.link(),
        Some("https://git.example.com/acme/widgets/compare/0000000...def5678")
    );
}

#[test]
fn push_single_commit_links_to_commit() {
    let commits = json!([{
        "id": "abc1234567890",
        "url": "https://x/c/abc1234",
        "message": "fix bug\r\n",
        "author": {"name": "Ann"}
    }]);
    let card = render(HookEventType::Push, &push_body(&commits));

    assert_eq!(card.title, "[acme/widgets:main] 1 new commit");
    assert_eq!(card.link(), Some("https://x/c/abc1234"));
    assert_eq!(card.sections[0].text, "[abc1234](https://x/c/abc1234) fix bug - Ann");
}

#[test]
fn push_keeps_commit_order_and_inner_newlines() {
    let commits: Vec<Value> = (0..5)
        .map(|i| {
            json!({
                "id": format!("{i}{i}{i}{i}{i}{i}{i}{i}"),
                "url": format!("https://x/c/{i}"),
                "message": format!("line {i}\r\n\r\nbody {i}\r\n"),
                "author": {"name": "Ann"}
            })
        })
        .collect();
    let card = render(HookEventType::Push, &push_body(&Value::Array(commits)));

    let lines: Vec<&str> = card.sections[0].text.split("\n[").collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[0],
        "[0000000](https://x/c/0) line 0\r\n\r\nbody 0 - Ann"
    );
    assert!(lines[4].starts_with("4444444](https://x/c/4)"));
    assert!(!card.sections[0].text.ends_with('\n'));
}

// =============================================================================
// Dispatch
// =============================================================================

#[test]
fn every_built_card_has_one_section_and_action() {
    let cases = [
        (
            HookEventType::Create,
            json!({"ref": "v1", "ref_type": "tag", "repository": repository(), "sender": sender()}),
        ),
        (
            HookEventType::Delete,
            json!({"ref": "old", "ref_type": "branch", "repository": repository(), "sender": sender()}),
        ),
        (
            HookEventType::Fork,
            json!({"forkee": repository(), "repository": repository(), "sender": sender()}),
        ),
        (
            HookEventType::Issues,
            json!({
                "action": "reopened",
                "number": 7,
                "issue": {"id": 1001, "number": 7, "title": "Crash"},
                "repository": repository(),
                "sender": sender()
            }),
        ),
        (
            HookEventType::IssueComment,
            json!({
                "action": "edited",
                "issue": {"id": 1001, "number": 7, "title": "Crash"},
                "comment": {"id": 55, "body": "me too"},
                "is_pull": false,
                "repository": repository(),
                "sender": sender()
            }),
        ),
        (HookEventType::PullRequest, pull_request_body("opened")),
        (HookEventType::PullRequestReviewRejected, pull_request_body("synchronized")),
        (
            HookEventType::Repository,
            json!({"action": "created", "repository": repository(), "sender": sender()}),
        ),
        (
            HookEventType::Release,
            json!({
                "action": "published",
                "release": {"tag_name": "v1", "body": "notes", "html_url": "https://x/r/v1"},
                "repository": repository(),
                "sender": sender()
            }),
        ),
    ];

    for (kind, body) in cases {
        let card = render(kind, &body);
        assert_eq!(card.sections.len(), 1, "{kind}");
        assert_eq!(card.potential_action.len(), 1, "{kind}");
        assert_eq!(card.potential_action[0].targets.len(), 1, "{kind}");
        assert_eq!(card.potential_action[0].targets[0].os, "default", "{kind}");
        assert_eq!(card.sections[0].facts[0].name, "Repository:", "{kind}");
        assert_eq!(card.sections[0].activity_subtitle, "ann", "{kind}");
        assert_eq!(card.sections[0].activity_title, "Ann Example", "{kind}");
    }
}

#[test]
fn unregistered_kinds_render_empty_card() {
    let issue = json!({
        "action": "assigned",
        "number": 7,
        "issue": {"id": 1001, "number": 7, "title": "Crash"},
        "repository": repository(),
        "sender": sender()
    });
    let comment = json!({
        "action": "created",
        "issue": {"id": 1001, "number": 7, "title": "Crash"},
        "comment": {"id": 55},
        "is_pull": true,
        "repository": repository(),
        "sender": sender()
    });
    let cases = [
        (HookEventType::IssueAssign, issue.clone()),
        (HookEventType::IssueLabel, issue.clone()),
        (HookEventType::IssueMilestone, issue),
        (HookEventType::PullRequestAssign, pull_request_body("assigned")),
        (HookEventType::PullRequestLabel, pull_request_body("label_updated")),
        (HookEventType::PullRequestMilestone, pull_request_body("milestoned")),
        (HookEventType::PullRequestComment, comment),
        (HookEventType::PullRequestSync, pull_request_body("synchronized")),
    ];

    for (kind, body) in cases {
        assert!(!kind.has_card());
        assert_eq!(render(kind, &body), MessageCard::default(), "{kind}");
    }
}

#[test]
fn review_kinds_through_dispatch() {
    let cases = [
        (HookEventType::PullRequestReviewApproved, "approved", ThemeColor::Green),
        (HookEventType::PullRequestReviewRejected, "rejected", ThemeColor::Red),
        (HookEventType::PullRequestReviewComment, "commented", ThemeColor::Grey),
    ];

    for (kind, verb, color) in cases {
        let card = render(kind, &pull_request_body("synchronized"));
        assert_eq!(
            card.title,
            format!("[acme/widgets] Pull request review {verb}: #12 Add gizmo")
        );
        assert_eq!(card.theme_color, color.hex());
        assert_eq!(card.sections[0].text, "Ship it");
    }
}

#[test]
fn review_with_unknown_kind_is_error() {
    let HookEvent::PullRequest(payload) =
        decode(HookEventType::PullRequest, &pull_request_body("synchronized"))
    else {
        panic!("expected pull request event");
    };

    let err = review_card(&payload, HookEventType::PullRequestSync).unwrap_err();
    assert!(matches!(err, CardError::UnknownReviewEvent(HookEventType::PullRequestSync)));
    assert_eq!(
        err.to_string(),
        "unknown pull request review event: pull_request_sync"
    );
}

#[test]
fn merged_pull_request_card() {
    let mut body = pull_request_body("closed");
    body["pull_request"]["merged"] = json!(true);

    let card = render(HookEventType::PullRequest, &body);
    assert_eq!(card.title, "[acme/widgets] Pull request merged: #12 Add gizmo");
    assert_eq!(card.theme_color, "7289da");
}

// =============================================================================
// Wire format
// =============================================================================

#[test]
fn serialization_is_deterministic() {
    let body = pull_request_body("edited");
    let first = render(HookEventType::PullRequest, &body).json_payload().unwrap();
    let second = render(HookEventType::PullRequest, &body).json_payload().unwrap();
    assert_eq!(first, second);
}

#[test]
fn wire_format_snapshot() {
    let card = render(
        HookEventType::Repository,
        &json!({"action": "created", "repository": repository(), "sender": sender()}),
    );
    let json = String::from_utf8(card.json_payload().unwrap()).unwrap();

    let expected = r#"{
  "@type": "MessageCard",
  "@context": "https://schema.org/extensions",
  "themeColor": "1ac600",
  "title": "[acme/widgets] Repository created",
  "summary": "[acme/widgets] Repository created",
  "sections": [
    {
      "activityTitle": "Ann Example",
      "activitySubtitle": "ann",
      "activityImage": "https://git.example.com/avatars/2",
      "facts": [
        {
          "name": "Repository:",
          "value": "acme/widgets"
        }
      ],
      "text": ""
    }
  ],
  "potentialAction": [
    {
      "@type": "OpenUri",
      "name": "View in Gitea",
      "targets": [
        {
          "os": "default",
          "uri": "https://git.example.com/acme/widgets"
        }
      ]
    }
  ]
}"#;
    assert_eq!(json, expected);
}

#[test]
fn card_round_trips_through_json() {
    let card = render(HookEventType::PullRequest, &pull_request_body("opened"));
    let decoded: MessageCard = serde_json::from_slice(&card.json_payload().unwrap()).unwrap();
    assert_eq!(decoded, card);
}

// =============================================================================
// Host payloads
// =============================================================================

#[test]
fn issue_assigned_names_issue_assignee_only() {
    let body = json!({
        "action": "assigned",
        "number": 7,
        "issue": {
            "id": 1001,
            "number": 7,
            "title": "Crash",
            "assignee": {"login": "ann"},
            "assignees": [{"login": "ann"}, {"login": "bob"}]
        },
        "repository": repository(),
        "sender": sender()
    });

    let card = render(HookEventType::Issues, &body);
    assert_eq!(card.title, "[acme/widgets] Issue assigned to ann: #7 Crash");
}

#[test]
fn review_without_synchronized_action_is_empty_card() {
    for kind in [
        HookEventType::PullRequestReviewApproved,
        HookEventType::PullRequestReviewRejected,
        HookEventType::PullRequestReviewComment,
    ] {
        let card = render(kind, &pull_request_body("opened"));
        assert_eq!(card, MessageCard::default(), "{kind}");
        assert!(card.sections.is_empty());
    }
}

#[test]
fn timestamped_host_payloads_decode() {
    let commits = json!([{
        "id": "abc1234567890",
        "url": "https://x/c/abc1234",
        "message": "fix bug\n",
        "author": {"name": "Ann", "email": "ann@example.com", "username": "ann"},
        "committer": {"name": "Ann", "email": "ann@example.com", "username": "ann"},
        "timestamp": "2020-03-04T10:20:30+01:00"
    }]);
    let HookEvent::Push(push) = decode(HookEventType::Push, &push_body(&commits)) else {
        panic!("expected push event");
    };
    assert_eq!(
        push.commits[0].timestamp.unwrap().to_rfc3339(),
        "2020-03-04T09:20:30+00:00"
    );

    let mut pr = pull_request_body("closed");
    pr["pull_request"]["merged"] = json!(true);
    pr["pull_request"]["merged_at"] = json!("2020-03-05T08:00:00Z");
    let card = render(HookEventType::PullRequest, &pr);
    assert_eq!(card.theme_color, ThemeColor::Purple.hex());

    let comment = json!({
        "action": "created",
        "issue": {"id": 1001, "number": 7, "title": "Crash", "created_at": "2020-03-01T00:00:00Z"},
        "comment": {"id": 55, "body": "me too", "created_at": "2020-03-02T12:00:00+09:00"},
        "is_pull": false,
        "repository": repository(),
        "sender": sender()
    });
    let card = render(HookEventType::IssueComment, &comment);
    assert_eq!(card.sections[0].text, "me too");

    let release = json!({
        "action": "published",
        "release": {
            "tag_name": "v1",
            "body": "notes",
            "html_url": "https://x/r/v1",
            "created_at": "2020-03-06T00:00:00Z"
        },
        "repository": repository(),
        "sender": sender()
    });
    let card = render(HookEventType::Release, &release);
    assert_eq!(card.title, "[acme/widgets] Release created: v1");
}
