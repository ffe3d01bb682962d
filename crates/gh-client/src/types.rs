//! GitHub API data transfer objects
//!
//! These types represent the data returned from the GitHub API for the
//! current user and the received events feed. The events endpoint returns one
//! flat payload object per event whose meaningful fields depend on the event
//! `type`; here that is decoded into [`EventKind`], which carries only the
//! fields each kind needs.

use chrono::{DateTime, Utc};
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use std::fmt;

/// Suffix GitHub appends to app/bot account logins
pub const BOT_SUFFIX: &str = "[bot]";

/// The authenticated user (`GET /user`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// GitHub username
    pub login: String,
}

/// The user who performed an event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    #[serde(default, deserialize_with = "lenient")]
    pub login: String,
}

impl Actor {
    /// Whether the login belongs to a GitHub App / bot account
    pub fn is_bot(&self) -> bool {
        self.login.ends_with(BOT_SUFFIX)
    }
}

/// The repository an event targets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    /// "owner/repo"
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
}

/// One entry of a received events feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEvent", into = "RawEvent")]
pub struct Event {
    pub actor: Actor,
    pub repo: Repo,
    /// Not used for rendering, kept for `--json` output
    pub created_at: Option<DateTime<Utc>>,
    pub kind: EventKind,
}

/// Kind of Git reference created or deleted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefType {
    Repository,
    Branch,
    Tag,
    /// Anything else, including a missing value (empty string)
    Other(String),
}

impl RefType {
    pub fn as_str(&self) -> &str {
        match self {
            RefType::Repository => "repository",
            RefType::Branch => "branch",
            RefType::Tag => "tag",
            RefType::Other(s) => s,
        }
    }
}

impl From<&str> for RefType {
    fn from(s: &str) -> Self {
        match s {
            "repository" => RefType::Repository,
            "branch" => RefType::Branch,
            "tag" => RefType::Tag,
            other => RefType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for RefType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Issue or pull request reference shown in the feed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueRef {
    /// Missing in malformed payloads
    pub number: Option<u64>,
    pub title: String,
}

/// Type-specific data of an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Create {
        ref_name: String,
        ref_type: RefType,
    },
    Delete {
        ref_name: String,
        ref_type: RefType,
    },
    Fork {
        forkee_full_name: String,
    },
    Issues {
        action: String,
        issue: IssueRef,
    },
    IssueComment {
        action: String,
        issue: IssueRef,
        /// Decoded but never rendered
        comment_body: String,
    },
    Member {
        action: String,
        member_login: String,
    },
    PullRequest {
        action: String,
        pull_request: IssueRef,
    },
    Push,
    Release {
        tag_name: String,
    },
    /// Also used by GitHub for un-starring
    Watch {
        action: String,
    },
    /// Event types this client does not know about
    Unknown {
        event_type: String,
    },
}

impl EventKind {
    /// The GitHub event type tag, e.g. `PushEvent`
    pub fn type_name(&self) -> &str {
        match self {
            EventKind::Create { .. } => "CreateEvent",
            EventKind::Delete { .. } => "DeleteEvent",
            EventKind::Fork { .. } => "ForkEvent",
            EventKind::Issues { .. } => "IssuesEvent",
            EventKind::IssueComment { .. } => "IssueCommentEvent",
            EventKind::Member { .. } => "MemberEvent",
            EventKind::PullRequest { .. } => "PullRequestEvent",
            EventKind::Push => "PushEvent",
            EventKind::Release { .. } => "ReleaseEvent",
            EventKind::Watch { .. } => "WatchEvent",
            EventKind::Unknown { event_type } => event_type,
        }
    }
}

/// Wire form of an event as returned by `GET /users/{login}/received_events`
#[derive(Debug, Serialize, Deserialize)]
struct RawEvent {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    event_type: String,
    #[serde(default, deserialize_with = "lenient")]
    actor: Actor,
    #[serde(default, deserialize_with = "lenient")]
    repo: Repo,
    #[serde(default)]
    payload: Value,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    created_at: Option<DateTime<Utc>>,
}

/// Deserialize a field on its own, using the default for `null` or a
/// mismatched shape so one bad field never fails the surrounding event
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(serde_json::from_value(value).unwrap_or_else(|e| {
        debug!("Ignoring malformed field: {}", e);
        T::default()
    }))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RefPayload {
    #[serde(rename = "ref", deserialize_with = "lenient")]
    ref_name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    ref_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ForkPayload {
    #[serde(deserialize_with = "lenient")]
    forkee: Option<ForkeeWire>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ForkeeWire {
    #[serde(deserialize_with = "lenient")]
    full_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IssuePayload {
    #[serde(deserialize_with = "lenient")]
    action: Option<String>,
    #[serde(deserialize_with = "lenient")]
    issue: Option<IssueWire>,
    #[serde(deserialize_with = "lenient")]
    comment: Option<CommentWire>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct IssueWire {
    #[serde(deserialize_with = "lenient")]
    number: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    title: Option<String>,
}

impl From<Option<IssueWire>> for IssueRef {
    fn from(wire: Option<IssueWire>) -> Self {
        let wire = wire.unwrap_or_default();
        IssueRef {
            number: wire.number,
            title: wire.title.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CommentWire {
    #[serde(deserialize_with = "lenient")]
    body: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct MemberPayload {
    #[serde(deserialize_with = "lenient")]
    action: Option<String>,
    #[serde(deserialize_with = "lenient")]
    member: Option<LoginWire>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct LoginWire {
    #[serde(deserialize_with = "lenient")]
    login: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PullRequestPayload {
    #[serde(deserialize_with = "lenient")]
    action: Option<String>,
    #[serde(deserialize_with = "lenient")]
    number: Option<u64>,
    #[serde(deserialize_with = "lenient")]
    pull_request: Option<IssueWire>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ReleasePayload {
    #[serde(deserialize_with = "lenient")]
    release: Option<ReleaseWire>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ReleaseWire {
    #[serde(deserialize_with = "lenient")]
    tag_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ActionPayload {
    #[serde(deserialize_with = "lenient")]
    action: Option<String>,
}

/// Decode a payload, falling back to an empty one when it does not match
fn decode_payload<T: DeserializeOwned + Default>(event_type: &str, payload: Value) -> T {
    if payload.is_null() {
        return T::default();
    }
    serde_json::from_value(payload).unwrap_or_else(|e| {
        debug!("Malformed {} payload, using defaults: {}", event_type, e);
        T::default()
    })
}

fn decode_kind(event_type: String, payload: Value) -> EventKind {
    match event_type.as_str() {
        "CreateEvent" | "DeleteEvent" => {
            let p: RefPayload = decode_payload(&event_type, payload);
            let ref_name = p.ref_name.unwrap_or_default();
            let ref_type = RefType::from(p.ref_type.as_deref().unwrap_or_default());
            if event_type == "CreateEvent" {
                EventKind::Create { ref_name, ref_type }
            } else {
                EventKind::Delete { ref_name, ref_type }
            }
        }
        "ForkEvent" => {
            let p: ForkPayload = decode_payload(&event_type, payload);
            EventKind::Fork {
                forkee_full_name: p.forkee.and_then(|f| f.full_name).unwrap_or_default(),
            }
        }
        "IssuesEvent" => {
            let p: IssuePayload = decode_payload(&event_type, payload);
            EventKind::Issues {
                action: p.action.unwrap_or_default(),
                issue: p.issue.into(),
            }
        }
        "IssueCommentEvent" => {
            let p: IssuePayload = decode_payload(&event_type, payload);
            EventKind::IssueComment {
                action: p.action.unwrap_or_default(),
                issue: p.issue.into(),
                comment_body: p.comment.and_then(|c| c.body).unwrap_or_default(),
            }
        }
        "MemberEvent" => {
            let p: MemberPayload = decode_payload(&event_type, payload);
            EventKind::Member {
                action: p.action.unwrap_or_default(),
                member_login: p.member.and_then(|m| m.login).unwrap_or_default(),
            }
        }
        "PullRequestEvent" => {
            let p: PullRequestPayload = decode_payload(&event_type, payload);
            let mut pull_request = IssueRef::from(p.pull_request);
            if pull_request.number.is_none() {
                pull_request.number = p.number;
            }
            EventKind::PullRequest {
                action: p.action.unwrap_or_default(),
                pull_request,
            }
        }
        "PushEvent" => EventKind::Push,
        "ReleaseEvent" => {
            let p: ReleasePayload = decode_payload(&event_type, payload);
            EventKind::Release {
                tag_name: p.release.and_then(|r| r.tag_name).unwrap_or_default(),
            }
        }
        "WatchEvent" => {
            let p: ActionPayload = decode_payload(&event_type, payload);
            EventKind::Watch {
                action: p.action.unwrap_or_default(),
            }
        }
        _ => EventKind::Unknown { event_type },
    }
}

fn encode_kind(kind: &EventKind) -> Value {
    match kind {
        EventKind::Create { ref_name, ref_type } | EventKind::Delete { ref_name, ref_type } => {
            json!({ "ref": ref_name, "ref_type": ref_type.as_str() })
        }
        EventKind::Fork { forkee_full_name } => {
            json!({ "forkee": { "full_name": forkee_full_name } })
        }
        EventKind::Issues { action, issue } => json!({
            "action": action,
            "issue": { "number": issue.number, "title": issue.title },
        }),
        EventKind::IssueComment {
            action,
            issue,
            comment_body,
        } => json!({
            "action": action,
            "issue": { "number": issue.number, "title": issue.title },
            "comment": { "body": comment_body },
        }),
        EventKind::Member {
            action,
            member_login,
        } => json!({ "action": action, "member": { "login": member_login } }),
        EventKind::PullRequest {
            action,
            pull_request,
        } => json!({
            "action": action,
            "number": pull_request.number,
            "pull_request": { "number": pull_request.number, "title": pull_request.title },
        }),
        EventKind::Push | EventKind::Unknown { .. } => json!({}),
        EventKind::Release { tag_name } => json!({ "release": { "tag_name": tag_name } }),
        EventKind::Watch { action } => json!({ "action": action }),
    }
}

impl From<RawEvent> for Event {
    fn from(raw: RawEvent) -> Self {
        Event {
            actor: raw.actor,
            repo: raw.repo,
            created_at: raw.created_at,
            kind: decode_kind(raw.event_type, raw.payload),
        }
    }
}

impl From<Event> for RawEvent {
    fn from(event: Event) -> Self {
        RawEvent {
            event_type: event.kind.type_name().to_string(),
            payload: encode_kind(&event.kind),
            actor: event.actor,
            repo: event.repo,
            created_at: event.created_at,
        }
    }
}
