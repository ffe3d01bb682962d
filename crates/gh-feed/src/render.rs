//! Event rendering
//!
//! Turns one [`Event`] into one styled [`Line`]. Rendering is pure: the same
//! event always produces the same line. Event types and ref types this tool
//! does not handle produce a visible placeholder line instead of an error.
//!
//! Ref types, ref names and issue or pull request titles are faint wherever
//! they appear; the verb carries the only color.

use crate::theme::{actor_style, faint, verb_style};
use gh_client::{Event, EventKind, IssueRef, RefType};
use ratatui::text::{Line, Span};

fn verb(label: &str) -> Span<'static> {
    Span::styled(label.to_string(), verb_style(label))
}

fn dim(text: &str) -> Span<'static> {
    Span::styled(text.to_string(), faint())
}

fn text(text: &str) -> Span<'static> {
    Span::raw(text.to_string())
}

fn number(issue: &IssueRef) -> Span<'static> {
    Span::raw(issue.number.map(|n| n.to_string()).unwrap_or_default())
}

/// `<number> "<title>"` with the title dimmed
fn issue_spans(issue: &IssueRef) -> [Span<'static>; 4] {
    [number(issue), text(" \""), dim(&issue.title), text("\"")]
}

/// Render an event as a single feed line
pub fn render_event(event: &Event) -> Line<'static> {
    let actor = Span::styled(event.actor.login.clone(), actor_style(&event.actor));
    let repo = text(&event.repo.name);
    let sp = || text(" ");

    let spans: Vec<Span<'static>> = match &event.kind {
        EventKind::Create { ref_name, ref_type } => match ref_type {
            RefType::Repository => vec![
                actor,
                sp(),
                verb("created"),
                sp(),
                dim(ref_type.as_str()),
                sp(),
                repo,
            ],
            RefType::Branch => vec![
                actor,
                sp(),
                verb("created"),
                sp(),
                dim(ref_type.as_str()),
                sp(),
                dim(ref_name),
                text(" on "),
                repo,
            ],
            other => vec![text(&format!("unknown reftype {}", other))],
        },
        EventKind::Delete { ref_name, ref_type } => vec![
            actor,
            sp(),
            verb("deleted"),
            sp(),
            dim(ref_type.as_str()),
            sp(),
            dim(ref_name),
            text(" from "),
            repo,
        ],
        EventKind::Fork { forkee_full_name } => vec![
            actor,
            sp(),
            verb("forked"),
            sp(),
            text(forkee_full_name),
            text(" from "),
            repo,
        ],
        EventKind::Issues { action, issue } => {
            let mut spans = vec![actor, sp(), verb(action), text(" issue ")];
            spans.extend(issue_spans(issue));
            spans.extend([text(" on "), repo]);
            spans
        }
        // TODO render a shortened markdown comment_body below the line
        EventKind::IssueComment { issue, .. } => {
            let mut spans = vec![actor, sp(), verb("commented"), text(" issue ")];
            spans.extend(issue_spans(issue));
            spans.extend([text(" on "), repo]);
            spans
        }
        EventKind::Member {
            action,
            member_login,
        } => vec![
            actor,
            sp(),
            verb(action),
            sp(),
            text(member_login),
            text(" to "),
            repo,
        ],
        EventKind::PullRequest {
            action,
            pull_request,
        } => {
            let mut spans = vec![actor, sp(), verb(action), text(" pull request ")];
            spans.extend(issue_spans(pull_request));
            spans.extend([text(" on "), repo]);
            spans
        }
        EventKind::Push => vec![actor, sp(), verb("pushed"), text(" to "), repo],
        EventKind::Release { tag_name } => vec![
            actor,
            sp(),
            verb("released"),
            sp(),
            text(tag_name),
            text(" of "),
            repo,
        ],
        EventKind::Watch { .. } => vec![actor, sp(), verb("starred"), sp(), repo],
        EventKind::Unknown { event_type } => {
            vec![text(&format!("unknown event {}", event_type))]
        }
    };

    Line::from(spans)
}
