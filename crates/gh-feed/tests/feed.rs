use async_trait::async_trait;
use gh_client::{Event, GitHubClient, User};
use gh_feed::{run, FeedError, FeedOptions, OutputFormat};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};

/// Mock client serving canned JSON, optionally failing one of the calls
#[derive(Debug, Clone, Default)]
struct MockClient {
    events_json: String,
    fail_user: bool,
    fail_events: bool,
    requested: Arc<Mutex<Vec<(String, Option<u8>)>>>,
}

impl MockClient {
    fn with_events(events_json: &str) -> Self {
        Self {
            events_json: events_json.to_string(),
            ..Self::default()
        }
    }

    fn requests(&self) -> Vec<(String, Option<u8>)> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl GitHubClient for MockClient {
    async fn fetch_current_user(&self) -> anyhow::Result<User> {
        if self.fail_user {
            anyhow::bail!("Bad credentials");
        }
        Ok(User {
            login: "octocat".to_string(),
        })
    }

    async fn fetch_received_events(
        &self,
        login: &str,
        per_page: Option<u8>,
    ) -> anyhow::Result<Vec<Event>> {
        self.requested
            .lock()
            .unwrap()
            .push((login.to_string(), per_page));
        if self.fail_events {
            anyhow::bail!("connection reset");
        }
        Ok(serde_json::from_str(&self.events_json)?)
    }
}

const FEED: &str = r#"[
    {"type":"WatchEvent","actor":{"login":"alice"},"repo":{"name":"acme/widgets"},
     "payload":{"action":"started"},"created_at":"2024-05-03T10:00:00Z"},
    {"type":"ReleaseEvent","actor":{"login":"bob"},"repo":{"name":"acme/widgets"},
     "payload":{"action":"published","release":{"tag_name":"v2.0.0"}},"created_at":"2024-05-02T10:00:00Z"},
    {"type":"SponsorshipEvent","actor":{"login":"carol"},"repo":{"name":"acme/widgets"},
     "payload":{}},
    {"type":"PushEvent","actor":{"login":"dependabot[bot]"},"repo":{"name":"acme/gears"},
     "payload":{"ref":"refs/heads/main","size":3}}
]"#;

fn text_options() -> FeedOptions {
    FeedOptions {
        limit: None,
        format: OutputFormat::Text { styled: false },
    }
}

async fn run_to_string(
    client: &MockClient,
    options: &FeedOptions,
) -> (Result<usize, FeedError>, String) {
    let mut out = Vec::new();
    let result = run(client, options, &mut out).await;
    (result, String::from_utf8(out).unwrap())
}

#[tokio::test]
async fn test_renders_feed_in_order() {
    let client = MockClient::with_events(FEED);

    let (result, out) = run_to_string(&client, &text_options()).await;

    assert_eq!(result.unwrap(), 4);
    assert_eq!(
        out,
        "alice starred acme/widgets\n\
         bob released v2.0.0 of acme/widgets\n\
         unknown event SponsorshipEvent\n\
         dependabot[bot] pushed to acme/gears\n"
    );
    assert_eq!(client.requests(), vec![("octocat".to_string(), None)]);
}

#[tokio::test]
async fn test_limit_truncates_and_sets_page_size() {
    let client = MockClient::with_events(FEED);
    let options = FeedOptions {
        limit: Some(2),
        ..text_options()
    };

    let (result, out) = run_to_string(&client, &options).await;

    assert_eq!(result.unwrap(), 2);
    assert_eq!(out.lines().count(), 2);
    assert_eq!(client.requests(), vec![("octocat".to_string(), Some(2))]);
}

#[tokio::test]
async fn test_current_user_failure_prints_nothing() {
    let client = MockClient {
        fail_user: true,
        ..MockClient::with_events(FEED)
    };

    let (result, out) = run_to_string(&client, &text_options()).await;

    let err = result.unwrap_err();
    assert!(matches!(err, FeedError::CurrentUser(_)));
    assert!(err.is_fetch_failure());
    assert_eq!(
        format!("{:#}", anyhow::Error::from(err)),
        "could not resolve the current user: Bad credentials"
    );
    assert_eq!(out, "");
    assert!(client.requests().is_empty());
}

#[tokio::test]
async fn test_events_failure_prints_nothing() {
    let client = MockClient {
        fail_events: true,
        ..MockClient::with_events(FEED)
    };

    let (result, out) = run_to_string(&client, &text_options()).await;

    match result.unwrap_err() {
        FeedError::ReceivedEvents { login, .. } => assert_eq!(login, "octocat"),
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(out, "");
}

#[tokio::test]
async fn test_json_output() {
    let client = MockClient::with_events(FEED);
    let options = FeedOptions {
        limit: Some(2),
        format: OutputFormat::Json,
    };

    let (result, out) = run_to_string(&client, &options).await;
    assert_eq!(result.unwrap(), 2);

    let lines: Vec<serde_json::Value> = out
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines[0]["type"], "WatchEvent");
    assert_eq!(lines[0]["actor"]["login"], "alice");
    assert_eq!(lines[1]["payload"]["release"]["tag_name"], "v2.0.0");
}

#[tokio::test]
async fn test_styled_output_dims_bot_actor() {
    let client = MockClient::with_events(FEED);
    let options = FeedOptions {
        limit: None,
        format: OutputFormat::Text { styled: true },
    };

    let (_, out) = run_to_string(&client, &options).await;
    let last = out.lines().last().unwrap();

    assert!(last.starts_with("\u{1b}[2mdependabot[bot]"));
    assert!(out.lines().next().unwrap().starts_with("alice "));
}

#[tokio::test]
async fn test_null_fields_do_not_drop_the_feed() {
    let client = MockClient::with_events(
        r#"[
            {"type":"WatchEvent","actor":{"login":"alice"},"repo":{"name":"acme/widgets"}},
            {"type":"IssuesEvent","actor":{"login":null},"repo":{"name":null},
             "payload":{"action":"opened","issue":{"number":9,"title":null}}},
            {"type":"IssueCommentEvent","actor":{"login":"bob"},"repo":{"name":"acme/gears"},
             "payload":{"action":"edited","issue":{"number":4,"title":"Leak"},"comment":null}}
        ]"#,
    );

    let (result, out) = run_to_string(&client, &text_options()).await;

    assert_eq!(result.unwrap(), 3);
    assert_eq!(
        out,
        "alice starred acme/widgets\n \
         opened issue 9 \"\" on \n\
         bob commented issue 4 \"Leak\" on acme/gears\n"
    );
}
