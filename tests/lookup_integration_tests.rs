use cmdic::core::action::{Action, UNKNOWN_COMMAND};
use cmdic::core::commands::SessionConfig;
use cmdic::core::highlight::{Fragment, highlight};
use cmdic::core::state::{OutputKind, Session};
use cmdic::core::config::ResolvedConfig;
use cmdic::dict::{self, Endpoints, HttpFetcher, NO_RESULTS};
use cmdic::launcher::{Launch, launch};
use cmdic::runner::drive;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn fetcher() -> HttpFetcher {
    HttpFetcher::new(None).unwrap()
}

fn resolved(host: &str) -> ResolvedConfig {
    ResolvedConfig {
        host: host.to_string(),
        language: "eng".to_string(),
        request_timeout: None,
        highlight: Some("book".to_string()),
        example_page: 1,
        example_url: None,
        log_file: None,
    }
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("Content-Type", "text/html; charset=utf-8")
        .set_body_string(body)
}

const SEARCH_PAGE: &str = r#"<html><head>
    <meta property="og:description" content="1.책 2.도서 3.예약하다" />
    <meta http-equiv="Refresh" content="0;URL=/word/view.do?wordid=ekw000019223&q=book" />
</head><body></body></html>"#;

const DETAIL_PAGE: &str = r#"<html><body>
    <div id="OPPOSITE_WORD"><ul></ul></div>
    <div id="SIMILAR_WORD"><ul>
        <li><a href="/word/view.do?wordid=1">volume</a><span>권, 책</span></li>
        <li><a href="/word/view.do?wordid=2">tome</a><span>큰 책</span></li>
    </ul></div>
</body></html>"#;

const EXAMPLE_PAGE: &str = r#"<html><body><ul>
    <li>
        <span class="txt_example">I bought this book by myself.</span>
        <span class="mean_example">나는 내 스스로 이 책을 샀다.</span>
    </li>
    <li>
        <span class="txt_example">I like this book.</span>
        <span class="mean_example">나는 이 책이 좋다.</span>
    </li>
</ul></body></html>"#;

async fn mount_search(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/search.do"))
        .and(query_param("q", "book"))
        .and(query_param("dic", "eng"))
        .respond_with(html(body))
        .mount(server)
        .await;
}

// ============================================================================
// Lookup
// ============================================================================

#[tokio::test]
async fn test_lookup_resolves_word_id() {
    let server = MockServer::start().await;
    mount_search(&server, SEARCH_PAGE).await;

    let endpoints = Endpoints::new(&server.uri(), "eng").unwrap();
    let result = dict::lookup(&fetcher(), &endpoints, "book").await.unwrap();

    assert_eq!(result.meaning, "1.책 2.도서 3.예약하다");
    assert_eq!(result.word_id.as_deref(), Some("ekw000019223"));
}

#[tokio::test]
async fn test_lookup_no_results() {
    let server = MockServer::start().await;
    mount_search(&server, "<html><head><title>none</title></head></html>").await;

    let endpoints = Endpoints::new(&server.uri(), "eng").unwrap();
    let result = dict::lookup(&fetcher(), &endpoints, "book").await.unwrap();

    assert_eq!(result.meaning, NO_RESULTS);
    assert!(result.is_not_found());
}

#[tokio::test]
async fn test_lookup_network_error() {
    // Nothing listens on port 1
    let endpoints = Endpoints::new("http://127.0.0.1:1/", "eng").unwrap();
    let result = dict::lookup(&fetcher(), &endpoints, "book").await;
    assert!(matches!(result, Err(dict::DictError::Network { .. })));
}

// ============================================================================
// Launch
// ============================================================================

#[tokio::test]
async fn test_launch_without_keyword_exits_with_usage() {
    let launch = launch(None, &resolved("http://127.0.0.1:1/"), &fetcher()).await;
    assert!(matches!(launch, Launch::Usage));
    assert!(!launch.is_success());
}

#[tokio::test]
async fn test_launch_no_results_exits_cleanly() {
    let server = MockServer::start().await;
    mount_search(&server, "<html><head><title>none</title></head></html>").await;

    let launch = launch(Some("book"), &resolved(&server.uri()), &fetcher()).await;
    assert!(launch.is_success());
    match launch {
        Launch::Done { meaning } => assert_eq!(meaning, NO_RESULTS),
        _ => panic!("expected no session for an unknown word"),
    }
}

#[tokio::test]
async fn test_launch_unreachable_host_fails() {
    let launch = launch(Some("book"), &resolved("http://127.0.0.1:1/"), &fetcher()).await;
    assert!(!launch.is_success());
    match launch {
        Launch::Failed(message) => assert!(message.starts_with("Error fetching search result:")),
        _ => panic!("expected a fatal lookup error"),
    }
}

#[tokio::test]
async fn test_launch_hands_session_to_tui() {
    let server = MockServer::start().await;
    mount_search(&server, SEARCH_PAGE).await;

    let launch = launch(Some("book"), &resolved(&server.uri()), &fetcher()).await;
    assert!(launch.is_success());
    match launch {
        Launch::Interactive { meaning, session, .. } => {
            assert_eq!(meaning, "1.책 2.도서 3.예약하다");
            assert_eq!(session.word_id, "ekw000019223");
            assert!(session.detail_url.starts_with(&server.uri()));
        }
        _ => panic!("expected an interactive session"),
    }
}

// ============================================================================
// Session
// ============================================================================

#[tokio::test]
async fn test_detail_page_fetched_once() {
    let server = MockServer::start().await;
    mount_search(&server, SEARCH_PAGE).await;
    Mock::given(method("GET"))
        .and(path("/word/view.do"))
        .and(query_param("wordid", "ekw000019223"))
        .respond_with(html(DETAIL_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = fetcher();
    let endpoints = Endpoints::new(&server.uri(), "eng").unwrap();
    let result = dict::lookup(&fetcher, &endpoints, "book").await.unwrap();
    let word_id = result.word_id.unwrap();

    let mut session = Session::new(word_id.clone(), endpoints.detail_url(&word_id));
    let config = SessionConfig::new(endpoints, None, 1);

    assert!(drive(&mut session, &config, &fetcher, Action::Submit("a".into())).await);
    assert_eq!(session.output, format!("antonym:\n{NO_RESULTS}"));

    assert!(drive(&mut session, &config, &fetcher, Action::Submit("s".into())).await);
    assert_eq!(session.output, "synonym:\nvolume: 권, 책\ntome: 큰 책");
    // MockServer verifies the single detail request on drop
}

#[tokio::test]
async fn test_detail_network_error_keeps_session() {
    let mut session = Session::new("W1", "http://127.0.0.1:1/word/view.do?wordid=W1");
    let config = SessionConfig::default();

    assert!(drive(&mut session, &config, &fetcher(), Action::Submit("a".into())).await);
    assert!(session.output.starts_with("error detailed url:"));
    assert!(session.detail().is_none());

    assert!(drive(&mut session, &config, &fetcher(), Action::Submit("x".into())).await);
    assert_eq!(session.output, UNKNOWN_COMMAND);
}

#[tokio::test]
async fn test_examples_with_highlight() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/word/view_example_more.do"))
        .and(query_param("wordid", "TESTID"))
        .and(query_param("summaryid", "etc"))
        .and(query_param("page", "2"))
        .respond_with(html(EXAMPLE_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let endpoints = Endpoints::new(&server.uri(), "eng").unwrap();
    let mut session = Session::new("TESTID", endpoints.detail_url("TESTID"));
    let config = SessionConfig::new(endpoints, Some("book".to_string()), 2);

    assert!(drive(&mut session, &config, &fetcher(), Action::Submit("e".into())).await);
    assert_eq!(session.output_kind, OutputKind::Examples);
    assert_eq!(
        session.output,
        "I bought this book by myself.\n -> 나는 내 스스로 이 책을 샀다.\n\n\
         I like this book.\n -> 나는 이 책이 좋다.\n\n"
    );

    let paragraphs = highlight(&session.output, "book");
    assert_eq!(
        paragraphs[1],
        vec![
            Fragment::Plain("I like this "),
            Fragment::Emphasis("book"),
            Fragment::Plain(".\n -> 나는 이 책이 좋다."),
        ]
    );
}

#[tokio::test]
async fn test_example_url_override() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/custom-examples"))
        .respond_with(html(EXAMPLE_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = Session::new("TESTID", "http://127.0.0.1:1/unused")
        .with_example_url(Some(format!("{}/custom-examples", server.uri())));
    let config = SessionConfig::default();

    drive(&mut session, &config, &fetcher(), Action::Submit("e".into())).await;
    assert!(session.output.starts_with("I bought this book by myself."));
}
