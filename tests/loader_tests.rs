use retroboard::core::cache::{FetchCache, MemoryCache};
use retroboard::core::loader::{
    FeedbackLoader, FeedbackSource, HttpSource, Origin, parse_feedback_csv,
};
use retroboard::db::cache::DbCache;
use retroboard::db::pool::DbPool;
use retroboard::errors::{AppError, AppResult};
use retroboard::models::feedback::FeedbackRow;
use retroboard::models::outcome::LoadOutcome;
use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;
use std::time::Duration;

mod common;
use common::serve_once;

const ONE_ROW: &str = "Timestamp,Category,Comment\nt1,KEEP,good\n";
const TWO_ROWS: &str = "Timestamp,Category,Comment\nt1,KEEP,good\nt2,Change,slow\n";

/// Source whose body can be swapped between loads; counts fetches.
#[derive(Clone, Default)]
struct FakeSheet {
    body: Rc<RefCell<Option<String>>>,
    fetches: Rc<Cell<usize>>,
}

impl FakeSheet {
    fn serving(body: &str) -> Self {
        let sheet = FakeSheet::default();
        sheet.set(body);
        sheet
    }

    fn set(&self, body: &str) {
        *self.body.borrow_mut() = Some(body.to_string());
    }

    fn go_down(&self) {
        *self.body.borrow_mut() = None;
    }
}

impl FeedbackSource for FakeSheet {
    fn fetch(&self, _url: &str) -> AppResult<String> {
        self.fetches.set(self.fetches.get() + 1);
        self.body
            .borrow()
            .clone()
            .ok_or_else(|| {
                AppError::Io(io::Error::new(
                    io::ErrorKind::ConnectionRefused,
                    "connection refused",
                ))
            })
    }
}

const URL: &str = "https://example.test/export?format=csv&gid=0";

#[test]
fn test_parse_skips_header_and_maps_positionally() {
    let table = parse_feedback_csv(TWO_ROWS).expect("parse");
    assert_eq!(table.len(), 2);
    assert_eq!(
        table.rows()[1],
        FeedbackRow::new("t2", Some("Change"), Some("slow"))
    );
}

#[test]
fn test_parse_empty_cells_become_missing() {
    let table = parse_feedback_csv("a,b,c\nt1,,\nt2,Stop\n").expect("parse");
    assert_eq!(table.rows()[0], FeedbackRow::new("t1", None, None));
    // short row: comment missing
    assert_eq!(table.rows()[1], FeedbackRow::new("t2", Some("Stop"), None));
}

#[test]
fn test_parse_quoted_comment_with_commas_and_newline() {
    let body = "a,b,c\nt1,Change,\"too many meetings, not enough focus\nreally\"\n";
    let table = parse_feedback_csv(body).expect("parse");
    assert_eq!(table.len(), 1);
    assert_eq!(
        table.rows()[0].comment_text(),
        "too many meetings, not enough focus\nreally"
    );
}

#[test]
fn test_parse_rejects_wrong_column_count() {
    let err = parse_feedback_csv("a,b,c,d\n1,2,3,4\n").unwrap_err();
    assert!(matches!(err, AppError::ColumnCount(4)));

    let err = parse_feedback_csv("a,b\n1,2\n").unwrap_err();
    assert!(matches!(err, AppError::ColumnCount(2)));
}

#[test]
fn test_load_empty_body_and_header_only_are_empty() {
    for body in ["", "Timestamp,Category,Comment\n"] {
        let mut loader =
            FeedbackLoader::new(FakeSheet::serving(body), MemoryCache::new(), Duration::from_secs(60));
        assert_eq!(loader.load(URL), LoadOutcome::Empty);
    }
}

#[test]
fn test_load_failure_is_distinct_from_empty() {
    let sheet = FakeSheet::default();
    let mut loader = FeedbackLoader::new(sheet, MemoryCache::new(), Duration::from_secs(60));

    match loader.load(URL) {
        LoadOutcome::LoadFailed(reason) => assert!(reason.contains("connection refused")),
        other => panic!("expected LoadFailed, got {other:?}"),
    }
    assert_eq!(loader.last_origin(), None);
}

#[test]
fn test_column_mismatch_is_load_failed() {
    let mut loader = FeedbackLoader::new(
        FakeSheet::serving("a,b,c,d\n1,2,3,4\n"),
        MemoryCache::new(),
        Duration::from_secs(60),
    );
    let outcome = loader.load(URL);
    assert!(outcome.is_failed());
}

#[test]
fn test_cache_serves_stale_data_within_window() {
    let sheet = FakeSheet::serving(ONE_ROW);
    let mut loader = FeedbackLoader::new(sheet.clone(), MemoryCache::new(), Duration::from_secs(60));

    let first = loader.load(URL);
    assert_eq!(loader.last_origin(), Some(Origin::Fetched));

    sheet.set(TWO_ROWS);
    let second = loader.load(URL);

    assert_eq!(first, second);
    assert_eq!(second.row_count(), 1);
    assert_eq!(loader.last_origin(), Some(Origin::Cache));
    assert_eq!(sheet.fetches.get(), 1);
}

#[test]
fn test_clear_forces_refetch() {
    let sheet = FakeSheet::serving(ONE_ROW);
    let mut loader = FeedbackLoader::new(sheet.clone(), MemoryCache::new(), Duration::from_secs(60));

    loader.load(URL);
    sheet.set(TWO_ROWS);

    assert_eq!(loader.clear_cache().expect("clear"), 1);
    let reloaded = loader.load(URL);

    assert_eq!(reloaded.row_count(), 2);
    assert_eq!(sheet.fetches.get(), 2);
}

#[test]
fn test_expired_window_refetches() {
    let sheet = FakeSheet::serving(ONE_ROW);
    let mut loader = FeedbackLoader::new(sheet.clone(), MemoryCache::new(), Duration::ZERO);

    loader.load(URL);
    sheet.set(TWO_ROWS);
    let reloaded = loader.load(URL);

    assert_eq!(reloaded.row_count(), 2);
    assert_eq!(sheet.fetches.get(), 2);
}

#[test]
fn test_cache_is_keyed_by_url() {
    let sheet = FakeSheet::serving(ONE_ROW);
    let mut loader = FeedbackLoader::new(sheet.clone(), MemoryCache::new(), Duration::from_secs(60));

    loader.load(URL);
    loader.load("https://example.test/other");

    assert_eq!(sheet.fetches.get(), 2);
}

#[test]
fn test_failures_are_not_cached() {
    let sheet = FakeSheet::default();
    let mut loader = FeedbackLoader::new(sheet.clone(), MemoryCache::new(), Duration::from_secs(60));

    assert!(loader.load(URL).is_failed());

    sheet.set(ONE_ROW);
    assert_eq!(loader.load(URL).row_count(), 1);
    assert_eq!(sheet.fetches.get(), 2);
}

#[test]
fn test_single_fetch_attempt_per_load() {
    let sheet = FakeSheet::default();
    let mut loader = FeedbackLoader::new(sheet.clone(), MemoryCache::new(), Duration::from_secs(60));

    loader.load(URL);
    assert_eq!(sheet.fetches.get(), 1);

    sheet.go_down();
    loader.load(URL);
    assert_eq!(sheet.fetches.get(), 2);
}

#[test]
fn test_db_cache_survives_new_loader() {
    let pool = DbPool::in_memory().expect("db");
    let sheet = FakeSheet::serving(ONE_ROW);

    {
        let mut loader =
            FeedbackLoader::new(sheet.clone(), DbCache::new(&pool.conn), Duration::from_secs(60));
        loader.load(URL);
    }

    sheet.set(TWO_ROWS);

    let mut loader =
        FeedbackLoader::new(sheet.clone(), DbCache::new(&pool.conn), Duration::from_secs(60));
    assert_eq!(loader.load(URL).row_count(), 1);
    assert_eq!(loader.last_origin(), Some(Origin::Cache));

    loader.clear_cache().expect("clear");
    assert_eq!(loader.load(URL).row_count(), 2);
    assert_eq!(sheet.fetches.get(), 2);
}

#[test]
fn test_db_cache_roundtrip_keeps_body() {
    let pool = DbPool::in_memory().expect("db");
    let mut cache = DbCache::new(&pool.conn);
    let now = chrono::Local::now();

    cache.put(URL, ONE_ROW, now).expect("put");
    cache.put(URL, TWO_ROWS, now).expect("overwrite");

    let hit = cache.get(URL).expect("get").expect("entry");
    assert_eq!(hit.body, TWO_ROWS);
    assert!(hit.is_fresh(Duration::from_secs(60), now));
    assert!(!hit.is_fresh(Duration::ZERO, now));
    assert!(cache.get("https://example.test/missing").expect("get").is_none());
}

#[test]
fn test_http_source_returns_body_on_success() {
    let (base, server) = serve_once("200 OK", TWO_ROWS);
    let source = HttpSource::new(Duration::from_secs(10)).expect("client");

    let body = source
        .fetch(&format!("{base}/export?format=csv&gid=7"))
        .expect("fetch");
    assert_eq!(body, TWO_ROWS);

    let request = server.join().expect("server thread");
    assert!(request.starts_with("GET /export?format=csv&gid=7 HTTP/1.1"));
}

#[test]
fn test_http_source_non_success_status_is_an_error() {
    let (base, server) = serve_once("403 Forbidden", "<html>denied</html>");
    let source = HttpSource::new(Duration::from_secs(10)).expect("client");
    let url = format!("{base}/export");

    match source.fetch(&url) {
        Err(AppError::HttpStatus { status, url: failed }) => {
            assert_eq!(status, 403);
            assert_eq!(failed, url);
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
    server.join().expect("server thread");
}

#[test]
fn test_http_error_status_becomes_load_failed() {
    let (base, server) = serve_once("403 Forbidden", "denied");
    let source = HttpSource::new(Duration::from_secs(10)).expect("client");
    let mut loader = FeedbackLoader::new(source, MemoryCache::new(), Duration::from_secs(60));

    match loader.load(&format!("{base}/export")) {
        LoadOutcome::LoadFailed(reason) => assert!(reason.contains("HTTP 403")),
        other => panic!("expected LoadFailed, got {other:?}"),
    }
    server.join().expect("server thread");
}
