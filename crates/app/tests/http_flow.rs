use app::cookies::SESSION_COOKIE;
use app::router;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use quiz_core::model::SessionId;
use quiz_core::time::fixed_now;
use services::{AppServices, Clock};
use storage::Storage;
use tower::ServiceExt;

struct Harness {
    storage: Storage,
    router: Router,
}

impl Harness {
    fn seeded() -> Self {
        let storage = Storage::seeded();
        let services = AppServices::new(&storage, Clock::fixed(fixed_now()), None);
        Self {
            router: router(services),
            storage,
        }
    }

    async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    async fn get(&self, uri: &str, session: Option<&str>) -> Response {
        let mut builder = Request::builder().uri(uri);
        if let Some(id) = session {
            builder = builder.header(header::COOKIE, format!("{SESSION_COOKIE}={id}"));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    async fn post_form(&self, uri: &str, session: Option<&str>, fields: &[(&str, &str)]) -> Response {
        let body = fields
            .iter()
            .map(|(key, value)| format!("{key}={}", form_encode(value)))
            .collect::<Vec<_>>()
            .join("&");
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(id) = session {
            builder = builder.header(header::COOKIE, format!("{SESSION_COOKIE}={id}"));
        }
        self.send(builder.body(Body::from(body)).unwrap()).await
    }

    fn expected_answer(&self, id: &str) -> String {
        let session = self
            .storage
            .sessions
            .get(&SessionId::new(id))
            .unwrap()
            .unwrap();
        let index = session.current_index().unwrap();
        self.storage
            .questions
            .question_at(index)
            .unwrap()
            .unwrap()
            .answer()
            .to_owned()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.storage
            .sessions
            .get(&SessionId::new(id))
            .unwrap()
            .map(|session| session.position())
    }
}

fn form_encode(value: &str) -> String {
    let mut out = String::new();
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'*' => {
                out.push(char::from(byte));
            }
            b' ' => out.push('+'),
            other => out.push_str(&format!("%{other:02X}")),
        }
    }
    out
}

fn session_from(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|value| {
            let pair = value.split(';').next()?;
            pair.strip_prefix(&format!("{SESSION_COOKIE}="))
                .filter(|id| !id.is_empty())
                .map(str::to_owned)
        })
}

fn location(response: &Response) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn home_shows_catalog_size() {
    let harness = Harness::seeded();
    let response = harness.get("/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("問題数: 14"), "missing count in {html}");
}

#[tokio::test]
async fn full_quiz_run_scores_and_clears_the_session() {
    let harness = Harness::seeded();

    let response = harness.get("/start", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let id = session_from(&response).expect("new session cookie");
    let set_cookie = response.headers()[header::SET_COOKIE].to_str().unwrap().to_owned();
    assert!(set_cookie.contains("HttpOnly"), "cookie flags: {set_cookie}");
    assert!(set_cookie.contains("Path=/"), "cookie flags: {set_cookie}");
    assert!(body_text(response).await.contains("進捗: 1 / 14"));

    for step in 0..14 {
        let padded = format!("  {} ", harness.expected_answer(&id));
        let response = harness
            .post_form("/submit", Some(&id), &[("answer", padded.as_str())])
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("正解です！"), "step {step}: {html}");
        if step < 13 {
            assert!(html.contains("次へ"), "step {step}: {html}");
        } else {
            assert!(html.contains("/done"), "last step: {html}");
        }
        assert_eq!(harness.position(&id), Some(step + 1));
    }

    let response = harness.get("/start", Some(&id)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/done");

    let response = harness.get("/done", Some(&id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let removal = response.headers()[header::SET_COOKIE].to_str().unwrap().to_owned();
    assert!(removal.starts_with(&format!("{SESSION_COOKIE}=")), "removal: {removal}");
    assert!(removal.contains("Max-Age=0"), "removal: {removal}");
    let html = body_text(response).await;
    assert!(html.contains("正解数: 14 / 14"), "missing score in {html}");
    assert_eq!(harness.position(&id), None);

    let response = harness.get("/done", Some(&id)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn wrong_answer_reveals_the_correct_one() {
    let harness = Harness::seeded();
    let id = session_from(&harness.get("/start", None).await).unwrap();
    let expected = harness.expected_answer(&id);

    let response = harness
        .post_form("/submit", Some(&id), &[("answer", "まちがい")])
        .await;
    let html = body_text(response).await;
    assert!(html.contains("不正解です！"), "{html}");
    assert!(html.contains(&format!("正解は「{expected}」でした。")), "{html}");
    assert!(html.contains("あなたの回答: 「まちがい」"), "{html}");
    assert!(html.contains("進捗: 1 / 14"), "{html}");
}

#[tokio::test]
async fn known_cookie_resumes_without_reissuing() {
    let harness = Harness::seeded();
    let id = session_from(&harness.get("/start", None).await).unwrap();
    harness
        .post_form("/submit", Some(&id), &[("answer", "x")])
        .await;

    let response = harness.get("/start", Some(&id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(session_from(&response).is_none());
    assert!(body_text(response).await.contains("進捗: 2 / 14"));
}

#[tokio::test]
async fn stale_cookie_starts_a_new_session() {
    let harness = Harness::seeded();
    let response = harness.get("/start", Some("gone-123")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let id = session_from(&response).expect("replacement cookie");
    assert_ne!(id, "gone-123");
    assert_eq!(harness.position(&id), Some(0));
}

#[tokio::test]
async fn requests_without_a_session_go_home() {
    let harness = Harness::seeded();

    let response = harness.post_form("/submit", None, &[("answer", "x")]).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let response = harness
        .post_form("/submit", Some("unknown-1"), &[("answer", "x")])
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let response = harness.get("/done", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
}

#[tokio::test]
async fn submit_after_completion_redirects_to_done() {
    let harness = Harness::seeded();
    let id = session_from(&harness.get("/start", None).await).unwrap();
    for _ in 0..14 {
        harness
            .post_form("/submit", Some(&id), &[("answer", "x")])
            .await;
    }

    let response = harness
        .post_form("/submit", Some(&id), &[("answer", "x")])
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/done");
    assert_eq!(harness.position(&id), Some(14));
}

#[tokio::test]
async fn non_post_form_targets_redirect() {
    let harness = Harness::seeded();

    let response = harness.get("/submit", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/start");

    let response = harness.get("/add/submit", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/add");
}

#[tokio::test]
async fn authoring_rejects_blank_fields_and_accepts_complete_ones() {
    let harness = Harness::seeded();

    let response = harness.get("/add", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("questionText"));

    let response = harness
        .post_form("/add/submit", None, &[("questionText", "   "), ("answer", "だっさい")])
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_text(response).await, "入力が不正です");
    assert_eq!(harness.storage.questions.count_questions().unwrap(), 14);

    let response = harness
        .post_form("/add/submit", None, &[("questionText", "獺祭")])
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = harness
        .post_form("/add/submit", None, &[("questionText", " 獺祭 "), ("answer", "だっさい")])
        .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let added = harness.storage.questions.question_at(14).unwrap().unwrap();
    assert_eq!(added.prompt(), "獺祭");
    assert_eq!(added.answer(), "だっさい");
    assert!(body_text(harness.get("/", None).await).await.contains("問題数: 15"));
}

#[tokio::test]
async fn stylesheet_is_served_as_css() {
    let harness = Harness::seeded();
    let response = harness.get("/style.css", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/css; charset=utf-8"
    );
    assert!(body_text(response).await.contains(".result-correct"));
}

#[tokio::test]
async fn unknown_paths_fall_back_to_home() {
    let harness = Harness::seeded();
    let response = harness.get("/nope/deeper", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("問題数: 14"), "missing count in {html}");
}

#[tokio::test]
async fn submit_without_form_body_checks_the_session_first() {
    let harness = Harness::seeded();
    let bare = |session: Option<&str>| {
        let mut builder = Request::builder().method("POST").uri("/submit");
        if let Some(id) = session {
            builder = builder.header(header::COOKIE, format!("{SESSION_COOKIE}={id}"));
        }
        builder.body(Body::empty()).unwrap()
    };

    let response = harness.send(bare(None)).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");

    let id = session_from(&harness.get("/start", None).await).unwrap();
    let response = harness.send(bare(Some(&id))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("不正解です！"), "{html}");
    assert_eq!(harness.position(&id), Some(1));
}

#[tokio::test]
async fn empty_catalog_goes_straight_to_results() {
    let storage = Storage::in_memory();
    let harness = Harness {
        router: router(AppServices::new(&storage, Clock::fixed(fixed_now()), None)),
        storage,
    };

    let response = harness.get("/start", None).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/done");
    let id = session_from(&response).unwrap();

    let html = body_text(harness.get("/done", Some(&id)).await).await;
    assert!(html.contains("正解数: 0 / 0"), "{html}");
}

#[tokio::test]
async fn double_submit_counts_both_answers() {
    let harness = Harness::seeded();
    let id = session_from(&harness.get("/start", None).await).unwrap();

    let (first, second) = tokio::join!(
        harness.post_form("/submit", Some(&id), &[("answer", "x")]),
        harness.post_form("/submit", Some(&id), &[("answer", "y")]),
    );
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(harness.position(&id), Some(2));
}
