use crate::render::{
    STYLESHEET, render_add_form, render_done, render_home, render_question, render_result,
};
use crate::vm::{AnswerVm, QuestionVm, SessionSummaryVm};

fn answer_vm(is_correct: bool, has_next: bool) -> AnswerVm {
    AnswerVm {
        is_correct,
        correct_answer: "かがとび".to_string(),
        your_answer: "かがどび".to_string(),
        number: 3,
        total: 14,
        has_next,
    }
}

#[test]
fn home_view_smoke_renders_count_and_start_link() {
    let html = render_home(14).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"), "missing doctype in {html}");
    assert!(html.contains("問題数: 14"), "missing count in {html}");
    assert!(html.contains("/start"), "missing start link in {html}");
    assert!(html.contains("/style.css"), "missing stylesheet in {html}");
}

#[test]
fn question_view_smoke_renders_prompt_and_progress() {
    let html = render_question(QuestionVm {
        prompt: "加賀鳶".to_string(),
        number: 1,
        total: 14,
    })
    .unwrap();
    assert!(html.contains("加賀鳶"), "missing prompt in {html}");
    assert!(html.contains("進捗: 1 / 14"), "missing progress in {html}");
    assert!(html.contains("/submit"), "missing form action in {html}");
    assert!(html.contains("name=\"answer\""), "missing answer field in {html}");
}

#[test]
fn question_view_escapes_authored_markup() {
    let html = render_question(QuestionVm {
        prompt: "<script>alert(1)</script>".to_string(),
        number: 1,
        total: 1,
    })
    .unwrap();
    assert!(!html.contains("<script>"), "unescaped prompt in {html}");
    assert!(html.contains("&lt;script"), "missing escaped prompt in {html}");
}

#[test]
fn result_view_smoke_renders_wrong_answer_with_correction() {
    let html = render_result(answer_vm(false, true)).unwrap();
    assert!(html.contains("不正解です！"), "missing verdict in {html}");
    assert!(html.contains("正解は「かがとび」でした。"), "missing correction in {html}");
    assert!(html.contains("あなたの回答: 「かがどび」"), "missing echo in {html}");
    assert!(html.contains("進捗: 3 / 14"), "missing progress in {html}");
    assert!(html.contains("次へ"), "missing next link in {html}");
}

#[test]
fn result_view_smoke_renders_last_correct_answer() {
    let html = render_result(answer_vm(true, false)).unwrap();
    assert!(html.contains("正解です！"), "missing verdict in {html}");
    assert!(!html.contains("でした。"), "unexpected correction in {html}");
    assert!(html.contains("/done"), "missing done link in {html}");
    assert!(html.contains("結果を見る"), "missing done label in {html}");
}

#[test]
fn done_view_smoke_renders_score() {
    let html = render_done(SessionSummaryVm {
        correct: 9,
        total: 14,
    })
    .unwrap();
    assert!(html.contains("正解数: 9 / 14"), "missing score in {html}");
    assert!(html.contains("もう一度挑戦"), "missing retry link in {html}");
}

#[test]
fn add_form_smoke_renders_both_fields() {
    let html = render_add_form().unwrap();
    assert!(html.contains("/add/submit"), "missing action in {html}");
    assert!(html.contains("name=\"questionText\""), "missing prompt field in {html}");
    assert!(html.contains("name=\"answer\""), "missing answer field in {html}");
}

#[test]
fn stylesheet_defines_result_classes() {
    assert!(STYLESHEET.contains(".result-correct"));
    assert!(STYLESHEET.contains(".result-wrong"));
}
