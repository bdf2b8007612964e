//! End-to-end HTTP behaviour of the Q&A routes over the in-memory store.

use std::sync::Arc;

use actix_http::Request;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{Error, body::BoxBody};
use qa_backend::domain::{QuestionId, Vote};
use qa_backend::test_support::{InMemoryStore, test_app};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn store() -> Arc<InMemoryStore> {
    Arc::new(InMemoryStore::default())
}

async fn send<S>(app: &S, request: TestRequest) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let response = test::call_service(app, request.to_request()).await;
    let status = response.status();
    let body = test::read_body(response).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("json body")
    };
    (status, value)
}

fn message(text: &str) -> Value {
    json!({ "message": text })
}

fn question_body() -> Value {
    json!({ "title": "Lifetimes", "description": "Why?", "category": "rust" })
}

#[rstest]
#[actix_web::test]
async fn api_check_reports_working(store: Arc<InMemoryStore>) {
    let app = test::init_service(test_app(&store)).await;
    let (status, body) = send(&app, TestRequest::get().uri("/test")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Server API is working 🚀"));
}

#[rstest]
#[actix_web::test]
async fn create_then_list_questions(store: Arc<InMemoryStore>) {
    let app = test::init_service(test_app(&store)).await;

    let (status, body) = send(
        &app,
        TestRequest::post().uri("/questions").set_json(question_body()),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, message("Question created successfully."));

    let (status, body) = send(&app, TestRequest::get().uri("/questions")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "id": 1, "title": "Lifetimes", "description": "Why?", "category": "rust" }])
    );
}

#[rstest]
#[case(json!({ "description": "Why?", "category": "rust" }))]
#[case(json!({ "title": "Lifetimes", "category": "rust" }))]
#[case(json!({ "title": "Lifetimes", "description": "Why?" }))]
#[case(json!({ "title": "", "description": "Why?", "category": "rust" }))]
#[case(json!({ "title": 5, "description": "Why?", "category": "rust" }))]
#[actix_web::test]
async fn incomplete_question_is_rejected_without_write(
    store: Arc<InMemoryStore>,
    #[case] payload: Value,
) {
    let app = test::init_service(test_app(&store)).await;
    let (status, body) = send(&app, TestRequest::post().uri("/questions").set_json(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, message("Invalid request data."));
    assert!(store.questions().is_empty());
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_invalid_request_data(store: Arc<InMemoryStore>) {
    let app = test::init_service(test_app(&store)).await;
    let request = TestRequest::post()
        .uri("/questions")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json");
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, message("Invalid request data."));
}

#[rstest]
#[actix_web::test]
async fn unknown_question_is_not_found(store: Arc<InMemoryStore>) {
    let app = test::init_service(test_app(&store)).await;
    let (status, body) = send(&app, TestRequest::get().uri("/questions/999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, message("Question not found."));
}

#[rstest]
#[case(TestRequest::get().uri("/questions/abc"), "Unable to fetch question.")]
#[case(TestRequest::get().uri("/questions/2147483648"), "Unable to fetch question.")]
#[case(
    TestRequest::put().uri("/questions/abc").set_json(question_body()),
    "Unable to update question."
)]
#[case(TestRequest::delete().uri("/questions/1.5"), "Unable to delete question.")]
#[case(TestRequest::get().uri("/questions/abc/answers"), "Unable to fetch answers.")]
#[case(
    TestRequest::post().uri("/questions/abc/answers").set_json(json!({ "content": "c" })),
    "Unable to create answer."
)]
#[case(TestRequest::delete().uri("/questions/abc/answers"), "Unable to delete answers.")]
#[case(
    TestRequest::post().uri("/questions/abc/vote").set_json(json!({ "vote": "1" })),
    "Unable to vote on question."
)]
#[case(
    TestRequest::post().uri("/answers/abc/vote").set_json(json!({ "vote": "1" })),
    "Unable to vote on answer."
)]
#[actix_web::test]
async fn uncoercible_ids_fail_like_store_errors(
    store: Arc<InMemoryStore>,
    #[case] request: TestRequest,
    #[case] expected: &str,
) {
    store.insert_question("t", "d", "c");
    let app = test::init_service(test_app(&store)).await;
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, message(expected));
}

#[rstest]
#[case("/questions/%201")]
#[case("/questions/1%20")]
#[case("/questions/+1")]
#[actix_web::test]
async fn padded_ids_are_coerced(store: Arc<InMemoryStore>, #[case] uri: &str) {
    store.insert_question("Traits", "d", "rust");
    let app = test::init_service(test_app(&store)).await;
    let (status, body) = send(&app, TestRequest::get().uri(uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["title"], "Traits");
}

#[rstest]
#[actix_web::test]
async fn get_wraps_question_in_array(store: Arc<InMemoryStore>) {
    let question = store.insert_question("Traits", "dyn or impl?", "rust");
    let app = test::init_service(test_app(&store)).await;
    let (status, body) = send(
        &app,
        TestRequest::get().uri(&format!("/questions/{}", question.id)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["title"], "Traits");
}

#[rstest]
#[actix_web::test]
async fn search_matches_both_terms_case_insensitively(store: Arc<InMemoryStore>) {
    store.insert_question("Foo fighters", "d", "Barista");
    store.insert_question("FOOD", "d", "bar");
    store.insert_question("foo", "d", "baz");
    store.insert_question("nothing", "d", "bar");
    let app = test::init_service(test_app(&store)).await;

    let (status, body) = send(
        &app,
        TestRequest::get().uri("/questions/search?title=foo&category=bar"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|q| q["title"].as_str())
        .collect();
    assert_eq!(titles, ["Foo fighters", "FOOD"]);
}

#[rstest]
#[actix_web::test]
async fn search_with_one_term_leaves_the_other_unfiltered(store: Arc<InMemoryStore>) {
    store.insert_question("foo", "d", "bar");
    store.insert_question("other", "d", "bar");
    let app = test::init_service(test_app(&store)).await;

    let (status, body) = send(&app, TestRequest::get().uri("/questions/search?title=foo")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["title"], "foo");

    let (status, body) = send(&app, TestRequest::get().uri("/questions/search")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));
}

#[rstest]
#[actix_web::test]
async fn search_without_matches_is_not_found(store: Arc<InMemoryStore>) {
    store.insert_question("Lifetimes", "d", "rust");
    let app = test::init_service(test_app(&store)).await;
    let (status, body) = send(
        &app,
        TestRequest::get().uri("/questions/search?title=python"),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, message("Invalid search parameters."));
}

#[rstest]
#[actix_web::test]
async fn update_replaces_fields(store: Arc<InMemoryStore>) {
    let question = store.insert_question("Old", "d", "c");
    let app = test::init_service(test_app(&store)).await;
    let (status, body) = send(
        &app,
        TestRequest::put()
            .uri(&format!("/questions/{}", question.id))
            .set_json(question_body()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, message("Question updated successfully."));
    assert_eq!(store.questions()[0].title, "Lifetimes");
}

#[rstest]
#[actix_web::test]
async fn update_validates_before_lookup(store: Arc<InMemoryStore>) {
    let app = test::init_service(test_app(&store)).await;
    let (status, _) = send(
        &app,
        TestRequest::put()
            .uri("/questions/42")
            .set_json(json!({ "title": "t" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        TestRequest::put().uri("/questions/42").set_json(question_body()),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, message("Question not found."));
}

#[rstest]
#[actix_web::test]
async fn delete_twice_is_ok_then_not_found(store: Arc<InMemoryStore>) {
    let question = store.insert_question("t", "d", "c");
    let app = test::init_service(test_app(&store)).await;
    let uri = format!("/questions/{}", question.id);

    let (status, body) = send(&app, TestRequest::delete().uri(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, message("Question deleted successfully."));

    let (status, body) = send(&app, TestRequest::delete().uri(&uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, message("Question not found."));
}

#[rstest]
#[actix_web::test]
async fn deleting_a_question_keeps_its_answers(store: Arc<InMemoryStore>) {
    let question = store.insert_question("t", "d", "c");
    store.insert_answer(question.id, "orphan");
    let app = test::init_service(test_app(&store)).await;

    let (status, _) = send(
        &app,
        TestRequest::delete().uri(&format!("/questions/{}", question.id)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(store.answers().len(), 1);
}

#[rstest]
#[actix_web::test]
async fn concurrent_deletes_do_not_fail(store: Arc<InMemoryStore>) {
    let question = store.insert_question("t", "d", "c");
    let app = test::init_service(test_app(&store)).await;
    let uri = format!("/questions/{}", question.id);

    let (first, second) = futures_util::future::join(
        send(&app, TestRequest::delete().uri(&uri)),
        send(&app, TestRequest::delete().uri(&uri)),
    )
    .await;

    for (status, _) in [&first, &second] {
        assert!(
            *status == StatusCode::OK || *status == StatusCode::NOT_FOUND,
            "unexpected status {status}"
        );
    }
    assert!(first.0 == StatusCode::OK || second.0 == StatusCode::OK);
    assert!(store.questions().is_empty());
}

#[rstest]
#[actix_web::test]
async fn answers_lifecycle(store: Arc<InMemoryStore>) {
    let question = store.insert_question("t", "d", "c");
    let other = store.insert_question("t2", "d", "c");
    store.insert_answer(other.id, "keep me");
    let app = test::init_service(test_app(&store)).await;
    let uri = format!("/questions/{}/answers", question.id);

    let (status, body) = send(
        &app,
        TestRequest::post()
            .uri(&uri)
            .set_json(json!({ "content": "Use a reference." })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, message("Answer created successfully."));

    let (status, body) = send(&app, TestRequest::get().uri(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{ "id": 2, "question_id": question.id.get(), "content": "Use a reference." }])
    );

    let (status, body) = send(&app, TestRequest::delete().uri(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        message("All Answers for the question have been deleted successfully.")
    );
    let remaining = store.answers();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].question_id, other.id);
    assert_eq!(store.questions().len(), 2);
}

#[rstest]
#[case(json!({}))]
#[case(json!({ "content": "" }))]
#[actix_web::test]
async fn empty_answer_is_rejected(store: Arc<InMemoryStore>, #[case] payload: Value) {
    let question = store.insert_question("t", "d", "c");
    let app = test::init_service(test_app(&store)).await;
    let (status, body) = send(
        &app,
        TestRequest::post()
            .uri(&format!("/questions/{}/answers", question.id))
            .set_json(payload),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, message("Invalid request data."));
    assert!(store.answers().is_empty());
}

#[rstest]
#[case(TestRequest::get())]
#[case(TestRequest::delete())]
#[actix_web::test]
async fn answers_of_unknown_question_are_not_found(
    store: Arc<InMemoryStore>,
    #[case] request: TestRequest,
) {
    let app = test::init_service(test_app(&store)).await;
    let (status, body) = send(&app, request.uri("/questions/7/answers")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, message("Question not found."));
}

#[rstest]
#[actix_web::test]
async fn question_vote_records_exactly_one_row(store: Arc<InMemoryStore>) {
    let question = store.insert_question("t", "d", "c");
    let app = test::init_service(test_app(&store)).await;
    let uri = format!("/questions/{}/vote", question.id);

    let (status, body) = send(&app, TestRequest::post().uri(&uri).set_json(json!({ "vote": "2" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, message("Invalid vote value."));
    assert!(store.question_votes().is_empty());

    let (status, body) = send(&app, TestRequest::post().uri(&uri).set_json(json!({ "vote": "1" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, message("Question voted successfully."));
    assert_eq!(store.question_votes(), vec![(question.id, Vote::Upvote)]);
}

#[rstest]
#[actix_web::test]
async fn vote_on_missing_question_reports_missing_target_first(store: Arc<InMemoryStore>) {
    let app = test::init_service(test_app(&store)).await;
    let (status, body) = send(
        &app,
        TestRequest::post()
            .uri("/questions/3/vote")
            .set_json(json!({ "vote": "sideways" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, message("Question not found."));
}

#[rstest]
#[actix_web::test]
async fn vote_without_body_on_missing_question_is_not_found(store: Arc<InMemoryStore>) {
    let app = test::init_service(test_app(&store)).await;
    let (status, body) = send(&app, TestRequest::post().uri("/questions/999/vote")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, message("Question not found."));

    let (status, body) = send(&app, TestRequest::post().uri("/answers/999/vote")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, message("Answer not found."));
}

#[rstest]
#[case(TestRequest::post())]
#[case(
    TestRequest::post()
        .insert_header(("content-type", "text/plain"))
        .set_payload("1")
)]
#[case(
    TestRequest::post()
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
)]
#[actix_web::test]
async fn unreadable_vote_body_is_an_invalid_vote(
    store: Arc<InMemoryStore>,
    #[case] request: TestRequest,
) {
    let question = store.insert_question("t", "d", "c");
    let app = test::init_service(test_app(&store)).await;
    let (status, body) = send(
        &app,
        request.uri(&format!("/questions/{}/vote", question.id)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, message("Invalid vote value."));
    assert!(store.question_votes().is_empty());
}

#[rstest]
#[actix_web::test]
async fn answer_votes(store: Arc<InMemoryStore>) {
    let answer = store.insert_answer(QuestionId::new(1), "a");
    let app = test::init_service(test_app(&store)).await;

    let (status, body) = send(
        &app,
        TestRequest::post()
            .uri(&format!("/answers/{}/vote", answer.id))
            .set_json(json!({ "vote": "-1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, message("Answer voted successfully."));
    assert_eq!(store.answer_votes(), vec![(answer.id, Vote::Downvote)]);

    let (status, body) = send(
        &app,
        TestRequest::post()
            .uri("/answers/99/vote")
            .set_json(json!({ "vote": "1" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, message("Answer not found."));
}

#[rstest]
#[actix_web::test]
async fn numeric_vote_is_invalid(store: Arc<InMemoryStore>) {
    let answer = store.insert_answer(QuestionId::new(1), "a");
    let app = test::init_service(test_app(&store)).await;
    let (status, body) = send(
        &app,
        TestRequest::post()
            .uri(&format!("/answers/{}/vote", answer.id))
            .set_json(json!({ "vote": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, message("Invalid vote value."));
    assert!(store.answer_votes().is_empty());
}

#[rstest]
#[case(TestRequest::get().uri("/questions"), "Unable to fetch questions.")]
#[case(TestRequest::get().uri("/questions/search?title=x"), "Unable to search questions.")]
#[case(TestRequest::get().uri("/questions/1"), "Unable to fetch question.")]
#[case(
    TestRequest::put().uri("/questions/1").set_json(question_body()),
    "Unable to update question."
)]
#[case(TestRequest::delete().uri("/questions/1"), "Unable to delete question.")]
#[case(TestRequest::get().uri("/questions/1/answers"), "Unable to fetch answers.")]
#[case(
    TestRequest::post().uri("/questions/1/answers").set_json(json!({ "content": "c" })),
    "Unable to create answer."
)]
#[case(TestRequest::delete().uri("/questions/1/answers"), "Unable to delete answers.")]
#[case(
    TestRequest::post().uri("/questions/1/vote").set_json(json!({ "vote": "1" })),
    "Unable to vote on question."
)]
#[case(
    TestRequest::post().uri("/answers/1/vote").set_json(json!({ "vote": "1" })),
    "Unable to vote on answer."
)]
#[actix_web::test]
async fn store_failures_are_generic_500s(
    store: Arc<InMemoryStore>,
    #[case] request: TestRequest,
    #[case] expected: &str,
) {
    store.fail_with("password authentication failed for user \"qa\"");
    let app = test::init_service(test_app(&store)).await;

    let response = test::call_service(&app, request.to_request()).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(response.headers().contains_key("trace-id"));
    let body: Value = test::read_body_json(response).await;
    assert_eq!(body, message(expected));
}

#[rstest]
#[actix_web::test]
async fn create_failures_are_generic_500s(store: Arc<InMemoryStore>) {
    store.fail_with("connection reset");
    let app = test::init_service(test_app(&store)).await;
    let (status, body) = send(
        &app,
        TestRequest::post().uri("/questions").set_json(question_body()),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, message("Unable to create question."));
}
