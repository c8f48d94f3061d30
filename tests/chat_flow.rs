use chatbox::{
    api::PredictClient,
    constants::{INITIAL_QUESTIONS, TYPING_PLACEHOLDER},
    dispatch::schedule_reply,
    suggestions::Suggestions,
    ChatWidget, Sender,
};
use serde_json::json;
use std::time::Duration;
use tokio::sync::mpsc;
use wiremock::{
    matchers::{body_json, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

const DELAY: Duration = Duration::from_millis(20);

fn widget() -> ChatWidget {
    let mut widget = ChatWidget::new(Suggestions::new(INITIAL_QUESTIONS));
    widget.toggle_open();
    widget
}

fn transcript(widget: &ChatWidget) -> Vec<(Sender, String)> {
    widget
        .transcript()
        .map(|m| (m.sender, m.text.clone()))
        .collect()
}

#[tokio::test]
async fn info_command_round_trip() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "message": "!info" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": "Here is info" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client =
        PredictClient::new(format!("{}/predict", mock_server.uri()), Duration::from_secs(5))
            .unwrap();
    let (tx, mut rx) = mpsc::channel(4);

    let mut widget = widget();
    assert!(widget.select_suggestion("!info"));
    let submission = widget.press_enter().unwrap();
    assert_eq!(
        transcript(&widget),
        vec![
            (Sender::User, "!info".to_string()),
            (Sender::Bot, TYPING_PLACEHOLDER.to_string()),
        ]
    );

    schedule_reply(client, DELAY, submission, tx);
    let outcome = rx.recv().await.unwrap();
    widget.complete_reply(outcome);

    assert_eq!(
        transcript(&widget),
        vec![
            (Sender::User, "!info".to_string()),
            (Sender::Bot, "Here is info".to_string()),
        ]
    );
    assert_eq!(widget.input(), "");
}

#[tokio::test]
async fn unreachable_endpoint_leaves_only_user_message() {
    let client = PredictClient::new("http://127.0.0.1:9/predict", Duration::from_secs(2)).unwrap();
    let (tx, mut rx) = mpsc::channel(4);

    let mut widget = widget();
    widget.set_input("hello");
    let submission = widget.press_enter().unwrap();

    schedule_reply(client, DELAY, submission, tx);
    let outcome = rx.recv().await.unwrap();
    assert!(outcome.is_err());
    widget.complete_reply(outcome);

    assert_eq!(transcript(&widget), vec![(Sender::User, "hello".to_string())]);
    assert!(!widget.is_typing());
    assert_eq!(widget.input(), "");
}

#[tokio::test]
async fn overlapping_submissions_resolve_in_arrival_order() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(json!({ "message": "slow" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "answer": "slow reply" }))
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(body_json(json!({ "message": "fast" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "answer": "fast reply" })))
        .mount(&mock_server)
        .await;

    let client =
        PredictClient::new(format!("{}/predict", mock_server.uri()), Duration::from_secs(5))
            .unwrap();
    let (tx, mut rx) = mpsc::channel(4);

    let mut widget = widget();
    let slow = widget.submit_message("slow").unwrap();
    let fast = widget.submit_message("fast").unwrap();
    schedule_reply(client.clone(), DELAY, slow, tx.clone());
    schedule_reply(client, DELAY, fast, tx);

    widget.complete_reply(rx.recv().await.unwrap());
    assert!(widget.is_typing());
    widget.complete_reply(rx.recv().await.unwrap());
    assert!(!widget.is_typing());

    assert_eq!(
        transcript(&widget),
        vec![
            (Sender::User, "slow".to_string()),
            (Sender::User, "fast".to_string()),
            (Sender::Bot, "fast reply".to_string()),
            (Sender::Bot, "slow reply".to_string()),
        ]
    );
}

#[test]
fn suggestions_cycle_through_refresh() {
    let mut widget = widget();
    for question in INITIAL_QUESTIONS {
        assert!(widget.select_suggestion(question));
        assert_eq!(widget.input(), question);
        assert!(!widget.suggestions().visible().contains(&question));
        widget.clear_input();
        widget.press_enter();
    }

    assert!(widget.suggestions().is_exhausted());
    assert!(widget.suggestions().visible().is_empty());

    widget.refresh_suggestions();
    assert_eq!(widget.suggestions().visible(), INITIAL_QUESTIONS.to_vec());
}
