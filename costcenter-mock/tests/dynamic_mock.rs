use std::time::Duration;

use costcenter_core::{CostCenterError, Text};
use costcenter_mock::{DynamicMockConnector, MockBehavior, MockCall};

fn text(cc: &str, name: &str) -> Text {
    Text {
        controlling_area: "A000".into(),
        cost_center: cc.into(),
        validity_end_date: None,
        language: Some("EN".into()),
        validity_start_date: None,
        cost_center_name: Some(name.into()),
        cost_center_description: None,
    }
}

#[tokio::test]
async fn test_mock_texts_return() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("P0");
    let rows = vec![text("1", "Corporate")];
    controller
        .set_texts_behavior(MockBehavior::Return(rows.clone()))
        .await;

    let got = mock.texts("EN", "Corp").await.expect("texts ok");
    assert_eq!(got, rows);
    assert_eq!(
        controller.calls().await,
        vec![MockCall::Texts {
            language: "EN".into(),
            cost_center_name: "Corp".into(),
        }]
    );
}

#[tokio::test]
async fn test_mock_headers_fail() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("P0");
    let err = CostCenterError::transport("boom");
    controller
        .set_headers_behavior(MockBehavior::Fail(err.clone()))
        .await;

    let got = mock.headers("A000", "1").await.expect_err("err");
    assert_eq!(got, err);
}

#[tokio::test]
async fn test_mock_unconfigured_is_connector_error() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("P0");
    let err = mock.to_texts("link").await.expect_err("err");
    assert_eq!(
        err,
        CostCenterError::connector("P0", "no behavior configured for to_texts")
    );
    assert_eq!(
        controller.calls().await,
        vec![MockCall::ToTexts {
            link: "link".into()
        }]
    );
}

#[tokio::test(start_paused = true)]
async fn test_mock_delay_then_return() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("P0");
    controller
        .set_texts_behavior(MockBehavior::delayed(Duration::from_secs(5), Vec::new()))
        .await;

    let started = tokio::time::Instant::now();
    let got = mock.texts("EN", "x").await.expect("texts ok");
    assert!(got.is_empty());
    assert!(started.elapsed() >= Duration::from_secs(5));
}

#[tokio::test]
async fn test_mock_hang_does_not_complete() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("P0");
    controller.set_headers_behavior(MockBehavior::Hang).await;

    let res = tokio::time::timeout(Duration::from_millis(50), mock.headers("A000", "1")).await;
    assert!(res.is_err(), "hang should time out");
}

#[tokio::test]
async fn test_mock_clear_all_behaviors() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("P0");
    controller
        .set_texts_behavior(MockBehavior::Return(Vec::new()))
        .await;
    mock.texts("EN", "x").await.expect("texts ok");

    controller.clear_all_behaviors().await;
    assert!(controller.calls().await.is_empty());
    assert!(mock.texts("EN", "x").await.is_err());
}
