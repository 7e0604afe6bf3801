//! Per-instance stamping toggle through the in-memory host.

use super::helpers::{Article, Harness, harness};
use rstest::rstest;
use serde_json::json;
use userstamps::stamping::{domain::LifecycleEvent, ports::Stampable};

const ALL_EVENTS: [LifecycleEvent; 4] = [
    LifecycleEvent::Creating,
    LifecycleEvent::Updating,
    LifecycleEvent::Deleting,
    LifecycleEvent::Restoring,
];

#[rstest]
fn stopped_instance_is_never_stamped(harness: Harness) {
    harness.session.login(42_i64);
    let mut article = Article::default();
    article.stop_user_stamping();

    for event in ALL_EVENTS {
        harness.articles.dispatch(event, &mut article);
    }

    assert_eq!(article.record().attributes().count(), 0);
}

#[rstest]
fn restarted_instance_is_stamped_again(harness: Harness) {
    harness.session.login(42_i64);
    let mut article = Article::default();

    article.stop_user_stamping();
    harness.articles.dispatch(LifecycleEvent::Creating, &mut article);
    assert!(!article.record().contains("created_by"));

    article.start_user_stamping();
    assert!(article.is_user_stamping());
    harness.articles.dispatch(LifecycleEvent::Creating, &mut article);
    assert_eq!(article.record().get("created_by"), Some(&json!(42)));
}

#[rstest]
fn toggle_is_per_instance(harness: Harness) {
    harness.session.login(42_i64);
    let mut stopped = Article::default();
    let mut active = Article::default();
    stopped.stop_user_stamping();

    harness.articles.dispatch(LifecycleEvent::Updating, &mut stopped);
    harness.articles.dispatch(LifecycleEvent::Updating, &mut active);

    assert!(!stopped.record().contains("updated_by"));
    assert_eq!(active.record().get("updated_by"), Some(&json!(42)));
}
