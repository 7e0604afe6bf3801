//! Stamping driven through the in-memory host's event dispatch.

use super::helpers::{Article, Comment, Harness, harness};
use rstest::rstest;
use serde_json::{Value, json};
use userstamps::stamping::{domain::LifecycleEvent, ports::Stampable};

#[rstest]
fn full_soft_delete_lifecycle_with_actor(harness: Harness) {
    harness.session.login(42_i64);
    let mut article = Article::default();

    harness.articles.dispatch(LifecycleEvent::Creating, &mut article);
    assert_eq!(article.record().get("created_by"), Some(&json!(42)));

    harness.articles.dispatch(LifecycleEvent::Updating, &mut article);
    assert_eq!(article.record().get("updated_by"), Some(&json!(42)));

    harness.articles.dispatch(LifecycleEvent::Deleting, &mut article);
    assert_eq!(article.record().get("deleted_by"), Some(&json!(42)));

    harness.articles.dispatch(LifecycleEvent::Restoring, &mut article);
    assert_eq!(article.record().get("deleted_by"), Some(&Value::Null));
}

#[rstest]
fn lifecycle_without_actor(harness: Harness) {
    let mut article = Article::default();

    harness.articles.dispatch(LifecycleEvent::Creating, &mut article);
    harness.articles.dispatch(LifecycleEvent::Updating, &mut article);
    assert!(!article.record().contains("created_by"));
    assert!(!article.record().contains("updated_by"));

    harness.articles.dispatch(LifecycleEvent::Deleting, &mut article);
    assert_eq!(article.record().get("deleted_by"), Some(&Value::Null));
}

#[rstest]
fn restore_clears_even_after_logout(harness: Harness) {
    harness.session.login("alice");
    let mut article = Article::default();
    harness.articles.dispatch(LifecycleEvent::Deleting, &mut article);
    assert_eq!(article.record().get("deleted_by"), Some(&json!("alice")));

    harness.session.logout();
    harness.articles.dispatch(LifecycleEvent::Restoring, &mut article);

    assert_eq!(article.record().get("deleted_by"), Some(&Value::Null));
}

#[rstest]
fn editor_changes_follow_the_session(harness: Harness) {
    let mut article = Article::default();

    harness.session.login(1_i64);
    harness.articles.dispatch(LifecycleEvent::Creating, &mut article);
    harness.session.login(2_i64);
    harness.articles.dispatch(LifecycleEvent::Updating, &mut article);

    assert_eq!(article.record().get("created_by"), Some(&json!(1)));
    assert_eq!(article.record().get("updated_by"), Some(&json!(2)));
}

#[rstest]
fn hard_deleted_type_never_touches_deleted_by(harness: Harness) {
    harness.session.login(42_i64);
    let mut comment = Comment::default();

    let deleting = harness.comments.dispatch(LifecycleEvent::Deleting, &mut comment);
    let restoring = harness
        .comments
        .dispatch(LifecycleEvent::Restoring, &mut comment);

    assert_eq!(deleting + restoring, 0);
    assert!(!comment.record().contains("deleted_by"));
}

#[rstest]
fn renamed_column_is_stamped(harness: Harness) {
    harness.session.login(42_i64);
    let mut comment = Comment::default();

    harness.comments.dispatch(LifecycleEvent::Creating, &mut comment);

    assert_eq!(comment.record().get("author_id"), Some(&json!(42)));
    assert!(!comment.record().contains("created_by"));
}

#[rstest]
fn global_scope_leaves_queries_unfiltered(harness: Harness) {
    let query = harness.articles.query(Article::MODEL);
    assert!(query.filters.is_empty());
    assert_eq!(harness.articles.scope_names(), vec!["user_stamps"]);
}

#[rstest]
fn rebooting_a_booted_host_adds_no_listeners(mut harness: Harness) {
    harness
        .stamps
        .boot::<Article, _>(&mut harness.articles)
        .expect("second article boot");

    assert_eq!(harness.articles.listener_count(LifecycleEvent::Deleting), 1);
    assert_eq!(harness.articles.scope_names(), vec!["user_stamps"]);

    harness.session.login(5_i64);
    let mut article = Article::default();
    harness.articles.dispatch(LifecycleEvent::Creating, &mut article);
    assert_eq!(article.record().get("created_by"), Some(&json!(5)));
}
