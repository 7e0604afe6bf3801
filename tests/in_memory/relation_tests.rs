//! Relationship accessors resolved against stamped records.

use super::helpers::{Article, Comment, Harness, harness};
use rstest::rstest;
use userstamps::stamping::{
    domain::{ActorId, LifecycleEvent},
    ports::Stampable,
};

#[rstest]
fn creator_and_editor_resolve_to_stamped_actors(harness: Harness) {
    let relations = harness.stamps.relations::<Article>().expect("relations");
    let mut article = Article::default();

    harness.session.login(1_i64);
    harness.articles.dispatch(LifecycleEvent::Creating, &mut article);
    harness.session.login(2_i64);
    harness.articles.dispatch(LifecycleEvent::Updating, &mut article);

    let creator = relations.creator().expect("creator relation");
    let editor = relations.editor().expect("editor relation");
    assert_eq!(creator.related().as_str(), "users");
    assert_eq!(creator.parent_key(article.record()), Some(ActorId::Numeric(1)));
    assert_eq!(editor.parent_key(article.record()), Some(ActorId::Numeric(2)));
}

#[rstest]
fn destroyer_is_cleared_by_restore(harness: Harness) {
    let destroyer = harness
        .stamps
        .relations::<Article>()
        .expect("relations")
        .destroyer()
        .expect("destroyer relation");
    let mut article = Article::default();
    harness.session.login("moderator");

    harness.articles.dispatch(LifecycleEvent::Deleting, &mut article);
    assert_eq!(
        destroyer.parent_key(article.record()),
        Some(ActorId::Text("moderator".to_owned()))
    );

    harness.articles.dispatch(LifecycleEvent::Restoring, &mut article);
    assert_eq!(destroyer.parent_key(article.record()), None);
}

#[rstest]
fn creator_follows_renamed_column(harness: Harness) {
    let creator = harness
        .stamps
        .relations::<Comment>()
        .expect("relations")
        .creator()
        .expect("creator relation");

    assert_eq!(creator.foreign_key().as_str(), "author_id");
    assert_eq!(Comment::MODEL, "comments");
}

#[rstest]
fn destroyer_matches_a_uuid_shaped_session_actor(harness: Harness) {
    let destroyer = harness
        .stamps
        .relations::<Article>()
        .expect("relations")
        .destroyer()
        .expect("destroyer relation");
    let session_actor = ActorId::from("550e8400-e29b-41d4-a716-446655440000");
    let mut article = Article::default();
    harness.session.login(session_actor.clone());

    harness.articles.dispatch(LifecycleEvent::Deleting, &mut article);

    assert_eq!(destroyer.parent_key(article.record()), Some(session_actor));
}
