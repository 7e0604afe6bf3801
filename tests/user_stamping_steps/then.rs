//! Then steps for user stamping BDD scenarios.

use super::world::StampWorld;
use rstest_bdd_macros::then;
use serde_json::Value;

#[then(r#"the "{column}" column holds {id:i64}"#)]
fn column_holds(world: &StampWorld, column: String, id: i64) -> Result<(), eyre::Report> {
    let expected = Value::from(id);
    match world.record().get(&column) {
        Some(actual) if *actual == expected => Ok(()),
        other => Err(eyre::eyre!("expected {column} = {id}, found {other:?}")),
    }
}

#[then(r#"the "{column}" column is null"#)]
fn column_is_null(world: &StampWorld, column: String) -> Result<(), eyre::Report> {
    match world.record().get(&column) {
        Some(Value::Null) => Ok(()),
        other => Err(eyre::eyre!("expected {column} to be null, found {other:?}")),
    }
}

#[then(r#"the "{column}" column is unset"#)]
fn column_is_unset(world: &StampWorld, column: String) -> Result<(), eyre::Report> {
    match world.record().get(&column) {
        None => Ok(()),
        Some(value) => Err(eyre::eyre!("expected {column} to be unset, found {value}")),
    }
}

#[then("the record has no attributes")]
fn record_is_empty(world: &StampWorld) -> Result<(), eyre::Report> {
    let count = world.record().attributes().count();
    if count != 0 {
        return Err(eyre::eyre!("expected no attributes, found {count}"));
    }
    Ok(())
}
