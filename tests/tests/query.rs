use pretty_assertions::assert_eq;
use tests::prelude::*;

async fn titles(db: &Db, query: cascade::Query) -> Vec<String> {
    db.all(query.select(["title"]))
        .await
        .unwrap()
        .iter()
        .map(|record| match record.get("title") {
            Some(Value::String(title)) => title.clone(),
            other => panic!("unexpected title {other:?}"),
        })
        .collect()
}

async fn not_equal_excludes_matching_rows(s: impl Setup) {
    let db = fixtures::db(&s).await;

    let query = db.query("tasks").unwrap().where_ne("client_id", 1).order_by_asc("id");
    assert_eq!(titles(&db, query).await, ["Due diligence"]);

    // Comparing against null checks for presence
    let query = db
        .query("tasks")
        .unwrap()
        .where_ne("client_id", Value::Null)
        .order_by_asc("id");
    assert_eq!(titles(&db, query).await, ["Kickoff", "Due diligence", "Retro"]);
}

async fn not_null_excludes_unset_rows(s: impl Setup) {
    let db = fixtures::db(&s).await;

    let query = db
        .query("tasks")
        .unwrap()
        .where_not_null("project_id")
        .order_by_asc("id");
    assert_eq!(titles(&db, query).await, ["Kickoff", "Due diligence", "Retro"]);

    let query = db.query("tasks").unwrap().where_null("project_id");
    assert_eq!(titles(&db, query).await, ["Unassigned"]);
}

async fn descending_order(s: impl Setup) {
    let db = fixtures::db(&s).await;

    let query = db.query("tasks").unwrap().order_by_desc("id").limit(2);
    assert_eq!(titles(&db, query).await, ["Unassigned", "Retro"]);

    let query = db
        .query("tasks")
        .unwrap()
        .where_not_null("client_id")
        .order_by_desc("client_id")
        .order_by_asc("title");
    assert_eq!(titles(&db, query).await, ["Due diligence", "Kickoff", "Retro"]);
}

async fn strict_and_lenient_equality(s: impl Setup) {
    let db = fixtures::db(&s).await;

    let query = db.query("tasks").unwrap().where_eq("client_id", "acme");
    assert!(db.all(query).await.is_err());

    let query = db.query("tasks").unwrap().where_eq_lenient("client_id", "acme");
    assert!(titles(&db, query).await.is_empty());

    let query = db
        .query("tasks")
        .unwrap()
        .where_eq_lenient("client_id", "2");
    assert_eq!(titles(&db, query).await, ["Due diligence"]);

    // Unknown columns still fail
    let query = db.query("tasks").unwrap().where_eq_lenient("owner_id", 1);
    assert!(db.all(query).await.is_err());
}

tests!(
    not_equal_excludes_matching_rows,
    not_null_excludes_unset_rows,
    descending_order,
    strict_and_lenient_equality,
);
