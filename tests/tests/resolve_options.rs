use pretty_assertions::assert_eq;
use tests::prelude::*;

fn labels(options: &[OptionEntry]) -> Vec<&str> {
    options.iter().map(|option| option.label.as_str()).collect()
}

fn parents(pairs: &[(&str, Value)]) -> ParentValues {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

async fn unconstrained_options(s: impl Setup) {
    let db = fixtures::db(&s).await;

    let options = fixtures::project_filter().initial_options(&db).await.unwrap();

    assert_eq!(
        options,
        vec![
            OptionEntry::new("Acme Launch", 10),
            OptionEntry::new("Globex Merger", 11),
        ]
    );
}

async fn foreign_key_constraint(s: impl Setup) {
    let db = fixtures::db(&s).await;
    let filter = fixtures::project_filter();

    let options = filter
        .resolve_options(&db, &parents(&[(CLIENT, "1".into())]))
        .await
        .unwrap();
    assert_eq!(options, vec![OptionEntry::new("Acme Launch", 10)]);

    let options = filter
        .resolve_options(&db, &parents(&[(CLIENT, 2.into())]))
        .await
        .unwrap();
    assert_eq!(options, vec![OptionEntry::new("Globex Merger", 11)]);

    // No project belongs to the inactive client
    let options = filter
        .resolve_options(&db, &parents(&[(CLIENT, "3".into())]))
        .await
        .unwrap();
    assert!(options.is_empty());
}

async fn blank_parent_values_skip_the_constraint(s: impl Setup) {
    let db = fixtures::db(&s).await;
    let filter = fixtures::project_filter();

    let unconstrained = filter.initial_options(&db).await.unwrap();
    assert_eq!(unconstrained.len(), 2);

    let blanks = [
        Value::from(""),
        Value::from("0"),
        Value::from("false"),
        Value::from("null"),
        Value::from(0),
        Value::from(false),
        Value::Null,
    ];

    for blank in blanks {
        let options = filter
            .resolve_options(&db, &parents(&[(CLIENT, blank.clone())]))
            .await
            .unwrap();

        assert_eq!(options, unconstrained, "parent value {blank:?}");
    }

    // Values for filters that are not parents are ignored
    let options = filter
        .resolve_options(&db, &parents(&[("dependent-filter-other", "1".into())]))
        .await
        .unwrap();
    assert_eq!(options, unconstrained);
}

async fn has_many_relationship_constraint(s: impl Setup) {
    let db = fixtures::db(&s).await;

    let filter = fixtures::client_filter().depends_on_relationship(PROJECT, "projects");

    let options = filter
        .resolve_options(&db, &parents(&[(PROJECT, "11".into())]))
        .await
        .unwrap();
    assert_eq!(options, vec![OptionEntry::new("Globex", 2)]);

    let options = filter
        .resolve_options(&db, &parents(&[(PROJECT, "99".into())]))
        .await
        .unwrap();
    assert!(options.is_empty());
}

async fn belongs_to_relationship_constraint(s: impl Setup) {
    let db = fixtures::db(&s).await;

    let filter = DependentFilter::new("Project", "projects", "project_id")
        .depends_on_relationship(CLIENT, "client");

    let options = filter
        .resolve_options(&db, &parents(&[(CLIENT, "2".into())]))
        .await
        .unwrap();
    assert_eq!(options, vec![OptionEntry::new("Globex Merger", 11)]);
}

async fn belongs_to_many_relationship_constraint(s: impl Setup) {
    let db = fixtures::db(&s).await;

    let filter = DependentFilter::new("Project", "projects", "project_id")
        .depends_on_relationship("dependent-filter-tag_id", "tags");

    let options = filter
        .resolve_options(&db, &parents(&[("dependent-filter-tag_id", "100".into())]))
        .await
        .unwrap();
    assert_eq!(labels(&options), ["Acme Launch"]);

    let options = filter
        .resolve_options(&db, &parents(&[("dependent-filter-tag_id", "101".into())]))
        .await
        .unwrap();
    assert_eq!(labels(&options), ["Acme Launch", "Globex Merger"]);
}

async fn every_dependency_applies(s: impl Setup) {
    let db = fixtures::db(&s).await;

    let filter = fixtures::project_filter()
        .depends_on_relationship("dependent-filter-tag_id", "tags");

    let selected = parents(&[
        (CLIENT, "2".into()),
        ("dependent-filter-tag_id", "100".into()),
    ]);
    let options = filter.resolve_options(&db, &selected).await.unwrap();
    assert!(options.is_empty());

    let selected = parents(&[
        (CLIENT, "1".into()),
        ("dependent-filter-tag_id", "100".into()),
    ]);
    let options = filter.resolve_options(&db, &selected).await.unwrap();
    assert_eq!(labels(&options), ["Acme Launch"]);
}

async fn options_are_ordered_by_label(s: impl Setup) {
    let db = fixtures::db(&s).await;

    db.insert("clients")
        .columns(["id", "name", "active"])
        .values([Value::from(4), Value::from("Aardvark"), Value::from(true)])
        .values([Value::from(5), Value::from("Zenith"), Value::from(true)])
        .exec()
        .await
        .unwrap();

    let options = fixtures::client_filter().initial_options(&db).await.unwrap();
    assert_eq!(
        labels(&options),
        ["Aardvark", "Acme", "Globex", "Initech", "Zenith"]
    );
}

async fn limit_truncates_after_ordering(s: impl Setup) {
    let db = fixtures::db(&s).await;

    db.insert("clients")
        .columns(["id", "name", "active"])
        .values([Value::from(4), Value::from("Aardvark"), Value::from(true)])
        .exec()
        .await
        .unwrap();

    let options = fixtures::client_filter()
        .limit(2)
        .initial_options(&db)
        .await
        .unwrap();
    assert_eq!(labels(&options), ["Aardvark", "Acme"]);

    let options = fixtures::client_filter()
        .unlimited()
        .initial_options(&db)
        .await
        .unwrap();
    assert_eq!(options.len(), 4);
}

async fn equal_labels_are_ordered_by_value(s: impl Setup) {
    let db = fixtures::db(&s).await;

    db.insert("clients")
        .columns(["id", "name", "active"])
        .values([Value::from(5), Value::from("Globex"), Value::from(true)])
        .values([Value::from(0), Value::from("Globex"), Value::from(true)])
        .exec()
        .await
        .unwrap();

    let options = fixtures::client_filter()
        .limit(3)
        .initial_options(&db)
        .await
        .unwrap();

    assert_eq!(
        options,
        vec![
            OptionEntry::new("Acme", 1),
            OptionEntry::new("Globex", 0),
            OptionEntry::new("Globex", 2),
        ]
    );
}

async fn scope_restricts_options(s: impl Setup) {
    let db = fixtures::db(&s).await;

    let options = fixtures::client_filter()
        .scope(|query| query.where_eq("active", true))
        .initial_options(&db)
        .await
        .unwrap();
    assert_eq!(labels(&options), ["Acme", "Globex"]);

    // The last scope replaces earlier ones
    let options = fixtures::client_filter()
        .scope(|query| query.where_eq("active", true))
        .scope(|query| query.where_eq("active", false))
        .initial_options(&db)
        .await
        .unwrap();
    assert_eq!(labels(&options), ["Initech"]);
}

async fn custom_label_value_and_extra_columns(s: impl Setup) {
    let db = fixtures::db(&s).await;

    let filter = DependentFilter::new("Client", "projects", "client_id")
        .label("name")
        .value("client_id")
        .with_column("id");

    let options = filter.initial_options(&db).await.unwrap();
    assert_eq!(
        options,
        vec![
            OptionEntry::new("Acme Launch", 1).with_extra("id", 10),
            OptionEntry::new("Globex Merger", 2).with_extra("id", 11),
        ]
    );

    let json = serde_json::to_value(&options).unwrap();
    assert_eq!(json[0], json!({ "label": "Acme Launch", "value": 1, "id": 10 }));
}

async fn null_label_falls_back_to_value(s: impl Setup) {
    let db = fixtures::db(&s).await;

    let filter = DependentFilter::new("Task", "tasks", "task_id")
        .label("client_id")
        .scope(|query| query.where_null("client_id"));

    let options = filter.initial_options(&db).await.unwrap();
    assert_eq!(options, vec![OptionEntry::new("4", 4)]);
}

async fn uncastable_parent_value_matches_nothing(s: impl Setup) {
    let db = fixtures::db(&s).await;

    let options = fixtures::project_filter()
        .resolve_options(&db, &parents(&[(CLIENT, "acme".into())]))
        .await
        .unwrap();
    assert!(options.is_empty());
}

async fn unknown_column_fails(s: impl Setup) {
    let db = fixtures::db(&s).await;

    let err = fixtures::client_filter()
        .depends_on_foreign_key(PROJECT, "owner_id")
        .resolve_options(&db, &parents(&[(PROJECT, "1".into())]))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "resolving options for `dependent-filter-client_id`: unknown column `owner_id` on table `clients`"
    );
}

async fn unknown_relation_fails(s: impl Setup) {
    let db = fixtures::db(&s).await;

    let err = fixtures::client_filter()
        .depends_on_relationship(PROJECT, "invoices")
        .resolve_options(&db, &parents(&[(PROJECT, "1".into())]))
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "resolving options for `dependent-filter-client_id`: unknown relation `invoices` on table `clients`"
    );
}

tests!(
    unconstrained_options,
    foreign_key_constraint,
    blank_parent_values_skip_the_constraint,
    has_many_relationship_constraint,
    belongs_to_relationship_constraint,
    belongs_to_many_relationship_constraint,
    every_dependency_applies,
    options_are_ordered_by_label,
    limit_truncates_after_ordering,
    equal_labels_are_ordered_by_value,
    scope_restricts_options,
    custom_label_value_and_extra_columns,
    null_label_falls_back_to_value,
    uncastable_parent_value_matches_nothing,
    unknown_column_fails,
    unknown_relation_fails,
);
