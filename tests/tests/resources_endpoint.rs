use pretty_assertions::assert_eq;
use tests::prelude::*;

use axum::http::StatusCode;

async fn filter_metadata(s: impl Setup) {
    let app = http::app(fixtures::db(&s).await);

    let (status, body) = get(&app, "/resources/projects/filters?dependent-filter-client_id=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {
                "component": "dependent-select-filter",
                "key": "dependent-filter-client_id",
                "name": "Client",
                "options": [
                    { "label": "Acme", "value": 1 },
                    { "label": "Globex", "value": 2 },
                    { "label": "Initech", "value": 3 },
                ],
                "currentValue": "1",
                "dependsOn": {},
            },
            {
                "component": "dependent-select-filter",
                "key": "dependent-filter-project_id",
                "name": "Project",
                "options": [
                    { "label": "Acme Launch", "value": 10 },
                    { "label": "Globex Merger", "value": 11 },
                ],
                "currentValue": null,
                "dependsOn": {
                    "dependent-filter-client_id": { "foreignKey": "client_id" },
                },
            },
            {
                "component": "select-filter",
                "key": "select-filter-name",
                "name": "Name",
                "options": [{ "label": "Acme Launch", "value": "Acme Launch" }],
                "currentValue": null,
                "dependsOn": {},
            },
        ])
    );
}

async fn unknown_resource_is_not_found(s: impl Setup) {
    let app = http::app(fixtures::db(&s).await);

    let (status, body) = get(&app, "/resources/invoices/filters").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!([]));

    let (status, body) = get(&app, "/resources/invoices").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!([]));
}

async fn listing_is_ordered_by_primary_key(s: impl Setup) {
    let app = http::app(fixtures::db(&s).await);

    let (status, body) = get(&app, "/resources/tasks").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "data": [
                { "id": 1, "title": "Kickoff", "client_id": 1, "project_id": 10 },
                { "id": 2, "title": "Due diligence", "client_id": 2, "project_id": 11 },
                { "id": 3, "title": "Retro", "client_id": 1, "project_id": 10 },
                { "id": 4, "title": "Unassigned", "client_id": null, "project_id": null },
            ],
            "page": 1,
            "perPage": 25,
            "hasMore": false,
        })
    );
}

fn titles(body: &serde_json::Value) -> Vec<&str> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["title"].as_str().unwrap())
        .collect()
}

async fn listing_applies_selected_filters(s: impl Setup) {
    let app = http::app(fixtures::db(&s).await);

    let (_, body) = get(&app, "/resources/tasks?dependent-filter-client_id=1").await;
    assert_eq!(titles(&body), ["Kickoff", "Retro"]);

    let (_, body) = get(
        &app,
        "/resources/tasks?dependent-filter-client_id=&dependent-filter-project_id=11",
    )
    .await;
    assert_eq!(titles(&body), ["Due diligence"]);

    let (_, body) = get(
        &app,
        "/resources/tasks?dependent-filter-client_id=1&dependent-filter-project_id=11",
    )
    .await;
    assert!(titles(&body).is_empty());
}

async fn listing_pages(s: impl Setup) {
    let app = http::app(fixtures::db(&s).await);

    let (_, body) = get(&app, "/resources/tasks?perPage=3").await;
    assert_eq!(titles(&body), ["Kickoff", "Due diligence", "Retro"]);
    assert_eq!(body["hasMore"], json!(true));

    let (_, body) = get(&app, "/resources/tasks?perPage=3&page=2").await;
    assert_eq!(titles(&body), ["Unassigned"]);
    assert_eq!(body["page"], json!(2));
    assert_eq!(body["hasMore"], json!(false));
}

async fn malformed_page_is_bad_request(s: impl Setup) {
    let app = http::app(fixtures::db(&s).await);

    let (status, body) = get(&app, "/resources/tasks?page=last").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "`page` must be a positive integer" }));
}

async fn page_past_the_last_offset_is_bad_request(s: impl Setup) {
    let app = http::app(fixtures::db(&s).await);

    let (status, body) = get(&app, "/resources/tasks?page=18446744073709551615").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "message": format!("`page` must be at most {}", Resource::MAX_PAGE) })
    );
}

async fn far_page_is_empty(s: impl Setup) {
    let db = fixtures::db(&s).await;
    let registry = fixtures::registry();
    let tasks = registry.get("tasks").unwrap();

    let params = cascade::resource::IndexParams {
        page: u64::MAX,
        per_page: Some(Resource::MAX_PER_PAGE),
        ..Default::default()
    };
    let page = tasks.index(&db, &params).await.unwrap();

    assert!(page.data.is_empty());
    assert_eq!(page.page, Resource::MAX_PAGE);
    assert!(!page.has_more);
}

async fn uncastable_selection_lists_nothing(s: impl Setup) {
    let app = http::app(fixtures::db(&s).await);

    let (status, body) = get(&app, "/resources/tasks?dependent-filter-client_id=acme").await;
    assert_eq!(status, StatusCode::OK);
    assert!(titles(&body).is_empty());

    let (status, body) = get(&app, "/resources/projects?select-filter-name=Acme%20Launch").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

tests!(
    filter_metadata,
    unknown_resource_is_not_found,
    listing_is_ordered_by_primary_key,
    listing_applies_selected_filters,
    listing_pages,
    malformed_page_is_bad_request,
    page_past_the_last_offset_is_bad_request,
    far_page_is_empty,
    uncastable_selection_lists_nothing,
);
