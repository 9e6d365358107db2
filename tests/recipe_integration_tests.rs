//! HTTP-level tests for the recipe resource: composition validation,
//! replace-all updates, ownership, and the catalog endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, recipe_payload, request, seed_ingredient, seed_tag, seed_user, test_app, token_for,
};

#[tokio::test]
async fn create_requires_authentication() {
    let (app, pool) = test_app().await;
    let flour = seed_ingredient(&pool, "flour", "g").await;

    let response = request(
        &app,
        "POST",
        "/api/recipes",
        None,
        Some(recipe_payload("Bread", &[(flour, 400)], &[])),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn create_then_retrieve_round_trips_the_composition() {
    let (app, pool) = test_app().await;
    let alice = seed_user(&pool, "alice").await;
    let flour = seed_ingredient(&pool, "flour", "g").await;
    let milk = seed_ingredient(&pool, "milk", "ml").await;
    let breakfast = seed_tag(&pool, "breakfast").await;
    let token = token_for(alice);

    let response = request(
        &app,
        "POST",
        "/api/recipes",
        Some(&token),
        Some(recipe_payload(
            "Pancakes",
            &[(flour, 200), (milk, 300)],
            &[breakfast],
        )),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["author"]["username"], "alice");

    let response = request(&app, "GET", &format!("/api/recipes/{id}"), Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let detail = body_json(response).await;

    let mut ingredient_ids: Vec<i64> = detail["ingredients"]
        .as_array()
        .unwrap()
        .iter()
        .map(|line| line["id"].as_i64().unwrap())
        .collect();
    ingredient_ids.sort();
    let mut expected = vec![flour, milk];
    expected.sort();
    assert_eq!(ingredient_ids, expected);

    let tag_ids: Vec<i64> = detail["tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(tag_ids, vec![breakfast]);
    assert_eq!(detail["is_favorited"], false);
    assert_eq!(detail["is_in_shopping_cart"], false);
}

#[tokio::test]
async fn duplicate_ingredient_in_payload_is_rejected() {
    let (app, pool) = test_app().await;
    let alice = seed_user(&pool, "alice").await;
    let flour = seed_ingredient(&pool, "flour", "g").await;
    let token = token_for(alice);

    let response = request(
        &app,
        "POST",
        "/api/recipes",
        Some(&token),
        Some(recipe_payload("Bread", &[(flour, 200), (flour, 300)], &[])),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "ValidationError");
}

#[tokio::test]
async fn unknown_ingredient_reference_is_not_found() {
    let (app, pool) = test_app().await;
    let alice = seed_user(&pool, "alice").await;
    let token = token_for(alice);

    let response = request(
        &app,
        "POST",
        "/api/recipes",
        Some(&token),
        Some(recipe_payload("Ghost", &[(999, 10)], &[])),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_replaces_the_composition_and_is_owner_only() {
    let (app, pool) = test_app().await;
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;
    let flour = seed_ingredient(&pool, "flour", "g").await;
    let egg = seed_ingredient(&pool, "egg", "pcs").await;
    let alice_token = token_for(alice);
    let bob_token = token_for(bob);

    let response = request(
        &app,
        "POST",
        "/api/recipes",
        Some(&alice_token),
        Some(recipe_payload("Dough", &[(flour, 500)], &[])),
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    // Non-author cannot touch it.
    let response = request(
        &app,
        "PATCH",
        &format!("/api/recipes/{id}"),
        Some(&bob_token),
        Some(recipe_payload("Hijack", &[(egg, 1)], &[])),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = request(
        &app,
        "PATCH",
        &format!("/api/recipes/{id}"),
        Some(&alice_token),
        Some(recipe_payload("Dough v2", &[(egg, 2)], &[])),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    let lines = updated["ingredients"].as_array().unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["id"].as_i64().unwrap(), egg);

    let junctions: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM recipe_ingredients WHERE recipe_id = ?")
            .bind(id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(junctions, 1);
}

#[tokio::test]
async fn delete_returns_no_content_and_cascades() {
    let (app, pool) = test_app().await;
    let alice = seed_user(&pool, "alice").await;
    let flour = seed_ingredient(&pool, "flour", "g").await;
    let token = token_for(alice);

    let response = request(
        &app,
        "POST",
        "/api/recipes",
        Some(&token),
        Some(recipe_payload("Bread", &[(flour, 400)], &[])),
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let response = request(&app, "DELETE", &format!("/api/recipes/{id}"), Some(&token), None).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = request(&app, "GET", &format!("/api/recipes/{id}"), None, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn recipe_list_is_newest_first_and_public() {
    let (app, pool) = test_app().await;
    let alice = seed_user(&pool, "alice").await;
    let flour = seed_ingredient(&pool, "flour", "g").await;
    let token = token_for(alice);

    for name in ["First", "Second"] {
        let response = request(
            &app,
            "POST",
            "/api/recipes",
            Some(&token),
            Some(recipe_payload(name, &[(flour, 100)], &[])),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // Anonymous read works; newest first.
    let response = request(&app, "GET", "/api/recipes", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    let names: Vec<&str> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Second", "First"]);
}

#[tokio::test]
async fn recipe_list_filters_by_tag_slug_and_author() {
    let (app, pool) = test_app().await;
    let alice = seed_user(&pool, "alice").await;
    let bob = seed_user(&pool, "bob").await;
    let flour = seed_ingredient(&pool, "flour", "g").await;
    let breakfast = seed_tag(&pool, "breakfast").await;
    let alice_token = token_for(alice);
    let bob_token = token_for(bob);

    request(
        &app,
        "POST",
        "/api/recipes",
        Some(&alice_token),
        Some(recipe_payload("Pancakes", &[(flour, 200)], &[breakfast])),
    )
    .await;
    request(
        &app,
        "POST",
        "/api/recipes",
        Some(&bob_token),
        Some(recipe_payload("Stew", &[(flour, 100)], &[])),
    )
    .await;

    let response = request(&app, "GET", "/api/recipes?tags=breakfast", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["name"], "Pancakes");

    let response = request(&app, "GET", &format!("/api/recipes?author={bob}"), None, None).await;
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["name"], "Stew");

    // A slug matching nothing narrows to the empty list.
    let response = request(&app, "GET", "/api/recipes?tags=midnight", None, None).await;
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn favorited_filter_applies_to_the_viewer_and_is_ignored_anonymously() {
    let (app, pool) = test_app().await;
    let alice = seed_user(&pool, "alice").await;
    let flour = seed_ingredient(&pool, "flour", "g").await;
    let token = token_for(alice);

    let response = request(
        &app,
        "POST",
        "/api/recipes",
        Some(&token),
        Some(recipe_payload("Bread", &[(flour, 400)], &[])),
    )
    .await;
    let bread = body_json(response).await["id"].as_i64().unwrap();
    request(
        &app,
        "POST",
        "/api/recipes",
        Some(&token),
        Some(recipe_payload("Pie", &[(flour, 300)], &[])),
    )
    .await;
    request(
        &app,
        "POST",
        &format!("/api/recipes/{bread}/favorite"),
        Some(&token),
        None,
    )
    .await;

    let response = request(&app, "GET", "/api/recipes?is_favorited=1", Some(&token), None).await;
    let list = body_json(response).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["name"], "Bread");

    // Anonymous viewers have no ledger; the flag narrows nothing.
    let response = request(&app, "GET", "/api/recipes?is_favorited=1", None, None).await;
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn non_numeric_path_id_is_a_json_400() {
    let (app, _pool) = test_app().await;

    let response = request(&app, "GET", "/api/recipes/abc", None, None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "ValidationError");

    let response = request(&app, "GET", "/api/tags/abc", None, None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "ValidationError");
}

#[tokio::test]
async fn ingredient_catalog_supports_prefix_search() {
    let (app, pool) = test_app().await;
    seed_ingredient(&pool, "flour", "g").await;
    seed_ingredient(&pool, "sunflower oil", "ml").await;

    let response = request(&app, "GET", "/api/ingredients?name=fl", None, None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let hits = body_json(response).await;
    assert_eq!(hits.as_array().unwrap().len(), 1);
    assert_eq!(hits[0]["name"], "flour");
}

#[tokio::test]
async fn unknown_tag_is_a_json_404() {
    let (app, _pool) = test_app().await;
    let response = request(&app, "GET", "/api/tags/42", None, None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"], "NotFound");
}
