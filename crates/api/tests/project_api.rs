//! HTTP-level integration tests for projects, users and project membership.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_id, delete, get, post, post_json, put_json};
use serde_json::json;
use sqlx::PgPool;

async fn create_project(pool: &PgPool, name: &str) -> i64 {
    create_id(
        pool,
        "/projects/",
        json!({"project_name": name, "project_detail": "details"}),
    )
    .await
}

async fn create_user(pool: &PgPool, name: &str, project_id: i64) -> i64 {
    create_id(
        pool,
        "/users/",
        json!({"user_name": name, "project_id": project_id}),
    )
    .await
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_and_get_project(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/projects/",
        json!({"project_name": "Apollo", "project_detail": "Moon landing"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["project_name"], "Apollo");
    assert_eq!(json["project_detail"], "Moon landing");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_project_overwrites_both_fields(pool: PgPool) {
    let id = create_project(&pool, "Before").await;

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/projects/{id}"),
        json!({"project_name": "After", "project_detail": "New detail"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["project_name"], "After");
    assert_eq!(json["project_detail"], "New detail");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_project_then_get_returns_404(pool: PgPool) {
    let id = create_project(&pool, "Doomed").await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "Project deleted successfully"
    );

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/projects/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_with_empty_detail_succeeds(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/projects/",
        json!({"project_name": "P", "project_detail": ""}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["project_detail"], "");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_project_without_detail_returns_422(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/projects/", json!({"project_name": "P"})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_user_with_long_name_succeeds(pool: PgPool) {
    let project_id = create_project(&pool, "Home").await;
    let long_name = "u".repeat(1000);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/users/",
        json!({"user_name": long_name, "project_id": project_id}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["user_name"], long_name);
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_user_crud(pool: PgPool) {
    let project_id = create_project(&pool, "Home").await;
    let user_id = create_user(&pool, "alice", project_id).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/users/id/{user_id}")).await).await;
    assert_eq!(json["user_name"], "alice");
    assert_eq!(json["project_id"], project_id);

    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/users/id/{user_id}"),
        json!({"user_name": "alicia"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["user_name"], "alicia");
    assert_eq!(json["project_id"], project_id);

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/users/id/{user_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/users/id/{user_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_user_for_missing_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/users/",
        json!({"user_name": "nobody", "project_id": 999999}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_users_by_project(pool: PgPool) {
    let project_id = create_project(&pool, "Team").await;
    let other_id = create_project(&pool, "Other").await;
    let first = create_user(&pool, "first", project_id).await;
    let second = create_user(&pool, "second", project_id).await;
    create_user(&pool, "elsewhere", other_id).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/users/{project_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let users = json.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["id"], first);
    assert_eq!(users[1]["id"], second);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_users_for_empty_project_returns_empty_list(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/users/999999").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

// ---------------------------------------------------------------------------
// Membership
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_add_membership_then_list_and_get(pool: PgPool) {
    let home_id = create_project(&pool, "Home").await;
    let project_id = create_project(&pool, "Shared").await;
    let user_id = create_user(&pool, "bob", home_id).await;

    let app = common::build_test_app(pool.clone());
    let response = post(app, &format!("/projects/{project_id}/users/{user_id}")).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        body_json(response).await["message"],
        "User added to project successfully"
    );

    // Membership is independent of the user's direct project.
    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/projects/{project_id}/users")).await).await;
    let members = json.as_array().unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0]["id"], user_id);
    assert_eq!(members[0]["project_id"], home_id);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/projects/{project_id}/users/{user_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["project_id"], project_id);
    assert_eq!(json["user_id"], user_id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_duplicate_membership_returns_400(pool: PgPool) {
    let project_id = create_project(&pool, "P").await;
    let user_id = create_user(&pool, "carol", project_id).await;
    let uri = format!("/projects/{project_id}/users/{user_id}");

    let app = common::build_test_app(pool.clone());
    assert_eq!(post(app, &uri).await.status(), StatusCode::CREATED);

    let app = common::build_test_app(pool.clone());
    let response = post(app, &uri).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "User is already a member of this project"
    );

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM project_user_memberships")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_add_membership_checks_project_before_user(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post(app, "/projects/999999/users/888888").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "Project with id 999999 not found"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_add_membership_for_missing_user_returns_404(pool: PgPool) {
    let project_id = create_project(&pool, "P").await;

    let app = common::build_test_app(pool);
    let response = post(app, &format!("/projects/{project_id}/users/999999")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await["error"],
        "User with id 999999 not found"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_missing_membership_returns_404(pool: PgPool) {
    let project_id = create_project(&pool, "P").await;
    let user_id = create_user(&pool, "dave", project_id).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/projects/{project_id}/users/{user_id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_members_of_missing_project_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/projects/999999/users").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_remove_membership(pool: PgPool) {
    let project_id = create_project(&pool, "P").await;
    let user_id = create_user(&pool, "erin", project_id).await;
    let uri = format!("/projects/{project_id}/users/{user_id}");

    let app = common::build_test_app(pool.clone());
    post(app, &uri).await;

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["message"],
        "User removed from project successfully"
    );

    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/projects/{project_id}/users")).await).await;
    assert_eq!(json, json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_remove_missing_membership_is_silent(pool: PgPool) {
    let project_id = create_project(&pool, "P").await;
    let user_id = create_user(&pool, "frank", project_id).await;

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/projects/{project_id}/users/{user_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_deleting_project_clears_user_project_and_memberships(pool: PgPool) {
    let project_id = create_project(&pool, "Short-lived").await;
    let user_id = create_user(&pool, "gina", project_id).await;

    let app = common::build_test_app(pool.clone());
    post(app, &format!("/projects/{project_id}/users/{user_id}")).await;

    let app = common::build_test_app(pool.clone());
    delete(app, &format!("/projects/{project_id}")).await;

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/users/id/{user_id}")).await).await;
    assert!(json["project_id"].is_null());

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM project_user_memberships")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}
