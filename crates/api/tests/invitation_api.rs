//! HTTP-level integration tests for project invitations.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{
    body_json, create_project, get_auth, post_auth, register_user,
};
use sqlx::PgPool;
use taskboard_core::invitation::generate_code;
use taskboard_db::models::invitation::CreateInvitation;
use taskboard_db::repositories::{InvitationRepo, ProjectRoleRepo};

#[sqlx::test(migrations = "../db/migrations")]
async fn test_owner_creates_invitation(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (owner_id, owner) = register_user(app.clone(), "owner").await;
    let project_id = create_project(app.clone(), &owner, "Apollo").await;

    let response = post_auth(app.clone(), &format!("/projects/{project_id}/invitations"), &owner).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["code"].as_str().unwrap().len(), 36);
    assert_eq!(json["inviter_id"], owner_id);
    assert_eq!(json["project_id"], project_id);
    assert!(json["accepted_at"].is_null());

    let response = get_auth(app, &format!("/projects/{project_id}/invitations"), &owner).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_participant_cannot_invite(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, owner) = register_user(app.clone(), "owner").await;
    let (_, member) = register_user(app.clone(), "member").await;
    let project_id = create_project(app.clone(), &owner, "Apollo").await;
    common::add_participant(app.clone(), project_id, &owner, &member).await;

    let uri = format!("/projects/{project_id}/invitations");
    assert_eq!(
        post_auth(app.clone(), &uri, &member).await.status(),
        StatusCode::FORBIDDEN
    );
    assert_eq!(get_auth(app, &uri, &member).await.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_accept_makes_caller_participant(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (_, owner) = register_user(app.clone(), "owner").await;
    let (member_id, member) = register_user(app.clone(), "member").await;
    let project_id = create_project(app.clone(), &owner, "Apollo").await;

    let response = post_auth(app.clone(), &format!("/projects/{project_id}/invitations"), &owner).await;
    let code = body_json(response).await["code"].as_str().unwrap().to_string();

    let response = post_auth(app, &format!("/invitations/{code}/accept"), &member).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["role"], "participant");
    assert_eq!(json["project_id"], project_id);

    let role = ProjectRoleRepo::find(&pool, member_id, project_id)
        .await
        .unwrap()
        .expect("membership should exist");
    assert_eq!(role.role, "participant");

    let invitation = InvitationRepo::find_by_code(&pool, &code).await.unwrap().unwrap();
    assert_eq!(invitation.accepted_by, Some(member_id));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_invitation_is_single_use(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, owner) = register_user(app.clone(), "owner").await;
    let (_, first) = register_user(app.clone(), "first").await;
    let (_, second) = register_user(app.clone(), "second").await;
    let project_id = create_project(app.clone(), &owner, "Apollo").await;

    let response = post_auth(app.clone(), &format!("/projects/{project_id}/invitations"), &owner).await;
    let code = body_json(response).await["code"].as_str().unwrap().to_string();
    let uri = format!("/invitations/{code}/accept");

    assert_eq!(post_auth(app.clone(), &uri, &first).await.status(), StatusCode::OK);

    let response = post_auth(app, &uri, &second).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_expired_invitation_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (owner_id, owner) = register_user(app.clone(), "owner").await;
    let (_, member) = register_user(app.clone(), "member").await;
    let project_id = create_project(app.clone(), &owner, "Apollo").await;

    let invitation = InvitationRepo::create(
        &pool,
        &CreateInvitation {
            code: generate_code(),
            inviter_id: owner_id,
            project_id,
            expires_at: Utc::now() - Duration::hours(1),
        },
    )
    .await
    .unwrap();

    let response = post_auth(app, &format!("/invitations/{}/accept", invitation.code), &member).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_existing_member_cannot_accept(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, owner) = register_user(app.clone(), "owner").await;
    let project_id = create_project(app.clone(), &owner, "Apollo").await;

    let response = post_auth(app.clone(), &format!("/projects/{project_id}/invitations"), &owner).await;
    let code = body_json(response).await["code"].as_str().unwrap().to_string();

    let response = post_auth(app, &format!("/invitations/{code}/accept"), &owner).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_code_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, user) = register_user(app.clone(), "user").await;

    let response = post_auth(app, &format!("/invitations/{}/accept", generate_code()), &user).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_out_of_range_ttl_returns_json_error(pool: PgPool) {
    let mut config = common::test_config();
    config.invitation_ttl_hours = 2_000_000_000_000;
    let app = common::build_test_app_with(pool, config);
    let (_, owner) = register_user(app.clone(), "owner").await;
    let project_id = create_project(app.clone(), &owner, "Apollo").await;

    let response = post_auth(app, &format!("/projects/{project_id}/invitations"), &owner).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}
