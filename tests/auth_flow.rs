#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{Value, json};

use rust_exam_system::models::accounts::entities::Role;
use rust_exam_system::models::auth::{LoginRequest, RegisterRequest, TokenResponse};
use rust_exam_system::runtime::lifetime::startup::seed_admin;
use rust_exam_system::storage::create_storage;

use common::{PASSWORD, bearer, register, setup};

#[actix_web::test]
async fn register_student_creates_linked_student() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({
            "contact": "s1@x.com",
            "fullname": "  Ann  ",
            "password": "pass123",
            "role": "student"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let token: TokenResponse = test::read_body_json(resp).await;
    assert_eq!(token.token_type, "bearer");
    assert_eq!(token.role, Role::Student);
    assert!(!token.access_token.is_empty());

    let student = ctx
        .storage
        .get_student_by_account_id(token.user_id)
        .await
        .unwrap()
        .expect("linked student");
    assert_eq!(student.student_number, "s1@x.com");
    assert_eq!(student.email.as_deref(), Some("s1@x.com"));
    assert_eq!(student.name, "Ann");

    let account = ctx.storage.get_account_by_id(token.user_id).await.unwrap().unwrap();
    assert_eq!(account.fullname, "Ann");
}

#[actix_web::test]
async fn register_defaults_to_student_role() {
    let ctx = setup().await;
    let token = register(&ctx, "default@x.com", None).await;
    assert_eq!(token.role, Role::Student);
    assert!(
        ctx.storage
            .get_student_by_account_id(token.user_id)
            .await
            .unwrap()
            .is_some()
    );
}

#[actix_web::test]
async fn register_teacher_creates_no_student() {
    let ctx = setup().await;
    let token = register(&ctx, "t1@x.com", Some("teacher")).await;

    assert_eq!(token.role, Role::Teacher);
    assert!(
        ctx.storage
            .get_student_by_account_id(token.user_id)
            .await
            .unwrap()
            .is_none()
    );
    assert!(ctx.storage.list_students().await.unwrap().is_empty());
}

#[actix_web::test]
async fn register_rejects_admin_and_unknown_roles() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    for role in ["admin", "principal"] {
        let req = test::TestRequest::post()
            .uri("/auth/register")
            .set_json(json!({
                "contact": format!("{role}@x.com"),
                "fullname": "Mallory",
                "password": "pass123",
                "role": role
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Role must be 'student' or 'teacher'");
    }

    assert!(
        ctx.storage
            .get_account_by_contact("admin@x.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[actix_web::test]
async fn register_twice_conflicts() {
    let ctx = setup().await;
    let app = test_app!(ctx);
    register(&ctx, "dup@x.com", Some("teacher")).await;

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({
            "contact": "dup@x.com",
            "fullname": "Again",
            "password": "pass123",
            "role": "student"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Contact already registered");
}

#[actix_web::test]
async fn register_rejects_short_password_without_side_effects() {
    let ctx = setup().await;

    let err = ctx
        .auth
        .register(RegisterRequest {
            contact: "short@x.com".to_string(),
            fullname: "Shorty".to_string(),
            password: "12345".to_string(),
            role: Some("student".to_string()),
        })
        .await
        .unwrap_err();

    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert!(
        ctx.storage
            .get_account_by_contact("short@x.com")
            .await
            .unwrap()
            .is_none()
    );
    assert!(ctx.storage.list_students().await.unwrap().is_empty());
}

#[actix_web::test]
async fn student_fullname_must_fit_student_record() {
    let ctx = setup().await;
    let long_name = "n".repeat(120);

    let err = ctx
        .auth
        .register(RegisterRequest {
            contact: "long@x.com".to_string(),
            fullname: long_name.clone(),
            password: PASSWORD.to_string(),
            role: Some("student".to_string()),
        })
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert!(
        ctx.storage
            .get_account_by_contact("long@x.com")
            .await
            .unwrap()
            .is_none()
    );
    assert!(ctx.storage.list_students().await.unwrap().is_empty());

    let teacher = ctx
        .auth
        .register(RegisterRequest {
            contact: "long@x.com".to_string(),
            fullname: long_name,
            password: PASSWORD.to_string(),
            role: Some("teacher".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(teacher.role, Role::Teacher);
}

#[actix_web::test]
async fn registration_rolls_back_when_student_insert_fails() {
    let ctx = setup().await;
    let admin = common::admin_token(&ctx).await;
    let admin = common::identity(&ctx, &admin.access_token).await;

    // 学号被占用，学生档案插入失败
    ctx.students
        .create_student(
            &admin,
            serde_json::from_value(json!({
                "student_number": "taken@x.com",
                "name": "Existing"
            }))
            .unwrap(),
        )
        .await
        .unwrap();

    let err = ctx
        .auth
        .register(RegisterRequest {
            contact: "taken@x.com".to_string(),
            fullname: "Newcomer".to_string(),
            password: PASSWORD.to_string(),
            role: Some("student".to_string()),
        })
        .await
        .unwrap_err();

    assert_eq!(err.status(), StatusCode::CONFLICT);
    assert!(
        ctx.storage
            .get_account_by_contact("taken@x.com")
            .await
            .unwrap()
            .is_none()
    );
}

#[actix_web::test]
async fn login_failures_are_indistinguishable() {
    let ctx = setup().await;
    let app = test_app!(ctx);
    register(&ctx, "s1@x.com", Some("student")).await;

    let mut bodies = Vec::new();
    for (contact, password) in [("s1@x.com", "wrong-password"), ("nobody@x.com", PASSWORD)] {
        let req = test::TestRequest::post()
            .uri("/auth/login")
            .set_json(json!({ "contact": contact, "password": password }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let body: Value = test::read_body_json(resp).await;
        bodies.push((body["code"].clone(), body["message"].clone()));
    }

    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[0].1, "Invalid credentials");
}

#[actix_web::test]
async fn login_requires_contact_and_password() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "contact": "s1@x.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn login_returns_token_for_registered_account() {
    let ctx = setup().await;
    let registered = register(&ctx, "t1@x.com", Some("teacher")).await;

    let token = ctx
        .auth
        .login(LoginRequest {
            contact: "t1@x.com".to_string(),
            password: PASSWORD.to_string(),
        })
        .await
        .unwrap();

    assert_eq!(token.user_id, registered.user_id);
    assert_eq!(token.role, Role::Teacher);

    let identity = common::identity(&ctx, &token.access_token).await;
    assert_eq!(identity.contact, "t1@x.com");
    assert_eq!(identity.account_id, registered.user_id);
}

#[actix_web::test]
async fn me_returns_account_without_password_hash() {
    let ctx = setup().await;
    let app = test_app!(ctx);
    let token = register(&ctx, "me@x.com", Some("teacher")).await;

    let req = test::TestRequest::get()
        .uri("/auth/me")
        .insert_header(bearer(&token.access_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["contact"], "me@x.com");
    assert_eq!(body["role"], "teacher");
    assert!(body.get("password_hash").is_none());
}

#[actix_web::test]
async fn malformed_json_is_bad_request() {
    let ctx = setup().await;
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert!(body["timestamp"].is_string());
}

#[actix_web::test]
async fn admin_seed_is_idempotent_with_padded_contact() {
    let mut config = common::test_config();
    config.admin.contact = format!("  {}  ", common::ADMIN_CONTACT);

    let storage = create_storage(&config.database).await.unwrap();
    seed_admin(&storage, &config).await.unwrap();
    seed_admin(&storage, &config).await.unwrap();

    let accounts = storage.list_accounts().await.unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].contact, common::ADMIN_CONTACT);
    assert_eq!(accounts[0].role, Role::Admin);
}
