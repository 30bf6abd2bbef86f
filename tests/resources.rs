#[macro_use]
mod common;

use actix_web::{http::StatusCode, test};
use serde_json::{Value, json};

use rust_exam_system::models::auth::Identity;
use rust_exam_system::models::exams::requests::ExamRequest;
use rust_exam_system::models::results::requests::ResultRequest;
use rust_exam_system::models::students::requests::StudentRequest;
use rust_exam_system::runtime::lifetime::startup::StartupContext;

use common::{admin_token, bearer, identity, register, setup};

async fn admin(ctx: &StartupContext) -> Identity {
    let token = admin_token(ctx).await;
    identity(ctx, &token.access_token).await
}

fn exam(title: &str) -> ExamRequest {
    ExamRequest {
        title: title.to_string(),
        total_marks: 100,
    }
}

fn student(number: &str, email: Option<&str>) -> StudentRequest {
    StudentRequest {
        student_number: number.to_string(),
        name: format!("Student {number}"),
        email: email.map(str::to_string),
        age: Some(18),
        grade: None,
    }
}

#[actix_web::test]
async fn admin_creates_exam_and_teacher_records_result() {
    let ctx = setup().await;
    let app = test_app!(ctx);
    let admin = admin_token(&ctx).await;
    let teacher = register(&ctx, "t1@x.com", Some("teacher")).await;
    let s1 = register(&ctx, "s1@x.com", Some("student")).await;
    let s1_student = ctx
        .storage
        .get_student_by_account_id(s1.user_id)
        .await
        .unwrap()
        .unwrap();

    let req = test::TestRequest::post()
        .uri("/exams")
        .insert_header(bearer(&admin.access_token))
        .set_json(json!({ "title": "Midterm", "total_marks": 100 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let exam: Value = test::read_body_json(resp).await;
    assert!(exam["id"].as_i64().unwrap() > 0);
    assert_eq!(exam["title"], "Midterm");

    let req = test::TestRequest::post()
        .uri("/results")
        .insert_header(bearer(&teacher.access_token))
        .set_json(json!({
            "student_id": s1_student.id,
            "exam_id": exam["id"],
            "score": 88.5
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let result: Value = test::read_body_json(resp).await;
    assert_eq!(result["student_name"], "User s1@x.com");
    assert_eq!(result["exam_title"], "Midterm");
    assert_eq!(result["score"], 88.5);
}

#[actix_web::test]
async fn students_cannot_mutate() {
    let ctx = setup().await;
    let app = test_app!(ctx);
    let s1 = register(&ctx, "s1@x.com", Some("student")).await;

    let requests = [
        test::TestRequest::post()
            .uri("/exams")
            .set_json(json!({ "title": "Quiz", "total_marks": 10 })),
        test::TestRequest::post()
            .uri("/students")
            .set_json(json!({ "student_number": "S-9", "name": "Bob" })),
        test::TestRequest::post()
            .uri("/results")
            .set_json(json!({ "student_id": 1, "exam_id": 1, "score": 1.0 })),
    ];

    for req in requests {
        let req = req.insert_header(bearer(&s1.access_token)).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}

#[actix_web::test]
async fn update_and_delete_check_existence_before_role() {
    let ctx = setup().await;
    let admin = admin(&ctx).await;
    let s1 = register(&ctx, "s1@x.com", Some("student")).await;
    let student = identity(&ctx, &s1.access_token).await;

    let created = ctx.exams.create_exam(&admin, exam("Final")).await.unwrap();

    // 目标不存在：404，即使调用者无权限
    let err = ctx
        .exams
        .update_exam(&student, 9999, exam("Nope"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    let err = ctx.students.delete_student(&student, 9999).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    let err = ctx.results.delete_result(&student, 9999).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);

    // 目标存在：403
    let err = ctx
        .exams
        .update_exam(&student, created.id, exam("Hacked"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::FORBIDDEN);
    let err = ctx.exams.delete_exam(&student, created.id).await.unwrap_err();
    assert_eq!(err.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn result_references_are_checked_student_first() {
    let ctx = setup().await;
    let admin = admin(&ctx).await;
    let created = ctx.exams.create_exam(&admin, exam("Midterm")).await.unwrap();
    let pupil = ctx
        .students
        .create_student(&admin, student("S-1", None))
        .await
        .unwrap();

    let err = ctx
        .results
        .create_result(
            &admin,
            ResultRequest {
                student_id: 404,
                exam_id: 404,
                score: 50.0,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert_eq!(err.message(), "Student not found");

    let err = ctx
        .results
        .create_result(
            &admin,
            ResultRequest {
                student_id: pupil.id,
                exam_id: 404,
                score: 50.0,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.message(), "Exam not found");

    let ok = ctx
        .results
        .create_result(
            &admin,
            ResultRequest {
                student_id: pupil.id,
                exam_id: created.id,
                score: 50.0,
            },
        )
        .await
        .unwrap();
    assert_eq!(ok.exam_title, "Midterm");
}

#[actix_web::test]
async fn result_listing_is_scoped_for_students() {
    let ctx = setup().await;
    let admin = admin(&ctx).await;
    let s1 = register(&ctx, "s1@x.com", Some("student")).await;
    let s2 = register(&ctx, "s2@x.com", Some("student")).await;
    let s1_identity = identity(&ctx, &s1.access_token).await;

    let s1_student = ctx.storage.get_student_by_account_id(s1.user_id).await.unwrap().unwrap();
    let s2_student = ctx.storage.get_student_by_account_id(s2.user_id).await.unwrap().unwrap();
    let midterm = ctx.exams.create_exam(&admin, exam("Midterm")).await.unwrap();

    for (student_id, score) in [(s1_student.id, 90.0), (s2_student.id, 70.0), (s1_student.id, 80.0)] {
        ctx.results
            .create_result(
                &admin,
                ResultRequest {
                    student_id,
                    exam_id: midterm.id,
                    score,
                },
            )
            .await
            .unwrap();
    }

    let own = ctx.results.list_results(&s1_identity).await.unwrap();
    assert_eq!(own.len(), 2);
    assert!(own.iter().all(|r| r.student_id == s1_student.id));
    assert!(own.iter().all(|r| r.exam_title == "Midterm"));

    let all = ctx.results.list_results(&admin).await.unwrap();
    assert_eq!(all.len(), 3);

    // 无关联学生档案的学生账户看不到任何成绩
    ctx.students.delete_student(&admin, s1_student.id).await.unwrap();
    assert!(ctx.results.list_results(&s1_identity).await.unwrap().is_empty());
    assert_eq!(ctx.results.list_results(&admin).await.unwrap().len(), 1);
}

#[actix_web::test]
async fn student_listing_is_scoped_over_http() {
    let ctx = setup().await;
    let app = test_app!(ctx);
    let admin = admin_token(&ctx).await;
    let s1 = register(&ctx, "s1@x.com", Some("student")).await;
    register(&ctx, "s2@x.com", Some("student")).await;

    let req = test::TestRequest::get()
        .uri("/students")
        .insert_header(bearer(&s1.access_token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let students = body.as_array().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0]["student_number"], "s1@x.com");

    let req = test::TestRequest::get()
        .uri("/students")
        .insert_header(bearer(&admin.access_token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn direct_student_creation_links_matching_account() {
    let ctx = setup().await;
    let admin = admin(&ctx).await;
    let s1 = register(&ctx, "s1@x.com", Some("student")).await;
    let s1_identity = identity(&ctx, &s1.access_token).await;
    register(&ctx, "t1@x.com", Some("teacher")).await;

    // 该学生账户已有档案，不重复关联
    let duplicate = ctx
        .students
        .create_student(&admin, student("S-2", Some("s1@x.com")))
        .await
        .unwrap();
    assert_eq!(duplicate.account_id, None);

    // 教师账户不会被关联
    let for_teacher = ctx
        .students
        .create_student(&admin, student("S-3", Some("t1@x.com")))
        .await
        .unwrap();
    assert_eq!(for_teacher.account_id, None);

    // 原档案删除后，新建档案会关联到该学生账户
    let own = ctx.storage.get_student_by_account_id(s1.user_id).await.unwrap().unwrap();
    ctx.students.delete_student(&admin, own.id).await.unwrap();
    let relinked = ctx
        .students
        .create_student(&admin, student("S-4", Some("s1@x.com")))
        .await
        .unwrap();
    assert_eq!(relinked.account_id, Some(s1.user_id));

    let visible = ctx.students.list_students(&s1_identity).await.unwrap();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, relinked.id);
}

#[actix_web::test]
async fn update_student_maps_only_mutable_fields() {
    let ctx = setup().await;
    let admin = admin(&ctx).await;
    let s1 = register(&ctx, "s1@x.com", Some("student")).await;
    let own = ctx.storage.get_student_by_account_id(s1.user_id).await.unwrap().unwrap();

    let updated = ctx
        .students
        .update_student(
            &admin,
            own.id,
            StudentRequest {
                student_number: "S-100".to_string(),
                name: "Ann Renamed".to_string(),
                email: None,
                age: Some(20),
                grade: Some(3.9),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, own.id);
    assert_eq!(updated.account_id, Some(s1.user_id));
    assert_eq!(updated.created_at, own.created_at);
    assert_eq!(updated.student_number, "S-100");
    assert_eq!(updated.grade, Some(3.9));
}

#[actix_web::test]
async fn duplicate_student_number_conflicts() {
    let ctx = setup().await;
    let admin = admin(&ctx).await;
    ctx.students
        .create_student(&admin, student("S-1", None))
        .await
        .unwrap();

    let err = ctx
        .students
        .create_student(&admin, student("S-1", None))
        .await
        .unwrap_err();
    assert_eq!(err.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn invalid_payloads_are_rejected() {
    let ctx = setup().await;
    let app = test_app!(ctx);
    let admin = admin_token(&ctx).await;

    let cases = [
        ("/exams", json!({ "title": "  ", "total_marks": 100 })),
        ("/exams", json!({ "title": "Quiz", "total_marks": 0 })),
        ("/students", json!({ "student_number": "", "name": "Bob" })),
        ("/students", json!({ "student_number": "S-1", "name": "Bob", "age": -3 })),
        ("/exams", json!({ "title": "t".repeat(151), "total_marks": 100 })),
        ("/students", json!({ "student_number": "9".repeat(51), "name": "Bob" })),
        ("/students", json!({ "student_number": "S-1", "name": "b".repeat(101) })),
        (
            "/students",
            json!({ "student_number": "S-1", "name": "Bob", "email": "e".repeat(101) }),
        ),
        ("/results", json!({ "student_id": 1, "exam_id": 1, "score": -1.0 })),
        ("/results", json!({ "student_id": "one", "exam_id": 1, "score": 1.0 })),
    ];

    for (uri, body) in cases {
        let req = test::TestRequest::post()
            .uri(uri)
            .insert_header(bearer(&admin.access_token))
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri} {body}");
    }

    let req = test::TestRequest::delete()
        .uri("/exams/not-a-number")
        .insert_header(bearer(&admin.access_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn deleting_exam_removes_its_results() {
    let ctx = setup().await;
    let app = test_app!(ctx);
    let admin_token = admin_token(&ctx).await;
    let admin = identity(&ctx, &admin_token.access_token).await;

    let quiz = ctx.exams.create_exam(&admin, exam("Quiz")).await.unwrap();
    let pupil = ctx
        .students
        .create_student(&admin, student("S-1", None))
        .await
        .unwrap();
    ctx.results
        .create_result(
            &admin,
            ResultRequest {
                student_id: pupil.id,
                exam_id: quiz.id,
                score: 9.0,
            },
        )
        .await
        .unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/exams/{}", quiz.id))
        .insert_header(bearer(&admin_token.access_token))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["message"], "Exam deleted");

    assert!(ctx.results.list_results(&admin).await.unwrap().is_empty());
    assert!(ctx.exams.list_exams(&admin).await.unwrap().is_empty());
}
