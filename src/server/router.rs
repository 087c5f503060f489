use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;

use crate::server::{
    controller::{
        announcement::{
            create_announcement, delete_announcement, get_announcement_by_id, get_announcements,
            update_announcement,
        },
        auth::{get_me, login},
        class::{create_class, delete_class, get_class_by_id, get_classes, update_class},
        gallery::{
            create_gallery_item, delete_gallery_item, get_gallery_item_by_id, get_gallery_items,
            update_gallery_item,
        },
        grade::{create_grade, delete_grade, get_grade_by_id, get_grades, update_grade},
        major::{create_major, delete_major, get_major_by_id, get_majors, update_major},
        news::{create_news, delete_news, get_news, get_news_by_id, update_news},
        schedule::{
            create_schedule, delete_schedule, get_schedule_by_id, get_schedules, update_schedule,
        },
        staff::{
            create_staff, delete_staff, get_organization, get_staff, get_staff_by_id, update_staff,
        },
        student::{
            bulk_update_students, create_student, delete_student, get_student_by_id, get_students,
            update_student,
        },
        subject::{
            create_subject, delete_subject, get_subject_by_id, get_subjects, update_subject,
        },
        teacher::{
            create_teacher, delete_teacher, get_teacher_by_id, get_teachers, update_teacher,
        },
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(get_me))
        .route("/api/majors", get(get_majors).post(create_major))
        .route(
            "/api/majors/{id}",
            get(get_major_by_id).put(update_major).delete(delete_major),
        )
        .route("/api/subjects", get(get_subjects).post(create_subject))
        .route(
            "/api/subjects/{id}",
            get(get_subject_by_id)
                .put(update_subject)
                .delete(delete_subject),
        )
        .route("/api/classes", get(get_classes).post(create_class))
        .route(
            "/api/classes/{id}",
            get(get_class_by_id).put(update_class).delete(delete_class),
        )
        .route("/api/schedules", get(get_schedules).post(create_schedule))
        .route(
            "/api/schedules/{id}",
            get(get_schedule_by_id)
                .put(update_schedule)
                .delete(delete_schedule),
        )
        .route("/api/teachers", get(get_teachers).post(create_teacher))
        .route(
            "/api/teachers/{id}",
            get(get_teacher_by_id)
                .put(update_teacher)
                .delete(delete_teacher),
        )
        .route("/api/students", get(get_students).post(create_student))
        .route("/api/students/bulk", post(bulk_update_students))
        .route(
            "/api/students/{id}",
            get(get_student_by_id)
                .put(update_student)
                .delete(delete_student),
        )
        .route("/api/grades", get(get_grades).post(create_grade))
        .route(
            "/api/grades/{id}",
            get(get_grade_by_id).put(update_grade).delete(delete_grade),
        )
        .route(
            "/api/announcements",
            get(get_announcements).post(create_announcement),
        )
        .route(
            "/api/announcements/{id}",
            get(get_announcement_by_id)
                .put(update_announcement)
                .delete(delete_announcement),
        )
        .route("/api/news", get(get_news).post(create_news))
        .route(
            "/api/news/{id}",
            get(get_news_by_id).put(update_news).delete(delete_news),
        )
        .route(
            "/api/gallery",
            get(get_gallery_items).post(create_gallery_item),
        )
        .route(
            "/api/gallery/{id}",
            get(get_gallery_item_by_id)
                .put(update_gallery_item)
                .delete(delete_gallery_item),
        )
        .route("/api/staff", get(get_staff).post(create_staff))
        .route("/api/staff/organization", get(get_organization))
        .route(
            "/api/staff/{id}",
            get(get_staff_by_id).put(update_staff).delete(delete_staff),
        )
}

/// OpenAPI document served at `/docs`; schemas referenced from the path
/// annotations are collected automatically.
#[derive(OpenApi)]
#[openapi(paths(
    crate::server::controller::auth::login,
    crate::server::controller::auth::get_me,
    crate::server::controller::major::create_major,
    crate::server::controller::major::get_majors,
    crate::server::controller::major::get_major_by_id,
    crate::server::controller::major::update_major,
    crate::server::controller::major::delete_major,
    crate::server::controller::subject::create_subject,
    crate::server::controller::subject::get_subjects,
    crate::server::controller::subject::get_subject_by_id,
    crate::server::controller::subject::update_subject,
    crate::server::controller::subject::delete_subject,
    crate::server::controller::class::create_class,
    crate::server::controller::class::get_classes,
    crate::server::controller::class::get_class_by_id,
    crate::server::controller::class::update_class,
    crate::server::controller::class::delete_class,
    crate::server::controller::schedule::create_schedule,
    crate::server::controller::schedule::get_schedules,
    crate::server::controller::schedule::get_schedule_by_id,
    crate::server::controller::schedule::update_schedule,
    crate::server::controller::schedule::delete_schedule,
    crate::server::controller::teacher::create_teacher,
    crate::server::controller::teacher::get_teachers,
    crate::server::controller::teacher::get_teacher_by_id,
    crate::server::controller::teacher::update_teacher,
    crate::server::controller::teacher::delete_teacher,
    crate::server::controller::student::create_student,
    crate::server::controller::student::get_students,
    crate::server::controller::student::get_student_by_id,
    crate::server::controller::student::update_student,
    crate::server::controller::student::bulk_update_students,
    crate::server::controller::student::delete_student,
    crate::server::controller::grade::create_grade,
    crate::server::controller::grade::get_grades,
    crate::server::controller::grade::get_grade_by_id,
    crate::server::controller::grade::update_grade,
    crate::server::controller::grade::delete_grade,
    crate::server::controller::announcement::create_announcement,
    crate::server::controller::announcement::get_announcements,
    crate::server::controller::announcement::get_announcement_by_id,
    crate::server::controller::announcement::update_announcement,
    crate::server::controller::announcement::delete_announcement,
    crate::server::controller::news::create_news,
    crate::server::controller::news::get_news,
    crate::server::controller::news::get_news_by_id,
    crate::server::controller::news::update_news,
    crate::server::controller::news::delete_news,
    crate::server::controller::gallery::create_gallery_item,
    crate::server::controller::gallery::get_gallery_items,
    crate::server::controller::gallery::get_gallery_item_by_id,
    crate::server::controller::gallery::update_gallery_item,
    crate::server::controller::gallery::delete_gallery_item,
    crate::server::controller::staff::create_staff,
    crate::server::controller::staff::get_staff,
    crate::server::controller::staff::get_organization,
    crate::server::controller::staff::get_staff_by_id,
    crate::server::controller::staff::update_staff,
    crate::server::controller::staff::delete_staff,
))]
pub struct ApiDoc;
