use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::student::BulkStudentActionDto,
    server::{
        error::AppError,
        model::student::{BulkStudentAction, BulkStudentParams},
        service::student::StudentService,
    },
};

/// Tests the full bulk path for `change_semester`.
#[tokio::test]
async fn bulk_change_semester_updates_every_student() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let major = factory::create_major(db).await.unwrap();
    let a = factory::create_student(db, major.id).await.unwrap();
    let b = factory::create_student(db, major.id).await.unwrap();

    let service = StudentService::new(db);

    let result = service
        .bulk_update(BulkStudentParams {
            student_ids: vec![a.id, b.id],
            action: BulkStudentAction::ChangeSemester(2),
        })
        .await?;

    assert_eq!(result.matched, 2);
    assert_eq!(result.updated, 2);

    let a_row = service.get_by_id(a.id).await?.unwrap();
    assert_eq!(a_row.semester, 2);

    Ok(())
}

/// Tests that bulk promotion never pushes a student past grade 12.
///
/// Expected: matched reports both students, updated only the one below the
/// cap, and the grade-12 student is unchanged.
#[tokio::test]
async fn bulk_promote_grade_clamps_at_twelve() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let major = factory::create_major(db).await.unwrap();
    let junior = factory::student::StudentFactory::new(db, major.id)
        .grade_level(11)
        .build()
        .await
        .unwrap();
    let senior = factory::student::StudentFactory::new(db, major.id)
        .grade_level(12)
        .build()
        .await
        .unwrap();

    let service = StudentService::new(db);

    let result = service
        .bulk_update(BulkStudentParams {
            student_ids: vec![junior.id, senior.id],
            action: BulkStudentAction::PromoteGrade,
        })
        .await?;

    assert_eq!(result.matched, 2);
    assert_eq!(result.updated, 1);

    assert_eq!(service.get_by_id(junior.id).await?.unwrap().grade_level, 12);
    assert_eq!(service.get_by_id(senior.id).await?.unwrap().grade_level, 12);

    Ok(())
}

/// Tests bulk request validation in `BulkStudentParams::from_dto`.
#[test]
fn bulk_params_validate_action_and_value() {
    // Unknown action
    let result = BulkStudentParams::from_dto(BulkStudentActionDto {
        student_ids: vec![1],
        action: "graduate".to_string(),
        value: None,
    });
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    // Missing value for change_semester
    let result = BulkStudentParams::from_dto(BulkStudentActionDto {
        student_ids: vec![1],
        action: "change_semester".to_string(),
        value: None,
    });
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    // Out-of-range grade level
    let result = BulkStudentParams::from_dto(BulkStudentActionDto {
        student_ids: vec![1],
        action: "set_grade_level".to_string(),
        value: Some(13),
    });
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    // Empty id list
    let result = BulkStudentParams::from_dto(BulkStudentActionDto {
        student_ids: vec![],
        action: "promote_grade".to_string(),
        value: None,
    });
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    // Well-formed request
    let result = BulkStudentParams::from_dto(BulkStudentActionDto {
        student_ids: vec![1, 2],
        action: "promote_grade".to_string(),
        value: None,
    });
    assert!(matches!(
        result,
        Ok(BulkStudentParams {
            action: BulkStudentAction::PromoteGrade,
            ..
        })
    ));
}

/// Tests the grade dependency guard on student deletion.
#[tokio::test]
async fn delete_rejected_while_grades_exist() -> Result<(), AppError> {
    let test = TestBuilder::new().with_academic_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_major, _teacher, _class, subject, student) =
        factory::helpers::create_roster(db).await.unwrap();
    factory::create_grade(db, student.id, subject.id).await.unwrap();

    let service = StudentService::new(db);

    let result = service.delete(student.id).await;

    match result {
        Err(AppError::BadRequest(message)) => {
            assert!(message.contains("1 grade record"));
        }
        other => panic!("expected guard rejection, got {:?}", other),
    }

    assert!(service.get_by_id(student.id).await?.is_some());

    Ok(())
}
