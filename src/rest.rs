use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use tracing::info;

use crate::db::DbConnection;
use crate::domain::{
    AttendanceError, AttendanceService, ClassSectionService, SchoolClassService, SchoolService,
    StudentService, TeacherService,
};
use crate::models::{
    MarkAttendanceRequest, NewClassSection, NewSchool, NewSchoolClass, NewStudent, NewTeacher,
    TeacherPatch,
};

/// Application state carrying one service per record type
#[derive(Clone)]
pub struct AppState {
    pub schools: SchoolService,
    pub school_classes: SchoolClassService,
    pub class_sections: ClassSectionService,
    pub students: StudentService,
    pub teachers: TeacherService,
    pub attendance: AttendanceService,
}

impl AppState {
    pub fn new(db: DbConnection) -> Self {
        Self {
            schools: SchoolService::new(db.clone()),
            school_classes: SchoolClassService::new(db.clone()),
            class_sections: ClassSectionService::new(db.clone()),
            students: StudentService::new(db.clone()),
            teachers: TeacherService::new(db.clone()),
            attendance: AttendanceService::new(db),
        }
    }
}

/// Build the full application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/schools", post(create_school).get(list_schools))
        .route(
            "/schools/:id",
            get(get_school).put(update_school).delete(delete_school),
        )
        .route("/schools/name/:name", get(get_school_by_name))
        .route(
            "/school-classes",
            post(create_school_class).get(list_school_classes),
        )
        .route(
            "/school-classes/:id",
            get(get_school_class)
                .put(update_school_class)
                .delete(delete_school_class),
        )
        .route(
            "/school-classes/school/:school_id",
            get(get_classes_by_school),
        )
        .route(
            "/class-sections",
            post(create_class_section).get(list_class_sections),
        )
        .route(
            "/class-sections/:id",
            get(get_class_section)
                .put(update_class_section)
                .delete(delete_class_section),
        )
        .route(
            "/class-sections/school-class/:school_class_id",
            get(get_sections_by_school_class),
        )
        .route("/students", post(create_student).get(list_students))
        .route("/students/roll/:roll_number", get(get_student_by_roll))
        .route("/teachers", post(create_teacher).get(list_teachers))
        .route(
            "/teachers/:id",
            get(get_teacher).put(update_teacher).delete(delete_teacher),
        )
        .route("/teachers/employee/:employee_id", get(get_teacher_by_employee))
        .route("/teachers/school/:school_id", get(get_teachers_by_school))
        .route("/teachers/name/:name", get(get_teachers_by_name))
        .route("/teachers/exists/:id", get(teacher_exists))
        .route("/teachers/count", get(teacher_count))
        .route("/attendance", post(mark_attendance))
        .route("/attendance/date/:date", get(get_attendance_by_date))
        .route("/attendance/student/:student_id", get(get_attendance_by_student))
        .with_state(state)
}

fn internal_error(context: &'static str, error: anyhow::Error) -> axum::response::Response {
    tracing::error!("{context}: {error:?}");
    (StatusCode::INTERNAL_SERVER_ERROR, context).into_response()
}

// School handlers

async fn create_school(
    State(state): State<AppState>,
    Json(body): Json<NewSchool>,
) -> impl IntoResponse {
    info!("POST /schools - name: {}", body.name);
    match state.schools.add_school(body).await {
        Ok(school) => (StatusCode::CREATED, Json(school)).into_response(),
        Err(e) => internal_error("Error creating school", e),
    }
}

async fn list_schools(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /schools");
    match state.schools.get_all_schools().await {
        Ok(schools) => (StatusCode::OK, Json(schools)).into_response(),
        Err(e) => internal_error("Error listing schools", e),
    }
}

async fn get_school(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    info!("GET /schools/{id}");
    match state.schools.school_by_id(id).await {
        Ok(Some(school)) => (StatusCode::OK, Json(school)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => internal_error("Error retrieving school", e),
    }
}

async fn get_school_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    info!("GET /schools/name/{name}");
    match state.schools.school_by_name(&name).await {
        Ok(Some(school)) => (StatusCode::OK, Json(school)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => internal_error("Error retrieving school", e),
    }
}

async fn update_school(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<NewSchool>,
) -> impl IntoResponse {
    info!("PUT /schools/{id}");
    match state.schools.update_school(id, body).await {
        Ok(Some(school)) => (StatusCode::OK, Json(school)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => internal_error("Error updating school", e),
    }
}

async fn delete_school(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    info!("DELETE /schools/{id}");
    match state.schools.delete_school(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => internal_error("Error deleting school", e),
    }
}

// School class handlers

async fn create_school_class(
    State(state): State<AppState>,
    Json(body): Json<NewSchoolClass>,
) -> impl IntoResponse {
    info!("POST /school-classes - name: {}", body.class_name);
    match state.school_classes.add_school_class(body).await {
        Ok(class) => (StatusCode::CREATED, Json(class)).into_response(),
        Err(e) => internal_error("Error creating class", e),
    }
}

async fn list_school_classes(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /school-classes");
    match state.school_classes.get_all_school_classes().await {
        Ok(classes) => (StatusCode::OK, Json(classes)).into_response(),
        Err(e) => internal_error("Error listing classes", e),
    }
}

async fn get_school_class(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    info!("GET /school-classes/{id}");
    match state.school_classes.school_class_by_id(id).await {
        Ok(Some(class)) => (StatusCode::OK, Json(class)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => internal_error("Error retrieving class", e),
    }
}

async fn get_classes_by_school(
    State(state): State<AppState>,
    Path(school_id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /school-classes/school/{school_id}");
    match state.school_classes.classes_by_school(school_id).await {
        Ok(classes) => (StatusCode::OK, Json(classes)).into_response(),
        Err(e) => internal_error("Error listing classes", e),
    }
}

async fn update_school_class(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<NewSchoolClass>,
) -> impl IntoResponse {
    info!("PUT /school-classes/{id}");
    match state.school_classes.update_school_class(id, body).await {
        Ok(Some(class)) => (StatusCode::OK, Json(class)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => internal_error("Error updating class", e),
    }
}

async fn delete_school_class(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    info!("DELETE /school-classes/{id}");
    match state.school_classes.delete_school_class(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => internal_error("Error deleting class", e),
    }
}

// Class section handlers

async fn create_class_section(
    State(state): State<AppState>,
    Json(body): Json<NewClassSection>,
) -> impl IntoResponse {
    info!("POST /class-sections - name: {}", body.section_name);
    match state.class_sections.add_class_section(body).await {
        Ok(section) => (StatusCode::CREATED, Json(section)).into_response(),
        Err(e) => internal_error("Error creating section", e),
    }
}

async fn list_class_sections(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /class-sections");
    match state.class_sections.get_all_class_sections().await {
        Ok(sections) => (StatusCode::OK, Json(sections)).into_response(),
        Err(e) => internal_error("Error listing sections", e),
    }
}

async fn get_class_section(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /class-sections/{id}");
    match state.class_sections.class_section_by_id(id).await {
        Ok(Some(section)) => (StatusCode::OK, Json(section)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => internal_error("Error retrieving section", e),
    }
}

async fn get_sections_by_school_class(
    State(state): State<AppState>,
    Path(school_class_id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /class-sections/school-class/{school_class_id}");
    match state
        .class_sections
        .sections_by_school_class(school_class_id)
        .await
    {
        Ok(sections) => (StatusCode::OK, Json(sections)).into_response(),
        Err(e) => internal_error("Error listing sections", e),
    }
}

async fn update_class_section(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<NewClassSection>,
) -> impl IntoResponse {
    info!("PUT /class-sections/{id}");
    match state.class_sections.update_class_section(id, body).await {
        Ok(Some(section)) => (StatusCode::OK, Json(section)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => internal_error("Error updating section", e),
    }
}

async fn delete_class_section(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    info!("DELETE /class-sections/{id}");
    match state.class_sections.delete_class_section(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => internal_error("Error deleting section", e),
    }
}

// Student handlers

async fn create_student(
    State(state): State<AppState>,
    Json(body): Json<NewStudent>,
) -> impl IntoResponse {
    info!("POST /students - roll_number: {}", body.roll_number);
    match state.students.add_student(body).await {
        Ok(student) => (StatusCode::CREATED, Json(student)).into_response(),
        Err(e) => internal_error("Error creating student", e),
    }
}

async fn list_students(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /students");
    match state.students.get_all_students().await {
        Ok(students) => (StatusCode::OK, Json(students)).into_response(),
        Err(e) => internal_error("Error listing students", e),
    }
}

async fn get_student_by_roll(
    State(state): State<AppState>,
    Path(roll_number): Path<String>,
) -> impl IntoResponse {
    info!("GET /students/roll/{roll_number}");
    match state.students.student_by_roll_number(&roll_number).await {
        Ok(Some(student)) => (StatusCode::OK, Json(student)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => internal_error("Error retrieving student", e),
    }
}

// Teacher handlers

async fn create_teacher(
    State(state): State<AppState>,
    Json(body): Json<NewTeacher>,
) -> impl IntoResponse {
    info!("POST /teachers - employee_id: {}", body.employee_id);
    match state.teachers.create_teacher(body).await {
        Ok(teacher) => (StatusCode::CREATED, Json(teacher)).into_response(),
        Err(e) => internal_error("Error creating teacher", e),
    }
}

async fn list_teachers(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /teachers");
    match state.teachers.get_all_teachers().await {
        Ok(teachers) => (StatusCode::OK, Json(teachers)).into_response(),
        Err(e) => internal_error("Error listing teachers", e),
    }
}

async fn get_teacher(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    info!("GET /teachers/{id}");
    match state.teachers.teacher_by_id(id).await {
        Ok(Some(teacher)) => (StatusCode::OK, Json(teacher)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => internal_error("Error retrieving teacher", e),
    }
}

async fn get_teacher_by_employee(
    State(state): State<AppState>,
    Path(employee_id): Path<String>,
) -> impl IntoResponse {
    info!("GET /teachers/employee/{employee_id}");
    match state.teachers.teacher_by_employee_id(&employee_id).await {
        Ok(Some(teacher)) => (StatusCode::OK, Json(teacher)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => internal_error("Error retrieving teacher", e),
    }
}

async fn get_teachers_by_school(
    State(state): State<AppState>,
    Path(school_id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /teachers/school/{school_id}");
    match state.teachers.teachers_by_school(school_id).await {
        Ok(teachers) => (StatusCode::OK, Json(teachers)).into_response(),
        Err(e) => internal_error("Error listing teachers", e),
    }
}

async fn get_teachers_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> impl IntoResponse {
    info!("GET /teachers/name/{name}");
    match state.teachers.teachers_by_name(&name).await {
        Ok(teachers) => (StatusCode::OK, Json(teachers)).into_response(),
        Err(e) => internal_error("Error listing teachers", e),
    }
}

async fn update_teacher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<TeacherPatch>,
) -> impl IntoResponse {
    info!("PUT /teachers/{id}");
    match state.teachers.update_teacher(id, body).await {
        Ok(Some(teacher)) => (StatusCode::OK, Json(teacher)).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => internal_error("Error updating teacher", e),
    }
}

async fn delete_teacher(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    info!("DELETE /teachers/{id}");
    match state.teachers.delete_teacher(id).await {
        Ok(true) => StatusCode::NO_CONTENT.into_response(),
        Ok(false) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => internal_error("Error deleting teacher", e),
    }
}

async fn teacher_exists(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    info!("GET /teachers/exists/{id}");
    match state.teachers.teacher_exists(id).await {
        Ok(exists) => (StatusCode::OK, Json(exists)).into_response(),
        Err(e) => internal_error("Error checking teacher", e),
    }
}

async fn teacher_count(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /teachers/count");
    match state.teachers.count_teachers().await {
        Ok(count) => (StatusCode::OK, Json(count)).into_response(),
        Err(e) => internal_error("Error counting teachers", e),
    }
}

// Attendance handlers

async fn mark_attendance(
    State(state): State<AppState>,
    Json(body): Json<MarkAttendanceRequest>,
) -> impl IntoResponse {
    info!(
        "POST /attendance - student: {}, date: {}",
        body.student_id, body.date
    );
    match state
        .attendance
        .mark_attendance(body.student_id, body.date, body.status)
        .await
    {
        Ok(record) => (StatusCode::OK, Json(record)).into_response(),
        Err(AttendanceError::StudentNotFound) => {
            (StatusCode::NOT_FOUND, "Student not found").into_response()
        }
        Err(AttendanceError::Storage(e)) => internal_error("Error marking attendance", e),
    }
}

async fn get_attendance_by_date(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> impl IntoResponse {
    info!("GET /attendance/date/{date}");
    match state.attendance.attendance_by_date(date).await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(e) => internal_error("Error listing attendance", e),
    }
}

async fn get_attendance_by_student(
    State(state): State<AppState>,
    Path(student_id): Path<i64>,
) -> impl IntoResponse {
    info!("GET /attendance/student/{student_id}");
    match state.attendance.attendance_by_student(student_id).await {
        Ok(records) => (StatusCode::OK, Json(records)).into_response(),
        Err(AttendanceError::StudentNotFound) => {
            (StatusCode::NOT_FOUND, "Student not found").into_response()
        }
        Err(AttendanceError::Storage(e)) => internal_error("Error listing attendance", e),
    }
}
