//! Domain operations: one stateless service per record type. Services own
//! their repositories (constructor injection, no ambient registry) and hold
//! no state between calls.

mod attendance_service;
mod class_section_service;
mod school_class_service;
mod school_service;
mod student_service;
mod teacher_service;

pub use attendance_service::{AttendanceError, AttendanceService};
pub use class_section_service::ClassSectionService;
pub use school_class_service::SchoolClassService;
pub use school_service::SchoolService;
pub use student_service::StudentService;
pub use teacher_service::TeacherService;
