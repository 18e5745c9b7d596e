//! Entity store: one repository per record type, all backed by the shared
//! SQLite connection. Repositories hold no state beyond the pool handle and
//! are cheap to clone.

mod attendance;
mod class_sections;
mod school_classes;
mod schools;
mod students;
mod teachers;

pub use attendance::AttendanceRepository;
pub use class_sections::ClassSectionRepository;
pub use school_classes::SchoolClassRepository;
pub use schools::SchoolRepository;
pub use students::StudentRepository;
pub use teachers::TeacherRepository;
