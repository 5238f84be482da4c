pub mod attendance;
pub mod grade;
pub mod material;
pub mod quiz;
pub mod recommendation;
pub mod summary;
pub mod user;

pub use attendance::{AttendanceRecord, AttendanceStatus};
pub use grade::Grade;
pub use material::Material;
pub use quiz::Quiz;
pub use recommendation::Recommendation;
pub use summary::Summary;
pub use user::{User, UserRole};
