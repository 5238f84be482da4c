pub mod auth_handler;
pub mod health_handler;
pub mod material_handler;
pub mod monitoring_handler;
pub mod student_handler;
pub mod teacher_handler;
