use actix_cors::Cors;
use actix_multipart::form::MultipartFormConfig;
use actix_web::{middleware::Logger, web, App, HttpServer};

use classpilot_server::{
    app_state::AppState,
    auth::middleware::AuthMiddleware,
    config::Config,
    handlers::{
        auth_handler, health_handler, material_handler, monitoring_handler, student_handler,
        teacher_handler,
    },
};

// Multipart buffers must clear the typed 16 MiB ceiling so oversized uploads
// reach the service layer and get a 413 instead of a generic multipart error.
const MULTIPART_LIMIT_BYTES: usize = 32 * 1024 * 1024;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if std::env::var("ENV").as_deref() == Ok("production") {
        config.validate_for_production();
    }

    let state = AppState::new(config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let host = state.config.web_server_host.clone();
    let port = state.config.web_server_port;
    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(
                MultipartFormConfig::default()
                    .total_limit(MULTIPART_LIMIT_BYTES)
                    .memory_limit(MULTIPART_LIMIT_BYTES),
            )
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .service(health_handler::health)
            .service(health_handler::readiness)
            .service(auth_handler::register)
            .service(auth_handler::login)
            .service(
                web::scope("")
                    .wrap(AuthMiddleware)
                    .service(auth_handler::me)
                    .service(auth_handler::test_token)
                    .service(material_handler::upload_material)
                    .service(material_handler::download_material)
                    .service(material_handler::list_materials)
                    .service(material_handler::material_info)
                    .service(teacher_handler::upload_material)
                    .service(teacher_handler::generate_quiz)
                    .service(teacher_handler::my_materials)
                    .service(teacher_handler::get_quiz)
                    .service(student_handler::summarize)
                    .service(student_handler::my_summaries)
                    // download must come before the {section} route
                    .service(student_handler::download_material)
                    .service(student_handler::section_materials)
                    .service(monitoring_handler::record_grade)
                    .service(monitoring_handler::student_grades)
                    .service(monitoring_handler::mark_attendance)
                    .service(monitoring_handler::student_attendance)
                    .service(monitoring_handler::attendance_stats)
                    .service(monitoring_handler::latest_recommendation)
                    .service(monitoring_handler::recommendations)
                    .service(monitoring_handler::my_grades)
                    .service(monitoring_handler::my_attendance),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
