pub mod health_handler;
pub mod quiz_handler;

use actix_web::web;

use crate::errors::AppError;

pub use health_handler::{health_check, health_check_ready};
pub use quiz_handler::{
    add_question, create_quiz, delete_question, delete_quiz, get_all_quizzes, get_quiz,
    get_random_question, rename_quiz,
};

/// Malformed bodies answer with the same JSON error shape as every other failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// Unparseable ids in the path are reported as a missing resource.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| AppError::NotFound(err.to_string()).into())
}

/// Registers every route. Shared by the server and the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(health_check)
        .service(health_check_ready)
        .service(get_all_quizzes)
        .service(get_random_question)
        .service(get_quiz)
        .service(create_quiz)
        .service(delete_question)
        .service(delete_quiz)
        .service(rename_quiz)
        .service(add_question);
}
