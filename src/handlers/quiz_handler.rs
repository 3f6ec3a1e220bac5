use actix_web::{delete, get, patch, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{QuestionRequestDto, QuizRequestDto},
};

#[get("/quiz")]
pub async fn get_all_quizzes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let quizzes = state.quiz_service.get_all_quizzes().await?;
    Ok(HttpResponse::Ok().json(quizzes))
}

#[get("/quiz/{id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[get("/quiz/{id}/random")]
pub async fn get_random_question(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let question = state
        .quiz_service
        .get_random_question(id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(question))
}

#[post("/quiz")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    request: web::Json<QuizRequestDto>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.create_quiz(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(quiz))
}

#[delete("/quiz/{id}")]
pub async fn delete_quiz(
    state: web::Data<AppState>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.delete_quiz(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[delete("/quiz/{id}/delete/{question_id}")]
pub async fn delete_question(
    state: web::Data<AppState>,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse, AppError> {
    let (id, question_id) = path.into_inner();
    let question = state.quiz_service.delete_question(id, question_id).await?;
    Ok(HttpResponse::Ok().json(question))
}

/// The new name travels as a path segment, not in the body.
#[patch("/quiz/{id}/rename/{new_name}")]
pub async fn rename_quiz(
    state: web::Data<AppState>,
    path: web::Path<(i64, String)>,
) -> Result<HttpResponse, AppError> {
    let (id, new_name) = path.into_inner();
    let quiz = state.quiz_service.rename_quiz(id, &new_name).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[patch("/quiz/{id}/add")]
pub async fn add_question(
    state: web::Data<AppState>,
    id: web::Path<i64>,
    request: web::Json<QuestionRequestDto>,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .add_question(id.into_inner(), request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(quiz))
}
