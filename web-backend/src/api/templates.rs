use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use gitanalyzer_core::{SaveError, StoreError};

use crate::state::AppState;

/// 保存请求体（与前端保持一致）
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    pub new_file: String,
    pub template_data: String,
}

pub fn configure_template_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_templates))
        .route("/validate", web::post().to(validate_template))
        .route("/save", web::post().to(save_template))
        .route("/{file}", web::get().to(get_template));
}

/// 列出模板文件（零字节文件视为不存在）
pub async fn list_templates(state: web::Data<AppState>) -> impl Responder {
    match state.service.list() {
        Ok(entries) => HttpResponse::Ok().json(entries),
        Err(err @ StoreError::Unavailable { .. }) => {
            HttpResponse::NotFound().json(serde_json::json!({
                "message": err.to_string()
            }))
        }
        Err(err) => HttpResponse::InternalServerError().json(serde_json::json!({
            "message": "Template list error",
            "error": err.to_string()
        })),
    }
}

/// 返回指定模板的原始文本
pub async fn get_template(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let file = path.into_inner();
    match state.service.fetch(&file) {
        Ok(content) => HttpResponse::Ok().json(content),
        Err(err @ (StoreError::NotFound { .. } | StoreError::Unavailable { .. })) => {
            HttpResponse::NotFound().json(serde_json::json!({
                "message": err.to_string()
            }))
        }
        Err(err) => HttpResponse::InternalServerError().json(serde_json::json!({
            "message": "Template read error",
            "error": err.to_string()
        })),
    }
}

/// 校验模板文本，返回错误数组；空数组即合法。
/// 语法失败时是单元素数组，property为"Indentation error"。
pub async fn validate_template(
    state: web::Data<AppState>,
    body: web::Json<String>,
) -> impl Responder {
    let errors = state.service.validate_document(&body);
    HttpResponse::Ok().json(errors)
}

/// 保存模板：文件名策略门通过后覆盖写入
pub async fn save_template(
    state: web::Data<AppState>,
    request: web::Json<SaveRequest>,
) -> impl Responder {
    let request = request.into_inner();
    match state.service.save(&request.new_file, &request.template_data) {
        Ok(saved) => {
            tracing::info!(file = %saved.file_name, "template saved");
            HttpResponse::Ok().json(saved)
        }
        Err(SaveError::Policy(errors)) => HttpResponse::BadRequest().json(errors),
        Err(SaveError::Store(err)) => HttpResponse::InternalServerError().json(serde_json::json!({
            "message": "Save template error",
            "error": err.to_string()
        })),
    }
}
