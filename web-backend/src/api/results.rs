use actix_web::{web, HttpResponse, Responder};

use gitanalyzer_core::{ArtifactKind, StoreError};

use crate::state::AppState;

pub fn configure_result_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::get().to(list_results))
        .route("/{file}", web::get().to(get_result));
}

/// 列出结果文件元数据（零字节文件视为不存在）
pub async fn list_results(state: web::Data<AppState>) -> impl Responder {
    match state.store.list(ArtifactKind::Result) {
        Ok(entries) => HttpResponse::Ok().json(entries),
        Err(err @ StoreError::Unavailable { .. }) => {
            HttpResponse::NotFound().json(serde_json::json!({
                "message": err.to_string()
            }))
        }
        Err(err) => HttpResponse::InternalServerError().json(serde_json::json!({
            "message": "Result list error",
            "error": err.to_string()
        })),
    }
}

/// 把结果文件转成行对象返回，每行带合成的1-based id
pub async fn get_result(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let file = path.into_inner();
    match state.store.fetch_rows(&file) {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(err @ (StoreError::NotFound { .. } | StoreError::Unavailable { .. })) => {
            HttpResponse::NotFound().json(serde_json::json!({
                "message": err.to_string()
            }))
        }
        Err(err) => HttpResponse::InternalServerError().json(serde_json::json!({
            "message": "Result read error",
            "error": err.to_string()
        })),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use tempfile::TempDir;

    use crate::api::create_api_router;
    use crate::state::AppState;

    #[actix_web::test]
    async fn result_rows_carry_sequential_ids() {
        let templates = TempDir::new().unwrap();
        let results = TempDir::new().unwrap();
        std::fs::write(
            results.path().join("scan.csv"),
            "repository,secret\nrepo-a,s1\nrepo-b,s2\n",
        )
        .unwrap();

        let state = AppState::with_dirs(
            templates.path().to_path_buf(),
            results.path().to_path_buf(),
        );
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(create_api_router()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/results/scan.csv")
            .to_request();
        let rows: Vec<serde_json::Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["id"], 1);
        assert_eq!(rows[1]["id"], 2);
        assert_eq!(rows[1]["repository"], "repo-b");

        let req = test::TestRequest::get().uri("/api/results").to_request();
        let listing: Vec<serde_json::Value> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0]["file"], "scan.csv");
    }

    #[actix_web::test]
    async fn missing_result_dir_returns_404_message() {
        let templates = TempDir::new().unwrap();
        let results = TempDir::new().unwrap();
        let state = AppState::with_dirs(
            templates.path().to_path_buf(),
            results.path().to_path_buf(),
        );
        drop(results);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(create_api_router()),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/results").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "Result dir not found");
    }
}
