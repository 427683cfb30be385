use actix_web::{post, web, HttpResponse};
use chrono::Utc;

use crate::error::{PixgenError, Result};
use crate::models::{GenerateRequest, GenerateResponse};
use crate::server::AppState;

/// POST /api/generate - turn a text prompt into an upstream image URL.
///
/// The body is parsed by hand because the wire contract distinguishes an
/// unparsable body (500, generic message) from a missing or non-string
/// prompt (400, "Prompt is required"); a typed extractor would answer
/// both with its own 400.
#[post("/api/generate")]
pub async fn generate(state: web::Data<AppState>, body: web::Bytes) -> Result<HttpResponse> {
    let payload: serde_json::Value =
        serde_json::from_slice(&body).map_err(|e| PixgenError::PayloadError(e.to_string()))?;

    let prompt = payload
        .get("prompt")
        .and_then(|value| value.as_str())
        .ok_or_else(|| PixgenError::InvalidPrompt("Prompt is required".to_string()))?;

    let request = GenerateRequest {
        prompt: prompt.to_string(),
    };

    log::debug!(
        "Generation request received ({} chars)",
        request.prompt.chars().count()
    );

    let image_url = state
        .urls
        .image_url(&request, Utc::now().timestamp_millis())?;

    Ok(HttpResponse::Ok().json(GenerateResponse { image_url }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::MessageBody;
    use actix_web::dev::{Service, ServiceResponse};
    use actix_web::http::StatusCode;
    use actix_web::{test, App, Error};
    use serde_json::json;

    use crate::models::ErrorResponse;
    use crate::pollinations::UrlBuilder;

    async fn test_app(
    ) -> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = Error>
    {
        test::init_service(
            App::new()
                .app_data(web::Data::new(AppState {
                    urls: UrlBuilder::new(),
                }))
                .service(generate),
        )
        .await
    }

    #[actix_web::test]
    async fn valid_prompt_returns_image_url() {
        let app = test_app().await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(GenerateRequest {
                prompt: "a red fox in snow".to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body: GenerateResponse = test::read_body_json(resp).await;
        assert!(body
            .image_url
            .starts_with("https://image.pollinations.ai/prompt/a%20red%20fox%20in%20snow?"));
        assert!(body.image_url.contains("width=1024"));
        assert!(body.image_url.contains("height=1024"));
        assert!(body.image_url.contains("nologo=true"));
    }

    #[actix_web::test]
    async fn seed_is_a_numeric_timestamp() {
        let app = test_app().await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(GenerateRequest {
                prompt: "seeded".to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: GenerateResponse = test::read_body_json(resp).await;

        let seed = body
            .image_url
            .rsplit("seed=")
            .next()
            .and_then(|s| s.parse::<i64>().ok())
            .expect("seed query parameter should be numeric");
        assert!(seed > 0);
    }

    #[actix_web::test]
    async fn missing_prompt_is_bad_request() {
        let app = test_app().await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Prompt is required");
    }

    #[actix_web::test]
    async fn non_string_prompt_is_bad_request() {
        let app = test_app().await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(json!({ "prompt": 42 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Prompt is required");
    }

    #[actix_web::test]
    async fn empty_prompt_is_bad_request() {
        let app = test_app().await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .set_json(json!({ "prompt": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn malformed_body_is_internal_server_error() {
        let app = test_app().await;

        let req = test::TestRequest::post()
            .uri("/api/generate")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Failed to generate image");
    }
}
