// src/routes.rs

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers};

pub fn build_router(app_state: AppState) -> Router {
    let dashboard_routes = Router::new()
        .route("/"
               ,get(handlers::dashboard::get_dashboard)
               .post(handlers::dashboard::query_dashboard)
        )
        .route("/filters", get(handlers::dashboard::get_filter_options))
        .route("/summary", get(handlers::dashboard::get_summary))
        .route("/monthly-sales", get(handlers::dashboard::get_monthly_sales))
        .route("/units-by-product", get(handlers::dashboard::get_units_by_product))
        .route("/sales-by-payment", get(handlers::dashboard::get_sales_by_payment))
        .route("/rating-by-city", get(handlers::dashboard::get_rating_by_city));

    let language_routes = Router::new()
        .route("/", get(handlers::languages::list_languages))
        .route("/{key}", get(handlers::languages::get_bundle));

    // Combina tudo no router principal
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/api/health", get(|| async { "OK" }))
        .route("/api/transactions", get(handlers::dashboard::list_transactions))
        .nest("/api/dashboard", dashboard_routes)
        .nest("/api/languages", language_routes)
        .with_state(app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    async fn call(request: Request<Body>) -> (StatusCode, Value) {
        let app = build_router(AppState::for_tests());
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn dashboard_defaults_to_everything_in_english() {
        let (status, body) = call(get("/api/dashboard")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["language"], "english");
        assert_eq!(body["title"], "Sales Dashboard");
        assert_eq!(body["rowCount"], 500);
        assert_eq!(body["kpis"]["totalSales"]["label"], "Total Sales");
        assert_eq!(body["monthlySales"]["hasData"], true);
    }

    #[tokio::test]
    async fn dashboard_follows_query_filters_and_language() {
        let (status, body) = call(get("/api/dashboard?lang=brazil&city=Yangon")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Painel de Vendas");

        let cities = body["rateByCity"]["entries"].as_array().unwrap();
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0]["city"], "Yangon");
    }

    #[tokio::test]
    async fn repeated_query_values_are_combined() {
        let (_, body) = call(get("/api/dashboard/rating-by-city?city=Yangon&city=Mandalay")).await;
        let cities: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry["city"].as_str().unwrap())
            .collect();
        assert_eq!(cities, vec!["Yangon", "Mandalay"]);
    }

    #[tokio::test]
    async fn explicit_empty_list_in_body_matches_nothing() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/dashboard")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"payment": []}"#))
            .unwrap();
        let (status, body) = call(request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["rowCount"], 0);
        assert_eq!(body["summary"]["totalSales"], 0.0);
        assert_eq!(body["summary"]["averageRating"], Value::Null);
        assert_eq!(body["monthlySales"]["placeholder"], "No data for the selected filters");
    }

    #[tokio::test]
    async fn inverted_dates_give_an_empty_summary() {
        let (status, body) = call(get("/api/dashboard/summary?dateMin=2019-12-01&dateMax=2019-01-01")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["totalSales"], 0.0);
        assert_eq!(body["totalUnits"], 0);
    }

    #[tokio::test]
    async fn malformed_date_is_a_bad_request() {
        let (status, body) = call(get("/api/transactions?dateMin=ontem")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("dateMin"));
    }

    #[tokio::test]
    async fn unknown_language_is_not_found() {
        let (status, _) = call(get("/api/dashboard?lang=klingon")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = call(get("/api/languages/klingon")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn repeated_lang_is_a_bad_request() {
        let (status, body) = call(get("/api/dashboard?lang=klingon&lang=japan")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("lang"));
    }

    #[tokio::test]
    async fn languages_and_bundles_are_served() {
        let (status, body) = call(get("/api/languages")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 14);
        assert_eq!(body[2]["displayName"], "中文 (Mandarin)");

        let (status, body) = call(get("/api/languages/korea")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["language"], "korea");
        assert_eq!(body["labels"].as_object().unwrap().len(), 15);
        assert_eq!(body["labels"]["title"], "판매 대시보드");
    }

    #[tokio::test]
    async fn filter_options_cover_the_dataset() {
        let (status, body) = call(get("/api/dashboard/filters")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["cities"].as_array().unwrap().len(), 3);
        assert_eq!(body["productLines"].as_array().unwrap().len(), 6);
        assert!(body["dateMin"].as_str().unwrap().starts_with("2019-"));
    }

    #[tokio::test]
    async fn transactions_are_filtered() {
        let (status, body) = call(get("/api/transactions?customerType=Member&productLine=Food%20and%20beverages")).await;
        assert_eq!(status, StatusCode::OK);
        let records = body.as_array().unwrap();
        assert!(!records.is_empty());
        for record in records {
            assert_eq!(record["customerType"], "Member");
            assert_eq!(record["productLine"], "Food and beverages");
        }
    }

    #[tokio::test]
    async fn health_check() {
        let app = build_router(AppState::for_tests());
        let response = app.oneshot(get("/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
