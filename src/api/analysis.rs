//! REST API endpoints for case categories and their analyses

use actix_web::{HttpResponse, get, post, web};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

use crate::api::error::{ApiError, ErrorResponse};
use crate::model::{AnalysisReport, Statistics};
use crate::service::AnalysisService;

/// Configured case categories
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryListResponse {
    pub categories: Vec<String>,
}

/// Result of an analysis run
#[derive(Debug, Serialize, ToSchema)]
pub struct AnalysisResponse {
    pub category: String,
    pub statistics: Statistics,
    pub analysis: String,
}

impl AnalysisResponse {
    fn new(category: String, report: AnalysisReport) -> Self {
        Self {
            category,
            statistics: report.statistics,
            analysis: report.analysis,
        }
    }
}

/// List case categories available for analysis
#[utoipa::path(
    get,
    path = "/v1/categories",
    responses(
        (status = 200, description = "Categories retrieved successfully", body = CategoryListResponse)
    ),
    tag = "categories"
)]
#[get("/v1/categories")]
pub async fn list_categories(service: web::Data<AnalysisService>) -> HttpResponse {
    HttpResponse::Ok().json(CategoryListResponse {
        categories: service.categories().to_vec(),
    })
}

/// Analyze a category and persist the result
///
/// Reads `{category}.json`, computes outcome statistics, requests a narrative
/// analysis and writes `{category}_analysis.json`. Nothing is written when any
/// step fails.
#[utoipa::path(
    post,
    path = "/v1/categories/{category}/analysis",
    params(
        ("category" = String, Path, description = "Category name (case file stem)")
    ),
    responses(
        (status = 200, description = "Analysis completed and saved", body = AnalysisResponse),
        (status = 404, description = "Unknown category or missing case file", body = ErrorResponse),
        (status = 422, description = "Case file is not a valid case collection", body = ErrorResponse),
        (status = 502, description = "Narrative analysis failed", body = ErrorResponse)
    ),
    tag = "analysis"
)]
#[post("/v1/categories/{category}/analysis")]
pub async fn run_analysis(
    service: web::Data<AnalysisService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let category = path.into_inner();
    let report = service.run(&category).await?;

    Ok(HttpResponse::Ok().json(AnalysisResponse::new(category, report)))
}

/// Get the saved analysis of a category
#[utoipa::path(
    get,
    path = "/v1/categories/{category}/analysis",
    params(
        ("category" = String, Path, description = "Category name (case file stem)")
    ),
    responses(
        (status = 200, description = "Saved analysis retrieved", body = AnalysisResponse),
        (status = 404, description = "Unknown category or no saved analysis", body = ErrorResponse)
    ),
    tag = "analysis"
)]
#[get("/v1/categories/{category}/analysis")]
pub async fn get_analysis(
    service: web::Data<AnalysisService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let category = path.into_inner();
    let report = service.load_saved(&category)?;

    Ok(HttpResponse::Ok().json(AnalysisResponse::new(category, report)))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list_categories,
        run_analysis,
        get_analysis,
        crate::api::health::liveness,
        crate::api::health::readiness
    ),
    components(schemas(
        CategoryListResponse,
        AnalysisResponse,
        Statistics,
        ErrorResponse,
        crate::api::health::HealthStatus,
        crate::api::health::ReadinessStatus
    )),
    tags(
        (name = "categories", description = "Case categories"),
        (name = "analysis", description = "Court practice analysis"),
        (name = "health", description = "Health checks")
    )
)]
pub struct ApiDoc;

/// Configure analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_categories)
        .service(run_analysis)
        .service(get_analysis);
}
