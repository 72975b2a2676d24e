use axum::Json;

use crate::message::{CalculateRequest, CalculateResponse};
use crate::services::emissions;

pub async fn calculate_handler(Json(payload): Json<CalculateRequest>) -> Json<CalculateResponse> {
    let assessment = emissions::assess(&payload.category, payload.amount, &payload.merchant);

    Json(CalculateResponse {
        status: "success".to_string(),
        co2: assessment.co2,
        insight: assessment.insight,
        factor_used: assessment.factor,
    })
}
