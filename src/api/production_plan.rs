use axum::Json;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::{
    api::error::ApiError,
    dispatch::{plan, Assignment, DispatchRequest},
    domain::{Fuels, Plant},
};

/// Wire descriptor for one plant; the type discriminant stays a plain
/// string here so the capability model can fail fast on unknown values.
#[derive(Debug, Deserialize, Validate)]
#[validate(schema(function = "validate_power_band"))]
pub struct PlantBody {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "type")]
    pub plant_type: String,
    #[validate(range(min = 0.0, max = 1.0))]
    pub efficiency: f64,
    #[validate(range(min = 0.0))]
    pub pmin: f64,
    #[validate(range(min = 0.0))]
    pub pmax: f64,
}

fn validate_power_band(plant: &PlantBody) -> Result<(), ValidationError> {
    if plant.pmin > plant.pmax {
        return Err(ValidationError::new("pmin_above_pmax"));
    }
    if plant.efficiency <= 0.0 {
        return Err(ValidationError::new("efficiency_not_positive"));
    }
    Ok(())
}

#[derive(Debug, Deserialize, Validate)]
pub struct ProductionPlanRequest {
    #[validate(range(min = 0.0))]
    pub load: f64,
    #[validate(nested)]
    pub fuels: Fuels,
    #[validate(nested)]
    pub powerplants: Vec<PlantBody>,
}

/// POST /productionplan - dispatch the fleet over the requested load
pub async fn production_plan(
    Json(request): Json<ProductionPlanRequest>,
) -> Result<Json<Vec<Assignment>>, ApiError> {
    request.validate()?;

    let powerplants = request
        .powerplants
        .iter()
        .map(|p| Plant::from_descriptor(&p.name, &p.plant_type, p.efficiency, p.pmin, p.pmax))
        .collect::<Result<Vec<_>, _>>()?;

    let dispatch_request = DispatchRequest {
        load: request.load,
        fuels: request.fuels,
        powerplants,
    };

    let assignments = plan(&dispatch_request)?;

    tracing::info!(
        load = request.load,
        plants = assignments.len(),
        committed = assignments.iter().filter(|a| a.p > 0.0).count(),
        "production plan computed"
    );

    Ok(Json(assignments))
}
