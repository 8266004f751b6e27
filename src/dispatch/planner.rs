use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use crate::domain::{Fuels, Plant};
use crate::error::DispatchError;

/// Everything one planning call needs; nothing outlives the call.
#[derive(Debug, Clone)]
pub struct DispatchRequest {
    /// Total demand to cover, in MWh.
    pub load: f64,
    pub fuels: Fuels,
    pub powerplants: Vec<Plant>,
}

/// Final load assigned to one plant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub name: String,
    pub p: f64,
}

/// Plans a single-period dispatch: merit-order sort, greedy forward
/// allocation, then a backward pass that sheds the overshoot a forced
/// minimum-output start may have introduced.
///
/// Returns one assignment per input plant, in merit order, or
/// [`DispatchError::InfeasiblePlan`] when demand cannot be met exactly.
pub fn plan(request: &DispatchRequest) -> Result<Vec<Assignment>, DispatchError> {
    let fuels = &request.fuels;

    // Pass 1: cheapest marginal cost first; among equals the larger unit
    // leads so fewer plants need to be started.
    let mut order: Vec<&Plant> = request.powerplants.iter().collect();
    order.sort_by_key(|plant| {
        (
            OrderedFloat(plant.marginal_cost(fuels)),
            Reverse(OrderedFloat(plant.pmax)),
        )
    });

    let mut loads = vec![0.0_f64; order.len()];
    let mut committed: Vec<usize> = Vec::new();
    let mut remaining = request.load;
    let mut pending_recover = 0.0_f64;

    // Pass 2: greedy forward allocation.
    for (idx, plant) in order.iter().enumerate() {
        if remaining <= 0.0 {
            // Demand already covered; everything cheaper was enough.
            continue;
        }

        let capacity = plant.capacity(fuels);
        let want = remaining.min(capacity);

        if plant.pmin <= remaining {
            // Plants without any current capacity (a becalmed wind farm)
            // stay off and uncommitted.
            if want > 0.0 {
                loads[idx] = want;
                remaining -= want;
                committed.push(idx);
            }
        } else if !committed.is_empty() {
            // The unit's floor overshoots what is left; run it at minimum
            // and let the backward pass claw the excess back from plants
            // committed earlier.
            loads[idx] = plant.pmin;
            pending_recover = plant.pmin - remaining;
            remaining = 0.0;
            committed.push(idx);
        }
        // A floor that exceeds remaining demand with nothing running yet
        // cannot be started at all; the plant is skipped.
    }

    // Pass 3: walk the committed plants newest-first, shedding output down
    // to each floor until the overshoot is recovered.
    if pending_recover > 0.0 {
        for &idx in committed.iter().rev() {
            if pending_recover <= 0.0 {
                break;
            }
            let plant = order[idx];
            let current = loads[idx];
            if current > plant.pmin {
                let reduced = (current - pending_recover).max(plant.pmin);
                pending_recover -= current - reduced;
                loads[idx] = reduced;
            }
        }
    }

    if remaining > 0.0 || pending_recover > 0.0 {
        return Err(DispatchError::InfeasiblePlan);
    }

    Ok(order
        .iter()
        .zip(loads)
        .map(|(plant, p)| Assignment {
            name: plant.name.clone(),
            p,
        })
        .collect())
}

/// Total cost of a plan in euro, used to compare dispatch outcomes.
pub fn plan_cost(request: &DispatchRequest, assignments: &[Assignment]) -> f64 {
    assignments
        .iter()
        .map(|a| {
            let plant = request
                .powerplants
                .iter()
                .find(|p| p.name == a.name)
                .expect("assignment for unknown plant");
            a.p * plant.marginal_cost(&request.fuels)
        })
        .sum()
}
