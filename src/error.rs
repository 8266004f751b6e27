use thiserror::Error;

/// Errors the planning core can signal to its caller.
///
/// Planning is deterministic and pure, so neither kind is retryable; the
/// surrounding request layer translates both into client-facing responses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("unrecognized plant type `{0}`")]
    UnrecognizedPlantType(String),

    #[error("the requested production cannot be planned")]
    InfeasiblePlan,
}
