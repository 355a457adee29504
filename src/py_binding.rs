use crate::config::SimulationConfig;
use crate::error::WalkError;
use crate::process::{BridgeParameters, JumpParameters, WalkParameters, WalkVariant};
use crate::rng::RngMethod;
use crate::sim::simulate;
use polars::prelude::*;
use pyo3::prelude::*;
use pyo3_polars::PyDataFrame;

fn to_py_err(e: WalkError) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
}

fn require<T>(value: Option<T>, name: &'static str) -> Result<T, WalkError> {
    value.ok_or(WalkError::MissingParameter { name })
}

#[allow(clippy::too_many_arguments)]
fn build_variant(
    variant: &str,
    walk: WalkParameters,
    jump_start_index: Option<i64>,
    jump_duration: Option<i64>,
    bound: Option<f64>,
    anchor_value: Option<f64>,
    anchor_time: Option<i64>,
) -> Result<WalkVariant, WalkError> {
    match variant {
        "simple" => Ok(WalkVariant::Simple(walk)),
        "jump" => Ok(WalkVariant::Jump(JumpParameters::new(
            walk,
            require(jump_start_index, "jump_start_index")?,
            require(jump_duration, "jump_duration")?,
            bound.unwrap_or(f64::INFINITY),
        ))),
        "bridge" => Ok(WalkVariant::Bridge(BridgeParameters::new(
            walk,
            require(anchor_value, "anchor_value")?,
            require(anchor_time, "anchor_time")?,
        ))),
        other => Err(WalkError::InvalidParameter {
            name: "variant",
            reason: format!("expected 'simple', 'jump' or 'bridge', got '{other}'"),
        }),
    }
}

#[pyfunction]
#[pyo3(name = "simulate")]
#[pyo3(signature = (
    variant,
    start_value,
    volatility,
    step_count,
    scenarios = 1,
    seed = None,
    rng_method = "pseudo".to_string(),
    jump_start_index = None,
    jump_duration = None,
    bound = None,
    anchor_value = None,
    anchor_time = None,
))]
#[allow(clippy::too_many_arguments)]
pub fn simulate_py(
    variant: String,
    start_value: f64,
    volatility: f64,
    step_count: i64,
    scenarios: usize,
    seed: Option<u64>,
    rng_method: String,
    jump_start_index: Option<i64>,
    jump_duration: Option<i64>,
    bound: Option<f64>,
    anchor_value: Option<f64>,
    anchor_time: Option<i64>,
) -> PyResult<PyDataFrame> {
    let walk = WalkParameters::new(start_value, volatility, step_count);
    let variant = build_variant(
        &variant,
        walk,
        jump_start_index,
        jump_duration,
        bound,
        anchor_value,
        anchor_time,
    )
    .map_err(to_py_err)?;

    let mut builder = SimulationConfig::builder()
        .variant(variant)
        .scenarios(scenarios)
        .rng_method(rng_method.parse::<RngMethod>().map_err(to_py_err)?);
    if let Some(seed) = seed {
        builder = builder.seed(seed);
    }
    let config = builder.build().map_err(to_py_err)?;

    let filtration = simulate(&config).map_err(to_py_err)?;
    let df: DataFrame = filtration.to_dataframe().map_err(to_py_err)?;
    Ok(PyDataFrame(df))
}

#[pymodule]
fn walk_sim_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(simulate_py, m)?)?;
    Ok(())
}
