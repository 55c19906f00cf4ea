use crate::config::EpicycleConfig;
use crate::foundation::error::EpicycleResult;
use crate::fourier::decompose::Decomposer;
use crate::fourier::set::ComponentSet;
use crate::path::extract::extract_path_data;
use crate::path::sampler::PathSampler;

/// Sample path data `d` and decompose it.
///
/// Pipeline:
/// 1. [`PathSampler::sample`]
/// 2. [`Decomposer::decompose`]
pub fn decompose_path(d: &str, config: &EpicycleConfig) -> EpicycleResult<ComponentSet> {
    let sampler = PathSampler::new(config.sampler.clone())?;
    let decomposer = Decomposer::new(config.decomposer.clone())?;
    let samples = sampler.sample(d)?;
    decomposer.decompose(&samples)
}

/// Extract the first path from an SVG document and decompose it.
#[tracing::instrument(skip(svg, config), fields(len = svg.len()))]
pub fn decompose_svg(svg: &str, config: &EpicycleConfig) -> EpicycleResult<ComponentSet> {
    let d = extract_path_data(svg)?;
    decompose_path(&d, config)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
