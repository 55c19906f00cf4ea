//! DFT decomposition into rotating phasors.

pub(crate) mod component;
pub(crate) mod decompose;
pub(crate) mod set;
