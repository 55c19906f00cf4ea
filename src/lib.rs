//! Epicycles turns a 2D outline into an ordered set of rotating phasors whose sum
//! redraws the outline over time.
//!
//! # Pipeline overview
//!
//! 1. **Extract** (optional): `SVG text -> path data` via [`extract_path_data`]
//! 2. **Sample**: `path data -> Vec<ComplexSample>` via [`PathSampler`] (curves flattened,
//!    bounding box normalized, fitted to a fixed extent)
//! 3. **Decompose**: `samples -> ComponentSet` via [`Decomposer`] (normalized DFT over a
//!    symmetric index band, sorted by descending amplitude)
//! 4. **Evaluate**: a renderer calls [`ComponentSet::evaluate`] (or
//!    [`ComponentSet::arms`] for the epicycle chain) once per frame, and may feed the
//!    result into a [`TrailRecorder`]
//!
//! Everything is synchronous and deterministic: the same input and configuration yield
//! bit-identical component sets, including in parallel mode.
//!
//! ```
//! use epicycles::{EpicycleConfig, decompose_path};
//!
//! let set = decompose_path("M -1 0 L 1 0 L 0 1 Z", &EpicycleConfig::default())?;
//! let tip = set.evaluate(0.0);
//! assert!(tip.is_finite());
//! # Ok::<(), epicycles::EpicycleError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod fourier;
mod path;
mod pipeline;
mod trail;

pub use config::EpicycleConfig;
pub use foundation::core::{ComplexSample, Point, Vec2};
pub use foundation::error::{EpicycleError, EpicycleResult};
pub use fourier::component::HarmonicComponent;
pub use fourier::decompose::{Decomposer, DecomposerConfig, dft_coefficient};
pub use fourier::set::ComponentSet;
pub use path::command::{CommandLetter, PathCommand, parse_path};
pub use path::extract::extract_path_data;
pub use path::lexer::{Span, Token, TokenKind, lex_path};
pub use path::sampler::{PathSampler, SamplerConfig, normalize_unit};
pub use pipeline::{decompose_path, decompose_svg};
pub use trail::buffer::TrailBuffer;
pub use trail::recorder::{MAX_TRAIL_CAPACITY, TrailConfig, TrailRecorder};
