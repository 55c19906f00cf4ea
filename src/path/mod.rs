//! Path data to sample sequences: lexing, parsing, flattening, normalization.

pub(crate) mod command;
pub(crate) mod extract;
pub(crate) mod lexer;
pub(crate) mod sampler;
