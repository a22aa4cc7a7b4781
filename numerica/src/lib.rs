#![deny(warnings)]

mod horner;
pub use horner::{horner, HornerStep, HornerTrace};

mod secant;
pub use secant::{
    secant, secant_step, Iteration, SecantConfig, SecantError, SecantReport, StopCriterion,
    TOLERANCE_ITERATION_LIMIT,
};

pub mod subscript;
pub mod table;
