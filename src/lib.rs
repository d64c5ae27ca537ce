//! Calculatrice RPN — noyau d’évaluation
//!
//! Point d’entrée unique pour les appelants : [`evaluate`], une chaîne en entrée,
//! un `f64` fini ou une [`EvaluationError`] classée en sortie.
//!
//! ```
//! use calculatrice_rpn::{evaluate, EvaluationError};
//!
//! assert_eq!(evaluate("(1 + 2) * -3"), Ok(-9.0));
//! assert_eq!(evaluate("10 / 0"), Err(EvaluationError::DivisionByZero));
//! ```

pub mod noyau;

pub use noyau::{evaluate, EvaluationError};
