//! Noyau de la calculatrice RPN
//!
//! Organisation interne :
//! - erreur.rs    : erreurs classées (une par étape qui échoue)
//! - normalise.rs : blancs, opérateur manquant, moins unaire -> '~'
//! - jetons.rs    : tokenisation (Tok / Op) + précédences
//! - rpn.rs       : shunting-yard
//! - eval.rs      : pile de valeurs + pipeline complet
//! - format.rs    : affichage du résultat

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod normalise;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::EvaluationError;
pub use eval::{eval_expression, evaluate};
