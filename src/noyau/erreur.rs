// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs classées du pipeline.
///
/// Chaque étape échoue dès la détection (pas de reprise, pas de valeur par défaut) :
/// - normalisation : EmptyExpression, MissingOperator
/// - jetons        : InvalidCharacter, InvalidNumber
/// - RPN           : MismatchedParentheses
/// - évaluation    : InsufficientOperands, TooManyOperands, EmptyResult,
///                   DivisionByZero, NonFiniteResult
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error("Entrée vide")]
    EmptyExpression,

    #[error("opérateur manquant entre deux opérandes")]
    MissingOperator,

    #[error("caractère inattendu: '{0}'")]
    InvalidCharacter(char),

    #[error("nombre invalide: \"{0}\"")]
    InvalidNumber(String),

    #[error("parenthèses non appariées")]
    MismatchedParentheses,

    #[error("opérandes insuffisants pour '{0}'")]
    InsufficientOperands(char),

    #[error("trop d’opérandes (opérateur manquant)")]
    TooManyOperands,

    #[error("expression sans résultat")]
    EmptyResult,

    #[error("division par zéro")]
    DivisionByZero,

    #[error("résultat non fini (dépassement)")]
    NonFiniteResult,
}
