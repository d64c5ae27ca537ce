//! Noyau — évaluation (pipeline réel)
//!
//! normalise -> jetons -> RPN (shunting-yard) -> pile de valeurs -> f64
//!
//! Chaque appel est indépendant : aucun état partagé, tout vit sur la pile d’appel.

use num_traits::Zero;

use super::erreur::EvaluationError;
use super::jetons::{format_tokens, tokenize, Op, Tok};
use super::normalise::normalize;
use super::rpn::to_rpn;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct DemarcheNoyau {
    pub normalise: String,
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression et retourne sa valeur.
pub fn evaluate(expr_str: &str) -> Result<f64, EvaluationError> {
    eval_expression(expr_str).map(|(v, _d)| v)
}

/// Évalue une expression et retourne la valeur + la démarche (normalisé, jetons, RPN).
pub fn eval_expression(expr_str: &str) -> Result<(f64, DemarcheNoyau), EvaluationError> {
    let res = pipeline(expr_str);
    if let Err(e) = &res {
        tracing::debug!(entree = expr_str, erreur = %e, "évaluation refusée");
    }
    res
}

fn pipeline(expr_str: &str) -> Result<(f64, DemarcheNoyau), EvaluationError> {
    // 1) Normalisation
    let normalise = normalize(expr_str)?;

    // 2) Jetons
    let jetons = tokenize(&normalise)?;
    let jetons_txt = format_tokens(&jetons);

    // 3) RPN
    let rpn = to_rpn(&jetons)?;
    let rpn_txt = format_tokens(&rpn);
    tracing::debug!(normalise = %normalise, jetons = %jetons_txt, rpn = %rpn_txt, "pipeline");

    // 4) Pile de valeurs
    let v = eval_rpn(&rpn)?;
    tracing::debug!(resultat = v, "évaluation");

    let d = DemarcheNoyau {
        normalise,
        jetons: jetons_txt,
        rpn: rpn_txt,
    };
    Ok((v, d))
}

/// Évalue une suite RPN avec une pile de valeurs.
///
/// - nombre    : doit être fini
/// - opérateur : dépile b (droite) puis a (gauche), empile `a op b` (fini)
/// - fin       : exactement une valeur doit rester
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, EvaluationError> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(v) if !v.is_finite() => return Err(EvaluationError::NonFiniteResult),
            Tok::Num(v) => st.push(*v),

            Tok::Op(op) => {
                let (b, a) = match (st.pop(), st.pop()) {
                    (Some(b), Some(a)) => (b, a),
                    _ => return Err(EvaluationError::InsufficientOperands(op.symbole())),
                };
                let v = applique(*op, a, b)?;
                // inf intermédiaire refusé : 1/inf redeviendrait fini
                if !v.is_finite() {
                    return Err(EvaluationError::NonFiniteResult);
                }
                st.push(v);
            }

            Tok::LPar | Tok::RPar => return Err(EvaluationError::MismatchedParentheses),
        }
    }

    match st.len() {
        0 => Err(EvaluationError::EmptyResult),
        1 => Ok(st[0]),
        _ => Err(EvaluationError::TooManyOperands),
    }
}

fn applique(op: Op, a: f64, b: f64) -> Result<f64, EvaluationError> {
    match op {
        Op::Plus => Ok(a + b),
        Op::Minus => Ok(a - b),
        Op::Star => Ok(a * b),
        Op::Slash | Op::Percent if b.is_zero() => Err(EvaluationError::DivisionByZero),
        Op::Slash => Ok(a / b),
        // reste flottant, signe de `a`
        Op::Percent => Ok(a % b),
    }
}
