// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// - Num         : sortie directe
// - Op          : dépile tant que le sommet est un opérateur de précédence >= (associativité gauche)
// - '('         : empilée
// - ')'         : dépile jusqu’à '(' ; pile vide avant => parenthèses non appariées
// - fin         : vide la pile ; une '(' restante => parenthèses non appariées

use super::erreur::EvaluationError;
use super::jetons::Tok;

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(1), Op(+), Num(2), Op(*), Num(3)]
///   rpn:    [Num(1), Num(2), Num(3), Op(*), Op(+)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, EvaluationError> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Op(op) => {
                while let Some(Tok::Op(top)) = ops.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    out.push(Tok::Op(*top));
                    ops.pop();
                }
                ops.push(tok);
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => loop {
                match ops.pop() {
                    Some(Tok::LPar) => break,
                    Some(top) => out.push(top),
                    None => return Err(EvaluationError::MismatchedParentheses),
                }
            },
        }
    }

    while let Some(top) = ops.pop() {
        if matches!(top, Tok::LPar) {
            return Err(EvaluationError::MismatchedParentheses);
        }
        out.push(top);
    }

    Ok(out)
}
