// src/noyau/jetons.rs

use super::erreur::EvaluationError;
use super::normalise::MARQUEUR_NEG;

/// Opérateurs binaires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
}

impl Op {
    /// Précédence fixe (+ - : 1 ; * / % : 2). Tous associatifs à gauche.
    pub const fn precedence(self) -> u8 {
        match self {
            Op::Plus | Op::Minus => 1,
            Op::Star | Op::Slash | Op::Percent => 2,
        }
    }

    pub const fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
            Op::Percent => '%',
        }
    }

    fn depuis(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Minus),
            '*' => Some(Op::Star),
            '/' => Some(Op::Slash),
            '%' => Some(Op::Percent),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Op),
    LPar,
    RPar,
}

/// Tokenize une chaîne normalisée (sans blancs, moins unaires marqués '~').
///
/// Un marqueur ouvre un groupe "( 0 -" refermé dès que son opérande est complet :
/// - "~5"     => ( 0 - 5 )
/// - "~(1+2)" => ( 0 - ( 1 + 2 ) )
/// - "~~5"    => ( 0 - ( 0 - 5 ) )
pub fn tokenize(s: &str) -> Result<Vec<Tok>, EvaluationError> {
    let mut out = Vec::new();
    let mut nombre = String::new();

    // profondeur de parenthèses courante + profondeurs où un groupe négatif attend son opérande
    let mut profondeur: usize = 0;
    let mut negations: Vec<usize> = Vec::new();

    for c in s.chars() {
        if c.is_ascii_digit() || c == '.' {
            nombre.push(c);
            continue;
        }

        if !nombre.is_empty() {
            pousse_nombre(&mut out, &mut nombre)?;
            ferme_negations(&mut out, &mut negations, profondeur);
        }

        match c {
            MARQUEUR_NEG => {
                out.push(Tok::LPar);
                out.push(Tok::Num(0.0));
                out.push(Tok::Op(Op::Minus));
                negations.push(profondeur);
            }
            '(' => {
                out.push(Tok::LPar);
                profondeur += 1;
            }
            ')' => {
                out.push(Tok::RPar);
                // une ')' en trop est laissée au RPN (parenthèses non appariées)
                if profondeur > 0 {
                    profondeur -= 1;
                    ferme_negations(&mut out, &mut negations, profondeur);
                }
            }
            _ => match Op::depuis(c) {
                Some(op) => out.push(Tok::Op(op)),
                None => return Err(EvaluationError::InvalidCharacter(c)),
            },
        }
    }

    if !nombre.is_empty() {
        pousse_nombre(&mut out, &mut nombre)?;
        ferme_negations(&mut out, &mut negations, profondeur);
    }

    Ok(out)
}

/// Littéral -> f64.
/// - non décimal ("1.2.3", ".")          => InvalidNumber
/// - trop grand (inf)                     => NonFiniteResult
/// - non nul arrondi à 0 ("0.000…0001")   => InvalidNumber
fn pousse_nombre(out: &mut Vec<Tok>, nombre: &mut String) -> Result<(), EvaluationError> {
    let v: f64 = nombre
        .parse()
        .map_err(|_| EvaluationError::InvalidNumber(nombre.clone()))?;
    if !v.is_finite() {
        return Err(EvaluationError::NonFiniteResult);
    }
    if v == 0.0 && nombre.chars().any(|c| matches!(c, '1'..='9')) {
        return Err(EvaluationError::InvalidNumber(nombre.clone()));
    }
    out.push(Tok::Num(v));
    nombre.clear();
    Ok(())
}

/// Referme les groupes négatifs ouverts à cette profondeur (les marqueurs en chaîne s’emboîtent).
fn ferme_negations(out: &mut Vec<Tok>, negations: &mut Vec<usize>, profondeur: usize) {
    while negations.last() == Some(&profondeur) {
        negations.pop();
        out.push(Tok::RPar);
    }
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
