// src/noyau/normalise.rs
//
// Normalisation de l’entrée brute, avant les jetons.
// - vide / blancs seuls            => EmptyExpression
// - "1 2", "(1) 2", "3 (4)"        => MissingOperator
// - retire tous les blancs
// - moins unaire => marqueur '~'   ("-1+-(2)" => "~1+~(2)", "--10" => "~~10")
// - '~' dans l’entrée brute        => InvalidCharacter

use super::erreur::EvaluationError;

/// Marqueur du moins unaire (consommé par `tokenize`).
pub const MARQUEUR_NEG: char = '~';

fn est_chiffre(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Position unaire : début d’expression, ou juste après '(' / un opérateur / un marqueur.
fn position_unaire(prec: Option<char>) -> bool {
    match prec {
        None => true,
        Some(c) => matches!(c, '(' | '+' | '-' | '*' | '/' | '%' | MARQUEUR_NEG),
    }
}

/// Normalise une expression brute.
pub fn normalize(s: &str) -> Result<String, EvaluationError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(EvaluationError::EmptyExpression);
    }

    // le marqueur est réservé à la sortie de la normalisation
    if s.contains(MARQUEUR_NEG) {
        return Err(EvaluationError::InvalidCharacter(MARQUEUR_NEG));
    }

    verifie_operateurs(s)?;

    let compact: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    Ok(marque_moins_unaires(&compact))
}

/// Refuse "opérande, blancs, opérande" : nombre ou ')' suivi de blancs puis chiffre ou '('.
fn verifie_operateurs(s: &str) -> Result<(), EvaluationError> {
    let chars: Vec<char> = s.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        if !chars[i].is_whitespace() {
            i += 1;
            continue;
        }

        let debut = i;
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }

        // `s` est trimée : un bloc de blancs a toujours un voisin de chaque côté
        let avant = debut.checked_sub(1).map(|k| chars[k]);
        let apres = chars.get(i).copied();

        if let (Some(a), Some(b)) = (avant, apres) {
            let gauche_operande = est_chiffre(a) || a == ')';
            let droite_operande = est_chiffre(b) || b == '(';
            if gauche_operande && droite_operande {
                return Err(EvaluationError::MissingOperator);
            }
        }
    }

    Ok(())
}

/// Réécrit chaque '-' unaire suivi d’un littéral, d’un '(' ou d’une suite de '-' unaires
/// menant à l’un des deux.
fn marque_moins_unaires(chars: &[char]) -> String {
    let mut out = String::with_capacity(chars.len());
    let mut prec: Option<char> = None;

    for (i, &c) in chars.iter().enumerate() {
        let marque = c == '-' && position_unaire(prec) && suivi_d_operande(&chars[i + 1..]);
        let c = if marque { MARQUEUR_NEG } else { c };
        out.push(c);
        prec = Some(c);
    }

    out
}

/// Saute une suite de '-' (tous en position unaire) puis exige un littéral ou '('.
fn suivi_d_operande(reste: &[char]) -> bool {
    reste
        .iter()
        .find(|&&c| c != '-')
        .is_some_and(|&c| est_chiffre(c) || c == '(')
}
