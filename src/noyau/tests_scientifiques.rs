//! Tests scientifiques (campagne) : comportement observable de `evaluate`.
//!
//! Tables (entrée, attendu) regroupées par famille :
//! littéraux, chaînes d’un même niveau, précédence, parenthèses, moins unaire,
//! puis chaque famille d’erreur.

use super::{evaluate, EvaluationError};

fn assert_valeurs(cas: &[(&str, f64)]) {
    for &(expr, attendu) in cas {
        match evaluate(expr) {
            Ok(v) => assert_eq!(v, attendu, "expr={expr:?}"),
            Err(e) => panic!("expr={expr:?} err={e}"),
        }
    }
}

fn assert_erreurs(cas: &[(&str, EvaluationError)]) {
    for (expr, attendu) in cas {
        assert_eq!(evaluate(expr).as_ref(), Err(attendu), "expr={expr:?}");
    }
}

/* ------------------------ Littéraux ------------------------ */

#[test]
fn sci_entiers_positifs() {
    assert_valeurs(&[("6", 6.0), ("0", 0.0), ("548511", 548511.0)]);
}

#[test]
fn sci_decimaux() {
    assert_valeurs(&[("8.9", 8.9), ("1.0", 1.0), ("3.14", 3.14), (" 0.5 ", 0.5)]);
}

#[test]
fn sci_entiers_negatifs() {
    assert_valeurs(&[("-15", -15.0), ("-1", -1.0), ("-0", 0.0)]);
}

/* ------------------------ Chaînes d’un même niveau ------------------------ */

#[test]
fn sci_additions() {
    assert_valeurs(&[
        ("1 + 1", 2.0),
        ("12 + 12", 24.0),
        ("13+12", 25.0),
        ("2+ 3", 5.0),
        ("8 +3", 11.0),
        ("1 + 1 + 1", 3.0),
        ("13+12+11", 36.0),
        ("8 +3+3", 14.0),
    ]);
}

#[test]
fn sci_soustractions_gauche_a_droite() {
    assert_valeurs(&[
        ("1 - 1", 0.0),
        ("8-5", 3.0),
        ("13-14", -1.0),
        ("20-10-5", 5.0),
        ("5 - 0 - 4 - 0 - 3", -2.0),
    ]);
}

#[test]
fn sci_multiplications() {
    assert_valeurs(&[
        ("0 * 0", 0.0),
        ("1 * 0", 0.0),
        ("2 * 2", 4.0),
        ("1*2*3*4", 24.0),
        ("9 * 0.5", 4.5),
    ]);
}

#[test]
fn sci_divisions_gauche_a_droite() {
    assert_valeurs(&[
        ("10 / 2", 5.0),
        ("6 / 3", 2.0),
        ("4 / 2 + 3", 5.0),
        ("6 / 2 * 3", 9.0),
        ("6/2*3", 9.0),
        ("100/10/5", 2.0),
    ]);
}

#[test]
fn sci_modulo_meme_niveau_que_mul() {
    assert_valeurs(&[("10 % 4", 2.0), ("10 % 4 * 3", 6.0), ("2 * 10 % 6", 2.0), ("1 + 9 % 5", 5.0)]);
}

/* ------------------------ Précédence / parenthèses ------------------------ */

#[test]
fn sci_precedence() {
    assert_valeurs(&[
        ("0 * 0 + 1", 1.0),
        ("1 + 2 * 2 + 1", 6.0),
        ("1+2*2+1", 6.0),
        ("5 - 5 * 0 - 4", 1.0),
        ("10 - 2 * 10", -10.0),
    ]);
}

#[test]
fn sci_parentheses() {
    assert_valeurs(&[
        ("0 * (0 + 1)", 0.0),
        ("(1 + 2) * 2 + 1", 7.0),
        ("(1 + 2) * (2 + 1)", 9.0),
        ("(1+2)*(2+1)", 9.0),
        ("(5 - 5) * 0 - 4", -4.0),
        ("(10 - 2) * 10", 80.0),
        ("((2))", 2.0),
        ("20-(10-5)", 15.0),
    ]);
}

#[test]
fn sci_decimaux_en_operation() {
    assert_valeurs(&[("3.12 + 1.00", 4.12), ("0.25 * 4", 1.0)]);
}

/* ------------------------ Moins unaire ------------------------ */

#[test]
fn sci_moins_unaire() {
    assert_valeurs(&[
        ("-15-15", -30.0),
        ("-1 + -10", -11.0),
        ("-1+-10", -11.0),
        ("-1 + (-10)", -11.0),
        ("-1+(-10)", -11.0),
        ("(-1 + -10)", -11.0),
        ("2 * -3", -6.0),
        ("-2 * 3", -6.0),
        ("6 / -2", -3.0),
    ]);
}

#[test]
fn sci_moins_unaire_devant_groupe() {
    assert_valeurs(&[
        ("-(1+2)", -3.0),
        ("-(1+2)*3", -9.0),
        ("2*-(3-1)", -4.0),
        ("-(-(4))", 4.0),
    ]);
}

#[test]
fn sci_moins_unaires_en_chaine() {
    assert_valeurs(&[("- -10", 10.0), ("--10", 10.0), ("---10", -10.0), ("1 - -1", 2.0), ("1--1", 2.0)]);
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_division_par_zero() {
    assert_erreurs(&[
        ("10 / 0", EvaluationError::DivisionByZero),
        ("10/0", EvaluationError::DivisionByZero),
        ("1 / (2 - 2)", EvaluationError::DivisionByZero),
        ("4 % 0", EvaluationError::DivisionByZero),
    ]);
}

#[test]
fn sci_expressions_invalides() {
    assert_erreurs(&[
        ("1 + * 2", EvaluationError::InsufficientOperands('+')),
        ("+", EvaluationError::InsufficientOperands('+')),
        ("1 1 + 2", EvaluationError::MissingOperator),
        ("(1 + 2", EvaluationError::MismatchedParentheses),
        ("1 + )2(", EvaluationError::MismatchedParentheses),
        ("1 + 2)", EvaluationError::MismatchedParentheses),
    ]);
}

#[test]
fn sci_entrees_vides() {
    assert_erreurs(&[
        ("", EvaluationError::EmptyExpression),
        ("   ", EvaluationError::EmptyExpression),
        ("()", EvaluationError::EmptyResult),
    ]);
}

#[test]
fn sci_caracteres_et_nombres_invalides() {
    assert_erreurs(&[
        ("2a", EvaluationError::InvalidCharacter('a')),
        ("2 ^ 3", EvaluationError::InvalidCharacter('^')),
        ("1,5", EvaluationError::InvalidCharacter(',')),
        ("1.2.3", EvaluationError::InvalidNumber("1.2.3".into())),
        ("1 + .", EvaluationError::InvalidNumber(".".into())),
    ]);
}

#[test]
fn sci_toute_entree_invalide_echoue() {
    for expr in ["1+*2", "+", "1 1+2", "(1+2", "1+)2(", "*", "1+", "(", ")", "2(3)"] {
        assert!(evaluate(expr).is_err(), "expr={expr:?} aurait dû échouer");
    }
}
