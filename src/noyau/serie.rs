// src/noyau/serie.rs
//
// Sommation Chudnovsky en entier scalé (×10^prec) :
//
//   π ≈ C / Σ m(n)·l(n)/x(n),   C = 426880·√10005
//
// Politique de précision :
// - chaque terme apporte ≈ 14 décimales correctes, donc
//   nb termes = ceil(chiffres/14) + 1 ;
// - précision de travail = chiffres + garde + log10(nb termes) décimales,
//   la garde absorbe les troncatures accumulées (≤ 1 unité du dernier
//   rang par terme, plus C et la division finale).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;

use super::constante::constante_scaled;
use super::erreurs::ErreurPi;
use super::lecture::{pow10, rationnel_scaled, scaled_to_decimal};
use super::termes::FabriqueTermes;

/// Décimales de garde fixes, en plus du terme en log10(nb termes).
const GARDE: usize = 10;
/// Décimales correctes apportées par chaque terme de la série.
const GAIN_PAR_TERME: usize = 14;

/// Combine un triplet (m, l, x) en valeur de terme scalée (×10^prec).
/// Le quotient exact m·l/x est formé en rationnel, puis tronqué vers zéro.
pub fn combiner(m: &BigInt, l: &BigInt, x: &BigInt, prec: usize) -> Result<BigInt, ErreurPi> {
    if x.is_zero() {
        return Err(ErreurPi::DivisionParZero);
    }
    let terme = BigRational::new(m * l, x.clone());
    Ok(rationnel_scaled(&terme, prec))
}

fn nb_termes(chiffres: usize) -> usize {
    (chiffres + GAIN_PAR_TERME - 1) / GAIN_PAR_TERME + 1
}

fn chiffres_decimaux(mut n: usize) -> usize {
    let mut c = 1;
    while n >= 10 {
        n /= 10;
        c += 1;
    }
    c
}

/// Évalue π à `chiffres` chiffres significatifs (troncature).
///
/// Pur et réentrant : deux appels avec le même argument rendent le même
/// texte. Les chiffres rendus sont un préfixe de ceux d'un appel plus
/// précis.
pub fn evaluer_pi(chiffres: usize) -> Result<String, ErreurPi> {
    if chiffres == 0 {
        return Err(ErreurPi::ArgumentInvalide(
            "le nombre de chiffres doit être ≥ 1".into(),
        ));
    }

    let n_termes = nb_termes(chiffres);
    let prec = chiffres + GARDE + chiffres_decimaux(n_termes);

    // C à la précision de travail (cache par niveau de précision).
    let c = constante_scaled(prec);

    // Sommation stricte dans l'ordre des indices.
    let mut somme = BigInt::zero();
    for (m, l, x) in FabriqueTermes::new().take(n_termes) {
        somme += combiner(&m, &l, &x, prec)?;
    }
    if somme.is_zero() {
        // inatteignable : le terme 0 vaut 13591409·10^prec
        return Err(ErreurPi::DivisionParZero);
    }

    // π scalé = (C·10^prec)/somme, puis troncature à la sortie demandée :
    // 1 chiffre entier + (chiffres − 1) décimales.
    let pi_scaled = (c * pow10(prec)) / somme;
    let decimales = chiffres - 1;
    let sortie = pi_scaled / pow10(prec - decimales);
    Ok(scaled_to_decimal(sortie, decimales))
}
