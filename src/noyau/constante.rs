// src/noyau/constante.rs
//
// Constante C = 426880·√10005, en entier scalé (×10^prec).
//
// Invariant : C porte la précision de travail de la session, jamais celle
// d'un flottant machine. On l'évalue sous la forme √(426880²·10005) :
// une seule troncature, donc au plus 1 unité du dernier rang scalé.

use num_bigint::BigInt;
use num_traits::Zero;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use super::lecture::pow10;

/// Facteur entier de C.
const FACTEUR_C: u64 = 426_880;
/// Radicande de C.
const RADICANDE_C: u64 = 10_005;

/// tronc(√n·10^prec) par Newton entier, ajustement final au plancher.
pub fn racine_scaled(n: &BigInt, prec: usize) -> BigInt {
    let cible = n * pow10(2 * prec);
    if cible.is_zero() {
        return BigInt::zero();
    }

    let mut y = pow10(prec);

    loop {
        let q = &cible / &y;
        let y_next = (&y + q) >> 1;

        if y_next == y || y_next == (&y - 1u32) {
            // ajustement final (plancher)
            let mut y_adj = y_next;

            while (&y_adj + 1u32) * (&y_adj + 1u32) <= cible {
                y_adj += 1u32;
            }
            while &y_adj * &y_adj > cible {
                y_adj -= 1u32;
            }
            return y_adj;
        }

        y = y_next;
    }
}

fn constante_compute(prec: usize) -> BigInt {
    let radicande = BigInt::from(FACTEUR_C) * FACTEUR_C * RADICANDE_C;
    racine_scaled(&radicande, prec)
}

static CACHE_C: OnceLock<Mutex<HashMap<usize, BigInt>>> = OnceLock::new();

/// C à la précision demandée, avec cache par niveau de précision.
/// Le cache est un confort (sûr à recalculer), pas une exigence.
pub fn constante_scaled(prec: usize) -> BigInt {
    let m = CACHE_C.get_or_init(|| Mutex::new(HashMap::new()));
    let mut guard = m.lock().expect("mutex C");

    if let Some(v) = guard.get(&prec) {
        return v.clone();
    }

    let v = constante_compute(prec);
    guard.insert(prec, v.clone());
    v
}
