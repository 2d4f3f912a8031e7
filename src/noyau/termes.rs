// src/noyau/termes.rs
//
// Triplets (m, l, x) exacts du terme n :
//   m = (6n)! / ((3n)!·(n!)³)
//   l = 545140134·n + 13591409
//   x = (−262537412640768000)^n
//
// Tout en entier arbitraire. Jamais de factorielle ni de puissance
// flottante : elles perdent l'exactitude dès n modeste.

use num_bigint::BigInt;
use num_traits::{One, Pow};

/// Valeur initiale du coefficient linéaire (terme 0).
pub const L_INITIAL: u64 = 13_591_409;
/// Pas du coefficient linéaire.
pub const PAS_L: u64 = 545_140_134;
/// Base (négative) de la puissance x : −640320³.
pub const BASE_X: i64 = -262_537_412_640_768_000;

fn factorielle(k: u64) -> BigInt {
    let mut acc = BigInt::one();
    let mut i = 2u64;
    while i <= k {
        acc *= i;
        i += 1;
    }
    acc
}

/// Triplet (m, l, x) du terme n, par les formules directes.
/// Pur : aucune dépendance d'état; l'indice négatif est exclu par le type.
pub fn triplet(n: u64) -> (BigInt, BigInt, BigInt) {
    let m = factorielle(6 * n) / (factorielle(3 * n) * factorielle(n).pow(3u32));
    let l = BigInt::from(PAS_L) * n + L_INITIAL;
    let x = Pow::pow(BigInt::from(BASE_X), n);
    (m, l, x)
}

/// Fabrique incrémentale : produit les triplets dans l'ordre des indices.
///
/// Récurrence (division exacte à chaque pas) :
///   m(n) = m(n−1)·(k³ − 16k)/n³   avec k = 12n − 6
///   l(n) = l(n−1) + 545140134
///   x(n) = x(n−1)·(−262537412640768000)
#[derive(Debug, Clone)]
pub struct FabriqueTermes {
    n: u64,
    m: BigInt,
    l: BigInt,
    x: BigInt,
}

impl FabriqueTermes {
    pub fn new() -> Self {
        FabriqueTermes {
            n: 0,
            m: BigInt::one(),
            l: BigInt::from(L_INITIAL),
            x: BigInt::one(),
        }
    }
}

impl Default for FabriqueTermes {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FabriqueTermes {
    type Item = (BigInt, BigInt, BigInt);

    fn next(&mut self) -> Option<Self::Item> {
        let courant = (self.m.clone(), self.l.clone(), self.x.clone());

        self.n += 1;
        let k = BigInt::from(12 * self.n - 6);
        let num = Pow::pow(&k, 3u32) - BigInt::from(16u32) * &k;
        self.m = (&self.m * num) / BigInt::from(self.n).pow(3u32);
        self.l += PAS_L;
        self.x *= BASE_X;

        Some(courant)
    }
}
