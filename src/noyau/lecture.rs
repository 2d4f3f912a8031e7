// src/noyau/lecture.rs
//
// Entiers « scalés » : une valeur réelle v est portée par l'entier
// tronc(v·10^p). Toute la lecture décimale passe par ici — jamais de
// flottant machine.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;

pub fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier scalé (×10^decimales) en texte décimal tronqué.
pub fn scaled_to_decimal(mut scaled: BigInt, decimales: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(decimales);
    let partie_entiere = &scaled / &scale;
    let partie_frac = &scaled % &scale;

    if decimales == 0 {
        return if neg {
            format!("-{partie_entiere}")
        } else {
            format!("{partie_entiere}")
        };
    }

    let mut frac = partie_frac.to_str_radix(10);
    while frac.len() < decimales {
        frac.insert(0, '0');
    }

    if neg {
        format!("-{partie_entiere}.{frac}")
    } else {
        format!("{partie_entiere}.{frac}")
    }
}

/// r -> entier scalé = tronc(r·10^decimales), troncature vers zéro.
pub fn rationnel_scaled(r: &BigRational, decimales: usize) -> BigInt {
    (r.numer() * pow10(decimales)) / r.denom()
}
