//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler l'évaluateur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - chiffres demandés bornés
//! - budget temps global
//! - invariant clé : la sortie est toujours le préfixe exact de la
//!   référence canonique, ou une erreur ArgumentInvalide pour 0 chiffre

use std::time::{Duration, Instant};

use super::erreurs::ErreurPi;
use super::serie::evaluer_pi;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Référence canonique ------------------------ */

const REF_PI: &str = "314159265358979323846264338327950288419716939937510582097494";

fn pi_attendu(chiffres: usize) -> String {
    if chiffres == 1 {
        "3".to_string()
    } else {
        format!("3.{}", &REF_PI[1..chiffres])
    }
}

/* ------------------------ Campagne ------------------------ */

#[test]
fn fuzz_chiffres_valides() {
    let t0 = Instant::now();
    let max = Duration::from_millis(3_000);

    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..300 {
        let chiffres = 1 + rng.pick(REF_PI.len() as u32 - 1) as usize;
        let pi = evaluer_pi(chiffres).unwrap_or_else(|e| {
            panic!("chiffres={chiffres} erreur inattendue: {e}")
        });

        assert_eq!(pi, pi_attendu(chiffres), "chiffres={chiffres}");
        budget(t0, max);
    }
}

#[test]
fn fuzz_zero_toujours_rejete() {
    // pas de résultat malformé : 0 chiffre échoue, et l'échec est stable
    for _ in 0..8 {
        match evaluer_pi(0) {
            Err(ErreurPi::ArgumentInvalide(_)) => {}
            autre => panic!("attendu ArgumentInvalide, reçu {autre:?}"),
        }
    }
}

#[test]
fn fuzz_determinisme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2_000);

    let mut rng = Rng::new(42);

    for _ in 0..40 {
        let chiffres = 1 + rng.pick(48) as usize;
        let a = evaluer_pi(chiffres).unwrap();
        let b = evaluer_pi(chiffres).unwrap();
        assert_eq!(a, b, "dérive d'état caché à chiffres={chiffres}");
        budget(t0, max);
    }
}
