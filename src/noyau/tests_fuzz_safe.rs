//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : entrée bien formée => solve() rend une valeur (finie ou non),
//!   jamais une erreur ; entrée quelconque => jamais de panique.

use std::time::{Duration, Instant};

use super::{convert_to_postfix, evaluate, solve};

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
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Nombre positif en texte : entier ou décimal à un seul point.
fn gen_nombre(rng: &mut Rng) -> String {
    let entier = rng.pick(100);
    if rng.coin() {
        format!("{entier}.{}", rng.pick(1000))
    } else {
        format!("{entier}")
    }
}

/// Expression bien formée (grammaire complète), sans valeur de référence.
fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    let a = gen_expr(rng, depth - 1);
    match rng.pick(10) {
        0 => gen_nombre(rng),
        1 => format!("{a}+{}", gen_expr(rng, depth - 1)),
        2 => format!("{a}-{}", gen_expr(rng, depth - 1)),
        3 => format!("{a}*{}", gen_expr(rng, depth - 1)),
        4 => format!("{a}/{}", gen_expr(rng, depth - 1)),
        5 => format!("({a})^{}", gen_nombre(rng)),
        6 => format!("(-{})", gen_nombre(rng)),
        7 => format!("sin({a})"),
        8 => format!("sqrt({a})"),
        _ => {
            if rng.coin() {
                format!("cos({a})")
            } else {
                format!("tan({a})")
            }
        }
    }
}

/// Arithmétique entièrement parenthésée + valeur de référence calculée
/// pendant la génération (même ordre d’opérations => mêmes bits).
fn gen_arith(rng: &mut Rng, depth: usize) -> (String, f64) {
    if depth == 0 || rng.pick(4) == 0 {
        let s = gen_nombre(rng);
        let v = s.parse::<f64>().unwrap_or_else(|e| panic!("{s:?}: {e}"));
        return (s, v);
    }

    let (sa, va) = gen_arith(rng, depth - 1);
    let (sb, vb) = gen_arith(rng, depth - 1);
    match rng.pick(4) {
        0 => (format!("({sa}+{sb})"), va + vb),
        1 => (format!("({sa}-{sb})"), va - vb),
        2 => (format!("({sa}*{sb})"), va * vb),
        _ => (format!("({sa}/{sb})"), va / vb),
    }
}

/// Chaîne quelconque sur l’alphabet de la grammaire (+ quelques intrus).
fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[&str] = &[
        "0", "1", "7", ".", "+", "-", "*", "/", "^", "(", ")", "sin", "cos(", "sqrt(", "tan",
        "x", " ", "#",
    ];
    let mut s = String::new();
    for _ in 0..len {
        s.push_str(ALPHABET[rng.pick(ALPHABET.len() as u32) as usize]);
    }
    s
}

fn memes_bits(a: f64, b: f64) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_bien_forme_toujours_evalue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_fini = 0usize;
    let mut seen_non_fini = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let v = solve(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));

        if v.is_finite() {
            seen_fini += 1;
        } else {
            seen_non_fini += 1;
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_fini > 10, "trop peu de valeurs finies: {seen_fini}");
    assert!(seen_non_fini > 0, "aucun NaN/inf vu: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_arithmetique_egale_reference() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..200 {
        budget(t0, max);

        let (expr, attendu) = gen_arith(&mut rng, 5);
        let v = solve(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        assert!(
            memes_bits(v, attendu),
            "expr={expr:?} attendu={attendu} obtenu={v}"
        );
    }
}

#[test]
fn fuzz_safe_bruit_sans_panique_et_deterministe() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0x5EED_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let len = 1 + rng.pick(12) as usize;
        let s = gen_bruit(&mut rng, len);

        let a = convert_to_postfix(&s);
        assert_eq!(a, convert_to_postfix(&s), "non déterministe: {s:?}");

        match a {
            Ok(rpn) => {
                // l’évaluation peut échouer (pile), mais jamais paniquer
                let _ = evaluate(&rpn);
                seen_ok += 1;
            }
            Err(_) => seen_err += 1,
        }
    }

    assert!(seen_ok > 0, "aucune conversion réussie");
    assert!(seen_err > 0, "aucune erreur vue");
}

#[test]
fn fuzz_safe_somme_longue_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 800 termes "0.5" enchaînés : pile d’opérandes bornée à 2
    let expr = vec!["0.5"; 800].join("+");
    budget(t0, max);

    let v = solve(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(v, 400.0);

    // imbrication profonde : pile d’opérateurs seulement (pas de récursion)
    let profond = format!("{}1{}", "(".repeat(2000), ")".repeat(2000));
    assert_eq!(solve(&profond).unwrap_or_else(|e| panic!("err: {e}")), 1.0);
}
