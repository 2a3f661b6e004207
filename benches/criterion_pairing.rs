use ate_pairing::elliptic_curve::short_weierstrass::curves::bls12_381::curve::BLS12381Curve;
use ate_pairing::elliptic_curve::short_weierstrass::curves::bls12_381::pairing::BLS12381AtePairing;
use ate_pairing::elliptic_curve::short_weierstrass::curves::bls12_381::twist::BLS12381TwistCurve;
use ate_pairing::elliptic_curve::short_weierstrass::curves::mnt4_753::curve::MNT4753Curve;
use ate_pairing::elliptic_curve::short_weierstrass::curves::mnt4_753::pairing::MNT4753AtePairing;
use ate_pairing::elliptic_curve::short_weierstrass::curves::mnt4_753::twist::MNT4753TwistCurve;
use ate_pairing::elliptic_curve::traits::{IsEllipticCurve, IsPairing};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bls12_381_pairing_benchmark(c: &mut Criterion) {
    let p = BLS12381Curve::generator();
    let q = BLS12381TwistCurve::generator();
    c.bench_function("bls12_381 ate pairing", |b| {
        b.iter(|| BLS12381AtePairing::compute_batch(&[(black_box(&p), black_box(&q))]))
    });
}

fn mnt4_753_pairing_benchmark(c: &mut Criterion) {
    let p = MNT4753Curve::generator();
    let q = MNT4753TwistCurve::generator();
    c.bench_function("mnt4_753 ate pairing", |b| {
        b.iter(|| MNT4753AtePairing::compute_batch(&[(black_box(&p), black_box(&q))]))
    });
}

criterion_group!(benches, bls12_381_pairing_benchmark, mnt4_753_pairing_benchmark);
criterion_main!(benches);
