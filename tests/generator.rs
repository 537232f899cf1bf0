use tintlcg::Generator;
use tintlcg::primitives::Word64;
use tintlcg::primitives::int32::to_int32;

use rstest::rstest;

fn draw<R: tintlcg::rng::Register>(rng: &mut Generator<R>, n: usize) -> Vec<i32> {
    (0..n).map(|_| rng.next32()).collect()
}

#[test]
fn seed_one_then_first_output_is_zero() {
    let mut rng = Generator::new(1);
    assert_eq!(rng.next32(), 0);
    assert_eq!(rng.state(), 1);
}

#[rstest]
#[case(1, &[0, 740882966, 1616430695, 1708849955, 1669437588])]
#[case(42, &[311430560, 131117839, 1110653038])]
#[case(0, &[2049033599, 2025915578])]
#[case(-5, &[492102414, 1943144229])]
#[case(i32::MIN, &[654075316, 2019367231])]
#[case(i32::MAX, &[2060675997, 1143819502])]
fn known_sequences(#[case] seed: i32, #[case] expected: &[i32]) {
    let mut native = Generator::new(seed);
    let mut limbs = Generator::<Word64>::with_register(seed);

    assert_eq!(draw(&mut native, expected.len()), expected);
    assert_eq!(draw(&mut limbs, expected.len()), expected);
}

#[test]
fn state_after_two_steps_from_seed_zero() {
    let mut rng = Generator::<Word64>::with_register(0);
    rng.next32();
    rng.next32();

    assert_eq!(rng.state().limbs(), [53573, 19205, 2420, 61826]);
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(-123_456)]
#[case(0x7fff_0000)]
fn limb_and_native_registers_agree(#[case] seed: i32) {
    let mut native = Generator::new(seed);
    let mut limbs = Generator::<Word64>::with_register(seed);

    for _ in 0..10_000 {
        assert_eq!(native.next32(), limbs.next32());
        assert_eq!(native.state(), u64::from(limbs.state()));
    }
}

#[rstest]
#[case(3, 16)]
#[case(99, 1000)]
#[case(-1, 64)]
fn reseeding_reproduces_sequence(#[case] seed: i32, #[case] n: usize) {
    let mut rng = Generator::new(seed);
    let first = draw(&mut rng, n);

    rng.seed(seed);
    let second = draw(&mut rng, n);

    assert_eq!(first, second);
}

#[test]
fn outputs_are_non_negative() {
    let mut rng = Generator::new(2024);

    assert!(draw(&mut rng, 10_000).iter().all(|&v| v >= 0));
}

#[test]
fn float_seeds_are_truncated() {
    let mut a = Generator::new(0);
    let mut b = Generator::new(3);

    a.seed_f64(3.7);
    assert_eq!(draw(&mut a, 4), draw(&mut b, 4));

    a.seed_f64(4_294_967_301.0);
    b.seed(5);
    assert_eq!(a.next32(), 816048218);
    assert_eq!(b.next32(), 816048218);

    assert_eq!(to_int32(-7.9), -7);
}

#[test]
fn nan_seed_behaves_like_zero() {
    let mut a = Generator::new(1);
    let mut b = Generator::new(0);

    a.seed_f64(f64::NAN);
    assert_eq!(draw(&mut a, 3), draw(&mut b, 3));
}

#[test]
fn sampling_shapes_known_values() {
    let mut rng = Generator::new(7);

    assert_eq!(rng.sample(), 0.07000309558119769);
    assert_eq!(rng.sample_upto(10), 8);
    assert_eq!(rng.sample_range(-5, 5), -5);
    assert_eq!(rng.sample_range(100, 200), 169);
}

#[test]
fn byte_range_from_seed_one() {
    let mut rng = Generator::new(1);
    let v: Vec<i32> = (0..3).map(|_| rng.sample_range(0, 255)).collect();

    assert_eq!(v, [0, 88, 192]);
}

#[rstest]
#[case(0, 0)]
#[case(1, 6)]
#[case(-10, 10)]
#[case(100, 101)]
#[case(i32::MIN, i32::MAX)]
#[case(-2_000_000_000, -1_999_999_000)]
fn sample_range_containment(#[case] lower: i32, #[case] upper: i32) {
    let mut rng = Generator::new(lower ^ upper);

    for _ in 0..10_000 {
        let v = rng.sample_range(lower, upper);
        assert!((lower..=upper).contains(&v), "{v} not in [{lower}, {upper}]");
    }
}

#[test]
fn sample_upto_containment() {
    let mut rng = Generator::new(11);

    for _ in 0..10_000 {
        let v = rng.sample_upto(128);
        assert!((1..=128).contains(&v));
    }
}

#[test]
fn independent_generators_do_not_interfere() {
    let mut a = Generator::new(5);
    let mut b = Generator::new(5);
    let mut other = Generator::new(6);

    let mut seq_a = Vec::new();
    for _ in 0..32 {
        seq_a.push(a.next32());
        other.next32();
    }

    assert_eq!(seq_a, draw(&mut b, 32));
}
