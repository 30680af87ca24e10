use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use unboxed_number::{Backend, DivisionError, Int, LimbBackend};

mod strategy {
    use proptest::prelude::*;
    use proptest::strategy::BoxedStrategy;

    use unboxed_number::{Int, LimbBackend};

    const MIN_SMALL: i64 = Int::<LimbBackend>::MIN_SMALL;
    const MAX_SMALL: i64 = Int::<LimbBackend>::MAX_SMALL;

    pub fn small() -> BoxedStrategy<i64> {
        (MIN_SMALL..=MAX_SMALL).boxed()
    }

    /// Values around the edge of the small range, where promotion happens
    pub fn edge() -> BoxedStrategy<i64> {
        prop_oneof![
            (MAX_SMALL - 16)..=MAX_SMALL,
            MIN_SMALL..=(MIN_SMALL + 16),
            -16i64..=16,
        ]
        .boxed()
    }

    pub fn wide() -> BoxedStrategy<i128> {
        prop_oneof![
            small().prop_map(i128::from),
            any::<i64>().prop_map(i128::from),
            any::<i128>(),
        ]
        .boxed()
    }

    /// Hexadecimal literals of 1 to 24 limbs, many of them all zeros or all ones, which is where
    /// long division needs its corrections
    pub fn limbs() -> BoxedStrategy<String> {
        let limb = prop_oneof![
            4 => any::<u32>(),
            1 => Just(0u32),
            1 => Just(u32::MAX),
            1 => Just(1u32 << 31),
        ];
        (any::<bool>(), prop::collection::vec(limb, 1..=24))
            .prop_map(|(negative, limbs)| {
                let mut hex = String::with_capacity(limbs.len() * 8 + 1);
                if negative {
                    hex.push('-');
                }
                for limb in limbs.iter().rev() {
                    hex.push_str(&format!("{:08x}", limb));
                }
                hex
            })
            .boxed()
    }
}

fn init_logger() {
    let _ = env_logger::Builder::from_env("UNBOXED_LOG")
        .is_test(true)
        .try_init();
}

fn floor_divmod(x: i128, y: i128) -> (i128, i128) {
    let (q, r) = (x / y, x % y);
    if r != 0 && (r < 0) != (y < 0) {
        (q - 1, r + y)
    } else {
        (q, r)
    }
}

fn parse<B: Backend>(hex: &str) -> Int<B> {
    Int::from_hex(hex).unwrap()
}

fn division_laws<B: Backend>(x: Int<B>, y: Int<B>) -> Result<(), TestCaseError> {
    if y.is_zero() {
        prop_assert_eq!(x.div_floor(&y), Err(DivisionError));
        prop_assert_eq!(x.mod_floor(&y), Err(DivisionError));
        prop_assert_eq!(&x / &y, Err(DivisionError));
        prop_assert_eq!(&x % &y, Err(DivisionError));
        return Ok(());
    }

    let q = x.div_floor(&y).unwrap();
    let m = x.mod_floor(&y).unwrap();
    prop_assert_eq!(&(&q * &y) + &m, x.clone());
    prop_assert!(m.abs() < y.abs());
    prop_assert!(m.is_zero() || m.is_negative() == y.is_negative());

    let q = (&x / &y).unwrap();
    let r = (&x % &y).unwrap();
    prop_assert_eq!(&(&q * &y) + &r, x.clone());
    prop_assert!(r.abs() < y.abs());
    prop_assert!(r.is_zero() || r.is_negative() == x.is_negative());
    Ok(())
}

fn bitwise_laws<B: Backend>(x: Int<B>, y: Int<B>, k: u32) -> Result<(), TestCaseError> {
    prop_assert!((&x & &!&x).is_zero());
    prop_assert_eq!(&x | &!&x, -1i64);
    prop_assert_eq!(&x ^ &y, &(&x | &y) - &(&x & &y));

    let power = Int::<B>::new(1) << k;
    prop_assert_eq!(&x << k, &x * &power);
    prop_assert_eq!(&x >> k, x.div_floor(&power).unwrap());
    Ok(())
}

#[cfg(feature = "native")]
/// Renders every operation on `x` and `y`, so results of different backends can be compared
fn results<B: Backend>(x: Int<B>, y: Int<B>, k: u32) -> Vec<String> {
    let render = |result: Result<Int<B>, DivisionError>| match result {
        Ok(n) => n.to_string(),
        Err(err) => err.to_string(),
    };
    vec![
        (&x + &y).to_string(),
        (&x - &y).to_string(),
        (&x * &y).to_string(),
        render(x.div_floor(&y)),
        render(x.mod_floor(&y)),
        render(&x / &y),
        render(&x % &y),
        (&x & &y).to_string(),
        (&x | &y).to_string(),
        (&x ^ &y).to_string(),
        (!&x).to_string(),
        (-&x).to_string(),
        (&x << k).to_string(),
        (&x >> k).to_string(),
        format!("{:?}", x.cmp(&y)),
        x.to_f64().to_bits().to_string(),
        x.bits().to_string(),
    ]
}

proptest! {
    #[test]
    fn hex_parse_formats_as_decimal(n in strategy::wide()) {
        let hex = if n < 0 {
            format!("-{:x}", n.unsigned_abs())
        } else {
            format!("{:X}", n)
        };
        let x = Int::<LimbBackend>::from_hex(&hex).unwrap();
        prop_assert!(x.is_big());
        prop_assert_eq!(x.to_string(), n.to_string());
    }

    #[test]
    fn fast_path_matches_wide_machine_integers(x in strategy::edge(), y in strategy::edge()) {
        init_logger();
        let (a, b) = (Int::<LimbBackend>::new(x), Int::<LimbBackend>::new(y));
        let (x, y) = (x as i128, y as i128);
        prop_assert_eq!((&a + &b).to_string(), (x + y).to_string());
        prop_assert_eq!((&a - &b).to_string(), (x - y).to_string());
        prop_assert_eq!((&a * &b).to_string(), (x * y).to_string());
        prop_assert_eq!((&a & &b).to_string(), (x & y).to_string());
        prop_assert_eq!((!&a).to_string(), (!x).to_string());
        prop_assert_eq!(a.cmp(&b), x.cmp(&y));
        if y != 0 {
            let (q, m) = floor_divmod(x, y);
            prop_assert_eq!(a.div_floor(&b).unwrap().to_string(), q.to_string());
            prop_assert_eq!(a.mod_floor(&b).unwrap().to_string(), m.to_string());
        }
    }

    #[test]
    fn small_and_promoted_operands_agree(
        x in strategy::small(),
        y in strategy::small(),
        k in 0u32..80
    ) {
        let (a, b) = (Int::<LimbBackend>::new(x), Int::<LimbBackend>::new(y));
        let (big_a, big_b) = (a.clone().promote(), b.clone().promote());
        prop_assert_eq!(&a + &b, &big_a + &big_b);
        prop_assert_eq!(&a - &b, &big_a - &big_b);
        prop_assert_eq!(&a * &b, &big_a * &big_b);
        prop_assert_eq!(a.div_floor(&b), big_a.div_floor(&big_b));
        prop_assert_eq!(a.mod_floor(&b), big_a.mod_floor(&big_b));
        prop_assert_eq!(&a / &b, &big_a / &big_b);
        prop_assert_eq!(&a % &b, &big_a % &big_b);
        prop_assert_eq!(&a & &b, &big_a & &big_b);
        prop_assert_eq!(&a | &b, &big_a | &big_b);
        prop_assert_eq!(&a ^ &b, &big_a ^ &big_b);
        prop_assert_eq!(!&a, !&big_a);
        prop_assert_eq!(-&a, -&big_a);
        prop_assert_eq!(&a << k, &big_a << k);
        prop_assert_eq!(&a >> k, &big_a >> k);
        prop_assert_eq!(a.to_f64(), big_a.to_f64());
        prop_assert_eq!(a.cmp(&b), big_a.cmp(&big_b));
    }

    #[test]
    fn promotion_is_monotonic(x in strategy::small(), y in strategy::small(), k in 0u32..80) {
        let big = Int::<LimbBackend>::new(x).promote();
        let y = Int::new(y);
        prop_assert!((&big + &y).is_big());
        prop_assert!((&y - &big).is_big());
        prop_assert!((&big * &y).is_big());
        prop_assert!((&big & &y).is_big());
        prop_assert!((!&big).is_big());
        prop_assert!((-&big).is_big());
        prop_assert!((&big >> k).is_big());
        prop_assert!((&big << k).is_big());
        if !y.is_zero() {
            prop_assert!(big.div_floor(&y).unwrap().is_big());
            prop_assert!((&big % &y).unwrap().is_big());
        }
    }

    #[test]
    fn limb_division_laws(x in strategy::wide(), y in strategy::wide()) {
        division_laws::<LimbBackend>(x.into(), y.into())?;
    }

    #[test]
    fn limb_division_laws_on_many_limbs(x in strategy::limbs(), y in strategy::limbs()) {
        division_laws::<LimbBackend>(parse(&x), parse(&y))?;
    }

    #[test]
    fn limb_bitwise_laws(x in strategy::wide(), y in strategy::wide(), k in 0u32..100) {
        bitwise_laws::<LimbBackend>(x.into(), y.into(), k)?;
    }

    #[test]
    fn limb_bitwise_laws_on_many_limbs(
        x in strategy::limbs(),
        y in strategy::limbs(),
        k in 0u32..200
    ) {
        bitwise_laws::<LimbBackend>(parse(&x), parse(&y), k)?;
    }

    #[test]
    fn safe_integers_round_trip_through_f64(n in strategy::small()) {
        let x = Int::<LimbBackend>::from_f64(n as f64).unwrap();
        prop_assert!(x.is_small());
        prop_assert_eq!(x.to_f64(), n as f64);
        prop_assert_eq!(x.promote().to_f64(), n as f64);
    }
}

#[cfg(feature = "native")]
mod native {
    use super::*;

    use unboxed_number::NativeBackend;

    proptest! {
        #[test]
        fn native_division_laws(x in strategy::wide(), y in strategy::wide()) {
            division_laws::<NativeBackend>(x.into(), y.into())?;
        }

        #[test]
        fn native_division_laws_on_many_limbs(x in strategy::limbs(), y in strategy::limbs()) {
            division_laws::<NativeBackend>(parse(&x), parse(&y))?;
        }

        #[test]
        fn native_bitwise_laws(x in strategy::wide(), y in strategy::wide(), k in 0u32..100) {
            bitwise_laws::<NativeBackend>(x.into(), y.into(), k)?;
        }

        #[test]
        fn backends_agree(x in strategy::wide(), y in strategy::wide(), k in 0u32..100) {
            let limb = results::<LimbBackend>(x.into(), y.into(), k);
            let native = results::<NativeBackend>(x.into(), y.into(), k);
            prop_assert_eq!(limb, native);
        }

        #[test]
        fn backends_agree_on_many_limbs(
            x in strategy::limbs(),
            y in strategy::limbs(),
            k in 0u32..200
        ) {
            let limb = results::<LimbBackend>(parse(&x), parse(&y), k);
            let native = results::<NativeBackend>(parse(&x), parse(&y), k);
            prop_assert_eq!(limb, native);
        }

        #[test]
        fn backends_agree_on_hex_input(s in "-?[0-9a-fA-F]{1,48}|[0-9a-g+_ -]{0,6}") {
            let limb = Int::<LimbBackend>::from_hex(&s).map(|n| n.to_string());
            let native = Int::<NativeBackend>::from_hex(&s).map(|n| n.to_string());
            prop_assert_eq!(limb, native);
        }
    }
}

#[test]
fn concrete_scenarios() {
    init_logger();

    let x: Int = Int::from_hex("-1f4").unwrap();
    assert_eq!(x.to_string(), "-500");

    let x: Int = Int::new(9007199254740991) * Int::new(2);
    assert!(x.is_big());
    assert_eq!(x.to_string(), "18014398509481982");

    let (x, y): (Int, Int) = (Int::new(-7), Int::new(2));
    assert_eq!(x.div_floor(&y), Ok(Int::new(-4)));
    assert_eq!(x.mod_floor(&y), Ok(Int::new(1)));
    assert_eq!(x.div_trunc(&y), Ok(Int::new(-3)));
    assert_eq!(x.rem_trunc(&y), Ok(Int::new(-1)));

    let (x, y): (Int, Int) = (Int::new(12), Int::new(10));
    assert_eq!(x & y, 8i64);
    let (x, y): (Int, Int) = (Int::new(5), Int::new(3));
    assert_eq!(x ^ y, 6i64);

    let x: Int = Int::new(3);
    assert_eq!(x << 2, 12i64);
    let x: Int = Int::new(-7);
    assert_eq!(x >> 1, -4i64);
}
