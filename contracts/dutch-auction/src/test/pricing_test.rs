use soroban_sdk::Env;

use crate::pricing::current_price;

#[test]
fn test_price_at_start() {
    let env = Env::default();
    assert_eq!(current_price(&env, 1000, 0, 100, 0), 1000);
}

#[test]
fn test_price_falling_midway() {
    let env = Env::default();
    // 1000 + (0 - 1000) * 25 / 100 = 750
    assert_eq!(current_price(&env, 1000, 0, 100, 25), 750);
}

#[test]
fn test_price_at_duration() {
    let env = Env::default();
    assert_eq!(current_price(&env, 1000, 0, 100, 100), 0);
}

#[test]
fn test_price_after_duration() {
    let env = Env::default();
    assert_eq!(current_price(&env, 1000, 0, 100, 150), 0);
    assert_eq!(current_price(&env, 1000, 0, 100, u64::MAX), 0);
}

#[test]
fn test_price_rising_midway() {
    let env = Env::default();
    // 100 + (500 - 100) * 50 / 100 = 300
    assert_eq!(current_price(&env, 100, 500, 100, 50), 300);
    assert_eq!(current_price(&env, 100, 500, 100, 100), 500);
    assert_eq!(current_price(&env, 100, 500, 100, 150), 500);
}

#[test]
fn test_price_flat() {
    let env = Env::default();
    for elapsed in [0, 1, 50, 100, 200] {
        assert_eq!(current_price(&env, 400, 400, 100, elapsed), 400);
    }
}

#[test]
fn test_price_truncates_toward_zero() {
    let env = Env::default();
    // delta * elapsed / duration = -1000 * 1 / 3 = -333 (not -334)
    assert_eq!(current_price(&env, 1000, 0, 3, 1), 667);
    assert_eq!(current_price(&env, 1000, 0, 3, 2), 334);
    // rising direction truncates too: 1000 * 1 / 3 = 333
    assert_eq!(current_price(&env, 0, 1000, 3, 1), 333);
}

#[test]
fn test_price_monotonic_falling() {
    let env = Env::default();
    let mut last = current_price(&env, 987_654, 12, 97, 0);
    for elapsed in 1..=97 {
        let price = current_price(&env, 987_654, 12, 97, elapsed);
        assert!(price <= last, "price rose at elapsed {}", elapsed);
        last = price;
    }
    assert_eq!(last, 12);
}

#[test]
fn test_price_monotonic_rising() {
    let env = Env::default();
    let mut last = current_price(&env, 12, 987_654, 97, 0);
    for elapsed in 1..=97 {
        let price = current_price(&env, 12, 987_654, 97, elapsed);
        assert!(price >= last, "price fell at elapsed {}", elapsed);
        last = price;
    }
    assert_eq!(last, 987_654);
}

#[test]
fn test_price_wide_intermediate() {
    let env = Env::default();
    // delta * elapsed overflows i128 for a maximal price; the 256-bit
    // intermediate must carry it. Halfway the change truncates to
    // -(2^126 - 1), leaving exactly 2^126.
    let price = current_price(&env, i128::MAX, 0, 1_000_000, 500_000);
    assert_eq!(price, 1i128 << 126);

    // endpoints survive the wide path as well
    assert_eq!(current_price(&env, i128::MAX, 0, 1_000_000, 0), i128::MAX);
    assert_eq!(current_price(&env, i128::MAX, 0, 1_000_000, 1_000_000), 0);
}
