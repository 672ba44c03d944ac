use soroban_sdk::{Env, I256};

/// Linear interpolation between the starting and ending price of a
/// listing, as a function of elapsed auction time.
///
/// Once `elapsed` reaches `duration` the price stays at `ending_price`
/// forever. Before that the price moves proportionally, with the
/// division truncating toward zero. The price may fall or rise: the
/// total change is signed, and the multiply can exceed 128 bits for
/// large prices, so the `delta * elapsed / duration` step runs in the
/// host 256-bit signed integer.
///
/// Callers must guarantee `duration > 0`; the `MIN_DURATION_SECS`
/// check at listing creation enforces this. A zero duration faults on
/// the division.
pub fn current_price(
    e: &Env,
    starting_price: i128,
    ending_price: i128,
    duration: u64,
    elapsed: u64,
) -> i128 {
    if elapsed >= duration {
        return ending_price;
    }

    let delta = I256::from_i128(e, ending_price).sub(&I256::from_i128(e, starting_price));
    let change = delta
        .mul(&I256::from_i128(e, elapsed as i128))
        .div(&I256::from_i128(e, duration as i128));
    let price = I256::from_i128(e, starting_price).add(&change);

    // The interpolated price lies between the two endpoints, so the
    // conversion back to i128 cannot fail.
    price.to_i128().unwrap()
}
