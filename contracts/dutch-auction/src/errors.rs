use soroban_sdk::contracterror;

/// Error codes for the dutch auction contract.
/// Uses error codes starting at 300 to avoid conflicts with other contracts.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 300,
    /// Contract has not been initialized
    NotInitialized = 301,
    /// Caller does not have the required role or does not own the asset
    Unauthorized = 302,
    /// New listings are blocked while the contract is paused
    Paused = 303,
    /// A price is negative or the duration is below the minimum
    OutOfRange = 304,
    /// No active listing exists for the given asset
    NotOnAuction = 305,
    /// Bidder is not on the allow-list
    NotEligible = 306,
    /// Offered amount is below the current price
    PriceNotMet = 307,
    /// The asset registry refused a transfer in or out of escrow
    EscrowFailed = 308,
}
