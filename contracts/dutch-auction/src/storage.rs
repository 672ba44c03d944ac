use soroban_sdk::{Address, Env};

use crate::types::{
    AuctionConfig, Listing, StorageKey, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// INITIALIZATION STORAGE
// ============================================================================

/// Check if contract is initialized
pub fn is_initialized(e: &Env) -> bool {
    e.storage()
        .instance()
        .get::<_, bool>(&StorageKey::Initialized)
        .unwrap_or(false)
}

/// Mark contract as initialized
pub fn set_initialized(e: &Env) {
    e.storage().instance().set(&StorageKey::Initialized, &true);
}

// ============================================================================
// CONFIG STORAGE
// ============================================================================

/// Get engine configuration
pub fn get_config(e: &Env) -> Option<AuctionConfig> {
    let key = StorageKey::Config;
    let config = e.storage().persistent().get::<_, AuctionConfig>(&key);
    if config.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    config
}

/// Set engine configuration
pub fn set_config(e: &Env, config: &AuctionConfig) {
    let key = StorageKey::Config;
    e.storage().persistent().set(&key, config);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// LISTING STORAGE
// ============================================================================

/// Get the active listing for an asset, if any
pub fn get_listing(e: &Env, asset_id: u64) -> Option<Listing> {
    let key = StorageKey::Listing(asset_id);
    let listing = e.storage().persistent().get::<_, Listing>(&key);
    if listing.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    listing
}

/// Store a listing, overwriting any previous entry for the asset
pub fn set_listing(e: &Env, listing: &Listing) {
    let key = StorageKey::Listing(listing.asset_id);
    e.storage().persistent().set(&key, listing);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Remove a listing. Removing an absent key is a no-op.
pub fn remove_listing(e: &Env, asset_id: u64) {
    e.storage().persistent().remove(&StorageKey::Listing(asset_id));
}

// ============================================================================
// ALLOW-LIST STORAGE
// ============================================================================

/// Add a bidder to the allow-list
pub fn set_allowed(e: &Env, bidder: &Address) {
    let key = StorageKey::Allowed(bidder.clone());
    e.storage().persistent().set(&key, &true);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Check allow-list membership
pub fn is_allowed(e: &Env, bidder: &Address) -> bool {
    let key = StorageKey::Allowed(bidder.clone());
    let allowed = e
        .storage()
        .persistent()
        .get::<_, bool>(&key)
        .unwrap_or(false);
    if allowed {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    allowed
}
