#![no_std]

mod asset;
mod errors;
mod events;
mod pricing;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

use crate::asset::AssetRegistryClient;
use crate::errors::Error;
use crate::events::*;
use crate::storage::*;
use crate::types::*;

// ============================================================================
// Contract
// ============================================================================

/// Descending-price ("dutch") auction contract for unique assets.
///
/// A seller lists an asset with a starting price, an ending price and
/// a duration; the effective price moves linearly between the two over
/// the duration. The first eligible bidder to offer at least the
/// current price wins the asset. The asset itself is custodied by an
/// external registry contract and sits in this contract's escrow for
/// the lifetime of the listing.
///
/// Exactly one settlement or cancellation can succeed per listing: the
/// winning path removes the listing before the asset moves, and every
/// later attempt sees no listing at all.
#[contract]
pub struct DutchAuction;

#[contractimpl]
impl DutchAuction {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the auction contract.
    ///
    /// # Arguments
    /// * `admin` - Address that will have admin privileges
    /// * `asset_registry` - Contract custodying the auctioned assets
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    pub fn initialize(e: &Env, admin: Address, asset_registry: Address) -> Result<(), Error> {
        admin.require_auth();

        if is_initialized(e) {
            return Err(Error::AlreadyInitialized);
        }

        let config = AuctionConfig {
            admin: admin.clone(),
            asset_registry: asset_registry.clone(),
            is_paused: false,
            total_listed: 0,
            total_settled: 0,
            total_cancelled: 0,
            updated_at: e.ledger().timestamp(),
        };

        set_config(e, &config);
        set_initialized(e);
        Self::extend_instance_ttl(e);

        InitializedEventData {
            admin,
            asset_registry,
        }
        .publish(e);

        Ok(())
    }

    // ========================================================================
    // AUCTION LIFECYCLE
    // ========================================================================

    /// List an asset for descending-price sale.
    ///
    /// Pulls the asset from the seller into this contract's escrow and
    /// records the listing with the current ledger time as its start.
    /// The starting price may be above, equal to, or below the ending
    /// price; the interpolation handles both directions.
    ///
    /// # Arguments
    /// * `seller` - Current owner of the asset; must authorize the call
    /// * `asset_id` - Asset identifier in the registry's key space
    /// * `starting_price` - Price at the moment the auction opens
    /// * `ending_price` - Price once the full duration has elapsed
    /// * `duration` - Decay window in seconds, at least `MIN_DURATION_SECS`
    ///
    /// # Errors
    /// * `Error::Paused` - New listings are blocked
    /// * `Error::OutOfRange` - A price is negative or the duration too short
    /// * `Error::Unauthorized` - The seller does not own the asset
    /// * `Error::EscrowFailed` - The registry refused the escrow transfer
    pub fn create_auction(
        e: &Env,
        seller: Address,
        asset_id: u64,
        starting_price: i128,
        ending_price: i128,
        duration: u64,
    ) -> Result<(), Error> {
        seller.require_auth();

        let mut config = get_config(e).ok_or(Error::NotInitialized)?;

        if config.is_paused {
            return Err(Error::Paused);
        }

        if starting_price < 0 || ending_price < 0 {
            return Err(Error::OutOfRange);
        }

        if duration < MIN_DURATION_SECS {
            return Err(Error::OutOfRange);
        }

        let registry = AssetRegistryClient::new(e, &config.asset_registry);
        match registry.try_owner_of(&asset_id) {
            Ok(Ok(owner)) if owner == seller => {}
            _ => return Err(Error::Unauthorized),
        }

        if registry
            .try_transfer(&seller, &e.current_contract_address(), &asset_id)
            .is_err()
        {
            return Err(Error::EscrowFailed);
        }

        let now = e.ledger().timestamp();
        let listing = Listing {
            asset_id,
            seller: seller.clone(),
            starting_price,
            ending_price,
            duration,
            started_at: now,
        };
        set_listing(e, &listing);

        config.total_listed += 1;
        config.updated_at = now;
        set_config(e, &config);

        AuctionCreatedEventData {
            asset_id,
            seller,
            starting_price,
            ending_price,
            duration,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Buy the asset at the current price.
    ///
    /// The bidder pays for themselves: the offered `amount` must be at
    /// least the price at the current ledger time, and the bidder must
    /// be on the allow-list.
    ///
    /// # Errors
    /// * `Error::NotOnAuction` - No active listing for the asset
    /// * `Error::NotEligible` - Bidder is not on the allow-list
    /// * `Error::PriceNotMet` - Offered amount is below the current price
    /// * `Error::EscrowFailed` - The registry refused the transfer out
    pub fn bid(e: &Env, bidder: Address, asset_id: u64, amount: i128) -> Result<(), Error> {
        bidder.require_auth();

        let config = get_config(e).ok_or(Error::NotInitialized)?;
        Self::settle(e, config, asset_id, bidder, amount)
    }

    /// Record a win on behalf of a bidder who paid off-channel.
    ///
    /// Only the admin may call this. The `amount` is an attested
    /// payment, not funds moving through this contract; the bidder
    /// still has to pass the same eligibility and price checks as the
    /// self-service path.
    ///
    /// # Errors
    /// * `Error::Unauthorized` - Caller is not the admin
    /// * Otherwise identical to `bid`
    pub fn settle_for(
        e: &Env,
        caller: Address,
        asset_id: u64,
        bidder: Address,
        amount: i128,
    ) -> Result<(), Error> {
        caller.require_auth();

        let config = get_config(e).ok_or(Error::NotInitialized)?;

        if caller != config.admin {
            return Err(Error::Unauthorized);
        }

        Self::settle(e, config, asset_id, bidder, amount)
    }

    /// Cancel a listing and return the asset to its seller.
    ///
    /// Only the original seller may cancel. Cancellation stays
    /// available while the contract is paused so sellers can always
    /// retrieve their asset; pause blocks new listings only.
    pub fn cancel_auction(e: &Env, seller: Address, asset_id: u64) -> Result<(), Error> {
        seller.require_auth();

        let mut config = get_config(e).ok_or(Error::NotInitialized)?;

        let listing = get_listing(e, asset_id).ok_or(Error::NotOnAuction)?;
        if !listing.is_active() {
            return Err(Error::NotOnAuction);
        }

        if listing.seller != seller {
            return Err(Error::Unauthorized);
        }

        remove_listing(e, asset_id);

        let registry = AssetRegistryClient::new(e, &config.asset_registry);
        if registry
            .try_transfer(&e.current_contract_address(), &seller, &asset_id)
            .is_err()
        {
            return Err(Error::EscrowFailed);
        }

        config.total_cancelled += 1;
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        AuctionCancelledEventData { asset_id, seller }.publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Price of the listing at the current ledger time
    pub fn get_current_price(e: &Env, asset_id: u64) -> Result<i128, Error> {
        let listing = get_listing(e, asset_id).ok_or(Error::NotOnAuction)?;
        if !listing.is_active() {
            return Err(Error::NotOnAuction);
        }
        Ok(Self::listing_price(e, &listing))
    }

    /// Get the active listing for an asset
    pub fn get_auction(e: &Env, asset_id: u64) -> Result<Listing, Error> {
        get_listing(e, asset_id).ok_or(Error::NotOnAuction)
    }

    /// Get engine configuration
    pub fn get_config(e: &Env) -> Result<AuctionConfig, Error> {
        get_config(e).ok_or(Error::NotInitialized)
    }

    /// Check if new listings are blocked
    pub fn is_paused(e: &Env) -> Result<bool, Error> {
        let config = get_config(e).ok_or(Error::NotInitialized)?;
        Ok(config.is_paused)
    }

    /// Check allow-list membership for a bidder
    pub fn is_allowed_bidder(e: &Env, bidder: Address) -> bool {
        is_allowed(e, &bidder)
    }

    // ========================================================================
    // ADMINISTRATION
    // ========================================================================

    /// Pause or unpause listing creation (admin only)
    pub fn set_paused(e: &Env, admin: Address, paused: bool) -> Result<(), Error> {
        admin.require_auth();

        let mut config = get_config(e).ok_or(Error::NotInitialized)?;

        if admin != config.admin {
            return Err(Error::Unauthorized);
        }

        config.is_paused = paused;
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        PauseToggledEventData {
            admin,
            is_paused: paused,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Add bidders to the allow-list in bulk (admin only).
    ///
    /// Membership is append-only; there is no removal operation.
    pub fn add_allowed_bidders(
        e: &Env,
        admin: Address,
        bidders: Vec<Address>,
    ) -> Result<(), Error> {
        admin.require_auth();

        let config = get_config(e).ok_or(Error::NotInitialized)?;

        if admin != config.admin {
            return Err(Error::Unauthorized);
        }

        for bidder in bidders.iter() {
            set_allowed(e, &bidder);
        }

        BiddersAllowedEventData {
            admin,
            count: bidders.len(),
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Hand the admin role to a new address (admin only)
    pub fn set_admin(e: &Env, admin: Address, new_admin: Address) -> Result<(), Error> {
        admin.require_auth();

        let mut config = get_config(e).ok_or(Error::NotInitialized)?;

        if admin != config.admin {
            return Err(Error::Unauthorized);
        }

        config.admin = new_admin.clone();
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        AdminChangedEventData {
            old_admin: admin,
            new_admin,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    /// Shared settlement flow for the self-service and operator paths.
    fn settle(
        e: &Env,
        mut config: AuctionConfig,
        asset_id: u64,
        bidder: Address,
        amount: i128,
    ) -> Result<(), Error> {
        let listing = get_listing(e, asset_id).ok_or(Error::NotOnAuction)?;
        if !listing.is_active() {
            return Err(Error::NotOnAuction);
        }

        if !is_allowed(e, &bidder) {
            return Err(Error::NotEligible);
        }

        let price = Self::listing_price(e, &listing);
        if amount < price {
            return Err(Error::PriceNotMet);
        }

        // Remove the listing before the asset moves so a reentrant
        // call observes no listing and cannot settle the same sale
        // twice. A refused transfer unwinds the removal along with the
        // rest of the invocation.
        remove_listing(e, asset_id);

        let registry = AssetRegistryClient::new(e, &config.asset_registry);
        if registry
            .try_transfer(&e.current_contract_address(), &bidder, &asset_id)
            .is_err()
        {
            return Err(Error::EscrowFailed);
        }

        config.total_settled += 1;
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        AuctionSettledEventData {
            asset_id,
            price,
            buyer: bidder,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Price of a listing at the current ledger time. A clock reading
    /// at or before `started_at` clamps elapsed time to zero.
    fn listing_price(e: &Env, listing: &Listing) -> i128 {
        let elapsed = e.ledger().timestamp().saturating_sub(listing.started_at);
        pricing::current_price(
            e,
            listing.starting_price,
            listing.ending_price,
            listing.duration,
            elapsed,
        )
    }

    /// Extend the TTL of instance storage.
    /// Called internally during state-changing operations.
    fn extend_instance_ttl(e: &Env) {
        e.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
    }
}
