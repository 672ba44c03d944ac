pub mod pricing_test;

use soroban_sdk::{
    contract, contracterror, contractimpl,
    testutils::{Address as _, Ledger},
    Address, Env, Vec,
};

use crate::{DutchAuction, DutchAuctionClient};

/// Asset id used by most tests; minted to the seller in `setup_test`.
pub const ASSET_ID: u64 = 7;

// ============================================================================
// MOCK ASSET REGISTRY
// ============================================================================

// Minimal custody collaborator: one owner per asset id, transfers
// rejected unless `from` currently holds the asset.

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum RegistryError {
    UnknownAsset = 1,
    NotOwner = 2,
}

#[contract]
pub struct MockAssetRegistry;

#[contractimpl]
impl MockAssetRegistry {
    pub fn set_owner(env: Env, asset_id: u64, owner: Address) {
        env.storage().persistent().set(&asset_id, &owner);
    }

    pub fn owner_of(env: Env, asset_id: u64) -> Result<Address, RegistryError> {
        env.storage()
            .persistent()
            .get(&asset_id)
            .ok_or(RegistryError::UnknownAsset)
    }

    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        asset_id: u64,
    ) -> Result<(), RegistryError> {
        let owner: Address = env
            .storage()
            .persistent()
            .get(&asset_id)
            .ok_or(RegistryError::UnknownAsset)?;
        if owner != from {
            return Err(RegistryError::NotOwner);
        }
        env.storage().persistent().set(&asset_id, &to);
        Ok(())
    }
}

// ============================================================================
// TEST SETUP HELPERS
// ============================================================================

pub fn setup_test() -> (
    Env,
    DutchAuctionClient<'static>,
    Address,
    Address,
    Address,
    Address,
) {
    let env = Env::default();
    env.mock_all_auths();

    // Env::default() starts the ledger clock at zero; give the tests a
    // real-looking base time so `started_at` is always positive.
    advance_ledger(&env, 1_000_000);

    let contract_id = env.register(DutchAuction, ());
    let client = DutchAuctionClient::new(&env, &contract_id);

    let registry_id = env.register(MockAssetRegistry, ());
    let registry = MockAssetRegistryClient::new(&env, &registry_id);

    let admin = Address::generate(&env);
    let seller = Address::generate(&env);
    let buyer = Address::generate(&env);

    registry.set_owner(&ASSET_ID, &seller);

    client.initialize(&admin, &registry_id);
    client.add_allowed_bidders(&admin, &Vec::from_array(&env, [buyer.clone()]));

    (env, client, admin, seller, buyer, registry_id)
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp += seconds;
    });
}

pub fn asset_owner(env: &Env, registry_id: &Address) -> Address {
    MockAssetRegistryClient::new(env, registry_id).owner_of(&ASSET_ID)
}
