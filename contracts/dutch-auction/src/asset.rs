use soroban_sdk::{contractclient, Address, Env};

/// Interface of the external registry that custodies the unique
/// assets put up for auction. The engine consumes this interface but
/// never implements it; while an asset is listed the registry reports
/// this contract as its owner.
#[contractclient(name = "AssetRegistryClient")]
pub trait AssetRegistry {
    /// Current owner of the asset.
    fn owner_of(env: Env, asset_id: u64) -> Address;

    /// Move the asset between owners. The registry rejects the call
    /// if `from` does not currently hold the asset.
    fn transfer(env: Env, from: Address, to: Address, asset_id: u64);
}
