use soroban_sdk::{contractevent, Address};

/// Event emitted when the contract is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub admin: Address,
    pub asset_registry: Address,
}

/// Event emitted when an auction is created
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEventData {
    #[topic]
    pub asset_id: u64,
    pub seller: Address,
    pub starting_price: i128,
    pub ending_price: i128,
    pub duration: u64,
}

/// Event emitted when an auction settles to a winning bidder
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionSettledEventData {
    #[topic]
    pub asset_id: u64,
    pub price: i128,
    pub buyer: Address,
}

/// Event emitted when an auction is cancelled by its seller
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCancelledEventData {
    #[topic]
    pub asset_id: u64,
    pub seller: Address,
}

/// Event emitted when the pause gate is toggled
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseToggledEventData {
    #[topic]
    pub admin: Address,
    pub is_paused: bool,
}

/// Event emitted when bidders are added to the allow-list
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BiddersAllowedEventData {
    #[topic]
    pub admin: Address,
    pub count: u32,
}

/// Event emitted when the admin role is handed over
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChangedEventData {
    #[topic]
    pub old_admin: Address,
    pub new_admin: Address,
}
