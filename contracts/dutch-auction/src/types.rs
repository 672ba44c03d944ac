use soroban_sdk::{contracttype, Address};

/// Storage keys for the dutch auction contract.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Initialization flag
    Initialized,
    /// Engine configuration
    Config,
    /// Active listing by asset id
    Listing(u64),
    /// Allow-list membership by bidder address
    Allowed(Address),
}

/// An asset listed for descending-price sale.
///
/// At most one listing exists per asset id; the entry is removed the
/// moment the auction settles or is cancelled, so presence of the key
/// is the authoritative "on auction" signal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    /// Asset identifier in the external registry's key space
    pub asset_id: u64,
    /// Party that listed the asset; authorizes cancellation
    pub seller: Address,
    /// Price at the moment the auction opens
    pub starting_price: i128,
    /// Price once the full duration has elapsed
    pub ending_price: i128,
    /// Seconds over which the price moves from start to end
    pub duration: u64,
    /// Ledger timestamp at creation; zero is reserved for "no listing"
    pub started_at: u64,
}

impl Listing {
    /// A listing is live iff it carries a real start time.
    pub fn is_active(&self) -> bool {
        self.started_at > 0
    }
}

/// Engine configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionConfig {
    /// Admin address with special privileges
    pub admin: Address,
    /// External contract holding custody of the auctioned assets
    pub asset_registry: Address,
    /// Whether new listings are blocked
    pub is_paused: bool,
    /// Total number of auctions created
    pub total_listed: u64,
    /// Total number of auctions settled
    pub total_settled: u64,
    /// Total number of auctions cancelled
    pub total_cancelled: u64,
    /// Timestamp of last configuration update
    pub updated_at: u64,
}

/// Floor on auction duration. Keeps the decay window long enough that
/// per-second interpolation is meaningful.
pub const MIN_DURATION_SECS: u64 = 60;

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
