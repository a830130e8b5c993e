use soroban_sdk::{contracterror, contracttype, Address, Env};

/// Storage keys for contract data
#[contracttype]
pub enum DataKey {
    Config,                // Sale parameters fixed at initialization
    Owner,                 // Administrative account
    ValueRaised,           // Cumulative accepted value
    ClosingTime,           // Closing time, owner-extendable
    Contribution(Address), // Investor -> Contribution
    Contributors,          // Ordered, deduplicated investor list
}

/// Sale parameters, written once at initialization
#[contracttype]
#[derive(Clone)]
pub struct SaleConfig {
    pub sale_token: Address,    // Token credited to investors
    pub payment_token: Address, // Asset investors pay with
    pub wallet: Address,        // Receiver of forwarded funds
    pub opening_time: u64,
    pub closing_time: u64, // As configured; extensions live under DataKey::ClosingTime
    pub rate: i128,        // Token units credited per value unit
    pub cap: i128,         // Maximum cumulative value accepted
    pub minimum_contribution: i128,
}

impl SaleConfig {
    pub fn load(env: &Env) -> Result<SaleConfig, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(Error::NotInitialized)
    }
}

/// Per-investor ledger entry
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contribution {
    pub token_balance: i128,     // Tokens credited so far
    pub value_contributed: i128, // Value accepted so far
}

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,       // Contract already set up
    NotInitialized = 2,           // Contract not initialized
    Unauthorized = 3,             // Caller is not the owner
    SaleNotOpen = 4,              // Purchase outside the open phase
    BelowMinimumContribution = 5, // Value under the per-transaction minimum
    CapExceeded = 6,              // Purchase would push the total past the cap
    InvalidTimeRange = 7,         // Bad opening/closing window
    SaleEnded = 8,                // Closing time is frozen once the sale ended
    InvalidAmount = 9,            // Non-positive amount
    MathOverflow = 10,            // Arithmetic overflow
}
