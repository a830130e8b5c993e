//! Interface documentation for the Token Sale Contract
//!
//! This contract runs a fixed-parameter token sale: it accepts payment-token
//! transfers during a bounded time window, credits sale tokens at a fixed
//! rate, enforces a global cap and a per-transaction minimum, and keeps an
//! auditable per-investor contribution ledger.

use crate::types::{Error, SaleConfig};
use soroban_sdk::{Address, Vec};

/// Contract Interface
pub trait TokenSaleTrait {
    /// Initialize the sale with its fixed parameters
    ///
    /// # Arguments
    /// * `owner` - The address with administrative privileges
    /// * `sale_token` - Token credited to investors, paid out of the
    ///   contract's own balance
    /// * `payment_token` - Asset investors pay with
    /// * `wallet` - Address receiving the forwarded payments
    /// * `opening_time` - Unix timestamp when purchases start being accepted
    /// * `closing_time` - Unix timestamp after which purchases are rejected
    /// * `rate` - Token units credited per value unit
    /// * `cap` - Maximum cumulative value the sale will accept
    /// * `minimum_contribution` - Smallest value accepted per purchase
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the contract has already been initialized
    /// * `InvalidTimeRange` - If the opening time lies in the past or the
    ///   closing time does not lie after it
    /// * `InvalidAmount` - If rate, cap or minimum contribution is not
    ///   positive
    fn initialize(
        owner: Address,
        sale_token: Address,
        payment_token: Address,
        wallet: Address,
        opening_time: u64,
        closing_time: u64,
        rate: i128,
        cap: i128,
        minimum_contribution: i128,
    ) -> Result<(), Error>;

    /// Buy tokens for yourself: `amount` of the payment token moves to the
    /// wallet and `amount * rate` sale tokens are credited to the buyer
    ///
    /// # Returns
    /// The number of tokens credited
    ///
    /// # Errors
    /// * `SaleNotOpen` - Before opening, after closing, or once the cap is
    ///   reached
    /// * `BelowMinimumContribution` - If `amount` is under the minimum
    /// * `CapExceeded` - If the purchase would push the total past the cap;
    ///   nothing is accepted
    fn purchase(buyer: Address, amount: i128) -> Result<i128, Error>;

    /// Buy tokens on behalf of someone else: the purchaser pays, the
    /// beneficiary is credited and recorded in the ledger. The purchaser
    /// identity is never persisted.
    ///
    /// # Returns
    /// The number of tokens credited
    ///
    /// # Errors
    /// Same as `purchase`
    fn purchase_for(purchaser: Address, beneficiary: Address, amount: i128)
        -> Result<i128, Error>;

    /// Move the closing time forward (owner only)
    ///
    /// # Errors
    /// * `Unauthorized` - If the caller is not the owner
    /// * `SaleEnded` - Once the sale has ended, by time or by cap
    /// * `InvalidTimeRange` - If the new closing time does not lie after the
    ///   current one
    fn extend_closing_time(caller: Address, new_closing: u64) -> Result<(), Error>;

    /// Transfer tokens stranded on the contract to the owner (owner only)
    ///
    /// # Arguments
    /// * `token` - Any token address, the sale token included
    /// * `amount` - How much to reclaim
    ///
    /// # Errors
    /// * `Unauthorized` - If the caller is not the owner
    /// * `InvalidAmount` - If `amount` is not positive
    fn recover_token(caller: Address, token: Address, amount: i128) -> Result<(), Error>;

    /// Hand the owner role to another account (owner only)
    ///
    /// # Errors
    /// * `Unauthorized` - If the caller is not the owner
    fn transfer_ownership(caller: Address, new_owner: Address) -> Result<(), Error>;

    /// The sale parameters as configured at initialization
    fn get_config() -> Result<SaleConfig, Error>;

    /// The current owner
    fn owner() -> Result<Address, Error>;

    /// Whether the opening time has been reached
    fn started() -> Result<bool, Error>;

    /// Whether the sale is over: the closing time has passed or the cap has
    /// been reached, whichever came first
    fn ended() -> Result<bool, Error>;

    /// Whether purchases are currently accepted
    fn is_open() -> Result<bool, Error>;

    /// Whether the cumulative accepted value has reached the cap
    fn cap_reached() -> Result<bool, Error>;

    /// Cumulative value accepted so far
    fn value_raised() -> i128;

    /// Current closing time, including any owner extensions
    fn closing_time() -> u64;

    /// Number of distinct investors recorded in the ledger
    fn contributors_length() -> u32;

    /// Distinct investors in order of first contribution
    fn contributors() -> Vec<Address>;

    /// Tokens credited to an investor, zero for unknown addresses
    fn token_balance(investor: Address) -> i128;

    /// Value accepted from an investor, zero for unknown addresses
    fn value_contributed(investor: Address) -> i128;
}
