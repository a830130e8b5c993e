use crate::access::OwnershipManager;
use crate::cap::CapManager;
use crate::types::{DataKey, Error, SaleConfig};
use soroban_sdk::{Address, Env, Symbol};

pub struct WindowManager;

impl WindowManager {
    pub fn init(env: &Env, config: &SaleConfig) {
        env.storage()
            .instance()
            .set(&DataKey::ClosingTime, &config.closing_time);
    }

    /// Current closing time, including any owner extensions
    pub fn closing_time(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::ClosingTime)
            .unwrap_or(0)
    }

    pub fn has_opened(env: &Env, config: &SaleConfig) -> bool {
        env.ledger().timestamp() >= config.opening_time
    }

    pub fn has_closed(env: &Env) -> bool {
        env.ledger().timestamp() > Self::closing_time(env)
    }

    /// Move the closing time forward (owner only). The window can only grow,
    /// and only while the sale has not ended.
    pub fn extend_closing_time(env: &Env, caller: &Address, new_closing: u64) -> Result<(), Error> {
        OwnershipManager::verify_owner(env, caller)?;

        let config = SaleConfig::load(env)?;
        if Self::has_closed(env) || CapManager::cap_reached(env, config.cap) {
            return Err(Error::SaleEnded);
        }

        let current = Self::closing_time(env);
        if new_closing <= current {
            return Err(Error::InvalidTimeRange);
        }

        env.storage()
            .instance()
            .set(&DataKey::ClosingTime, &new_closing);

        env.events()
            .publish((Symbol::new(env, "extend"),), (current, new_closing));

        Ok(())
    }
}
