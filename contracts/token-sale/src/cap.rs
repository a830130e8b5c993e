use crate::types::{DataKey, Error};
use soroban_sdk::Env;

pub struct CapManager;

impl CapManager {
    pub fn init(env: &Env) {
        env.storage().instance().set(&DataKey::ValueRaised, &0i128);
    }

    /// Cumulative value accepted so far
    pub fn value_raised(env: &Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::ValueRaised)
            .unwrap_or(0)
    }

    pub fn cap_reached(env: &Env, cap: i128) -> bool {
        Self::value_raised(env) >= cap
    }

    /// Accept `value` against the cap. A purchase that would push the running
    /// total past the cap is rejected whole; no partial fill.
    pub fn check_and_accept(env: &Env, cap: i128, value: i128) -> Result<i128, Error> {
        let raised = Self::value_raised(env);
        let new_total = raised.checked_add(value).ok_or(Error::MathOverflow)?;

        if new_total > cap {
            return Err(Error::CapExceeded);
        }

        env.storage()
            .instance()
            .set(&DataKey::ValueRaised, &new_total);

        Ok(new_total)
    }
}
