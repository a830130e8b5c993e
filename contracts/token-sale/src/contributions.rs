use crate::types::{Contribution, DataKey, Error};
use soroban_sdk::{Address, Env, Vec};

pub struct ContributionManager;

impl ContributionManager {
    pub fn init(env: &Env) {
        env.storage()
            .instance()
            .set(&DataKey::Contributors, &Vec::<Address>::new(env));
    }

    /// Credit an accepted purchase to an investor. The first contribution
    /// appends the investor to the contributor list; the list never shrinks
    /// and an address appears in it at most once.
    pub fn record(env: &Env, investor: &Address, value: i128, tokens: i128) -> Result<(), Error> {
        let mut entry = Self::entry(env, investor);
        entry.value_contributed = entry
            .value_contributed
            .checked_add(value)
            .ok_or(Error::MathOverflow)?;
        entry.token_balance = entry
            .token_balance
            .checked_add(tokens)
            .ok_or(Error::MathOverflow)?;

        env.storage()
            .instance()
            .set(&DataKey::Contribution(investor.clone()), &entry);

        let mut contributors = Self::contributors(env);
        if !contributors.contains(investor) {
            contributors.push_back(investor.clone());
            env.storage()
                .instance()
                .set(&DataKey::Contributors, &contributors);
        }

        Ok(())
    }

    /// Tokens credited to an investor, zero for unknown addresses
    pub fn token_balance(env: &Env, investor: &Address) -> i128 {
        Self::entry(env, investor).token_balance
    }

    /// Value accepted from an investor, zero for unknown addresses
    pub fn value_contributed(env: &Env, investor: &Address) -> i128 {
        Self::entry(env, investor).value_contributed
    }

    pub fn contributors(env: &Env) -> Vec<Address> {
        env.storage()
            .instance()
            .get(&DataKey::Contributors)
            .unwrap_or_else(|| Vec::new(env))
    }

    pub fn contributors_length(env: &Env) -> u32 {
        Self::contributors(env).len()
    }

    fn entry(env: &Env, investor: &Address) -> Contribution {
        env.storage()
            .instance()
            .get(&DataKey::Contribution(investor.clone()))
            .unwrap_or(Contribution {
                token_balance: 0,
                value_contributed: 0,
            })
    }
}
