use crate::types::{DataKey, Error};
use soroban_sdk::{Address, Env, Symbol};

pub struct OwnershipManager;

impl OwnershipManager {
    pub fn init(env: &Env, owner: &Address) {
        env.storage().instance().set(&DataKey::Owner, owner);
    }

    pub fn owner(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)
    }

    /// Verify the caller is the stored owner
    pub fn verify_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        let owner = Self::owner(env)?;
        if caller != &owner {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    /// Hand the owner role to another account
    pub fn transfer_ownership(env: &Env, caller: &Address, new_owner: &Address) -> Result<(), Error> {
        Self::verify_owner(env, caller)?;

        env.storage().instance().set(&DataKey::Owner, new_owner);

        env.events().publish(
            (Symbol::new(env, "set_owner"),),
            (caller.clone(), new_owner.clone()),
        );

        Ok(())
    }
}
