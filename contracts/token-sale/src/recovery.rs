use crate::access::OwnershipManager;
use crate::types::Error;
use soroban_sdk::{token, Address, Env, Symbol};

pub struct RecoveryManager;

impl RecoveryManager {
    /// Reclaim tokens stranded on the contract (owner only). Any token
    /// address is accepted, including the sale token itself.
    pub fn recover_token(
        env: &Env,
        caller: &Address,
        token_address: &Address,
        amount: i128,
    ) -> Result<(), Error> {
        OwnershipManager::verify_owner(env, caller)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let owner = OwnershipManager::owner(env)?;
        token::Client::new(env, token_address).transfer(
            &env.current_contract_address(),
            &owner,
            &amount,
        );

        env.events().publish(
            (Symbol::new(env, "recover"),),
            (token_address.clone(), amount),
        );

        Ok(())
    }
}
