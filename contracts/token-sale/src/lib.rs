#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, Symbol, Vec};

mod access;
mod cap;
mod contributions;
mod interface;
mod purchase;
mod recovery;
mod types;
mod window;

use crate::access::OwnershipManager;
use crate::cap::CapManager;
use crate::contributions::ContributionManager;
use crate::purchase::PurchaseManager;
use crate::recovery::RecoveryManager;
use crate::types::{DataKey, Error, SaleConfig};
use crate::window::WindowManager;

#[contract]
pub struct TokenSaleContract;

#[contractimpl]
impl TokenSaleContract {
    /// Initialize the sale with its fixed parameters
    pub fn initialize(
        env: Env,
        owner: Address,
        sale_token: Address,
        payment_token: Address,
        wallet: Address,
        opening_time: u64,
        closing_time: u64,
        rate: i128,
        cap: i128,
        minimum_contribution: i128,
    ) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Config) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();

        let now = env.ledger().timestamp();
        if opening_time < now || closing_time <= opening_time {
            return Err(Error::InvalidTimeRange);
        }
        if rate <= 0 || cap <= 0 || minimum_contribution <= 0 {
            return Err(Error::InvalidAmount);
        }

        let config = SaleConfig {
            sale_token,
            payment_token,
            wallet,
            opening_time,
            closing_time,
            rate,
            cap,
            minimum_contribution,
        };
        env.storage().instance().set(&DataKey::Config, &config);

        OwnershipManager::init(&env, &owner);
        WindowManager::init(&env, &config);
        CapManager::init(&env);
        ContributionManager::init(&env);

        env.events().publish(
            (Symbol::new(&env, "init"),),
            (owner, opening_time, closing_time, rate, cap),
        );

        Ok(())
    }

    /// Direct purchase: the buyer pays and is credited with the tokens
    pub fn purchase(env: Env, buyer: Address, amount: i128) -> Result<i128, Error> {
        buyer.require_auth();
        PurchaseManager::execute(&env, buyer.clone(), buyer, amount)
    }

    /// Sponsored purchase: the purchaser pays, the beneficiary is credited
    pub fn purchase_for(
        env: Env,
        purchaser: Address,
        beneficiary: Address,
        amount: i128,
    ) -> Result<i128, Error> {
        purchaser.require_auth();
        PurchaseManager::execute(&env, purchaser, beneficiary, amount)
    }

    /// Move the closing time forward (owner only)
    pub fn extend_closing_time(env: Env, caller: Address, new_closing: u64) -> Result<(), Error> {
        caller.require_auth();
        WindowManager::extend_closing_time(&env, &caller, new_closing)
    }

    /// Reclaim tokens stranded on the contract (owner only)
    pub fn recover_token(
        env: Env,
        caller: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), Error> {
        caller.require_auth();
        RecoveryManager::recover_token(&env, &caller, &token, amount)
    }

    /// Hand the owner role to another account (owner only)
    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        caller.require_auth();
        OwnershipManager::transfer_ownership(&env, &caller, &new_owner)
    }

    // View functions

    pub fn get_config(env: Env) -> Result<SaleConfig, Error> {
        SaleConfig::load(&env)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        OwnershipManager::owner(&env)
    }

    pub fn opening_time(env: Env) -> Result<u64, Error> {
        Ok(SaleConfig::load(&env)?.opening_time)
    }

    /// Current closing time, including any owner extensions
    pub fn closing_time(env: Env) -> u64 {
        WindowManager::closing_time(&env)
    }

    pub fn rate(env: Env) -> Result<i128, Error> {
        Ok(SaleConfig::load(&env)?.rate)
    }

    pub fn cap(env: Env) -> Result<i128, Error> {
        Ok(SaleConfig::load(&env)?.cap)
    }

    pub fn minimum_contribution(env: Env) -> Result<i128, Error> {
        Ok(SaleConfig::load(&env)?.minimum_contribution)
    }

    pub fn wallet(env: Env) -> Result<Address, Error> {
        Ok(SaleConfig::load(&env)?.wallet)
    }

    pub fn value_raised(env: Env) -> i128 {
        CapManager::value_raised(&env)
    }

    pub fn started(env: Env) -> Result<bool, Error> {
        PurchaseManager::started(&env)
    }

    pub fn ended(env: Env) -> Result<bool, Error> {
        PurchaseManager::ended(&env)
    }

    pub fn is_open(env: Env) -> Result<bool, Error> {
        PurchaseManager::is_open(&env)
    }

    pub fn cap_reached(env: Env) -> Result<bool, Error> {
        let config = SaleConfig::load(&env)?;
        Ok(CapManager::cap_reached(&env, config.cap))
    }

    pub fn contributors_length(env: Env) -> u32 {
        ContributionManager::contributors_length(&env)
    }

    pub fn contributors(env: Env) -> Vec<Address> {
        ContributionManager::contributors(&env)
    }

    pub fn token_balance(env: Env, investor: Address) -> i128 {
        ContributionManager::token_balance(&env, &investor)
    }

    pub fn value_contributed(env: Env, investor: Address) -> i128 {
        ContributionManager::value_contributed(&env, &investor)
    }
}
