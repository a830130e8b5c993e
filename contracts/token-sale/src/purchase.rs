use crate::cap::CapManager;
use crate::contributions::ContributionManager;
use crate::types::{Error, SaleConfig};
use crate::window::WindowManager;
use soroban_sdk::{token, Address, Env, Symbol};

pub struct PurchaseManager;

impl PurchaseManager {
    pub fn started(env: &Env) -> Result<bool, Error> {
        let config = SaleConfig::load(env)?;
        Ok(WindowManager::has_opened(env, &config))
    }

    /// The sale ends when the time window elapses or the cap is reached,
    /// whichever comes first.
    pub fn ended(env: &Env) -> Result<bool, Error> {
        let config = SaleConfig::load(env)?;
        Ok(WindowManager::has_closed(env) || CapManager::cap_reached(env, config.cap))
    }

    pub fn is_open(env: &Env) -> Result<bool, Error> {
        let config = SaleConfig::load(env)?;
        Ok(Self::open_now(env, &config))
    }

    /// Purchase pipeline shared by direct and sponsored purchases. The
    /// purchaser pays, the beneficiary is credited; only the beneficiary is
    /// ever persisted. Returns the number of tokens credited.
    pub fn execute(
        env: &Env,
        purchaser: Address,
        beneficiary: Address,
        value: i128,
    ) -> Result<i128, Error> {
        let config = SaleConfig::load(env)?;

        if !Self::open_now(env, &config) {
            return Err(Error::SaleNotOpen);
        }
        if value < config.minimum_contribution {
            return Err(Error::BelowMinimumContribution);
        }

        CapManager::check_and_accept(env, config.cap, value)?;

        // Rate is a plain multiplier, so every accepted value converts
        // exactly; there is no remainder to truncate.
        let tokens = value.checked_mul(config.rate).ok_or(Error::MathOverflow)?;

        ContributionManager::record(env, &beneficiary, value, tokens)?;

        // Accounting state is committed before any external token call
        token::Client::new(env, &config.sale_token).transfer(
            &env.current_contract_address(),
            &beneficiary,
            &tokens,
        );
        token::Client::new(env, &config.payment_token).transfer(
            &purchaser,
            &config.wallet,
            &value,
        );

        env.events().publish(
            (Symbol::new(env, "purchase"), beneficiary),
            (purchaser, value, tokens),
        );

        Ok(tokens)
    }

    fn open_now(env: &Env, config: &SaleConfig) -> bool {
        WindowManager::has_opened(env, config)
            && !WindowManager::has_closed(env)
            && !CapManager::cap_reached(env, config.cap)
    }
}
