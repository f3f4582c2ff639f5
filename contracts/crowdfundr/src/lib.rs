#![no_std]

mod errors;
mod events;
mod ledger;
mod storage;
mod token;

pub use errors::CrowdfundrError;
pub use ledger::{FundingState, ProjectLedger, ProjectRecord};

use events::{
    AdminChangedEvent, CreditEvent, DebitEvent, InitializedEvent, ProjectCreatedEvent,
    UpgradedEvent,
};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String, Vec};
use token::transfer;

#[contract]
pub struct CrowdfundrManager;

/// Owner gate the manager puts in front of every per-project operation
/// other than `credit`.
fn require_owner(owner: &Address, caller: &Address) -> Result<(), CrowdfundrError> {
    if caller != owner {
        return Err(CrowdfundrError::Unauthorized);
    }
    caller.require_auth();
    Ok(())
}

fn load_for_owner(
    env: &Env,
    owner: &Address,
    caller: &Address,
) -> Result<ProjectLedger, CrowdfundrError> {
    require_owner(owner, caller)?;
    storage::load_project(env, owner)
}

#[contractimpl]
impl CrowdfundrManager {
    /// Initialize the manager with an admin and the token that carries
    /// deposited value.
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), CrowdfundrError> {
        if storage::is_initialized(&env) {
            return Err(CrowdfundrError::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_admin(&env, &admin);
        storage::set_token(&env, &token);

        InitializedEvent { admin, token }.publish(&env);
        Ok(())
    }

    /// Open a project for `owner`, optionally seeded with `initial_amount`
    /// taken from the owner. Each owner holds at most one project.
    pub fn create_crowdfundr(
        env: Env,
        name: String,
        owner: Address,
        target_amount: i128,
        initial_amount: i128,
    ) -> Result<(), CrowdfundrError> {
        let token = storage::get_token(&env)?;
        owner.require_auth();

        if storage::has_project(&env, &owner) {
            return Err(CrowdfundrError::DuplicateProject);
        }

        let project =
            ProjectLedger::open(&env, name.clone(), target_amount, owner.clone(), initial_amount)?;

        if initial_amount > 0 {
            transfer(
                &env,
                &token,
                &owner,
                &env.current_contract_address(),
                &initial_amount,
            );
        }
        storage::save_project(&env, &project);

        ProjectCreatedEvent {
            owner,
            name,
            target_amount,
            initial_amount,
        }
        .publish(&env);
        Ok(())
    }

    /// Deposit `amount` from `depositor` into the project owned by `owner`.
    pub fn credit(
        env: Env,
        owner: Address,
        depositor: Address,
        amount: i128,
    ) -> Result<(), CrowdfundrError> {
        let token = storage::get_token(&env)?;
        depositor.require_auth();

        let mut project = storage::load_project(&env, &owner)?;
        project.credit(&depositor, amount)?;

        transfer(
            &env,
            &token,
            &depositor,
            &env.current_contract_address(),
            &amount,
        );
        storage::save_project(&env, &project);

        CreditEvent {
            owner,
            depositor,
            amount,
            balance: project.get_project_balance(),
        }
        .publish(&env);
        Ok(())
    }

    /// Pay `amount` out of the project to its owner. Requires the target to
    /// have been reached.
    pub fn debit(
        env: Env,
        owner: Address,
        caller: Address,
        amount: i128,
    ) -> Result<(), CrowdfundrError> {
        let token = storage::get_token(&env)?;
        let mut project = load_for_owner(&env, &owner, &caller)?;
        project.debit(&caller, amount)?;

        transfer(
            &env,
            &token,
            &env.current_contract_address(),
            &owner,
            &amount,
        );
        storage::save_project(&env, &project);

        DebitEvent {
            owner,
            amount,
            balance: project.get_project_balance(),
        }
        .publish(&env);
        Ok(())
    }

    /// Always fails: a project stays registered for the life of the manager.
    pub fn deregister(env: Env, owner: Address, caller: Address) -> Result<(), CrowdfundrError> {
        load_for_owner(&env, &owner, &caller)?.deregister(&caller)
    }

    /// Get project name (owner only)
    pub fn get_project_name(
        env: Env,
        owner: Address,
        caller: Address,
    ) -> Result<String, CrowdfundrError> {
        Ok(load_for_owner(&env, &owner, &caller)?.get_project_name())
    }

    /// Get project owner (owner only)
    pub fn get_project_owner(
        env: Env,
        owner: Address,
        caller: Address,
    ) -> Result<Address, CrowdfundrError> {
        Ok(load_for_owner(&env, &owner, &caller)?.get_project_owner())
    }

    /// Get current project balance (owner only)
    pub fn get_project_balance(
        env: Env,
        owner: Address,
        caller: Address,
    ) -> Result<i128, CrowdfundrError> {
        Ok(load_for_owner(&env, &owner, &caller)?.get_project_balance())
    }

    /// Get the funding target (owner only)
    pub fn get_project_maximum_balance(
        env: Env,
        owner: Address,
        caller: Address,
    ) -> Result<i128, CrowdfundrError> {
        Ok(load_for_owner(&env, &owner, &caller)?.get_project_maximum_balance())
    }

    /// Get depositors in first-contribution order (owner only)
    pub fn get_addresses(
        env: Env,
        owner: Address,
        caller: Address,
    ) -> Result<Vec<Address>, CrowdfundrError> {
        Ok(load_for_owner(&env, &owner, &caller)?.get_addresses())
    }

    /// Get the total credited by `depositor` (owner only)
    pub fn get_balance_of_depositor(
        env: Env,
        owner: Address,
        caller: Address,
        depositor: Address,
    ) -> Result<i128, CrowdfundrError> {
        Ok(load_for_owner(&env, &owner, &caller)?.get_balance_of_depositor(&depositor))
    }

    /// Get whether the project can be debited (owner only)
    pub fn get_project_state(
        env: Env,
        owner: Address,
        caller: Address,
    ) -> Result<FundingState, CrowdfundrError> {
        Ok(load_for_owner(&env, &owner, &caller)?.state())
    }

    /// Read-only snapshot of the whole project.
    pub fn get_project(
        env: Env,
        owner: Address,
        caller: Address,
    ) -> Result<ProjectRecord, CrowdfundrError> {
        Ok(load_for_owner(&env, &owner, &caller)?.to_record())
    }

    /// Check whether `owner` already has a project
    pub fn has_project(env: Env, owner: Address) -> bool {
        storage::has_project(&env, &owner)
    }

    /// Get admin address
    pub fn get_admin(env: Env) -> Result<Address, CrowdfundrError> {
        storage::get_admin(&env)
    }

    /// Get the token used for deposits and payouts
    pub fn get_token(env: Env) -> Result<Address, CrowdfundrError> {
        storage::get_token(&env)
    }

    /// Upgrade the contract WASM to a new hash.
    ///
    /// Only the stored admin may call this. Emits [`UpgradedEvent`] on success.
    pub fn upgrade(
        env: Env,
        caller: Address,
        new_wasm_hash: BytesN<32>,
    ) -> Result<(), CrowdfundrError> {
        let admin = storage::get_admin(&env)?;
        if caller != admin {
            return Err(CrowdfundrError::Unauthorized);
        }
        caller.require_auth();
        env.deployer()
            .update_current_contract_wasm(new_wasm_hash.clone());
        UpgradedEvent {
            admin: caller,
            new_wasm_hash,
        }
        .publish(&env);
        Ok(())
    }

    /// Transfer the admin role to `new_admin`.
    ///
    /// Requires authorization from the current admin. Emits [`AdminChangedEvent`].
    pub fn set_admin(
        env: Env,
        current_admin: Address,
        new_admin: Address,
    ) -> Result<(), CrowdfundrError> {
        let stored_admin = storage::get_admin(&env)?;
        if current_admin != stored_admin {
            return Err(CrowdfundrError::Unauthorized);
        }
        current_admin.require_auth();
        storage::set_admin(&env, &new_admin);
        AdminChangedEvent {
            old_admin: current_admin,
            new_admin,
        }
        .publish(&env);
        Ok(())
    }
}
