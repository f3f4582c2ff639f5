use soroban_sdk::{contracttype, Address, Env};

use crate::errors::CrowdfundrError;
use crate::ledger::{ProjectLedger, ProjectRecord};

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,            // -> Address
    Token,            // -> Address, carries the value attached to credits
    Project(Address), // owner -> ProjectRecord
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Result<Address, CrowdfundrError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(CrowdfundrError::NotInitialized)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    bump_instance(env);
}

pub fn get_token(env: &Env) -> Result<Address, CrowdfundrError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(CrowdfundrError::NotInitialized)
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
    bump_instance(env);
}

pub fn has_project(env: &Env, owner: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Project(owner.clone()))
}

pub fn load_project(env: &Env, owner: &Address) -> Result<ProjectLedger, CrowdfundrError> {
    let key = DataKey::Project(owner.clone());
    let record: ProjectRecord = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(CrowdfundrError::NotFound)?;
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    Ok(ProjectLedger::from_record(record))
}

pub fn save_project(env: &Env, project: &ProjectLedger) {
    let record = project.record();
    let key = DataKey::Project(record.owner.clone());
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
