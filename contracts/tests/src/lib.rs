#![cfg(test)]
extern crate std;

use soroban_sdk::{
    testutils::Address as _,
    token::{StellarAssetClient, TokenClient},
    vec, Address, Env, Map, String,
};

use crowdfundr::{
    CrowdfundrError, CrowdfundrManager, CrowdfundrManagerClient as ManagerClient, FundingState,
    ProjectLedger, ProjectRecord,
};

#[test]
fn test_crowdfundr_e2e() {
    let env = Env::default();

    // Automatically handles authorizations for all contract calls in the test
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let owner = Address::generate(&env);
    let backer_a = Address::generate(&env);
    let backer_b = Address::generate(&env);

    let asset = env.register_stellar_asset_contract_v2(admin.clone());
    let token = TokenClient::new(&env, &asset.address());
    let token_admin = StellarAssetClient::new(&env, &asset.address());
    for account in [&owner, &backer_a, &backer_b] {
        token_admin.mint(account, &500i128);
    }

    let manager_id = env.register(CrowdfundrManager, ());
    let manager = ManagerClient::new(&env, &manager_id);
    manager.initialize(&admin, &token.address);

    // Ledgers only come out of the manager.
    assert_eq!(
        ProjectLedger::construct(
            &env,
            String::from_str(&env, "Direct"),
            100i128,
            owner.clone(),
            owner.clone(),
            50i128,
        ),
        Err(CrowdfundrError::InvalidConstruction)
    );

    manager.create_crowdfundr(
        &String::from_str(&env, "Community Garden"),
        &owner,
        &100i128,
        &50i128,
    );

    manager.credit(&owner, &backer_a, &5i128);
    manager.credit(&owner, &backer_b, &10i128);
    assert_eq!(manager.get_project_balance(&owner, &owner), 65i128);
    assert_eq!(manager.get_balance_of_depositor(&owner, &owner, &backer_a), 5i128);
    assert_eq!(manager.get_balance_of_depositor(&owner, &owner, &backer_b), 10i128);

    manager.credit(&owner, &backer_a, &10i128);
    assert_eq!(manager.get_project_balance(&owner, &owner), 75i128);
    assert_eq!(
        manager.try_debit(&owner, &owner, &20i128),
        Err(Ok(CrowdfundrError::NotFunded))
    );

    manager.credit(&owner, &backer_b, &40i128);
    assert_eq!(manager.get_project_balance(&owner, &owner), 115i128);
    assert_eq!(manager.get_project_state(&owner, &owner), FundingState::Funded);

    manager.debit(&owner, &owner, &20i128);
    assert_eq!(manager.get_project_balance(&owner, &owner), 95i128);
    assert_eq!(token.balance(&owner), 470i128);
    assert_eq!(token.balance(&manager_id), 95i128);

    assert_eq!(
        manager.try_deregister(&owner, &owner),
        Err(Ok(CrowdfundrError::Forbidden))
    );
    assert_eq!(
        manager.try_get_addresses(&owner, &backer_a),
        Err(Ok(CrowdfundrError::Unauthorized))
    );

    let snapshot = manager.get_project(&owner, &owner);
    assert_eq!(
        snapshot.depositors,
        vec![&env, owner.clone(), backer_a.clone(), backer_b.clone()]
    );
    assert_eq!(snapshot.contributions.get(backer_a.clone()), Some(15i128));
    assert_eq!(snapshot.contributions.get(backer_b.clone()), Some(50i128));
    assert_eq!(snapshot.debited, 20i128);

    std::println!("crowdfundr e2e passed");
}

#[test]
fn test_record_built_outside_the_manager_moves_nothing() {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let owner = Address::generate(&env);

    let asset = env.register_stellar_asset_contract_v2(admin.clone());
    let token = TokenClient::new(&env, &asset.address());
    StellarAssetClient::new(&env, &asset.address()).mint(&owner, &100i128);

    let manager_id = env.register(CrowdfundrManager, ());
    let manager = ManagerClient::new(&env, &manager_id);
    manager.initialize(&admin, &token.address);
    manager.create_crowdfundr(
        &String::from_str(&env, "Small"),
        &owner,
        &100i128,
        &10i128,
    );

    // Records are plain data: a hand-made one claiming a funded pool exists
    // only in the caller's memory. There is no way to turn it into a ledger.
    let forged = ProjectRecord {
        name: String::from_str(&env, "Small"),
        owner: owner.clone(),
        target_amount: 1i128,
        balance: 1_000_000i128,
        contributions: Map::new(&env),
        depositors: soroban_sdk::Vec::new(&env),
        debited: 0i128,
    };
    assert_ne!(manager.get_project(&owner, &owner), forged);

    assert_eq!(
        manager.try_debit(&owner, &owner, &500i128),
        Err(Ok(CrowdfundrError::NotFunded))
    );
    assert_eq!(manager.get_project_balance(&owner, &owner), 10i128);
    assert_eq!(token.balance(&owner), 90i128);
}
