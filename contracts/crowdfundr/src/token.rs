use soroban_sdk::{token, Address, Env};

/// Move `amount` of `token` between two addresses. `from` must have
/// authorized the transfer, or be the current contract.
pub fn transfer(env: &Env, token: &Address, from: &Address, to: &Address, amount: &i128) {
    token::Client::new(env, token).transfer(from, to, amount);
}
