use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundrError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    NotFunded = 4,
    Forbidden = 5,
    InvalidConstruction = 6,
    NotFound = 7,
    DuplicateProject = 8,
    InsufficientBalance = 9,
    InvalidAmount = 10,
    Overflow = 11,
}

impl CrowdfundrError {
    /// Revert reason reported to callers. Clients match on these strings, so
    /// they must not change.
    pub const fn message(&self) -> &'static str {
        match self {
            CrowdfundrError::NotInitialized => "contract is not initialized",
            CrowdfundrError::AlreadyInitialized => "contract is already initialized",
            CrowdfundrError::Unauthorized => "You're not the owner of the contract",
            CrowdfundrError::NotFunded => "you can't debit ether from project.",
            CrowdfundrError::Forbidden => "you can't deregister project.",
            CrowdfundrError::InvalidConstruction => "You need to use the factory",
            CrowdfundrError::NotFound => "project not found",
            CrowdfundrError::DuplicateProject => "project already exists for owner",
            CrowdfundrError::InsufficientBalance => "insufficient project balance",
            CrowdfundrError::InvalidAmount => "amount must be positive",
            CrowdfundrError::Overflow => "amount overflows project balance",
        }
    }
}
