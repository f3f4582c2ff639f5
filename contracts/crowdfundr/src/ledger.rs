use soroban_sdk::{contracttype, Address, Env, Map, String, Vec};

use crate::errors::CrowdfundrError;

/// Whether a project may be debited by its owner.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FundingState {
    /// `balance < target_amount`: debits are refused.
    UnderTarget,
    /// `balance >= target_amount`: the owner may debit.
    Funded,
}

/// Stored form of a project, also handed out by
/// [`crate::CrowdfundrManager::get_project`] as a read-only snapshot.
///
/// A record cannot be turned back into a [`ProjectLedger`] outside this
/// crate, so editing one has no effect on any project.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectRecord {
    pub name: String,
    pub owner: Address,
    pub target_amount: i128,
    pub balance: i128,
    pub contributions: Map<Address, i128>,
    pub depositors: Vec<Address>,
    pub debited: i128,
}

/// Balance ledger of a single crowdfunding project.
///
/// Only [`crate::CrowdfundrManager::create_crowdfundr`] opens a ledger; there
/// is no public constructor or value conversion. Reads on a ledger are
/// unrestricted; owner gating of reads is applied by the manager.
///
/// `balance == sum(contributions) - debited` holds after every operation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProjectLedger {
    record: ProjectRecord,
}

impl ProjectLedger {
    /// Direct construction with the legacy five-argument shape.
    ///
    /// There is no direct path to a ledger; this always fails with
    /// [`CrowdfundrError::InvalidConstruction`].
    pub fn construct(
        _env: &Env,
        _name: String,
        _target_amount: i128,
        _owner: Address,
        _factory: Address,
        _initial_amount: i128,
    ) -> Result<Self, CrowdfundrError> {
        Err(CrowdfundrError::InvalidConstruction)
    }

    pub(crate) fn open(
        env: &Env,
        name: String,
        target_amount: i128,
        owner: Address,
        initial_amount: i128,
    ) -> Result<Self, CrowdfundrError> {
        if target_amount <= 0 || initial_amount < 0 {
            return Err(CrowdfundrError::InvalidAmount);
        }

        let mut ledger = ProjectLedger {
            record: ProjectRecord {
                name,
                owner: owner.clone(),
                target_amount,
                balance: 0,
                contributions: Map::new(env),
                depositors: Vec::new(env),
                debited: 0,
            },
        };
        if initial_amount > 0 {
            ledger.credit(&owner, initial_amount)?;
        }
        Ok(ledger)
    }

    /// Rebuild a ledger from storage. Only records written by the manager
    /// may come through here.
    pub(crate) fn from_record(record: ProjectRecord) -> Self {
        ProjectLedger { record }
    }

    pub(crate) fn record(&self) -> &ProjectRecord {
        &self.record
    }

    /// Snapshot of the ledger state.
    pub fn to_record(&self) -> ProjectRecord {
        self.record.clone()
    }

    /// Record a deposit of `amount` by `depositor`.
    ///
    /// Contributions accumulate; a depositor is appended to the address list
    /// on its first deposit only.
    pub fn credit(&mut self, depositor: &Address, amount: i128) -> Result<(), CrowdfundrError> {
        if amount <= 0 {
            return Err(CrowdfundrError::InvalidAmount);
        }

        let previous = self.record.contributions.get(depositor.clone());
        let contribution = previous
            .unwrap_or(0)
            .checked_add(amount)
            .ok_or(CrowdfundrError::Overflow)?;
        let balance = self
            .record
            .balance
            .checked_add(amount)
            .ok_or(CrowdfundrError::Overflow)?;

        self.record.balance = balance;
        self.record.contributions.set(depositor.clone(), contribution);
        if previous.is_none() {
            self.record.depositors.push_back(depositor.clone());
        }
        Ok(())
    }

    /// Withdraw `amount` from the pool on behalf of the owner.
    ///
    /// Only allowed once the target is reached. Contributions are left as
    /// recorded.
    pub fn debit(&mut self, caller: &Address, amount: i128) -> Result<(), CrowdfundrError> {
        if *caller != self.record.owner {
            return Err(CrowdfundrError::Unauthorized);
        }
        if self.state() != FundingState::Funded {
            return Err(CrowdfundrError::NotFunded);
        }
        if amount <= 0 {
            return Err(CrowdfundrError::InvalidAmount);
        }
        if amount > self.record.balance {
            return Err(CrowdfundrError::InsufficientBalance);
        }

        self.record.balance -= amount;
        self.record.debited += amount;
        Ok(())
    }

    /// Projects cannot be deregistered by anyone.
    pub fn deregister(&self, _caller: &Address) -> Result<(), CrowdfundrError> {
        Err(CrowdfundrError::Forbidden)
    }

    /// Current funding state, derived from balance and target.
    pub fn state(&self) -> FundingState {
        if self.record.balance >= self.record.target_amount {
            FundingState::Funded
        } else {
            FundingState::UnderTarget
        }
    }

    /// Name given at creation.
    pub fn get_project_name(&self) -> String {
        self.record.name.clone()
    }

    /// Owner given at creation.
    pub fn get_project_owner(&self) -> Address {
        self.record.owner.clone()
    }

    /// Funds currently held for the project.
    pub fn get_project_balance(&self) -> i128 {
        self.record.balance
    }

    /// The funding target.
    pub fn get_project_maximum_balance(&self) -> i128 {
        self.record.target_amount
    }

    /// Depositors in the order of their first contribution.
    pub fn get_addresses(&self) -> Vec<Address> {
        self.record.depositors.clone()
    }

    /// Total credited by `depositor`, or 0 if it never deposited.
    pub fn get_balance_of_depositor(&self, depositor: &Address) -> i128 {
        self.record.contributions.get(depositor.clone()).unwrap_or(0)
    }

    /// Total paid out to the owner so far.
    pub fn get_total_debited(&self) -> i128 {
        self.record.debited
    }
}
