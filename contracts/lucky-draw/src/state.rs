use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<Config> = Item::new("config");

/// Active draws by id. A resolved draw is removed together with its STAKES
/// prefix, after which the id may be created again from scratch.
pub const DRAWS: Map<u32, Draw> = Map::new("draws");

/// Accumulated stake per (draw, participant). Entries only grow while the
/// draw is active.
pub const STAKES: Map<(u32, &Addr), Uint128> = Map::new("stakes");

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    /// Share of a resolved pool retained for the owner, 0..=100.
    pub fee_percent: u16,
    /// Native denom accepted for funding, stakes and payouts.
    pub denom: String,
    pub create_policy: CreatePolicy,
}

/// Who may open new draws.
#[cw_serde]
pub enum CreatePolicy {
    Anyone,
    OwnerOnly,
}

#[cw_serde]
pub struct Draw {
    pub min_entry_amount: Uint128,
    /// Pool size at which the draw resolves.
    pub entry_amount_limit: Uint128,
    pub pool_sum: Uint128,
    /// Number of distinct addresses with a positive stake entry.
    pub participant_count: u32,
}
