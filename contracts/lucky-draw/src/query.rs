use cosmwasm_std::{to_json_binary, Binary, Deps, Order, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{
    DrawEntry, DrawsResponse, OwnerResponse, ParticipantInfo, ParticipantsResponse,
    StorageResponse,
};
use crate::state::{CONFIG, DRAWS, STAKES};

pub fn query_owner(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&OwnerResponse {
        owner: config.owner,
    })
}

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

/// A resolved or never-created draw answers None rather than an error.
pub fn query_draw(deps: Deps, draw_id: u32) -> StdResult<Binary> {
    let draw = DRAWS.may_load(deps.storage, draw_id)?;
    to_json_binary(&draw)
}

/// Raw-storage view: owner, fee percent and every active draw.
pub fn query_storage(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let draws: Vec<DrawEntry> = DRAWS
        .range(deps.storage, None, None, Order::Ascending)
        .map(|r| r.map(|(draw_id, draw)| DrawEntry { draw_id, draw }))
        .collect::<StdResult<_>>()?;

    to_json_binary(&StorageResponse {
        owner: config.owner,
        fee_percent: config.fee_percent,
        draws,
    })
}

pub fn query_draws(
    deps: Deps,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(20).min(100) as usize;
    let start = start_after.map(Bound::exclusive);

    let draws: Vec<DrawEntry> = DRAWS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|r| r.map(|(draw_id, draw)| DrawEntry { draw_id, draw }))
        .collect::<StdResult<_>>()?;

    to_json_binary(&DrawsResponse { draws })
}

pub fn query_participants(
    deps: Deps,
    draw_id: u32,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(100).min(100) as usize;
    let start_addr = start_after
        .map(|s| deps.api.addr_validate(&s))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let participants: Vec<ParticipantInfo> = STAKES
        .prefix(draw_id)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|r| r.map(|(address, staked)| ParticipantInfo { address, staked }))
        .collect::<StdResult<_>>()?;

    to_json_binary(&ParticipantsResponse {
        draw_id,
        participants,
    })
}
