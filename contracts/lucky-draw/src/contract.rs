use cosmwasm_std::{
    entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{Config, CreatePolicy, CONFIG};

const CONTRACT_NAME: &str = "crates.io:lucky-draw";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.fee_percent > 100 {
        return Err(ContractError::InvalidFeePercent {
            fee_percent: msg.fee_percent,
        });
    }

    let owner = match msg.owner {
        Some(addr) => deps.api.addr_validate(&addr)?,
        None => info.sender.clone(),
    };

    let config = Config {
        owner: owner.clone(),
        fee_percent: msg.fee_percent,
        denom: msg.denom,
        create_policy: msg.create_policy.unwrap_or(CreatePolicy::Anyone),
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "lucky-draw")
        .add_attribute("owner", owner.to_string())
        .add_attribute("fee_percent", config.fee_percent.to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateDraw {
            query_id,
            draw_id,
            min_entry_amount,
            entry_amount_limit,
        } => execute::create_draw(
            deps,
            info,
            query_id,
            draw_id,
            min_entry_amount,
            entry_amount_limit,
        ),
        ExecuteMsg::LuckRoll { query_id, draw_id } => {
            execute::luck_roll(deps, env, info, query_id, draw_id)
        }
        ExecuteMsg::TopUp {} => execute::top_up(deps, info),
        ExecuteMsg::Deposit {} => execute::deposit(deps, info),
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Owner {} => query::query_owner(deps),
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::Draw { draw_id } => query::query_draw(deps, draw_id),
        QueryMsg::Storage {} => query::query_storage(deps),
        QueryMsg::Draws { start_after, limit } => query::query_draws(deps, start_after, limit),
        QueryMsg::Participants {
            draw_id,
            start_after,
            limit,
        } => query::query_participants(deps, draw_id, start_after, limit),
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "Cannot migrate from different contract type".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
