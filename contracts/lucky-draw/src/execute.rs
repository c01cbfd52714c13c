use cosmwasm_std::{
    coins, Addr, BankMsg, DepsMut, Env, Event, MessageInfo, Order, Response, StdResult, Uint128,
};

use crate::error::ContractError;
use crate::random;
use crate::state::{Config, CreatePolicy, Draw, CONFIG, DRAWS, STAKES};

/// Fixed processing deduction retained from a refunded below-minimum stake,
/// in base units of the configured denom.
pub const STAKE_REFUND_FEE: u128 = 5_000;

/// Total attached amount of the configured denom.
fn attached_amount(info: &MessageInfo, denom: &str) -> Uint128 {
    info.funds
        .iter()
        .filter(|c| c.denom == denom)
        .map(|c| c.amount)
        .sum()
}

/// Reject messages carrying coins of any other denom; the contract would
/// otherwise retain them with no path to refund.
fn assert_single_denom(info: &MessageInfo, denom: &str) -> Result<(), ContractError> {
    if let Some(coin) = info.funds.iter().find(|c| c.denom != denom) {
        return Err(ContractError::UnexpectedDenom {
            denom: coin.denom.clone(),
        });
    }
    Ok(())
}

/// Open a new draw seeded with the attached funds.
pub fn create_draw(
    deps: DepsMut,
    info: MessageInfo,
    query_id: u64,
    draw_id: u32,
    min_entry_amount: Uint128,
    entry_amount_limit: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_single_denom(&info, &config.denom)?;
    if config.create_policy == CreatePolicy::OwnerOnly && info.sender != config.owner {
        return Err(ContractError::Unauthorized {
            reason: "only owner can create draws".to_string(),
        });
    }

    if min_entry_amount.is_zero() {
        return Err(ContractError::InvalidDrawParams {
            reason: "min_entry_amount must be positive".to_string(),
        });
    }
    if entry_amount_limit < min_entry_amount {
        return Err(ContractError::InvalidDrawParams {
            reason: "entry_amount_limit below min_entry_amount, draw could never resolve"
                .to_string(),
        });
    }

    if DRAWS.has(deps.storage, draw_id) {
        return Err(ContractError::DrawAlreadyExists { draw_id });
    }

    let funding = attached_amount(&info, &config.denom);
    if funding.is_zero() {
        return Err(ContractError::NoFundsSent {
            denom: config.denom,
        });
    }

    let draw = Draw {
        min_entry_amount,
        entry_amount_limit,
        pool_sum: funding,
        participant_count: 0,
    };
    DRAWS.save(deps.storage, draw_id, &draw)?;

    Ok(Response::new()
        .add_attribute("action", "create_draw")
        .add_attribute("query_id", query_id.to_string())
        .add_attribute("draw_id", draw_id.to_string())
        .add_event(
            Event::new("luckydraw_created")
                .add_attribute("draw_id", draw_id.to_string())
                .add_attribute("min_entry_amount", min_entry_amount.to_string())
                .add_attribute("entry_amount_limit", entry_amount_limit.to_string())
                .add_attribute("funding", funding.to_string()),
        ))
}

/// Stake the attached funds into a draw. A stake below the draw minimum is
/// declined with a refund; an accepted stake always runs the threshold check
/// and may resolve the draw within the same message.
pub fn luck_roll(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    query_id: u64,
    draw_id: u32,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_single_denom(&info, &config.denom)?;
    let mut draw = DRAWS
        .may_load(deps.storage, draw_id)?
        .ok_or(ContractError::DrawNotFound { draw_id })?;

    let value = attached_amount(&info, &config.denom);

    if value < draw.min_entry_amount {
        // Business decline, not an error: the draw stays untouched and the
        // stake is returned minus the processing deduction.
        let refund = value.saturating_sub(Uint128::new(STAKE_REFUND_FEE));
        let mut response = Response::new()
            .add_attribute("action", "luck_roll")
            .add_attribute("query_id", query_id.to_string())
            .add_attribute("draw_id", draw_id.to_string())
            .add_attribute("outcome", "declined")
            .add_event(
                Event::new("luckydraw_declined")
                    .add_attribute("draw_id", draw_id.to_string())
                    .add_attribute("sender", info.sender.to_string())
                    .add_attribute("value", value.to_string())
                    .add_attribute("refund", refund.to_string()),
            );
        if !refund.is_zero() {
            response = response.add_message(BankMsg::Send {
                to_address: info.sender.to_string(),
                amount: coins(refund.u128(), &config.denom),
            });
        }
        return Ok(response);
    }

    draw.pool_sum += value;
    let previous = STAKES.may_load(deps.storage, (draw_id, &info.sender))?;
    if previous.is_none() {
        draw.participant_count += 1;
    }
    STAKES.save(
        deps.storage,
        (draw_id, &info.sender),
        &(previous.unwrap_or_default() + value),
    )?;
    DRAWS.save(deps.storage, draw_id, &draw)?;

    let mut response = Response::new()
        .add_attribute("action", "luck_roll")
        .add_attribute("query_id", query_id.to_string())
        .add_attribute("draw_id", draw_id.to_string())
        .add_attribute("outcome", "accepted")
        .add_event(
            Event::new("luckydraw_staked")
                .add_attribute("draw_id", draw_id.to_string())
                .add_attribute("sender", info.sender.to_string())
                .add_attribute("value", value.to_string())
                .add_attribute("pool_sum", draw.pool_sum.to_string()),
        );

    if draw.pool_sum >= draw.entry_amount_limit {
        let (payout_msg, resolved_event) = settle_draw(deps, &env, &config, draw_id, &draw)?;
        if let Some(payout_msg) = payout_msg {
            response = response.add_message(payout_msg);
        }
        response = response.add_event(resolved_event);
    }

    Ok(response)
}

/// Resolve a draw whose pool reached the threshold: split the fee, select a
/// stake-weighted winner, purge the draw and emit the payout. A payout that
/// floors to zero (full fee) emits no bank message; the bank module rejects
/// zero-amount sends.
fn settle_draw(
    deps: DepsMut,
    env: &Env,
    config: &Config,
    draw_id: u32,
    draw: &Draw,
) -> Result<(Option<BankMsg>, Event), ContractError> {
    let participants: Vec<(Addr, Uint128)> = STAKES
        .prefix(draw_id)
        .range(deps.storage, None, None, Order::Ascending)
        .collect::<StdResult<_>>()?;

    let weights: Vec<Uint128> = participants.iter().map(|(_, staked)| *staked).collect();
    let seed = random::message_seed(env, draw_id, draw.pool_sum);
    let winner_idx = random::weighted_index(&seed, &weights)
        .ok_or(ContractError::EmptyDraw { draw_id })?;
    let winner = participants[winner_idx].0.clone();

    let payout = draw
        .pool_sum
        .multiply_ratio(100u16 - config.fee_percent, 100u16);
    let fee_amount = draw.pool_sum - payout;

    for (addr, _) in &participants {
        STAKES.remove(deps.storage, (draw_id, addr));
    }
    DRAWS.remove(deps.storage, draw_id);

    let payout_msg = (!payout.is_zero()).then(|| BankMsg::Send {
        to_address: winner.to_string(),
        amount: coins(payout.u128(), &config.denom),
    });
    let resolved_event = Event::new("luckydraw_resolved")
        .add_attribute("draw_id", draw_id.to_string())
        .add_attribute("winner", winner.to_string())
        .add_attribute("pool_sum", draw.pool_sum.to_string())
        .add_attribute("payout", payout.to_string())
        .add_attribute("fee_amount", fee_amount.to_string())
        .add_attribute("participant_count", draw.participant_count.to_string())
        .add_attribute("seed", hex::encode(seed));

    Ok((payout_msg, resolved_event))
}

/// Accept the attached funds into the contract balance. No draw state.
pub fn top_up(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    assert_single_denom(&info, &config.denom)?;
    let amount = attached_amount(&info, &config.denom);
    if amount.is_zero() {
        return Err(ContractError::NoFundsSent {
            denom: config.denom,
        });
    }

    Ok(Response::new()
        .add_attribute("action", "top_up")
        .add_attribute("amount", amount.to_string()))
}

/// Plain value transfer (empty wire body). Always accepted, no state change.
pub fn deposit(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let amount = attached_amount(&info, &config.denom);

    Ok(Response::new()
        .add_attribute("action", "deposit")
        .add_attribute("amount", amount.to_string()))
}
