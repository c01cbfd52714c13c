use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};
use luckydraw_wire::MessageBody;

use crate::state::{Config, CreatePolicy, Draw};

#[cw_serde]
pub struct InstantiateMsg {
    /// Defaults to the instantiating sender.
    pub owner: Option<String>,
    /// Share of a resolved pool retained for the owner, 0..=100.
    pub fee_percent: u16,
    /// Native denom accepted for funding, stakes and payouts.
    pub denom: String,
    /// Defaults to `CreatePolicy::Anyone`.
    pub create_policy: Option<CreatePolicy>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Open a new draw. The attached funds seed the pool.
    CreateDraw {
        query_id: u64,
        draw_id: u32,
        min_entry_amount: Uint128,
        entry_amount_limit: Uint128,
    },
    /// Stake the attached funds into a draw. Crossing the pool threshold
    /// resolves the draw within the same message.
    LuckRoll { query_id: u64, draw_id: u32 },
    /// Accept the attached funds into the contract balance. No draw state
    /// is touched.
    TopUp {},
    /// Plain value transfer (the empty wire body). Accepted, no state change.
    Deposit {},
}

impl From<MessageBody> for ExecuteMsg {
    fn from(body: MessageBody) -> Self {
        match body {
            MessageBody::CreateDraw {
                query_id,
                draw_id,
                min_entry_amount,
                entry_amount_limit,
            } => ExecuteMsg::CreateDraw {
                query_id,
                draw_id,
                min_entry_amount: min_entry_amount.into(),
                entry_amount_limit: entry_amount_limit.into(),
            },
            MessageBody::LuckRoll { query_id, draw_id } => {
                ExecuteMsg::LuckRoll { query_id, draw_id }
            }
            MessageBody::TopUp => ExecuteMsg::TopUp {},
            MessageBody::PlainTransfer => ExecuteMsg::Deposit {},
        }
    }
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(OwnerResponse)]
    Owner {},
    #[returns(Config)]
    Config {},
    /// A single draw, or None once it has resolved.
    #[returns(Option<Draw>)]
    Draw { draw_id: u32 },
    /// Raw-storage view: owner, fee and every active draw.
    #[returns(StorageResponse)]
    Storage {},
    #[returns(DrawsResponse)]
    Draws {
        start_after: Option<u32>,
        limit: Option<u32>,
    },
    #[returns(ParticipantsResponse)]
    Participants {
        draw_id: u32,
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct DrawEntry {
    pub draw_id: u32,
    pub draw: Draw,
}

#[cw_serde]
pub struct StorageResponse {
    pub owner: Addr,
    pub fee_percent: u16,
    pub draws: Vec<DrawEntry>,
}

#[cw_serde]
pub struct DrawsResponse {
    pub draws: Vec<DrawEntry>,
}

#[cw_serde]
pub struct ParticipantInfo {
    pub address: Addr,
    pub staked: Uint128,
}

#[cw_serde]
pub struct ParticipantsResponse {
    pub draw_id: u32,
    pub participants: Vec<ParticipantInfo>,
}

#[cw_serde]
pub struct MigrateMsg {}
