use cosmwasm_std::{Env, Uint128};
use sha2::{Digest, Sha256};

/// Derive the 32-byte winner-selection seed for the message currently
/// executing. Block entropy is mixed with the draw id and pool total so two
/// resolutions inside one block do not share a seed.
pub fn message_seed(env: &Env, draw_id: u32, pool_sum: Uint128) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(env.block.height.to_be_bytes());
    hasher.update(env.block.time.nanos().to_be_bytes());
    if let Some(tx) = &env.transaction {
        hasher.update(tx.index.to_be_bytes());
    }
    hasher.update(draw_id.to_be_bytes());
    hasher.update(pool_sum.u128().to_be_bytes());
    hasher.finalize().into()
}

/// Pick an index with probability proportional to its weight.
///
/// The first 16 seed bytes form a big-endian ticket, reduced modulo the
/// weight total and matched against cumulative weight ranges. Returns None
/// when the weights are empty or sum to zero.
pub fn weighted_index(seed: &[u8; 32], weights: &[Uint128]) -> Option<usize> {
    let total: u128 = weights.iter().map(|w| w.u128()).sum();
    if total == 0 {
        return None;
    }

    let mut ticket_bytes = [0u8; 16];
    ticket_bytes.copy_from_slice(&seed[0..16]);
    let ticket = u128::from_be_bytes(ticket_bytes) % total;

    let mut cumulative = 0u128;
    for (idx, weight) in weights.iter().enumerate() {
        cumulative += weight.u128();
        if ticket < cumulative {
            return Some(idx);
        }
    }
    None
}
