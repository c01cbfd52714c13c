use thiserror::Error;

/// Message-body opcodes. 32-bit big-endian, always the first field of a
/// non-empty body.
pub const OP_CREATE_DRAW: u32 = 0x2e41a2f6;
pub const OP_LUCK_ROLL: u32 = 0x8e7a0c11;
pub const OP_TOP_UP: u32 = 0x5c12b67d;

/// Exit code reported to callers when a body carries an unknown opcode.
pub const EXIT_WRONG_OP: u32 = 0xFFFF;

/// A varcoin value may carry at most 16 magnitude bytes (u128).
const VARCOIN_MAX_BYTES: u8 = 16;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WireError {
    #[error("unknown opcode {opcode:#010x} (exit 0xffff)")]
    UnknownOpcode { opcode: u32 },

    #[error("message body truncated at byte {offset}")]
    Truncated { offset: usize },

    #[error("varcoin length {len} exceeds 16 bytes")]
    VarCoinTooLong { len: u8 },

    #[error("{count} trailing bytes after message body")]
    TrailingBytes { count: usize },
}

/// A decoded inbound message body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageBody {
    CreateDraw {
        query_id: u64,
        draw_id: u32,
        min_entry_amount: u128,
        entry_amount_limit: u128,
    },
    LuckRoll {
        query_id: u64,
        draw_id: u32,
    },
    TopUp,
    /// Empty body: a plain value transfer with no instruction.
    PlainTransfer,
}

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Reader { buf, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        if self.pos + n > self.buf.len() {
            return Err(WireError::Truncated { offset: self.buf.len() });
        }
        let slice = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn read_u32(&mut self) -> Result<u32, WireError> {
        let bytes = self.take(4)?;
        let mut out = [0u8; 4];
        out.copy_from_slice(bytes);
        Ok(u32::from_be_bytes(out))
    }

    fn read_u64(&mut self) -> Result<u64, WireError> {
        let bytes = self.take(8)?;
        let mut out = [0u8; 8];
        out.copy_from_slice(bytes);
        Ok(u64::from_be_bytes(out))
    }

    /// varcoin: one length byte followed by that many big-endian magnitude
    /// bytes. Zero encodes as a bare zero length.
    fn read_varcoin(&mut self) -> Result<u128, WireError> {
        let len = self.take(1)?[0];
        if len > VARCOIN_MAX_BYTES {
            return Err(WireError::VarCoinTooLong { len });
        }
        let bytes = self.take(len as usize)?;
        let mut out = [0u8; 16];
        out[16 - bytes.len()..].copy_from_slice(bytes);
        Ok(u128::from_be_bytes(out))
    }

    fn finish(self) -> Result<(), WireError> {
        let remaining = self.buf.len() - self.pos;
        if remaining > 0 {
            return Err(WireError::TrailingBytes { count: remaining });
        }
        Ok(())
    }
}

fn push_varcoin(out: &mut Vec<u8>, value: u128) {
    let bytes = value.to_be_bytes();
    let skip = bytes.iter().take_while(|b| **b == 0).count();
    let magnitude = &bytes[skip..];
    out.push(magnitude.len() as u8);
    out.extend_from_slice(magnitude);
}

pub fn encode_create_draw(
    query_id: u64,
    draw_id: u32,
    min_entry_amount: u128,
    entry_amount_limit: u128,
) -> Vec<u8> {
    let mut out = Vec::with_capacity(4 + 8 + 4 + 2 * 17);
    out.extend_from_slice(&OP_CREATE_DRAW.to_be_bytes());
    out.extend_from_slice(&query_id.to_be_bytes());
    out.extend_from_slice(&draw_id.to_be_bytes());
    push_varcoin(&mut out, min_entry_amount);
    push_varcoin(&mut out, entry_amount_limit);
    out
}

pub fn encode_luck_roll(query_id: u64, draw_id: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(4 + 8 + 4);
    out.extend_from_slice(&OP_LUCK_ROLL.to_be_bytes());
    out.extend_from_slice(&query_id.to_be_bytes());
    out.extend_from_slice(&draw_id.to_be_bytes());
    out
}

pub fn encode_top_up() -> Vec<u8> {
    OP_TOP_UP.to_be_bytes().to_vec()
}

/// Decode an inbound message body. An empty body is a plain value transfer;
/// an unrecognized opcode is the `WRONG_OP` protocol error and must leave the
/// receiving contract untouched.
pub fn decode_body(body: &[u8]) -> Result<MessageBody, WireError> {
    if body.is_empty() {
        return Ok(MessageBody::PlainTransfer);
    }

    let mut reader = Reader::new(body);
    let opcode = reader.read_u32()?;
    let decoded = match opcode {
        OP_CREATE_DRAW => {
            let query_id = reader.read_u64()?;
            let draw_id = reader.read_u32()?;
            let min_entry_amount = reader.read_varcoin()?;
            let entry_amount_limit = reader.read_varcoin()?;
            MessageBody::CreateDraw {
                query_id,
                draw_id,
                min_entry_amount,
                entry_amount_limit,
            }
        }
        OP_LUCK_ROLL => {
            let query_id = reader.read_u64()?;
            let draw_id = reader.read_u32()?;
            MessageBody::LuckRoll { query_id, draw_id }
        }
        OP_TOP_UP => MessageBody::TopUp,
        other => return Err(WireError::UnknownOpcode { opcode: other }),
    };
    reader.finish()?;
    Ok(decoded)
}
