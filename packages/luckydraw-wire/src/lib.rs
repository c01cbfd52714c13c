pub mod codec;

pub use codec::{
    decode_body, encode_create_draw, encode_luck_roll, encode_top_up, MessageBody, WireError,
    EXIT_WRONG_OP, OP_CREATE_DRAW, OP_LUCK_ROLL, OP_TOP_UP,
};
