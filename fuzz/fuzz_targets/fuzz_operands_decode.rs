//! Fuzz target: decoding arithmetic request bodies.
//!
//! Arbitrary bytes must decode or fail cleanly, and any decoded operands
//! must go through every operation without panicking.

#![no_main]

use calc_core::{Operands, Operation};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(operands) = Operands::decode(data) {
        for op in Operation::ALL {
            let _ = op.apply(operands);
        }
    }
});
