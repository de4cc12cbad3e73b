//! `SLOAD`/`SSTORE` against the per-execution key/value store.

use primitives::Environment;

use crate::context::Context;
use crate::dispatch::OpOutcome;
use crate::operations::{pop, push};

pub fn sload(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let key = pop!(ctx);
    push!(ctx, ctx.storage.load(key));
    OpOutcome::Continue
}

pub fn sstore(ctx: &mut Context, _env: &Environment, _op: u8) -> OpOutcome {
    let key = pop!(ctx);
    let value = pop!(ctx);
    ctx.storage.store(key, value);
    OpOutcome::Continue
}
