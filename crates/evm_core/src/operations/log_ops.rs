//! `LOG0`..`LOG4`: emit a record carrying a slice of memory plus whatever
//! topics the opcode byte says it takes.

use primitives::{Environment, LogRecord};

use crate::context::Context;
use crate::dispatch::OpOutcome;
use crate::opcodes;
use crate::operations::{as_usize, pop};

pub fn log(ctx: &mut Context, env: &Environment, op: u8) -> OpOutcome {
    let topic_count = opcodes::log_topic_count(op).expect("dispatch only routes LOG opcodes here");
    let offset = pop!(ctx);
    let length = pop!(ctx);
    let offset = as_usize!(offset);
    let length = as_usize!(length);

    let mut topics = Vec::with_capacity(topic_count);
    for _ in 0..topic_count {
        topics.push(pop!(ctx));
    }

    let data = ctx.memory.load_range(offset, length);
    OpOutcome::Log(LogRecord { address: env.tx.to, data, topics })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::U256;

    #[test]
    fn log1_matches_scenario_7_from_spec() {
        let mut ctx = Context::new(Vec::new(), Vec::new());
        let env = Environment::default();

        ctx.stack.push(U256::from(0xaau64)).unwrap(); // value
        ctx.stack.push(U256::ZERO).unwrap(); // offset
        crate::operations::memory_ops::mstore(&mut ctx, &env, 0x52);

        ctx.stack.push(U256::from(0x20u64)).unwrap(); // topic
        ctx.stack.push(U256::from(32u64)).unwrap(); // length
        ctx.stack.push(U256::ZERO).unwrap(); // offset

        let outcome = log(&mut ctx, &env, 0xa1);
        match outcome {
            OpOutcome::Log(record) => {
                assert_eq!(record.topics, vec![U256::from(0x20u64)]);
                assert_eq!(record.data.len(), 32);
            }
            other => panic!("expected Log outcome, got {other:?}"),
        }
    }

    #[test]
    fn log0_takes_no_topics() {
        let mut ctx = Context::new(Vec::new(), Vec::new());
        let env = Environment::default();
        ctx.stack.push(U256::from(4u64)).unwrap(); // length
        ctx.stack.push(U256::ZERO).unwrap(); // offset
        let outcome = log(&mut ctx, &env, 0xa0);
        match outcome {
            OpOutcome::Log(record) => assert!(record.topics.is_empty()),
            other => panic!("expected Log outcome, got {other:?}"),
        }
    }
}
