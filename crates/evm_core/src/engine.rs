//! The dispatch loop: fetch-decode-execute until a handler halts or `pc`
//! runs off the end of `code`.

use primitives::{Environment, LogRecord};

use crate::context::Context;
use crate::dispatch::{build_table, OpOutcome};

/// What one invocation produced, assembled per spec §6.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub success: bool,
    pub stack: Vec<alloy::primitives::U256>,
    pub logs: Vec<LogRecord>,
    pub return_data: Vec<u8>,
}

/// Run `code` to completion against `env`. JUMPDEST analysis runs once,
/// inside [`Context::new`], before the first opcode is fetched.
pub fn execute(code: &[u8], calldata: &[u8], env: &Environment) -> ExecutionResult {
    let table = build_table();
    let mut ctx = Context::new(code.to_vec(), calldata.to_vec());
    let mut logs = Vec::new();

    loop {
        if ctx.pc >= ctx.code.len() {
            return ExecutionResult {
                success: true,
                stack: ctx.stack.to_vec_top_first(),
                logs,
                return_data: Vec::new(),
            };
        }

        let op = ctx.code[ctx.pc];
        ctx.pc += 1;
        let handler = table[op as usize];

        match handler(&mut ctx, env, op) {
            OpOutcome::Continue => continue,
            OpOutcome::Halt(success) => {
                return ExecutionResult {
                    success,
                    stack: if success { ctx.stack.to_vec_top_first() } else { Vec::new() },
                    logs,
                    return_data: Vec::new(),
                };
            }
            OpOutcome::Return(data) => {
                return ExecutionResult {
                    success: true,
                    stack: ctx.stack.to_vec_top_first(),
                    logs,
                    return_data: data,
                };
            }
            OpOutcome::Log(record) => {
                logs.push(record);
            }
            OpOutcome::Unmapped => {
                return ExecutionResult {
                    success: true,
                    stack: Vec::new(),
                    logs: Vec::new(),
                    return_data: Vec::new(),
                };
            }
            OpOutcome::Fail => {
                return ExecutionResult {
                    success: false,
                    stack: Vec::new(),
                    logs: Vec::new(),
                    return_data: Vec::new(),
                };
            }
        }
    }
}
