//! Failure reporting: per spec §7, the harness prints the failing test's
//! name, the expected/actual mismatch, its disassembly, and its hint, then
//! stops (success stays silent apart from the per-test `✓` line).

use alloy::primitives::U256;
use evm_core::ExecutionResult;

use crate::fixture::Fixture;

pub fn print_failure(fixture: &Fixture, actual: &ExecutionResult, expected_stack: Option<&[U256]>) {
    println!("\u{2717}  {}", fixture.name);
    println!();

    if actual.success != fixture.expect.success {
        println!("success doesn't match");
        println!(" expected: {}", fixture.expect.success);
        println!("   actual: {}", actual.success);
    } else if let Some(expected) = expected_stack {
        if expected != actual.stack.as_slice() {
            println!("stack doesn't match");
            println!(" expected: {}", format_stack(expected));
            println!("   actual: {}", format_stack(&actual.stack));
        }
    }

    println!();
    println!("test code:");
    println!("{}", fixture.code.asm);
    println!();
    println!("hint: {}", fixture.hint);
}

fn format_stack(values: &[U256]) -> String {
    let items: Vec<String> = values.iter().map(|v| format!("{v:#x}")).collect();
    format!("[{}]", items.join(", "))
}
