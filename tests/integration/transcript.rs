//! End-to-end transcripts.
//!
//! Each test feeds a script to `cli::run` on a freshly built kiosk and
//! compares the exact stdout a bettor would see.

use std::io::Cursor;

use horse_tracker::cli;
use horse_tracker::config::{AppConfig, HorseConfig};
use horse_tracker::engine::Kiosk;

const NAMES: [(&str, u32); 7] = [
    ("That Darn Gray Cat", 5),
    ("Fort Utopia", 10),
    ("Count Sheep", 9),
    ("Ms Traitour", 4),
    ("Real Princess", 3),
    ("Pa Kettle", 5),
    ("Gin Stinger", 6),
];

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn run_script(kiosk: &mut Kiosk, script: &str) -> String {
    let mut out = Vec::new();
    cli::run(kiosk, Cursor::new(script), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// Expected status block for the reference roster.
/// `qty` is in 1, 5, 10, 20, 100 order.
fn status(qty: [u32; 5], winner: u32) -> String {
    let mut s = String::from("Inventory:\n");
    for (d, q) in [1, 5, 10, 20, 100].iter().zip(qty) {
        s.push_str(&format!("${d},{q}\n"));
    }
    s.push_str("Horses:\n");
    for (i, (name, odds)) in NAMES.iter().enumerate() {
        let n = i as u32 + 1;
        let result = if n == winner { "won" } else { "lost" };
        s.push_str(&format!("{n},{name},{odds},{result}\n"));
    }
    s
}

/// Expected dispensing block; `counts` is in 100, 20, 10, 5, 1 order.
fn payout(name: &str, winnings: u64, counts: [u32; 5]) -> String {
    let mut s = format!("Payout: {name},${winnings}\nDispensing:\n");
    for (d, c) in [100, 20, 10, 5, 1].iter().zip(counts) {
        s.push_str(&format!("${d},{c}\n"));
    }
    s
}

const FULL: [u32; 5] = [10, 10, 10, 10, 10];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn test_startup_then_quit() {
    let out = run_script(&mut Kiosk::default(), "Q\n");
    assert_eq!(out, status(FULL, 1));
}

#[test]
fn test_winning_bet_on_fresh_machine() {
    let out = run_script(&mut Kiosk::default(), "1 10\nq\n");
    let expected = [
        status(FULL, 1),
        payout("That Darn Gray Cat", 50, [0, 2, 1, 0, 0]),
        status([10, 10, 9, 8, 10], 1),
    ]
    .concat();
    assert_eq!(out, expected);
}

#[test]
fn test_set_winner_and_reject_unknown() {
    let out = run_script(&mut Kiosk::default(), "W 3\nw 9\nq\n");
    let expected = [
        status(FULL, 1),
        status(FULL, 3),
        "Invalid Horse Number: 9\n".to_string(),
        status(FULL, 3),
    ]
    .concat();
    assert_eq!(out, expected);
}

#[test]
fn test_bet_rejections_keep_inventory() {
    let script = "8 10\n1 10.5\n2 10\n1 -3\nq\n";
    let out = run_script(&mut Kiosk::default(), script);
    let expected = [
        status(FULL, 1),
        "Invalid Horse Number: 8\n".to_string(),
        status(FULL, 1),
        "Invalid Bet: 10.5\n".to_string(),
        status(FULL, 1),
        "No Payout: Fort Utopia\n".to_string(),
        status(FULL, 1),
        "Invalid Bet: -3.0\n".to_string(),
        status(FULL, 1),
    ]
    .concat();
    assert_eq!(out, expected);
}

#[test]
fn test_invalid_commands_echo_trimmed_input() {
    let out = run_script(&mut Kiosk::default(), "  hello world  \nw x\n1 ten\nQ\n");
    let expected = [
        status(FULL, 1),
        "Invalid Command: hello world\n".to_string(),
        status(FULL, 1),
        "Invalid Command: w x\n".to_string(),
        status(FULL, 1),
        "Invalid Command: 1 ten\n".to_string(),
        status(FULL, 1),
    ]
    .concat();
    assert_eq!(out, expected);
}

#[test]
fn test_malformed_amounts_never_pay_out() {
    let mut kiosk = Kiosk::default();
    let out = run_script(&mut kiosk, "1 1_0\n1 0\nq\n");
    let expected = [
        status(FULL, 1),
        "Invalid Command: 1 1_0\n".to_string(),
        status(FULL, 1),
        "Invalid Bet: 0.0\n".to_string(),
        status(FULL, 1),
    ]
    .concat();
    assert_eq!(out, expected);
    assert_eq!(kiosk.inventory(), Kiosk::default().inventory());
}

#[test]
fn test_winner_command_prefix_and_range() {
    let out = run_script(&mut Kiosk::default(), "win 2\nwx 3\nw 3000000000\nq\n");
    let expected = [
        status(FULL, 1),
        status(FULL, 2),
        status(FULL, 3),
        "Invalid Command: w 3000000000\n".to_string(),
        status(FULL, 3),
    ]
    .concat();
    assert_eq!(out, expected);
}

#[test]
fn test_insufficient_funds_then_restock() {
    // Fort Utopia pays 10x: 100 * 10 = 1000 drains the $100s,
    // leaving 360 in smaller bills.
    let script = "w 2\n2 100\n2 50\nr\n2 50\nq\n";
    let out = run_script(&mut Kiosk::default(), script);
    let expected = [
        status(FULL, 1),
        status(FULL, 2),
        payout("Fort Utopia", 1000, [10, 0, 0, 0, 0]),
        status([10, 10, 10, 10, 0], 2),
        "Insufficient Funds: 500\n".to_string(),
        status([10, 10, 10, 10, 0], 2),
        status(FULL, 2),
        payout("Fort Utopia", 500, [5, 0, 0, 0, 0]),
        status([10, 10, 10, 10, 5], 2),
    ]
    .concat();
    assert_eq!(out, expected);
}

#[test]
fn test_session_continues_until_end_of_input() {
    let mut kiosk = Kiosk::default();
    let out = run_script(&mut kiosk, "\n\nr\n");
    assert_eq!(out, [status(FULL, 1), status(FULL, 1)].concat());
}

#[test]
fn test_state_carries_across_commands() {
    let mut kiosk = Kiosk::default();
    run_script(&mut kiosk, "w 5\n5 20\nq\n");
    // Real Princess pays 3x: 60 → three $20s.
    assert_eq!(kiosk.inventory().quantity_of(20).unwrap(), 7);
    assert_eq!(kiosk.roster().winning_number(), Some(5));
}

#[test]
fn test_configured_roster_with_gaps() {
    let mut cfg = AppConfig::default();
    cfg.machine.initial_winner = 12;
    cfg.horses = vec![
        HorseConfig::new(12, "Twelve", 2),
        HorseConfig::new(3, "Three", 7),
    ];
    let mut kiosk = Kiosk::from_config(&cfg).unwrap();
    let out = run_script(&mut kiosk, "1 5\n12 5\nq\n");

    assert!(out.contains("Horses:\n3,Three,7,lost\n12,Twelve,2,won\n"));
    assert!(out.contains("Invalid Horse Number: 1\n"));
    assert!(out.contains("Payout: Twelve,$10\n"));
}
