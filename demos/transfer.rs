//! A funds-transfer pipeline riding the railway end to end.
//!
//! Run with: `cargo run --example transfer`

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use two_track::{Track, TrackFnExt};

#[derive(Clone, Debug)]
struct TransferRequest {
    account_from: String,
    account_to: String,
    transfer_amount: i64,
}

#[derive(Clone, Debug)]
struct RingfencedTransferRequest {
    account_from: String,
    account_to: String,
    transfer_amount: i64,
    ringfence_reference: String,
}

#[derive(Clone, Debug)]
struct TransferResult {
    account_from: String,
    account_to: String,
    transfer_amount: i64,
    ringfence_reference: String,
    account_from_balance: i64,
    account_to_balance: i64,
}

struct AccountDirectory {
    balances: RefCell<HashMap<String, i64>>,
}

impl AccountDirectory {
    fn balance(&self, account: &str) -> i64 {
        self.balances.borrow().get(account).copied().unwrap_or(0)
    }

    fn transfer(&self, from: &str, to: &str, amount: i64) -> bool {
        let mut balances = self.balances.borrow_mut();
        *balances.entry(from.to_string()).or_insert(0) -= amount;
        *balances.entry(to.to_string()).or_insert(0) += amount;
        true
    }
}

fn main() {
    let directory = AccountDirectory {
        balances: RefCell::new(HashMap::from([
            ("100".to_string(), 500),
            ("200".to_string(), 0),
            ("801".to_string(), 1_000),
        ])),
    };
    let next_reference = Cell::new(0u64);

    let check_sufficient_funds = |request: TransferRequest| {
        if directory.balance(&request.account_from) >= request.transfer_amount {
            Track::Success(request)
        } else {
            Track::Failure("Insufficient funds".to_string())
        }
    };

    let ringfence_source_account = |request: TransferRequest| {
        if request.account_from.starts_with('8') {
            return Track::Failure(format!(
                "Service timed out while attempting to ringfence {} from account {}",
                request.transfer_amount, request.account_from
            ));
        }
        let reference = next_reference.get() + 1;
        next_reference.set(reference);
        Track::Success(RingfencedTransferRequest {
            account_from: request.account_from,
            account_to: request.account_to,
            transfer_amount: request.transfer_amount,
            ringfence_reference: format!("rf-{reference:08x}"),
        })
    };

    let transfer_ringfenced_amount = |request: RingfencedTransferRequest| {
        if !directory.transfer(
            &request.account_from,
            &request.account_to,
            request.transfer_amount,
        ) {
            return Track::Failure(format!(
                "Network failure while attempting to fulfill ringfence {}",
                request.ringfence_reference
            ));
        }
        let account_from_balance = directory.balance(&request.account_from);
        let account_to_balance = directory.balance(&request.account_to);
        Track::Success(TransferResult {
            account_from: request.account_from,
            account_to: request.account_to,
            transfer_amount: request.transfer_amount,
            ringfence_reference: request.ringfence_reference,
            account_from_balance,
            account_to_balance,
        })
    };

    let transfer = check_sufficient_funds
        .bind(ringfence_source_account)
        .tee(|r: &RingfencedTransferRequest| {
            println!("ringfenced {} under {}", r.transfer_amount, r.ringfence_reference)
        })
        .bind(transfer_ringfenced_amount)
        .merge(
            |r| {
                format!(
                    "moved {} from {} (now {}) to {} (now {})",
                    r.transfer_amount,
                    r.account_from,
                    r.account_from_balance,
                    r.account_to,
                    r.account_to_balance
                )
            },
            |e| format!("transfer failed: {e}"),
        );

    for (from, to, amount) in [("100", "200", 100), ("100", "200", 9_999), ("801", "200", 50)] {
        let line = transfer(TransferRequest {
            account_from: from.to_string(),
            account_to: to.to_string(),
            transfer_amount: amount,
        });
        println!("{line}");
    }
}
