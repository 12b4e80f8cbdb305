//! slotline quickstart: a waiting line where people can leave early.
//!
//! Demonstrates:
//!   1. Implementing `Identified` for a payload type
//!   2. Enqueue / dequeue in FIFO order with slot recycling
//!   3. Removing people from the front, back and middle of the line
//!   4. Handling a full queue without losing the rejected entity
//!
//! Run with:
//!   cargo run --example quickstart

use std::fmt;

use slotline::prelude::*;

// ─── Payload ────────────────────────────────────────────────────

#[derive(Clone)]
struct Person {
    id: u32,
    name: &'static str,
}

impl Identified for Person {
    fn identity(&self) -> Identity {
        Identity(self.id)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, ID number: {}", self.name, self.id)
    }
}

fn show(person: Option<Person>) {
    match person {
        Some(p) => println!("{p}"),
        None => println!("(empty)"),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let a = Person { id: 1, name: "Aaron" };
    let b = Person { id: 2, name: "Baron" };
    let c = Person { id: 3, name: "Cauron" };
    let d = Person { id: 4, name: "Dareon" };
    let everyone = [&a, &b, &c, &d];

    // Four slots; identities 1..=4 need a lookup table of five entries.
    let config = QueueConfig::new(4).with_identity_bound(5);
    let mut line = IndexedQueue::with_config(config)?;

    // ─── FIFO with recycled slots ───────────────────────────────

    for p in everyone {
        line.enqueue(p.clone())?;
    }
    show(line.dequeue());
    show(line.dequeue());
    line.enqueue(a.clone())?;
    show(line.dequeue());
    line.enqueue(b.clone())?;
    show(line.dequeue());
    show(line.dequeue());
    show(line.dequeue());
    line.enqueue(a.clone())?;
    show(line.dequeue());

    // ─── Leaving early ──────────────────────────────────────────

    for leavers in [[&a, &d], [&b, &c], [&b, &d]] {
        println!();
        for p in everyone {
            line.enqueue(p.clone())?;
        }
        for p in leavers {
            line.remove(p);
        }
        show(line.dequeue());
        show(line.dequeue());
    }

    // ─── Backpressure ───────────────────────────────────────────

    println!();
    for p in everyone {
        line.enqueue(p.clone())?;
    }
    if let Err(rejected) = line.enqueue(Person { id: 0, name: "Zeron" }) {
        println!("{rejected}; {} waits outside", rejected.entity());
    }
    line.clear();
    Ok(())
}
