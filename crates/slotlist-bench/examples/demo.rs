//! Demo driver.
//!
//! Builds a 64-slot list, runs a short insert/delete sequence, then prints
//! the list in order followed by the raw slot table.

use slotlist_bench::demo_sequence;

fn main() {
    println!("[BEGIN]");

    let list = match demo_sequence() {
        Ok(list) => list,
        Err(e) => {
            eprintln!("demo failed: {e}");
            std::process::exit(1);
        }
    };

    print!("{}", list.dump());
    println!("{}", list.dump_debug());

    println!("[DONE]");
    list.release();
}
