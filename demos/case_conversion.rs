//! Converting identifiers between cases.
//!
//! Run with: cargo run --example case_conversion -- [case] [words...]

use std::error::Error;
use tagcase::Case;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);

    match args.next() {
        Some(case) => {
            let case: Case = case.parse()?;
            let input = args.collect::<Vec<_>>().join(" ");
            println!("{}", case.apply(&input));
        }
        None => {
            for input in ["inviteYourCustomersAddInvites", "sampleIDText", "user id"] {
                println!("{input}");
                for case in Case::ALL {
                    println!("  {:<8} {}", case, case.apply(input));
                }
            }
        }
    }

    Ok(())
}
