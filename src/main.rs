//! rVolunteerLog main entrypoint.

use rvolunteerlog::run;
use rvolunteerlog::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
