//! hoslog main entrypoint.

use hoslog::run;
use hoslog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
