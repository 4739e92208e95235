//! classtrack main entrypoint.

use classtrack::{init_tracing, run, ui::messages::failure};

fn main() {
    init_tracing();
    if let Err(e) = run() {
        failure(&e);
        std::process::exit(1);
    }
}
