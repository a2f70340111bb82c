//! overwork main entrypoint.

use overwork::run;
use overwork::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(e);
        std::process::exit(1);
    }
}
