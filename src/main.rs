//! gitlocal binary entry point.

use gitlocal::ui::output;

fn main() {
    if let Err(err) = gitlocal::cli::run() {
        output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
