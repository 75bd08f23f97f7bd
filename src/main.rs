use std::process;

fn main() {
    if let Err(e) = textbook_rsa::ui::app::run_app() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
