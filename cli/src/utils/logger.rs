/// Install the terminal logger. `RUST_LOG` wins when set; otherwise `--verbose`
/// selects debug output, which includes one line per catalog lookup.
pub fn init_logger(verbose: bool) {
    if std::env::var("RUST_LOG").is_err() {
        if verbose {
            std::env::set_var("RUST_LOG", "debug");
        } else {
            std::env::set_var("RUST_LOG", "info");
        }
    }
    let _ = pretty_env_logger::try_init();
}
