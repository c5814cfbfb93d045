use clap::Parser;
use check_flexlm::flexlm::{ render_json, render_plain, FlexlmChecker };
use check_flexlm::{ get_lmutil_path, Cli };

fn main() {
    dotenv::dotenv().ok();
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let cli = Cli::parse();
    let lmutil = cli.lmutil.unwrap_or_else(get_lmutil_path);

    let checker = FlexlmChecker::new(lmutil, cli.server, cli.port);
    let verdict = checker.check();

    if cli.json {
        match render_json(&verdict) {
            Ok(doc) => println!("{}", doc),
            Err(e) => {
                log::error!("Failed to serialize verdict: {}", e);
                println!("{}", verdict.status_text);
            }
        }
    } else {
        print!("{}", render_plain(&verdict));
    }

    std::process::exit(verdict.state.exit_code());
}
