mod args;
mod commands;
mod communication;
mod core;
mod error;
mod utils;

use args::{args, Arguments, ArgumentsParser};
use communication::LdapChannel;
use error::Result;
use log::error;
use utils::domain_to_base_dn;

fn main() {
    let args = ArgumentsParser::parse(&args().get_matches());

    init_log(args.verbosity);

    if let Err(error) = dump_gmsa_hashes(args) {
        error!("{}", error);
        std::process::exit(1);
    }
}

/// Init the log facility, warnings are shown by default and each `-v`
/// raises the level.
fn init_log(verbosity: usize) {
    stderrlog::new()
        .module(module_path!())
        .verbosity(verbosity + 1)
        .init()
        .expect("Error initializing logger");
}

fn dump_gmsa_hashes(args: Arguments) -> Result<()> {
    let server = match &args.server {
        Some(server) => server.clone(),
        None => args.user.domain.clone(),
    };
    let search_base = domain_to_base_dn(&args.user.domain);

    let mut channel = LdapChannel::connect(
        &server,
        &args.user,
        &args.password,
        search_base,
    )?;

    return commands::dump(&mut channel);
}
