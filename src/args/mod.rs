mod validators;

use crate::core::DomainUser;
use clap::{App, Arg, ArgMatches};
use std::convert::TryFrom;

pub fn args() -> App<'static, 'static> {
    App::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::with_name("user")
                .long("user")
                .short("u")
                .takes_value(true)
                .help(
                    "User to authenticate in format <domain>/<username>",
                )
                .required(true)
                .validator(validators::is_domain_user),
        )
        .arg(
            Arg::with_name("password")
                .long("password")
                .short("p")
                .takes_value(true)
                .help("Password of user")
                .required(true),
        )
        .arg(
            Arg::with_name("server")
                .long("server")
                .short("s")
                .takes_value(true)
                .value_name("hostname")
                .help(
                    "LDAP server, the domain name is used if none is given",
                ),
        )
        .arg(
            Arg::with_name("verbosity")
                .short("v")
                .multiple(true)
                .help("Increase message verbosity"),
        )
}

#[derive(Debug)]
pub struct Arguments {
    pub user: DomainUser,
    pub password: String,
    pub server: Option<String>,
    pub verbosity: usize,
}

pub struct ArgumentsParser<'a> {
    matches: &'a ArgMatches<'a>,
}

impl<'a> ArgumentsParser<'a> {
    pub fn parse(matches: &'a ArgMatches) -> Arguments {
        let parser = Self { matches: matches };
        return parser._parse();
    }

    fn _parse(&self) -> Arguments {
        return Arguments {
            user: DomainUser::try_from(
                self.matches.value_of("user").unwrap(),
            )
            .unwrap(),
            password: self.matches.value_of("password").unwrap().into(),
            server: self.matches.value_of("server").map(|s| s.into()),
            verbosity: self.matches.occurrences_of("verbosity") as usize,
        };
    }
}
