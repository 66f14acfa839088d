//
//  Copyright (C) 2022-2024  Chase Ruskin
//
//  This program is free software: you can redistribute it and/or modify
//  it under the terms of the GNU General Public License as published by
//  the Free Software Foundation, either version 3 of the License, or
//  (at your option) any later version.
//
//  This program is distributed in the hope that it will be useful,
//  but WITHOUT ANY WARRANTY; without even the implied warranty of
//  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//  GNU General Public License for more details.
//
//  You should have received a copy of the GNU General Public License
//  along with this program.  If not, see <http://www.gnu.org/licenses/>.
//

use crate::commands::manuals;
use crate::util::anyerror::AnyError;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Help {
    list: bool,
    topic: Option<Topic>,
}

impl Subcommand<()> for Help {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(cliproc::Help::with(HELP))?;
        Ok(Help {
            list: cli.check(Arg::flag("list"))?,
            topic: cli.get(Arg::positional("topic"))?,
        })
    }

    fn execute(self, _: &()) -> proc::Result {
        self.run()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
enum Topic {
    Example,
    List,
}

impl Topic {
    fn list_all() -> String {
        let list = ["example", "list"];
        list.into_iter().fold(String::new(), |mut acc, x| {
            acc.push_str(&format!("{}\n", x));
            acc
        })
    }

    /// Transforms the variant to its corresponding manual page.
    fn as_manual(&self) -> &str {
        match &self {
            Self::Example => manuals::example::MANUAL,
            Self::List => manuals::list::MANUAL,
        }
    }
}

impl std::str::FromStr for Topic {
    type Err = AnyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "example" => Self::Example,
            "list" => Self::List,
            _ => return Err(AnyError(format!("topic '{}' not found", s))),
        })
    }
}

impl Help {
    fn run(&self) -> Result<(), AnyError> {
        if self.list == true {
            println!("{}", Topic::list_all());
        } else {
            let contents = match &self.topic {
                Some(t) => t.as_manual(),
                None => manuals::neoflow::MANUAL,
            };
            println!("{}", contents);
        }
        Ok(())
    }
}

const HELP: &str = "\
Read in-depth documentation on neoflow topics.

Usage:
    neoflow help [<topic>]

Args:
    <topic>         a listed topic or any neoflow subcommand

Use 'neoflow help --list' to see all available topics.
";
