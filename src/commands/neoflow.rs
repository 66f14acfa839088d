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

use crate::commands::example::Example;
use crate::commands::help::Help;
use crate::commands::helps::neoflow;
use crate::commands::list::List;
use crate::core::context::Context;
use crate::core::project::PROJECT_FILE;
use crate::util::anyerror::AnyError;
use crate::util::environment::{self, Environment};

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Command, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Neoflow {
    version: bool,
    color: Option<ColorMode>,
    command: Option<NeoflowSubcommand>,
}

impl Command for Neoflow {
    fn interpret(cli: &mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(cliproc::Help::with(neoflow::HELP))?;
        Ok(Neoflow {
            version: cli.check(Arg::flag("version"))?,
            color: cli.get(Arg::option("color").value("when"))?,
            command: cli.nest(Arg::subcommand("command"))?,
        })
    }

    fn execute(self) -> proc::Result {
        self.color.unwrap_or(ColorMode::Auto).apply();
        // prioritize version information
        if self.version == true {
            println!("neoflow {}", VERSION);
            Ok(())
        // run the specified command
        } else if let Some(c) = self.command {
            c.run()
        // if no command is given then print default help
        } else {
            println!("{}", neoflow::HELP);
            Ok(())
        }
    }
}

#[derive(Debug, PartialEq)]
enum NeoflowSubcommand {
    Example(Example),
    List(List),
    Help(Help),
}

impl NeoflowSubcommand {
    /// Executes the subcommand, loading the project only for commands that
    /// read from it.
    fn run(self) -> proc::Result {
        match self {
            Self::Help(c) => c.execute(&()),
            _ => {
                let context = Context::new()
                    .root(environment::NEOFLOW_ROOT, PROJECT_FILE)?
                    .project(PROJECT_FILE)?;
                self.execute(&context)
            }
        }
    }
}

impl Subcommand<Context> for NeoflowSubcommand {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        match cli.select(&["example", "list", "help"])?.as_str() {
            "example" => Ok(Self::Example(Example::interpret(cli)?)),
            "list" => Ok(Self::List(List::interpret(cli)?)),
            "help" => Ok(Self::Help(Help::interpret(cli)?)),
            _ => panic!("an unimplemented command was passed through!"),
        }
    }

    fn execute(self, context: &Context) -> proc::Result {
        match self {
            Self::Example(c) => c.execute(context),
            Self::List(c) => c.execute(context),
            Self::Help(c) => c.execute(&()),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ColorMode {
    Always,
    Never,
    Auto,
}

impl ColorMode {
    /// Sets the coloring mode for all output of this process.
    fn apply(&self) {
        match self {
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
            Self::Auto => {
                if Environment::read(environment::NO_COLOR).is_some() {
                    colored::control::set_override(false)
                }
            }
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = AnyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            "auto" => Ok(Self::Auto),
            _ => Err(AnyError(format!(
                "invalid color mode '{}'; expecting auto, always, or never",
                s
            ))),
        }
    }
}

const VERSION: &str = env!("CARGO_PKG_VERSION");
