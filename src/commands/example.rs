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

use crate::commands::helps::example;
use crate::core::board;
use crate::core::command::BuildCommand;
use crate::core::context::Context;
use crate::core::resolver::ExampleResolver;
use crate::error::{Error, LastError};
use crate::util::anyerror::Fault;
use crate::util::environment::{EnvVar, Environment};
use crate::util::environment::{NEOFLOW_BITSTREAM, NEOFLOW_BOARD, NEOFLOW_DESIGN};
use crate::util::filesystem;

use std::path::Path;
use std::process::{Child, ExitStatus};

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};

#[derive(Debug, PartialEq)]
pub struct Example {
    board: String,
    design: String,
    run: bool,
    verbose: bool,
    targets: Vec<String>,
}

impl Subcommand<Context> for Example {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(example::HELP))?;
        Ok(Example {
            // Flags
            run: cli.check(Arg::flag("run"))?,
            verbose: cli.check(Arg::flag("verbose"))?,
            // Positionals
            board: cli.require(Arg::positional("board"))?,
            design: cli.require(Arg::positional("design"))?,
            // Remaining args
            targets: cli.remainder()?,
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        let project = c.get_project();
        let resolver = ExampleResolver::new(project, project.get_flow(), c.get_root());

        let cmd = resolver.resolve(&self.board, &self.design, &self.targets)?;

        match self.run {
            true => self.execute_flow(c, &cmd),
            false => {
                println!("{}", cmd);
                Ok(())
            }
        }
    }
}

impl Example {
    /// Runs the flow's command line from the project root.
    fn execute_flow(&self, c: &Context, cmd: &BuildCommand) -> Result<(), Fault> {
        let revision = c
            .get_project()
            .get_board_info(&self.board)
            .and_then(|b| b.get_revision());
        let envs = Self::flow_environment(&self.board, revision, &self.design);

        let line = cmd.to_string();
        // display the literal command being ran
        if self.verbose == true {
            envs.iter().for_each(|e| println!("info: setting: {}", e));
            println!("info: running: {}", line);
        }
        let mut child = Self::spawn_flow(c.get_root(), &line, &envs)?;
        let status = child.wait()?;
        Ok(Self::check_exit(status)?)
    }

    /// Variables describing the example to the flow's process.
    fn flow_environment(board: &str, revision: Option<&String>, design: &str) -> Environment {
        Environment::new()
            .add(EnvVar::with(NEOFLOW_BOARD, board))
            .add(EnvVar::with(NEOFLOW_DESIGN, design))
            .add(EnvVar::with(
                NEOFLOW_BITSTREAM,
                &board::bitstream(board, revision, design),
            ))
    }

    fn spawn_flow(cwd: &Path, line: &str, envs: &Environment) -> Result<Child, Error> {
        filesystem::invoke_shell(cwd, line, envs.into_map())
            .map_err(|e| Error::FlowProcFailed(LastError(e.to_string())))
    }

    fn check_exit(status: ExitStatus) -> Result<(), Error> {
        match status.code() {
            Some(0) => Ok(()),
            Some(num) => Err(Error::ChildProcErrorCode(num)),
            None => Err(Error::ChildProcTerminated),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn run(line: &str) -> Result<(), Error> {
        let dir = tempfile::tempdir().unwrap();
        let envs = Example::flow_environment("UPduino", None, "MinimalBoot");
        let mut child = Example::spawn_flow(dir.path(), line, &envs).unwrap();
        Example::check_exit(child.wait().unwrap())
    }

    #[test]
    fn environment_describes_example() {
        let rev = String::from("v3");
        let envs = Example::flow_environment("UPduino", Some(&rev), "MinimalBoot");
        assert_eq!(envs.iter().count(), 3);
        assert_eq!(envs.get(NEOFLOW_BOARD).unwrap().get_value(), "UPduino");
        assert_eq!(envs.get(NEOFLOW_DESIGN).unwrap().get_value(), "MinimalBoot");
        assert_eq!(
            envs.get(NEOFLOW_BITSTREAM).unwrap().get_value(),
            "neorv32_UPduino_v3_MinimalBoot.bit"
        );
    }

    #[test]
    fn exit_codes() {
        assert_eq!(run("exit 0"), Ok(()));
        assert_eq!(run("exit 3"), Err(Error::ChildProcErrorCode(3)));
    }

    #[test]
    #[cfg(unix)]
    fn flow_receives_environment() {
        assert_eq!(
            run(r#"test "$NEOFLOW_BITSTREAM" = "neorv32_UPduino_MinimalBoot.bit""#),
            Ok(())
        );
        assert_eq!(run(r#"test "$NEOFLOW_DESIGN" = "Minimal""#), Err(Error::ChildProcErrorCode(1)));
    }

    #[test]
    fn spawn_failure() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("setups/osflow");
        let envs = Example::flow_environment("Fomu", None, "Minimal");
        match Example::spawn_flow(&missing, "exit 0", &envs) {
            Err(Error::FlowProcFailed(_)) => (),
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }
}
