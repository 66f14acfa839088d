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

use crate::core::fileset::join_sources;
use serde_derive::{Deserialize, Serialize};

/// Targets requested from the flow when the caller does not name any.
pub const DEFAULT_TARGETS: [&str; 2] = ["clean", "bit"];

fn default_program() -> String {
    String::from("make")
}

fn default_directory() -> String {
    String::from("setups/osflow")
}

fn default_makefile() -> String {
    String::from("common.mk")
}

/// The external build flow and the control file it is entered through.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Flow {
    #[serde(default = "default_program")]
    program: String,
    #[serde(default = "default_directory")]
    directory: String,
    #[serde(default = "default_makefile")]
    makefile: String,
}

impl Default for Flow {
    fn default() -> Self {
        Self {
            program: default_program(),
            directory: default_directory(),
            makefile: default_makefile(),
        }
    }
}

impl Flow {
    /// Working directory of the flow, relative to the project root.
    pub fn get_directory(&self) -> &str {
        &self.directory
    }

    /// Tokens that enter the flow before any variable assignment.
    fn prefix(&self) -> [String; 5] {
        [
            self.program.clone(),
            String::from("-C"),
            self.directory.clone(),
            String::from("-f"),
            self.makefile.clone(),
        ]
    }
}

/// Formats a single `NAME='value'` assignment for the flow.
fn assign(name: &str, value: &str) -> String {
    format!("{}='{}'", name, value)
}

/// The complete argument list for one invocation of the build flow.
#[derive(Debug, PartialEq, Clone)]
pub struct BuildCommand(Vec<String>);

impl BuildCommand {
    /// Assembles the flow invocation for a fully resolved example.
    ///
    /// Tokens are always emitted in the same order: the flow prefix, the
    /// variable assignments, then the targets. `NEORV32_VERILOG_SRC` is only
    /// assigned when `verilog_srcs` is present. An empty `targets` list
    /// requests [DEFAULT_TARGETS].
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        flow: &Flow,
        board: &str,
        design: &str,
        top: &str,
        id: &str,
        board_srcs: &[String],
        design_srcs: &[String],
        verilog_srcs: Option<&Vec<String>>,
        mem_srcs: &[String],
        targets: &[String],
    ) -> Self {
        let mut cmd: Vec<String> = flow.prefix().into_iter().collect();
        cmd.extend([
            assign("BOARD", board),
            assign("DESIGN", design),
            assign("BOARD_SRC", &join_sources(board_srcs)),
            assign("TOP", top),
            assign("ID", id),
            assign("DESIGN_SRC", &join_sources(design_srcs)),
            assign("NEORV32_MEM_SRC", &join_sources(mem_srcs)),
        ]);
        if let Some(srcs) = verilog_srcs {
            cmd.push(assign("NEORV32_VERILOG_SRC", &join_sources(srcs)));
        }
        match targets.is_empty() {
            true => cmd.extend(DEFAULT_TARGETS.iter().map(|t| t.to_string())),
            false => cmd.extend(targets.iter().cloned()),
        }
        Self(cmd)
    }

    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    pub fn into_tokens(self) -> Vec<String> {
        self.0
    }
}

impl std::fmt::Display for BuildCommand {
    /// Joins the tokens with single spaces into a shell-ready line.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join(" "))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn strings(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn minimal(verilog: Option<&Vec<String>>, targets: &[String]) -> BuildCommand {
        BuildCommand::new(
            &Flow::default(),
            "Fomu",
            "Minimal",
            "neorv32_Fomu_BoardTop_Minimal",
            "Minimal",
            &strings(&["board_tops/neorv32_Fomu_BoardTop_Minimal.vhd"]),
            &strings(&["a.vhd", "b.vhd"]),
            verilog,
            &strings(&["boot.mem", "ram.vhd"]),
            targets,
        )
    }

    #[test]
    fn token_order() {
        let cmd = minimal(None, &[]);
        assert_eq!(
            cmd.tokens(),
            strings(&[
                "make",
                "-C",
                "setups/osflow",
                "-f",
                "common.mk",
                "BOARD='Fomu'",
                "DESIGN='Minimal'",
                "BOARD_SRC='board_tops/neorv32_Fomu_BoardTop_Minimal.vhd'",
                "TOP='neorv32_Fomu_BoardTop_Minimal'",
                "ID='Minimal'",
                "DESIGN_SRC='a.vhd b.vhd'",
                "NEORV32_MEM_SRC='boot.mem ram.vhd'",
                "clean",
                "bit",
            ])
            .as_slice()
        );
    }

    #[test]
    fn deterministic() {
        let verilog = strings(&["x.v", "y.v"]);
        let targets = strings(&["synth", "impl"]);
        assert_eq!(
            minimal(Some(&verilog), &targets).to_string(),
            minimal(Some(&verilog), &targets).to_string()
        );
    }

    #[test]
    fn explicit_targets_replace_defaults() {
        let cmd = minimal(None, &strings(&["synth"]));
        assert_eq!(cmd.tokens().last(), Some(&String::from("synth")));
        assert_eq!(cmd.tokens().iter().filter(|t| *t == "clean" || *t == "bit").count(), 0);
    }

    #[test]
    fn absent_verilog_is_omitted() {
        let cmd = minimal(None, &[]);
        assert!(cmd
            .tokens()
            .iter()
            .all(|t| t.starts_with("NEORV32_VERILOG_SRC=") == false));
    }

    #[test]
    fn empty_verilog_is_assigned() {
        let cmd = minimal(Some(&Vec::new()), &[]);
        let tokens = cmd.into_tokens();
        // verilog comes right after the memory sources and before the targets
        assert_eq!(tokens[12], "NEORV32_VERILOG_SRC=''");
        assert_eq!(&tokens[13..], &strings(&["clean", "bit"])[..]);
    }

    #[test]
    fn verilog_sources_joined() {
        let verilog = strings(&["x.v", "y.v"]);
        let cmd = minimal(Some(&verilog), &[]);
        assert_eq!(cmd.tokens()[12], "NEORV32_VERILOG_SRC='x.v y.v'");
    }

    #[test]
    fn custom_flow_prefix() {
        let flow: Flow = toml::from_str("program = \"gmake\"\ndirectory = \"flow\"").unwrap();
        let cmd = BuildCommand::new(&flow, "B", "D", "T", "D", &[], &[], None, &[], &[]);
        assert_eq!(
            cmd.to_string(),
            "gmake -C flow -f common.mk BOARD='B' DESIGN='D' BOARD_SRC='' TOP='T' ID='D' DESIGN_SRC='' NEORV32_MEM_SRC='' clean bit"
        );
    }
}
