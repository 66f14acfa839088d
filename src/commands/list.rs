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

use crate::commands::helps::list;
use crate::core::board;
use crate::core::catalog::ProjectCatalog;
use crate::core::context::Context;
use crate::core::project::Project;
use crate::core::resolver::ExampleResolver;

use cliproc::{cli, proc, stage::*};
use cliproc::{Arg, Cli, Help, Subcommand};
use serde_derive::Serialize;

#[derive(Debug, PartialEq)]
pub struct List {
    boards: bool,
    designs: bool,
    json: bool,
}

impl Subcommand<Context> for List {
    fn interpret<'c>(cli: &'c mut Cli<Memory>) -> cli::Result<Self> {
        cli.help(Help::with(list::HELP))?;
        Ok(List {
            boards: cli.check(Arg::flag("boards"))?,
            designs: cli.check(Arg::flag("designs"))?,
            json: cli.check(Arg::flag("json"))?,
        })
    }

    fn execute(self, c: &Context) -> proc::Result {
        let project = c.get_project();
        if self.boards == true {
            print!("{}", Self::format_boards(project));
        } else if self.designs == true {
            print!("{}", Self::format_designs(project));
        } else {
            let resolver = ExampleResolver::new(project, project.get_flow(), c.get_root());
            let jobs = Self::collect_jobs(project, &resolver);
            match self.json {
                true => println!("{}", serde_json::to_string(&jobs)?),
                false => print!("{}", Self::format_jobs(&jobs)),
            }
        }
        Ok(())
    }
}

/// A buildable example and the bitstream it produces.
#[derive(Debug, PartialEq, Serialize)]
struct Job {
    board: String,
    design: String,
    bitstream: String,
}

impl List {
    fn collect_jobs(project: &Project, resolver: &ExampleResolver<'_, Project>) -> Vec<Job> {
        resolver
            .examples()
            .into_iter()
            .map(|e| {
                let revision = project
                    .get_board_info(&e.board)
                    .and_then(|b| b.get_revision());
                Job {
                    bitstream: board::bitstream(&e.board, revision, &e.design),
                    board: e.board,
                    design: e.design,
                }
            })
            .collect()
    }

    fn format_jobs(jobs: &[Job]) -> String {
        let header = format!(
            "{:<16}{:<16}{}\n{:<16}{:<16}{}\n",
            "Board", "Design", "Bitstream", "-----", "------", "---------"
        );
        jobs.iter().fold(header, |mut acc, j| {
            acc.push_str(&format!("{:<16}{:<16}{}\n", j.board, j.design, j.bitstream));
            acc
        })
    }

    fn format_boards(project: &Project) -> String {
        project.boards().into_iter().fold(String::new(), |mut acc, b| {
            match project.get_board_info(b).and_then(|i| i.get_revision()) {
                Some(rev) => acc.push_str(&format!("{:<16}{}\n", b, rev)),
                None => acc.push_str(&format!("{}\n", b)),
            }
            acc
        })
    }

    fn format_designs(project: &Project) -> String {
        project
            .design_filesets()
            .iter()
            .fold(String::new(), |mut acc, d| {
                acc.push_str(&format!("{}\n", d.quick_info()));
                acc
            })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::board::BoardInfo;
    use crate::core::fileset::DesignFileset;

    fn project() -> Project {
        Project::new()
            .add_board("UPduino", BoardInfo::default().revision("v3"))
            .add_board("iCESugar", BoardInfo::default())
            .add_design(DesignFileset::new("MinimalBoot").vhdl(&["a.vhd"]))
            .add_design(DesignFileset::new("MixedLanguage").vhdl(&["a.vhd"]).verilog(&["b.v"]))
    }

    #[test]
    fn jobs_with_bitstreams() {
        let root = tempfile::tempdir().unwrap();
        let tops = root.path().join("setups/osflow/board_tops");
        std::fs::create_dir_all(&tops).unwrap();
        for top in [
            "neorv32_UPduino_BoardTop_MinimalBoot.vhd",
            "neorv32_iCESugar_BoardTop_MixedLanguage.vhd",
        ] {
            std::fs::write(tops.join(top), "").unwrap();
        }
        let prj = project();
        let resolver = ExampleResolver::new(&prj, prj.get_flow(), root.path());
        let jobs = List::collect_jobs(&prj, &resolver);
        assert_eq!(
            jobs,
            vec![
                Job {
                    board: String::from("UPduino"),
                    design: String::from("MinimalBoot"),
                    bitstream: String::from("neorv32_UPduino_v3_MinimalBoot.bit"),
                },
                Job {
                    board: String::from("iCESugar"),
                    design: String::from("MixedLanguage"),
                    bitstream: String::from("neorv32_iCESugar_MixedLanguage.bit"),
                },
            ]
        );
        assert_eq!(
            serde_json::to_string(&jobs[..1]).unwrap(),
            r#"[{"board":"UPduino","design":"MinimalBoot","bitstream":"neorv32_UPduino_v3_MinimalBoot.bit"}]"#
        );
    }

    #[test]
    fn boards_with_revisions() {
        assert_eq!(
            List::format_boards(&project()),
            "UPduino         v3\niCESugar\n"
        );
    }

    #[test]
    fn designs_in_order() {
        assert_eq!(
            List::format_designs(&project()),
            "MinimalBoot     1 vhdl\nMixedLanguage   1 vhdl, 1 verilog\n"
        );
    }
}
