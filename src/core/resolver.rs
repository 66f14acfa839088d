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

use crate::core::board;
use crate::core::catalog::ProjectCatalog;
use crate::core::command::{BuildCommand, Flow};
use crate::error::{Error, Hint};
use crate::util::filesystem;
use crate::util::seqalin;
use std::path::{Path, PathBuf};

/// A (board, design) pair with a wired board top.
#[derive(Debug, PartialEq, Clone)]
pub struct Example {
    pub board: String,
    pub design: String,
}

/// Turns (board, design) requests into build flow invocations.
///
/// Every request is checked against the catalog and the board top source
/// on disk before any command is produced.
pub struct ExampleResolver<'a, C: ProjectCatalog> {
    catalog: &'a C,
    flow: &'a Flow,
    flow_dir: PathBuf,
}

impl<'a, C: ProjectCatalog> ExampleResolver<'a, C> {
    /// Creates a resolver for a project rooted at `root`.
    ///
    /// Board top paths are resolved from the flow's working directory, which is
    /// where the flow itself will read them from.
    pub fn new(catalog: &'a C, flow: &'a Flow, root: &Path) -> Self {
        Self {
            catalog,
            flow,
            flow_dir: filesystem::resolve_rel_path(root, flow.get_directory()),
        }
    }

    /// Validates the `board` and `design` pair and assembles the command that
    /// runs `targets` for it.
    ///
    /// An empty `targets` list runs the flow's default targets.
    pub fn resolve(
        &self,
        board: &str,
        design: &str,
        targets: &[String],
    ) -> Result<BuildCommand, Error> {
        let boards = self.catalog.boards();
        if boards.contains(board) == false {
            let bank: Vec<&str> = boards.into_iter().collect();
            return Err(Error::UnknownBoard(
                board.to_string(),
                Self::hint(board, &bank, Hint::BoardsList),
            ));
        }

        let fileset = match self.catalog.find_design(design) {
            Some(f) => f,
            None => {
                let bank: Vec<&str> = self
                    .catalog
                    .design_filesets()
                    .iter()
                    .map(|d| d.get_name())
                    .collect();
                return Err(Error::UnknownDesign(
                    design.to_string(),
                    Self::hint(design, &bank, Hint::DesignsList),
                ));
            }
        };

        let top = board::board_top(board, design);
        let board_src = self.board_top_source(&top);
        let on_disk = self.flow_dir.join(&board_src);
        if on_disk.is_file() == false {
            return Err(Error::MissingBoardTop(top, on_disk, Hint::ExamplesList));
        }

        Ok(BuildCommand::new(
            self.flow,
            board,
            design,
            &top,
            design,
            &[filesystem::into_std_str(&board_src)],
            fileset.get_vhdl(),
            fileset.get_verilog(),
            &self.catalog.memory_sources(board, design),
            targets,
        ))
    }

    /// Lists every board and design pair whose board top exists, ordered by
    /// board and then by design declaration.
    pub fn examples(&self) -> Vec<Example> {
        self.catalog
            .boards()
            .into_iter()
            .flat_map(|b| {
                self.catalog
                    .design_filesets()
                    .iter()
                    .map(move |d| (b, d.get_name()))
            })
            .filter(|(b, d)| {
                self.flow_dir
                    .join(self.board_top_source(&board::board_top(b, d)))
                    .is_file()
            })
            .map(|(b, d)| Example {
                board: b.to_string(),
                design: d.to_string(),
            })
            .collect()
    }

    /// Path of the board top source as seen from the flow's directory.
    fn board_top_source(&self, top: &str) -> PathBuf {
        self.catalog
            .boards_tops_dir()
            .join(format!("{}.vhd", top))
    }

    fn hint(word: &str, bank: &[&str], fallback: Hint) -> Hint {
        match seqalin::sel_min_edit_str(word, bank, seqalin::SUGGEST_THRESHOLD) {
            Some(w) => Hint::Suggestion(w.to_string()),
            None => fallback,
        }
    }
}
