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

use crate::core::board::BoardInfo;
use crate::core::catalog::ProjectCatalog;
use crate::core::command::Flow;
use crate::core::fileset::DesignFileset;
use crate::error::{Error, LastError};
use serde_derive::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const PROJECT_FILE: &str = "neoflow.toml";

const DEFAULT_BOARDS_TOPS: &str = "board_tops";

fn default_boards_tops() -> PathBuf {
    PathBuf::from(DEFAULT_BOARDS_TOPS)
}

/// A rule mapping (board, design) pairs onto memory initialization sources.
///
/// A missing filter matches any value.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryRule {
    board: Option<String>,
    design: Option<String>,
    sources: Vec<String>,
}

impl MemoryRule {
    pub fn new(sources: &[&str]) -> Self {
        Self {
            board: None,
            design: None,
            sources: sources.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn board(mut self, board: &str) -> Self {
        self.board = Some(board.to_string());
        self
    }

    pub fn design(mut self, design: &str) -> Self {
        self.design = Some(design.to_string());
        self
    }

    pub fn matches(&self, board: &str, design: &str) -> bool {
        self.board.as_ref().map_or(true, |b| b == board)
            && self.design.as_ref().map_or(true, |d| d == design)
    }
}

/// The project catalog as described by the `neoflow.toml` file.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Project {
    #[serde(rename = "boards-tops", default = "default_boards_tops")]
    boards_tops: PathBuf,
    #[serde(default)]
    flow: Flow,
    #[serde(default)]
    board: BTreeMap<String, BoardInfo>,
    #[serde(default)]
    design: Vec<DesignFileset>,
    #[serde(default)]
    memory: Vec<MemoryRule>,
}

impl Project {
    pub fn new() -> Self {
        Self {
            boards_tops: default_boards_tops(),
            flow: Flow::default(),
            board: BTreeMap::new(),
            design: Vec::new(),
            memory: Vec::new(),
        }
    }

    pub fn boards_tops(mut self, dir: &str) -> Self {
        self.boards_tops = PathBuf::from(dir);
        self
    }

    pub fn flow(mut self, flow: Flow) -> Self {
        self.flow = flow;
        self
    }

    pub fn add_board(mut self, name: &str, info: BoardInfo) -> Self {
        self.board.insert(name.to_string(), info);
        self
    }

    pub fn add_design(mut self, fset: DesignFileset) -> Self {
        self.design.push(fset);
        self
    }

    pub fn add_memory(mut self, rule: MemoryRule) -> Self {
        self.memory.push(rule);
        self
    }

    /// Reads and validates the project file at `path`.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::ProjectFileInvalid(path.to_path_buf(), LastError(e.to_string()))
        })?;
        let project = Self::from_str(&contents).map_err(|e| {
            Error::ProjectFileInvalid(path.to_path_buf(), LastError(e.to_string()))
        })?;
        project.validate()?;
        Ok(project)
    }

    /// Verifies every memory rule only references declared boards.
    pub fn validate(&self) -> Result<(), Error> {
        for (i, rule) in self.memory.iter().enumerate() {
            if let Some(b) = &rule.board {
                if self.board.contains_key(b) == false {
                    return Err(Error::MemoryRuleUnknownBoard(i, b.clone()));
                }
            }
        }
        Ok(())
    }

    pub fn get_flow(&self) -> &Flow {
        &self.flow
    }

    pub fn get_board_info(&self, name: &str) -> Option<&BoardInfo> {
        self.board.get(name)
    }
}

impl FromStr for Project {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

impl ProjectCatalog for Project {
    fn boards(&self) -> BTreeSet<&str> {
        self.board.keys().map(|k| k.as_str()).collect()
    }

    fn design_filesets(&self) -> &[DesignFileset] {
        &self.design
    }

    fn boards_tops_dir(&self) -> &Path {
        &self.boards_tops
    }

    fn memory_sources(&self, board: &str, design: &str) -> Vec<String> {
        self.memory
            .iter()
            .filter(|r| r.matches(board, design))
            .flat_map(|r| r.sources.iter().cloned())
            .collect()
    }
}
