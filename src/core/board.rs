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

use serde_derive::{Deserialize, Serialize};

/// Prefix shared by every generated module and artifact name.
pub const PREFIX: &str = "neorv32";

/// Optional per-board details stored in the project file.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardInfo {
    revision: Option<String>,
}

impl BoardInfo {
    pub fn revision(mut self, rev: &str) -> Self {
        self.revision = Some(rev.to_string());
        self
    }

    pub fn get_revision(&self) -> Option<&String> {
        self.revision.as_ref()
    }
}

/// Creates the name of the top-level entity that places `design` on `board`.
///
/// The board top's source file is expected to share this name with a `.vhd`
/// extension.
pub fn board_top(board: &str, design: &str) -> String {
    format!("{}_{}_BoardTop_{}", PREFIX, board, design)
}

/// Creates the file name of the bitstream the flow produces for an example.
///
/// The board's revision is only part of the artifact name and never of the
/// board top.
pub fn bitstream(board: &str, revision: Option<&String>, design: &str) -> String {
    match revision {
        Some(rev) => format!("{}_{}_{}_{}.bit", PREFIX, board, rev, design),
        None => format!("{}_{}_{}.bit", PREFIX, board, design),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn board_top_name() {
        assert_eq!(
            board_top("UPduino", "MinimalBoot"),
            "neorv32_UPduino_BoardTop_MinimalBoot"
        );
        assert_eq!(board_top("ULX3S", "Minimal"), "neorv32_ULX3S_BoardTop_Minimal");
    }

    #[test]
    fn bitstream_name() {
        let info = BoardInfo::default().revision("r02-25F");
        assert_eq!(
            bitstream("OrangeCrab", info.get_revision(), "MinimalBoot"),
            "neorv32_OrangeCrab_r02-25F_MinimalBoot.bit"
        );
        assert_eq!(
            bitstream("iCEBreaker", None, "UP5KDemo"),
            "neorv32_iCEBreaker_UP5KDemo.bit"
        );
    }

    #[test]
    fn from_toml_string() {
        let info: BoardInfo = toml::from_str("revision = \"pvt\"").unwrap();
        assert_eq!(info, BoardInfo::default().revision("pvt"));
        let info: BoardInfo = toml::from_str("").unwrap();
        assert_eq!(info.get_revision(), None);
        assert!(toml::from_str::<BoardInfo>("family = \"ice40\"").is_err());
    }
}
