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

use crate::core::fileset::DesignFileset;
use std::collections::BTreeSet;
use std::path::Path;

/// Read-only view of the boards, designs, and memory sources known to the
/// project.
///
/// The resolver only depends on this trait so it can be driven from the
/// project file or from an in-memory catalog.
pub trait ProjectCatalog {
    /// Every board the flow supports.
    fn boards(&self) -> BTreeSet<&str>;

    /// Per-design source manifests, in declaration order.
    fn design_filesets(&self) -> &[DesignFileset];

    /// Directory holding the board top sources, as referenced by the build
    /// flow (relative to the flow's working directory).
    fn boards_tops_dir(&self) -> &Path;

    /// Memory initialization sources for the `board` and `design` pair.
    fn memory_sources(&self, board: &str, design: &str) -> Vec<String>;

    /// Finds the first design fileset named exactly `name`.
    fn find_design(&self, name: &str) -> Option<&DesignFileset> {
        self.design_filesets()
            .iter()
            .find(|d| d.get_name() == name)
    }
}
