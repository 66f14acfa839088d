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

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Child, Command};

/// Finds the closest directory to `dir` (itself included) that directly
/// contains a file named `name`.
///
/// Walks upward through the parents of `dir` and stops at the first match.
pub fn find_in_ancestors(dir: &Path, name: &str) -> Option<PathBuf> {
    dir.ancestors()
        .find(|p| p.join(name).is_file())
        .map(|p| p.to_path_buf())
}

/// Resolves a relative path into a full path if given relative to some `root` path.
///
/// Absolute paths are returned unmodified.
pub fn resolve_rel_path(root: &Path, s: &str) -> PathBuf {
    let path = PathBuf::from(s);
    match path.is_relative() {
        true => root.join(path),
        false => path,
    }
}

/// Converts a path into a string with forward slashes as separators.
///
/// The build flow is a makefile, so paths handed to it should not carry
/// windows-style separators.
pub fn into_std_str(path: &Path) -> String {
    path.display().to_string().replace('\\', "/")
}

/// Spawns `line` through the platform's shell from the directory `cwd`.
///
/// The line is passed as a single argument so the shell is responsible for
/// interpreting any quoting within it.
pub fn invoke_shell(
    cwd: &Path,
    line: &str,
    envs: HashMap<&String, &String>,
) -> std::io::Result<Child> {
    let (shell, flag) = match cfg!(windows) {
        true => ("cmd", "/C"),
        false => ("sh", "-c"),
    };
    Command::new(shell)
        .arg(flag)
        .arg(line)
        .current_dir(cwd)
        .envs(envs)
        .spawn()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn find_project_in_parents() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("sw/example/hello");
        std::fs::create_dir_all(&nested).unwrap();
        assert_eq!(find_in_ancestors(&nested, "neoflow.toml"), None);

        std::fs::write(root.path().join("neoflow.toml"), "").unwrap();
        assert_eq!(
            find_in_ancestors(&nested, "neoflow.toml"),
            Some(root.path().to_path_buf())
        );
        // a directory with the same name does not count
        std::fs::create_dir_all(nested.join("neoflow.toml")).unwrap();
        assert_eq!(
            find_in_ancestors(&nested, "neoflow.toml"),
            Some(root.path().to_path_buf())
        );
    }

    #[test]
    fn resolve_path_simple() {
        let root = PathBuf::from("/opt/neorv32");
        assert_eq!(
            resolve_rel_path(&root, "setups/osflow"),
            PathBuf::from("/opt/neorv32/setups/osflow")
        );
        assert_eq!(resolve_rel_path(&root, "/tmp/flow"), PathBuf::from("/tmp/flow"));
    }

    #[test]
    fn forward_slashes() {
        assert_eq!(
            into_std_str(&PathBuf::from("board_tops\\neorv32_Fomu_BoardTop_Minimal.vhd")),
            String::from("board_tops/neorv32_Fomu_BoardTop_Minimal.vhd")
        );
    }
}
