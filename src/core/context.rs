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

use crate::core::project::Project;
use crate::error::{Error, Hint};
use crate::util::anyerror::{AnyError, Fault};
use crate::util::environment::Environment;
use crate::util::filesystem;
use std::path::{Path, PathBuf};

/// Process-wide state loaded once before a command executes.
pub struct Context {
    root: PathBuf,
    project: Project,
}

impl Context {
    pub fn new() -> Context {
        Context {
            root: PathBuf::new(),
            project: Project::new(),
        }
    }

    /// Sets the project root directory.
    ///
    /// The environment variable `key` takes precedence and must name an
    /// existing directory. Otherwise the closest directory to the current
    /// working directory containing `file` is used.
    pub fn root(mut self, key: &str, file: &str) -> Result<Context, Fault> {
        let cwd = std::env::current_dir()?;
        self.root = Self::locate_root(Environment::read(key), &cwd, key, file)?;
        Ok(self)
    }

    fn locate_root(
        from_env: Option<String>,
        cwd: &Path,
        key: &str,
        file: &str,
    ) -> Result<PathBuf, Fault> {
        match from_env {
            Some(s) => {
                let dir = filesystem::resolve_rel_path(cwd, &s);
                // do not allow a nonexistent directory to be set for the root
                match dir.is_dir() {
                    true => Ok(dir),
                    false => Err(AnyError(format!(
                        "directory {} does not exist for {}",
                        dir.display(),
                        key
                    )))?,
                }
            }
            None => match filesystem::find_in_ancestors(cwd, file) {
                Some(dir) => Ok(dir),
                None => Err(Error::ProjectFileMissing(Hint::ProjectRoot))?,
            },
        }
    }

    /// Loads the project catalog from `file` directly under the root.
    pub fn project(mut self, file: &str) -> Result<Context, Error> {
        self.project = Project::from_file(&self.root.join(file))?;
        Ok(self)
    }

    pub fn get_root(&self) -> &PathBuf {
        &self.root
    }

    pub fn get_project(&self) -> &Project {
        &self.project
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::catalog::ProjectCatalog;
    use crate::core::project::PROJECT_FILE;

    const KEY: &str = "NEOFLOW_ROOT";

    #[test]
    fn root_from_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().join("setups/osflow");
        std::fs::create_dir_all(&cwd).unwrap();
        std::fs::write(dir.path().join(PROJECT_FILE), "").unwrap();

        let root = Context::locate_root(None, &cwd, KEY, PROJECT_FILE).unwrap();
        assert_eq!(root, dir.path().to_path_buf());
    }

    #[test]
    fn root_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = Context::locate_root(None, dir.path(), KEY, PROJECT_FILE).unwrap_err();
        assert_eq!(
            err.to_string(),
            Error::ProjectFileMissing(Hint::ProjectRoot).to_string()
        );
    }

    #[test]
    fn root_from_environment() {
        let dir = tempfile::tempdir().unwrap();
        let root = Context::locate_root(
            Some(dir.path().display().to_string()),
            Path::new("/"),
            KEY,
            PROJECT_FILE,
        )
        .unwrap();
        assert_eq!(root, dir.path().to_path_buf());

        let bad = dir.path().join("missing");
        assert!(Context::locate_root(
            Some(bad.display().to_string()),
            Path::new("/"),
            KEY,
            PROJECT_FILE
        )
        .is_err());
    }

    #[test]
    fn load_project() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(PROJECT_FILE),
            "[board.Fomu]\nrevision = \"pvt\"\n",
        )
        .unwrap();
        let mut c = Context::new();
        c.root = dir.path().to_path_buf();
        let c = c.project(PROJECT_FILE).unwrap();
        assert_eq!(c.get_project().boards().len(), 1);
    }
}
