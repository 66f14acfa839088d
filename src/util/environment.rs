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

use std::collections::btree_set::BTreeSet;
use std::collections::btree_set::Iter;
use std::collections::HashMap;
use std::hash::Hash;

#[derive(Eq)]
pub struct EnvVar {
    key: String,
    value: String,
}

impl PartialEq for EnvVar {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Ord for EnvVar {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

impl PartialOrd for EnvVar {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for EnvVar {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // only hash by the key name
        self.key.hash(state);
    }
}

impl EnvVar {
    pub fn with(key: &str, value: &str) -> Self {
        Self {
            // normalize the key name upon entry
            key: key.to_ascii_uppercase().replace('-', "_"),
            value: value.to_owned(),
        }
    }

    pub fn get_key(&self) -> &str {
        &self.key
    }

    pub fn get_value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Debug for EnvVar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}=\"{}\"", self.key, self.value)
    }
}

impl std::fmt::Display for EnvVar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// The set of variables handed to the build flow's process.
#[derive(Debug, PartialEq)]
pub struct Environment(BTreeSet<EnvVar>);

impl Environment {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Adds `var` to the set, keeping the existing value if the key was
    /// already present.
    pub fn add(mut self, var: EnvVar) -> Self {
        self.0.insert(var);
        self
    }

    pub fn iter(&self) -> Iter<'_, EnvVar> {
        self.0.iter()
    }

    pub fn get(&self, key: &str) -> Option<&EnvVar> {
        self.0.iter().find(|e| e.key == key)
    }

    pub fn into_map(&self) -> HashMap<&String, &String> {
        self.0.iter().map(|e| (&e.key, &e.value)).collect()
    }

    pub fn read(key: &str) -> Option<String> {
        match std::env::var(key) {
            Ok(v) => Some(v),
            Err(_) => None,
        }
    }
}

pub const NO_COLOR: &str = "NO_COLOR";

pub const NEOFLOW_ROOT: &str = "NEOFLOW_ROOT";
pub const NEOFLOW_BOARD: &str = "NEOFLOW_BOARD";
pub const NEOFLOW_DESIGN: &str = "NEOFLOW_DESIGN";
pub const NEOFLOW_BITSTREAM: &str = "NEOFLOW_BITSTREAM";

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keys_are_normalized() {
        let var = EnvVar::with("neoflow-board", "Fomu");
        assert_eq!(var.get_key(), NEOFLOW_BOARD);
        assert_eq!(var.to_string(), "NEOFLOW_BOARD=Fomu");
    }

    #[test]
    fn first_value_wins() {
        let envs = Environment::new()
            .add(EnvVar::with(NEOFLOW_BOARD, "Fomu"))
            .add(EnvVar::with(NEOFLOW_BOARD, "UPduino"))
            .add(EnvVar::with(NEOFLOW_DESIGN, "Minimal"));
        assert_eq!(envs.iter().count(), 2);
        assert_eq!(envs.get(NEOFLOW_BOARD).unwrap().get_value(), "Fomu");
        assert_eq!(envs.into_map().len(), 2);
    }
}
