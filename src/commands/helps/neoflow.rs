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

pub const HELP: &str = r#"Neoflow resolves NEORV32 board and design examples into osflow builds.

Usage:
    neoflow [options] [command]

Commands:
    example               print or run the build for a board and design
    list                  view the available examples, boards, or designs
    help                  read in-depth documentation

Options:
    --version             print version information and exit
    --color <when>        coloring: auto, always, never
    --help, -h            print help information

Use 'neoflow help <command>' for more information about a command."#;
