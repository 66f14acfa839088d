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

pub const MANUAL: &str = r#"NAME
    list - view the available examples, boards, or designs

SYNOPSIS
    neoflow list [options]

DESCRIPTION
    Without options, lists every board and design pair that has a board top,
    together with the name of the bitstream the flow produces for it.

    The '--json' output is an array of objects with the keys 'board',
    'design', and 'bitstream', suitable for a ci job matrix.

OPTIONS
    --boards
        List the known boards and their revisions.

    --designs
        List the known designs and their filesets.

    --json
        Print the examples as a json job matrix.

EXAMPLES
    neoflow list
    neoflow list --designs
    neoflow list --json
"#;
