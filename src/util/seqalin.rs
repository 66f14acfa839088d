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

//! Min-cost sequence alignment used to suggest the closest known board or
//! design name when the user misspells one.

type Cost = usize;

/// Maximum alignment cost for a name to still be offered as a suggestion.
pub const SUGGEST_THRESHOLD: Cost = 4;

/// Computes the min-cost alignment between `s1` and `s2` with the given gap
/// and mismatch penalties.
///
/// Only two rows of the table are kept since each row depends solely on the
/// one before it.
fn sequence_alignment(s1: &str, s2: &str, gap_penalty: Cost, mismatch_penalty: Cost) -> Cost {
    let s2: Vec<char> = s2.chars().collect();
    let mut prev: Vec<Cost> = (0..=s2.len()).map(|j| j * gap_penalty).collect();
    let mut curr: Vec<Cost> = vec![0; s2.len() + 1];
    for (i, c1) in s1.chars().enumerate() {
        curr[0] = (i + 1) * gap_penalty;
        for (j, c2) in s2.iter().enumerate() {
            let diag = prev[j] + mismatch_penalty * ((c1 != *c2) as Cost);
            let up = prev[j + 1] + gap_penalty;
            let left = curr[j] + gap_penalty;
            curr[j + 1] = diag.min(up).min(left);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[s2.len()]
}

/// Selects the word in `bank` closest to `s` if its cost is below `threshold`.
///
/// Comparison ignores ascii case, so `upduino` will suggest `UPduino`.
pub fn sel_min_edit_str<'a, T: AsRef<str>>(
    s: &str,
    bank: &'a [T],
    threshold: Cost,
) -> Option<&'a str> {
    let s = s.to_ascii_lowercase();
    let (w, c) = bank
        .iter()
        .map(|f| {
            (
                f,
                sequence_alignment(&s, &f.as_ref().to_ascii_lowercase(), 1, 1),
            )
        })
        .min_by(|x, y| x.1.cmp(&y.1))?;
    match c < threshold {
        true => Some(w.as_ref()),
        false => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn alignment_costs() {
        assert_eq!(sequence_alignment("identity", "similarity", 2, 1), 8);
        assert_eq!(sequence_alignment("palate", "palette", 2, 1), 3);
        assert_eq!(sequence_alignment("stop", "tops", 2, 1), 4);
        assert_eq!(sequence_alignment("", "alpha", 2, 1), 10);
        assert_eq!(sequence_alignment("", "", 2, 1), 0);
        assert_eq!(sequence_alignment("Fomu", "Fomu", 1, 1), 0);
        // case sensitivity is not applied inside the fn
        assert_eq!(sequence_alignment("FOMU", "fomu", 2, 1), 4);
    }

    #[test]
    fn closest_board() {
        let bank: Vec<&str> = vec![];
        assert_eq!(sel_min_edit_str("Fomu", &bank, SUGGEST_THRESHOLD), None);

        let bank = vec!["UPduino", "Fomu", "iCEBreaker", "iCESugar", "OrangeCrab", "ULX3S"];
        assert_eq!(sel_min_edit_str("upduino", &bank, SUGGEST_THRESHOLD), Some("UPduino"));
        assert_eq!(sel_min_edit_str("Fumo", &bank, SUGGEST_THRESHOLD), Some("Fomu"));
        assert_eq!(sel_min_edit_str("icebraker", &bank, SUGGEST_THRESHOLD), Some("iCEBreaker"));
        assert_eq!(sel_min_edit_str("Arty", &bank, SUGGEST_THRESHOLD), None);
    }
}
