/*!
A generator of the Luby sequence: 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, …

Restart allowances follow the sequence scaled by some constant, which balances
frequent short runs against occasionally long runs.

The implementation uses the 'reluctant doubling' pair from Knuth's TAOCP
(Vol. 4, 7.2.2.2).
*/

/// The representation of an element of the Luby sequence.
pub type LubyRepresentation = u32;

/// A generator of the Luby sequence, with each call to `next` returning the
/// next element of the sequence.
#[derive(Debug, Clone, Copy)]
pub struct Luby {
    u: LubyRepresentation,
    v: LubyRepresentation,
}

impl Default for Luby {
    fn default() -> Self {
        Luby { u: 1, v: 1 }
    }
}

impl Iterator for Luby {
    type Item = LubyRepresentation;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.v;
        if (self.u & self.u.wrapping_neg()) == self.v {
            self.u = self.u.wrapping_add(1);
            self.v = 1;
        } else {
            self.v = self.v.wrapping_mul(2);
        }
        Some(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_segment() {
        // https://oeis.org/A182105
        let expected: Vec<LubyRepresentation> = vec![
            1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2,
            4, 8, 16,
        ];
        let generated: Vec<LubyRepresentation> = Luby::default().take(expected.len()).collect();

        assert_eq!(generated, expected);
    }
}
