use super::Triangle;

/// The 15 topologically distinct configurations, keyed by solid-corner bits.
///
/// Every other pattern is a rotation, reflection or inversion of one of these.
pub(super) const CANONICAL: [(u8, &[Triangle]); 15] = [
    (0b0000_0000, &[]),
    (0b0000_0001, &[[8, 0, 3]]),
    (0b0000_0011, &[[8, 1, 3], [8, 9, 1]]),
    (0b0000_0101, &[[8, 0, 3], [1, 10, 2]]),
    (0b0100_0001, &[[8, 0, 3], [10, 6, 5]]),
    (0b0011_0010, &[[8, 7, 0], [0, 7, 1], [1, 7, 5]]),
    (0b0100_0011, &[[8, 1, 3], [8, 9, 1], [10, 6, 5]]),
    (0b0100_1010, &[[3, 2, 11], [0, 9, 1], [10, 6, 5]]),
    (0b0011_0011, &[[7, 5, 3], [3, 5, 1]]),
    (0b1011_0001, &[[11, 6, 3], [3, 6, 0], [0, 6, 5], [0, 5, 9]]),
    (0b0110_1001, &[[11, 8, 2], [8, 2, 0], [6, 10, 4], [4, 10, 9]]),
    (0b0111_0001, &[[3, 7, 0], [0, 7, 10], [7, 6, 10], [0, 10, 9]]),
    (0b0011_1010, &[[3, 2, 11], [8, 7, 0], [0, 7, 1], [1, 7, 5]]),
    (0b1010_0101, &[[8, 0, 3], [4, 5, 9], [10, 2, 1], [11, 6, 7]]),
    (0b1011_0010, &[[8, 11, 0], [0, 11, 5], [5, 11, 6], [0, 5, 1]]),
];

/// Hand-picked triangulations for complements of ambiguous configurations.
///
/// Inverting an ambiguous case can land on the other of its two valid face
/// splits, so the resulting surface no longer meets its neighbours along the
/// shared face. These entries choose the split matching the canonical cases.
///
/// Known gap: the reference material also lists corrections for the
/// complements of `0b0110_1001` and `0b1010_0101`. The first was found to be
/// unnecessary and the second looked wrong, so neither is included and those
/// inverted configurations can still leave holes between adjacent cells.
pub(super) const INVERSE_CORRECTIONS: [(u8, &[Triangle]); 4] = [
    (
        255 - 0b0000_0101,
        &[[3, 2, 8], [8, 2, 10], [8, 10, 1], [8, 1, 0]],
    ),
    (
        255 - 0b0100_0011,
        &[[6, 8, 3], [6, 9, 8], [6, 5, 9], [6, 3, 1], [6, 10, 1]],
    ),
    (
        255 - 0b0100_1010,
        &[[3, 11, 0], [0, 11, 6], [0, 6, 9], [9, 6, 5], [1, 10, 2]],
    ),
    (
        255 - 0b0011_1010,
        &[[8, 0, 3], [2, 7, 11], [7, 2, 1], [7, 1, 5]],
    ),
];
